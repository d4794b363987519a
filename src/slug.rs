use std::sync::LazyLock;

use regex::Regex;

static NON_ALNUM_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^0-9a-z]+").unwrap());

/// Turn heading text into an id usable in attributes and URLs:
/// lowercase, runs of anything outside `[0-9a-z]` become one hyphen,
/// then leading/trailing spaces and hyphens are stripped.
pub fn slugify(text: &str) -> String {
    let lower = text.to_lowercase();
    NON_ALNUM_RE
        .replace_all(&lower, "-")
        .trim_matches([' ', '-'])
        .to_string()
}

/// Strip leading/trailing line breaks only; inner and edge spaces are kept.
pub fn trim_newlines(text: &str) -> &str {
    text.trim_matches(['\n', '\r'])
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_runs() {
        assert_eq!(slugify("A/B  C"), "a-b-c");
        assert_eq!(slugify("Foo Bar"), "foo-bar");
    }

    #[test]
    fn strips_edges() {
        assert_eq!(slugify("  (Imaging) "), "imaging");
        assert_eq!(slugify("\nNeural Networks\n"), "neural-networks");
    }

    #[test]
    fn idempotent_on_slugs() {
        for s in ["foo-bar", "a-b-c", "k-means-3d", ""] {
            assert_eq!(slugify(&slugify(s)), slugify(s));
            assert_eq!(slugify(s), s);
        }
    }

    #[test]
    fn empty_and_symbol_only() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("   "), "");
        assert_eq!(slugify("--!!--"), "");
    }

    #[test]
    fn non_ascii_is_separator() {
        assert_eq!(slugify("Café Tools"), "caf-tools");
    }

    #[test]
    fn trim_newlines_keeps_spaces() {
        assert_eq!(trim_newlines("\r\n Foo Bar \n"), " Foo Bar ");
        assert_eq!(trim_newlines("Baz"), "Baz");
    }
}
