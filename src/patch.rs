use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::error::BuildError;
use crate::model::Sample;
use crate::render;

static LINE_ENDING_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\r\n|\n\r|\n|\r").unwrap());

/// A replaceable span of the host page, delimited by two literal markers.
pub struct Region {
    pub name: &'static str,
    pub start: &'static str,
    pub end: &'static str,
    pub render: fn(&[Sample]) -> String,
}

/// Regions in the order they are patched.
pub const REGIONS: &[Region] = &[
    Region {
        name: "categories",
        start: "<!-- BEGIN CATEGORIES -->",
        end: "<!-- END CATEGORIES -->",
        render: render::category_menu,
    },
    Region {
        name: "thumbnails",
        start: "<!-- BEGIN THUMBNAILS -->",
        end: "<!-- END THUMBNAILS -->",
        render: render::thumbnails,
    },
    Region {
        name: "text",
        start: "<!-- BEGIN TEXT -->",
        end: "<!-- END TEXT -->",
        render: render::text_blocks,
    },
    Region {
        name: "javascript",
        start: "// BEGIN JAVASCRIPT",
        end: "// END JAVASCRIPT",
        render: render::behavior_script,
    },
];

/// Replace everything between the first `start` and the last `end` with
/// `fragment`. Both markers stay in the output.
pub fn replace_region(
    host: &str,
    fragment: &str,
    start: &str,
    end: &str,
) -> Result<String, BuildError> {
    let missing = |marker: &str| BuildError::MissingMarker {
        marker: marker.to_string(),
    };

    let begin = host.find(start).ok_or_else(|| missing(start))?;
    let finish = host.rfind(end).ok_or_else(|| missing(end))?;
    let content_start = begin + start.len();
    if finish < content_start {
        return Err(missing(end));
    }

    let mut out = String::with_capacity(host.len() - (finish - content_start) + fragment.len());
    out.push_str(&host[..content_start]);
    out.push_str(fragment);
    out.push_str(&host[finish..]);
    Ok(out)
}

/// Every CR, LF, CRLF or LFCR becomes a single CRLF.
pub fn normalize_line_endings(text: &str) -> String {
    LINE_ENDING_RE.replace_all(text, "\r\n").into_owned()
}

/// Render every region from `samples`, patch them into `host` one after
/// another, then normalize line endings.
pub fn patch_page(host: &str, samples: &[Sample]) -> Result<String, BuildError> {
    let mut page = host.to_string();
    for region in REGIONS {
        let fragment = (region.render)(samples);
        page = replace_region(&page, &fragment, region.start, region.end)?;
        debug!("Patched {} region ({} bytes)", region.name, fragment.len());
    }
    Ok(normalize_line_endings(&page))
}

// ── Tests ──
