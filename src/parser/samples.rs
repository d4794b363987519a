use std::collections::HashSet;

use super::blocks::Block;
use crate::model::{Category, Sample};

const ZIP_SUFFIX: &str = ".zip";

/// Group a flat Vec<Block> into samples, each tagged with the category
/// heading that preceded it. Single forward pass.
pub fn group_samples(blocks: &[Block]) -> Vec<Sample> {
    let mut samples: Vec<Sample> = Vec::new();
    let mut category: Option<Category> = None;
    let mut open: Option<usize> = None;
    let mut body = String::new();
    let mut ordinal = 0;

    for block in blocks {
        match block {
            Block::Heading { level: 1, text } => {
                close(&mut samples, open.take(), &mut body);
                category = Some(Category::from_heading(ordinal, text));
                ordinal += 1;
            }
            Block::Heading { text, .. } => {
                close(&mut samples, open.take(), &mut body);
                let index = samples.len();
                samples.push(Sample::from_heading(category.clone(), index, text));
                open = Some(index);
            }
            Block::Body { html, image, link } => {
                // Content before the first sample heading has no owner.
                let Some(i) = open else { continue };
                let sample = &mut samples[i];
                if sample.image.is_none() {
                    sample.image = image.clone();
                }
                if sample.zip_url.is_none() {
                    sample.zip_url = link.as_ref().filter(|url| url.ends_with(ZIP_SUFFIX)).cloned();
                }
                body.push_str(html);
            }
        }
    }

    close(&mut samples, open, &mut body);
    samples
}

fn close(samples: &mut [Sample], open: Option<usize>, body: &mut String) {
    if let Some(i) = open {
        samples[i].body_text = std::mem::take(body);
    }
    body.clear();
}

/// Distinct categories in first-occurrence order. Categories without
/// samples never show up here.
pub fn categories(samples: &[Sample]) -> Vec<&Category> {
    let mut seen = HashSet::new();
    samples
        .iter()
        .filter_map(|s| s.category.as_ref())
        .filter(|c| seen.insert(c.ordinal))
        .collect()
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    fn h1(text: &str) -> Block {
        Block::Heading { level: 1, text: text.into() }
    }

    fn h2(text: &str) -> Block {
        Block::Heading { level: 2, text: text.into() }
    }

    fn body(html: &str, image: Option<&str>, link: Option<&str>) -> Block {
        Block::Body {
            html: html.into(),
            image: image.map(Into::into),
            link: link.map(Into::into),
        }
    }

    fn text(html: &str) -> Block {
        body(html, None, None)
    }

    #[test]
    fn one_category_two_samples() {
        let samples = group_samples(&[h1("Imaging"), h2("Blob"), h2("Hough")]);
        assert_eq!(samples.len(), 2);
        assert_eq!(samples[0].index, 0);
        assert_eq!(samples[1].index, 1);
        assert!(samples.iter().all(|s| s.category_id() == "imaging"));

        let cats = categories(&samples);
        assert_eq!(cats.len(), 1);
        assert_eq!(cats[0].name, "Imaging");
    }

    #[test]
    fn indices_continue_across_categories() {
        let samples = group_samples(&[h1("A"), h2("a1"), h1("B"), h2("b1"), h2("b2")]);
        let idx: Vec<usize> = samples.iter().map(|s| s.index).collect();
        assert_eq!(idx, vec![0, 1, 2]);
        assert_eq!(samples[0].category_id(), "a");
        assert_eq!(samples[2].category_id(), "b");
    }

    #[test]
    fn body_stops_at_next_heading() {
        let samples = group_samples(&[
            h1("A"),
            h2("one"),
            text("<p>1</p>"),
            text("<p>2</p>"),
            h2("two"),
            text("<p>3</p>"),
            h1("B"),
            text("<p>orphan</p>"),
            h2("three"),
        ]);
        assert_eq!(samples[0].body_text, "<p>1</p><p>2</p>");
        assert_eq!(samples[1].body_text, "<p>3</p>");
        assert_eq!(samples[2].body_text, "");
    }

    #[test]
    fn content_before_first_sample_dropped() {
        let samples = group_samples(&[
            text("<p>preamble</p>"),
            h1("A"),
            body("<p>intro</p>", Some("intro.png"), Some("intro.zip")),
            h2("one"),
        ]);
        assert_eq!(samples.len(), 1);
        assert_eq!(samples[0].body_text, "");
        assert_eq!(samples[0].image, None);
        assert_eq!(samples[0].zip_url, None);
    }

    #[test]
    fn first_image_wins() {
        let samples = group_samples(&[
            h1("A"),
            h2("one"),
            text("<p>none</p>"),
            body("<p>a</p>", Some("first.png"), None),
            body("<p>b</p>", Some("second.png"), None),
        ]);
        assert_eq!(samples[0].image.as_deref(), Some("first.png"));
    }

    #[test]
    fn zip_from_later_node() {
        let samples = group_samples(&[
            h1("A"),
            h2("one"),
            body("<p>a</p>", None, Some("https://example.com/docs")),
            body("<p>b</p>", None, Some("https://example.com/one.zip")),
            body("<p>c</p>", None, Some("https://example.com/two.zip")),
        ]);
        assert_eq!(samples[0].zip_url.as_deref(), Some("https://example.com/one.zip"));
    }

    #[test]
    fn no_zip_stays_unset() {
        let samples = group_samples(&[
            h1("A"),
            h2("one"),
            body("<p>a</p>", None, Some("https://example.com/one.tar.gz")),
        ]);
        assert_eq!(samples[0].zip_url, None);
    }

    #[test]
    fn sample_without_category() {
        let samples = group_samples(&[h2("loose"), h1("A"), h2("one")]);
        assert_eq!(samples.len(), 2);
        assert!(samples[0].category.is_none());
        assert_eq!(samples[0].category_id(), "");
        assert_eq!(categories(&samples).len(), 1);
    }

    #[test]
    fn repeated_headings_are_distinct_categories() {
        let samples = group_samples(&[h1("Same"), h2("one"), h1("Same"), h2("two")]);
        let cats = categories(&samples);
        assert_eq!(cats.len(), 2);
        assert_eq!(cats[0].id, cats[1].id);
    }

    #[test]
    fn empty_category_not_listed() {
        let samples = group_samples(&[h1("Empty"), h1("Full"), h2("one")]);
        let cats = categories(&samples);
        assert_eq!(cats.len(), 1);
        assert_eq!(cats[0].id, "full");
    }

    #[test]
    fn blank_heading_gives_empty_slug() {
        let samples = group_samples(&[h1("  "), h2("\n")]);
        assert_eq!(samples[0].category_id(), "");
        assert_eq!(samples[0].title_slug, "");
        assert_eq!(samples[0].title, "");
    }

    #[test]
    fn titles_trimmed_of_newlines() {
        let samples = group_samples(&[h1("\nFoo Bar\n"), h2("\r\nBaz\n")]);
        assert_eq!(samples[0].title, "Baz");
        assert_eq!(samples[0].title_slug, "baz");
        let cats = categories(&samples);
        assert_eq!(cats[0].name, "Foo Bar");
        assert_eq!(cats[0].id, "foo-bar");
    }
}
