use std::sync::LazyLock;

use scraper::{ElementRef, Html, Node, Selector};
use tracing::debug;

use crate::error::BuildError;

static WIKI_BODY: LazyLock<Selector> = LazyLock::new(|| Selector::parse("#wiki-body").unwrap());
static FIRST_HEADING: LazyLock<Selector> = LazyLock::new(|| Selector::parse("h1").unwrap());

const HEADING_WRAPPER_CLASS: &str = "markdown-heading";

/// One sibling node of the listing, reduced to what the grouper needs.
#[derive(Debug, Clone)]
pub enum Block {
    /// `h1` opens a category, `h2` opens a sample. No other levels are emitted.
    /// `text` stays entity-encoded, as it would appear in markup.
    Heading { level: u8, text: String },
    /// Anything else. `image`/`link` are the first `img src` / `a href`
    /// found among the node's descendants, in document order.
    Body {
        html: String,
        image: Option<String>,
        link: Option<String>,
    },
}

/// Walk the siblings starting at the first `h1` of `#wiki-body` and classify each one.
pub fn classify_nodes(html: &str) -> Result<Vec<Block>, BuildError> {
    let doc = Html::parse_document(html);

    let body = doc
        .select(&WIKI_BODY)
        .next()
        .ok_or_else(|| BuildError::ParseShape("no #wiki-body element".into()))?;
    let first = body
        .select(&FIRST_HEADING)
        .next()
        .ok_or_else(|| BuildError::ParseShape("no h1 heading inside #wiki-body".into()))?;

    // Newer wiki markup wraps each heading in a div; walk at the wrapper's level.
    let start = first
        .parent()
        .and_then(ElementRef::wrap)
        .filter(is_heading_wrapper)
        .unwrap_or(first);

    let blocks: Vec<Block> = std::iter::successors(Some(*start), |n| n.next_sibling())
        .filter_map(|node| match node.value() {
            Node::Element(_) => ElementRef::wrap(node).map(classify_element),
            Node::Text(t) => Some(Block::Body {
                html: escape_text(t),
                image: None,
                link: None,
            }),
            Node::Comment(c) => Some(Block::Body {
                html: format!("<!--{}-->", &**c),
                image: None,
                link: None,
            }),
            _ => None,
        })
        .collect();

    debug!("Classified {} sibling nodes", blocks.len());
    Ok(blocks)
}

fn classify_element(el: ElementRef) -> Block {
    if let Some((level, heading)) = heading_of(el) {
        return Block::Heading {
            level,
            text: escape_heading(&heading.text().collect::<String>()),
        };
    }

    Block::Body {
        html: el.html(),
        image: first_descendant_attr(el, "img", "src"),
        link: first_descendant_attr(el, "a", "href"),
    }
}

/// Level and element of the heading this node represents, if any.
fn heading_of(el: ElementRef) -> Option<(u8, ElementRef)> {
    match heading_level(el.value().name()) {
        Some(level) => Some((level, el)),
        None if is_heading_wrapper(&el) => el
            .children()
            .filter_map(ElementRef::wrap)
            .find_map(|child| heading_level(child.value().name()).map(|l| (l, child))),
        None => None,
    }
}

fn heading_level(tag: &str) -> Option<u8> {
    match tag {
        "h1" => Some(1),
        "h2" => Some(2),
        _ => None,
    }
}

fn is_heading_wrapper(el: &ElementRef) -> bool {
    el.value().name() == "div" && el.value().classes().any(|c| c == HEADING_WRAPPER_CLASS)
}

/// First `tag` strictly below `el`; empty or missing attributes count as not found.
fn first_descendant_attr(el: ElementRef, tag: &str, attr: &str) -> Option<String> {
    el.descendants()
        .skip(1)
        .filter_map(ElementRef::wrap)
        .find(|e| e.value().name() == tag)
        .and_then(|e| e.value().attr(attr))
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Heading text lands in attributes and quoted JS strings, so quotes are encoded too.
fn escape_heading(text: &str) -> String {
    escape_text(text).replace('"', "&quot;").replace('\'', "&#39;")
}

// ── Tests ──
