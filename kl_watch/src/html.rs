//! Search page markup -> [`ResultBlock`]s, built on `scraper`.

use crate::extract::{Link, ResultBlock};
use lazy_static::lazy_static;
use scraper::{ElementRef, Html, Selector};

/// CSS selector for one product container on the search page
pub const RESULT_BLOCK_SELECTOR: &str = "div.tf-product";

lazy_static! {
    static ref BLOCK_SELECTOR: Selector = Selector::parse(RESULT_BLOCK_SELECTOR).unwrap();
    static ref LINK_SELECTOR: Selector = Selector::parse("a").unwrap();
}

/// Elements that start a new visual line when rendered
const BLOCK_TAGS: &[&str] = &[
    "address", "article", "aside", "blockquote", "dd", "div", "dl", "dt", "fieldset",
    "figcaption", "figure", "footer", "form", "h1", "h2", "h3", "h4", "h5", "h6", "header",
    "hr", "li", "main", "nav", "ol", "p", "pre", "section", "table", "tbody", "td", "tfoot",
    "th", "thead", "tr", "ul",
];

/// Parse a search results page into its result blocks, in page order
pub fn parse_result_blocks(page: &str) -> Vec<ResultBlock> {
    let document = Html::parse_document(page);
    document.select(&BLOCK_SELECTOR).map(to_result_block).collect()
}

fn to_result_block(element: ElementRef<'_>) -> ResultBlock {
    let links = element
        .select(&LINK_SELECTOR)
        .map(|a| Link {
            attributes: a
                .value()
                .attrs()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        })
        .collect();

    ResultBlock {
        text: rendered_text(element),
        links,
    }
}

/// Approximates the browser's innerText: block elements and `<br>` break
/// lines, whitespace inside a line collapses, and empty lines are dropped.
pub fn rendered_text(element: ElementRef<'_>) -> String {
    let mut raw = String::new();
    collect_text(element, &mut raw);

    raw.lines()
        .map(|line| line.split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

fn collect_text(element: ElementRef<'_>, out: &mut String) {
    for child in element.children() {
        if let Some(text) = child.value().as_text() {
            // Source newlines are layout noise, not line breaks
            out.push_str(&text.replace('\n', " "));
        } else if let Some(child_el) = ElementRef::wrap(child) {
            let tag = child_el.value().name();
            if tag == "script" || tag == "style" {
                continue;
            }
            let is_block = BLOCK_TAGS.contains(&tag);
            if is_block || tag == "br" {
                out.push('\n');
            }
            collect_text(child_el, out);
            if is_block {
                out.push('\n');
            }
        }
    }
}
