use scraper::{ElementRef, Html, Selector};

use crate::parser::normalize_text;

pub fn from(s: &str) -> Selector {
    match Selector::parse(s) {
        Ok(s) => s,
        Err(_) => panic!("unable to parse selector {s}"),
    }
}

/// Visible text of an element, whitespace collapsed
pub fn text(element: ElementRef) -> String {
    normalize_text(element.text())
}

/// Whether the text of `element` or of any of its descendants contains
/// `needle`, ignoring case.
pub fn contains(element: ElementRef, needle: &str) -> bool {
    text(element)
        .to_lowercase()
        .contains(&needle.to_lowercase())
}

/// Elements matching `target` that sit anywhere below an `li` whose text
/// contains `label`.
pub fn under_item<'a>(page: &'a Html, label: &str, target: &Selector) -> Vec<ElementRef<'a>> {
    page.select(target)
        .filter(|el| {
            el.ancestors()
                .filter_map(ElementRef::wrap)
                .any(|a| a.value().name() == "li" && contains(a, label))
        })
        .collect()
}

/// Anchors of `li > p > a` whose `li` contains one of `labels`, in document
/// order.
pub fn item_links<'a>(page: &'a Html, labels: &[&str]) -> Vec<ElementRef<'a>> {
    let a = from("li > p > a");

    page.select(&a)
        .filter(|el| {
            el.ancestors()
                .nth(1)
                .and_then(ElementRef::wrap)
                .is_some_and(|li| labels.iter().any(|l| contains(li, l)))
        })
        .collect()
}

/// Elements matching `target` inside the blocks matching `block` whose text
/// contains `label`.
pub fn in_block<'a>(
    page: &'a Html,
    block: &Selector,
    label: &str,
    target: &Selector,
) -> Vec<ElementRef<'a>> {
    page.select(block)
        .filter(|b| contains(*b, label))
        .flat_map(|b| b.select(target))
        .collect()
}
