//! Title extraction from Redump result pages.
//!
//! A quicksearch that matches exactly one disc lands on the disc page, whose
//! `<h1>` is the title. Several matches produce a results table instead; the
//! first result row (the row after the header) links to the disc by title.

use scraper::{ElementRef, Html, Selector};

/// Pull the disc title out of a Redump page, if there is one.
pub fn extract_title(html: &str) -> Option<String> {
    let doc = Html::parse_document(html);
    heading_title(&doc).or_else(|| first_result_title(&doc))
}

fn heading_title(doc: &Html) -> Option<String> {
    let h1 = selector("h1");
    doc.select(&h1).next().and_then(element_text)
}

fn first_result_title(doc: &Html) -> Option<String> {
    let (table_sel, row_sel, link_sel) = (selector("table"), selector("tr"), selector("a"));
    let table = doc.select(&table_sel).next()?;
    let row = table.select(&row_sel).nth(1)?;
    row.select(&link_sel).next().and_then(element_text)
}

fn element_text(element: ElementRef<'_>) -> Option<String> {
    let text = element.text().collect::<String>();
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("static selector")
}

#[cfg(test)]
#[path = "tests/html_tests.rs"]
mod tests;
