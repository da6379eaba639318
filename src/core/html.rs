// src/core/html.rs
//! Small DOM helpers over `scraper`, shared by the landing page reader and
//! the worksheet table extractors.
//!
//! Every lookup is by element id, matched as an attribute (`[id="…"]`)
//! because APEX worksheet ids are all-digit and not valid `#id` selectors.
use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

static TR: LazyLock<Selector> = LazyLock::new(|| static_selector("tr"));
static TD: LazyLock<Selector> = LazyLock::new(|| static_selector("td"));

fn static_selector(css: &str) -> Selector {
    Selector::parse(css).expect("static selector parses")
}

/// Attribute selector for an element id. `None` only for ids that cannot be
/// quoted into a selector at all.
pub fn id_selector(id: &str) -> Option<Selector> {
    if id.is_empty() || id.contains('"') {
        return None;
    }
    Selector::parse(&format!(r#"[id="{id}"]"#)).ok()
}

/// Concatenated text content, trimmed.
pub fn text_of(el: ElementRef<'_>) -> String {
    el.text().collect::<String>().trim().to_string()
}

/// `value` attribute of the `<input>` with the given id, or `""`.
pub fn input_value(doc: &Html, id: &str) -> String {
    let Some(sel) = id_selector(id) else { return s!() };
    doc.select(&sel)
        .find(|el| el.value().name() == "input")
        .and_then(|el| el.value().attr("value"))
        .map(String::from)
        .unwrap_or_default()
}

/// Raw text of the `index`-th (zero-based) `<script type="{mime}">`.
pub fn script_text(doc: &Html, mime: &str, index: usize) -> Option<String> {
    let sel = Selector::parse(&format!(r#"script[type="{mime}"]"#)).ok()?;
    doc.select(&sel).nth(index).map(|el| el.text().collect())
}

/// Rows under the element with `element_id`, in document order.
///
/// Each row is the trimmed text of its `<td>` descendants. Header and
/// separator rows come back as empty vecs; callers decide what to skip.
/// A missing element yields no rows.
pub fn table_rows(html: &str, element_id: &str) -> Vec<Vec<String>> {
    let doc = Html::parse_document(html);
    let Some(target) = id_selector(element_id) else {
        return Vec::new();
    };
    let Some(root) = doc.select(&target).next() else {
        logd!("No element with id {element_id} in fragment ({} bytes)", html.len());
        return Vec::new();
    };

    root.select(&TR)
        .map(|tr| tr.select(&TD).map(text_of).collect())
        .collect()
}
