// src/specs/landing.rs
//! Landing page (`f?p=104:1`): everything a follow-up AJAX call needs.
//!
//! The page carries three hidden inputs (instance, salt, protected page
//! items) and, in its second `text/javascript` block, the APEX widget init
//! code that pairs each interactive report's worksheet id with the
//! `ajaxIdentifier` of the plugin serving it.
use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;
use scraper::Html;

use crate::config::consts::{
    INSTANCE_INPUT_ID, PAGE_ITEMS_PROTECTED_INPUT_ID, PLUGIN_SCRIPT_INDEX, SALT_INPUT_ID,
    SCRIPT_MIME,
};
use crate::core::html::{input_value, script_text};
use crate::dataset::DatasetKind;
use crate::error::SessionError;

// Worksheet id, then the last `"ajaxIdentifier":"…"` on the same line. Nested
// widgets (filters, actions) carry their own identifiers ahead of the region's.
static PLUGIN_ID_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"p_worksheet_id=([0-9]+).*"ajaxIdentifier":"(.*?)""#)
        .expect("plugin id pattern compiles")
});

/// Session fields read from the landing page body.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LandingPage {
    pub instance_id: String,
    pub salt: String,
    pub protected_page_items: String,
    pub plugin_ids: HashMap<DatasetKind, String>,
}

/// Fold `Set-Cookie` values into one `Cookie` header value.
/// Attributes (`Path`, `Expires`, …) are dropped; only `name=value` stays.
pub fn cookie_header<S: AsRef<str>>(set_cookies: &[S]) -> Result<String, SessionError> {
    let pairs: Vec<&str> = set_cookies
        .iter()
        .filter_map(|c| c.as_ref().split(';').next())
        .map(str::trim)
        .filter(|pair| !pair.is_empty())
        .collect();

    if pairs.is_empty() {
        return Err(SessionError::NoCookies);
    }
    Ok(pairs.join("; "))
}

/// Worksheet id → plugin id pairs for the known datasets.
///
/// Ids of other worksheets are ignored. A later occurrence of the same
/// worksheet wins. `\u002F` escapes in identifiers are turned back into `/`.
pub fn parse_plugin_ids(script: &str) -> HashMap<DatasetKind, String> {
    let mut out = HashMap::new();
    for caps in PLUGIN_ID_RE.captures_iter(script) {
        let Some(kind) = DatasetKind::from_worksheet_id(&caps[1]) else {
            continue;
        };
        out.insert(kind, caps[2].replace("\\u002F", "/"));
    }
    out
}

/// Read the landing page.
///
/// Missing inputs are tolerated (empty strings). A missing plugin script, or
/// one that names none of our worksheets, means the page layout moved under
/// us; that is an error rather than a guess.
pub fn parse_landing(html: &str) -> Result<LandingPage, SessionError> {
    let doc = Html::parse_document(html);

    let instance_id = input_value(&doc, INSTANCE_INPUT_ID);
    let salt = input_value(&doc, SALT_INPUT_ID);
    let protected_page_items = input_value(&doc, PAGE_ITEMS_PROTECTED_INPUT_ID);

    let script = script_text(&doc, SCRIPT_MIME, PLUGIN_SCRIPT_INDEX).ok_or(
        SessionError::MissingScript {
            index: PLUGIN_SCRIPT_INDEX,
        },
    )?;

    let plugin_ids = parse_plugin_ids(&script);
    if plugin_ids.is_empty() {
        return Err(SessionError::NoPluginIds);
    }
    for kind in DatasetKind::ALL {
        if !plugin_ids.contains_key(&kind) {
            logw!("Landing page: no plugin id for {kind} worksheet");
        }
    }

    Ok(LandingPage {
        instance_id,
        salt,
        protected_page_items,
        plugin_ids,
    })
}
