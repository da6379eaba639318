// src/scrape/session.rs
use std::collections::HashMap;

use reqwest::Client;

use crate::config::options::FetchOptions;
use crate::core::net;
use crate::dataset::DatasetKind;
use crate::error::SessionError;
use crate::specs::landing::{self, LandingPage};

/// Everything a worksheet request needs from one landing page visit.
///
/// Built once per fetch and only ever read afterwards.
#[derive(Clone, Debug)]
pub struct SessionContext {
    cookie_header: String,
    instance_id: String,
    salt: String,
    protected_page_items: String,
    plugin_ids: HashMap<DatasetKind, String>,
}

impl SessionContext {
    pub fn new(cookie_header: String, page: LandingPage) -> Self {
        Self {
            cookie_header,
            instance_id: page.instance_id,
            salt: page.salt,
            protected_page_items: page.protected_page_items,
            plugin_ids: page.plugin_ids,
        }
    }

    pub fn cookie_header(&self) -> &str {
        &self.cookie_header
    }

    pub fn instance_id(&self) -> &str {
        &self.instance_id
    }

    pub fn salt(&self) -> &str {
        &self.salt
    }

    pub fn protected_page_items(&self) -> &str {
        &self.protected_page_items
    }

    pub fn plugin_id(&self, dataset: DatasetKind) -> Option<&str> {
        self.plugin_ids.get(&dataset).map(String::as_str)
    }
}

/// One GET of the landing page, read into a session.
pub async fn bootstrap(client: &Client, opts: &FetchOptions) -> Result<SessionContext, SessionError> {
    let page = net::http_get(client, &opts.landing_url).await?;
    let cookie_header = landing::cookie_header(&page.set_cookies)?;
    let landing = landing::parse_landing(&page.body)?;

    logd!(
        "Session: instance {}, {} cookie(s), {} plugin id(s)",
        landing.instance_id,
        page.set_cookies.len(),
        landing.plugin_ids.len()
    );
    Ok(SessionContext::new(cookie_header, landing))
}
