// src/scrape/fetch.rs
use reqwest::Client;

use super::session::{self, SessionContext};
use super::worksheet::{self, RawWorksheetResponse};
use crate::{
    config::options::FetchOptions,
    core::net,
    dataset::DatasetKind,
    error::{FetchError, SessionError},
    progress::Progress,
    report::KaspiReport,
};

/// Raw fragments of one tracking query, one slot per dataset.
#[derive(Debug)]
pub struct RawDeliveryData {
    pub progress: RawWorksheetResponse,
    pub routes: RawWorksheetResponse,
    pub items: RawWorksheetResponse,
}

impl RawDeliveryData {
    /// Nothing was requested: the session never came up.
    pub fn empty() -> Self {
        let absent = |dataset| RawWorksheetResponse::absent(dataset, FetchError::NoSession { dataset });
        Self {
            progress: absent(DatasetKind::Progress),
            routes: absent(DatasetKind::Routes),
            items: absent(DatasetKind::Items),
        }
    }

    pub fn get(&self, dataset: DatasetKind) -> &RawWorksheetResponse {
        match dataset {
            DatasetKind::Progress => &self.progress,
            DatasetKind::Routes => &self.routes,
            DatasetKind::Items => &self.items,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &RawWorksheetResponse> {
        [&self.progress, &self.routes, &self.items].into_iter()
    }
}

/// Track one order against the live portal.
pub async fn fetch_report(trace_id: &str) -> KaspiReport {
    fetch_report_with(&FetchOptions::default(), trace_id, None).await
}

/// Track one order. Never fails: whatever could not be fetched is empty.
pub async fn fetch_report_with(
    opts: &FetchOptions,
    trace_id: &str,
    progress: Option<&mut (dyn Progress + Send)>,
) -> KaspiReport {
    KaspiReport::new(fetch_data(opts, trace_id, progress).await)
}

/// Bootstrap a fresh session, then pull all three worksheets concurrently.
///
/// A failed bootstrap yields `RawDeliveryData::empty()`. Worksheet requests
/// all run to completion whatever their siblings do.
pub async fn fetch_data(
    opts: &FetchOptions,
    trace_id: &str,
    mut progress: Option<&mut (dyn Progress + Send)>,
) -> RawDeliveryData {
    if let Some(p) = progress.as_deref_mut() {
        p.log("Opening portal session…");
    }

    let (client, session) = match open_session(opts).await {
        Ok(ok) => ok,
        Err(e) => {
            loge!("Order {trace_id}: session bootstrap failed: {e}");
            if let Some(p) = progress.as_deref_mut() {
                p.log(&format!("Session failed: {e}"));
                p.finish();
            }
            return RawDeliveryData::empty();
        }
    };

    if let Some(p) = progress.as_deref_mut() {
        p.begin(DatasetKind::ALL.len());
    }

    let (progress_raw, routes_raw, items_raw) = tokio::join!(
        worksheet::fetch(&client, opts, &session, trace_id, DatasetKind::Progress),
        worksheet::fetch(&client, opts, &session, trace_id, DatasetKind::Routes),
        worksheet::fetch(&client, opts, &session, trace_id, DatasetKind::Items),
    );
    let data = RawDeliveryData {
        progress: progress_raw,
        routes: routes_raw,
        items: items_raw,
    };

    if let Some(p) = progress.as_deref_mut() {
        for raw in data.iter() {
            match (&raw.body, raw.html()) {
                (_, Some(_)) => p.dataset_done(raw.dataset),
                (Err(e), None) => p.dataset_failed(raw.dataset, &e.to_string()),
                (Ok(_), None) => p.dataset_failed(raw.dataset, "empty response"),
            }
        }
        p.finish();
    }

    logf!(
        "Order {trace_id}: {} of 3 worksheets returned data",
        data.iter().filter(|raw| raw.html().is_some()).count()
    );
    data
}

async fn open_session(opts: &FetchOptions) -> Result<(Client, SessionContext), SessionError> {
    let client = net::client(opts)?;
    let session = session::bootstrap(&client, opts).await?;
    Ok((client, session))
}
