// src/scrape/worksheet.rs
use reqwest::Client;

use super::session::SessionContext;
use crate::config::options::FetchOptions;
use crate::core::net;
use crate::dataset::DatasetKind;
use crate::error::FetchError;
use crate::specs::worksheet::WorksheetForm;

/// Outcome of one worksheet request. A failure stays in `body`; it never
/// reaches sibling requests.
#[derive(Debug)]
pub struct RawWorksheetResponse {
    pub dataset: DatasetKind,
    pub body: Result<String, FetchError>,
}

impl RawWorksheetResponse {
    pub fn absent(dataset: DatasetKind, reason: FetchError) -> Self {
        Self {
            dataset,
            body: Err(reason),
        }
    }

    /// The fragment, if the request succeeded with a non-blank body.
    pub fn html(&self) -> Option<&str> {
        self.body
            .as_deref()
            .ok()
            .filter(|body| !body.trim().is_empty())
    }
}

/// POST one worksheet request. Errors are logged and kept in the response.
pub async fn fetch(
    client: &Client,
    opts: &FetchOptions,
    session: &SessionContext,
    trace_id: &str,
    dataset: DatasetKind,
) -> RawWorksheetResponse {
    let body = request(client, opts, session, trace_id, dataset).await;
    match &body {
        Err(e @ FetchError::NoPlugin { .. }) => logw!("{dataset}: {e}"),
        Err(e) => loge!("{dataset}: {e}"),
        Ok(html) => logd!("{dataset}: {} bytes", html.len()),
    }
    RawWorksheetResponse { dataset, body }
}

async fn request(
    client: &Client,
    opts: &FetchOptions,
    session: &SessionContext,
    trace_id: &str,
    dataset: DatasetKind,
) -> Result<String, FetchError> {
    let form = WorksheetForm::build(session, trace_id, dataset)?;
    let body = net::http_post_multipart(
        client,
        &opts.ajax_url,
        session.cookie_header(),
        form.into_multipart(),
    )
    .await?;
    Ok(body)
}
