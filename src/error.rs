// src/error.rs
//! Failure kinds for one tracking fetch.
//!
//! None of these escape `scrape::fetch_report`: a failed session becomes an
//! empty report, a failed dataset an empty sequence, a malformed row a
//! skipped row.
use thiserror::Error;

use crate::dataset::DatasetKind;

/// Landing page could not be turned into a usable session.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("landing page request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("landing page set no cookies")]
    NoCookies,

    #[error("no text/javascript script at index {index} on landing page")]
    MissingScript { index: usize },

    #[error("landing page script names none of the known worksheets")]
    NoPluginIds,
}

/// One worksheet POST produced no usable fragment.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("no session; {dataset} was not requested")]
    NoSession { dataset: DatasetKind },

    #[error("no plugin id for {dataset} worksheet")]
    NoPlugin { dataset: DatasetKind },

    #[error("could not encode p_json: {0}")]
    Payload(#[from] serde_json::Error),

    #[error("worksheet request failed: {0}")]
    Http(#[from] reqwest::Error),
}

/// A table row whose cells do not fit the dataset's column layout.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RowError {
    #[error("{dataset} row has {found} cells, column {index} missing")]
    MissingCell {
        dataset: DatasetKind,
        index: usize,
        found: usize,
    },
}
