// src/progress.rs
use crate::dataset::DatasetKind;

/// Lightweight progress reporting for a tracking fetch.
/// Frontends (CLI, bots) implement this to surface status to users.
pub trait Progress {
    /// Called once the session is up, with the number of datasets to fetch.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// One dataset came back with a usable fragment.
    fn dataset_done(&mut self, _dataset: DatasetKind) {}

    /// One dataset came back empty or failed. Siblings are unaffected.
    fn dataset_failed(&mut self, _dataset: DatasetKind, _reason: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
