// src/progress.rs
use crate::error::Outcome;
use crate::scrape::ScanSummary;

/// Progress reporting for a scan. Frontends implement this to surface
/// status; every method defaults to a no-op.
pub trait Progress {
    /// Called once with the number of identifiers to visit.
    fn begin(&mut self, _total: usize) {}

    /// Called once per identifier, in completion order.
    fn item_done(&mut self, _id: u32, _outcome: &Outcome) {}

    fn finish(&mut self, _summary: &ScanSummary) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
