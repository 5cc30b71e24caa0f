// src/error.rs
//! Failure kinds for one directory entry.
//!
//! Field-level misses never show up here: they degrade to an empty cell.
//! What does show up is page-level (fetch) or section-level, and every
//! variant maps to exactly one [`Outcome`] so the scan driver can keep going.

use thiserror::Error;

/// Delimiters were not found where the caller asked for them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("failed to scrape item between \"{before}\" and \"{after}\"")]
pub struct ExtractionError {
    pub before: String,
    pub after: String,
}

impl ExtractionError {
    pub fn new(before: &str, after: &str) -> Self {
        Self { before: s!(before), after: s!(after) }
    }
}

/// Result of one page fetch that did not produce a body.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The directory answers unknown IDs with an in-band "Not Authorized" page.
    #[error("not authorized (no directory entry)")]
    NotAuthorized,

    #[error("request timed out")]
    Timeout,

    #[error("connection error: {0}")]
    Transport(String),

    #[error("failed to get page, status code {0}")]
    Status(u16),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScrapeError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("section {section} missing: {source}")]
    SectionMissing {
        section: u32,
        #[source]
        source: ExtractionError,
    },
}

/// How the scan driver treats one identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Success,
    /// No entry behind this ID (or the server was too slow to say).
    Skip(String),
    /// Looks like a real entry we could not read.
    Fail(String),
}

impl Outcome {
    pub fn tag(&self) -> &'static str {
        match self {
            Outcome::Success => "SUCCESS",
            Outcome::Skip(_) => "SKIP",
            Outcome::Fail(_) => "FAIL",
        }
    }
}

impl ScrapeError {
    pub fn outcome(&self) -> Outcome {
        match self {
            ScrapeError::Fetch(FetchError::NotAuthorized | FetchError::Timeout) => {
                Outcome::Skip(self.to_string())
            }
            ScrapeError::Fetch(FetchError::Transport(_) | FetchError::Status(_))
            | ScrapeError::SectionMissing { .. } => Outcome::Fail(self.to_string()),
        }
    }
}
