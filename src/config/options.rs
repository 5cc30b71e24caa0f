// src/config/options.rs
use std::path::{Path, PathBuf};
use std::time::Duration;

use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AppOptions {
    pub scrape: ScrapeOptions,
    pub export: ExportOptions,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum IdSelector {
    /// `first..last`, exclusive of `last`
    Range { first: u32, last: u32 },
    Ids(Vec<u32>),
}

impl IdSelector {
    pub fn resolve(&self) -> Vec<u32> {
        match self {
            IdSelector::Range { first, last } => (*first..*last).collect(),
            IdSelector::Ids(v) => {
                let mut ids = v.clone();
                ids.sort_unstable();
                ids.dedup();
                ids
            }
        }
    }
}

impl Default for IdSelector {
    fn default() -> Self {
        IdSelector::Range { first: FIRST_ID, last: LAST_ID }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrapeOptions {
    pub base_url: String,
    pub ids: IdSelector,
    pub timeout: Duration,
    pub workers: usize,
    /// Sleep after each request, per worker.
    pub pause: Duration,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            base_url: s!(BASE_URL),
            ids: IdSelector::default(),
            timeout: Duration::from_secs(TIMEOUT_SECS),
            workers: WORKERS,
            pause: Duration::from_millis(REQUEST_PAUSE_MS),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ExportFormat {
    #[default]
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self { ExportFormat::Csv => "csv", ExportFormat::Tsv => "tsv" }
    }
    pub fn delim(&self) -> char {
        match self { ExportFormat::Csv => ',', ExportFormat::Tsv => '\t' }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    path: PathBuf,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            path: PathBuf::from(DEFAULT_OUT_FILE),
        }
    }
}

impl ExportOptions {
    pub fn set_path(&mut self, text: &str) {
        self.path = PathBuf::from(text.trim());
    }

    /// Final file path. A directory (existing, or hinted by a trailing
    /// separator) gets the default file stem with the format's extension.
    pub fn out_path(&self) -> PathBuf {
        if looks_like_dir_hint(&self.path) || self.path.is_dir() {
            let stem = Path::new(DEFAULT_OUT_FILE)
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default();
            self.path.join(format!("{stem}.{}", self.format.ext()))
        } else {
            self.path.clone()
        }
    }

    pub fn delim(&self) -> char {
        self.format.delim()
    }
}

pub fn looks_like_dir_hint(p: &Path) -> bool {
    let s = p.to_string_lossy();
    s.ends_with('/') || s.ends_with('\\')
}
