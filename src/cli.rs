// src/cli.rs
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};

use crate::config::consts::*;
use crate::config::options::{AppOptions, ExportFormat, IdSelector};
use crate::core::net::HttpFetcher;
use crate::error::Outcome;
use crate::file;
use crate::progress::Progress;
use crate::scrape::{self, ScanSummary};

// Alias keeps clap from treating the list as a repeated flag.
pub type IdList = Vec<u32>;

/// Scrape the APGO residency directory into a CSV file.
#[derive(Parser, Debug)]
#[command(name = "apgo_scrape", version, about)]
pub struct Args {
    /// Directory base URL; entries live at `<base>/id/<id>`
    #[arg(long, default_value = BASE_URL)]
    pub base_url: String,

    /// First identifier to visit
    #[arg(long, default_value_t = FIRST_ID)]
    pub first_id: u32,

    /// Stop before this identifier
    #[arg(long, default_value_t = LAST_ID)]
    pub last_id: u32,

    /// Explicit identifiers instead of a range, e.g. "3,10-12"
    #[arg(long, value_parser = parse_ids_list, conflicts_with_all = ["first_id", "last_id"])]
    pub ids: Option<IdList>,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = TIMEOUT_SECS)]
    pub timeout: u64,

    /// Parallel fetches (1 = strictly sequential)
    #[arg(long, default_value_t = WORKERS, value_parser = parse_workers)]
    pub workers: usize,

    /// Pause after each request, in milliseconds
    #[arg(long, default_value_t = REQUEST_PAUSE_MS)]
    pub pause_ms: u64,

    /// Output file, or a directory ending in '/'
    #[arg(short, long, default_value = DEFAULT_OUT_FILE)]
    pub out: String,

    #[arg(long, value_enum, default_value_t = ExportFormat::Csv)]
    pub format: ExportFormat,

    /// Append the log to this file instead of stderr
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn to_options(&self) -> AppOptions {
        let mut opts = AppOptions::default();

        opts.scrape.base_url = self.base_url.clone();
        opts.scrape.ids = match &self.ids {
            Some(ids) => IdSelector::Ids(ids.clone()),
            None => IdSelector::Range { first: self.first_id, last: self.last_id },
        };
        opts.scrape.timeout = Duration::from_secs(self.timeout);
        opts.scrape.workers = self.workers;
        opts.scrape.pause = Duration::from_millis(self.pause_ms);

        opts.export.format = self.format;
        opts.export.set_path(&self.out);
        opts
    }
}

/// Prints one line per identifier, the way the scan has always looked.
pub struct ConsoleProgress;

impl Progress for ConsoleProgress {
    fn begin(&mut self, _total: usize) {
        println!("Starting Scraper...");
    }

    fn item_done(&mut self, id: u32, outcome: &Outcome) {
        println!("Scraping id {id}...\t{}", outcome.tag());
    }

    fn finish(&mut self, summary: &ScanSummary) {
        println!(
            "Done. {} succeeded, {} skipped, {} failed.",
            summary.succeeded, summary.skipped, summary.failed
        );
    }
}

pub fn run(args: Args) -> Result<()> {
    crate::log::init(args.log_file.as_deref(), args.verbose)
        .wrap_err("failed to open log file")?;

    let opts = args.to_options();
    logf!("options: {opts:?}");

    let fetcher = HttpFetcher::new(&opts.scrape.base_url, opts.scrape.timeout)
        .wrap_err("failed to build HTTP client")?;

    let summary = scrape::collect_records(&fetcher, &opts.scrape, Some(&mut ConsoleProgress));

    println!("Generating {}...", opts.export.format.ext().to_ascii_uppercase());
    let path = file::write_records(&opts.export, &summary.records)
        .wrap_err_with(|| format!("failed to write {}", opts.export.out_path().display()))?;
    println!("Done.");
    println!("Wrote {}", path.display());
    Ok(())
}

/// Parse "3,5-7,10" into sorted, deduplicated identifiers.
pub fn parse_ids_list(s: &str) -> Result<Vec<u32>, String> {
    let mut out = Vec::new();
    for part in s.split(',') {
        let part = part.trim();
        if part.is_empty() { continue; }
        if let Some((a, b)) = part.split_once('-') {
            let a: u32 = a.trim().parse().map_err(|e| format!("{part}: {e}"))?;
            let b: u32 = b.trim().parse().map_err(|e| format!("{part}: {e}"))?;
            if a > b { return Err(format!("Invalid range: {part}")); }
            out.extend(a..=b);
        } else {
            out.push(part.parse().map_err(|e| format!("{part}: {e}"))?);
        }
    }
    out.sort_unstable();
    out.dedup();
    Ok(out)
}

fn parse_workers(s: &str) -> Result<usize, String> {
    let n: usize = s.trim().parse().map_err(|e| format!("{s}: {e}"))?;
    if !(1..=MAX_WORKERS).contains(&n) {
        return Err(format!("workers must be between 1 and {MAX_WORKERS}"));
    }
    Ok(n)
}
