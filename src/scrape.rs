// src/scrape.rs
use std::{
    thread,
    sync::{ mpsc, atomic::{ AtomicUsize, Ordering }}
};

use crate::{
    config::consts::MAX_WORKERS,
    config::options::ScrapeOptions,
    core::net::Fetch,
    error::{ Outcome, ScrapeError },
    progress::Progress,
    record::Record,
    specs::residency::{ self, Assembled },
};

/// What a scan produced. `records` ascend by identifier.
#[derive(Debug, Default)]
pub struct ScanSummary {
    pub records: Vec<Record>,
    pub succeeded: usize,
    pub skipped: usize,
    pub failed: usize,
}

/// Visit every selected identifier once and keep the records that assembled.
///
/// No per-ID failure stops the scan: each one is classified as a skip or a
/// failure, reported to `progress`, and counted. With `workers > 1` a bounded
/// pool of threads fetches in parallel; the result order is the same.
pub fn collect_records(
    fetcher: &dyn Fetch,
    scrape: &ScrapeOptions,
    mut progress: Option<&mut dyn Progress>,
) -> ScanSummary {
    let ids = scrape.ids.resolve();

    if let Some(p) = progress.as_deref_mut() {
        p.begin(ids.len());
    }

    let mut tally = Tally::default();
    let workers = scrape.workers.clamp(1, MAX_WORKERS).min(ids.len().max(1));

    if workers == 1 {
        for &id in &ids {
            let result = residency::fetch_and_extract(fetcher, id);
            tally.record(id, result, progress.as_deref_mut());
            pause(scrape);
        }
    } else {
        logd!("scanning {} ids with {workers} workers", ids.len());
        let next = AtomicUsize::new(0);
        let (res_tx, res_rx) = mpsc::channel::<(u32, Result<Assembled, ScrapeError>)>();

        thread::scope(|s| {
            for _ in 0..workers {
                let tx = res_tx.clone();
                let (ids, next) = (&ids, &next);
                s.spawn(move || {
                    loop {
                        let i = next.fetch_add(1, Ordering::Relaxed);
                        if i >= ids.len() {
                            break;
                        }
                        let id = ids[i];
                        let result = residency::fetch_and_extract(fetcher, id);
                        if tx.send((id, result)).is_err() {
                            break;
                        }
                        pause(scrape);
                    }
                });
            }
            drop(res_tx); // main thread is sole receiver now

            for (id, result) in res_rx {
                tally.record(id, result, progress.as_deref_mut());
            }
        });
    }

    let summary = tally.finish();
    if let Some(p) = progress.as_deref_mut() {
        p.finish(&summary);
    }
    logf!(
        "scan done: {} succeeded, {} skipped, {} failed",
        summary.succeeded, summary.skipped, summary.failed
    );
    summary
}

fn pause(scrape: &ScrapeOptions) {
    if !scrape.pause.is_zero() {
        thread::sleep(scrape.pause);
    }
}

#[derive(Default)]
struct Tally {
    per_id: Vec<(u32, Record)>,
    skipped: usize,
    failed: usize,
}

impl Tally {
    fn record(
        &mut self,
        id: u32,
        result: Result<Assembled, ScrapeError>,
        progress: Option<&mut (dyn Progress + '_)>,
    ) {
        let outcome = match result {
            Ok(assembled) => {
                self.per_id.push((id, assembled.record));
                Outcome::Success
            }
            Err(e) => e.outcome(),
        };

        match &outcome {
            Outcome::Success => {}
            Outcome::Skip(msg) => {
                self.skipped += 1;
                logd!("id {id} skipped: {msg}");
            }
            Outcome::Fail(msg) => {
                self.failed += 1;
                loge!("id {id} failed: {msg}");
            }
        }

        if let Some(p) = progress {
            p.item_done(id, &outcome);
        }
    }

    fn finish(mut self) -> ScanSummary {
        self.per_id.sort_by_key(|(id, _)| *id);
        let succeeded = self.per_id.len();
        ScanSummary {
            records: self.per_id.into_iter().map(|(_, r)| r).collect(),
            succeeded,
            skipped: self.skipped,
            failed: self.failed,
        }
    }
}
