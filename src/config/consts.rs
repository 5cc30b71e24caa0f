// src/config/consts.rs

// Net config
pub const BASE_URL: &str = "https://www.apgo.org/component/residencydirectory";
pub const TIMEOUT_SECS: u64 = 30;
pub const USER_AGENT: &str = concat!("apgo_scrape/", env!("CARGO_PKG_VERSION"));

// Scan range, `FIRST_ID..LAST_ID`
pub const FIRST_ID: u32 = 1;
pub const LAST_ID: u32 = 287;

// Export
pub const DEFAULT_OUT_FILE: &str = "residency_info.csv";

// Concurrency
pub const WORKERS: usize = 1;
pub const MAX_WORKERS: usize = 16;
pub const REQUEST_PAUSE_MS: u64 = 0;
