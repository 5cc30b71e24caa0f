// src/core/mod.rs

pub mod extract;
pub mod net;

pub use net::{Fetch, HttpFetcher};
