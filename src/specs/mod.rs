// src/specs/mod.rs
//! # Page rules
//!
//! Page-specific knowledge of the residency directory: which label or
//! numbered section holds each value, and which bold span inside it.
//!
//! ## What lives here
//! - **Pure text extraction** over the raw page (`core::extract` helpers).
//! - **Positional rules** for fields that only differ by their index in a
//!   section.
//! - **Record assembly** from one fetched page.
//!
//! ## What does **not** live here
//! - **Scan order, concurrency, progress** (`scrape::collect_records`).
//! - **Output formatting** (`csv`, `file`).
//!
//! ## Typical call chain
//! ```text
//! cli → scrape::collect_records → specs::residency::fetch_and_extract(id)
//!                               ↘  Record (or Skip / Fail outcome)
//!        file::write_records
//! ```
//!
//! ## Testing notes
//! Specs are tested offline against `tests/fixtures/program.html`.
pub mod residency;
