// src/core/extract.rs
//! Substring-between-delimiters extraction.
//!
//! Indexing follows a split on `before`: piece 0 is whatever precedes the
//! first delimiter and is never returned, piece `instance` is the text after
//! the `instance`-th delimiter up to the next one (or the end of the source).
//! The value is the part of that piece before the first `after`.

use crate::error::ExtractionError;

/// Section markers look like `10.&nbsp;`.
pub const SECTION_SEP: &str = ".&nbsp;";

/// Strict extraction. Fails when the `instance`-th piece does not exist or
/// holds no `after`.
pub fn item_between<'a>(
    source: &'a str,
    before: &str,
    after: &str,
    instance: usize,
) -> Result<&'a str, ExtractionError> {
    if before.is_empty() || after.is_empty() || instance == 0 {
        return Err(ExtractionError::new(before, after));
    }
    let piece = source
        .split(before)
        .nth(instance)
        .ok_or_else(|| ExtractionError::new(before, after))?;
    let end = piece
        .find(after)
        .ok_or_else(|| ExtractionError::new(before, after))?;
    Ok(&piece[..end])
}

/// Best-effort extraction: any miss becomes `""`.
///
/// `specs::residency::parse_page` applies the same rule inline so it can
/// also report which fields missed.
pub fn item_between_or_empty<'a>(
    source: &'a str,
    before: &str,
    after: &str,
    instance: usize,
) -> &'a str {
    item_between(source, before, after, instance).unwrap_or("")
}

/// Text between the markers of section `number` and section `number + 1`.
pub fn section(source: &str, number: u32) -> Result<&str, ExtractionError> {
    let before = format!("{number}{SECTION_SEP}");
    let after = format!("{}{SECTION_SEP}", number + 1);
    item_between(source, &before, &after, 1)
}
