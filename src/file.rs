// src/file.rs

use std::{
    fs::{self, File},
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

use crate::config::options::ExportOptions;
use crate::csv::write_row;
use crate::record::{Record, HEADERS};

/// Write the header row and one row per record to `export.out_path()`,
/// creating parent directories as needed. Returns the path written.
pub fn write_records(export: &ExportOptions, records: &[Record]) -> io::Result<PathBuf> {
    let path = export.out_path();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    let sep = export.delim();
    let mut out = BufWriter::new(File::create(&path)?); // truncate/overwrite
    write_row(&mut out, &HEADERS[..], sep)?;
    for record in records {
        write_row(&mut out, record.to_row().as_slice(), sep)?;
    }
    out.flush()?;

    logf!("wrote {} records to {}", records.len(), path.display());
    Ok(path)
}

pub fn ensure_directory(dir: &Path) -> io::Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(io::Error::other(format!(
            "Path exists but is not a directory: {}",
            dir.display()
        )));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}
