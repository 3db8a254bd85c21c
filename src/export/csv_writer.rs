//! CSV serialization for scraped records
//!
//! Every record type exposes its fields as ordered `(header, value)` pairs.
//! The header row is the union of keys across all records in first-seen
//! order, so files built from mixed record shapes still line up.

use csv::Writer;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::error::AppError;

/// A record that can be written as one CSV row.
pub trait CsvRecord {
    fn fields(&self) -> Vec<(&'static str, String)>;
}

/// Union of field names across `records`, in first-seen order.
pub fn union_headers<R: CsvRecord>(records: &[R]) -> Vec<&'static str> {
    let mut headers: Vec<&'static str> = Vec::new();
    for record in records {
        for (key, _) in record.fields() {
            if !headers.contains(&key) {
                headers.push(key);
            }
        }
    }
    headers
}

/// Writes a header row plus one row per record. Missing keys become empty cells.
///
/// Returns the number of data rows written.
pub fn write_records<R: CsvRecord, W: Write>(
    writer: &mut Writer<W>,
    records: &[R],
) -> Result<usize, AppError> {
    let headers = union_headers(records);
    writer.write_record(&headers)?;

    for record in records {
        let fields = record.fields();
        let row = headers.iter().map(|header| {
            fields
                .iter()
                .find(|(key, _)| key == header)
                .map(|(_, value)| value.as_str())
                .unwrap_or("")
        });
        writer.write_record(row)?;
    }

    writer.flush()?;
    Ok(records.len())
}

/// Writes `records` to `path`, creating parent directories as needed.
///
/// Nothing is written when `records` is empty; `Ok(None)` reports that.
pub fn save_records<R: CsvRecord>(
    path: &Path,
    records: &[R],
) -> Result<Option<PathBuf>, AppError> {
    if records.is_empty() {
        debug!("No records for {}, skipping", path.display());
        return Ok(None);
    }

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        std::fs::create_dir_all(parent)?;
    }

    let mut writer = Writer::from_writer(File::create(path)?);
    let count = write_records(&mut writer, records)?;
    info!("Wrote {count} rows to {}", path.display());

    Ok(Some(path.to_path_buf()))
}
