use std::io::Read;
use std::path::Path;

use chrono::NaiveDateTime;
use tracing::{debug, info};

use crate::error::{Result, StayError};
use crate::models::{Booking, Dataset, TIMESTAMP_FORMAT};
use crate::settings::ColumnNames;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Strip thousands separators and parse. `"1,250.00"` -> `1250.0`.
pub fn clean_total(raw: &str) -> Option<f64> {
    raw.replace(',', "").trim().parse().ok()
}

/// Clean a whole total column. Any unparsable value fails the column.
pub fn clean_total_column<I, S>(column: &str, totals: I) -> Result<Vec<f64>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    totals
        .into_iter()
        .enumerate()
        .map(|(i, raw)| {
            let raw = raw.as_ref();
            clean_total(raw).ok_or_else(|| StayError::Format {
                column: column.to_string(),
                row: i + 1,
                value: raw.to_string(),
            })
        })
        .collect()
}

/// Parse `MM/DD/YYYY hh:mm AM|PM`.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw.trim(), TIMESTAMP_FORMAT).ok()
}

fn column_index(headers: &csv::StringRecord, name: &str) -> Result<usize> {
    headers
        .iter()
        .position(|h| h.trim_start_matches('\u{feff}').trim() == name)
        .ok_or_else(|| StayError::MissingColumn(name.to_string()))
}

// ---------------------------------------------------------------------------
// Kyte sales export
// ---------------------------------------------------------------------------

pub fn load_bookings(file_path: &Path, columns: &ColumnNames) -> Result<Dataset> {
    let file = std::fs::File::open(file_path)?;
    info!(path = %file_path.display(), "reading bookings");
    read_bookings(std::io::BufReader::new(file), columns)
}

/// Read every row of a Kyte export, keeping all of its columns. The first bad
/// timestamp or total aborts the read.
pub fn read_bookings<R: Read>(reader: R, columns: &ColumnNames) -> Result<Dataset> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    let idx_time = column_index(&headers, &columns.timestamp)?;
    let idx_total = column_index(&headers, &columns.total)?;
    let idx_desc = column_index(&headers, &columns.description)?;
    debug!(idx_time, idx_total, idx_desc, "resolved columns");

    let mut raw_times = Vec::new();
    let mut raw_totals = Vec::new();
    let mut descriptions = Vec::new();
    let mut records = Vec::new();
    for result in rdr.records() {
        let record = result?;
        raw_times.push(record.get(idx_time).unwrap_or("").to_string());
        raw_totals.push(record.get(idx_total).unwrap_or("").to_string());
        descriptions.push(record.get(idx_desc).unwrap_or("").to_string());
        records.push(record.iter().map(str::to_string).collect::<Vec<_>>());
    }

    let cleaned = clean_total_column(&columns.total, &raw_totals)?;

    let mut bookings = Vec::with_capacity(cleaned.len());
    for (i, (((time, total_text), (cleaned_total, description)), fields)) in raw_times
        .into_iter()
        .zip(raw_totals)
        .zip(cleaned.into_iter().zip(descriptions))
        .zip(records)
        .enumerate()
    {
        let timestamp = parse_timestamp(&time).ok_or_else(|| StayError::Format {
            column: columns.timestamp.clone(),
            row: i + 1,
            value: time.clone(),
        })?;
        bookings.push(Booking {
            timestamp,
            total_text,
            cleaned_total,
            description,
            fields,
        });
    }

    info!(rows = bookings.len(), columns = headers.len(), "bookings loaded");
    Ok(Dataset {
        headers: headers
            .iter()
            .map(|h| h.trim_start_matches('\u{feff}').to_string())
            .collect(),
        bookings,
    })
}
