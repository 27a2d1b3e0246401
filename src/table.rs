//! Tabular form of the hourly records and CSV output.

pub mod error;

use crate::table::error::TableError;
use crate::types::hourly_record::HourlyRecord;
use chrono::NaiveDateTime;
use polars::prelude::*;
use std::fs::File;
use std::path::Path;

pub const DATE_COLUMN: &str = "date";
pub const TEMPERATURE_COLUMN: &str = "temperature_2m";
pub const CITY_COLUMN: &str = "city";

/// ISO-8601 UTC, e.g. `2024-01-01T00:00:00Z`.
pub const CSV_DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Builds a `date, temperature_2m, city` frame, preserving record order.
pub fn records_to_frame(records: &[HourlyRecord]) -> Result<DataFrame, TableError> {
    let dates: Vec<NaiveDateTime> = records.iter().map(|r| r.date.naive_utc()).collect();
    let temperatures: Vec<Option<f64>> = records.iter().map(|r| r.temperature_2m).collect();
    let cities: Vec<&str> = records.iter().map(|r| r.city.as_str()).collect();

    Ok(df!(
        DATE_COLUMN => dates,
        TEMPERATURE_COLUMN => temperatures,
        CITY_COLUMN => cities,
    )?)
}

/// Stacks frames vertically in the order given.
pub fn concat(frames: Vec<DataFrame>) -> Result<DataFrame, TableError> {
    let mut frames = frames.into_iter();
    let Some(mut combined) = frames.next() else {
        return records_to_frame(&[]);
    };
    for frame in frames {
        combined.vstack_mut(&frame)?;
    }
    Ok(combined)
}

/// Writes `df` as CSV with a header row, replacing any existing file.
///
/// Null temperatures are written as empty fields.
pub fn write_csv(df: &mut DataFrame, path: &Path) -> Result<(), TableError> {
    let mut file = File::create(path).map_err(|e| TableError::CsvWriteIo(path.to_path_buf(), e))?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .with_datetime_format(Some(CSV_DATETIME_FORMAT.to_string()))
        .finish(df)
        .map_err(|e| TableError::CsvWritePolars(path.to_path_buf(), e))
}
