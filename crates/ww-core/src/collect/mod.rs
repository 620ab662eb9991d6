//! Sighting record collection.
//!
//! Reads delimited sighting records into memory. The layout is fixed:
//! date (`%m/%d/%y`), pod label, latitude, longitude, with a header row
//! that is skipped. Any malformed field fails the whole load - silently
//! skipping rows would bias the density and classification estimates.
//!
//! The field parsers are pure and exposed for fuzzing.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;
use ww_common::{Error, Result, SightingEvent};

/// Date format used by the sighting records.
const DATE_FORMAT: &str = "%m/%d/%y";

/// Load sightings from a reader over delimited records.
///
/// Record numbers in errors are 1-based over data records (the header
/// is not counted).
pub fn load_sightings<R: Read>(reader: R) -> Result<Vec<SightingEvent>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut sightings = Vec::new();
    for (index, record) in csv_reader.records().enumerate() {
        let record = record?;
        sightings.push(parse_record(&record, index + 1)?);
    }

    tracing::info!(records = sightings.len(), "sighting history loaded");
    Ok(sightings)
}

/// Load sightings from a file path.
pub fn load_sightings_path<P: AsRef<Path>>(path: P) -> Result<Vec<SightingEvent>> {
    let file = File::open(path.as_ref())?;
    load_sightings(file)
}

/// Parse one data record into a sighting event.
///
/// Never panics; malformed input yields `Error::MalformedRecord` naming
/// the record and the offending field.
pub fn parse_record(record: &csv::StringRecord, record_no: usize) -> Result<SightingEvent> {
    let date_text = field(record, 0, "date", record_no)?;
    let date = parse_date(date_text).ok_or_else(|| Error::MalformedRecord {
        record: record_no,
        message: format!("unparseable date '{date_text}'"),
    })?;

    let pods = field(record, 1, "pod label", record_no)?.to_string();

    let latitude_text = field(record, 2, "latitude", record_no)?;
    let latitude = parse_coordinate(latitude_text, 90.0).ok_or_else(|| Error::MalformedRecord {
        record: record_no,
        message: format!("unparseable latitude '{latitude_text}'"),
    })?;

    let longitude_text = field(record, 3, "longitude", record_no)?;
    let longitude =
        parse_coordinate(longitude_text, 180.0).ok_or_else(|| Error::MalformedRecord {
            record: record_no,
            message: format!("unparseable longitude '{longitude_text}'"),
        })?;

    Ok(SightingEvent {
        date,
        pods,
        latitude,
        longitude,
    })
}

fn field<'a>(
    record: &'a csv::StringRecord,
    index: usize,
    name: &str,
    record_no: usize,
) -> Result<&'a str> {
    record.get(index).ok_or_else(|| Error::MalformedRecord {
        record: record_no,
        message: format!("missing {name} field"),
    })
}

/// Parse a record date (`%m/%d/%y`).
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text, DATE_FORMAT).ok()
}

/// Parse a decimal-degree coordinate, rejecting non-finite values and
/// magnitudes beyond `limit`.
pub fn parse_coordinate(text: &str, limit: f64) -> Option<f64> {
    let value: f64 = text.parse().ok()?;
    if !value.is_finite() || value.abs() > limit {
        return None;
    }
    Some(value)
}
