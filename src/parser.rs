//! CSV parser for the scored airport dataset.

use anyhow::{Context, Result};

use crate::records::AirportRecord;

/// Decodes scored airport records from raw CSV bytes.
///
/// # Errors
///
/// Returns an error if the header row is missing a required column or
/// any row fails to deserialize. Missing per-record coordinates are
/// not an error; they deserialize to `None`.
pub fn parse_records(bytes: &[u8]) -> Result<Vec<AirportRecord>> {
    let mut rdr = csv::Reader::from_reader(bytes);

    let mut records = Vec::new();
    for result in rdr.deserialize() {
        let record: AirportRecord = result.context("parsing scored airport CSV")?;
        records.push(record);
    }

    Ok(records)
}
