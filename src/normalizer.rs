//! The typed boundary of the pipeline.
//!
//! Raw rows arrive with every field optional and string-encoded;
//! normalized records leave with concrete types. Untyped values never
//! travel past this module.

use thiserror::Error;
use tracing::warn;

use crate::records::{NormalizedRecord, RawRecord};

/// Raised when a raw year field does not match the expected
/// `"<label>, <year>"` shape, e.g. `"Financial Year (Apr - Mar), 1950"`.
///
/// A corrupt year cannot be defaulted without skewing the yearly
/// grouping, so the whole batch aborts and nothing is rendered.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("row {row}: malformed year field {value:?}, expected \"<label>, <year>\"")]
pub struct MalformedYearError {
    pub row: usize,
    pub value: String,
}

/// Output of [`normalize`]: the typed records plus a count of
/// measurement fields that were unparsable and defaulted to 0.0.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedBatch {
    pub records: Vec<NormalizedRecord>,
    pub defaulted_fields: usize,
}

/// Converts raw rows into an equal-length, same-order sequence of
/// [`NormalizedRecord`]s.
///
/// Missing or unparsable measurement fields default to 0.0 and are
/// counted in the batch diagnostic. A malformed year field fails the
/// whole batch.
///
/// # Errors
///
/// Returns [`MalformedYearError`] for the first row whose year field
/// is missing, lacks the `", "` separator, or has a non-numeric suffix.
pub fn normalize(raw: &[RawRecord]) -> Result<NormalizedBatch, MalformedYearError> {
    let mut records = Vec::with_capacity(raw.len());
    let mut defaulted_fields = 0usize;

    for (row, item) in raw.iter().enumerate() {
        let mut measurement = |value: &Option<String>| match parse_measurement(value.as_deref()) {
            Some(v) => v,
            None => {
                defaulted_fields += 1;
                0.0
            }
        };

        records.push(NormalizedRecord {
            country: item.country.clone().unwrap_or_default(),
            year: parse_year(item.year.as_deref(), row)?,
            crop_name: item.crop_name.clone().unwrap_or_default(),
            crop_production: measurement(&item.crop_production),
            yield_of_crops: measurement(&item.yield_of_crops),
            area_under_cultivation: measurement(&item.area_under_cultivation),
        });
    }

    if defaulted_fields > 0 {
        warn!(
            defaulted_fields,
            "Unparsable measurement fields defaulted to 0.0"
        );
    }

    Ok(NormalizedBatch {
        records,
        defaulted_fields,
    })
}

/// Extracts the integer year from a `"<label>, <year>"` phrase.
fn parse_year(value: Option<&str>, row: usize) -> Result<i32, MalformedYearError> {
    let malformed = || MalformedYearError {
        row,
        value: value.unwrap_or_default().to_string(),
    };

    let (_, suffix) = value.ok_or_else(malformed)?.split_once(", ").ok_or_else(malformed)?;

    suffix.trim().parse::<i32>().map_err(|_| malformed())
}

/// Parses a measurement field. Returns `None` when the value is
/// absent, non-numeric, or non-finite.
fn parse_measurement(value: Option<&str>) -> Option<f64> {
    value
        .and_then(|v| v.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite())
}
