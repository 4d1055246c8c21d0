//! Per-year production extremes.

use indexmap::IndexMap;

use crate::analyzers::types::YearlyExtreme;
use crate::records::NormalizedRecord;

/// Reduces normalized records to one [`YearlyExtreme`] per distinct
/// year, in the order each year first appears in the input.
///
/// Each year's group is scanned left to right; strict comparisons keep
/// the earliest record on equal production, for both the maximum and
/// the minimum. A single-record year reports the same crop for both.
pub fn max_min_production_by_year(records: &[NormalizedRecord]) -> Vec<YearlyExtreme> {
    let mut groups: IndexMap<i32, Vec<&NormalizedRecord>> = IndexMap::new();
    for record in records {
        groups.entry(record.year).or_default().push(record);
    }

    groups
        .into_iter()
        .map(|(year, group)| {
            // A year exists only because at least one record carries it,
            // so the group is never empty.
            let mut max = group[0];
            let mut min = group[0];
            for &record in &group[1..] {
                if record.crop_production > max.crop_production {
                    max = record;
                }
                if record.crop_production < min.crop_production {
                    min = record;
                }
            }

            YearlyExtreme {
                year,
                max_crop: max.crop_name.clone(),
                min_crop: min.crop_name.clone(),
            }
        })
        .collect()
}
