//! Per-crop averages of yield and cultivated area.

use indexmap::IndexMap;

use crate::analyzers::types::CropAverage;
use crate::analyzers::utility::{mean, round3};
use crate::records::NormalizedRecord;

/// Reduces normalized records to one [`CropAverage`] per distinct crop
/// name, in the order each crop first appears in the input.
///
/// Each average is the arithmetic mean over every record of that crop,
/// rounded to three decimals.
pub fn average_yield_and_area(records: &[NormalizedRecord]) -> Vec<CropAverage> {
    let mut groups: IndexMap<&str, (Vec<f64>, Vec<f64>)> = IndexMap::new();
    for record in records {
        let (yields, areas) = groups.entry(record.crop_name.as_str()).or_default();
        yields.push(record.yield_of_crops);
        areas.push(record.area_under_cultivation);
    }

    groups
        .into_iter()
        .map(|(crop_name, (yields, areas))| CropAverage {
            crop_name: crop_name.to_string(),
            avg_yield: round3(mean(&yields)),
            avg_area: round3(mean(&areas)),
        })
        .collect()
}
