//! Summary row types produced by the aggregation pipeline.

use serde::Serialize;

/// Per-year production extremes: the crops with the largest and
/// smallest production among all records of that year.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearlyExtreme {
    pub year: i32,
    pub max_crop: String,
    pub min_crop: String,
}

/// Per-crop averages of yield and cultivated area across all years
/// present, rounded to three decimals.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CropAverage {
    pub crop_name: String,
    pub avg_yield: f64,
    pub avg_area: f64,
}
