//! Record types for the crop dataset pipeline.

use serde::{Deserialize, Serialize};

/// A single row as it appears in the raw dataset, before normalization.
///
/// Every field is optional and string-encoded: the source data carries
/// missing and malformed values, and nothing is validated at this
/// stage. The serde renames map the dataset's verbose column headers
/// onto short field names, for both the JSON and CSV loaders.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawRecord {
    #[serde(rename = "Country")]
    pub country: Option<String>,

    #[serde(rename = "Year")]
    pub year: Option<String>,

    #[serde(rename = "Crop Name")]
    pub crop_name: Option<String>,

    #[serde(rename = "Crop Production (UOM:t(Tonnes))")]
    pub crop_production: Option<String>,

    #[serde(rename = "Yield Of Crops (UOM:Kg/Ha(KilogramperHectare))")]
    pub yield_of_crops: Option<String>,

    #[serde(rename = "Area Under Cultivation (UOM:Ha(Hectares))")]
    pub area_under_cultivation: Option<String>,
}

/// A fully typed record produced by the normalizer.
///
/// Measurement fields are always finite; absent or unparsable source
/// values have already been defaulted to 0.0.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedRecord {
    pub country: String,
    pub year: i32,
    pub crop_name: String,
    pub crop_production: f64,
    pub yield_of_crops: f64,
    pub area_under_cultivation: f64,
}
