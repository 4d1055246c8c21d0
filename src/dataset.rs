//! Dataset loading.
//!
//! Loading sits outside the core pipeline: it produces the in-memory
//! `Vec<RawRecord>` that normalization consumes, from either a JSON
//! array export or a CSV file with the same column headers.

use anyhow::{Result, bail};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::debug;

use crate::records::RawRecord;

/// Loads the raw dataset at `path`, dispatching on the file extension.
///
/// # Errors
///
/// Returns an error for unreadable files, malformed JSON/CSV, or an
/// extension other than `.json` / `.csv`.
pub fn load_records(path: &Path) -> Result<Vec<RawRecord>> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();

    let records = match extension.as_str() {
        "json" => load_json(path)?,
        "csv" => load_csv(path)?,
        other => bail!(
            "unsupported dataset extension {:?} for {}, expected .json or .csv",
            other,
            path.display()
        ),
    };

    debug!(path = %path.display(), rows = records.len(), "Dataset loaded");

    Ok(records)
}

fn load_json(path: &Path) -> Result<Vec<RawRecord>> {
    let file = File::open(path)?;
    let records = serde_json::from_reader(BufReader::new(file))?;
    Ok(records)
}

fn load_csv(path: &Path) -> Result<Vec<RawRecord>> {
    let file = File::open(path)?;
    let mut rdr = csv::Reader::from_reader(file);

    let mut rows = Vec::new();
    for result in rdr.deserialize() {
        let record: RawRecord = result?;
        rows.push(record);
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::fs;
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        env::temp_dir().join(name)
    }

    const JSON_DATA: &str = r#"[
        {
            "Country": "India",
            "Year": "Financial Year (Apr - Mar), 1950",
            "Crop Name": "Rice",
            "Crop Production (UOM:t(Tonnes))": "20577.8",
            "Yield Of Crops (UOM:Kg/Ha(KilogramperHectare))": "668",
            "Area Under Cultivation (UOM:Ha(Hectares))": "30815"
        },
        {
            "Country": "India",
            "Year": "Financial Year (Apr - Mar), 1950",
            "Crop Name": "Wheat",
            "Crop Production (UOM:t(Tonnes))": "",
            "Yield Of Crops (UOM:Kg/Ha(KilogramperHectare))": "663",
            "Area Under Cultivation (UOM:Ha(Hectares))": "9750"
        }
    ]"#;

    const CSV_DATA: &str = "\
Country,Year,Crop Name,Crop Production (UOM:t(Tonnes)),Yield Of Crops (UOM:Kg/Ha(KilogramperHectare)),Area Under Cultivation (UOM:Ha(Hectares))
India,\"Financial Year (Apr - Mar), 1950\",Rice,20577.8,668,30815
India,\"Financial Year (Apr - Mar), 1950\",Wheat,,663,9750
";

    #[test]
    fn test_load_json_dataset() {
        let path = temp_path("agro_stats_test_dataset.json");
        fs::write(&path, JSON_DATA).unwrap();

        let records = load_records(&path).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].crop_name.as_deref(), Some("Rice"));
        // JSON keeps the empty string; only normalization interprets it.
        assert_eq!(records[1].crop_production.as_deref(), Some(""));

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_load_csv_dataset() {
        let path = temp_path("agro_stats_test_dataset.csv");
        fs::write(&path, CSV_DATA).unwrap();

        let records = load_records(&path).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(
            records[0].year.as_deref(),
            Some("Financial Year (Apr - Mar), 1950")
        );
        // An empty CSV field deserializes to None.
        assert_eq!(records[1].crop_production, None);

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_json_and_csv_normalize_identically() {
        let json_path = temp_path("agro_stats_test_same.json");
        let csv_path = temp_path("agro_stats_test_same.csv");
        fs::write(&json_path, JSON_DATA).unwrap();
        fs::write(&csv_path, CSV_DATA).unwrap();

        let from_json = crate::normalizer::normalize(&load_records(&json_path).unwrap()).unwrap();
        let from_csv = crate::normalizer::normalize(&load_records(&csv_path).unwrap()).unwrap();

        assert_eq!(from_json, from_csv);

        fs::remove_file(&json_path).unwrap();
        fs::remove_file(&csv_path).unwrap();
    }

    #[test]
    fn test_unknown_extension_is_rejected() {
        let path = temp_path("agro_stats_test_dataset.txt");
        fs::write(&path, "not a dataset").unwrap();

        let result = load_records(&path);
        assert!(result.is_err());

        fs::remove_file(&path).unwrap();
    }
}
