//! Presentation and export sinks for the summary views.
//!
//! The table sink is a pure projection: one row per element, one cell
//! per field, under caller-supplied column labels. Export writes the
//! same rows to CSV files and the combined document to JSON.

use anyhow::{Result, bail};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fs::File;
use std::path::Path;
use tabled::builder::Builder;
use tabled::settings::Style;
use tracing::debug;

use crate::analyzers::types::{CropAverage, YearlyExtreme};

/// Display labels for [`YearlyExtreme`] rows, in field declaration order.
pub const YEARLY_EXTREME_LABELS: [&str; 3] = [
    "Year",
    "Crop with Max Production",
    "Crop with Min Production",
];

/// Display labels for [`CropAverage`] rows, in field declaration order.
pub const CROP_AVERAGE_LABELS: [&str; 3] = [
    "Crop",
    "Average Yield of the Crop",
    "Average Cultivation Area of the Crop",
];

/// A record that can be projected into table cells, one per field, in
/// declaration order.
pub trait Tabular {
    fn cells(&self) -> Vec<String>;
}

impl Tabular for YearlyExtreme {
    fn cells(&self) -> Vec<String> {
        vec![
            self.year.to_string(),
            self.max_crop.clone(),
            self.min_crop.clone(),
        ]
    }
}

impl Tabular for CropAverage {
    fn cells(&self) -> Vec<String> {
        vec![
            self.crop_name.clone(),
            format!("{:.3}", self.avg_yield),
            format!("{:.3}", self.avg_area),
        ]
    }
}

/// Renders rows under the given column labels as a titled text table.
///
/// # Errors
///
/// Returns an error if any row projects a cell count different from
/// the number of labels.
pub fn render_table<R: Tabular>(title: &str, columns: &[&str], rows: &[R]) -> Result<String> {
    let mut builder = Builder::default();
    builder.push_record(columns.iter().copied());

    for row in rows {
        let cells = row.cells();
        if cells.len() != columns.len() {
            bail!(
                "row projects {} cells but the table has {} columns",
                cells.len(),
                columns.len()
            );
        }
        builder.push_record(cells);
    }

    let mut table = builder.build();
    table.with(Style::sharp());

    Ok(format!("{title}\n{table}"))
}

/// Combined summary document written by the JSON exporter.
#[derive(Debug, Serialize)]
pub struct ReportSummary {
    pub generated_at: DateTime<Utc>,
    pub yearly_extremes: Vec<YearlyExtreme>,
    pub crop_averages: Vec<CropAverage>,
}

impl ReportSummary {
    pub fn new(yearly_extremes: Vec<YearlyExtreme>, crop_averages: Vec<CropAverage>) -> Self {
        Self {
            generated_at: Utc::now(),
            yearly_extremes,
            crop_averages,
        }
    }
}

/// Writes rows to a CSV file with a single header row.
pub fn write_csv<S: Serialize>(path: &Path, rows: &[S]) -> Result<()> {
    debug!(path = %path.display(), rows = rows.len(), "Writing summary CSV");

    let mut writer = csv::Writer::from_path(path)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;

    Ok(())
}

/// Writes the combined summary as pretty-printed JSON.
pub fn write_json(path: &Path, summary: &ReportSummary) -> Result<()> {
    debug!(path = %path.display(), "Writing summary JSON");

    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, summary)?;

    Ok(())
}
