//! Reading station record files.

use anyhow::Context;
use cav_data::DataSnapshot;
use cav_stations::{Dataset, StationRecord};
use log::info;
use std::path::Path;

/// Read station records from a `.csv` or `.json` file, chosen by extension.
pub fn read_records(path: &Path) -> anyhow::Result<Vec<StationRecord>> {
    let data = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    let records = match extension.as_deref() {
        Some("csv") => StationRecord::parse_csv(&data),
        Some("json") => StationRecord::parse_json(&data),
        _ => anyhow::bail!("{}: expected a .csv or .json file", path.display()),
    }
    .with_context(|| format!("failed to parse {}", path.display()))?;
    info!("read {} records from {}", records.len(), path.display());
    Ok(records)
}

pub fn read_snapshot(dataset: Dataset, baseline: &Path, monthly: &Path) -> anyhow::Result<DataSnapshot> {
    Ok(DataSnapshot::new(dataset, read_records(baseline)?, read_records(monthly)?))
}
