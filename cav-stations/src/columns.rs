//! Header-indexed access to CSV rows.

use crate::station::StationRecord;
use csv::StringRecord;
use std::collections::HashMap;
use std::str::FromStr;

/// Maps header names to column positions so rows can be read by name.
#[derive(Debug, Clone)]
pub struct CsvColumns {
    index: HashMap<String, usize>,
}

impl CsvColumns {
    pub fn from_headers(headers: &StringRecord) -> Self {
        let index = headers
            .iter()
            .enumerate()
            .map(|(i, name)| (name.trim().to_ascii_lowercase(), i))
            .collect();
        Self { index }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// The trimmed value of column `name`; blank cells and absent columns read as `None`.
    pub fn get<'r>(&self, row: &'r StringRecord, name: &str) -> Option<&'r str> {
        self.index
            .get(name)
            .and_then(|&i| row.get(i))
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    /// Parse column `name`, treating blanks as `None` and bad values as errors.
    pub fn parse<T>(&self, row: &StringRecord, name: &str) -> anyhow::Result<Option<T>>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        match self.get(row, name) {
            Some(raw) => raw
                .parse::<T>()
                .map(Some)
                .map_err(|e| anyhow::anyhow!("column {} value '{}': {}", name, raw, e)),
            None => Ok(None),
        }
    }

    /// Like [`CsvColumns::parse`] but the value must be present.
    pub fn require<T>(&self, row: &StringRecord, name: &str) -> anyhow::Result<T>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        self.parse(row, name)?
            .ok_or_else(|| anyhow::anyhow!("missing {}", name))
    }

    pub fn station_record(&self, row: &StringRecord) -> anyhow::Result<StationRecord> {
        Ok(StationRecord {
            station_db_id: self.require(row, "station_db_id")?,
            station_name: self.get(row, "station_name").unwrap_or_default().to_string(),
            lat: self.parse(row, "lat")?,
            lon: self.parse(row, "lon")?,
            elevation: self.parse(row, "elevation")?,
            datum: self.parse(row, "datum")?,
            statistic: self.parse(row, "statistic")?,
        })
    }
}
