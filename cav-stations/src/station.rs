use crate::columns::CsvColumns;
use csv::ReaderBuilder;
use serde::{Deserialize, Serialize};

/// Opaque station identifier, unique within one dataset snapshot.
pub type StationDbId = i64;

/// A map position in decimal degrees.
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    /// Builds a position only when both coordinates are finite.
    pub fn checked(lat: Option<f64>, lon: Option<f64>) -> Option<LatLng> {
        match (lat, lon) {
            (Some(lat), Some(lng)) if lat.is_finite() && lng.is_finite() => Some(LatLng { lat, lng }),
            _ => None,
        }
    }
}

/// A station entry from either the baseline or the monthly dataset.
///
/// Baseline records carry `datum` (the climatological reference value),
/// monthly records carry `statistic` (the observed value for the month).
/// Every field except the id may be absent in a service response.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct StationRecord {
    pub station_db_id: StationDbId,
    #[serde(default)]
    pub station_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lon: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elevation: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub datum: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub statistic: Option<f64>,
}

/// A station of the derived anomaly dataset: `anomaly = statistic - datum`.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct AnomalyRecord {
    pub station_name: String,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub elevation: Option<f64>,
    pub anomaly: f64,
}

impl AnomalyRecord {
    pub fn position(&self) -> Option<LatLng> {
        LatLng::checked(self.lat, self.lon)
    }
}

impl StationRecord {
    pub fn new(station_db_id: StationDbId, station_name: impl Into<String>) -> Self {
        Self {
            station_db_id,
            station_name: station_name.into(),
            lat: None,
            lon: None,
            elevation: None,
            datum: None,
            statistic: None,
        }
    }

    pub fn with_location(mut self, lat: f64, lon: f64) -> Self {
        self.lat = Some(lat);
        self.lon = Some(lon);
        self
    }

    pub fn with_elevation(mut self, elevation: f64) -> Self {
        self.elevation = Some(elevation);
        self
    }

    pub fn with_datum(mut self, datum: f64) -> Self {
        self.datum = Some(datum);
        self
    }

    pub fn with_statistic(mut self, statistic: f64) -> Self {
        self.statistic = Some(statistic);
        self
    }

    /// The marker position, or `None` when a coordinate is missing or not finite.
    pub fn position(&self) -> Option<LatLng> {
        LatLng::checked(self.lat, self.lon)
    }

    /// Parse a JSON array of station records, as returned by the
    /// `/baseline` and `/monthly` endpoints.
    pub fn parse_json(json: &str) -> anyhow::Result<Vec<StationRecord>> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse a CSV string with a header row into station records.
    ///
    /// Columns are matched by header name (`station_db_id`, `station_name`,
    /// `lat`, `lon`, `elevation`, `datum`, `statistic`); unknown columns are
    /// ignored and missing ones read as empty. Rows whose id or numeric
    /// fields do not parse are skipped.
    pub fn parse_csv(csv_data: &str) -> anyhow::Result<Vec<StationRecord>> {
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(csv_data.as_bytes());
        let columns = CsvColumns::from_headers(rdr.headers()?);

        let mut records = Vec::new();
        let mut skipped = 0u32;
        for (line, result) in rdr.records().enumerate() {
            let row = result?;
            match columns.station_record(&row) {
                Ok(record) => records.push(record),
                Err(e) => {
                    log::warn!("skipping station row {}: {}", line + 2, e);
                    skipped += 1;
                }
            }
        }
        log::info!("parsed {} station records, skipped {}", records.len(), skipped);
        Ok(records)
    }
}
