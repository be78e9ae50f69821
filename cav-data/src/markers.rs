//! Marker layers, styles and popup content for one snapshot.

use crate::display::{compute_display_records, DisplayRecords};
use crate::snapshot::DataSnapshot;
use cav_stations::{Dataset, LatLng, StationRecord, Variable};
use serde::Serialize;

/// Used for data markers when the variable key is not recognised.
pub const DEFAULT_DATA_COLOR: &str = "#888888";

/// The three overlay layers of the data map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerLayer {
    BaselineStations,
    MonthlyStations,
    DataValues,
}

impl MarkerLayer {
    pub const ALL: [MarkerLayer; 3] = [
        MarkerLayer::BaselineStations,
        MarkerLayer::MonthlyStations,
        MarkerLayer::DataValues,
    ];

    pub fn key(self) -> &'static str {
        match self {
            MarkerLayer::BaselineStations => "baseline",
            MarkerLayer::MonthlyStations => "monthly",
            MarkerLayer::DataValues => "data",
        }
    }

    /// Name shown in the map's layers control.
    pub fn name(self) -> &'static str {
        match self {
            MarkerLayer::BaselineStations => "Baseline stations",
            MarkerLayer::MonthlyStations => "Monthly stations",
            MarkerLayer::DataValues => "Data values",
        }
    }

    pub fn visible_by_default(self) -> bool {
        !matches!(self, MarkerLayer::BaselineStations)
    }
}

/// Circle marker options, serialized with Leaflet's option names.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkerStyle {
    pub color: String,
    pub radius: f64,
    pub weight: f64,
    pub fill_opacity: f64,
}

/// Small black dot marking where a station is.
pub fn station_marker_style() -> MarkerStyle {
    MarkerStyle {
        color: "#000000".to_string(),
        radius: 1.0,
        weight: 1.0,
        fill_opacity: 1.0,
    }
}

/// Larger translucent circle carrying a data value, coloured by variable.
pub fn data_marker_style(variable: &str) -> MarkerStyle {
    let color = match variable.parse::<Variable>() {
        Ok(v) => v.color(),
        Err(e) => {
            log::warn!("{}; using default marker colour", e);
            DEFAULT_DATA_COLOR
        }
    };
    MarkerStyle {
        color: color.to_string(),
        radius: 8.0,
        weight: 1.0,
        fill_opacity: 0.5,
    }
}

/// What a data marker's popup shows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PopupContent {
    pub station_name: String,
    pub position: LatLng,
    pub elevation: Option<f64>,
    /// Which dataset `value` comes from.
    pub dataset: Dataset,
    pub value: Option<f64>,
    pub variable: Option<Variable>,
}

impl PopupContent {
    pub fn units(&self) -> &'static str {
        self.variable.map(Variable::units).unwrap_or("")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlacedMarker {
    pub position: LatLng,
    pub popup: Option<PopupContent>,
}

/// All markers of one layer, sharing a style.
#[derive(Debug, Clone, PartialEq)]
pub struct LayerMarkers {
    pub layer: MarkerLayer,
    pub style: MarkerStyle,
    pub markers: Vec<PlacedMarker>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MarkerSet {
    /// In [`MarkerLayer::ALL`] order.
    pub layers: Vec<LayerMarkers>,
    /// Records left off the map because they had no usable position.
    pub skipped: usize,
}

impl MarkerSet {
    pub fn layer(&self, layer: MarkerLayer) -> Option<&LayerMarkers> {
        self.layers.iter().find(|l| l.layer == layer)
    }

    pub fn marker_count(&self) -> usize {
        self.layers.iter().map(|l| l.markers.len()).sum()
    }
}

/// Build every marker the map shows for `snapshot`.
pub fn build_marker_set(snapshot: &DataSnapshot, variable: &str) -> MarkerSet {
    let mut skipped = 0;

    let baseline = location_markers(&snapshot.baseline, "baseline", &mut skipped);
    let monthly = location_markers(&snapshot.monthly, "monthly", &mut skipped);

    let known_variable = variable.parse::<Variable>().ok();
    let records = compute_display_records(snapshot.dataset, &snapshot.baseline, &snapshot.monthly);
    let mut data = Vec::with_capacity(records.len());
    let mut place = |name: &str, position: Option<LatLng>, elevation: Option<f64>, value: Option<f64>| {
        match position {
            Some(position) => data.push(PlacedMarker {
                position,
                popup: Some(PopupContent {
                    station_name: name.to_string(),
                    position,
                    elevation,
                    dataset: snapshot.dataset,
                    value,
                    variable: known_variable,
                }),
            }),
            None => {
                log::warn!("data station '{}' has no usable position; not drawn", name);
                skipped += 1;
            }
        }
    };
    match &records {
        DisplayRecords::Stations(stations) => {
            for s in stations.iter() {
                place(&s.station_name, s.position(), s.elevation, station_value(snapshot.dataset, s));
            }
        }
        DisplayRecords::Anomalies(anomalies) => {
            for a in anomalies {
                place(&a.station_name, a.position(), a.elevation, Some(a.anomaly));
            }
        }
    }

    MarkerSet {
        layers: vec![
            LayerMarkers {
                layer: MarkerLayer::BaselineStations,
                style: station_marker_style(),
                markers: baseline,
            },
            LayerMarkers {
                layer: MarkerLayer::MonthlyStations,
                style: station_marker_style(),
                markers: monthly,
            },
            LayerMarkers {
                layer: MarkerLayer::DataValues,
                style: data_marker_style(variable),
                markers: data,
            },
        ],
        skipped,
    }
}

fn station_value(dataset: Dataset, record: &StationRecord) -> Option<f64> {
    match dataset {
        Dataset::Baseline => record.datum,
        Dataset::Monthly => record.statistic,
        Dataset::Anomaly => None,
    }
}

fn location_markers(records: &[StationRecord], source: &str, skipped: &mut usize) -> Vec<PlacedMarker> {
    records
        .iter()
        .filter_map(|r| match r.position() {
            Some(position) => Some(PlacedMarker { position, popup: None }),
            None => {
                log::warn!(
                    "{} station {} ({}) has no usable position; not drawn",
                    source,
                    r.station_db_id,
                    r.station_name
                );
                *skipped += 1;
                None
            }
        })
        .collect()
}
