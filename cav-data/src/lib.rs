//! Station data reconciliation for the climate anomaly map.
//!
//! The map shows three layers: baseline station locations, monthly station
//! locations, and data markers for the selected dataset. This crate decides
//! when those layers need redrawing and what goes on them:
//!
//! - `snapshot`: the data-relevant inputs of one update and the change test
//! - `display`: the records the data layer shows, including the anomaly join
//! - `markers`: marker positions, styles and popup content per layer
//! - `refresh`: clears and redraws a [`refresh::MarkerSink`] when data changes
//! - `loader`: fake and fixture-backed test data

pub mod display;
pub mod loader;
pub mod markers;
pub mod refresh;
pub mod snapshot;

pub use display::{compute_display_records, DisplayRecords};
pub use markers::{build_marker_set, MarkerLayer, MarkerSet, MarkerStyle, PopupContent};
pub use refresh::{MarkerRefresher, MarkerSink};
pub use snapshot::{should_refresh, DataSnapshot};
