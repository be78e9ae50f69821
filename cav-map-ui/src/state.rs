//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use cav_data::loader::{LoadRequest, LoadedData};
use cav_stations::{Dataset, StationRecord, Variable};
use dioxus::prelude::*;
use std::rc::Rc;

/// Shared application state for the data viewer.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Whether a data load is in progress
    pub loading: Signal<bool>,
    /// Error message from the last failed load
    pub error_msg: Signal<Option<String>>,
    /// Dataset shown on the data layer
    pub dataset: Signal<Dataset>,
    /// Variable being displayed
    pub variable: Signal<Variable>,
    pub year: Signal<i32>,
    /// 1-12
    pub month: Signal<u32>,
    /// Baseline records from the most recent load
    pub baseline: Signal<Rc<[StationRecord]>>,
    /// Monthly records from the most recent load
    pub monthly: Signal<Rc<[StationRecord]>>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            loading: Signal::new(false),
            error_msg: Signal::new(None),
            dataset: Signal::new(Dataset::Anomaly),
            variable: Signal::new(Variable::Precip),
            year: Signal::new(2000),
            month: Signal::new(1),
            baseline: Signal::new(Rc::from(Vec::new())),
            monthly: Signal::new(Rc::from(Vec::new())),
        }
    }

    /// The load the current selection calls for.
    pub fn request(&self) -> LoadRequest {
        LoadRequest {
            variable: (self.variable)(),
            year: (self.year)(),
            month: (self.month)(),
        }
    }

    pub fn begin_load(&mut self) {
        self.loading.set(true);
    }

    /// Replace both record arrays with freshly loaded data.
    pub fn finish_load(&mut self, data: LoadedData) {
        self.baseline.set(data.baseline);
        self.monthly.set(data.monthly);
        self.error_msg.set(None);
        self.loading.set(false);
    }

    pub fn fail_load(&mut self, message: String) {
        log::error!("data load failed: {}", message);
        self.error_msg.set(Some(message));
        self.loading.set(false);
    }

    /// Text for the map's message overlay.
    pub fn map_message(&self) -> Option<String> {
        if (self.loading)() {
            Some("Loading...".to_string())
        } else if self.baseline.read().is_empty() && self.monthly.read().is_empty() {
            Some("No data".to_string())
        } else {
            None
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
