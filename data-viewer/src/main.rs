//! Climate Anomaly Map
//!
//! Shows weather stations of British Columbia on a Leaflet map, with a data
//! layer of baseline climatology, monthly values, or their anomaly
//! (`statistic - datum`) for a chosen variable and month.
//!
//! Data flow:
//! 1. `build.rs` copies `baseline.csv` and `monthly.csv` into `OUT_DIR`.
//! 2. `include_str!` embeds these CSVs into the WASM binary.
//! 3. `TestDataLoader` loads baseline and monthly records for the selected
//!    variable, year and month (synthetic or fixture data) into `AppState`.
//! 4. `DataMap` reconciles the records with its marker layers, redrawing
//!    only when the dataset or the records changed.

use cav_data::loader::LoadedData;
use cav_map_ui::components::{
    DataMap, DatasetSelector, ErrorDisplay, PeriodControls, TestDataLoader, VariableSelector,
};
use cav_map_ui::state::AppState;
use dioxus::prelude::*;
use wasm_bindgen::JsValue;

/// Baseline climatology for every fixture station, variable and month.
const BASELINE_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/baseline.csv"));
/// Monthly values for the fixture stations.
const MONTHLY_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/monthly.csv"));

/// Map container DOM element ID used by Leaflet to render into.
const MAP_ID: &str = "data-map";

const LEAFLET_CSS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.css";
const LEAFLET_JS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.js";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("data-viewer-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(AppState::new);
    web_sys::console::log_1(&JsValue::from_str("[CAV] data-viewer App component mounted"));

    rsx! {
        document::Stylesheet { href: LEAFLET_CSS }
        document::Script { src: LEAFLET_JS }
        DataViewer {}
    }
}

#[component]
fn DataViewer() -> Element {
    let mut state = use_context::<AppState>();
    let variable = (state.variable)();

    rsx! {
        div {
            style: "padding: 16px; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",

            h2 {
                style: "margin: 0 0 4px 0; color: #333;",
                "Climate Anomaly Map"
            }
            p {
                style: "margin: 0 0 12px 0; font-size: 13px; color: #666;",
                "Station baseline, monthly values and monthly anomaly from baseline"
            }

            div {
                style: "display: flex; flex-wrap: wrap; gap: 24px; align-items: flex-start; margin-bottom: 8px;",
                VariableSelector {}
                div {
                    DatasetSelector {}
                    PeriodControls {}
                    TestDataLoader {
                        variable,
                        year: (state.year)(),
                        month: (state.month)(),
                        baseline_csv: BASELINE_CSV,
                        monthly_csv: MONTHLY_CSV,
                        on_data_will_load: move |_| state.begin_load(),
                        on_data_did_load: move |data: LoadedData| {
                            log::info!(
                                "loaded {} baseline, {} monthly records",
                                data.baseline.len(),
                                data.monthly.len()
                            );
                            state.finish_load(data);
                        },
                        on_did_catch: move |message: String| state.fail_load(message),
                    }
                }
            }

            // Markers are recoloured only by a successful reload, so after a
            // failed one the map still shows the previous variable.
            if let Some(err) = (state.error_msg)() {
                ErrorDisplay {
                    title: "Data load failed".to_string(),
                    message: err,
                    on_dismiss: move |_| state.error_msg.set(None),
                }
            }

            DataMap {
                id: MAP_ID.to_string(),
                dataset: (state.dataset)(),
                variable: variable.key().to_string(),
                baseline: (state.baseline)(),
                monthly: (state.monthly)(),
                message: state.map_message(),
            }
        }
    }
}
