//! Map of station locations and data values.

use crate::js_bridge::{self, MapView};
use crate::leaflet::LeafletSink;
use cav_data::{DataSnapshot, MarkerRefresher};
use cav_stations::{Dataset, StationRecord};
use dioxus::prelude::*;
use std::rc::Rc;

/// Props for DataMap
#[derive(Props, Clone, PartialEq)]
pub struct DataMapProps {
    /// DOM id of the map container
    #[props(default = "data-map".to_string())]
    pub id: String,
    /// Which record set the data layer shows
    pub dataset: Dataset,
    /// Variable key; selects the data marker colour
    pub variable: String,
    /// Baseline records from the anomaly data service
    pub baseline: Rc<[StationRecord]>,
    /// Monthly records from the anomaly data service
    pub monthly: Rc<[StationRecord]>,
    /// Optional message shown over the map (e.g., "Loading...")
    #[props(default)]
    pub message: Option<String>,
    #[props(default = 520)]
    pub height: u32,
}

/// Leaflet map with baseline, monthly and data layers.
///
/// The first render mounts the markers; later renders hand the new props to
/// the refresher, which redraws only when dataset or records changed.
#[component]
pub fn DataMap(props: DataMapProps) -> Element {
    let mut refresher: Signal<Option<MarkerRefresher<LeafletSink>>> = use_signal(|| None);

    let snapshot = DataSnapshot {
        dataset: props.dataset,
        baseline: props.baseline.clone(),
        monthly: props.monthly.clone(),
    };
    let map_id = props.id.clone();
    use_effect(use_reactive(
        (&snapshot, &props.variable),
        move |(snapshot, variable)| {
            let mut slot = refresher.write();
            match slot.as_mut() {
                Some(r) => {
                    if r.update(snapshot, &variable) {
                        log::debug!("data map {} redrawn", map_id);
                    }
                }
                None => {
                    js_bridge::load_map_scripts();
                    js_bridge::init_data_map(&map_id, &MapView::default());
                    let mut r = MarkerRefresher::new(LeafletSink::new(&map_id));
                    r.mount(snapshot, &variable);
                    *slot = Some(r);
                }
            }
        },
    ));

    let drop_id = props.id.clone();
    use_drop(move || js_bridge::destroy_data_map(&drop_id));

    rsx! {
        div {
            style: "position: relative; width: 100%;",
            div {
                id: "{props.id}",
                style: "width: 100%; height: {props.height}px;",
            }
            if let Some(message) = &props.message {
                div {
                    class: "data-map-message",
                    style: "position: absolute; bottom: 24px; left: 12px; z-index: 1000; padding: 6px 10px; background: rgba(255, 255, 255, 0.9); border-radius: 4px; font-size: 13px; color: #333;",
                    "{message}"
                }
            }
        }
    }
}
