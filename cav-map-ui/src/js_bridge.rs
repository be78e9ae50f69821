//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! The Leaflet bridge lives in `assets/js/data-map.js` and is evaluated as a
//! global script that exposes `window.initDataMap`, `window.applyDataMapOps`
//! and `window.destroyDataMap`. Leaflet itself is loaded by the host page;
//! the bridge waits for it before creating a map.

use cav_stations::LatLng;
use serde::Serialize;

static DATA_MAP_JS: &str = include_str!("../assets/js/data-map.js");

/// Initial view and base tiles of a data map.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapView {
    pub center: LatLng,
    pub zoom: u8,
    pub max_zoom: u8,
    pub tile_url: String,
    pub attribution: String,
}

impl Default for MapView {
    /// British Columbia on OpenStreetMap tiles.
    fn default() -> Self {
        Self {
            center: LatLng { lat: 54.5, lng: -125.5 },
            zoom: 5,
            max_zoom: 12,
            tile_url: "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png".to_string(),
            attribution: "&copy; OpenStreetMap contributors".to_string(),
        }
    }
}

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('CAV JS call failed:', e); }}",
        code
    );
    if let Err(e) = js_sys::eval(&wrapped) {
        log::warn!("JS eval failed: {:?}", e);
    }
}

/// Evaluate the map bridge script once per page.
pub fn load_map_scripts() {
    call_js(&format!(
        "if (!window.__cavMapScriptsLoaded) {{ (0, eval)({}); }}",
        js_string(DATA_MAP_JS)
    ));
}

/// Create a Leaflet map in the element with id `container_id`.
///
/// Returns immediately; the bridge polls until Leaflet and the element exist.
pub fn init_data_map(container_id: &str, view: &MapView) {
    let view_json = match serde_json::to_string(view) {
        Ok(json) => json,
        Err(e) => {
            log::error!("cannot serialize map view: {}", e);
            return;
        }
    };
    call_js(&format!(
        "window.initDataMap({}, {});",
        js_string(container_id),
        view_json
    ));
}

/// Send a batch of serialized layer operations to the map.
pub fn apply_map_ops(container_id: &str, ops_json: &str) {
    call_js(&format!(
        "window.applyDataMapOps({}, {});",
        js_string(container_id),
        ops_json
    ));
}

pub fn destroy_data_map(container_id: &str) {
    call_js(&format!(
        "if (window.destroyDataMap) window.destroyDataMap({});",
        js_string(container_id)
    ));
}

/// Quote `s` as a JS string literal.
pub fn js_string(s: &str) -> String {
    serde_json::to_string(s).unwrap_or_else(|_| "\"\"".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn js_string_escapes_quotes_and_newlines() {
        assert_eq!(js_string("it's \"here\"\n"), r#""it's \"here\"\n""#);
    }

    #[test]
    fn map_view_uses_leaflet_names() {
        let json = serde_json::to_value(MapView::default()).unwrap();
        assert_eq!(json["center"]["lng"], -125.5);
        assert_eq!(json["maxZoom"], 12);
        assert!(json["tileUrl"].as_str().unwrap().contains("{z}"));
    }
}
