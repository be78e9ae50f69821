//! [`MarkerSink`] backed by a Leaflet map through the JS bridge.
//!
//! Marker calls are buffered as [`MapOp`]s and sent to the page in one
//! `applyDataMapOps` call per flush, so a full refresh costs one eval.

use crate::components::station_popup::render_station_popup;
use crate::js_bridge;
use cav_data::{MarkerLayer, MarkerSink, MarkerStyle, PopupContent};
use cav_stations::LatLng;
use serde::Serialize;

/// Handle to a layer group on the Leaflet map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeafletLayer {
    key: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarkerPayload {
    pub lat: f64,
    pub lng: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub popup: Option<String>,
}

/// One operation understood by `applyDataMapOps` in `data-map.js`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum MapOp {
    CreateLayer {
        layer: &'static str,
        name: &'static str,
        visible: bool,
    },
    ClearLayer {
        layer: &'static str,
    },
    RemoveLayer {
        layer: &'static str,
    },
    AddMarkers {
        layer: &'static str,
        style: MarkerStyle,
        markers: Vec<MarkerPayload>,
    },
}

/// Ordered map operations not yet sent to the page.
///
/// Consecutive markers for the same layer and style share one `AddMarkers`.
#[derive(Debug, Default)]
pub struct MapOpBuffer {
    ops: Vec<MapOp>,
}

impl MapOpBuffer {
    pub fn push(&mut self, op: MapOp) {
        self.ops.push(op);
    }

    pub fn push_marker(&mut self, layer: &'static str, style: &MarkerStyle, marker: MarkerPayload) {
        if let Some(MapOp::AddMarkers {
            layer: last_layer,
            style: last_style,
            markers,
        }) = self.ops.last_mut()
        {
            if *last_layer == layer && last_style == style {
                markers.push(marker);
                return;
            }
        }
        self.ops.push(MapOp::AddMarkers {
            layer,
            style: style.clone(),
            markers: vec![marker],
        });
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    pub fn take(&mut self) -> Vec<MapOp> {
        std::mem::take(&mut self.ops)
    }
}

pub struct LeafletSink {
    container_id: String,
    buffer: MapOpBuffer,
}

impl LeafletSink {
    pub fn new(container_id: &str) -> Self {
        Self {
            container_id: container_id.to_string(),
            buffer: MapOpBuffer::default(),
        }
    }
}

impl MarkerSink for LeafletSink {
    type Layer = LeafletLayer;

    fn create_layer(&mut self, layer: MarkerLayer) -> LeafletLayer {
        self.buffer.push(MapOp::CreateLayer {
            layer: layer.key(),
            name: layer.name(),
            visible: layer.visible_by_default(),
        });
        LeafletLayer { key: layer.key() }
    }

    fn add_marker(
        &mut self,
        layer: &LeafletLayer,
        position: LatLng,
        style: &MarkerStyle,
        popup: Option<&PopupContent>,
    ) {
        self.buffer.push_marker(
            layer.key,
            style,
            MarkerPayload {
                lat: position.lat,
                lng: position.lng,
                popup: popup.map(render_station_popup),
            },
        );
    }

    fn clear_layer(&mut self, layer: &LeafletLayer) {
        self.buffer.push(MapOp::ClearLayer { layer: layer.key });
    }

    fn release_layer(&mut self, layer: &LeafletLayer) {
        self.buffer.push(MapOp::RemoveLayer { layer: layer.key });
    }

    fn flush(&mut self) {
        if self.buffer.is_empty() {
            return;
        }
        let ops = self.buffer.take();
        match serde_json::to_string(&ops) {
            Ok(json) => js_bridge::apply_map_ops(&self.container_id, &json),
            Err(e) => log::error!("cannot serialize {} map ops: {}", ops.len(), e),
        }
    }
}
