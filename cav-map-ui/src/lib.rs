//! Dioxus components and Leaflet bridge for the climate anomaly viewer.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for the Leaflet map functions via `js_sys::eval()`
//! - `leaflet`: the `MarkerSink` that turns marker calls into batched map ops
//! - `state`: Reactive AppState with Dioxus Signals
//! - `components`: Reusable RSX components (map, selectors, steppers, etc.)

pub mod components;
pub mod js_bridge;
pub mod leaflet;
pub mod state;
