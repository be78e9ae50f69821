//! Dioxus RSX components for the climate anomaly viewer.

mod data_map;
mod dataset_selector;
mod error_display;
mod increment_decrement;
mod period_controls;
pub mod station_popup;
mod test_data_loader;
mod variable_selector;

pub use data_map::DataMap;
pub use dataset_selector::DatasetSelector;
pub use error_display::ErrorDisplay;
pub use increment_decrement::{IncrementDecrement, StepBy};
pub use period_controls::{PeriodControls, YEAR_STEPS};
pub use test_data_loader::{load_with_mode, DataLoaderMode, DataLoaderModeSelector, TestDataLoader};
pub use variable_selector::VariableSelector;
