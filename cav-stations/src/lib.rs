pub mod columns;
pub mod dataset;
pub mod station;
pub mod variable;

pub use dataset::Dataset;
pub use station::{AnomalyRecord, LatLng, StationDbId, StationRecord};
pub use variable::Variable;

use std::fmt;

/// Returned when a dataset or variable key is not one of the known values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownKey {
    pub kind: &'static str,
    pub value: String,
}

impl fmt::Display for UnknownKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown {} '{}'", self.kind, self.value)
    }
}

impl std::error::Error for UnknownKey {}
