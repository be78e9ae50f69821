use crate::UnknownKey;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which record set the data layer of the map displays.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dataset {
    Baseline,
    Monthly,
    #[default]
    Anomaly,
}

impl Dataset {
    pub const ALL: [Dataset; 3] = [Dataset::Baseline, Dataset::Monthly, Dataset::Anomaly];

    pub fn key(self) -> &'static str {
        match self {
            Dataset::Baseline => "baseline",
            Dataset::Monthly => "monthly",
            Dataset::Anomaly => "anomaly",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Dataset::Baseline => "Baseline",
            Dataset::Monthly => "Monthly",
            Dataset::Anomaly => "Anomaly",
        }
    }
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Dataset {
    type Err = UnknownKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Dataset::ALL
            .into_iter()
            .find(|d| d.key() == s.trim())
            .ok_or_else(|| UnknownKey {
                kind: "dataset",
                value: s.to_string(),
            })
    }
}
