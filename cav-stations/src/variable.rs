use crate::UnknownKey;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A climate variable served by the monthly anomaly data service.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variable {
    Precip,
    Tmin,
    Tmax,
}

impl Variable {
    pub const ALL: [Variable; 3] = [Variable::Precip, Variable::Tmin, Variable::Tmax];

    /// Key used by the data service and in fixture files.
    pub fn key(self) -> &'static str {
        match self {
            Variable::Precip => "precip",
            Variable::Tmin => "tmin",
            Variable::Tmax => "tmax",
        }
    }

    /// Short label for selectors and popups.
    pub fn label(self) -> &'static str {
        match self {
            Variable::Precip => "Precipitation",
            Variable::Tmin => "Tmin",
            Variable::Tmax => "Tmax",
        }
    }

    pub fn tooltip(self) -> &'static str {
        match self {
            Variable::Precip => "Monthly total precipitation",
            Variable::Tmin => "Monthly average of daily minimum temperature",
            Variable::Tmax => "Monthly average of daily maximum temperature",
        }
    }

    /// Data marker colour on the map.
    pub fn color(self) -> &'static str {
        match self {
            Variable::Precip => "#36ff32",
            Variable::Tmin => "#3388ff",
            Variable::Tmax => "#ff6831",
        }
    }

    pub fn units(self) -> &'static str {
        match self {
            Variable::Precip => "mm",
            Variable::Tmin | Variable::Tmax => "°C",
        }
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Variable {
    type Err = UnknownKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Variable::ALL
            .into_iter()
            .find(|v| v.key() == s.trim())
            .ok_or_else(|| UnknownKey {
                kind: "variable",
                value: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::Variable;

    #[test]
    fn parses_known_keys() {
        assert_eq!("precip".parse::<Variable>().unwrap(), Variable::Precip);
        assert_eq!(" tmax ".parse::<Variable>().unwrap(), Variable::Tmax);
    }

    #[test]
    fn rejects_unknown_key() {
        let err = "snow".parse::<Variable>().unwrap_err();
        assert_eq!(err.to_string(), "unknown variable 'snow'");
    }

    #[test]
    fn colors_match_map_palette() {
        assert_eq!(Variable::Precip.color(), "#36ff32");
        assert_eq!(Variable::Tmin.color(), "#3388ff");
        assert_eq!(Variable::Tmax.color(), "#ff6831");
    }
}
