//! Loads test data for the current selection.
//!
//! Stands in for the anomaly data service: either synthetic data or records
//! from bundled fixture CSVs, chosen with [`DataLoaderModeSelector`].

use cav_data::loader::{DataLoader, FakeDataLoader, FixtureDataLoader, LoadRequest, LoadedData};
use cav_stations::{UnknownKey, Variable};
use dioxus::prelude::*;
use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum DataLoaderMode {
    #[default]
    Fake,
    Fixture,
}

impl DataLoaderMode {
    pub const ALL: [DataLoaderMode; 2] = [DataLoaderMode::Fake, DataLoaderMode::Fixture];

    pub fn key(self) -> &'static str {
        match self {
            DataLoaderMode::Fake => "fake",
            DataLoaderMode::Fixture => "fixture",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DataLoaderMode::Fake => "Fake data",
            DataLoaderMode::Fixture => "Fixture data",
        }
    }
}

impl fmt::Display for DataLoaderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for DataLoaderMode {
    type Err = UnknownKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        DataLoaderMode::ALL
            .into_iter()
            .find(|m| m.key() == s)
            .ok_or_else(|| UnknownKey {
                kind: "loader mode",
                value: s.to_string(),
            })
    }
}

/// Load `request` with the loader `mode` selects. `fixtures` is the parsed
/// fixture loader, or the reason the fixtures could not be parsed.
pub fn load_with_mode(
    mode: DataLoaderMode,
    fixtures: Result<&FixtureDataLoader, &str>,
    request: &LoadRequest,
) -> anyhow::Result<LoadedData> {
    let fake = FakeDataLoader;
    let loader: &dyn DataLoader = match mode {
        DataLoaderMode::Fake => &fake,
        DataLoaderMode::Fixture => {
            fixtures.map_err(|e| anyhow::anyhow!("fixture data unavailable: {}", e))?
        }
    };
    log::debug!(
        "loading {} {}-{:02} with {} loader",
        request.variable,
        request.year,
        request.month,
        loader.name()
    );
    loader.load(request)
}

#[component]
pub fn DataLoaderModeSelector(value: DataLoaderMode, on_change: EventHandler<DataLoaderMode>) -> Element {
    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                r#for: "loader-mode",
                style: "font-weight: bold; margin-right: 8px;",
                "Data source: "
            }
            select {
                id: "loader-mode",
                onchange: move |evt: Event<FormData>| match evt.value().parse::<DataLoaderMode>() {
                    Ok(mode) => on_change.call(mode),
                    Err(e) => log::warn!("{}", e),
                },
                for mode in DataLoaderMode::ALL {
                    option {
                        key: "{mode}",
                        value: mode.key(),
                        selected: mode == value,
                        {mode.label()}
                    }
                }
            }
        }
    }
}

/// Props for TestDataLoader
#[derive(Props, Clone, PartialEq)]
pub struct TestDataLoaderProps {
    pub variable: Variable,
    pub year: i32,
    pub month: u32,
    /// Baseline fixture CSV
    pub baseline_csv: &'static str,
    /// Monthly fixture CSV
    pub monthly_csv: &'static str,
    pub on_data_will_load: EventHandler<()>,
    pub on_data_did_load: EventHandler<LoadedData>,
    pub on_did_catch: EventHandler<String>,
}

/// Reloads whenever the variable, period or loader mode changes.
#[component]
pub fn TestDataLoader(props: TestDataLoaderProps) -> Element {
    let mut mode = use_signal(DataLoaderMode::default);
    let baseline_csv = props.baseline_csv;
    let monthly_csv = props.monthly_csv;
    let fixtures = use_hook(move || {
        Rc::new(FixtureDataLoader::from_csv(baseline_csv, monthly_csv).map_err(|e| e.to_string()))
    });

    let request = LoadRequest {
        variable: props.variable,
        year: props.year,
        month: props.month,
    };
    let on_will_load = props.on_data_will_load;
    let on_did_load = props.on_data_did_load;
    let on_catch = props.on_did_catch;
    use_effect(use_reactive((&request,), move |(request,)| {
        let mode = mode();
        on_will_load.call(());
        let fixtures = (*fixtures).as_ref().map_err(String::as_str);
        match load_with_mode(mode, fixtures, &request) {
            Ok(data) => on_did_load.call(data),
            Err(e) => on_catch.call(format!("{:#}", e)),
        }
    }));

    rsx! {
        DataLoaderModeSelector {
            value: mode(),
            on_change: move |m: DataLoaderMode| mode.set(m),
        }
    }
}
