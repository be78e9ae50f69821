//! Dropdown for the dataset shown on the data layer.

use crate::state::AppState;
use cav_stations::Dataset;
use dioxus::prelude::*;

#[component]
pub fn DatasetSelector() -> Element {
    let mut state = use_context::<AppState>();
    let current = (state.dataset)();

    let on_change = move |evt: Event<FormData>| match evt.value().parse::<Dataset>() {
        Ok(dataset) => state.dataset.set(dataset),
        Err(e) => log::warn!("{}", e),
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                r#for: "dataset-select",
                style: "font-weight: bold; margin-right: 8px;",
                "Show: "
            }
            select {
                id: "dataset-select",
                onchange: on_change,
                for dataset in Dataset::ALL {
                    option {
                        key: "{dataset}",
                        value: dataset.key(),
                        selected: dataset == current,
                        {dataset.label()}
                    }
                }
            }
        }
    }
}
