//! Radio buttons for choosing the climate variable.

use crate::state::AppState;
use cav_stations::Variable;
use dioxus::prelude::*;

/// Variable radio group with a tooltip per option.
/// Reads and writes `AppState::variable`.
#[component]
pub fn VariableSelector() -> Element {
    let mut state = use_context::<AppState>();
    let selected = (state.variable)();

    rsx! {
        div {
            role: "radiogroup",
            style: "margin: 8px 0; display: flex; flex-direction: column; gap: 4px;",
            for variable in Variable::ALL {
                label {
                    key: "{variable}",
                    title: variable.tooltip(),
                    style: "cursor: pointer;",
                    input {
                        r#type: "radio",
                        name: "variable",
                        value: variable.key(),
                        checked: variable == selected,
                        onchange: move |_| state.variable.set(variable),
                    }
                    " "
                    {variable.label()}
                }
            }
        }
    }
}
