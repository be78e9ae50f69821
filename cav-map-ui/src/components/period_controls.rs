//! Year and month steppers for the displayed period.

use super::increment_decrement::{IncrementDecrement, StepBy};
use crate::state::AppState;
use cav_utils::dates;
use dioxus::prelude::*;

/// Year steps offered in the year stepper's dropdown.
pub const YEAR_STEPS: [i32; 4] = [1, 5, 10, 30];

/// Shows the period ("January 2000") with a year stepper and a month
/// stepper. Stepping the month past December or January carries into the
/// year.
#[component]
pub fn PeriodControls() -> Element {
    let mut state = use_context::<AppState>();
    let year = (state.year)();
    let month = (state.month)();
    let period = dates::format_period(year, month).unwrap_or_else(|e| e.to_string());

    let on_year = move |by: i32| {
        let year = (state.year)();
        state.year.set(year.saturating_add(by));
    };
    let on_month = move |by: i32| match dates::step_month((state.year)(), (state.month)(), by) {
        Ok((year, month)) => {
            state.year.set(year);
            state.month.set(month);
        }
        Err(e) => log::warn!("{}", e),
    };

    rsx! {
        div {
            style: "margin: 8px 0; display: flex; gap: 12px; align-items: center;",
            strong { "{period}" }
            label {
                "Year "
                IncrementDecrement {
                    id: "year-step",
                    by: StepBy::Choices(YEAR_STEPS.to_vec()),
                    on_increment: on_year,
                }
            }
            label {
                "Month "
                IncrementDecrement {
                    id: "month-step",
                    on_increment: on_month,
                }
            }
        }
    }
}
