//! "-" / "+" stepper control.
//!
//! Clicking "-" calls back with the negative step, "+" with the positive
//! step. The step is either fixed or picked from a dropdown of choices.

use dioxus::prelude::*;

/// Step amount, either fixed or chosen by the user from a list.
#[derive(Debug, Clone, PartialEq)]
pub enum StepBy {
    Fixed(i32),
    Choices(Vec<i32>),
}

impl Default for StepBy {
    fn default() -> Self {
        StepBy::Fixed(1)
    }
}

impl StepBy {
    /// The step in effect before the user picks one.
    pub fn initial(&self) -> i32 {
        match self {
            StepBy::Fixed(by) => *by,
            StepBy::Choices(choices) => choices.first().copied().unwrap_or(1),
        }
    }
}

#[component]
pub fn IncrementDecrement(
    /// Called with `-by` or `+by`
    on_increment: EventHandler<i32>,
    #[props(default)] by: StepBy,
    #[props(default = "step".to_string())] id: String,
    #[props(default)] class: String,
) -> Element {
    let mut current = use_signal(|| by.initial());
    let amount = current();

    rsx! {
        div {
            class: "IncrementDecrement {class}",
            style: "display: inline-flex; align-items: stretch; gap: 2px;",
            button {
                r#type: "button",
                title: "Decrement",
                onclick: move |_| on_increment.call(-current()),
                "-"
            }
            if let StepBy::Choices(choices) = &by {
                select {
                    id: "{id}",
                    onchange: move |evt: Event<FormData>| {
                        if let Ok(value) = evt.value().parse::<i32>() {
                            current.set(value);
                        }
                    },
                    for choice in choices.iter() {
                        option {
                            key: "{choice}",
                            value: "{choice}",
                            selected: *choice == amount,
                            "{choice}"
                        }
                    }
                }
            }
            button {
                r#type: "button",
                title: "Increment",
                onclick: move |_| on_increment.call(current()),
                "+"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::StepBy;

    #[test]
    fn default_steps_by_one() {
        assert_eq!(StepBy::default().initial(), 1);
    }

    #[test]
    fn choices_start_at_first() {
        assert_eq!(StepBy::Choices(vec![5, 10, 30]).initial(), 5);
        assert_eq!(StepBy::Choices(Vec::new()).initial(), 1);
        assert_eq!(StepBy::Fixed(3).initial(), 3);
    }
}
