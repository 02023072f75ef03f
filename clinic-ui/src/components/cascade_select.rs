//! Dependent dropdown bound to one position of the form's chain.

use crate::state::FormState;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct CascadeSelectProps {
    /// Position of the field in the chain
    pub index: usize,
    /// Visible label text
    pub label: String,
}

/// Renders the field's current options and enabled state, and reports
/// changes back to `FormState`.
#[component]
pub fn CascadeSelect(props: CascadeSelectProps) -> Element {
    let state = use_context::<FormState>();
    let Some(field) = state.chain.read().field(props.index).cloned() else {
        return rsx! {};
    };
    let index = props.index;
    let options = field.options();

    let on_change = move |evt: Event<FormData>| {
        state.change(index, &evt.value());
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                r#for: "{field.dom_id}",
                style: "font-weight: bold; margin-right: 8px;",
                "{props.label}"
            }
            select {
                id: "{field.dom_id}",
                name: "{field.name}",
                disabled: !field.is_enabled(),
                onchange: on_change,
                for opt in options.iter() {
                    option {
                        value: "{opt.value}",
                        selected: opt.selected,
                        "{opt.label}"
                    }
                }
            }
        }
    }
}
