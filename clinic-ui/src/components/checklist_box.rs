//! Checkbox list filled by the chain (procedures performed during a visit).

use crate::state::FormState;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChecklistBoxProps {
    /// Position of the checklist in the chain
    pub index: usize,
}

#[component]
pub fn ChecklistBox(props: ChecklistBoxProps) -> Element {
    let state = use_context::<FormState>();
    let Some(checklist) = state.chain.read().checklist(props.index).cloned() else {
        return rsx! {};
    };
    let index = props.index;

    rsx! {
        div {
            id: "{checklist.dom_id}",
            style: "margin: 8px 0;",
            for choice in checklist.choices().iter() {
                div {
                    class: "form-check",
                    input {
                        r#type: "checkbox",
                        class: "form-check-input",
                        name: "{checklist.input_name}",
                        value: "{choice.value}",
                        id: "procedure_{choice.value}",
                        checked: checklist.is_checked(&choice.value),
                        onchange: {
                            let value = choice.value.clone();
                            move |evt: Event<FormData>| state.toggle(index, &value, evt.checked())
                        },
                    }
                    label {
                        class: "form-check-label",
                        r#for: "procedure_{choice.value}",
                        "{choice.label}"
                    }
                }
            }
        }
    }
}
