//! Visit record selectors
//!
//! clinic → doctor → time slot, plus the doctor's procedures as a checklist.
//! Selecting a doctor starts both the time slot and the procedure loads; each
//! fills its own target and a failure in one leaves the other alone.

use clinic_forms::presets;
use clinic_ui::components::{CascadeSelect, ChecklistBox, FormHeader};
use clinic_ui::state::use_chain_form;
use dioxus::prelude::*;
use log::info;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("visit-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let state = use_chain_form(presets::visit);

    use_effect(move || {
        info!(
            "Visit selectors bound against {}",
            state.chain.peek().endpoint_base()
        );
    });

    rsx! {
        div {
            style: "max-width: 600px; margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif;",
            FormHeader { title: "Visit".to_string() }
            CascadeSelect { index: 0, label: "Clinic".to_string() }
            CascadeSelect { index: 1, label: "Doctor".to_string() }
            CascadeSelect { index: 2, label: "Time slot".to_string() }

            div {
                style: "margin-top: 12px; padding-top: 8px; border-top: 1px solid #e0e0e0;",
                p {
                    style: "font-size: 12px; color: #666; margin: 0 0 4px 0;",
                    "Procedures performed:"
                }
                ChecklistBox { index: 0 }
            }
        }
    }
}
