//! Appointment booking selectors
//!
//! procedure → clinic → doctor → time slot. Doctors are loaded for the
//! selected procedure and clinic together; time slots for the selected
//! doctor at the selected clinic. Changing any select clears everything
//! after it.

use clinic_forms::presets;
use clinic_ui::components::{CascadeSelect, FormHeader};
use clinic_ui::state::use_chain_form;
use dioxus::prelude::*;
use log::info;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("appointment-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let state = use_chain_form(presets::appointment);

    use_effect(move || {
        info!(
            "Appointment selectors bound against {}",
            state.chain.peek().endpoint_base()
        );
    });

    rsx! {
        div {
            style: "max-width: 600px; margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif;",
            FormHeader {
                title: "Book an appointment".to_string(),
                hint: "Pick a procedure first; clinics, doctors and time slots follow.".to_string(),
            }
            CascadeSelect { index: 0, label: "Procedure".to_string() }
            CascadeSelect { index: 1, label: "Clinic".to_string() }
            CascadeSelect { index: 2, label: "Doctor".to_string() }
            CascadeSelect { index: 3, label: "Time slot".to_string() }
        }
    }
}
