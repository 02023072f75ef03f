//! Country / state / city selectors
//!
//! Mounted on the patient and clinic address forms. The country select is
//! rendered with its choices from the page seed; picking a country loads its
//! states, picking a state loads its cities. On an edit page the stored
//! address is replayed from the seed so all three selects come back filled.

use clinic_forms::presets;
use clinic_ui::components::{CascadeSelect, FormHeader};
use clinic_ui::state::use_chain_form;
use dioxus::prelude::*;
use log::info;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("locations-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let state = use_chain_form(presets::locations);

    use_effect(move || {
        info!(
            "Location selectors bound against {}",
            state.chain.peek().endpoint_base()
        );
    });

    rsx! {
        div {
            style: "max-width: 600px; margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif;",
            FormHeader { title: "Location".to_string() }
            CascadeSelect { index: 0, label: "Country".to_string() }
            CascadeSelect { index: 1, label: "State".to_string() }
            CascadeSelect { index: 2, label: "City".to_string() }
        }
    }
}
