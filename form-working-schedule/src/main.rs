//! Doctor working schedule calendar
//!
//! Shows the stored working ranges on a weekly FullCalendar grid. Every
//! drag selection adds a range to the calendar and to the hidden
//! `working_schedule` input, which is submitted with the rest of the form.

use clinic_ui::components::{FormHeader, ScheduleCalendar};
use clinic_ui::state::use_schedule_form;
use dioxus::prelude::*;
use log::info;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("working-schedule-root"))
        .launch(App);
}

/// FullCalendar options: week view, one-hour slots, no all-day row.
fn calendar_config() -> String {
    serde_json::json!({
        "initialView": "timeGridWeek",
        "selectable": true,
        "editable": true,
        "slotDuration": "01:00:00",
        "allDaySlot": false,
        "headerToolbar": {
            "left": "prev,next today",
            "center": "title",
            "right": "timeGridWeek,timeGridDay",
        },
    })
    .to_string()
}

#[component]
fn App() -> Element {
    let state = use_schedule_form();

    use_effect(move || {
        info!(
            "Working schedule calendar starts with {} range(s)",
            state.schedule.peek().ranges().len()
        );
    });

    rsx! {
        div {
            style: "max-width: 900px; margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif;",
            FormHeader {
                title: "Working schedule".to_string(),
                hint: "Drag across the calendar to add working hours.".to_string(),
            }
            ScheduleCalendar { config_json: calendar_config() }
        }
    }
}
