//! Weekly calendar that accumulates drag selections into the hidden
//! working schedule input.

use crate::js_bridge;
use crate::state::ScheduleState;
use clinic_core::dom;
use dioxus::prelude::*;
use futures::channel::mpsc;
use futures::StreamExt;
use log::warn;

#[derive(Props, Clone, PartialEq)]
pub struct ScheduleCalendarProps {
    /// FullCalendar options object as JSON
    pub config_json: String,
    #[props(default = 600)]
    pub min_height: u32,
}

#[component]
pub fn ScheduleCalendar(props: ScheduleCalendarProps) -> Element {
    let state = use_context::<ScheduleState>();
    let config_json = props.config_json.clone();

    // One-time setup: render the stored ranges, then append selections as
    // they arrive. Reads use `peek` so this never re-runs.
    use_effect(move || {
        let mut schedule = state.schedule;
        let (sender, mut selections) = mpsc::unbounded::<(String, String)>();
        js_bridge::register_select_handler(sender);

        let events_json =
            serde_json::to_string(&schedule.peek().events()).unwrap_or_else(|_| "[]".to_string());
        js_bridge::render_calendar(dom::CALENDAR, &events_json, &config_json);

        spawn(async move {
            while let Some((start, end)) = selections.next().await {
                let added = schedule.write().select(&start, &end);
                match added {
                    Ok(event) => match serde_json::to_string(&event) {
                        Ok(event_json) => js_bridge::add_calendar_event(&event_json),
                        Err(e) => warn!("Could not encode calendar event: {}", e),
                    },
                    Err(e) => warn!("Ignoring calendar selection {} - {}: {}", start, end, e),
                }
            }
        });
    });

    let hidden = state.schedule.read().hidden_value();
    let style = format!("min-height: {}px; width: 100%;", props.min_height);

    rsx! {
        div {
            input {
                r#type: "hidden",
                id: dom::WORKING_SCHEDULE,
                name: dom::WORKING_SCHEDULE_NAME,
                value: "{hidden}",
            }
            div {
                id: dom::CALENDAR,
                style: "{style}",
            }
        }
    }
}
