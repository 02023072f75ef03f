//! Typed wrappers around the FullCalendar global via `js_sys::eval()`.
//!
//! FullCalendar is loaded by the page as a plain script. The calendar
//! instance lives on `window` so later calls can add events to it without a
//! redraw, and drag selections are reported back through a Rust closure that
//! is also parked on `window`.

use futures::channel::mpsc::UnboundedSender;
use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsValue;

/// `window` property holding the rendered calendar.
const CALENDAR_HANDLE: &str = "__clinicCalendar";

/// `window` property holding the selection callback.
const SELECT_HANDLER: &str = "__clinicCalendarSelect";

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('Clinic JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Forward every calendar drag selection as `(startStr, endStr)` into `sender`.
///
/// The closure is leaked so it stays callable for the life of the page.
pub fn register_select_handler(sender: UnboundedSender<(String, String)>) {
    let callback = Closure::<dyn FnMut(String, String)>::new(move |start: String, end: String| {
        if sender.unbounded_send((start, end)).is_err() {
            warn!("Calendar selection dropped: receiver is gone");
        }
    });
    match web_sys::window() {
        Some(window) => {
            if let Err(e) = js_sys::Reflect::set(
                window.as_ref(),
                &JsValue::from_str(SELECT_HANDLER),
                callback.as_ref(),
            ) {
                warn!("Could not register calendar select handler: {:?}", e);
            }
        }
        None => warn!("No window; calendar selections will be ignored"),
    }
    callback.forget();
}

/// Polls made for FullCalendar and the container before giving up (100ms apart).
const RENDER_POLL_LIMIT: u32 = 100;

/// Render the weekly calendar into `container_id`.
///
/// `events_json` is the initial event list and `config_json` the FullCalendar
/// options object. Polls until both FullCalendar and the container exist,
/// and stops with a console error after `RENDER_POLL_LIMIT` tries.
pub fn render_calendar(container_id: &str, events_json: &str, config_json: &str) {
    call_js(&calendar_script(container_id, events_json, config_json));
}

fn calendar_script(container_id: &str, events_json: &str, config_json: &str) -> String {
    format!(
        r#"
        (function() {{
            var attempts = 0;
            var poll = setInterval(function() {{
                var el = document.getElementById('{container_id}');
                if (typeof FullCalendar !== 'undefined' && el) {{
                    clearInterval(poll);
                    try {{
                        var options = Object.assign({config_json}, {{
                            events: {events_json},
                            select: function(info) {{
                                if (window.{handler}) window.{handler}(info.startStr, info.endStr);
                            }}
                        }});
                        var calendar = new FullCalendar.Calendar(el, options);
                        calendar.render();
                        window.{handle} = calendar;
                    }} catch(e) {{ console.error('[clinic] calendar render error:', e); }}
                }} else if (++attempts >= {limit}) {{
                    clearInterval(poll);
                    console.error('[clinic] FullCalendar or #{container_id} never appeared');
                }}
            }}, 100);
        }})();
        "#,
        handler = SELECT_HANDLER,
        handle = CALENDAR_HANDLE,
        limit = RENDER_POLL_LIMIT,
    )
}

/// Add one event to the rendered calendar without redrawing the rest.
pub fn add_calendar_event(event_json: &str) {
    call_js(&format!(
        "if (window.{handle}) {{ window.{handle}.addEvent({event_json}); }} \
         else {{ console.warn('[clinic] calendar not ready, event not shown'); }}",
        handle = CALENDAR_HANDLE,
    ));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn calendar_poll_gives_up_after_the_limit() {
        let script = calendar_script("calendar", "[]", "{}");
        assert!(script.contains("++attempts >= 100"));
        assert_eq!(script.matches("clearInterval(poll)").count(), 2);
        assert!(script.contains("getElementById('calendar')"));
    }

    #[test]
    fn calendar_script_wires_events_and_select_handler() {
        let events = r#"[{"start":"2024-01-01T09:00:00","end":"2024-01-01T10:00:00","allDay":false}]"#;
        let script = calendar_script("calendar", events, r#"{"initialView":"timeGridWeek"}"#);
        assert!(script.contains(&format!("events: {}", events)));
        assert!(script.contains("window.__clinicCalendarSelect(info.startStr, info.endStr)"));
        assert!(script.contains("window.__clinicCalendar = calendar"));
    }
}
