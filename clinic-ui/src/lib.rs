//! Shared Dioxus components and browser glue for the clinic form apps.
//!
//! This crate provides:
//! - `binding`: reads the server's page seed from the DOM, once
//! - `fetch`: `window.fetch` wrapper returning decoded choices
//! - `js_bridge`: FullCalendar setup and incremental event adds via `js_sys::eval()`
//! - `state`: reactive form state shared through Dioxus context
//! - `components`: reusable RSX components (cascading selects, checklist, calendar)

pub mod binding;
pub mod components;
pub mod fetch;
pub mod js_bridge;
pub mod state;
