//! Core types shared by the clinic form widgets.
//!
//! - `records`: typed AJAX response records and the `Choice` they render as
//! - `timestamp` / `time_range`: wall-clock timestamps and working-schedule ranges
//! - `endpoint`: the server endpoints the forms read from
//! - `dom`: fixed element identifiers the server templates rely on

pub mod dom;
pub mod endpoint;
pub mod error;
pub mod records;
pub mod time_range;
pub mod timestamp;
