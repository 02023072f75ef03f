//! Working schedule accumulation.
//!
//! The hidden `working_schedule` input is what the form submits. The calendar
//! shows whatever that field held at page load plus every range selected
//! since; selections are only ever appended.

use clinic_core::error::FormError;
use clinic_core::time_range::{parse_schedule, serialize_schedule, TimeRange};
use clinic_core::timestamp::Timestamp;
use log::{error, info};
use serde::Serialize;

/// Event object handed to the calendar widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CalendarEvent {
    pub start: Timestamp,
    pub end: Timestamp,
    #[serde(rename = "allDay")]
    pub all_day: bool,
}

impl From<TimeRange> for CalendarEvent {
    fn from(range: TimeRange) -> Self {
        CalendarEvent {
            start: range.start,
            end: range.end,
            all_day: false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScheduleAccumulator {
    ranges: Vec<TimeRange>,
    // Hidden field text as loaded, echoed back until the first selection.
    untouched: Option<String>,
}

impl ScheduleAccumulator {
    /// Seed from the hidden field. Missing, blank or malformed input yields an
    /// empty schedule; parse failures are logged, never raised.
    pub fn from_hidden_value(raw: Option<&str>) -> Self {
        let raw = raw.unwrap_or_default();
        let ranges = match parse_schedule(raw) {
            Ok(ranges) => ranges,
            Err(e) => {
                error!("Invalid JSON in working schedule: {:#}", e);
                Vec::new()
            }
        };
        info!("Working schedule seeded with {} ranges", ranges.len());
        Self {
            ranges,
            untouched: Some(raw.to_string()),
        }
    }

    pub fn ranges(&self) -> &[TimeRange] {
        &self.ranges
    }

    /// Every range as a timed (non all-day) calendar event, in list order.
    pub fn events(&self) -> Vec<CalendarEvent> {
        self.ranges.iter().copied().map(CalendarEvent::from).collect()
    }

    /// Current value for the hidden input.
    pub fn hidden_value(&self) -> String {
        match &self.untouched {
            Some(raw) => raw.clone(),
            None => serialize_schedule(&self.ranges),
        }
    }

    /// Append a range. No de-duplication, overlap check or re-ordering.
    pub fn push(&mut self, range: TimeRange) -> CalendarEvent {
        self.ranges.push(range);
        self.untouched = None;
        CalendarEvent::from(range)
    }

    /// Append a drag selection reported by the calendar widget.
    ///
    /// Returns the single event to add to the visible calendar.
    pub fn select(&mut self, start: &str, end: &str) -> Result<CalendarEvent, FormError> {
        let range = TimeRange::new(Timestamp::parse(start)?, Timestamp::parse(end)?);
        Ok(self.push(range))
    }
}
