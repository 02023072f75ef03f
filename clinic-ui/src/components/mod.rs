//! Reusable Dioxus RSX components for the clinic form apps.

mod cascade_select;
mod checklist_box;
mod form_header;
mod schedule_calendar;

pub use cascade_select::CascadeSelect;
pub use checklist_box::ChecklistBox;
pub use form_header::FormHeader;
pub use schedule_calendar::ScheduleCalendar;
