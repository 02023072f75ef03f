//! Element identifiers and form field names shared with the server templates.

pub const COUNTRY: &str = "id_country";
pub const STATE: &str = "id_state";
pub const CITY: &str = "id_city";
pub const PROCEDURE: &str = "id_procedure";
pub const CLINIC: &str = "id_clinic";
pub const DOCTOR: &str = "id_doctor";
pub const APPOINTMENT_DATE: &str = "id_appointment_date";
pub const VISIT_DATE: &str = "id_visit_date";
pub const WORKING_SCHEDULE: &str = "id_working_schedule";
pub const PROCEDURES_CONTAINER: &str = "procedures-container";
pub const CALENDAR: &str = "calendar";

/// Name of the checkbox inputs rendered inside the procedures container.
pub const PROCEDURES_DONE: &str = "procedures_done";

/// Name of the hidden working schedule input.
pub const WORKING_SCHEDULE_NAME: &str = "working_schedule";

/// Element holding the JSON page seed (Django `json_script`).
pub const SEED_ELEMENT: &str = "clinic-form-seed";
