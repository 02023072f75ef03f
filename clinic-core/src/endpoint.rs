use crate::records::RecordKind;

/// Base path used when the page does not override it.
pub const DEFAULT_ENDPOINT_BASE: &str = "/ajax";

/// Server endpoints feeding the dependent selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    States,
    Cities,
    Clinics,
    Doctors,
    Timeslots,
    Procedures,
}

impl Endpoint {
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::States => "load-states/",
            Endpoint::Cities => "load-cities/",
            Endpoint::Clinics => "load-clinics/",
            Endpoint::Doctors => "load-doctors/",
            Endpoint::Timeslots => "load-timeslots/",
            Endpoint::Procedures => "load-procedures/",
        }
    }

    pub fn record_kind(&self) -> RecordKind {
        match self {
            Endpoint::Timeslots => RecordKind::Slot,
            _ => RecordKind::Named,
        }
    }

    /// Build a GET url, e.g. `/ajax/load-states/?country_id=7`.
    ///
    /// Parameters keep their given order and values are percent-encoded.
    pub fn url(&self, base: &str, params: &[(&str, &str)]) -> String {
        let mut url = format!("{}/{}", base.trim_end_matches('/'), self.path());
        for (i, (key, value)) in params.iter().enumerate() {
            url.push(if i == 0 { '?' } else { '&' });
            url.push_str(key);
            url.push('=');
            url.push_str(&urlencoding::encode(value));
        }
        url
    }
}
