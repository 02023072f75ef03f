use std::fmt;

/// Domain failures raised while decoding or driving the form widgets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    /// A timestamp in none of the accepted layouts.
    BadTimestamp(String),
    /// A field or checklist position that does not exist in the chain.
    UnknownTarget(usize),
    /// A change on a field whose upstream has no value yet.
    Blocked(usize),
    /// A value the field was never offered.
    UnknownChoice { position: usize, value: String },
    /// The server answered with a non-success status.
    HttpStatus { url: String, status: u16 },
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormError::BadTimestamp(raw) => write!(f, "Invalid timestamp: {:?}", raw),
            FormError::UnknownTarget(index) => write!(f, "No form target at position {}", index),
            FormError::Blocked(index) => write!(f, "Field at position {} is disabled", index),
            FormError::UnknownChoice { position, value } => {
                write!(f, "{:?} is not an option of the field at position {}", value, position)
            }
            FormError::HttpStatus { url, status } => {
                write!(f, "Request to {} failed with status {}", url, status)
            }
        }
    }
}

impl std::error::Error for FormError {}
