use std::fmt::{self, Display};

/// Errors produced by model constructors and parsing of user selections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    UnknownPlatform(String),
    InvalidSelection { field: &'static str, value: String },
}

impl Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::UnknownPlatform(raw) => {
                write!(f, "unknown platform: {raw}")
            }
            ModelError::InvalidSelection { field, value } => {
                write!(f, "invalid {field} selection: {value}")
            }
        }
    }
}

impl std::error::Error for ModelError {}

pub type Result<T> = std::result::Result<T, ModelError>;
