//! Error types for combination generation
//!
//! `ValidationError` covers structural problems found while scanning the input.
//! `CombinationError` is what the public operations return; validation failures
//! are wrapped in `InvalidInput` so the cause stays reachable through `source()`.

use std::fmt;

/// Structural problem in a sections input (first violation only)
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Section key must be non numeric key, but \"{section}\" given.")]
    InvalidSectionKey { section: String },

    #[error("Section \"{section}\" values must be array, but \"{found}\" given.")]
    InvalidSectionValues { section: String, found: &'static str },

    #[error("Section \"{section}\" item value must be a string, but \"{found}\" given at position {position}.")]
    InvalidSectionItem {
        section: String,
        position: usize,
        found: &'static str,
    },

    #[error("Combination input must be an object of sections, but \"{found}\" given.")]
    InvalidInputType { found: &'static str },
}

/// Error returned by `generate`, `count_combinations` and the JSON boundary
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CombinationError {
    #[error("Invalid combination input: {0}")]
    InvalidInput(#[source] ValidationError),

    #[error("Value \"{value}\" is not unique, because the value is used in the \"{section}\" and \"{first_section}\" key.")]
    DuplicateValue {
        value: String,
        section: String,
        first_section: String,
    },

    #[error("Combination count overflows usize")]
    CountOverflow,

    /// Malformed JSON text (message only, so the error stays `Clone + Eq`)
    #[error("Failed to parse combination input JSON: {0}")]
    Json(String),
}

impl From<ValidationError> for CombinationError {
    fn from(err: ValidationError) -> Self {
        CombinationError::InvalidInput(err)
    }
}

impl From<serde_json::Error> for CombinationError {
    fn from(err: serde_json::Error) -> Self {
        CombinationError::Json(err.to_string())
    }
}

/// Flat tag for each failure kind, independent of wrapping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidSectionKey,
    InvalidSectionValues,
    InvalidSectionItem,
    InvalidInputType,
    DuplicateValue,
    CountOverflow,
    Json,
}

impl ValidationError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ValidationError::InvalidSectionKey { .. } => ErrorKind::InvalidSectionKey,
            ValidationError::InvalidSectionValues { .. } => ErrorKind::InvalidSectionValues,
            ValidationError::InvalidSectionItem { .. } => ErrorKind::InvalidSectionItem,
            ValidationError::InvalidInputType { .. } => ErrorKind::InvalidInputType,
        }
    }
}

impl CombinationError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CombinationError::InvalidInput(inner) => inner.kind(),
            CombinationError::DuplicateValue { .. } => ErrorKind::DuplicateValue,
            CombinationError::CountOverflow => ErrorKind::CountOverflow,
            CombinationError::Json(_) => ErrorKind::Json,
        }
    }

    /// The wrapped validation failure, if this is one
    pub fn validation(&self) -> Option<&ValidationError> {
        match self {
            CombinationError::InvalidInput(inner) => Some(inner),
            _ => None,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::InvalidSectionKey => "InvalidSectionKey",
            ErrorKind::InvalidSectionValues => "InvalidSectionValues",
            ErrorKind::InvalidSectionItem => "InvalidSectionItem",
            ErrorKind::InvalidInputType => "InvalidInputType",
            ErrorKind::DuplicateValue => "DuplicateValue",
            ErrorKind::CountOverflow => "CountOverflow",
            ErrorKind::Json => "Json",
        };
        f.write_str(name)
    }
}
