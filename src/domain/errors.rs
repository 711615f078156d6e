//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided name is empty.
    EmptyName,

    /// The provided name has an empty segment, e.g. `foo..bar`.
    EmptySegment(String),

    /// The provided name contains characters protobuf does not allow.
    InvalidCharacter(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Name cannot be empty"),
            Self::EmptySegment(name) => write!(f, "Name has an empty segment: {}", name),
            Self::InvalidCharacter(name) => write!(f, "Name has invalid characters: {}", name),
        }
    }
}

impl std::error::Error for ValidationError {}
