//! Domain validation errors.

use std::fmt;

/// Errors that can occur while constructing domain values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided ID is empty.
    EmptyId,

    /// No built-in mobile format exists for this region code.
    UnsupportedRegion(String),

    /// A custom mobile format pattern failed to compile.
    InvalidPattern(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyId => write!(f, "ID cannot be empty"),
            Self::UnsupportedRegion(region) => {
                write!(f, "Unsupported mobile phone region: {}", region)
            }
            Self::InvalidPattern(reason) => write!(f, "Invalid mobile pattern: {}", reason),
        }
    }
}

impl std::error::Error for ValidationError {}
