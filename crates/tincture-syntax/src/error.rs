//! Error types for the syntax crate.

/// Result type alias for syntax operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the string-conversion entry points of this crate.
///
/// The value parsers themselves never fail; they return `Option` or tagged
/// results. These errors only surface from `FromStr` implementations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// A numeric literal could not be parsed.
    #[error("invalid number '{literal}'")]
    InvalidNumber { literal: String },

    /// A unit is not a member of the expected unit set.
    #[error("unit '{unit}' is not one of: {expected}")]
    InvalidUnit { unit: String, expected: String },

    /// A casing style name was not recognized.
    #[error("unknown casing '{0}', expected \"kebab-case\" or \"camelCase\"")]
    UnknownCasing(String),
}

impl Error {
    /// Create a number error.
    pub fn invalid_number(literal: impl Into<String>) -> Self {
        Self::InvalidNumber {
            literal: literal.into(),
        }
    }

    /// Create a unit error.
    pub fn invalid_unit(unit: impl Into<String>, expected: &[&str]) -> Self {
        let expected = expected
            .iter()
            .map(|u| if u.is_empty() { "<none>" } else { u })
            .collect::<Vec<_>>()
            .join(", ");
        Self::InvalidUnit {
            unit: unit.into(),
            expected,
        }
    }
}
