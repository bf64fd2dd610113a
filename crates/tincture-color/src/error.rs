//! Error types for the color crate.

/// Result type alias for color operations.
pub type Result<T> = std::result::Result<T, ColorError>;

/// Errors raised when a caller asks a color for something it cannot give.
///
/// Parsing never produces these; they come from the `try_*` accessors,
/// which are meant for call sites that have already checked completeness.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ColorError {
    /// The color matched a notation but some channel did not parse.
    #[error("color '{color}' is incomplete")]
    Incomplete { color: String },

    /// The text is not a color at all.
    #[error("'{raw}' is not a color")]
    Invalid { raw: String },

    /// A hex format name was not recognized.
    #[error("unknown hex format '{0}', expected \"RGB\", \"RRGGBB\" or \"default\"")]
    UnknownHexFormat(String),
}

impl ColorError {
    /// Create an incomplete-color error.
    pub fn incomplete(color: impl Into<String>) -> Self {
        Self::Incomplete {
            color: color.into(),
        }
    }

    /// Create an invalid-color error.
    pub fn invalid(raw: impl Into<String>) -> Self {
        Self::Invalid { raw: raw.into() }
    }
}
