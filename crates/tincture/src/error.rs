//! Error types for loading options and converting colors.

use std::path::{Path, PathBuf};

use tincture_color::ColorError;

/// Result type alias for Tincture operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur outside of value parsing.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Options file could not be read.
    #[error("Failed to read options file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Options file is not valid JSON or does not match the schema.
    #[error("Invalid JSON options: {0}")]
    Json(#[from] serde_json::Error),

    /// Options file is not valid TOML or does not match the schema.
    #[error("Invalid TOML options: {0}")]
    Toml(#[from] toml::de::Error),

    /// Options file extension is neither `.json` nor `.toml`.
    #[error("Unsupported options file '{path}': expected a .json or .toml extension")]
    UnsupportedFormat { path: PathBuf },

    /// A color conversion was requested on an incomplete or invalid color.
    #[error(transparent)]
    Color(#[from] ColorError),
}

impl Error {
    /// Create an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create an unsupported-format error.
    pub fn unsupported_format(path: &Path) -> Self {
        Self::UnsupportedFormat {
            path: path.to_path_buf(),
        }
    }
}
