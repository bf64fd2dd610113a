//! Options controlling how colors and property names should be written.
//!
//! Options are plain serde data and can be read from JSON or TOML:
//!
//! ```toml
//! hex-format = "RRGGBB"
//! named-colors = "never"
//! allow-useless-alpha = false
//! property-casing = "kebab-case"
//! ```
//!
//! Missing keys take their default value; unknown keys are rejected.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tincture_color::HexFormat;
use tincture_syntax::casing::Casing;

use crate::error::{Error, Result};

/// Preference for color keywords over other notations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NamedColors {
    /// Prefer `red` over `#ff0000`.
    Always,
    /// Prefer `#ff0000` over `red`.
    Never,
    /// Leave keywords and other notations alone.
    #[default]
    Ignore,
}

/// Options file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionsFormat {
    Json,
    Toml,
}

impl OptionsFormat {
    /// Pick a format from a file extension, case-insensitively.
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?;
        if extension.eq_ignore_ascii_case("json") {
            Some(OptionsFormat::Json)
        } else if extension.eq_ignore_ascii_case("toml") {
            Some(OptionsFormat::Toml)
        } else {
            None
        }
    }
}

/// Rule options.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct Options {
    /// Preferred hex length.
    pub hex_format: HexFormat,
    /// Preference for color keywords.
    pub named_colors: NamedColors,
    /// Accept alpha channels that spell out full opacity.
    pub allow_useless_alpha: bool,
    /// Expected property-name casing.
    pub property_casing: Casing,
}

impl Options {
    /// Parse options from a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse options from a TOML document.
    pub fn from_toml_str(toml: &str) -> Result<Self> {
        Ok(toml::from_str(toml)?)
    }

    /// Load options from a `.json` or `.toml` file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let format = OptionsFormat::from_path(path).ok_or_else(|| Error::unsupported_format(path))?;
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        tracing::debug!(path = %path.display(), ?format, "loading options");

        let options = match format {
            OptionsFormat::Json => Self::from_json_str(&content),
            OptionsFormat::Toml => Self::from_toml_str(&content),
        };
        if let Err(error) = &options {
            tracing::warn!(path = %path.display(), %error, "failed to parse options");
        }
        options
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
