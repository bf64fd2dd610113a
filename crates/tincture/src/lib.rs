//! Tincture: CSS value micro-parsers and color normalization for lint
//! rules.
//!
//! This is the umbrella crate. It re-exports the value syntax
//! ([`syntax`]) and color ([`color`]) crates and adds rule options
//! ([`config`]) and replacement suggestions ([`suggest`]).
//!
//! # Example
//!
//! ```
//! use tincture::prelude::*;
//!
//! let options = Options::from_toml_str("hex-format = \"RGB\"\nnamed-colors = \"never\"").unwrap();
//! let suggester = Suggester::new(options);
//! assert_eq!(suggester.color("rgba(255, 255, 255, 1)").as_deref(), Some("rgb(255, 255, 255)"));
//! assert_eq!(suggester.color("white").as_deref(), Some("#fff"));
//! ```

pub mod config;
pub mod suggest;

mod error;

pub use error::{Error, Result};

/// CSS value syntax: tokens, numbers, functions and arguments.
pub mod syntax {
    pub use tincture_syntax::*;
}

/// CSS colors.
pub mod color {
    pub use tincture_color::*;
}

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::config::{NamedColors, Options};
    pub use crate::suggest::Suggester;
    pub use crate::{Error, Result};
    pub use tincture_color::prelude::*;
    pub use tincture_syntax::prelude::*;
}
