//! CSS color parsing and normalization for Tincture.
//!
//! Parses every color notation lint rules care about into a [`Color`]
//! that remembers exactly how it was written:
//!
//! - **Hex**: `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`
//! - **Functions**: `rgb()`/`rgba()`, `hsl()`/`hsla()`, `hwb()`, `lab()`,
//!   `lch()` and `gray()`, in comma or space syntax
//! - **Keywords**: the named colors and `transparent`
//!
//! A color that matches a notation but has a malformed channel is kept as
//! an *incomplete* color; it still serializes back to its source text but
//! cannot be converted.
//!
//! # Example
//!
//! ```
//! use tincture_color::prelude::*;
//!
//! let color = Color::parse("hsl(0, 100%, 50%)");
//! assert_eq!(color.kind(), ColorKind::Hsl);
//! assert_eq!(color.to_hex(HexFormat::Default).as_deref(), Some("#ff0000"));
//! assert_eq!(color.to_name().as_deref(), Some("red"));
//! assert_eq!(color.to_string(), "hsl(0, 100%, 50%)");
//!
//! let broken = Color::parse("rgb(300, 0, 0)");
//! assert!(!broken.is_complete());
//! assert_eq!(broken.to_hex(HexFormat::Default), None);
//! ```

pub mod color;
pub mod gray;
pub mod hex;
pub mod hsl;
pub mod hwb;
pub mod keyword;
pub mod lab;
pub mod lch;
pub mod named;
pub mod notation;
pub mod rgb;
pub mod rgba;

mod error;

pub use color::{Color, ColorKind, HexFormat, Notation};
pub use error::{ColorError, Result};
pub use rgba::Rgba;

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::color::{Color, ColorKind, HexFormat, Notation};
    pub use crate::error::ColorError;
    pub use crate::named::{NAMED_COLORS, hex_for_name, name_for_hex};
    pub use crate::notation::{ColorFunction, FunctionColor};
    pub use crate::rgba::Rgba;
}
