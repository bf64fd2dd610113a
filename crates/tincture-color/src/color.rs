//! The [`Color`] facade: notation dispatch and conversions.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use tincture_syntax::token::{TokenKind, ValueInput};

use crate::error::{ColorError, Result};
use crate::gray::GrayColor;
use crate::hex::{HexColor, expand_hex, shorten_hex};
use crate::hsl::HslColor;
use crate::hwb::HwbColor;
use crate::keyword::NamedColor;
use crate::lab::LabColor;
use crate::lch::LchColor;
use crate::named::name_for_hex;
use crate::rgb::RgbColor;
use crate::rgba::Rgba;

/// Length preference for hex output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum HexFormat {
    /// Shorthand (`#rgb`/`#rgba`) where every pair is a doubled digit.
    #[serde(rename = "RGB")]
    Rgb,
    /// Always the long form (`#rrggbb`/`#rrggbbaa`).
    #[serde(rename = "RRGGBB")]
    Rrggbb,
    /// Keep hex colors as written; other notations produce the long form.
    #[default]
    #[serde(rename = "default")]
    Default,
}

impl FromStr for HexFormat {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "RGB" => Ok(HexFormat::Rgb),
            "RRGGBB" => Ok(HexFormat::Rrggbb),
            "default" => Ok(HexFormat::Default),
            other => Err(ColorError::UnknownHexFormat(other.to_string())),
        }
    }
}

impl fmt::Display for HexFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            HexFormat::Rgb => "RGB",
            HexFormat::Rrggbb => "RRGGBB",
            HexFormat::Default => "default",
        })
    }
}

/// Which notation a color was written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorKind {
    Hex,
    Rgb,
    Hsl,
    Hwb,
    Lab,
    Lch,
    Gray,
    Named,
    Invalid,
}

/// The notation-specific data of a color.
#[derive(Debug, Clone, PartialEq)]
pub enum Notation {
    Hex(HexColor),
    Rgb(RgbColor),
    Hsl(HslColor),
    Hwb(HwbColor),
    Lab(LabColor),
    Lch(LchColor),
    Gray(GrayColor),
    Named(NamedColor),
    /// Not a color; carries the raw text.
    Invalid(String),
}

impl Notation {
    fn kind(&self) -> ColorKind {
        match self {
            Notation::Hex(_) => ColorKind::Hex,
            Notation::Rgb(_) => ColorKind::Rgb,
            Notation::Hsl(_) => ColorKind::Hsl,
            Notation::Hwb(_) => ColorKind::Hwb,
            Notation::Lab(_) => ColorKind::Lab,
            Notation::Lch(_) => ColorKind::Lch,
            Notation::Gray(_) => ColorKind::Gray,
            Notation::Named(_) => ColorKind::Named,
            Notation::Invalid(_) => ColorKind::Invalid,
        }
    }

    fn is_complete(&self) -> bool {
        match self {
            Notation::Hex(c) => c.is_complete(),
            Notation::Rgb(c) => c.is_complete(),
            Notation::Hsl(c) => c.is_complete(),
            Notation::Hwb(c) => c.is_complete(),
            Notation::Lab(c) => c.is_complete(),
            Notation::Lch(c) => c.is_complete(),
            Notation::Gray(c) => c.is_complete(),
            Notation::Named(_) => true,
            Notation::Invalid(_) => false,
        }
    }

    fn alpha(&self) -> Option<f64> {
        match self {
            Notation::Hex(c) => c.alpha(),
            Notation::Rgb(c) => c.alpha(),
            Notation::Hsl(c) => c.alpha(),
            Notation::Hwb(c) => c.alpha(),
            Notation::Lab(c) => c.alpha(),
            Notation::Lch(c) => c.alpha(),
            Notation::Gray(c) => c.alpha(),
            Notation::Named(c) => c.alpha(),
            Notation::Invalid(_) => None,
        }
    }

    fn to_rgba(&self) -> Option<Rgba> {
        match self {
            Notation::Hex(c) => c.to_rgba(),
            Notation::Rgb(c) => c.to_rgba(),
            Notation::Hsl(c) => c.to_rgba(),
            Notation::Hwb(c) => c.to_rgba(),
            Notation::Lab(c) => c.to_rgba(),
            Notation::Lch(c) => c.to_rgba(),
            Notation::Gray(c) => c.to_rgba(),
            Notation::Named(c) => Some(c.to_rgba()),
            Notation::Invalid(_) => None,
        }
    }

    fn remove_alpha(&self) -> Self {
        match self {
            Notation::Hex(c) => Notation::Hex(c.remove_alpha()),
            Notation::Rgb(c) => Notation::Rgb(c.remove_alpha()),
            Notation::Hsl(c) => Notation::Hsl(c.remove_alpha()),
            Notation::Hwb(c) => Notation::Hwb(c.remove_alpha()),
            Notation::Lab(c) => Notation::Lab(c.remove_alpha()),
            Notation::Lch(c) => Notation::Lch(c.remove_alpha()),
            Notation::Gray(c) => Notation::Gray(c.remove_alpha()),
            Notation::Named(_) | Notation::Invalid(_) => self.clone(),
        }
    }

    fn to_color_string(&self) -> String {
        match self {
            Notation::Hex(c) => c.raw().to_string(),
            Notation::Rgb(c) => c.to_color_string(),
            Notation::Hsl(c) => c.to_color_string(),
            Notation::Hwb(c) => c.to_color_string(),
            Notation::Lab(c) => c.to_color_string(),
            Notation::Lch(c) => c.to_color_string(),
            Notation::Gray(c) => c.to_color_string(),
            Notation::Named(c) => c.raw().to_string(),
            Notation::Invalid(raw) => raw.clone(),
        }
    }
}

/// A parsed CSS color in any supported notation.
///
/// Colors are immutable: [`Color::remove_alpha`] returns a new color. The
/// conversion to [`Rgba`] is computed on first use and cached.
///
/// # Example
///
/// ```
/// use tincture_color::{Color, HexFormat};
///
/// let color = Color::parse("rgba(255, 0, 0, 1)");
/// assert!(color.is_complete());
/// assert_eq!(color.alpha(), Some(1.0));
/// assert_eq!(color.to_name().as_deref(), Some("red"));
/// assert_eq!(color.to_hex(HexFormat::Rgb).as_deref(), Some("#f00"));
/// assert_eq!(color.remove_alpha().to_string(), "rgb(255, 0, 0)");
/// ```
#[derive(Clone)]
pub struct Color {
    notation: Notation,
    rgba: OnceLock<Option<Rgba>>,
}

impl Color {
    fn new(notation: Notation) -> Self {
        Self {
            notation,
            rgba: OnceLock::new(),
        }
    }

    /// Parse a color from text or a single token.
    ///
    /// Never fails: input that matches no notation becomes an
    /// [`ColorKind::Invalid`] color carrying the raw text.
    pub fn parse<'a>(input: impl Into<ValueInput<'a>>) -> Self {
        let input = input.into();
        let raw = input.raw();
        let notation = match input.single_node() {
            Some(node) => match node.kind {
                TokenKind::Word if node.value.starts_with('#') => {
                    HexColor::from_token(&node).map(Notation::Hex)
                }
                TokenKind::Function => RgbColor::parse(&*node)
                    .map(Notation::Rgb)
                    .or_else(|| HslColor::parse(&*node).map(Notation::Hsl))
                    .or_else(|| HwbColor::parse(&*node).map(Notation::Hwb))
                    .or_else(|| LabColor::parse(&*node).map(Notation::Lab))
                    .or_else(|| LchColor::parse(&*node).map(Notation::Lch))
                    .or_else(|| GrayColor::parse(&*node).map(Notation::Gray)),
                TokenKind::Word => NamedColor::from_token(&node).map(Notation::Named),
                _ => None,
            },
            None => None,
        }
        .unwrap_or_else(|| Notation::Invalid(raw.to_string()));

        let color = Self::new(notation);
        if color.is_valid() {
            tracing::trace!(kind = ?color.kind(), raw, "parsed color");
        } else if color.kind() != ColorKind::Invalid {
            tracing::debug!(kind = ?color.kind(), raw, "incomplete color");
        } else {
            tracing::trace!(raw, "not a color");
        }
        color
    }

    /// The notation the color was written in.
    #[inline]
    pub fn kind(&self) -> ColorKind {
        self.notation.kind()
    }

    /// The notation-specific data.
    #[inline]
    pub fn notation(&self) -> &Notation {
        &self.notation
    }

    /// Check if every channel (and any alpha) parsed and is in range.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.notation.is_complete()
    }

    /// Same as [`Color::is_complete`].
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.is_complete()
    }

    /// The generic representation, if complete.
    pub fn to_rgba(&self) -> Option<Rgba> {
        *self.rgba.get_or_init(|| self.notation.to_rgba())
    }

    /// The written alpha in `[0, 1]`.
    ///
    /// `None` means no alpha was written (or the color is incomplete); an
    /// explicit alpha of `1` is `Some(1.0)`.
    pub fn alpha(&self) -> Option<f64> {
        if !self.is_complete() {
            return None;
        }
        self.notation.alpha()
    }

    /// Check if the color spells out an alpha of exactly `1`.
    pub fn has_useless_alpha(&self) -> bool {
        self.alpha() == Some(1.0)
    }

    /// Convert to a hex string.
    ///
    /// Hex colors keep their digit case; other notations produce lowercase
    /// digits. [`HexFormat::Rgb`] falls back to the long form when the color
    /// cannot be shortened.
    pub fn to_hex(&self, format: HexFormat) -> Option<String> {
        let hex = match &self.notation {
            Notation::Hex(hex) => hex.digits().map(|_| hex.raw().to_string())?,
            _ => self.to_rgba()?.to_hex(),
        };
        Some(match format {
            HexFormat::Rgb => shorten_hex(&hex).unwrap_or(hex),
            HexFormat::Rrggbb => expand_hex(&hex),
            HexFormat::Default => hex,
        })
    }

    /// Like [`Color::to_hex`], failing on incomplete colors.
    pub fn try_to_hex(&self, format: HexFormat) -> Result<String> {
        self.to_hex(format).ok_or_else(|| self.incomplete())
    }

    /// The keyword for this color, if one matches exactly.
    ///
    /// Fully transparent black maps to `transparent`. Other translucent
    /// colors have no keyword.
    pub fn to_name(&self) -> Option<String> {
        let rgba = self.to_rgba()?;
        let [r, g, b, a] = rgba.to_rgba8();
        if a == 0 && r == 0 && g == 0 && b == 0 {
            return Some("transparent".to_string());
        }
        if a != 255 {
            return None;
        }
        name_for_hex(&rgba.to_hex()).map(str::to_string)
    }

    /// Like [`Color::to_name`], failing on incomplete colors.
    pub fn try_to_name(&self) -> Result<Option<String>> {
        if !self.is_complete() {
            return Err(self.incomplete());
        }
        Ok(self.to_name())
    }

    /// A new color without the alpha channel and its separator.
    ///
    /// Keywords are returned unchanged.
    pub fn remove_alpha(&self) -> Self {
        Self::new(self.notation.remove_alpha())
    }

    /// Serialize from the captured source text.
    pub fn to_color_string(&self) -> String {
        self.notation.to_color_string()
    }

    /// Check if both colors are complete and render to the same 8-bit RGBA.
    pub fn same_color(&self, other: &Color) -> bool {
        match (self.to_rgba(), other.to_rgba()) {
            (Some(a), Some(b)) => a.same_color(&b),
            _ => false,
        }
    }

    fn incomplete(&self) -> ColorError {
        match self.notation {
            Notation::Invalid(ref raw) => ColorError::invalid(raw.as_str()),
            _ => ColorError::incomplete(self.to_color_string()),
        }
    }
}

impl PartialEq for Color {
    fn eq(&self, other: &Self) -> bool {
        self.notation == other.notation
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Color")
            .field("notation", &self.notation)
            .field("converted", &self.rgba.get().is_some())
            .finish()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_color_string())
    }
}

impl FromStr for Color {
    type Err = ColorError;

    /// Parse a color, rejecting text that is not a color at all.
    ///
    /// Incomplete colors are accepted; check [`Color::is_complete`].
    fn from_str(s: &str) -> Result<Self> {
        let color = Color::parse(s);
        match color.kind() {
            ColorKind::Invalid => Err(ColorError::invalid(s)),
            _ => Ok(color),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dispatch() {
        let cases = [
            ("#fff", ColorKind::Hex),
            ("#ggg", ColorKind::Hex),
            ("rgb(0 0 0)", ColorKind::Rgb),
            ("RGBA(0,0,0,0)", ColorKind::Rgb),
            ("hsla(0, 0%, 0%, 0)", ColorKind::Hsl),
            ("hwb(0 0% 0%)", ColorKind::Hwb),
            ("lab(0% 0 0)", ColorKind::Lab),
            ("lch(0% 0 0)", ColorKind::Lch),
            ("gray(50)", ColorKind::Gray),
            ("Red", ColorKind::Named),
            ("transparent", ColorKind::Named),
            ("currentcolor", ColorKind::Invalid),
            ("color(srgb 1 0 0)", ColorKind::Invalid),
            ("red blue", ColorKind::Invalid),
            ("", ColorKind::Invalid),
        ];
        for (input, kind) in cases {
            assert_eq!(Color::parse(input).kind(), kind, "{input}");
        }
    }

    #[test]
    fn conversion_is_memoized() {
        let color = Color::parse("hsl(0, 100%, 50%)");
        assert!(color.rgba.get().is_none());
        assert_eq!(color.to_name().as_deref(), Some("red"));
        assert!(color.rgba.get().is_some());
        assert!(color.remove_alpha().rgba.get().is_none());
    }

    #[test]
    fn hex_formats() {
        let white = Color::parse("#fff");
        assert_eq!(white.to_hex(HexFormat::Rrggbb).as_deref(), Some("#ffffff"));
        assert_eq!(white.to_hex(HexFormat::Default).as_deref(), Some("#fff"));

        let white = Color::parse("#FFFFFF");
        assert_eq!(white.to_hex(HexFormat::Rgb).as_deref(), Some("#FFF"));

        let near_white = Color::parse("#fefefe");
        assert_eq!(near_white.to_hex(HexFormat::Rgb).as_deref(), Some("#fefefe"));

        let red = Color::parse("rgb(255 0 0 / 0.5)");
        assert_eq!(red.to_hex(HexFormat::Default).as_deref(), Some("#ff000080"));
        assert_eq!(red.to_hex(HexFormat::Rgb).as_deref(), Some("#ff000080"));

        let red = Color::parse("rgb(255 0 0 / 0)");
        assert_eq!(red.to_hex(HexFormat::Rgb).as_deref(), Some("#f000"));
    }

    #[test]
    fn incomplete_colors_convert_to_nothing() {
        for input in ["#ff", "rgb(300,0,0)", "rgb(255,0)", "hsl(0 0 0)", "nope"] {
            let color = Color::parse(input);
            assert!(!color.is_complete(), "{input}");
            assert_eq!(color.to_hex(HexFormat::Default), None, "{input}");
            assert_eq!(color.to_name(), None, "{input}");
            assert_eq!(color.alpha(), None, "{input}");
            assert_eq!(color.to_color_string(), input);
        }
    }

    #[test]
    fn names() {
        assert_eq!(Color::parse("#0ff").to_name().as_deref(), Some("aqua"));
        assert_eq!(Color::parse("grey").to_name().as_deref(), Some("gray"));
        assert_eq!(Color::parse("rgba(0,0,0,0)").to_name().as_deref(), Some("transparent"));
        assert_eq!(Color::parse("rgba(255,0,0,.5)").to_name(), None);
        assert_eq!(Color::parse("rgba(255,0,0,.999)").to_name().as_deref(), Some("red"));
        assert_eq!(Color::parse("#123456").to_name(), None);
    }

    #[test]
    fn try_accessors() {
        assert_eq!(Color::parse("#f00").try_to_hex(HexFormat::Rrggbb), Ok("#ff0000".to_string()));
        assert_eq!(
            Color::parse("rgb(1,2)").try_to_hex(HexFormat::Default),
            Err(ColorError::incomplete("rgb(1,2)"))
        );
        assert_eq!(Color::parse("bogus").try_to_name(), Err(ColorError::invalid("bogus")));
        assert_eq!(Color::parse("#123456").try_to_name(), Ok(None));
    }

    #[test]
    fn useless_alpha() {
        assert!(Color::parse("#ffff").has_useless_alpha());
        assert!(Color::parse("hsl(0 0% 0% / 100%)").has_useless_alpha());
        assert!(!Color::parse("#fff").has_useless_alpha());
        assert!(!Color::parse("rgb(0 0 0 / .99)").has_useless_alpha());
    }

    #[test]
    fn same_color_across_notations() {
        let hex = Color::parse("#ff0000");
        assert!(hex.same_color(&Color::parse("red")));
        assert!(hex.same_color(&Color::parse("hsl(0 100% 50%)")));
        assert!(!hex.same_color(&Color::parse("rgb(300 0 0)")));
    }

    #[test]
    fn hex_format_names() {
        assert_eq!("RRGGBB".parse::<HexFormat>(), Ok(HexFormat::Rrggbb));
        assert_eq!(HexFormat::Rgb.to_string(), "RGB");
        assert!(matches!("rgb".parse::<HexFormat>(), Err(ColorError::UnknownHexFormat(_))));
    }

    #[test]
    fn from_str_rejects_non_colors() {
        assert!("#ff".parse::<Color>().is_ok());
        assert!("inherit".parse::<Color>().is_err());
    }
}
