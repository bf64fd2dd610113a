//! Replacement suggestions for values that break a rule.
//!
//! Every function returns the replacement text, or `None` when the value
//! already complies (or is not something the rule understands). Applying
//! the replacement is up to the caller.

use tincture_color::{Color, ColorKind, HexFormat};
use tincture_syntax::number::strip_zero_length_unit;
use tincture_syntax::token::ValueInput;

use crate::config::{NamedColors, Options};

/// The hex color rewritten to the preferred length.
///
/// Only applies to colors written in hex; [`HexFormat::Default`] accepts
/// any length.
pub fn preferred_hex(color: &Color, format: HexFormat) -> Option<String> {
    if color.kind() != ColorKind::Hex || format == HexFormat::Default {
        return None;
    }
    let hex = color.to_hex(format)?;
    (hex != color.to_color_string()).then_some(hex)
}

/// The color rewritten to or from a keyword.
pub fn named_color(color: &Color, preference: NamedColors) -> Option<String> {
    match preference {
        NamedColors::Always if color.kind() != ColorKind::Named => color.to_name(),
        NamedColors::Never if color.kind() == ColorKind::Named => color.to_hex(HexFormat::Default),
        _ => None,
    }
}

/// The color without an alpha that spells out full opacity.
pub fn useless_alpha(color: &Color) -> Option<String> {
    color
        .has_useless_alpha()
        .then(|| color.remove_alpha().to_color_string())
}

/// A zero length without its unit (`0px` → `0`).
pub fn zero_length_unit(value: &str) -> Option<String> {
    let node = ValueInput::from(value).single_node()?;
    strip_zero_length_unit(&node)
}

/// Applies every suggestion enabled by a set of [`Options`].
#[derive(Debug, Clone, Default)]
pub struct Suggester {
    options: Options,
}

impl Suggester {
    /// Create a suggester for the given options.
    pub fn new(options: Options) -> Self {
        Self { options }
    }

    /// The options in use.
    #[inline]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Suggest a replacement for a color value.
    ///
    /// Useless alpha is removed first, then the keyword preference and the
    /// hex length preference are applied to the result. Incomplete and
    /// invalid colors get no suggestion.
    pub fn color(&self, value: &str) -> Option<String> {
        let mut color = Color::parse(value);
        if !color.is_complete() {
            return None;
        }

        if !self.options.allow_useless_alpha && color.has_useless_alpha() {
            color = color.remove_alpha();
        }
        if let Some(name) = named_color(&color, self.options.named_colors) {
            color = Color::parse(&name);
        }
        if let Some(hex) = preferred_hex(&color, self.options.hex_format) {
            color = Color::parse(&hex);
        }

        let fixed = color.to_color_string();
        (fixed != value).then_some(fixed)
    }

    /// Suggest a differently cased property name.
    pub fn property(&self, name: &str) -> Option<String> {
        let casing = self.options.property_casing;
        (!casing.check(name)).then(|| casing.convert(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_length() {
        let color = Color::parse("#ffffff");
        assert_eq!(preferred_hex(&color, HexFormat::Rgb).as_deref(), Some("#fff"));
        assert_eq!(preferred_hex(&color, HexFormat::Rrggbb), None);
        assert_eq!(preferred_hex(&color, HexFormat::Default), None);
        assert_eq!(preferred_hex(&Color::parse("#fefefe"), HexFormat::Rgb), None);
        assert_eq!(preferred_hex(&Color::parse("white"), HexFormat::Rgb), None);
    }

    #[test]
    fn keywords() {
        assert_eq!(named_color(&Color::parse("#f00"), NamedColors::Always).as_deref(), Some("red"));
        assert_eq!(named_color(&Color::parse("#f01"), NamedColors::Always), None);
        assert_eq!(
            named_color(&Color::parse("red"), NamedColors::Never).as_deref(),
            Some("#ff0000")
        );
        assert_eq!(named_color(&Color::parse("red"), NamedColors::Always), None);
        assert_eq!(named_color(&Color::parse("#f00"), NamedColors::Ignore), None);
    }

    #[test]
    fn alpha() {
        assert_eq!(
            useless_alpha(&Color::parse("rgba(0, 0, 0, 1)")).as_deref(),
            Some("rgb(0, 0, 0)")
        );
        assert_eq!(useless_alpha(&Color::parse("#000f")).as_deref(), Some("#000"));
        assert_eq!(useless_alpha(&Color::parse("rgba(0, 0, 0, .5)")), None);
    }

    #[test]
    fn zero_units() {
        assert_eq!(zero_length_unit("0px").as_deref(), Some("0"));
        assert_eq!(zero_length_unit("1px"), None);
        assert_eq!(zero_length_unit("0 0"), None);
    }

    #[test]
    fn combined() {
        let suggester = Suggester::new(Options {
            hex_format: HexFormat::Rgb,
            named_colors: NamedColors::Never,
            ..Options::default()
        });
        assert_eq!(suggester.color("white").as_deref(), Some("#fff"));
        assert_eq!(suggester.color("#ffffffff").as_deref(), Some("#fff"));
        assert_eq!(suggester.color("#fff"), None);
        assert_eq!(suggester.color("rgb(300, 0, 0)"), None);
        assert_eq!(suggester.property("fontSize").as_deref(), Some("font-size"));
        assert_eq!(suggester.property("font-size"), None);
    }
}
