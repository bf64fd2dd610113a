//! Numeric literals and unit sets.
//!
//! A CSS numeric word (`10px`, `-.5e3`, `50%`) is split into its number and
//! its unit. Callers pick the unit set that a slot accepts; a word whose unit
//! is outside the set does not parse.
//!
//! # Example
//!
//! ```
//! use tincture_syntax::number::{parse_number_unit, AngleOrNumber};
//! use tincture_syntax::token::Token;
//!
//! let hue = parse_number_unit::<AngleOrNumber>(&Token::word("0.5turn", 0)).unwrap();
//! assert_eq!(hue.number, 0.5);
//! assert_eq!(hue.unit, AngleOrNumber::Turn);
//! assert_eq!(hue.unit.to_degrees(hue.number), 180.0);
//! ```

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;

use crate::error::Error;
use crate::token::Token;

/// A closed set of units accepted by one argument slot.
pub trait Unit: Copy + Eq + fmt::Debug {
    /// All unit spellings of the set, lowercase (`""` for unitless).
    const NAMES: &'static [&'static str];

    /// Look up a lowercase unit spelling.
    fn from_unit_str(unit: &str) -> Option<Self>;

    /// Canonical spelling of the unit.
    fn as_str(self) -> &'static str;
}

macro_rules! unit_set {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $text:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
        }

        impl Unit for $name {
            const NAMES: &'static [&'static str] = &[$($text),+];

            fn from_unit_str(unit: &str) -> Option<Self> {
                match unit {
                    $( $text => Some(Self::$variant), )+
                    _ => None,
                }
            }

            fn as_str(self) -> &'static str {
                match self {
                    $( Self::$variant => $text, )+
                }
            }
        }

        impl FromStr for $name {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::from_unit_str(&s.to_ascii_lowercase())
                    .ok_or_else(|| Error::invalid_unit(s, Self::NAMES))
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

unit_set! {
    /// A plain number without a unit.
    pub enum Unitless {
        None => "",
    }
}

unit_set! {
    /// A percentage.
    pub enum Percentage {
        Percent => "%",
    }
}

unit_set! {
    /// A plain number or a percentage.
    pub enum NumberOrPercentage {
        None => "",
        Percent => "%",
    }
}

unit_set! {
    /// A hue: a plain number (degrees) or an angle.
    pub enum AngleOrNumber {
        None => "",
        Deg => "deg",
        Rad => "rad",
        Grad => "grad",
        Turn => "turn",
    }
}

unit_set! {
    /// CSS length units.
    pub enum LengthUnit {
        Em => "em",
        Rem => "rem",
        Ex => "ex",
        Rex => "rex",
        Cap => "cap",
        Rcap => "rcap",
        Ch => "ch",
        Rch => "rch",
        Ic => "ic",
        Ric => "ric",
        Lh => "lh",
        Rlh => "rlh",
        Vw => "vw",
        Svw => "svw",
        Lvw => "lvw",
        Dvw => "dvw",
        Vh => "vh",
        Svh => "svh",
        Lvh => "lvh",
        Dvh => "dvh",
        Vi => "vi",
        Svi => "svi",
        Lvi => "lvi",
        Dvi => "dvi",
        Vb => "vb",
        Svb => "svb",
        Lvb => "lvb",
        Dvb => "dvb",
        Vmin => "vmin",
        Svmin => "svmin",
        Lvmin => "lvmin",
        Dvmin => "dvmin",
        Vmax => "vmax",
        Svmax => "svmax",
        Lvmax => "lvmax",
        Dvmax => "dvmax",
        Cqw => "cqw",
        Cqh => "cqh",
        Cqi => "cqi",
        Cqb => "cqb",
        Cqmin => "cqmin",
        Cqmax => "cqmax",
        Cm => "cm",
        Mm => "mm",
        /// Quarter-millimeters, written `Q` in stylesheets.
        Q => "q",
        In => "in",
        Pc => "pc",
        Pt => "pt",
        Px => "px",
    }
}

impl AngleOrNumber {
    /// Convert a hue expressed in this unit to degrees.
    pub fn to_degrees(self, value: f64) -> f64 {
        match self {
            AngleOrNumber::None | AngleOrNumber::Deg => value,
            AngleOrNumber::Rad => value.to_degrees(),
            AngleOrNumber::Grad => value * 0.9,
            AngleOrNumber::Turn => value * 360.0,
        }
    }
}

/// A number paired with a unit from the set `U`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumberWithUnit<U> {
    pub number: f64,
    pub unit: U,
}

impl<U: Unit> NumberWithUnit<U> {
    /// Create a new value.
    pub fn new(number: f64, unit: U) -> Self {
        Self { number, unit }
    }

    /// Check that the number lies in `min..=max`.
    #[inline]
    pub fn in_range(&self, min: f64, max: f64) -> bool {
        self.number >= min && self.number <= max
    }
}

impl<U: Unit> fmt::Display for NumberWithUnit<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.number, self.unit.as_str())
    }
}

fn number_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^([+-]?)([0-9]*)(?:\.([0-9]+))?(?:[eE]([+-]?[0-9]+))?(%|[a-zA-Z]+)?$")
            .expect("number pattern is valid")
    })
}

/// The textual parts of a numeric literal.
///
/// Kept verbatim so that style rules can rewrite a literal without
/// re-formatting the number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberLiteral<'a> {
    /// `""`, `"+"` or `"-"`.
    pub sign: &'a str,
    /// Digits before the decimal point (may be empty: `.5`).
    pub integer: &'a str,
    /// Digits after the decimal point, if a point is present.
    pub fraction: Option<&'a str>,
    /// Exponent digits including their sign, if present.
    pub exponent: Option<&'a str>,
    /// Unit as written (case preserved), `""` when unitless.
    pub unit: &'a str,
}

impl<'a> NumberLiteral<'a> {
    /// Split a literal into its parts. Returns `None` for anything that is
    /// not a CSS number optionally followed by a unit.
    pub fn parse(text: &'a str) -> Option<Self> {
        let caps = number_pattern().captures(text)?;
        let part = |i: usize| caps.get(i).map(|m| m.as_str());

        let integer = part(2).unwrap_or("");
        let fraction = part(3);
        if integer.is_empty() && fraction.is_none() {
            return None;
        }

        Some(Self {
            sign: part(1).unwrap_or(""),
            integer,
            fraction,
            exponent: part(4),
            unit: part(5).unwrap_or(""),
        })
    }

    /// The numeric value.
    pub fn value(&self) -> f64 {
        let mut text = String::with_capacity(16);
        text.push_str(self.sign);
        text.push_str(if self.integer.is_empty() { "0" } else { self.integer });
        if let Some(fraction) = self.fraction {
            text.push('.');
            text.push_str(fraction);
        }
        if let Some(exponent) = self.exponent {
            text.push('e');
            text.push_str(exponent);
        }
        text.parse().unwrap_or(0.0)
    }

    /// Check if the value is zero, however it is spelled.
    pub fn is_zero(&self) -> bool {
        self.value() == 0.0
    }

    fn assemble(&self, integer: &str, fraction: Option<&str>) -> String {
        let mut out = String::from(self.sign);
        out.push_str(integer);
        if let Some(fraction) = fraction {
            out.push('.');
            out.push_str(fraction);
        }
        if let Some(exponent) = self.exponent {
            out.push('e');
            out.push_str(exponent);
        }
        out.push_str(self.unit);
        out
    }

    /// Spell the literal with a leading zero (`.5` becomes `0.5`).
    pub fn with_leading_zero(&self) -> String {
        let integer = if self.integer.is_empty() { "0" } else { self.integer };
        self.assemble(integer, self.fraction)
    }

    /// Spell the literal without a redundant leading zero (`0.5` becomes `.5`).
    pub fn without_leading_zero(&self) -> String {
        let integer = match self.fraction {
            Some(_) if self.integer.chars().all(|c| c == '0') => "",
            _ => self.integer,
        };
        self.assemble(integer, self.fraction)
    }

    /// Spell the literal without trailing fraction zeros (`1.50` becomes `1.5`,
    /// `2.0` becomes `2`).
    pub fn without_trailing_zeros(&self) -> String {
        let fraction = self
            .fraction
            .map(|f| f.trim_end_matches('0'))
            .filter(|f| !f.is_empty());
        let integer = if self.integer.is_empty() && fraction.is_none() {
            "0"
        } else {
            self.integer
        };
        self.assemble(integer, fraction)
    }
}

impl fmt::Display for NumberLiteral<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.assemble(self.integer, self.fraction))
    }
}

/// Parse a word token as a number with a unit from the set `U`.
///
/// Fails when the token is not a word, is not numeric, overflows to an
/// infinite value, or its unit (compared case-insensitively) is not in `U`.
pub fn parse_number_unit<U: Unit>(token: &Token) -> Option<NumberWithUnit<U>> {
    if !token.is_word() {
        return None;
    }
    token.value.parse().ok()
}

impl<U: Unit> FromStr for NumberWithUnit<U> {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let literal = NumberLiteral::parse(s).ok_or_else(|| Error::invalid_number(s))?;
        let number = literal.value();
        if !number.is_finite() {
            return Err(Error::invalid_number(s));
        }
        let unit = U::from_unit_str(&literal.unit.to_ascii_lowercase())
            .ok_or_else(|| Error::invalid_unit(literal.unit, U::NAMES))?;
        Ok(NumberWithUnit::new(number, unit))
    }
}

/// Drop the unit from a zero length (`0px` becomes `0`).
///
/// Returns `None` when the token is not a zero length with a unit.
pub fn strip_zero_length_unit(token: &Token) -> Option<String> {
    if !token.is_word() {
        return None;
    }
    let literal = NumberLiteral::parse(&token.value)?;
    LengthUnit::from_unit_str(&literal.unit.to_ascii_lowercase())?;
    if !literal.is_zero() {
        return None;
    }
    let mut unitless = literal.clone();
    unitless.unit = "";
    Some(unitless.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> Token {
        Token::word(text, 0)
    }

    #[test]
    fn parse_literal_parts() {
        let lit = NumberLiteral::parse("-12.50e+3PX").unwrap();
        assert_eq!(lit.sign, "-");
        assert_eq!(lit.integer, "12");
        assert_eq!(lit.fraction, Some("50"));
        assert_eq!(lit.exponent, Some("+3"));
        assert_eq!(lit.unit, "PX");
        assert_eq!(lit.value(), -12500.0);
    }

    #[test]
    fn exponent_versus_em_unit() {
        let em = NumberLiteral::parse("1em").unwrap();
        assert_eq!(em.unit, "em");
        assert_eq!(em.exponent, None);

        let exp = NumberLiteral::parse("1e3").unwrap();
        assert_eq!(exp.unit, "");
        assert_eq!(exp.value(), 1000.0);
    }

    #[test]
    fn literal_without_digits_is_invalid() {
        assert!(NumberLiteral::parse("").is_none());
        assert!(NumberLiteral::parse("-").is_none());
        assert!(NumberLiteral::parse(".").is_none());
        assert!(NumberLiteral::parse("px").is_none());
        assert!(NumberLiteral::parse("1.").is_none());
        assert!(NumberLiteral::parse("1.2.3").is_none());
    }

    #[test]
    fn adversarial_input_is_rejected_quickly() {
        let long = format!("{}x1", "1".repeat(50_000));
        assert!(NumberLiteral::parse(&long).is_none());
    }

    #[test]
    fn parse_with_unit_sets() {
        let n = parse_number_unit::<NumberOrPercentage>(&word("50%")).unwrap();
        assert_eq!(n, NumberWithUnit::new(50.0, NumberOrPercentage::Percent));

        assert!(parse_number_unit::<Percentage>(&word("50")).is_none());
        assert!(parse_number_unit::<Unitless>(&word("50deg")).is_none());

        let hue = parse_number_unit::<AngleOrNumber>(&word("90DEG")).unwrap();
        assert_eq!(hue.unit, AngleOrNumber::Deg);

        let q = parse_number_unit::<LengthUnit>(&word("4Q")).unwrap();
        assert_eq!(q.unit, LengthUnit::Q);
    }

    #[test]
    fn overflowing_numbers_do_not_parse() {
        assert!(parse_number_unit::<Unitless>(&word("1e999")).is_none());
        assert!(parse_number_unit::<AngleOrNumber>(&word("-1e999deg")).is_none());
        assert_eq!(
            "1e999%".parse::<NumberWithUnit<Percentage>>(),
            Err(Error::invalid_number("1e999%"))
        );
        assert!(parse_number_unit::<Unitless>(&word("1e308")).is_some());
    }

    #[test]
    fn non_word_tokens_do_not_parse() {
        let nodes = crate::token::parse_value("calc(1px)");
        assert!(parse_number_unit::<LengthUnit>(&nodes[0]).is_none());
    }

    #[test]
    fn angle_conversion() {
        assert_eq!(AngleOrNumber::Grad.to_degrees(100.0), 90.0);
        assert!((AngleOrNumber::Rad.to_degrees(std::f64::consts::PI) - 180.0).abs() < 1e-9);
    }

    #[test]
    fn unit_from_str() {
        assert_eq!("PX".parse::<LengthUnit>(), Ok(LengthUnit::Px));
        assert!("deg".parse::<LengthUnit>().is_err());
    }

    #[test]
    fn number_with_unit_from_str() {
        let value: NumberWithUnit<AngleOrNumber> = "90DEG".parse().unwrap();
        assert_eq!(value, NumberWithUnit::new(90.0, AngleOrNumber::Deg));

        assert_eq!(
            "10px".parse::<NumberWithUnit<Percentage>>(),
            Err(Error::invalid_unit("px", &["%"]))
        );
        assert_eq!(
            "px".parse::<NumberWithUnit<Unitless>>(),
            Err(Error::invalid_number("px"))
        );
    }

    #[test]
    fn rewrite_leading_and_trailing_zeros() {
        let lit = NumberLiteral::parse(".5em").unwrap();
        assert_eq!(lit.with_leading_zero(), "0.5em");

        let lit = NumberLiteral::parse("-0.50").unwrap();
        assert_eq!(lit.without_leading_zero(), "-.50");
        assert_eq!(lit.without_trailing_zeros(), "-0.5");

        let lit = NumberLiteral::parse("2.000px").unwrap();
        assert_eq!(lit.without_trailing_zeros(), "2px");

        let lit = NumberLiteral::parse(".0").unwrap();
        assert_eq!(lit.without_trailing_zeros(), "0");
    }

    #[test]
    fn zero_length_units() {
        assert_eq!(strip_zero_length_unit(&word("0px")), Some("0".to_string()));
        assert_eq!(strip_zero_length_unit(&word("0.0EM")), Some("0.0".to_string()));
        assert_eq!(strip_zero_length_unit(&word("0")), None);
        assert_eq!(strip_zero_length_unit(&word("1px")), None);
        assert_eq!(strip_zero_length_unit(&word("0deg")), None);
    }
}
