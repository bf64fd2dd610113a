//! `lab()`.

use tincture_syntax::number::{NumberWithUnit, Percentage, Unitless, parse_number_unit};
use tincture_syntax::token::Token;

use crate::notation::{ColorFunction, FunctionColor};
use crate::rgba::Rgba;

/// CIE lightness and the `a`/`b` axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabValue {
    pub lightness: NumberWithUnit<Percentage>,
    pub a: NumberWithUnit<Unitless>,
    pub b: NumberWithUnit<Unitless>,
}

impl ColorFunction for LabValue {
    const NAMES: &'static [&'static str] = &["lab"];
    const CHANNELS: usize = 3;

    fn generate(tokens: &[&Token]) -> Option<Self> {
        let [lightness, a, b] = tokens else {
            return None;
        };
        let lightness = parse_number_unit::<Percentage>(lightness)?;
        let a = parse_number_unit::<Unitless>(a)?;
        let b = parse_number_unit::<Unitless>(b)?;

        lightness.in_range(0.0, 100.0).then_some(Self { lightness, a, b })
    }

    fn to_rgba(&self, alpha: f64) -> Rgba {
        Rgba::from_lab(self.lightness.number, self.a.number, self.b.number, alpha)
    }
}

/// A `lab()` color.
pub type LabColor = FunctionColor<LabValue>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_lab() {
        let color = LabColor::parse("lab(100% 0 0)").unwrap();
        assert!(color.is_complete());
        assert_eq!(color.to_rgba().unwrap().to_hex(), "#ffffff");

        let color = LabColor::parse("lab(0% 0 0 / 25%)").unwrap();
        assert_eq!(color.to_rgba().unwrap().to_hex(), "#00000040");
    }

    #[test]
    fn lightness_requires_percent() {
        assert!(!LabColor::parse("lab(50 10 10)").unwrap().is_complete());
        assert!(!LabColor::parse("lab(50% 10% 10)").unwrap().is_complete());
        assert!(!LabColor::parse("lab(50% 10)").unwrap().is_complete());
    }
}
