//! `rgb()` and `rgba()`.

use tincture_syntax::number::{NumberOrPercentage, NumberWithUnit, parse_number_unit};
use tincture_syntax::token::Token;

use crate::notation::{ColorFunction, FunctionColor};
use crate::rgba::Rgba;

/// The three channels of an `rgb()` color.
///
/// Channels are either all numbers in `0..=255` or all percentages in
/// `0..=100`; mixing the two is rejected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RgbValue {
    pub r: NumberWithUnit<NumberOrPercentage>,
    pub g: NumberWithUnit<NumberOrPercentage>,
    pub b: NumberWithUnit<NumberOrPercentage>,
}

impl RgbValue {
    fn channel(&self, channel: NumberWithUnit<NumberOrPercentage>) -> f64 {
        match self.r.unit {
            NumberOrPercentage::None => channel.number,
            NumberOrPercentage::Percent => channel.number * 255.0 / 100.0,
        }
    }
}

impl ColorFunction for RgbValue {
    const NAMES: &'static [&'static str] = &["rgb", "rgba"];
    const CHANNELS: usize = 3;

    fn generate(tokens: &[&Token]) -> Option<Self> {
        let [r, g, b] = tokens else {
            return None;
        };
        let r = parse_number_unit::<NumberOrPercentage>(r)?;
        let g = parse_number_unit::<NumberOrPercentage>(g)?;
        let b = parse_number_unit::<NumberOrPercentage>(b)?;
        if g.unit != r.unit || b.unit != r.unit {
            return None;
        }

        let max = match r.unit {
            NumberOrPercentage::None => 255.0,
            NumberOrPercentage::Percent => 100.0,
        };
        [r, g, b]
            .iter()
            .all(|channel| channel.in_range(0.0, max))
            .then_some(Self { r, g, b })
    }

    fn to_rgba(&self, alpha: f64) -> Rgba {
        Rgba::new(self.channel(self.r), self.channel(self.g), self.channel(self.b), alpha)
    }
}

/// An `rgb()`/`rgba()` color.
pub type RgbColor = FunctionColor<RgbValue>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_and_percentages() {
        let color = RgbColor::parse("rgb(255, 128, 0)").unwrap();
        assert!(color.is_complete());
        assert_eq!(color.to_rgba().unwrap().to_hex(), "#ff8000");

        let color = RgbColor::parse("rgb(100% 50% 0%)").unwrap();
        assert_eq!(color.to_rgba().unwrap().to_rgba8(), [255, 128, 0, 255]);
    }

    #[test]
    fn mixed_units_are_incomplete() {
        assert!(!RgbColor::parse("rgb(255 50% 0)").unwrap().is_complete());
    }

    #[test]
    fn out_of_range_is_incomplete() {
        let color = RgbColor::parse("rgb(300,0,0)").unwrap();
        assert!(!color.is_complete());
        assert!(color.to_rgba().is_none());
        assert_eq!(color.to_color_string(), "rgb(300,0,0)");
    }

    #[test]
    fn invalid_alpha_is_incomplete() {
        let color = RgbColor::parse("rgba(0, 0, 0, 1.5)").unwrap();
        assert!(color.values().is_complete());
        assert!(!color.is_complete());
        assert_eq!(color.alpha(), None);
    }

    #[test]
    fn remove_alpha_renames() {
        let color = RgbColor::parse("RGBA(255, 0, 0, 0.5)").unwrap();
        assert_eq!(color.alpha(), Some(0.5));
        assert_eq!(color.remove_alpha().to_color_string(), "RGB(255, 0, 0)");

        let color = RgbColor::parse("rgb(255 0 0 / 50%)").unwrap();
        assert_eq!(color.remove_alpha().to_color_string(), "rgb(255 0 0)");
    }

    #[test]
    fn remove_alpha_without_alpha_is_identity() {
        let color = RgbColor::parse("rgba(1, 2, 3)").unwrap();
        assert_eq!(color.remove_alpha(), color);
    }
}
