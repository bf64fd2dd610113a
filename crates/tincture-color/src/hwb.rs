//! `hwb()`.

use tincture_syntax::number::{AngleOrNumber, NumberWithUnit, Percentage, parse_number_unit};
use tincture_syntax::token::Token;

use crate::notation::{ColorFunction, FunctionColor};
use crate::rgba::Rgba;

/// Hue, whiteness and blackness.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HwbValue {
    pub hue: NumberWithUnit<AngleOrNumber>,
    pub whiteness: NumberWithUnit<Percentage>,
    pub blackness: NumberWithUnit<Percentage>,
}

impl ColorFunction for HwbValue {
    const NAMES: &'static [&'static str] = &["hwb"];
    const CHANNELS: usize = 3;

    fn generate(tokens: &[&Token]) -> Option<Self> {
        let [hue, whiteness, blackness] = tokens else {
            return None;
        };
        let hue = parse_number_unit::<AngleOrNumber>(hue)?;
        let whiteness = parse_number_unit::<Percentage>(whiteness)?;
        let blackness = parse_number_unit::<Percentage>(blackness)?;

        (whiteness.in_range(0.0, 100.0) && blackness.in_range(0.0, 100.0)).then_some(Self {
            hue,
            whiteness,
            blackness,
        })
    }

    fn to_rgba(&self, alpha: f64) -> Rgba {
        Rgba::from_hwb(
            self.hue.unit.to_degrees(self.hue.number),
            self.whiteness.number,
            self.blackness.number,
            alpha,
        )
    }
}

/// An `hwb()` color.
pub type HwbColor = FunctionColor<HwbValue>;
