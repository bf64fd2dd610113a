//! `lch()`.

use tincture_syntax::number::{
    AngleOrNumber, NumberWithUnit, Percentage, Unitless, parse_number_unit,
};
use tincture_syntax::token::Token;

use crate::notation::{ColorFunction, FunctionColor};
use crate::rgba::Rgba;

/// CIE lightness, chroma and hue.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LchValue {
    pub lightness: NumberWithUnit<Percentage>,
    pub chroma: NumberWithUnit<Unitless>,
    pub hue: NumberWithUnit<AngleOrNumber>,
}

impl ColorFunction for LchValue {
    const NAMES: &'static [&'static str] = &["lch"];
    const CHANNELS: usize = 3;

    fn generate(tokens: &[&Token]) -> Option<Self> {
        let [lightness, chroma, hue] = tokens else {
            return None;
        };
        let lightness = parse_number_unit::<Percentage>(lightness)?;
        let chroma = parse_number_unit::<Unitless>(chroma)?;
        let hue = parse_number_unit::<AngleOrNumber>(hue)?;

        lightness.in_range(0.0, 100.0).then_some(Self { lightness, chroma, hue })
    }

    fn to_rgba(&self, alpha: f64) -> Rgba {
        Rgba::from_lch(
            self.lightness.number,
            self.chroma.number,
            self.hue.unit.to_degrees(self.hue.number),
            alpha,
        )
    }
}

/// An `lch()` color.
pub type LchColor = FunctionColor<LchValue>;
