//! `hsl()` and `hsla()`.

use tincture_syntax::number::{AngleOrNumber, NumberWithUnit, Percentage, parse_number_unit};
use tincture_syntax::token::Token;

use crate::notation::{ColorFunction, FunctionColor};
use crate::rgba::Rgba;

/// Hue, saturation and lightness.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HslValue {
    pub hue: NumberWithUnit<AngleOrNumber>,
    pub saturation: NumberWithUnit<Percentage>,
    pub lightness: NumberWithUnit<Percentage>,
}

impl ColorFunction for HslValue {
    const NAMES: &'static [&'static str] = &["hsl", "hsla"];
    const CHANNELS: usize = 3;

    fn generate(tokens: &[&Token]) -> Option<Self> {
        let [hue, saturation, lightness] = tokens else {
            return None;
        };
        let hue = parse_number_unit::<AngleOrNumber>(hue)?;
        let saturation = parse_number_unit::<Percentage>(saturation)?;
        let lightness = parse_number_unit::<Percentage>(lightness)?;

        (saturation.in_range(0.0, 100.0) && lightness.in_range(0.0, 100.0)).then_some(Self {
            hue,
            saturation,
            lightness,
        })
    }

    fn to_rgba(&self, alpha: f64) -> Rgba {
        Rgba::from_hsl(
            self.hue.unit.to_degrees(self.hue.number),
            self.saturation.number,
            self.lightness.number,
            alpha,
        )
    }
}

/// An `hsl()`/`hsla()` color.
pub type HslColor = FunctionColor<HslValue>;
