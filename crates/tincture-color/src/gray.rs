//! `gray()`: a neutral shade given by CIE lightness alone.

use tincture_syntax::number::{NumberOrPercentage, NumberWithUnit, parse_number_unit};
use tincture_syntax::token::Token;

use crate::notation::{ColorFunction, FunctionColor};
use crate::rgba::Rgba;

/// The single lightness channel of `gray()`, as a number or percentage in
/// `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GrayValue {
    pub lightness: NumberWithUnit<NumberOrPercentage>,
}

impl ColorFunction for GrayValue {
    const NAMES: &'static [&'static str] = &["gray"];
    const CHANNELS: usize = 1;

    fn generate(tokens: &[&Token]) -> Option<Self> {
        let [lightness] = tokens else {
            return None;
        };
        let lightness = parse_number_unit::<NumberOrPercentage>(lightness)?;
        lightness.in_range(0.0, 100.0).then_some(Self { lightness })
    }

    fn to_rgba(&self, alpha: f64) -> Rgba {
        Rgba::from_lab(self.lightness.number, 0.0, 0.0, alpha)
    }
}

/// A `gray()` color.
pub type GrayColor = FunctionColor<GrayValue>;
