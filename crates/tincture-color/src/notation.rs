//! The shared template behind every functional color notation.
//!
//! A notation only describes its channels: which names it answers to, how
//! many channels it takes, how to validate them and how to convert them.
//! [`FunctionColor`] does the rest (argument splitting, alpha handling,
//! re-serialization and alpha removal).

use std::fmt;

use tincture_syntax::arguments::{
    AlphaArgument, ArgumentValues, ValuesArgument, parse_argument_values,
};
use tincture_syntax::function::{ParsedFunction, parse_function};
use tincture_syntax::token::{Token, ValueInput};

use crate::rgba::Rgba;

/// Channel validation and conversion for one color function.
pub trait ColorFunction: Sized + Clone + fmt::Debug + PartialEq {
    /// Accepted function names, lowercase, base name first.
    const NAMES: &'static [&'static str];

    /// Number of channels before the alpha.
    const CHANNELS: usize;

    /// Build the channel value from the channel tokens, or `None` when a
    /// channel is missing, has the wrong unit or is out of range.
    fn generate(tokens: &[&Token]) -> Option<Self>;

    /// Convert to the generic representation.
    fn to_rgba(&self, alpha: f64) -> Rgba;
}

/// A parsed color function: `rgb(...)`, `hsl(...)`, `lab(...)` and so on.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionColor<V> {
    function: ParsedFunction,
    values: ArgumentValues<V>,
}

impl<V: ColorFunction> FunctionColor<V> {
    /// Parse `input` as this notation.
    ///
    /// Returns `None` only when the input is not a call to one of
    /// [`ColorFunction::NAMES`]. Malformed channels yield an incomplete
    /// color.
    pub fn parse<'a>(input: impl Into<ValueInput<'a>>) -> Option<Self> {
        let function = parse_function(input, V::NAMES)?;
        let values = parse_argument_values(&function.arguments, V::CHANNELS, V::generate);
        Some(Self { function, values })
    }

    /// The function name as written.
    #[inline]
    pub fn raw_name(&self) -> &str {
        &self.function.raw_name
    }

    /// The channel value, if every channel parsed.
    #[inline]
    pub fn value(&self) -> Option<&V> {
        self.values.values.value()
    }

    /// The channel arguments.
    #[inline]
    pub fn values(&self) -> &ValuesArgument<V> {
        &self.values.values
    }

    /// The alpha part, if a separator was present.
    #[inline]
    pub fn alpha_argument(&self) -> Option<&AlphaArgument> {
        self.values.alpha.as_ref()
    }

    /// Check if every channel parsed and any alpha is valid.
    pub fn is_complete(&self) -> bool {
        self.values.values.is_complete()
            && self.values.alpha.as_ref().is_none_or(AlphaArgument::is_valid)
    }

    /// The written alpha, if present and valid.
    pub fn alpha(&self) -> Option<f64> {
        self.values
            .alpha
            .as_ref()
            .filter(|alpha| alpha.is_valid())
            .and_then(AlphaArgument::value)
    }

    /// Convert to the generic representation, if complete.
    pub fn to_rgba(&self) -> Option<Rgba> {
        if !self.is_complete() {
            return None;
        }
        self.value().map(|value| value.to_rgba(self.alpha().unwrap_or(1.0)))
    }

    /// A copy without the alpha and its separator.
    ///
    /// `rgba`/`hsla` are renamed to `rgb`/`hsl` (keeping the written case)
    /// and whitespace left dangling before the removed separator is dropped.
    pub fn remove_alpha(&self) -> Self {
        if self.values.alpha.is_none() {
            return self.clone();
        }

        let mut function = self.function.clone();
        function.raw_name = base_name(&function.raw_name, V::NAMES[0]);

        let mut values = self.values.values.clone();
        let arguments = match &mut values {
            ValuesArgument::Complete { arguments, .. }
            | ValuesArgument::Incomplete { arguments } => arguments,
        };
        if let Some(last) = arguments.last_mut() {
            let trimmed = last.after.trim_end().len();
            last.after.truncate(trimmed);
        }

        Self {
            function,
            values: ArgumentValues { values, alpha: None },
        }
    }

    /// Serialize from the captured source text.
    pub fn to_color_string(&self) -> String {
        self.function.to_css_with(&self.function.raw_name, &self.values.to_css())
    }
}

/// Strip a trailing `a` from `raw_name` when it spells `<base>a`.
fn base_name(raw_name: &str, base: &str) -> String {
    match raw_name.get(..base.len()) {
        Some(head) if raw_name.len() == base.len() + 1 && head.eq_ignore_ascii_case(base) => {
            head.to_string()
        }
        _ => raw_name.to_string(),
    }
}
