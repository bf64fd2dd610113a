//! Channel and alpha extraction from split function arguments.
//!
//! Color-like functions come in two syntaxes:
//!
//! - comma style: `rgb(255, 0, 0)`, `rgba(255, 0, 0, 0.5)`
//! - space style: `rgb(255 0 0)`, `rgb(255 0 0 / 50%)`
//!
//! A single `,` anywhere in the argument list selects comma style. The
//! notation-specific `generate` callback decides whether the collected
//! channel tokens form a complete value.

use crate::function::{FunctionArgument, arguments_to_css};
use crate::number::{NumberOrPercentage, parse_number_unit};
use crate::token::Token;

/// Channel arguments of a function, with or without a structured value.
#[derive(Debug, Clone, PartialEq)]
pub enum ValuesArgument<V> {
    /// Every channel parsed and is in range.
    Complete {
        value: V,
        arguments: Vec<FunctionArgument>,
    },
    /// The channels could not be understood; only the raw text is kept.
    Incomplete { arguments: Vec<FunctionArgument> },
}

impl<V> ValuesArgument<V> {
    /// Check if the channels form a complete value.
    #[inline]
    pub fn is_complete(&self) -> bool {
        matches!(self, ValuesArgument::Complete { .. })
    }

    /// The structured value, if complete.
    pub fn value(&self) -> Option<&V> {
        match self {
            ValuesArgument::Complete { value, .. } => Some(value),
            ValuesArgument::Incomplete { .. } => None,
        }
    }

    /// The channel arguments, separators included.
    pub fn arguments(&self) -> &[FunctionArgument] {
        match self {
            ValuesArgument::Complete { arguments, .. }
            | ValuesArgument::Incomplete { arguments } => arguments,
        }
    }

    /// Exact source text of the channels.
    pub fn to_css(&self) -> String {
        arguments_to_css(self.arguments())
    }
}

/// The alpha part of a function: a separator plus what follows it.
#[derive(Debug, Clone, PartialEq)]
pub enum AlphaArgument {
    /// Exactly one numeric token whose value normalizes into `[0, 1]`.
    Valid {
        value: f64,
        separator: FunctionArgument,
        arguments: Vec<FunctionArgument>,
    },
    /// Missing, non-numeric, extra or out-of-range alpha. `value` carries the
    /// normalized number when there was one.
    Invalid {
        value: Option<f64>,
        separator: FunctionArgument,
        arguments: Vec<FunctionArgument>,
    },
}

impl AlphaArgument {
    /// Check if the alpha is valid.
    #[inline]
    pub fn is_valid(&self) -> bool {
        matches!(self, AlphaArgument::Valid { .. })
    }

    /// The normalized alpha: always present when valid, possibly when invalid.
    pub fn value(&self) -> Option<f64> {
        match self {
            AlphaArgument::Valid { value, .. } => Some(*value),
            AlphaArgument::Invalid { value, .. } => *value,
        }
    }

    /// The `/` or `,` that introduced the alpha.
    pub fn separator(&self) -> &FunctionArgument {
        match self {
            AlphaArgument::Valid { separator, .. } | AlphaArgument::Invalid { separator, .. } => {
                separator
            }
        }
    }

    /// Arguments following the separator.
    pub fn arguments(&self) -> &[FunctionArgument] {
        match self {
            AlphaArgument::Valid { arguments, .. } | AlphaArgument::Invalid { arguments, .. } => {
                arguments
            }
        }
    }

    /// Exact source text, separator included.
    pub fn to_css(&self) -> String {
        let mut out = self.separator().to_css();
        out.push_str(&arguments_to_css(self.arguments()));
        out
    }
}

/// Channels and alpha extracted from a function's arguments.
#[derive(Debug, Clone, PartialEq)]
pub struct ArgumentValues<V> {
    pub values: ValuesArgument<V>,
    pub alpha: Option<AlphaArgument>,
}

impl<V> ArgumentValues<V> {
    /// Exact source text of channels and alpha.
    pub fn to_css(&self) -> String {
        let mut out = self.values.to_css();
        if let Some(alpha) = &self.alpha {
            out.push_str(&alpha.to_css());
        }
        out
    }
}

/// Split `arguments` into `argument_count` channels and an optional alpha.
///
/// `generate` receives the channel tokens (separators removed) and returns
/// the structured value, or `None` when the tokens do not form one.
pub fn parse_argument_values<V, F>(
    arguments: &[FunctionArgument],
    argument_count: usize,
    generate: F,
) -> ArgumentValues<V>
where
    F: FnOnce(&[&Token]) -> Option<V>,
{
    let comma_style = arguments.iter().any(|arg| arg.is_div(','));

    let mut cursor = 0;
    let mut commas = 0;
    let mut separator = None;
    while cursor < arguments.len() {
        let arg = &arguments[cursor];
        if arg.is_div('/') {
            separator = Some(cursor);
            break;
        }
        if comma_style && arg.is_div(',') {
            if commas + 1 >= argument_count {
                separator = Some(cursor);
                break;
            }
            commas += 1;
        }
        cursor += 1;
    }

    let channel_arguments = &arguments[..cursor];
    let alpha = separator.map(|index| parse_alpha(&arguments[index], &arguments[index + 1..]));

    let channels: Option<Vec<&Token>> = if comma_style {
        comma_separated_channels(channel_arguments)
    } else {
        Some(channel_arguments.iter().map(|arg| &arg.token).collect())
    };

    let values = match channels.and_then(|tokens| generate(&tokens)) {
        Some(value) => ValuesArgument::Complete {
            value,
            arguments: channel_arguments.to_vec(),
        },
        None => ValuesArgument::Incomplete {
            arguments: channel_arguments.to_vec(),
        },
    };
    tracing::trace!(
        comma_style,
        complete = values.is_complete(),
        alpha = alpha.is_some(),
        "split channel arguments"
    );

    ArgumentValues { values, alpha }
}

/// Channel tokens of a comma-style list, or `None` when values and commas
/// do not strictly alternate.
fn comma_separated_channels(arguments: &[FunctionArgument]) -> Option<Vec<&Token>> {
    if arguments.len() % 2 == 0 {
        return None;
    }
    let mut channels = Vec::with_capacity(arguments.len() / 2 + 1);
    for (index, arg) in arguments.iter().enumerate() {
        let is_comma = arg.is_div(',');
        if index % 2 == 0 {
            if is_comma || arg.is_div('/') {
                return None;
            }
            channels.push(&arg.token);
        } else if !is_comma {
            return None;
        }
    }
    Some(channels)
}

fn parse_alpha(separator: &FunctionArgument, rest: &[FunctionArgument]) -> AlphaArgument {
    let separator = separator.clone();
    let arguments = rest.to_vec();

    let [single] = rest else {
        return AlphaArgument::Invalid {
            value: None,
            separator,
            arguments,
        };
    };

    let Some(alpha) = parse_number_unit::<NumberOrPercentage>(&single.token) else {
        return AlphaArgument::Invalid {
            value: None,
            separator,
            arguments,
        };
    };

    let value = match alpha.unit {
        NumberOrPercentage::Percent => alpha.number / 100.0,
        NumberOrPercentage::None => alpha.number,
    };

    if (0.0..=1.0).contains(&value) {
        AlphaArgument::Valid {
            value,
            separator,
            arguments,
        }
    } else {
        AlphaArgument::Invalid {
            value: Some(value),
            separator,
            arguments,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::function::parse_function;

    fn values_of(input: &str, count: usize) -> ArgumentValues<Vec<String>> {
        let func = parse_function(input, &["f"]).unwrap();
        parse_argument_values(&func.arguments, count, |tokens| {
            if tokens.len() == count {
                Some(tokens.iter().map(|t| t.value.clone()).collect())
            } else {
                None
            }
        })
    }

    #[test]
    fn comma_style_with_alpha() {
        let result = values_of("f(1, 2, 3, 0.5)", 3);
        assert_eq!(result.values.value().unwrap(), &vec!["1", "2", "3"]);
        let alpha = result.alpha.unwrap();
        assert!(alpha.is_valid());
        assert_eq!(alpha.value(), Some(0.5));
        assert!(alpha.separator().is_div(','));
    }

    #[test]
    fn space_style_with_slash_alpha() {
        let result = values_of("f(1 2 3 / 50%)", 3);
        assert!(result.values.is_complete());
        assert_eq!(result.alpha.unwrap().value(), Some(0.5));
    }

    #[test]
    fn mixed_separators_are_incomplete() {
        let result = values_of("f(1, 2 3)", 3);
        assert!(!result.values.is_complete());
        assert!(result.alpha.is_none());
        assert_eq!(result.to_css(), "1, 2 3");
    }

    #[test]
    fn wrong_count_is_incomplete() {
        assert!(!values_of("f(1, 2)", 3).values.is_complete());
        assert!(!values_of("f(1 2 3 4)", 3).values.is_complete());
    }

    #[test]
    fn single_channel_alpha() {
        let result = values_of("f(100/1)", 1);
        assert!(result.values.is_complete());
        assert_eq!(result.alpha.as_ref().and_then(AlphaArgument::value), Some(1.0));

        let result = values_of("f(50%, 0.25)", 1);
        assert!(result.values.is_complete());
        assert_eq!(result.alpha.as_ref().and_then(AlphaArgument::value), Some(0.25));
    }

    #[test]
    fn invalid_alpha_keeps_text() {
        let result = values_of("f(1 2 3 / 2)", 3);
        let alpha = result.alpha.unwrap();
        assert!(!alpha.is_valid());
        assert_eq!(alpha.value(), Some(2.0));

        let result = values_of("f(1 2 3 / 0.5 0.5)", 3);
        let alpha = result.alpha.as_ref().unwrap();
        assert!(!alpha.is_valid());
        assert_eq!(alpha.value(), None);
        assert_eq!(result.to_css(), "1 2 3 / 0.5 0.5");

        let result = values_of("f(1, 2, 3,)", 3);
        assert!(!result.alpha.unwrap().is_valid());
    }

    #[test]
    fn leading_comma_is_incomplete() {
        let result = values_of("f(, 1, 2)", 3);
        assert!(!result.values.is_complete());
    }
}
