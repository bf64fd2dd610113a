//! Splitting function calls into arguments.
//!
//! Whitespace and comments between arguments are folded into the
//! neighbouring argument's `before`/`after` text, so a function whose
//! arguments are left untouched serializes back to its exact source.

use crate::token::{Token, ValueInput};

/// One logical argument of a function call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionArgument {
    /// Whitespace and comments preceding the argument.
    pub before: String,
    /// The argument itself (a word, separator, string or nested function).
    pub token: Token,
    /// Whitespace and comments following the argument.
    pub after: String,
}

impl FunctionArgument {
    /// Check if the argument is the given separator.
    #[inline]
    pub fn is_div(&self, separator: char) -> bool {
        self.token.is_div(separator)
    }

    /// Exact source text of the argument, surroundings included.
    pub fn to_css(&self) -> String {
        let capacity = self.before.len() + self.token.raw.len() + self.after.len();
        let mut out = String::with_capacity(capacity);
        out.push_str(&self.before);
        out.push_str(&self.token.raw);
        out.push_str(&self.after);
        out
    }
}

/// Serialize a run of arguments.
pub fn arguments_to_css(arguments: &[FunctionArgument]) -> String {
    arguments.iter().map(FunctionArgument::to_css).collect()
}

/// A function call split into arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedFunction {
    /// Callee name as written (case preserved).
    pub raw_name: String,
    /// Whitespace right after `(`.
    pub before: String,
    /// Arguments in source order.
    pub arguments: Vec<FunctionArgument>,
    /// Trailing text right before `)`.
    pub after: String,
    /// `true` when the source had no closing parenthesis.
    pub unclosed: bool,
    /// Byte offset of the call in its input.
    pub source_index: usize,
}

impl ParsedFunction {
    /// Serialize the call with `name` and `arguments` substituted in.
    pub fn to_css_with(&self, name: &str, arguments: &str) -> String {
        let mut out = String::with_capacity(name.len() + arguments.len() + 4);
        out.push_str(name);
        out.push('(');
        out.push_str(&self.before);
        out.push_str(arguments);
        out.push_str(&self.after);
        if !self.unclosed {
            out.push(')');
        }
        out
    }

    /// Serialize the call unchanged.
    pub fn to_css(&self) -> String {
        self.to_css_with(&self.raw_name, &arguments_to_css(&self.arguments))
    }
}

/// Parse `input` as a call to one of `names` (compared case-insensitively).
///
/// Fails when the input is not exactly one function node, or the callee
/// does not match any expected name.
pub fn parse_function<'a>(
    input: impl Into<ValueInput<'a>>,
    names: &[&str],
) -> Option<ParsedFunction> {
    let node = input.into().single_node()?;
    if !node.is_function() {
        return None;
    }
    if !names.iter().any(|name| node.value.eq_ignore_ascii_case(name)) {
        return None;
    }

    let (arguments, leftover) = split_arguments(&node.nodes);
    let mut after = leftover;
    after.push_str(&node.after);

    Some(ParsedFunction {
        raw_name: node.value.clone(),
        before: node.before.clone(),
        arguments,
        after,
        unclosed: node.unclosed,
        source_index: node.source_index,
    })
}

/// Fold trivia into the neighbouring arguments.
///
/// Trivia preceding the first argument becomes its `before`; any other
/// trivia is appended to the previous argument's `after`. When there are no
/// arguments at all, the trivia is returned as leftover text.
fn split_arguments(nodes: &[Token]) -> (Vec<FunctionArgument>, String) {
    let mut arguments: Vec<FunctionArgument> = Vec::new();
    let mut pending = String::new();

    for node in nodes {
        if node.is_trivia() {
            match arguments.last_mut() {
                Some(last) => last.after.push_str(&node.raw),
                None => pending.push_str(&node.raw),
            }
        } else {
            arguments.push(FunctionArgument {
                before: std::mem::take(&mut pending),
                token: node.clone(),
                after: String::new(),
            });
        }
    }

    (arguments, pending)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::parse_value;

    #[test]
    fn parse_comma_arguments() {
        let func = parse_function("RGBA(255, 0, 0, .5)", &["rgb", "rgba"]).unwrap();
        assert_eq!(func.raw_name, "RGBA");
        let values: Vec<_> = func.arguments.iter().map(|a| a.token.value.as_str()).collect();
        assert_eq!(values, vec!["255", ",", "0", ",", "0", ",", ".5"]);
        assert_eq!(func.arguments[1].after, " ");
    }

    #[test]
    fn trivia_is_folded_into_arguments() {
        let func = parse_function("hsl(/*a*/ 120 /*b*/ 50% 50% )", &["hsl"]).unwrap();
        assert_eq!(func.arguments.len(), 3);
        assert_eq!(func.arguments[0].before, "/*a*/ ");
        assert_eq!(func.arguments[0].after, " /*b*/ ");
        assert_eq!(func.arguments[2].after, "");
        assert_eq!(func.after, " ");
    }

    #[test]
    fn empty_function_keeps_comments() {
        let func = parse_function("rgb( /*x*/ )", &["rgb"]).unwrap();
        assert!(func.arguments.is_empty());
        assert_eq!(func.to_css(), "rgb( /*x*/ )");
    }

    #[test]
    fn rejects_other_shapes() {
        assert!(parse_function("rgb(1 2 3)", &["hsl"]).is_none());
        assert!(parse_function("rgb(1 2 3) red", &["rgb"]).is_none());
        assert!(parse_function("rgb", &["rgb"]).is_none());
        assert!(parse_function(" rgb(1 2 3)", &["rgb"]).is_none());
    }

    #[test]
    fn accepts_tokens() {
        let nodes = parse_value("lab(50% 10 20)");
        let func = parse_function(&nodes[0], &["lab"]).unwrap();
        assert_eq!(func.arguments.len(), 3);
    }

    #[test]
    fn round_trip_unchanged() {
        for input in [
            "rgb(255,0,0)",
            "rgba( 255 , 0 , 0 , 1 )",
            "hsl(120deg 100% 50% / 0.5)",
            "gray(100/1)",
            "rgb(1, 2",
            "rgb(1, calc(2)",
            "rgb(255 0 0 / var(--a)",
            "lch(/* l */50% 30 /* h */ 120)",
        ] {
            let func = parse_function(input, &["rgb", "rgba", "hsl", "gray", "lch"]).unwrap();
            assert_eq!(func.to_css(), input);
        }
    }
}
