//! CSS value syntax for Tincture.
//!
//! This crate holds the parsing infrastructure shared by the color
//! notations and by value-level lint rules:
//!
//! - **Tokens**: a lossless view of a CSS value over the `cssparser` tokenizer
//! - **Numbers**: numeric literals with typed unit sets
//! - **Functions**: argument splitting that preserves whitespace and comments
//! - **Arguments**: comma/space channel lists with an optional alpha
//! - **Casing**: kebab-case and camelCase property names
//! - **Box values**: shorthand side reduction
//!
//! # Example
//!
//! ```
//! use tincture_syntax::prelude::*;
//!
//! let func = parse_function("rgb(255 0 0 / 50%)", &["rgb", "rgba"]).unwrap();
//! let parsed = parse_argument_values(&func.arguments, 3, |tokens| {
//!     tokens
//!         .iter()
//!         .map(|t| parse_number_unit::<NumberOrPercentage>(t).map(|n| n.number))
//!         .collect::<Option<Vec<_>>>()
//! });
//! assert_eq!(parsed.values.value(), Some(&vec![255.0, 0.0, 0.0]));
//! assert_eq!(parsed.alpha.and_then(|a| a.value()), Some(0.5));
//! ```

pub mod arguments;
pub mod box_values;
pub mod casing;
pub mod function;
pub mod number;
pub mod token;

mod error;

pub use error::{Error, Result};

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::arguments::{
        AlphaArgument, ArgumentValues, ValuesArgument, parse_argument_values,
    };
    pub use crate::box_values::reduce_box_values;
    pub use crate::casing::{Casing, is_camel_case, is_kebab_case, to_camel_case, to_kebab_case};
    pub use crate::function::{FunctionArgument, ParsedFunction, parse_function};
    pub use crate::number::{
        AngleOrNumber, LengthUnit, NumberLiteral, NumberOrPercentage, NumberWithUnit, Percentage,
        Unit, Unitless, parse_number_unit, strip_zero_length_unit,
    };
    pub use crate::token::{Token, TokenKind, ValueInput, parse_value, stringify};
}
