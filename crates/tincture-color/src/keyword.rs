//! Color keywords: the named colors plus `transparent`.

use tincture_syntax::token::{Token, ValueInput};

use crate::named::hex_for_name;
use crate::rgba::Rgba;

/// A color written as a keyword (`red`, `RebeccaPurple`, `transparent`).
#[derive(Debug, Clone, PartialEq)]
pub struct NamedColor {
    raw: String,
    rgba: Rgba,
}

impl NamedColor {
    /// Parse a keyword from text or a token.
    pub fn parse<'a>(input: impl Into<ValueInput<'a>>) -> Option<Self> {
        let node = input.into().single_node()?;
        Self::from_token(&node)
    }

    /// Build a keyword color from a word token, case-insensitively.
    pub fn from_token(token: &Token) -> Option<Self> {
        if !token.is_word() {
            return None;
        }

        let rgba = if token.value.eq_ignore_ascii_case("transparent") {
            Rgba::TRANSPARENT
        } else {
            let hex = hex_for_name(&token.value)?;
            let [r, g, b] = [&hex[1..3], &hex[3..5], &hex[5..7]]
                .map(|pair| u8::from_str_radix(pair, 16).unwrap_or(0));
            Rgba::from_rgba8(r, g, b, 255)
        };

        Some(Self {
            raw: token.raw.clone(),
            rgba,
        })
    }

    /// The keyword as written.
    #[inline]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Check if this is `transparent`.
    pub fn is_transparent(&self) -> bool {
        self.raw.eq_ignore_ascii_case("transparent")
    }

    /// The keyword's implied alpha: `0` for `transparent`, otherwise none.
    pub fn alpha(&self) -> Option<f64> {
        self.is_transparent().then_some(0.0)
    }

    /// Convert to the generic representation.
    #[inline]
    pub fn to_rgba(&self) -> Rgba {
        self.rgba
    }
}
