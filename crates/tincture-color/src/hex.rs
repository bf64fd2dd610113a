//! Hexadecimal colors: `#rgb`, `#rgba`, `#rrggbb` and `#rrggbbaa`.
//!
//! Any word starting with `#` is treated as a hex color. It is complete
//! only when it has 3, 4, 6 or 8 hex digits; otherwise it is kept as an
//! incomplete color so that rules can still report it.

use tincture_syntax::token::{Token, ValueInput};

use crate::rgba::Rgba;

/// A `#`-prefixed color word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HexColor {
    raw: String,
}

impl HexColor {
    /// Parse a hex color from text or a token.
    pub fn parse<'a>(input: impl Into<ValueInput<'a>>) -> Option<Self> {
        let node = input.into().single_node()?;
        Self::from_token(&node)
    }

    /// Build a hex color from a word token starting with `#`.
    pub fn from_token(token: &Token) -> Option<Self> {
        if token.is_word() && token.value.starts_with('#') {
            Some(Self {
                raw: token.raw.clone(),
            })
        } else {
            None
        }
    }

    /// The color as written, `#` included.
    #[inline]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The hex digits, when the color is complete.
    pub fn digits(&self) -> Option<&str> {
        let digits = self.raw.strip_prefix('#')?;
        let valid =
            matches!(digits.len(), 3 | 4 | 6 | 8) && digits.bytes().all(|b| b.is_ascii_hexdigit());
        valid.then_some(digits)
    }

    /// Check if the color has a valid digit count and only hex digits.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.digits().is_some()
    }

    /// Check if the color carries an alpha digit group.
    pub fn has_alpha(&self) -> bool {
        self.digits().is_some_and(|digits| digits.len() % 4 == 0)
    }

    /// The written alpha in `[0, 1]`, if any.
    pub fn alpha(&self) -> Option<f64> {
        if self.has_alpha() {
            self.to_rgba().map(|rgba| rgba.a)
        } else {
            None
        }
    }

    /// Convert to the generic representation.
    pub fn to_rgba(&self) -> Option<Rgba> {
        let digits = self.digits()?;
        let bytes: Vec<u8> = if digits.len() <= 4 {
            digits.bytes().map(|d| nibble(d) * 17).collect()
        } else {
            digits
                .as_bytes()
                .chunks(2)
                .map(|pair| nibble(pair[0]) << 4 | nibble(pair[1]))
                .collect()
        };
        Some(Rgba::from_rgba8(
            bytes[0],
            bytes[1],
            bytes[2],
            bytes.get(3).copied().unwrap_or(255),
        ))
    }

    /// A copy without the alpha digits (`#rgba` → `#rgb`, `#rrggbbaa` →
    /// `#rrggbb`). Colors without alpha are returned unchanged.
    pub fn remove_alpha(&self) -> Self {
        match self.digits() {
            Some(digits) if digits.len() % 4 == 0 => {
                let keep = digits.len() / 4 * 3;
                Self {
                    raw: format!("#{}", &digits[..keep]),
                }
            }
            _ => self.clone(),
        }
    }
}

fn nibble(digit: u8) -> u8 {
    match digit {
        b'0'..=b'9' => digit - b'0',
        b'a'..=b'f' => digit - b'a' + 10,
        b'A'..=b'F' => digit - b'A' + 10,
        _ => 0,
    }
}

/// Expand `#rgb`/`#rgba` to `#rrggbb`/`#rrggbbaa`, keeping the case of
/// each digit. Other lengths are returned as-is.
pub fn expand_hex(hex: &str) -> String {
    match hex.strip_prefix('#') {
        Some(digits) if matches!(digits.len(), 3 | 4) => {
            let mut out = String::with_capacity(digits.len() * 2 + 1);
            out.push('#');
            for c in digits.chars() {
                out.push(c);
                out.push(c);
            }
            out
        }
        _ => hex.to_string(),
    }
}

/// Shorten `#rrggbb`/`#rrggbbaa` to `#rgb`/`#rgba` when every pair is a
/// doubled digit. Returns `None` when the color cannot be shortened.
pub fn shorten_hex(hex: &str) -> Option<String> {
    let digits = hex.strip_prefix('#')?;
    if !matches!(digits.len(), 6 | 8) || !digits.is_ascii() {
        return None;
    }

    let mut out = String::with_capacity(digits.len() / 2 + 1);
    out.push('#');
    for pair in digits.as_bytes().chunks(2) {
        if !pair[0].eq_ignore_ascii_case(&pair[1]) {
            return None;
        }
        out.push(pair[0] as char);
    }
    Some(out)
}
