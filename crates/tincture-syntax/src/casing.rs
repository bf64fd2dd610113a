//! Property-name casing: `kebab-case` as written in stylesheets and
//! `camelCase` as written in CSS-in-JS objects.
//!
//! Vendor prefixes follow the CSS-in-JS convention: `-webkit-transition`
//! becomes `WebkitTransition`, except `-ms-` which stays lowercase
//! (`msTransition`). Custom properties (`--brand-color`) are left alone.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Vendor prefixes whose camelCase form is capitalized.
const CAPITALIZED_PREFIXES: &[&str] = &["webkit", "moz", "o"];

fn is_custom_property(name: &str) -> bool {
    name.starts_with("--")
}

/// Check if a property name is in kebab-case.
pub fn is_kebab_case(name: &str) -> bool {
    if is_custom_property(name) {
        return true;
    }
    !name.chars().any(|c| c.is_ascii_uppercase() || c == '_')
}

/// Check if a property name is in camelCase.
pub fn is_camel_case(name: &str) -> bool {
    if is_custom_property(name) {
        return true;
    }
    if name.contains('-') || name.contains('_') {
        return false;
    }
    match name.chars().next() {
        Some(first) if first.is_ascii_uppercase() => CAPITALIZED_PREFIXES.iter().any(|prefix| {
            let capitalized = capitalize(prefix);
            name.starts_with(&capitalized)
                && name[capitalized.len()..]
                    .chars()
                    .next()
                    .is_some_and(|c| c.is_ascii_uppercase())
        }),
        _ => true,
    }
}

/// Convert a property name to camelCase.
pub fn to_camel_case(name: &str) -> String {
    if is_custom_property(name) {
        return name.to_string();
    }

    let (prefix, rest) = match name.strip_prefix('-') {
        Some(rest) => match rest.split_once('-') {
            Some((vendor, rest)) => {
                let vendor = vendor.to_ascii_lowercase();
                let prefix = if CAPITALIZED_PREFIXES.contains(&vendor.as_str()) {
                    capitalize(&vendor)
                } else {
                    vendor
                };
                (Some(prefix), rest)
            }
            None => (None, rest),
        },
        None => (None, name),
    };

    let mut out = prefix.unwrap_or_default();
    let mut upper_next = !out.is_empty();
    for c in rest.chars() {
        if c == '-' || c == '_' {
            upper_next = !out.is_empty();
            continue;
        }
        if upper_next {
            out.push(c.to_ascii_uppercase());
            upper_next = false;
        } else {
            out.push(c);
        }
    }
    out
}

/// Convert a property name to kebab-case.
pub fn to_kebab_case(name: &str) -> String {
    if is_custom_property(name) {
        return name.to_string();
    }

    let mut out = String::with_capacity(name.len() + 4);
    if name.starts_with("ms") && name[2..].starts_with(|c: char| c.is_ascii_uppercase()) {
        out.push('-');
    }
    for (index, c) in name.chars().enumerate() {
        if c.is_ascii_uppercase() {
            out.push('-');
            out.push(c.to_ascii_lowercase());
        } else if c == '_' {
            if index > 0 {
                out.push('-');
            }
        } else {
            out.push(c);
        }
    }
    out
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}

/// A property-name casing style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Casing {
    /// `background-color`
    #[default]
    #[serde(rename = "kebab-case")]
    Kebab,
    /// `backgroundColor`
    #[serde(rename = "camelCase")]
    Camel,
}

impl Casing {
    /// Check if `name` follows this casing.
    pub fn check(self, name: &str) -> bool {
        match self {
            Casing::Kebab => is_kebab_case(name),
            Casing::Camel => is_camel_case(name),
        }
    }

    /// Convert `name` to this casing.
    pub fn convert(self, name: &str) -> String {
        match self {
            Casing::Kebab => to_kebab_case(name),
            Casing::Camel => to_camel_case(name),
        }
    }
}

impl FromStr for Casing {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "kebab-case" => Ok(Casing::Kebab),
            "camelCase" => Ok(Casing::Camel),
            other => Err(Error::UnknownCasing(other.to_string())),
        }
    }
}

impl fmt::Display for Casing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Casing::Kebab => "kebab-case",
            Casing::Camel => "camelCase",
        })
    }
}
