#![allow(missing_docs)] // Derive macros generate undocumented methods.

use std::fmt;

use enum_assoc::Assoc;
use serde::{Deserialize, Serialize};

use crate::theme::{HeadingStyle, Theme};

/// Loading indicator styles understood by the styling engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Loader {
    Oval,
    Bars,
    Dots,
}

/// Named color families a theme can pick its primary color from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorFamily {
    Dark,
    Gray,
    Red,
    Pink,
    Grape,
    Violet,
    Indigo,
    Blue,
    Cyan,
    Teal,
    Green,
    Lime,
    Yellow,
    Orange,
}

/// A hex color literal such as `#fff` or `#303030`.
///
/// The literal is kept exactly as written so serialization reproduces it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor(String);

impl HexColor {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Decodes the literal, expanding shorthand forms.
    pub fn to_rgba(&self) -> Rgba {
        let digits = &self.0[1..];
        let channel = |range: std::ops::Range<usize>| {
            let text = &digits[range];
            let value = u8::from_str_radix(text, 16).unwrap_or_default();
            if text.len() == 1 { value * 17 } else { value }
        };

        let (r, g, b, a) = match digits.len() {
            3 => (channel(0..1), channel(1..2), channel(2..3), 255),
            4 => (channel(0..1), channel(1..2), channel(2..3), channel(3..4)),
            6 => (channel(0..2), channel(2..4), channel(4..6), 255),
            _ => (channel(0..2), channel(2..4), channel(4..6), channel(6..8)),
        };

        Rgba {
            r: r as f32 / 255.,
            g: g as f32 / 255.,
            b: b as f32 / 255.,
            a: a as f32 / 255.,
        }
    }
}

impl TryFrom<String> for HexColor {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        let Some(digits) = value.strip_prefix('#') else {
            return Err(format!("expected color \"{value}\" to start with '#'"));
        };

        if !matches!(digits.len(), 3 | 4 | 6 | 8) {
            return Err(format!(
                "expected 3, 4, 6 or 8 hex digits in color \"{value}\""
            ));
        }

        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(format!("color \"{value}\" contains non-hex digits"));
        }

        Ok(Self(value))
    }
}

impl From<HexColor> for String {
    fn from(color: HexColor) -> Self {
        color.0
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Color with channels in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

/// A CSS length as it appears in heading sizes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CssLength {
    Rems(f32),
    Pixels(f32),
}

/// Heading levels `h1` through `h6`.
#[derive(Assoc, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[func(pub fn as_str(&self) -> &'static str)]
pub enum HeadingLevel {
    #[assoc(as_str = "h1")]
    H1,
    #[assoc(as_str = "h2")]
    H2,
    #[assoc(as_str = "h3")]
    H3,
    #[assoc(as_str = "h4")]
    H4,
    #[assoc(as_str = "h5")]
    H5,
    #[assoc(as_str = "h6")]
    H6,
}

impl HeadingLevel {
    pub const ALL: [HeadingLevel; 6] = [
        HeadingLevel::H1,
        HeadingLevel::H2,
        HeadingLevel::H3,
        HeadingLevel::H4,
        HeadingLevel::H5,
        HeadingLevel::H6,
    ];

    pub fn resolve<'a>(&self, theme: &'a Theme) -> &'a HeadingStyle {
        let sizes = &theme.headings.sizes;
        match self {
            Self::H1 => &sizes.h1,
            Self::H2 => &sizes.h2,
            Self::H3 => &sizes.h3,
            Self::H4 => &sizes.h4,
            Self::H5 => &sizes.h5,
            Self::H6 => &sizes.h6,
        }
    }
}
