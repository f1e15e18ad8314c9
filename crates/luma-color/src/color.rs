// SPDX-License-Identifier: MIT
//
// luma color types — raw color literals and the opaque byte triple they
// normalize to.
//
// Single-character variable names (r, g, b) follow the usual color-science
// convention.
//
// Flow:
//
//   ColorInput (string | numeric components) ── parse ──► Rgb8 (opaque)
//
// `Rgb8` is only ever produced by the parser or built directly from bytes,
// so anything holding one is known to be fully opaque.

use std::fmt;
use std::str::FromStr;

use crate::error::ColorError;
use crate::parse;

// ─── Rgb8 ────────────────────────────────────────────────────────────────────

/// A fully opaque sRGB color with 8-bit channels.
///
/// # Examples
///
/// ```
/// use luma_color::Rgb8;
///
/// let orange: Rgb8 = "#f80".parse().unwrap();
/// assert_eq!(orange, Rgb8::new(0xff, 0x88, 0x00));
/// assert_eq!(orange.to_hex(), "#ff8800");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    /// Pure black.
    pub const BLACK: Self = Self::new(0, 0, 0);

    /// Pure white.
    pub const WHITE: Self = Self::new(255, 255, 255);

    #[inline]
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Channels scaled to 0.0–1.0.
    #[inline]
    #[must_use]
    pub fn to_unit(self) -> (f64, f64, f64) {
        (
            f64::from(self.r) / 255.0,
            f64::from(self.g) / 255.0,
            f64::from(self.b) / 255.0,
        )
    }

    /// Lowercase `#rrggbb` form.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb8 {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse::parse_str(s)
    }
}

impl From<(u8, u8, u8)> for Rgb8 {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

// ─── ColorInput ──────────────────────────────────────────────────────────────

/// A color as supplied by a caller, before validation.
///
/// Strings are hex (`#rgb`, `#rrggbb`, `#rrggbbaa`) or functional notation
/// (`rgb(r,g,b)`, `rgba(r,g,b,a)`). Component slices hold three or four
/// numbers: byte-valued channels and an optional alpha that must be `1`.
/// An [`Rgb8`] is already normalized and passes straight through.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColorInput<'a> {
    Str(&'a str),
    Components(&'a [f64]),
    Rgb(Rgb8),
}

impl<'a> ColorInput<'a> {
    /// The string literal, if this input is one. Only string inputs have a
    /// stable key for memoization.
    #[must_use]
    pub const fn as_str(&self) -> Option<&'a str> {
        match self {
            Self::Str(s) => Some(*s),
            Self::Components(_) | Self::Rgb(_) => None,
        }
    }

    /// Validate and normalize this input.
    ///
    /// # Errors
    ///
    /// See [`parse::parse`].
    pub fn parse(self) -> crate::Result<Rgb8> {
        parse::parse(self)
    }
}

impl<'a> From<&'a str> for ColorInput<'a> {
    fn from(s: &'a str) -> Self {
        Self::Str(s)
    }
}

impl<'a> From<&'a String> for ColorInput<'a> {
    fn from(s: &'a String) -> Self {
        Self::Str(s.as_str())
    }
}

impl<'a> From<&'a [f64]> for ColorInput<'a> {
    fn from(c: &'a [f64]) -> Self {
        Self::Components(c)
    }
}

impl<'a> From<&'a Vec<f64>> for ColorInput<'a> {
    fn from(c: &'a Vec<f64>) -> Self {
        Self::Components(c.as_slice())
    }
}

impl<'a> From<&'a [f64; 3]> for ColorInput<'a> {
    fn from(c: &'a [f64; 3]) -> Self {
        Self::Components(c)
    }
}

impl<'a> From<&'a [f64; 4]> for ColorInput<'a> {
    fn from(c: &'a [f64; 4]) -> Self {
        Self::Components(c)
    }
}

impl From<Rgb8> for ColorInput<'_> {
    fn from(c: Rgb8) -> Self {
        Self::Rgb(c)
    }
}

impl fmt::Display for ColorInput<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) => f.write_str(s),
            Self::Components(c) => f.write_str(&parse::render_components(c)),
            Self::Rgb(c) => write!(f, "{c}"),
        }
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn unit_scaling() {
        assert_eq!(Rgb8::BLACK.to_unit(), (0.0, 0.0, 0.0));
        assert_eq!(Rgb8::WHITE.to_unit(), (1.0, 1.0, 1.0));
        let (r, _, _) = Rgb8::new(51, 0, 0).to_unit();
        assert!((r - 0.2).abs() < 1e-12);
    }

    #[test]
    fn hex_output_is_lowercase_and_padded() {
        assert_eq!(Rgb8::new(0xAA, 0x05, 0x22).to_hex(), "#aa0522");
        assert_eq!(Rgb8::BLACK.to_string(), "#000000");
    }

    #[test]
    fn from_str_goes_through_parser() {
        assert_eq!("rgb(1, 2, 3)".parse::<Rgb8>(), Ok(Rgb8::new(1, 2, 3)));
        assert!("nope".parse::<Rgb8>().is_err());
    }

    #[test]
    fn only_strings_have_a_key() {
        assert_eq!(ColorInput::from("#fff").as_str(), Some("#fff"));
        assert_eq!(ColorInput::from(&[0.0, 0.0, 0.0]).as_str(), None);
        assert_eq!(ColorInput::from(Rgb8::WHITE).as_str(), None);
    }

    #[test]
    fn input_display() {
        assert_eq!(ColorInput::from("#abc").to_string(), "#abc");
        assert_eq!(ColorInput::from(&[1.0, 2.0, 3.0]).to_string(), "[1, 2, 3]");
        assert_eq!(ColorInput::from(Rgb8::WHITE).to_string(), "#ffffff");
    }
}
