// SPDX-License-Identifier: MIT
//
// Color literal grammars.
//
//   #rgb | #rrggbb | #rrggbbaa        hex, alpha byte must be ff
//   rgb(N,N,N) | rgba(N,N,N,A)        spaces ignored, A ∈ {1, 0, 0.d+, .d+}
//   [r, g, b] | [r, g, b, a]          channels 0–255, a must be 1
//
// Anything that is well-formed but translucent is rejected with
// `NeedsAlphaBlending` rather than flattened: the background it would be
// composited over is not known here.

use tracing::debug;

use crate::color::{ColorInput, Rgb8};
use crate::error::{Alpha, ColorError, Result};

/// Validate any supported color input and normalize it to an opaque
/// [`Rgb8`].
///
/// # Errors
///
/// - [`ColorError::UnsupportedFormat`] if the input matches no grammar.
/// - [`ColorError::NeedsAlphaBlending`] if it is valid but not fully opaque.
pub fn parse<'a>(input: impl Into<ColorInput<'a>>) -> Result<Rgb8> {
    match input.into() {
        ColorInput::Str(s) => parse_str(s),
        ColorInput::Components(c) => parse_components(c),
        ColorInput::Rgb(c) => Ok(c),
    }
}

/// Parse a hex or `rgb()`/`rgba()` string.
///
/// # Errors
///
/// Same as [`parse`].
pub fn parse_str(color: &str) -> Result<Rgb8> {
    let result = color
        .strip_prefix('#')
        .map_or_else(|| parse_functional(color), |digits| parse_hex(color, digits));
    if let Err(e) = &result {
        debug!(color, kind = e.kind(), "rejected color literal");
    }
    result
}

/// Parse a 3- or 4-element numeric color.
///
/// # Errors
///
/// Same as [`parse`].
#[allow(clippy::float_cmp)]
pub fn parse_components(components: &[f64]) -> Result<Rgb8> {
    let in_range = |v: &f64| (0.0..=255.0).contains(v);
    if !(3..=4).contains(&components.len()) || !components.iter().all(in_range) {
        let err = ColorError::unsupported(render_components(components));
        debug!(color = err.color(), kind = err.kind(), "rejected color components");
        return Err(err);
    }

    if let Some(&alpha) = components.get(3) {
        if alpha != 1.0 {
            let err =
                ColorError::needs_blending(render_components(components), Alpha::Fraction(alpha));
            debug!(color = err.color(), kind = err.kind(), "rejected color components");
            return Err(err);
        }
    }

    Ok(Rgb8::new(
        channel_byte(components[0]),
        channel_byte(components[1]),
        channel_byte(components[2]),
    ))
}

/// Render components the way error messages quote them: `[a, b, c]`.
#[must_use]
pub fn render_components(components: &[f64]) -> String {
    let parts: Vec<String> = components.iter().map(f64::to_string).collect();
    format!("[{}]", parts.join(", "))
}

/// Nearest byte to an in-range channel.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn channel_byte(v: f64) -> u8 {
    // Safe: callers have already bounded v to 0.0..=255.0.
    v.round() as u8
}

// ─── Hex ─────────────────────────────────────────────────────────────────────

fn parse_hex(color: &str, digits: &str) -> Result<Rgb8> {
    let unsupported = || ColorError::unsupported(color);
    let bytes = digits.as_bytes();

    match bytes.len() {
        // #RGB
        3 => {
            let r = parse_hex_digit(bytes[0]).ok_or_else(unsupported)?;
            let g = parse_hex_digit(bytes[1]).ok_or_else(unsupported)?;
            let b = parse_hex_digit(bytes[2]).ok_or_else(unsupported)?;
            Ok(Rgb8::new(r << 4 | r, g << 4 | g, b << 4 | b))
        }
        // #RRGGBB
        6 => parse_hex_rgb(bytes).ok_or_else(unsupported),
        // #RRGGBBAA
        8 => {
            let a = parse_hex_byte(&bytes[6..8]).ok_or_else(unsupported)?;
            if a != 0xff {
                return Err(ColorError::needs_blending(color, Alpha::Byte(a)));
            }
            parse_hex_rgb(&bytes[..6]).ok_or_else(unsupported)
        }
        _ => Err(unsupported()),
    }
}

#[inline]
fn parse_hex_rgb(bytes: &[u8]) -> Option<Rgb8> {
    let r = parse_hex_byte(&bytes[0..2])?;
    let g = parse_hex_byte(&bytes[2..4])?;
    let b = parse_hex_byte(&bytes[4..6])?;
    Some(Rgb8::new(r, g, b))
}

#[inline]
const fn parse_hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

#[inline]
fn parse_hex_byte(bytes: &[u8]) -> Option<u8> {
    let hi = parse_hex_digit(bytes[0])?;
    let lo = parse_hex_digit(bytes[1])?;
    Some(hi << 4 | lo)
}

// ─── Functional notation ─────────────────────────────────────────────────────

fn parse_functional(color: &str) -> Result<Rgb8> {
    let unsupported = || ColorError::unsupported(color);
    let compact: String = color.chars().filter(|&c| c != ' ').collect();

    let body = compact
        .strip_prefix("rgba(")
        .or_else(|| compact.strip_prefix("rgb("))
        .and_then(|rest| rest.strip_suffix(')'))
        .ok_or_else(unsupported)?;

    let mut parts = body.split(',');
    let r = parts.next().and_then(parse_channel).ok_or_else(unsupported)?;
    let g = parts.next().and_then(parse_channel).ok_or_else(unsupported)?;
    let b = parts.next().and_then(parse_channel).ok_or_else(unsupported)?;

    if let Some(a) = parts.next() {
        let alpha = parse_alpha(a).ok_or_else(unsupported)?;
        if parts.next().is_some() {
            return Err(unsupported());
        }
        if let Some(alpha) = alpha {
            return Err(ColorError::needs_blending(color, Alpha::Fraction(alpha)));
        }
    }

    Ok(Rgb8::new(r, g, b))
}

/// Unsigned decimal integer that fits a byte.
fn parse_channel(s: &str) -> Option<u8> {
    if s.is_empty() || !s.bytes().all(|c| c.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

/// `Some(None)` for an opaque `1`, `Some(Some(a))` for a translucent alpha,
/// `None` if the token is not an alpha at all.
fn parse_alpha(s: &str) -> Option<Option<f64>> {
    match s {
        "1" => Some(None),
        "0" => Some(Some(0.0)),
        _ => {
            let fraction = s.strip_prefix("0.").or_else(|| s.strip_prefix('.'))?;
            if fraction.is_empty() || !fraction.bytes().all(|c| c.is_ascii_digit()) {
                return None;
            }
            format!("0.{fraction}").parse().ok().map(Some)
        }
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn unsupported(color: &str) -> ColorError {
        ColorError::UnsupportedFormat {
            color: color.to_string(),
        }
    }

    // ── Hex ──────────────────────────────────────────────────────────────

    #[test]
    fn hex_short_duplicates_digits() {
        assert_eq!(parse("#f80"), Ok(Rgb8::new(0xff, 0x88, 0x00)));
        assert_eq!(parse("#ABC"), Ok(Rgb8::new(0xaa, 0xbb, 0xcc)));
    }

    #[test]
    fn hex_long() {
        assert_eq!(parse("#aa5522"), Ok(Rgb8::new(0xaa, 0x55, 0x22)));
        assert_eq!(parse("#AA5522"), Ok(Rgb8::new(0xaa, 0x55, 0x22)));
    }

    #[test]
    fn hex_opaque_alpha_is_dropped() {
        assert_eq!(parse("#AA5522FF"), parse("#AA5522"));
        assert_eq!(parse("#aa5522ff"), parse("#aa5522"));
    }

    #[test]
    fn hex_translucent_alpha_needs_blending() {
        assert_eq!(
            parse("#ffffff66"),
            Err(ColorError::NeedsAlphaBlending {
                color: "#ffffff66".to_string(),
                alpha: Alpha::Byte(0x66),
            })
        );
        assert_eq!(parse("#00000000").unwrap_err().alpha(), Some(Alpha::Byte(0)));
    }

    #[test]
    fn hex_bad_lengths() {
        for color in ["#", "#f", "#ff", "#ffff", "#fffff", "#fffffff", "#fffffffff"] {
            assert_eq!(parse(color), Err(unsupported(color)), "{color}");
        }
    }

    #[test]
    fn hex_bad_digits() {
        assert_eq!(parse("#ggg"), Err(unsupported("#ggg")));
        assert_eq!(parse("#12345z"), Err(unsupported("#12345z")));
        assert_eq!(parse("#123456zz"), Err(unsupported("#123456zz")));
    }

    #[test]
    fn hex_requires_hash() {
        assert_eq!(parse("ffffff"), Err(unsupported("ffffff")));
    }

    // ── Functional notation ──────────────────────────────────────────────

    #[test]
    fn rgb_basic() {
        assert_eq!(parse("rgb(170,85,34)"), Ok(Rgb8::new(170, 85, 34)));
        assert_eq!(parse("rgb( 170, 85 ,34 )"), Ok(Rgb8::new(170, 85, 34)));
        assert_eq!(parse(" rgb (0 , 0 , 0) "), Ok(Rgb8::BLACK));
    }

    #[test]
    fn rgba_opaque() {
        assert_eq!(parse("rgba(255,255,255,1)"), Ok(Rgb8::WHITE));
        assert_eq!(parse("rgb(255, 255, 255, 1)"), Ok(Rgb8::WHITE));
    }

    #[test]
    fn rgba_translucent_needs_blending() {
        let cases = [
            ("rgba(255,255,255,.4)", 0.4),
            ("rgba(255, 255, 255, 0.4)", 0.4),
            ("rgba(0,0,0,0)", 0.0),
            ("rgba(0,0,0,0.05)", 0.05),
        ];
        for (color, alpha) in cases {
            assert_eq!(
                parse(color),
                Err(ColorError::NeedsAlphaBlending {
                    color: color.to_string(),
                    alpha: Alpha::Fraction(alpha),
                }),
                "{color}"
            );
        }
    }

    #[test]
    fn functional_rejects_other_notations() {
        for color in [
            "hsla(120, 100%, 50%, 0.3)",
            "hsl(0,0%,0%)",
            "red",
            "",
            "rgb()",
            "rgb(1,2)",
            "rgb(1,2,3,1,1)",
            "rgb(1,2,3",
            "rgb(1,2,3))",
            "rgb(-1,2,3)",
            "rgb(+1,2,3)",
            "rgb(1.5,2,3)",
            "rgb(256,0,0)",
            "rgba(1,2,3,1.0)",
            "rgba(1,2,3,0.)",
            "rgba(1,2,3,2)",
            "RGB(1,2,3)",
        ] {
            assert_eq!(parse(color), Err(unsupported(color)), "{color}");
        }
    }

    // ── Components ───────────────────────────────────────────────────────

    #[test]
    fn components_triple_and_opaque_quad() {
        assert_eq!(parse(&[170.0, 85.0, 34.0]), Ok(Rgb8::new(170, 85, 34)));
        assert_eq!(parse(&[255.0, 255.0, 255.0, 1.0]), Ok(Rgb8::WHITE));
    }

    #[test]
    fn components_bad_length() {
        assert_eq!(
            parse_components(&[1.0, 2.0]),
            Err(unsupported("[1, 2]"))
        );
        assert_eq!(
            parse_components(&[1.0, 2.0, 3.0, 1.0, 1.0]),
            Err(unsupported("[1, 2, 3, 1, 1]"))
        );
        assert_eq!(parse_components(&[]), Err(unsupported("[]")));
    }

    #[test]
    fn components_out_of_range() {
        assert_eq!(
            parse(&[256.0, 0.0, 0.0]),
            Err(unsupported("[256, 0, 0]"))
        );
        assert_eq!(
            parse(&[-1.0, 0.0, 0.0]),
            Err(unsupported("[-1, 0, 0]"))
        );
        assert!(matches!(
            parse_components(&[f64::NAN, 0.0, 0.0]),
            Err(ColorError::UnsupportedFormat { .. })
        ));
    }

    #[test]
    fn components_fractional_channels_round() {
        assert_eq!(parse(&[12.5, 0.0, 0.0]), Ok(Rgb8::new(13, 0, 0)));
        assert_eq!(parse(&[127.4, 127.5, 254.6]), Ok(Rgb8::new(127, 128, 255)));
        assert_eq!(parse(&[0.2, 0.0, 0.0, 1.0]), Ok(Rgb8::BLACK));
    }

    #[test]
    fn components_translucent_needs_blending() {
        assert_eq!(
            parse(&[0.0, 0.0, 0.0, 0.5]),
            Err(ColorError::NeedsAlphaBlending {
                color: "[0, 0, 0, 0.5]".to_string(),
                alpha: Alpha::Fraction(0.5),
            })
        );
    }

    #[test]
    fn rgb_passes_through() {
        assert_eq!(parse(Rgb8::new(1, 2, 3)), Ok(Rgb8::new(1, 2, 3)));
    }

    // ── Encoding equivalence ─────────────────────────────────────────────

    mod equivalence {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// `#rrggbb`, `rgb()`, `#rrggbbff` and `[r, g, b]` agree.
            #[test]
            fn encodings_agree(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
                let expected = Rgb8::new(r, g, b);
                let hex = format!("#{r:02x}{g:02x}{b:02x}");
                let hex_alpha = format!("{hex}FF");
                let functional = format!("rgb({r}, {g}, {b})");
                let array = [f64::from(r), f64::from(g), f64::from(b)];

                prop_assert_eq!(parse(hex.as_str()), Ok(expected));
                prop_assert_eq!(parse(hex_alpha.as_str()), Ok(expected));
                prop_assert_eq!(parse(functional.as_str()), Ok(expected));
                prop_assert_eq!(parse(&array), Ok(expected));
            }

            /// Any alpha byte other than ff is refused, never flattened.
            #[test]
            fn translucent_hex_always_refused(a in 0u8..255) {
                let color = format!("#123456{a:02x}");
                prop_assert_eq!(
                    parse(color.as_str()).unwrap_err().alpha(),
                    Some(Alpha::Byte(a))
                );
            }
        }
    }
}
