// SPDX-License-Identifier: MIT
//
// Parse failures for color literals.
//
// Both kinds are caller-input problems: nothing here is transient, so
// nothing is retried. The offending literal travels with the error so a
// message can point at exactly what was rejected.

use std::fmt;

/// Result alias for color parsing.
pub type Result<T> = std::result::Result<T, ColorError>;

/// Why a color literal was rejected.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ColorError {
    /// The input matches none of the accepted grammars, or an array input
    /// has the wrong length or an out-of-range component.
    #[error("unsupported color format: `{color}`")]
    UnsupportedFormat {
        /// The literal as given (arrays render as `[a, b, c]`).
        color: String,
    },

    /// The input is well-formed but not fully opaque.
    #[error(
        "color `{color}` has alpha {alpha}; alpha-blend it over its background \
         and retry with the resulting opaque color"
    )]
    NeedsAlphaBlending {
        /// The literal as given.
        color: String,
        /// The alpha value that was parsed out of it.
        alpha: Alpha,
    },
}

impl ColorError {
    pub(crate) fn unsupported(color: impl Into<String>) -> Self {
        Self::UnsupportedFormat {
            color: color.into(),
        }
    }

    pub(crate) fn needs_blending(color: impl Into<String>, alpha: Alpha) -> Self {
        Self::NeedsAlphaBlending {
            color: color.into(),
            alpha,
        }
    }

    /// The offending literal, whichever kind of error this is.
    #[must_use]
    pub fn color(&self) -> &str {
        match self {
            Self::UnsupportedFormat { color } | Self::NeedsAlphaBlending { color, .. } => color,
        }
    }

    /// The parsed alpha, if the input was rejected for translucency.
    #[must_use]
    pub const fn alpha(&self) -> Option<Alpha> {
        match self {
            Self::UnsupportedFormat { .. } => None,
            Self::NeedsAlphaBlending { alpha, .. } => Some(*alpha),
        }
    }

    /// Short kind name, used as a structured log field.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::UnsupportedFormat { .. } => "unsupported_format",
            Self::NeedsAlphaBlending { .. } => "needs_alpha_blending",
        }
    }
}

/// An alpha value as it appeared in the input.
///
/// Hex literals carry a raw byte (`#ffffff66` → `Byte(0x66)`); functional
/// notation and arrays carry a fraction (`rgba(0,0,0,.4)` → `Fraction(0.4)`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Alpha {
    /// Alpha byte from an `#rrggbbaa` literal, 0–255.
    Byte(u8),
    /// Alpha from `rgba()` or a fourth array element, nominally 0.0–1.0.
    Fraction(f64),
}

impl Alpha {
    /// Alpha normalized to 0.0–1.0.
    #[must_use]
    pub fn as_fraction(self) -> f64 {
        match self {
            Self::Byte(b) => f64::from(b) / 255.0,
            Self::Fraction(f) => f,
        }
    }
}

impl fmt::Display for Alpha {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Byte(b) => write!(f, "{b} (0x{b:02x})"),
            Self::Fraction(v) => write!(f, "{v}"),
        }
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
