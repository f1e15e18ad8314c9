//! Luminance of an opaque sRGB color.
//!
//! Two models are available:
//!
//! - [`LuminanceMode::Relative`] (default): WCAG relative luminance. Each
//!   channel is linearized with the sRGB transfer function, then weighted
//!   `0.2126 R + 0.7152 G + 0.0722 B`.
//! - [`LuminanceMode::Perceived`]: the older `0.299 R + 0.587 G + 0.114 B`
//!   weighting on the gamma-encoded channels, with no linearization. Kept
//!   for callers whose thresholds were tuned against it.
//!
//! Both return a value in [0.0, 1.0] that is 0 for black, 1 for white,
//! and non-decreasing in each channel.

use luma_color::Rgb8;

/// Scaled channel value at which the sRGB transfer function switches from
/// its linear toe to the power curve.
pub const LINEAR_THRESHOLD: f64 = 0.039_28;

/// Which luminance model to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum LuminanceMode {
    /// WCAG relative luminance (gamma-corrected).
    #[default]
    Relative,
    /// Weighted sum of gamma-encoded channels.
    Perceived,
}

impl LuminanceMode {
    /// Luminance of `color` under this model.
    #[must_use]
    pub fn apply(self, color: Rgb8) -> f64 {
        match self {
            Self::Relative => relative_luminance(color),
            Self::Perceived => perceived_luminance(color),
        }
    }
}

/// Convert a single sRGB component (0.0–1.0) to linear light.
#[inline]
#[must_use]
pub fn srgb_to_linear(c: f64) -> f64 {
    if c > LINEAR_THRESHOLD {
        ((c + 0.055) / 1.055).powf(2.4)
    } else {
        c / 12.92
    }
}

/// WCAG 2.x relative luminance:
///   L = 0.2126 * `R_lin` + 0.7152 * `G_lin` + 0.0722 * `B_lin`
#[must_use]
pub fn relative_luminance(color: Rgb8) -> f64 {
    let (r, g, b) = color.to_unit();
    let r_lin = srgb_to_linear(r);
    let g_lin = srgb_to_linear(g);
    let b_lin = srgb_to_linear(b);
    0.2126f64.mul_add(r_lin, 0.7152f64.mul_add(g_lin, 0.0722 * b_lin))
}

/// Perceived luminance on the encoded (not linearized) channels.
#[must_use]
pub fn perceived_luminance(color: Rgb8) -> f64 {
    let (r, g, b) = color.to_unit();
    0.299f64.mul_add(r, 0.587f64.mul_add(g, 0.114 * b))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
