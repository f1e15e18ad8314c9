//! # luma-contrast — luminance and WCAG contrast for color literals
//!
//! Decides whether text is legible on a background: how bright a color is,
//! how far apart two colors are, and whether that clears a WCAG level.
//!
//! # Architecture
//!
//! ```text
//! color literal ("#a52", "rgb(…)", [r, g, b])
//!     │
//!     ▼
//! luma_color::parse:  validate grammar + opacity → Rgb8
//!     │
//!     ▼
//! luminance.rs:  sRGB linearization + weighted sum (or perceived mode)
//!     │
//!     ▼
//! cache.rs:      memoize by literal string
//!     │
//!     ▼
//! contrast.rs:   (L1 + 0.05) / (L2 + 0.05), WCAG levels
//!     │
//!     ▼
//! check.rs:      is_dark / has_contrast_on_light / has_contrast_on_dark
//! ```
//!
//! The free functions below use the process-wide cache and the default
//! [`Thresholds`]. Build a [`Checker`] for an isolated cache or custom
//! thresholds.

// Single-char math variables are standard in color science.
#![allow(clippy::many_single_char_names)]

pub mod cache;
pub mod check;
pub mod config;
pub mod contrast;
pub mod luminance;

pub use cache::LuminanceCache;
pub use check::Checker;
pub use config::Thresholds;
pub use contrast::{
    AA_LARGE_SIZE_THRESHOLD_CONTRAST, AA_THRESHOLD_CONTRAST, AAA_LARGE_SIZE_THRESHOLD_CONTRAST,
    AAA_THRESHOLD_CONTRAST, ContrastReport, WcagLevel, contrast_ratio,
};
pub use luminance::{LuminanceMode, perceived_luminance, relative_luminance};

use luma_color::{ColorInput, Result};

/// Relative luminance of `color`, in [0, 1].
///
/// # Errors
///
/// Returns the parser's error if `color` is unsupported or translucent.
pub fn luminance<'a>(color: impl Into<ColorInput<'a>>) -> Result<f64> {
    LuminanceCache::global().luminance(color, LuminanceMode::Relative)
}

/// Luminance of `color` under an explicit `mode`.
///
/// # Errors
///
/// Returns the parser's error if `color` is unsupported or translucent.
pub fn luminance_with<'a>(color: impl Into<ColorInput<'a>>, mode: LuminanceMode) -> Result<f64> {
    LuminanceCache::global().luminance(color, mode)
}

/// WCAG contrast ratio between two colors, in [1, 21].
///
/// # Errors
///
/// Returns the first parser error encountered.
pub fn contrast<'a, 'b>(a: impl Into<ColorInput<'a>>, b: impl Into<ColorInput<'b>>) -> Result<f64> {
    Checker::global().contrast(a, b)
}

/// Whether `color` is darker than `threshold` (default 0.35).
///
/// # Errors
///
/// Returns the parser's error if `color` is unsupported or translucent.
pub fn is_dark<'a>(color: impl Into<ColorInput<'a>>, threshold: Option<f64>) -> Result<bool> {
    Checker::global().is_dark(color, threshold)
}

/// Whether `color` contrasts with `background` (default white) by more
/// than `threshold` (default [`AA_THRESHOLD_CONTRAST`]).
///
/// # Errors
///
/// Returns the first parser error from `color` or `background`.
pub fn has_contrast_on_light<'a, 'b>(
    color: impl Into<ColorInput<'a>>,
    background: Option<ColorInput<'b>>,
    threshold: Option<f64>,
) -> Result<bool> {
    Checker::global().has_contrast_on_light(color, background, threshold)
}

/// Whether `color` contrasts with `background` (default black) by more
/// than `threshold` (default [`AA_THRESHOLD_CONTRAST`]).
///
/// # Errors
///
/// Returns the first parser error from `color` or `background`.
pub fn has_contrast_on_dark<'a, 'b>(
    color: impl Into<ColorInput<'a>>,
    background: Option<ColorInput<'b>>,
    threshold: Option<f64>,
) -> Result<bool> {
    Checker::global().has_contrast_on_dark(color, background, threshold)
}
