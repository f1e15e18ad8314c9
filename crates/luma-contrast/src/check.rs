//! Legibility predicates over color inputs.
//!
//! A [`Checker`] pairs a [`LuminanceCache`] with a set of [`Thresholds`].
//! Every method is pure given its arguments: the cache only short-circuits
//! recomputation, so callers may memoize results by argument equality.

use luma_color::{ColorInput, Result};

use crate::cache::LuminanceCache;
use crate::config::Thresholds;
use crate::contrast::{ContrastReport, contrast_ratio};
use crate::luminance::LuminanceMode;

static DEFAULT_THRESHOLDS: Thresholds = Thresholds::DEFAULT;

/// Luminance, contrast and threshold checks bound to one cache.
///
/// # Examples
///
/// ```
/// use luma_contrast::Checker;
///
/// let checker = Checker::global();
/// assert!(checker.is_dark("#000", None).unwrap());
/// assert!(checker.has_contrast_on_light("#333", None, None).unwrap());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Checker<'a> {
    cache: &'a LuminanceCache,
    thresholds: &'a Thresholds,
    mode: LuminanceMode,
}

impl<'a> Checker<'a> {
    #[must_use]
    pub const fn new(cache: &'a LuminanceCache, thresholds: &'a Thresholds) -> Self {
        Self {
            cache,
            thresholds,
            mode: LuminanceMode::Relative,
        }
    }

    /// Use `mode` for [`luminance`](Self::luminance) and
    /// [`is_dark`](Self::is_dark). Contrast is always computed from
    /// relative luminance.
    #[must_use]
    pub const fn with_mode(mut self, mode: LuminanceMode) -> Self {
        self.mode = mode;
        self
    }

    #[must_use]
    pub const fn thresholds(&self) -> &'a Thresholds {
        self.thresholds
    }

    #[must_use]
    pub const fn mode(&self) -> LuminanceMode {
        self.mode
    }

    /// Luminance of `color` in this checker's mode.
    ///
    /// # Errors
    ///
    /// Returns the parser's error if `color` is unsupported or translucent.
    pub fn luminance<'c>(&self, color: impl Into<ColorInput<'c>>) -> Result<f64> {
        self.cache.luminance(color, self.mode)
    }

    /// WCAG contrast ratio between two colors, in [1, 21].
    ///
    /// # Errors
    ///
    /// Returns the first parser error encountered.
    pub fn contrast<'c, 'd>(
        &self,
        a: impl Into<ColorInput<'c>>,
        b: impl Into<ColorInput<'d>>,
    ) -> Result<f64> {
        let la = self.cache.luminance(a, LuminanceMode::Relative)?;
        let lb = self.cache.luminance(b, LuminanceMode::Relative)?;
        Ok(contrast_ratio(la, lb))
    }

    /// Contrast ratio plus pass/fail for every WCAG level.
    ///
    /// # Errors
    ///
    /// Same as [`contrast`](Self::contrast).
    pub fn report<'c, 'd>(
        &self,
        a: impl Into<ColorInput<'c>>,
        b: impl Into<ColorInput<'d>>,
    ) -> Result<ContrastReport> {
        self.contrast(a, b).map(ContrastReport::from_ratio)
    }

    /// Whether `color`'s luminance is below `threshold`, or below the
    /// configured dark threshold when `None`.
    ///
    /// # Errors
    ///
    /// Returns the parser's error if `color` is unsupported or translucent.
    pub fn is_dark<'c>(
        &self,
        color: impl Into<ColorInput<'c>>,
        threshold: Option<f64>,
    ) -> Result<bool> {
        let threshold = threshold.unwrap_or(self.thresholds.dark);
        Ok(self.luminance(color)? < threshold)
    }

    /// Whether `color` has contrast above `threshold` against `background`
    /// (default: the configured light background, white).
    ///
    /// # Errors
    ///
    /// Returns the first parser error from `color` or `background`.
    pub fn has_contrast_on_light<'c, 'd>(
        &self,
        color: impl Into<ColorInput<'c>>,
        background: Option<ColorInput<'d>>,
        threshold: Option<f64>,
    ) -> Result<bool> {
        let background =
            background.unwrap_or(ColorInput::Str(&self.thresholds.light_background));
        self.has_contrast_on(color.into(), background, threshold)
    }

    /// Whether `color` has contrast above `threshold` against `background`
    /// (default: the configured dark background, black).
    ///
    /// # Errors
    ///
    /// Returns the first parser error from `color` or `background`.
    pub fn has_contrast_on_dark<'c, 'd>(
        &self,
        color: impl Into<ColorInput<'c>>,
        background: Option<ColorInput<'d>>,
        threshold: Option<f64>,
    ) -> Result<bool> {
        let background = background.unwrap_or(ColorInput::Str(&self.thresholds.dark_background));
        self.has_contrast_on(color.into(), background, threshold)
    }

    fn has_contrast_on(
        &self,
        color: ColorInput<'_>,
        background: ColorInput<'_>,
        threshold: Option<f64>,
    ) -> Result<bool> {
        let threshold = threshold.unwrap_or(self.thresholds.contrast);
        Ok(self.contrast(color, background)? > threshold)
    }
}

impl Checker<'static> {
    /// A checker over the process-wide cache with default thresholds.
    #[must_use]
    pub fn global() -> Self {
        Self::new(LuminanceCache::global(), &DEFAULT_THRESHOLDS)
    }
}

impl Default for Checker<'static> {
    fn default() -> Self {
        Self::global()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
