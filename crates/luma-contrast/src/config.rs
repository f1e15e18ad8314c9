//! Policy defaults for the legibility predicates.
//!
//! | Field              | Default   | Used by                   |
//! |--------------------|-----------|---------------------------|
//! | `dark`             | 0.35      | `is_dark`                 |
//! | `contrast`         | 4.5 (AA)  | `has_contrast_on_*`       |
//! | `light_background` | `#ffffff` | `has_contrast_on_light`   |
//! | `dark_background`  | `#000000` | `has_contrast_on_dark`    |
//!
//! With the `serde` feature, [`Thresholds`] can be embedded in a host
//! application's config file; missing fields take their defaults.

use std::borrow::Cow;

use crate::contrast::AA_THRESHOLD_CONTRAST;

/// Luminance below which a color counts as dark.
pub const DEFAULT_DARK_THRESHOLD: f64 = 0.35;

/// Background assumed by `has_contrast_on_light`.
pub const DEFAULT_LIGHT_BACKGROUND: &str = "#ffffff";

/// Background assumed by `has_contrast_on_dark`.
pub const DEFAULT_DARK_BACKGROUND: &str = "#000000";

/// Thresholds and default backgrounds for the predicates.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct Thresholds {
    /// `is_dark` is true when luminance is strictly below this.
    pub dark: f64,
    /// `has_contrast_on_*` is true when the ratio is strictly above this.
    pub contrast: f64,
    pub light_background: Cow<'static, str>,
    pub dark_background: Cow<'static, str>,
}

impl Thresholds {
    pub const DEFAULT: Self = Self {
        dark: DEFAULT_DARK_THRESHOLD,
        contrast: AA_THRESHOLD_CONTRAST,
        light_background: Cow::Borrowed(DEFAULT_LIGHT_BACKGROUND),
        dark_background: Cow::Borrowed(DEFAULT_DARK_BACKGROUND),
    };

    #[must_use]
    pub fn with_dark(mut self, dark: f64) -> Self {
        self.dark = dark;
        self
    }

    #[must_use]
    pub fn with_contrast(mut self, contrast: f64) -> Self {
        self.contrast = contrast;
        self
    }

    #[must_use]
    pub fn with_light_background(mut self, color: impl Into<Cow<'static, str>>) -> Self {
        self.light_background = color.into();
        self
    }

    #[must_use]
    pub fn with_dark_background(mut self, color: impl Into<Cow<'static, str>>) -> Self {
        self.dark_background = color.into();
        self
    }
}

impl Default for Thresholds {
    fn default() -> Self {
        Self::DEFAULT
    }
}
