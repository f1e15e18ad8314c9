//! WCAG contrast ratio and conformance levels.
//!
//! The ratio between two luminances is
//!   (`L_lighter` + 0.05) / (`L_darker` + 0.05)
//! which lies in [1.0, 21.0] for luminances in [0.0, 1.0] and does not
//! depend on argument order.
//!
//! Thresholds from WCAG 2.1 success criteria 1.4.3 and 1.4.6:
//!
//! | Level              | Minimum ratio |
//! |--------------------|---------------|
//! | AA                 | 4.5           |
//! | AAA                | 7.0           |
//! | AA, large text     | 3.0           |
//! | AAA, large text    | 4.5           |

/// Minimum contrast for WCAG AA body text.
pub const AA_THRESHOLD_CONTRAST: f64 = 4.5;

/// Minimum contrast for WCAG AAA body text.
pub const AAA_THRESHOLD_CONTRAST: f64 = 7.0;

/// Minimum contrast for WCAG AA large text (18pt, or 14pt bold).
pub const AA_LARGE_SIZE_THRESHOLD_CONTRAST: f64 = 3.0;

/// Minimum contrast for WCAG AAA large text.
pub const AAA_LARGE_SIZE_THRESHOLD_CONTRAST: f64 = 4.5;

/// Compute the WCAG 2.1 contrast ratio between two luminances.
///
/// The result is always >= 1.0 regardless of argument order.
#[must_use]
pub fn contrast_ratio(la: f64, lb: f64) -> f64 {
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

/// A WCAG conformance target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WcagLevel {
    Aa,
    Aaa,
    AaLarge,
    AaaLarge,
}

impl WcagLevel {
    pub const ALL: [Self; 4] = [Self::Aa, Self::Aaa, Self::AaLarge, Self::AaaLarge];

    /// Minimum ratio this level requires.
    #[must_use]
    pub const fn threshold(self) -> f64 {
        match self {
            Self::Aa => AA_THRESHOLD_CONTRAST,
            Self::Aaa => AAA_THRESHOLD_CONTRAST,
            Self::AaLarge => AA_LARGE_SIZE_THRESHOLD_CONTRAST,
            Self::AaaLarge => AAA_LARGE_SIZE_THRESHOLD_CONTRAST,
        }
    }

    /// Whether `ratio` meets this level (WCAG "at least").
    #[must_use]
    pub fn passes(self, ratio: f64) -> bool {
        ratio >= self.threshold()
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Aa => "AA",
            Self::Aaa => "AAA",
            Self::AaLarge => "AA large",
            Self::AaaLarge => "AAA large",
        }
    }
}

/// Pass/fail against every WCAG level for one color pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContrastReport {
    pub ratio: f64,
    pub aa: bool,
    pub aaa: bool,
    pub aa_large: bool,
    pub aaa_large: bool,
}

impl ContrastReport {
    #[must_use]
    pub fn from_ratio(ratio: f64) -> Self {
        Self {
            ratio,
            aa: WcagLevel::Aa.passes(ratio),
            aaa: WcagLevel::Aaa.passes(ratio),
            aa_large: WcagLevel::AaLarge.passes(ratio),
            aaa_large: WcagLevel::AaaLarge.passes(ratio),
        }
    }

    /// Whether the pair meets `level`.
    #[must_use]
    pub const fn meets(&self, level: WcagLevel) -> bool {
        match level {
            WcagLevel::Aa => self.aa,
            WcagLevel::Aaa => self.aaa,
            WcagLevel::AaLarge => self.aa_large,
            WcagLevel::AaaLarge => self.aaa_large,
        }
    }

    /// The strictest level met, if any.
    #[must_use]
    pub const fn best_level(&self) -> Option<WcagLevel> {
        if self.aaa {
            Some(WcagLevel::Aaa)
        } else if self.aa {
            Some(WcagLevel::Aa)
        } else if self.aa_large {
            Some(WcagLevel::AaLarge)
        } else {
            None
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() < eps
    }

    // ── Contrast ratio ──────────────────────────────────────────────

    #[test]
    fn contrast_black_white_is_21() {
        let ratio = contrast_ratio(0.0, 1.0);
        assert!(approx_eq(ratio, 21.0, 1e-9), "B/W contrast: {ratio}");
    }

    #[test]
    fn contrast_same_luminance_is_1() {
        for l in [0.0, 0.18, 0.5, 1.0] {
            let ratio = contrast_ratio(l, l);
            assert!(approx_eq(ratio, 1.0, 1e-12), "Same-luminance contrast: {ratio}");
        }
    }

    #[test]
    fn contrast_red_on_black() {
        let ratio = contrast_ratio(0.2126, 0.0);
        assert!(approx_eq(ratio, 5.252, 1e-9), "Red/black contrast: {ratio}");
    }

    // ── Levels ──────────────────────────────────────────────────────

    #[test]
    fn level_thresholds() {
        assert_eq!(WcagLevel::Aa.threshold(), 4.5);
        assert_eq!(WcagLevel::Aaa.threshold(), 7.0);
        assert_eq!(WcagLevel::AaLarge.threshold(), 3.0);
        assert_eq!(WcagLevel::AaaLarge.threshold(), 4.5);
    }

    #[test]
    fn passes_is_inclusive() {
        assert!(WcagLevel::Aa.passes(4.5));
        assert!(!WcagLevel::Aa.passes(4.499));
    }

    #[test]
    fn report_from_ratio() {
        assert_eq!(
            ContrastReport::from_ratio(5.0),
            ContrastReport {
                ratio: 5.0,
                aa: true,
                aaa: false,
                aa_large: true,
                aaa_large: true,
            }
        );
    }

    #[test]
    fn report_best_level() {
        assert_eq!(ContrastReport::from_ratio(21.0).best_level(), Some(WcagLevel::Aaa));
        assert_eq!(ContrastReport::from_ratio(5.0).best_level(), Some(WcagLevel::Aa));
        assert_eq!(ContrastReport::from_ratio(3.2).best_level(), Some(WcagLevel::AaLarge));
        assert_eq!(ContrastReport::from_ratio(1.5).best_level(), None);
    }

    #[test]
    fn report_meets_matches_levels() {
        let report = ContrastReport::from_ratio(4.6);
        for level in WcagLevel::ALL {
            assert_eq!(report.meets(level), level.passes(4.6), "{}", level.label());
        }
    }

    // ── Invariants ──────────────────────────────────────────────────

    proptest! {
        /// Argument order never matters.
        #[test]
        fn contrast_is_symmetric(a in 0.0f64..=1.0, b in 0.0f64..=1.0) {
            prop_assert_eq!(contrast_ratio(a, b), contrast_ratio(b, a));
        }

        /// Luminances in [0, 1] give ratios in [1, 21].
        #[test]
        fn contrast_bounds(a in 0.0f64..=1.0, b in 0.0f64..=1.0) {
            let ratio = contrast_ratio(a, b);
            prop_assert!((1.0..=21.0 + 1e-9).contains(&ratio), "ratio {ratio} out of bounds");
        }
    }
}
