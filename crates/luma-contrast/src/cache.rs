//! Luminance memoized by color literal.
//!
//! Color strings in UI code are constants, so the set of distinct keys is
//! small and fixed in practice: entries are never evicted. Only string
//! inputs are cached. Component slices and [`Rgb8`] values have no stable
//! literal to key on and are computed every time.
//!
//! Keys are per [`LuminanceMode`], so a perceived luminance never answers a
//! relative lookup for the same string.
//!
//! Writes are insert-if-absent. Two threads racing on a new key both
//! compute the (identical) value, and the first insert wins.
//!
//! [`Rgb8`]: luma_color::Rgb8

use std::collections::HashMap;
use std::sync::LazyLock;

use luma_color::{ColorInput, Result, parse};
use parking_lot::RwLock;
use tracing::trace;

use crate::luminance::LuminanceMode;

static GLOBAL: LazyLock<LuminanceCache> = LazyLock::new(LuminanceCache::new);

#[derive(Debug, Default)]
struct Entries {
    relative: HashMap<String, f64>,
    perceived: HashMap<String, f64>,
}

impl Entries {
    const fn for_mode(&self, mode: LuminanceMode) -> &HashMap<String, f64> {
        match mode {
            LuminanceMode::Relative => &self.relative,
            LuminanceMode::Perceived => &self.perceived,
        }
    }

    const fn for_mode_mut(&mut self, mode: LuminanceMode) -> &mut HashMap<String, f64> {
        match mode {
            LuminanceMode::Relative => &mut self.relative,
            LuminanceMode::Perceived => &mut self.perceived,
        }
    }
}

/// String-keyed luminance cache.
///
/// Create one per component that wants an isolated cache, or share the
/// process-wide instance from [`LuminanceCache::global`].
#[derive(Debug, Default)]
pub struct LuminanceCache {
    entries: RwLock<Entries>,
}

impl LuminanceCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide cache. Created on first use, lives until exit.
    #[must_use]
    pub fn global() -> &'static Self {
        &GLOBAL
    }

    /// Number of cached entries across both modes.
    #[must_use]
    pub fn len(&self) -> usize {
        let entries = self.entries.read();
        entries.relative.len() + entries.perceived.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Cached luminance for `color` under `mode`, without computing it.
    #[must_use]
    pub fn get(&self, color: &str, mode: LuminanceMode) -> Option<f64> {
        self.entries.read().for_mode(mode).get(color).copied()
    }

    /// Luminance of `color` under `mode`, memoized for string inputs.
    ///
    /// # Errors
    ///
    /// Propagates the parser's [`ColorError`](luma_color::ColorError).
    /// Failed inputs are not cached.
    pub fn luminance<'a>(
        &self,
        color: impl Into<ColorInput<'a>>,
        mode: LuminanceMode,
    ) -> Result<f64> {
        let input = color.into();
        let Some(key) = input.as_str() else {
            let lum = mode.apply(parse(input)?);
            trace!(color = %input, ?mode, lum, "luminance computed, not cacheable");
            return Ok(lum);
        };

        if let Some(lum) = self.get(key, mode) {
            trace!(color = key, ?mode, lum, "luminance cache hit");
            return Ok(lum);
        }

        let lum = mode.apply(parse(input)?);
        trace!(color = key, ?mode, lum, "luminance cache miss");

        let mut entries = self.entries.write();
        Ok(*entries.for_mode_mut(mode).entry(key.to_owned()).or_insert(lum))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
