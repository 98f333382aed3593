//! Golden-angle hue rotation — one fresh, well-spaced hue per call.
//!
//! Stepping around the color wheel by the golden angle (360 / phi² ≈
//! 137.508°) never revisits a previous angle and keeps every prefix of the
//! sequence spread out, so the first handful of keys are maximally easy to
//! tell apart and later keys still land in the largest remaining gaps.

use tint_color::normalize_hue;

/// Golden angle in degrees: 360 / phi².
const GOLDEN_ANGLE: f32 = 137.507_76;

/// Default anchor for the first hue. A warm orange reads well against both
/// light and dark canvases, so the first type mapped gets it.
const DEFAULT_START: f32 = 30.0;

/// A deterministic hue generator that rotates the color wheel by the
/// golden angle on every call.
///
/// Two wheels constructed the same way issue the same hue sequence, so a
/// graph redrawn from scratch colors its types identically as long as the
/// types are encountered in the same order.
#[derive(Debug, Clone)]
pub struct HueWheel {
    start: f32,
    issued: u32,
}

impl HueWheel {
    /// Create a wheel anchored at the default start hue.
    #[must_use]
    pub const fn new() -> Self {
        Self { start: DEFAULT_START, issued: 0 }
    }

    /// Create a wheel anchored at a custom start hue (normalized to
    /// `[0, 360)`).
    #[must_use]
    pub fn starting_at(hue: f32) -> Self {
        Self { start: normalize_hue(hue), issued: 0 }
    }

    /// Issue the next hue, in `[0, 360)`.
    ///
    /// The n-th hue is `start + n * golden_angle`, wrapped around the
    /// wheel.
    #[allow(clippy::cast_precision_loss)]
    pub fn next_hue(&mut self) -> f32 {
        let hue = normalize_hue((self.issued as f32).mul_add(GOLDEN_ANGLE, self.start));
        self.issued += 1;
        hue
    }

    /// How many hues this wheel has issued.
    #[must_use]
    pub const fn issued(&self) -> u32 {
        self.issued
    }
}

impl Default for HueWheel {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
