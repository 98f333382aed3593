// SPDX-License-Identifier: MIT
//
// tint-color — HSB-native color values for graph decoration.
//
// Single-character variable names (r, g, b, h, s, v, f, p, q, t) are the
// standard mathematical convention in color science. Renaming them would
// make the code harder to compare against reference implementations.
#![allow(clippy::many_single_char_names)]
//
// Graph decoration assigns colors by rotating a hue and varying saturation
// and brightness within that hue, so the natural working space is HSB
// (hue-saturation-brightness, also called HSV). This crate stores colors
// in HSB and converts to sRGB only at the rendering boundary.
//
// Conversion pipeline:
//
//   HSB ↔ sRGB → 8-bit RGB / hex output

use std::fmt;

// ─── Color ───────────────────────────────────────────────────────────────────

/// A color stored in HSB (hue, saturation, brightness) space.
///
/// HSB is the cylindrical view of the RGB cube: hue picks the angle on the
/// color wheel, saturation the distance from the gray axis, brightness the
/// height. Equal hue steps do not look perceptually equal (that would need
/// OKLCH), but HSB is the right space for shade families — hold the hue,
/// vary saturation and brightness, and every variant reads as "the same
/// color, lighter or more muted".
///
/// # Examples
///
/// ```
/// use tint_color::Color;
///
/// let teal = Color::hsb(180.0, 0.8, 0.9);
///
/// // Shade variants share the hue
/// let muted = teal.desaturate(0.3);
/// let dim = teal.darken(0.3);
/// assert_eq!(muted.h, teal.h);
/// assert_eq!(dim.h, teal.h);
///
/// // Render as hex for a GUI toolkit
/// let hex = teal.to_hex();
/// assert!(hex.starts_with('#'));
/// ```
#[derive(Clone, Copy)]
pub struct Color {
    /// Hue angle in degrees: 0.0 to 360.0.
    /// 0° = red, 120° = green, 240° = blue.
    pub h: f32,

    /// Saturation: 0.0 (gray) to 1.0 (fully vivid).
    pub s: f32,

    /// Brightness (HSV "value"): 0.0 (black) to 1.0 (full).
    pub b: f32,
}

impl Color {
    // ─── Constructors ────────────────────────────────────────────────────

    /// Create a color from HSB values.
    ///
    /// The hue is normalized to `[0, 360)`; saturation and brightness are
    /// clamped to `[0, 1]`.
    #[must_use]
    pub fn hsb(h: f32, s: f32, b: f32) -> Self {
        Self {
            h: normalize_hue(h),
            s: s.clamp(0.0, 1.0),
            b: b.clamp(0.0, 1.0),
        }
    }

    /// Create a pure gray at the given brightness (zero saturation).
    #[must_use]
    pub fn gray(brightness: f32) -> Self {
        Self::hsb(0.0, 0.0, brightness)
    }

    /// Create a color from sRGB values (0.0 to 1.0 range).
    #[must_use]
    pub fn from_srgb(r: f32, g: f32, b: f32) -> Self {
        let (h, s, v) = srgb_to_hsb(r.clamp(0.0, 1.0), g.clamp(0.0, 1.0), b.clamp(0.0, 1.0));
        Self { h, s, b: v }
    }

    /// Create a color from 8-bit sRGB values (0 to 255).
    #[must_use]
    pub fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::from_srgb(
            f32::from(r) / 255.0,
            f32::from(g) / 255.0,
            f32::from(b) / 255.0,
        )
    }

    /// Pure black.
    pub const BLACK: Self = Self { h: 0.0, s: 0.0, b: 0.0 };

    /// Pure white.
    pub const WHITE: Self = Self { h: 0.0, s: 0.0, b: 1.0 };

    // ─── Channel Operations ──────────────────────────────────────────────

    /// Return a copy with the given saturation (clamped to 0.0–1.0).
    #[must_use]
    pub fn with_saturation(self, s: f32) -> Self {
        Self { s: s.clamp(0.0, 1.0), ..self }
    }

    /// Return a copy with the given brightness (clamped to 0.0–1.0).
    #[must_use]
    pub fn with_brightness(self, b: f32) -> Self {
        Self { b: b.clamp(0.0, 1.0), ..self }
    }

    /// Increase brightness by `amount` (clamped to 0.0–1.0).
    #[must_use]
    pub fn lighten(self, amount: f32) -> Self {
        Self { b: (self.b + amount).clamp(0.0, 1.0), ..self }
    }

    /// Decrease brightness by `amount` (clamped to 0.0–1.0).
    #[must_use]
    pub fn darken(self, amount: f32) -> Self {
        Self { b: (self.b - amount).clamp(0.0, 1.0), ..self }
    }

    /// Increase saturation by `amount` (clamped to 0.0–1.0).
    #[must_use]
    pub fn saturate(self, amount: f32) -> Self {
        Self { s: (self.s + amount).clamp(0.0, 1.0), ..self }
    }

    /// Decrease saturation by `amount` (clamped to 0.0–1.0).
    #[must_use]
    pub fn desaturate(self, amount: f32) -> Self {
        Self { s: (self.s - amount).clamp(0.0, 1.0), ..self }
    }

    /// Shift the hue by `degrees` (wraps around 360°).
    #[must_use]
    pub fn shift_hue(self, degrees: f32) -> Self {
        Self { h: normalize_hue(self.h + degrees), ..self }
    }

    /// Get the complementary color (hue shifted 180°).
    #[must_use]
    pub fn complement(self) -> Self {
        self.shift_hue(180.0)
    }

    /// Whether this color is achromatic (no visible saturation).
    #[inline]
    #[must_use]
    pub fn is_achromatic(self) -> bool {
        self.s.abs() < 1e-5
    }

    // ─── Conversions to sRGB ─────────────────────────────────────────────

    /// Convert to sRGB components in the 0.0–1.0 range.
    #[must_use]
    pub fn to_srgb(self) -> (f32, f32, f32) {
        hsb_to_srgb(self.h, self.s, self.b)
    }

    /// Convert to 8-bit sRGB.
    #[must_use]
    pub fn to_rgb8(self) -> (u8, u8, u8) {
        let (r, g, b) = self.to_srgb();
        (to_u8(r), to_u8(g), to_u8(b))
    }

    /// Convert to a hex string (`#rrggbb`).
    #[must_use]
    pub fn to_hex(self) -> String {
        let (r, g, b) = self.to_rgb8();
        format!("#{r:02x}{g:02x}{b:02x}")
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Color::hsb({:.1}, {:.3}, {:.3})", self.h, self.s, self.b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl PartialEq for Color {
    fn eq(&self, other: &Self) -> bool {
        // Compare with small epsilon for floating point.
        const EPS: f32 = 1e-5;
        (self.s - other.s).abs() < EPS
            && (self.b - other.b).abs() < EPS
            && (self.is_achromatic()
                || other.is_achromatic()
                || hue_diff(self.h, other.h) < EPS)
    }
}

impl Default for Color {
    /// Default is black.
    fn default() -> Self {
        Self::BLACK
    }
}

// ─── Hue Helpers ─────────────────────────────────────────────────────────────

/// Normalize a hue angle to the range [0, 360).
#[inline]
#[must_use]
pub fn normalize_hue(h: f32) -> f32 {
    let h = h % 360.0;
    if h < 0.0 { h + 360.0 } else { h }
}

/// Absolute hue difference (shortest arc on the color wheel).
#[inline]
#[must_use]
pub fn hue_diff(a: f32, b: f32) -> f32 {
    let d = (a - b).abs() % 360.0;
    if d > 180.0 { 360.0 - d } else { d }
}

// ─── HSB ↔ sRGB Conversion ───────────────────────────────────────────────────
//
// Standard sector-based HSV conversion. The hue circle splits into six 60°
// sectors; within a sector the RGB components interpolate linearly between
// the chroma extremes p, q, t.

/// Convert HSB (hue in degrees, s/b in 0–1) to sRGB components in 0–1.
fn hsb_to_srgb(h: f32, s: f32, v: f32) -> (f32, f32, f32) {
    if s <= 0.0 {
        return (v, v, v);
    }

    let h = normalize_hue(h) / 60.0;
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let sector = (h.floor() as u32) % 6;
    let f = h - h.floor();

    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));

    match sector {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    }
}

/// Convert sRGB components in 0–1 to HSB (hue in degrees, s/b in 0–1).
fn srgb_to_hsb(r: f32, g: f32, b: f32) -> (f32, f32, f32) {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let v = max;
    let s = if max > 0.0 { delta / max } else { 0.0 };

    let h = if delta < 1e-8 {
        0.0 // Achromatic — hue is undefined, default to 0
    } else if (max - r).abs() < 1e-8 {
        60.0 * ((g - b) / delta)
    } else if (max - g).abs() < 1e-8 {
        60.0 * ((b - r) / delta + 2.0)
    } else {
        60.0 * ((r - g) / delta + 4.0)
    };

    (normalize_hue(h), s, v)
}

/// Convert a float (0.0–1.0) to a u8 (0–255) with correct rounding.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_u8(v: f32) -> u8 {
    // Safe: clamp guarantees 0.0 <= value <= 255.0 before truncation.
    v.mul_add(255.0, 0.5).clamp(0.0, 255.0) as u8
}

// ─── Tests ───────────────────────────────────────────────────────────────────
