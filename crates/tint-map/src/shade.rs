//! Shade scales — validated parallel saturation/brightness parameters.
//!
//! A shade scale fixes, once per mapper, which variants exist within a hue
//! family: shade `i` combines the family's hue with `saturations[i]` and
//! `brightnesses[i]`. Validation happens here so everything downstream can
//! rely on the two arrays being non-empty and the same length.

use crate::error::{Error, Result};

/// Parallel saturation/brightness arrays defining the shades of a hue
/// family.
///
/// Immutable after construction; the caller's slices are copied, so later
/// mutation of the originals cannot change cached colors.
#[derive(Debug, Clone, PartialEq)]
pub struct ShadeScale {
    saturations: Vec<f32>,
    brightnesses: Vec<f32>,
}

impl ShadeScale {
    /// Build a scale from parallel saturation and brightness slices.
    ///
    /// # Errors
    ///
    /// - [`Error::EmptyScale`] if either slice is empty.
    /// - [`Error::ScaleLengthMismatch`] if the slices differ in length.
    pub fn new(saturations: &[f32], brightnesses: &[f32]) -> Result<Self> {
        if saturations.is_empty() {
            return Err(Error::EmptyScale { which: "saturations" });
        }
        if brightnesses.is_empty() {
            return Err(Error::EmptyScale { which: "brightnesses" });
        }
        if saturations.len() != brightnesses.len() {
            return Err(Error::ScaleLengthMismatch {
                saturations: saturations.len(),
                brightnesses: brightnesses.len(),
            });
        }
        Ok(Self {
            saturations: saturations.to_vec(),
            brightnesses: brightnesses.to_vec(),
        })
    }

    /// Number of shades in the scale. Always at least 1.
    #[must_use]
    pub fn len(&self) -> usize {
        self.saturations.len()
    }

    /// Whether the scale has no shades. Construction guarantees `false`;
    /// provided for API completeness.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.saturations.is_empty()
    }

    /// The `(saturation, brightness)` pair at `index`, or `None` if out of
    /// range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<(f32, f32)> {
        Some((*self.saturations.get(index)?, *self.brightnesses.get(index)?))
    }

    /// Iterate over the `(saturation, brightness)` pairs in shade order.
    pub fn iter(&self) -> impl Iterator<Item = (f32, f32)> + '_ {
        self.saturations
            .iter()
            .copied()
            .zip(self.brightnesses.iter().copied())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
