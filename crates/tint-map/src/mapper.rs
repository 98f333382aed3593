//! The type-keyed color cache — get-or-create hue families per key.
//!
//! [`ColorMapper`] owns a [`HueWheel`], a [`ShadeScale`], and a map from
//! key to [`ColorFamily`]. The first lookup for a key pulls the next hue
//! off the wheel and materializes the full shade family through the
//! injected [`ColorFactory`]; every later lookup is a pure read. Entries
//! are never evicted or replaced, so a key's colors are stable for the
//! mapper's lifetime.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::hash::Hash;

use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::shade::ShadeScale;
use crate::wheel::HueWheel;

// ---------------------------------------------------------------------------
// ColorFactory
// ---------------------------------------------------------------------------

/// Constructs concrete color values from HSB triples.
///
/// The mapper never talks to a rendering toolkit directly; it asks the
/// factory for one color per shade when a new key arrives. Embedders
/// targeting a GUI toolkit implement this trait over the toolkit's native
/// color type so allocation happens against the right display context.
pub trait ColorFactory {
    /// The concrete color type produced.
    type Color: Clone;

    /// Make a color from a hue in degrees `[0, 360)` and saturation and
    /// brightness in `[0, 1]`.
    fn make(&self, hue: f32, saturation: f32, brightness: f32) -> Self::Color;
}

/// The default factory, producing plain [`tint_color::Color`] values.
#[derive(Debug, Clone, Copy, Default)]
pub struct HsbFactory;

impl ColorFactory for HsbFactory {
    type Color = tint_color::Color;

    fn make(&self, hue: f32, saturation: f32, brightness: f32) -> Self::Color {
        tint_color::Color::hsb(hue, saturation, brightness)
    }
}

// ---------------------------------------------------------------------------
// ColorFamily
// ---------------------------------------------------------------------------

/// The shade variants generated for one hue.
///
/// Built once when its key is first seen and immutable afterwards. Holds
/// exactly one color per shade in the mapper's [`ShadeScale`], in scale
/// order.
#[derive(Debug, Clone)]
pub struct ColorFamily<C> {
    hue: f32,
    shades: Vec<C>,
}

impl<C> ColorFamily<C> {
    fn generate<F>(hue: f32, scale: &ShadeScale, factory: &F) -> Self
    where
        F: ColorFactory<Color = C>,
    {
        let shades = scale
            .iter()
            .map(|(s, b)| factory.make(hue, s, b))
            .collect();
        Self { hue, shades }
    }

    /// The hue shared by every shade in the family, in degrees `[0, 360)`.
    #[must_use]
    pub const fn hue(&self) -> f32 {
        self.hue
    }

    /// Number of shades. Equals the mapper's scale length.
    #[must_use]
    pub fn len(&self) -> usize {
        self.shades.len()
    }

    /// Whether the family has no shades. Never true for a family built by
    /// a mapper, since scales are validated non-empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shades.is_empty()
    }

    /// The shade at `index`, or `None` if out of range.
    #[must_use]
    pub fn shade(&self, index: usize) -> Option<&C> {
        self.shades.get(index)
    }

    /// Iterate over the shades in scale order.
    pub fn iter(&self) -> impl Iterator<Item = &C> {
        self.shades.iter()
    }
}

// ---------------------------------------------------------------------------
// ColorMapper
// ---------------------------------------------------------------------------

/// Maps arbitrary keys (node labels, relationship types) to cached hue
/// families.
///
/// Keys need `Eq + Hash` with the usual contract: equal keys hash equally
/// and equality is stable over the mapper's lifetime.
///
/// The cache only grows — one entry per distinct key, never evicted — so
/// it is meant for finite key domains like the set of types in a graph,
/// not per-element identities. [`len`](Self::len) exposes the entry count
/// for embedders that want to watch growth.
///
/// Not internally synchronized: [`color_for`](Self::color_for) takes
/// `&mut self`, which makes the check-then-insert step exclusive under the
/// borrow rules. Callers sharing a mapper across threads wrap it in a
/// `Mutex` themselves.
#[derive(Debug, Clone)]
pub struct ColorMapper<T, F = HsbFactory>
where
    F: ColorFactory,
{
    families: HashMap<T, ColorFamily<F::Color>>,
    wheel: HueWheel,
    scale: ShadeScale,
    factory: F,
}

impl<T> ColorMapper<T, HsbFactory>
where
    T: Eq + Hash,
{
    /// Create a mapper producing [`tint_color::Color`] values.
    ///
    /// `saturations` and `brightnesses` are parallel per-shade parameters;
    /// shade `i` of every family combines the family hue with
    /// `saturations[i]` and `brightnesses[i]`. Both slices are copied.
    ///
    /// # Errors
    ///
    /// - [`Error::EmptyScale`] if either slice is empty.
    /// - [`Error::ScaleLengthMismatch`] if the slices differ in length.
    pub fn new(saturations: &[f32], brightnesses: &[f32]) -> Result<Self> {
        Self::with_factory(saturations, brightnesses, HsbFactory)
    }
}

impl<T, F> ColorMapper<T, F>
where
    T: Eq + Hash,
    F: ColorFactory,
{
    /// Create a mapper with a custom color factory.
    ///
    /// # Errors
    ///
    /// Same validation as [`ColorMapper::new`].
    pub fn with_factory(saturations: &[f32], brightnesses: &[f32], factory: F) -> Result<Self> {
        Ok(Self {
            families: HashMap::new(),
            wheel: HueWheel::new(),
            scale: ShadeScale::new(saturations, brightnesses)?,
            factory,
        })
    }

    /// The color for `key` at `shade`, creating the key's hue family on
    /// first sight.
    ///
    /// An unseen key takes the next hue off the wheel and gets a full
    /// family of `scale.len()` shades; a seen key reuses its cached
    /// family. Either way the same `(key, shade)` pair always yields the
    /// identical color.
    ///
    /// # Errors
    ///
    /// [`Error::ShadeOutOfRange`] if `shade >= self.shades()`. Out-of-range
    /// indices are never clamped.
    pub fn color_for(&mut self, key: T, shade: usize) -> Result<F::Color> {
        if shade >= self.scale.len() {
            return Err(Error::ShadeOutOfRange { index: shade, len: self.scale.len() });
        }

        let family = match self.families.entry(key) {
            Entry::Occupied(entry) => {
                trace!("cache hit");
                entry.into_mut()
            }
            Entry::Vacant(entry) => {
                let hue = self.wheel.next_hue();
                debug!(hue, shades = self.scale.len(), "assigned hue to new key");
                entry.insert(ColorFamily::generate(hue, &self.scale, &self.factory))
            }
        };

        // In range: the family has exactly scale.len() shades.
        Ok(family.shades[shade].clone())
    }

    /// Whether `key` already has a cached hue family.
    #[must_use]
    pub fn contains(&self, key: &T) -> bool {
        self.families.contains_key(key)
    }

    /// The cached hue family for `key`, if any. Does not create one.
    #[must_use]
    pub fn family(&self, key: &T) -> Option<&ColorFamily<F::Color>> {
        self.families.get(key)
    }

    /// Iterate over the keys that have been assigned a hue family, in no
    /// particular order.
    pub fn keys(&self) -> impl Iterator<Item = &T> {
        self.families.keys()
    }

    /// Number of keys with a cached hue family.
    #[must_use]
    pub fn len(&self) -> usize {
        self.families.len()
    }

    /// Whether no key has been mapped yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.families.is_empty()
    }

    /// Number of shades per family, fixed at construction.
    #[must_use]
    pub fn shades(&self) -> usize {
        self.scale.len()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use tint_color::Color;

    fn mapper() -> ColorMapper<&'static str> {
        ColorMapper::new(&[0.5, 0.8], &[0.9, 0.6]).unwrap()
    }

    // ── Construction ────────────────────────────────────────────────

    #[test]
    fn empty_saturations_fails_construction() {
        let err = ColorMapper::<&str>::new(&[], &[0.9]).unwrap_err();
        assert_eq!(err, Error::EmptyScale { which: "saturations" });
    }

    #[test]
    fn empty_brightnesses_fails_construction() {
        let err = ColorMapper::<&str>::new(&[0.5], &[]).unwrap_err();
        assert_eq!(err, Error::EmptyScale { which: "brightnesses" });
    }

    #[test]
    fn mismatched_scales_fail_construction() {
        let err = ColorMapper::<&str>::new(&[0.5, 0.8, 0.2], &[0.9, 0.6]).unwrap_err();
        assert_eq!(
            err,
            Error::ScaleLengthMismatch { saturations: 3, brightnesses: 2 }
        );
    }

    // ── Lookup ──────────────────────────────────────────────────────

    #[test]
    fn shades_share_hue_and_differ_in_shade() {
        let mut m = mapper();
        let bright = m.color_for("Person", 0).unwrap();
        let dim = m.color_for("Person", 1).unwrap();

        assert!((bright.h - dim.h).abs() < 0.001, "Shades changed hue");
        assert!((bright.s - 0.5).abs() < 0.001);
        assert!((bright.b - 0.9).abs() < 0.001);
        assert!((dim.s - 0.8).abs() < 0.001);
        assert!((dim.b - 0.6).abs() < 0.001);
    }

    #[test]
    fn distinct_keys_get_distinct_hues() {
        let mut m = mapper();
        let person = m.color_for("Person", 0).unwrap();
        let movie = m.color_for("Movie", 0).unwrap();
        assert!(
            tint_color::hue_diff(person.h, movie.h) > 10.0,
            "Hues too close: {} vs {}", person.h, movie.h
        );
    }

    #[test]
    fn repeated_lookup_is_identical() {
        let mut m = mapper();
        let first = m.color_for("Person", 1).unwrap();
        for _ in 0..5 {
            assert_eq!(m.color_for("Person", 1).unwrap(), first);
        }
    }

    #[test]
    fn lookup_order_does_not_disturb_existing_keys() {
        let mut m = mapper();
        let person = m.color_for("Person", 0).unwrap();
        m.color_for("Movie", 0).unwrap();
        m.color_for("Actor", 0).unwrap();
        assert_eq!(m.color_for("Person", 0).unwrap(), person);
    }

    #[test]
    fn shade_out_of_range_is_error() {
        let mut m = mapper();
        let err = m.color_for("Person", 2).unwrap_err();
        assert_eq!(err, Error::ShadeOutOfRange { index: 2, len: 2 });
    }

    #[test]
    fn out_of_range_lookup_does_not_create_entry() {
        let mut m = mapper();
        let _ = m.color_for("Person", 99);
        assert!(!m.contains(&"Person"));
        assert!(m.is_empty());
    }

    // ── Queries ─────────────────────────────────────────────────────

    #[test]
    fn contains_flips_on_first_lookup() {
        let mut m = mapper();
        assert!(!m.contains(&"Person"));
        m.color_for("Person", 0).unwrap();
        assert!(m.contains(&"Person"));
    }

    #[test]
    fn keys_reflect_mapped_entries() {
        let mut m = mapper();
        m.color_for("Person", 0).unwrap();
        m.color_for("Movie", 0).unwrap();

        let keys: HashSet<&&str> = m.keys().collect();
        assert_eq!(keys, HashSet::from([&"Person", &"Movie"]));
        assert_eq!(m.len(), 2);
    }

    #[test]
    fn family_exposes_full_shade_set() {
        let mut m = mapper();
        let bright = m.color_for("Person", 0).unwrap();

        let family = m.family(&"Person").unwrap();
        assert_eq!(family.len(), 2);
        assert_eq!(family.shade(0), Some(&bright));
        assert!(family.shade(2).is_none());
    }

    #[test]
    fn family_absent_for_unseen_key() {
        let m = mapper();
        assert!(m.family(&"Person").is_none());
    }

    #[test]
    fn every_family_has_scale_len_shades() {
        let mut m = ColorMapper::new(&[0.2, 0.5, 0.8], &[0.9, 0.7, 0.5]).unwrap();
        for key in ["A", "B", "C", "D"] {
            m.color_for(key, 0).unwrap();
        }
        for key in ["A", "B", "C", "D"] {
            assert_eq!(m.family(&key).unwrap().len(), 3);
        }
    }

    #[test]
    fn single_shade_scale_works() {
        let mut m: ColorMapper<&str> = ColorMapper::new(&[0.7], &[0.8]).unwrap();
        m.color_for("Only", 0).unwrap();
        assert_eq!(m.color_for("Only", 1).unwrap_err(), Error::ShadeOutOfRange { index: 1, len: 1 });
    }

    #[test]
    fn integer_keys_work() {
        let mut m: ColorMapper<u32> = ColorMapper::new(&[0.5], &[0.9]).unwrap();
        let a = m.color_for(7, 0).unwrap();
        let b = m.color_for(11, 0).unwrap();
        assert_ne!(a.h, b.h);
        assert!(m.contains(&7));
    }

    // ── Custom factory ──────────────────────────────────────────────

    /// Factory producing 8-bit RGB tuples, the shape a GUI binding wants.
    struct Rgb8Factory;

    impl ColorFactory for Rgb8Factory {
        type Color = (u8, u8, u8);

        fn make(&self, hue: f32, saturation: f32, brightness: f32) -> Self::Color {
            Color::hsb(hue, saturation, brightness).to_rgb8()
        }
    }

    #[test]
    fn custom_factory_controls_color_type() {
        let mut m: ColorMapper<&str, Rgb8Factory> =
            ColorMapper::with_factory(&[0.5, 0.8], &[0.9, 0.6], Rgb8Factory).unwrap();

        let rgb = m.color_for("Person", 0).unwrap();
        let again = m.color_for("Person", 0).unwrap();
        assert_eq!(rgb, again);

        let other = m.color_for("Movie", 0).unwrap();
        assert_ne!(rgb, other);
    }
}
