//! Error types for tint-map.
//!
//! Both variants of failure are caller bugs surfaced at the call site:
//! invalid shade parameters at construction, or an out-of-range shade
//! index at lookup. Nothing here is transient, and nothing is retried.

/// Result type alias for tint-map operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by shade-scale construction and color lookup.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A shade array was empty at construction.
    #[error("empty {which} array given")]
    EmptyScale {
        /// Which array was empty: `"saturations"` or `"brightnesses"`.
        which: &'static str,
    },

    /// The parallel shade arrays had different lengths at construction.
    #[error("shade arrays differ in length: {saturations} saturations vs {brightnesses} brightnesses")]
    ScaleLengthMismatch {
        /// Length of the saturations array.
        saturations: usize,
        /// Length of the brightnesses array.
        brightnesses: usize,
    },

    /// A shade index was outside the scale on lookup.
    #[error("shade index {index} out of range for scale of {len} shades")]
    ShadeOutOfRange {
        /// The requested shade index.
        index: usize,
        /// Number of shades in the scale.
        len: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_problem() {
        let e = Error::EmptyScale { which: "saturations" };
        assert_eq!(e.to_string(), "empty saturations array given");

        let e = Error::ScaleLengthMismatch { saturations: 3, brightnesses: 2 };
        assert!(e.to_string().contains("3 saturations vs 2 brightnesses"));

        let e = Error::ShadeOutOfRange { index: 4, len: 2 };
        assert!(e.to_string().contains("index 4"));
        assert!(e.to_string().contains("2 shades"));
    }
}
