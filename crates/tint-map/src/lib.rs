//! # tint-map — type-keyed color assignment for graph visualization
//!
//! Gives every node label or relationship type in a rendered graph a
//! stable, visually distinct color. The first time a key is seen it gets
//! a fresh hue, spaced well apart from every hue issued before; a fixed
//! family of shade variants (saturation/brightness pairs) is derived from
//! that hue and cached, so every later lookup for the same key returns
//! the identical colors.
//!
//! # Architecture
//!
//! ```text
//! saturations + brightnesses
//!     │
//!     ▼
//! shade.rs:   ShadeScale — validated parallel shade parameters
//!     │
//!     ▼
//! wheel.rs:   HueWheel — golden-angle hue rotation, one hue per new key
//!     │
//!     ▼
//! mapper.rs:  ColorMapper — key → ColorFamily cache (get-or-create)
//! ```
//!
//! # Example
//!
//! ```
//! use tint_map::ColorMapper;
//!
//! let mut mapper = ColorMapper::new(&[0.5, 0.8], &[0.9, 0.6])?;
//!
//! // Shades of one key share a hue; distinct keys get distinct hues.
//! let person = mapper.color_for("Person", 0)?;
//! let person_dim = mapper.color_for("Person", 1)?;
//! let movie = mapper.color_for("Movie", 0)?;
//! assert_eq!(person.h, person_dim.h);
//! assert_ne!(person.h, movie.h);
//! # Ok::<(), tint_map::Error>(())
//! ```

pub mod error;
pub mod mapper;
pub mod shade;
pub mod wheel;

pub use error::{Error, Result};
pub use mapper::{ColorFactory, ColorFamily, ColorMapper, HsbFactory};
pub use shade::ShadeScale;
pub use wheel::HueWheel;
