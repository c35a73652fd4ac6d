//! Constrained random string generation.
//!
//! Build a [`GenerationRequest`] (length range, per-class toggles, numeric
//! and special minimums, ambiguous-character exclusion) and hand it to a
//! [`Generator`] over any [`RandomSource`]:
//!
//! ```
//! use randstr::{GenerationRequest, Generator, rng::RngSource};
//!
//! let request = GenerationRequest::default().lengths(12, 20).minimums(2, 1);
//! let mut generator = Generator::new(RngSource::seeded(7));
//! let password = generator.generate(&request).unwrap().unwrap();
//! assert!((12..=20).contains(&password.chars().count()));
//! ```

pub mod pass;
pub mod rng;
pub mod settings;

pub use pass::{GenerateError, GenerationRequest, Generator, LengthBound, generate};
pub use rng::RandomSource;
pub use settings::Settings;
