//! Constrained random string generation.

pub mod charset;
mod error;
mod generate;
mod request;

pub use charset::CharacterClass;
pub use error::{GenerateError, LengthBound};
pub use generate::{Generator, generate};
pub use request::{Bounds, GenerationRequest};
