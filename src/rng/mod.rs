//! Random sources for string generation.
//!
//! The generator never reaches for a global RNG. Callers hand it anything
//! that implements [`RandomSource`]: the `rand` crate's thread-local
//! generator by default, a seeded [`StdRng`](rand::rngs::StdRng) when the
//! output must be reproducible, or [`HwRand`], the cycle-counter mixer.

mod hw;
mod mixer;
mod primes;
mod source;

pub use mixer::HwRand;
pub use source::{RngSource, Source, SourceKind};

/// "Next integer in range" interface consumed by the generator.
pub trait RandomSource {
    /// Uniform integer in `[0, bound)`. `bound` must be non-zero.
    fn below(&mut self, bound: usize) -> usize;

    /// Uniform integer in `[low, high]`, both ends inclusive.
    fn between(&mut self, low: usize, high: usize) -> usize {
        debug_assert!(low <= high, "empty range {low}..={high}");
        match (high - low).checked_add(1) {
            Some(span) => low + self.below(span),
            // Only reachable for 0..=usize::MAX
            None => self.below(usize::MAX),
        }
    }
}

impl<S: RandomSource + ?Sized> RandomSource for &mut S {
    #[inline]
    fn below(&mut self, bound: usize) -> usize {
        (**self).below(bound)
    }
}

impl<S: RandomSource + ?Sized> RandomSource for Box<S> {
    #[inline]
    fn below(&mut self, bound: usize) -> usize {
        (**self).below(bound)
    }
}
