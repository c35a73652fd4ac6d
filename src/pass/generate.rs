//! Constrained string generation.

use rand::rngs::ThreadRng;
use tracing::{debug, warn};
use zeroize::Zeroizing;

use super::charset::{self, Pools, SPECIAL};
use super::{GenerateError, GenerationRequest, LengthBound};
use crate::rng::{RandomSource, RngSource};

/// Produces random strings that satisfy a [`GenerationRequest`].
///
/// The generator owns its random source; nothing is shared between
/// generators, so one per thread is enough for concurrent use.
pub struct Generator<R> {
    rng: R,
    special: Vec<char>,
}

impl Generator<RngSource<ThreadRng>> {
    /// Generator over the thread-local `rand` generator.
    pub fn thread() -> Self {
        Self::new(RngSource::thread())
    }
}

impl<R: RandomSource> Generator<R> {
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            special: SPECIAL.chars().collect(),
        }
    }

    /// Replace the special character table.
    pub fn with_special(mut self, special: impl IntoIterator<Item = char>) -> Self {
        self.special = special.into_iter().collect();
        self
    }

    pub fn special(&self) -> &[char] {
        &self.special
    }

    pub fn into_inner(self) -> R {
        self.rng
    }

    /// Generate one string.
    ///
    /// Returns `Ok(None)` when no pool had anything to draw from, e.g.
    /// every class disabled. That is a valid outcome, not a failure.
    pub fn generate(
        &mut self,
        request: &GenerationRequest,
    ) -> Result<Option<Zeroizing<String>>, GenerateError> {
        let bounds = request.validate()?;

        let length = self.rng.between(bounds.min_length, bounds.max_length);
        let remaining =
            length
                .checked_sub(bounds.required())
                .ok_or(GenerateError::InfeasibleMinimums {
                    required: bounds.required() as u64,
                    available: length as u64,
                    bound: LengthBound::Chosen,
                })?;

        let pools = charset::build(request, &self.special);
        debug!(
            length,
            remaining,
            all = pools.all.len(),
            numbers = pools.numbers.len(),
            special = pools.special.len(),
            "generating"
        );

        if bounds.min_numbers > 0 && pools.numbers.is_empty() {
            warn!(
                min_numbers = bounds.min_numbers,
                "numeric pool is empty, minimum not seeded"
            );
        }
        if bounds.min_special > 0 && pools.special.is_empty() {
            warn!(
                min_special = bounds.min_special,
                "special pool is empty, minimum not seeded"
            );
        }

        // Exact reservation: the draws below never reallocate, and a length
        // too large to allocate is an error.
        let drawn = drawn_len(&pools, bounds.min_numbers, bounds.min_special, remaining);
        let mut out: Zeroizing<Vec<char>> = Zeroizing::new(Vec::new());
        out.try_reserve_exact(drawn)
            .map_err(|_| GenerateError::LengthTooLarge { length: drawn as u64 })?;

        draw(&mut self.rng, &pools.numbers, bounds.min_numbers, &mut out);
        draw(&mut self.rng, &pools.special, bounds.min_special, &mut out);
        draw(&mut self.rng, &pools.all, remaining, &mut out);

        if out.is_empty() {
            return Ok(None);
        }

        shuffle(&mut self.rng, &mut out);

        let bytes = out.iter().map(|c| c.len_utf8()).sum();
        let mut joined = Zeroizing::new(String::new());
        joined
            .try_reserve_exact(bytes)
            .map_err(|_| GenerateError::LengthTooLarge { length: drawn as u64 })?;
        joined.extend(out.iter());
        Ok(Some(joined))
    }

    /// Generate `count` strings, dropping "no result" outcomes.
    /// The first error aborts the batch.
    pub fn generate_batch(
        &mut self,
        request: &GenerationRequest,
        count: usize,
    ) -> Result<Vec<Zeroizing<String>>, GenerateError> {
        let mut batch = Vec::with_capacity(count.min(1024));
        for _ in 0..count {
            if let Some(s) = self.generate(request)? {
                batch.push(s);
            }
        }
        Ok(batch)
    }
}

/// One-shot generation on the thread-local source.
pub fn generate(request: &GenerationRequest) -> Result<Option<Zeroizing<String>>, GenerateError> {
    Generator::thread().generate(request)
}

/// Number of characters the draws will produce: empty pools are skipped.
fn drawn_len(pools: &Pools, min_numbers: usize, min_special: usize, remaining: usize) -> usize {
    let take = |pool: &[char], count: usize| if pool.is_empty() { 0 } else { count };
    take(&pools.numbers, min_numbers)
        + take(&pools.special, min_special)
        + take(&pools.all, remaining)
}

/// Append `count` draws (with replacement) from `pool`. No-op on an empty pool.
#[inline]
fn draw<R: RandomSource>(rng: &mut R, pool: &[char], count: usize, out: &mut Vec<char>) {
    if pool.is_empty() {
        return;
    }
    out.extend((0..count).map(|_| pool[rng.below(pool.len())]));
}

// Every position swaps with a draw over the full range, not the shrinking
// prefix of textbook Fisher-Yates.
#[inline]
fn shuffle<R: RandomSource>(rng: &mut R, chars: &mut [char]) {
    let count = chars.len();
    for i in 0..count {
        let j = rng.below(count);
        chars.swap(i, j);
    }
}
