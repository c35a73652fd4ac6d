//! Adapters over the `rand` crate and runtime source selection.

use std::fmt;
use std::str::FromStr;

use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

use super::{HwRand, RandomSource};

/// Wraps any `rand` generator as a [`RandomSource`].
pub struct RngSource<R>(R);

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        RngSource(rng)
    }
}

impl RngSource<ThreadRng> {
    /// Thread-local, OS-seeded generator. Each thread gets its own state.
    pub fn thread() -> Self {
        RngSource(rand::rng())
    }
}

impl RngSource<StdRng> {
    /// Deterministic generator; the same seed replays the same draws.
    pub fn seeded(seed: u64) -> Self {
        RngSource(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    #[inline]
    fn below(&mut self, bound: usize) -> usize {
        self.0.random_range(0..bound)
    }
}

/// Which source to build when no seed is given.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SourceKind {
    #[default]
    Thread,
    Hardware,
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceKind::Thread => f.write_str("thread"),
            SourceKind::Hardware => f.write_str("hw"),
        }
    }
}

impl FromStr for SourceKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "thread" => Ok(SourceKind::Thread),
            "hw" => Ok(SourceKind::Hardware),
            other => Err(format!("unknown random source: {other}")),
        }
    }
}

/// Runtime-selected source.
pub enum Source {
    Thread(RngSource<ThreadRng>),
    Seeded(RngSource<StdRng>),
    Hardware(HwRand),
}

impl Source {
    /// A seed always wins over `kind`.
    pub fn build(kind: SourceKind, seed: Option<u64>) -> Self {
        match (seed, kind) {
            (Some(seed), _) => Source::Seeded(RngSource::seeded(seed)),
            (None, SourceKind::Thread) => Source::Thread(RngSource::thread()),
            (None, SourceKind::Hardware) => Source::Hardware(HwRand::new()),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Source::Thread(_) => "thread rng",
            Source::Seeded(_) => "seeded std rng",
            Source::Hardware(_) => HwRand::source_name(),
        }
    }
}

impl RandomSource for Source {
    #[inline]
    fn below(&mut self, bound: usize) -> usize {
        match self {
            Source::Thread(r) => r.below(bound),
            Source::Seeded(r) => r.below(bound),
            Source::Hardware(r) => r.below(bound),
        }
    }
}
