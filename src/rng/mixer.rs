//! Cycle-counter entropy mixer.

use zeroize::Zeroize;

use super::RandomSource;
use super::hw;
use super::primes::PRIMES;

/// Owned entropy mixer fed by the CPU cycle counter.
///
/// Each draw reads fresh hardware entropy, uses it to pick a prime
/// multiplier, advances the state (rotate, multiply, xor) and runs the
/// result through the SplitMix64 finalizer. State is zeroed on drop.
pub struct HwRand {
    state: u64,
}

impl HwRand {
    #[inline]
    pub fn new() -> Self {
        HwRand {
            state: hw::entropy(),
        }
    }

    #[inline(always)]
    pub fn next_u64(&mut self) -> u64 {
        let ent = hw::entropy();

        // Mix entropy into prime selection
        let mixed = self.state ^ ent;
        let idx = ((mixed ^ (mixed >> 32)) % PRIMES.len() as u64) as usize;

        // State transition: rotate, multiply by prime, XOR entropy
        self.state = self.state.rotate_left(17).wrapping_mul(PRIMES[idx]) ^ ent;

        // SplitMix64 output finalizer
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d049bb133111eb);
        z ^ (z >> 31)
    }

    pub fn source_name() -> &'static str {
        hw::SOURCE_NAME
    }
}

impl Default for HwRand {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for HwRand {
    fn drop(&mut self) {
        self.state.zeroize();
    }
}

impl RandomSource for HwRand {
    #[inline]
    fn below(&mut self, bound: usize) -> usize {
        (self.next_u64() % bound as u64) as usize
    }
}
