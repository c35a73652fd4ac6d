/// Odd prime multipliers for the [`HwRand`](super::HwRand) state transition.
pub const PRIMES: [u64; 12] = [
    2_147_483_647,
    998_244_353,
    1_000_000_007,
    1_000_000_009,
    4_294_967_291,
    4_294_967_311,
    1_099_511_628_211,
    2_305_843_009_213_693_951,
    9_223_372_036_854_775_783,
    18_446_744_073_709_551_557,
    67_280_421_310_721,
    6_700_417,
];
