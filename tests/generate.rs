use std::collections::HashSet;

use proptest::prelude::*;

use randstr::pass::charset::{self, DIGITS, SPECIAL, is_ambiguous};
use randstr::rng::RngSource;
use randstr::{GenerateError, GenerationRequest, Generator, LengthBound};

fn request_strategy() -> impl Strategy<Value = GenerationRequest> {
    (
        0i64..40,
        0i64..40,
        0i64..6,
        0i64..6,
        any::<[bool; 5]>(),
    )
        .prop_map(|(min, span, numbers, special, [l, u, n, s, a])| {
            GenerationRequest::new(min, min + span, numbers, special, l, u, n, s, a)
        })
}

fn count_in(s: &str, pool: &[char]) -> usize {
    s.chars().filter(|c| pool.contains(c)).count()
}

proptest! {
    #[test]
    fn results_satisfy_every_constraint(req in request_strategy(), seed in any::<u64>()) {
        let special: Vec<char> = SPECIAL.chars().collect();
        let pools = charset::build(&req, &special);
        let mut generator = Generator::new(RngSource::seeded(seed));

        match generator.generate(&req) {
            Ok(Some(out)) => {
                let len = out.chars().count() as i64;
                prop_assert!(len <= req.max_length);

                // Skipped seeds or an empty fill pool shorten the result
                let short = (pools.numbers.is_empty() && req.min_numbers > 0)
                    || (pools.special.is_empty() && req.min_special > 0)
                    || pools.all.is_empty();
                if !short {
                    prop_assert!(len >= req.min_length);
                }

                if !pools.numbers.is_empty() {
                    prop_assert!(count_in(&out, &pools.numbers) as i64 >= req.min_numbers);
                }
                if !pools.special.is_empty() {
                    prop_assert!(count_in(&out, &pools.special) as i64 >= req.min_special);
                }
                if !req.allow_ambiguous {
                    prop_assert!(out.chars().all(|c| !is_ambiguous(c)));
                }
            }
            Ok(None) => {}
            Err(GenerateError::InfeasibleMinimums { bound, required, available }) => {
                prop_assert!(required > available);
                match bound {
                    LengthBound::Maximum => prop_assert_eq!(available as i64, req.max_length),
                    LengthBound::Chosen => prop_assert!(available as i64 >= req.min_length),
                }
            }
            Err(e) => prop_assert!(false, "unexpected error {}", e),
        }
    }

    #[test]
    fn full_pools_always_hit_the_range(
        min in 0i64..64,
        span in 0i64..64,
        seed in any::<u64>(),
    ) {
        let req = GenerationRequest::default().lengths(min, min + span).ambiguous(true);
        let out = Generator::new(RngSource::seeded(seed))
            .generate(&req)
            .unwrap();
        match out {
            Some(out) => {
                let len = out.chars().count() as i64;
                prop_assert!((min..=min + span).contains(&len));
            }
            // Only an empty draw produces no result
            None => prop_assert_eq!(min, 0),
        }
    }
}

#[test]
fn fixed_length_five() {
    let req = GenerationRequest::new(5, 5, 0, 0, true, true, true, true, true);
    let mut generator = Generator::new(RngSource::seeded(11));
    for _ in 0..200 {
        let out = generator.generate(&req).unwrap().unwrap();
        assert_eq!(out.chars().count(), 5);
    }
}

#[test]
fn minimums_over_max_length_fail_preflight() {
    let req = GenerationRequest::new(0, 10, 11, 0, true, true, true, true, false);
    assert_eq!(
        randstr::generate(&req),
        Err(GenerateError::InfeasibleMinimums {
            required: 11,
            available: 10,
            bound: LengthBound::Maximum,
        })
    );
}

#[test]
fn negative_min_length_fails() {
    let req = GenerationRequest::default().lengths(-1, 5);
    assert!(matches!(
        randstr::generate(&req),
        Err(GenerateError::InvalidRange { min: -1, max: 5 })
    ));
}

#[test]
fn negative_minimum_fails() {
    let req = GenerationRequest::default().minimums(0, -4);
    assert!(matches!(
        randstr::generate(&req),
        Err(GenerateError::InvalidMinimum { special: -4, .. })
    ));
}

#[test]
fn no_classes_is_not_an_error() {
    let req = GenerationRequest::new(8, 12, 0, 0, false, false, false, false, true);
    assert_eq!(randstr::generate(&req), Ok(None));
}

#[test]
fn minimums_are_honoured() {
    let req = GenerationRequest::default().length(10).minimums(4, 3);
    let numbers: Vec<char> = DIGITS.chars().filter(|&c| !is_ambiguous(c)).collect();
    let special: Vec<char> = SPECIAL.chars().filter(|&c| !is_ambiguous(c)).collect();

    let mut generator = Generator::new(RngSource::seeded(2024));
    for _ in 0..200 {
        let out = generator.generate(&req).unwrap().unwrap();
        assert!(count_in(&out, &numbers) >= 4, "{}", out.as_str());
        assert!(count_in(&out, &special) >= 3, "{}", out.as_str());
    }
}

#[test]
fn repeated_calls_differ() {
    let req = GenerationRequest::default();
    let mut generator = Generator::thread();
    let outputs: HashSet<String> = (0..50)
        .map(|_| generator.generate(&req).unwrap().unwrap().to_string())
        .collect();
    assert_eq!(outputs.len(), 50);
}

#[test]
fn draws_cover_the_whole_pool() {
    // Every character of the filtered pool shows up given enough draws.
    let req = GenerationRequest::default().length(64);
    let special: Vec<char> = SPECIAL.chars().collect();
    let pool: HashSet<char> = charset::build(&req, &special).all.into_iter().collect();

    let mut generator = Generator::new(RngSource::seeded(8));
    let seen: HashSet<char> = (0..200)
        .flat_map(|_| generator.generate(&req).unwrap().unwrap().chars().collect::<Vec<_>>())
        .collect();
    assert_eq!(seen, pool);
}

#[test]
fn hardware_source_plugs_in() {
    let req = GenerationRequest::default().lengths(10, 20).minimums(2, 2);
    let mut generator = Generator::new(randstr::rng::HwRand::new());
    let out = generator.generate(&req).unwrap().unwrap();
    assert!((10..=20).contains(&out.chars().count()));
}
