//! Character classes and pool construction.

use super::GenerationRequest;

pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGITS: &str = "0123456789";
pub const SPECIAL: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// Visually confusable characters:
/// `l`/`I`/`1`, `o`/`O`/`0`, `S`/`5`, `B`/`8`, `Z`/`2`, `C`/`(`, `j`/`;`.
pub const AMBIGUOUS: &[char] = &[
    'l', 'I', '1', 'o', 'O', '0', 'S', '5', 'B', '8', 'Z', '2', 'C', '(', 'j', ';',
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharacterClass {
    Lower,
    Upper,
    Numbers,
    Special,
}

impl CharacterClass {
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Lower,
        CharacterClass::Upper,
        CharacterClass::Numbers,
        CharacterClass::Special,
    ];

    /// The built-in table for this class. A generator's special override
    /// is not reflected here; `build` applies it.
    pub fn chars(self) -> &'static str {
        match self {
            CharacterClass::Lower => LOWERCASE,
            CharacterClass::Upper => UPPERCASE,
            CharacterClass::Numbers => DIGITS,
            CharacterClass::Special => SPECIAL,
        }
    }

    /// Membership in the built-in table.
    pub fn contains(self, c: char) -> bool {
        self.chars().contains(c)
    }

    /// Whether `request` includes this class.
    pub fn enabled(self, request: &GenerationRequest) -> bool {
        match self {
            CharacterClass::Lower => request.include_lower,
            CharacterClass::Upper => request.include_upper,
            CharacterClass::Numbers => request.include_numbers,
            CharacterClass::Special => request.include_special,
        }
    }
}

#[inline]
pub fn is_ambiguous(c: char) -> bool {
    AMBIGUOUS.contains(&c)
}

/// Pools one request draws from.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Pools {
    /// Fill pool: every enabled class, ambiguity-filtered once at the end.
    pub all: Vec<char>,
    /// Seeds `min_numbers`.
    pub numbers: Vec<char>,
    /// Seeds `min_special`.
    pub special: Vec<char>,
}

/// Build the draw pools for `request`, using `special` as the special table.
pub fn build(request: &GenerationRequest, special: &[char]) -> Pools {
    let mut pools = Pools::default();

    for class in CharacterClass::ALL {
        if !class.enabled(request) {
            continue;
        }
        let table: Vec<char> = match class {
            CharacterClass::Special => special.to_vec(),
            _ => class.chars().chars().collect(),
        };
        match class {
            CharacterClass::Numbers => pools.numbers = filter(&table, request.allow_ambiguous),
            CharacterClass::Special => pools.special = filter(&table, request.allow_ambiguous),
            _ => {}
        }
        pools.all.extend(table);
    }

    if !request.allow_ambiguous {
        pools.all.retain(|&c| !is_ambiguous(c));
    }

    pools
}

/// Size of the fill pool (for entropy estimates).
pub fn size(request: &GenerationRequest, special: &[char]) -> usize {
    build(request, special).all.len()
}

fn filter(chars: &[char], allow_ambiguous: bool) -> Vec<char> {
    chars
        .iter()
        .copied()
        .filter(|&c| allow_ambiguous || !is_ambiguous(c))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_special() -> Vec<char> {
        SPECIAL.chars().collect()
    }

    #[test]
    fn tables_have_expected_sizes() {
        assert_eq!(LOWERCASE.len(), 26);
        assert_eq!(UPPERCASE.len(), 26);
        assert_eq!(DIGITS.len(), 10);
        assert_eq!(SPECIAL.len(), 32);
        assert!(SPECIAL.chars().all(|c| c.is_ascii_punctuation()));
    }

    #[test]
    fn ambiguous_members() {
        for c in "lI1oO0S5B8Z2C(j;".chars() {
            assert!(is_ambiguous(c), "{c} should be ambiguous");
        }
        for c in "aAx9!%".chars() {
            assert!(!is_ambiguous(c));
        }
    }

    #[test]
    fn all_pool_keeps_class_order() {
        let req = GenerationRequest::default().ambiguous(true);
        let pools = build(&req, &default_special());
        let expected: String = [LOWERCASE, UPPERCASE, DIGITS, SPECIAL].concat();
        assert_eq!(pools.all.iter().collect::<String>(), expected);
        assert_eq!(pools.numbers.len(), 10);
        assert_eq!(pools.special.len(), 32);
    }

    #[test]
    fn exclusion_filters_every_pool() {
        let req = GenerationRequest::default().ambiguous(false);
        let pools = build(&req, &default_special());

        assert_eq!(pools.numbers.iter().collect::<String>(), "34679");
        assert_eq!(pools.special.len(), 30);
        assert!(!pools.special.contains(&'('));
        assert!(!pools.special.contains(&';'));
        // 94 printable minus 16 ambiguous
        assert_eq!(pools.all.len(), 94 - AMBIGUOUS.len());
        assert!(pools.all.iter().all(|&c| !is_ambiguous(c)));
    }

    #[test]
    fn disabled_classes_leave_pools_empty() {
        let req = GenerationRequest::default()
            .numbers(false)
            .special(false)
            .ambiguous(true);
        let pools = build(&req, &default_special());
        assert!(pools.numbers.is_empty());
        assert!(pools.special.is_empty());
        assert_eq!(pools.all.len(), 52);

        let none = GenerationRequest::default()
            .lower(false)
            .upper(false)
            .numbers(false)
            .special(false);
        assert_eq!(size(&none, &default_special()), 0);
    }

    #[test]
    fn custom_special_table() {
        let req = GenerationRequest::default()
            .lower(false)
            .upper(false)
            .numbers(false)
            .ambiguous(false);
        let pools = build(&req, &['(', ';', '#']);
        assert_eq!(pools.special, vec!['#']);
        assert_eq!(pools.all, vec!['#']);
    }

    #[test]
    fn class_lookup() {
        assert!(CharacterClass::Numbers.contains('7'));
        assert!(CharacterClass::Special.contains('~'));
        assert!(!CharacterClass::Upper.contains('a'));
        let total: usize = CharacterClass::ALL.iter().map(|c| c.chars().len()).sum();
        assert_eq!(total, 94);
    }

    #[test]
    fn enabled_follows_request_toggles() {
        let req = GenerationRequest::default().upper(false).special(false);
        let on: Vec<_> = CharacterClass::ALL
            .into_iter()
            .filter(|c| c.enabled(&req))
            .collect();
        assert_eq!(on, vec![CharacterClass::Lower, CharacterClass::Numbers]);
    }

    #[test]
    fn special_override_replaces_builtin_table() {
        let req = GenerationRequest::default()
            .lower(false)
            .upper(false)
            .numbers(false)
            .ambiguous(true);
        let pools = build(&req, &['€', '§']);
        assert_eq!(pools.all, vec!['€', '§']);
        assert_eq!(pools.special, vec!['€', '§']);
        // the built-in table stays as documented
        assert!(!CharacterClass::Special.contains('€'));
    }
}
