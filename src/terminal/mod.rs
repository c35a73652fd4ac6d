//! Terminal helpers: boxed help text and the entropy estimate.

mod boxes;

pub use boxes::*;

/// `length * log2(pool)` bits, zero for an empty pool.
pub fn calculate_entropy(length: usize, pool_size: usize) -> f64 {
    if pool_size == 0 {
        return 0.0;
    }
    length as f64 * (pool_size as f64).log2()
}

pub fn entropy_strength(bits: f64) -> &'static str {
    match bits as u32 {
        0..=35 => "Weak",
        36..=59 => "Fair",
        60..=127 => "Strong",
        _ => "Very Strong",
    }
}

pub fn print_help() {
    box_top("Randstr");
    box_line_center("Constrained random string generator");
    box_line("");
    box_line("USAGE:");
    box_line("  randstr [OPTIONS]");
    box_line("");
    box_line("OPTIONS:");
    box_line(" Length:");
    box_opt("  -l, --length <N>", "Fixed length (sets min and max, default: 16)");
    box_opt("      --min-length <N>", "Shortest allowed length");
    box_opt("      --max-length <N>", "Longest allowed length");
    box_line("");
    box_line(" Characters:");
    box_opt("      --min-numbers <N>", "At least N digits");
    box_opt("      --min-special <N>", "At least N special characters");
    box_opt("      --no-lower", "Leave out a-z");
    box_opt("      --no-upper", "Leave out A-Z");
    box_opt("      --no-numbers", "Leave out 0-9");
    box_opt("      --no-special", "Leave out special characters");
    box_opt("      --special <CHARS>", "Override the special character set");
    box_opt("  -a, --ambiguous", "Allow look-alike characters such as l, 1, O and 0");
    box_opt("      --no-ambiguous", "Exclude look-alike characters (default)");
    box_line("");
    box_line(" Output:");
    box_opt("  -n, --number <N>", "How many strings to generate");
    box_opt("  -o, --output [FILE]", "Append to file (default: randstr.txt)");
    box_opt("  -b, --board", "Copy to clipboard instead of printing");
    box_opt("  -q, --quiet", "Suppress everything except the strings");
    box_line("");
    box_line(" Randomness:");
    box_opt("      --seed <N>", "Reproducible output from a seeded generator");
    box_opt("      --hw", "Cycle-counter entropy mixer instead of the thread rng");
    box_line("");
    box_line(" Settings:");
    box_opt("  -s, --saved", "Start from the saved settings file");
    box_opt("      --save", "Save the resulting settings as the new defaults");
    box_line("");
    box_line(" Info:");
    box_opt("  -h, --help", "Display this help message");
    box_opt("  -v, --version", "Display version");
    box_opt("      --verbose", "Debug logging on stderr (or set RANDSTR_LOG)");
    box_line("");
    box_line("EXAMPLES:");
    box_line("  randstr                          One 16-character string");
    box_line("  randstr -l 20 -n 3               Three strings, 20 characters each");
    box_line("  randstr --min-length 12 --max-length 20 --min-numbers 2");
    box_line("  randstr --no-special -a          Alphanumeric, look-alikes allowed");
    box_line("  randstr -l 24 --save             Make 24 the default length");
    box_line("");
    box_bottom();
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entropy_of_empty_pool_is_zero() {
        assert_eq!(calculate_entropy(32, 0), 0.0);
    }

    #[test]
    fn entropy_scales_with_length() {
        assert_eq!(calculate_entropy(8, 16), 32.0);
        assert_eq!(entropy_strength(calculate_entropy(16, 78)), "Very Strong");
        assert_eq!(entropy_strength(calculate_entropy(4, 26)), "Weak");
        assert_eq!(entropy_strength(calculate_entropy(10, 26)), "Fair");
    }
}
