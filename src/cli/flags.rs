#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CliFlags {
    pub help: bool,
    pub version: bool,
    pub verbose: bool,
    pub quiet: bool,
    pub clipboard: bool,
    pub saved: bool,
    pub save: bool,
    pub hw: bool,
    pub no_lower: bool,
    pub no_upper: bool,
    pub no_numbers: bool,
    pub no_special: bool,
    /// `Some(true)` for `--ambiguous`, `Some(false)` for `--no-ambiguous`.
    pub ambiguous: Option<bool>,
    pub length: Option<i64>,
    pub min_length: Option<i64>,
    pub max_length: Option<i64>,
    pub min_numbers: Option<i64>,
    pub min_special: Option<i64>,
    pub number: Option<usize>,
    pub special: Option<String>,
    pub output: Option<String>,
    pub seed: Option<u64>,
}
