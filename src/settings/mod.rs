//! Persisted generation defaults.

mod file;

use std::path::{Path, PathBuf};

use crate::pass::{GenerationRequest, charset::SPECIAL};
use crate::rng::SourceKind;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub min_length: i64,
    pub max_length: i64,
    pub min_numbers: i64,
    pub min_special: i64,
    pub include_lower: bool,
    pub include_upper: bool,
    pub include_numbers: bool,
    pub include_special: bool,
    pub allow_ambiguous: bool,
    pub special_chars: Vec<char>,
    pub number_of_strings: usize,
    pub output_file_path: String,
    pub source: SourceKind,
    /// Runtime only, never persisted.
    pub to_clipboard: bool,
}

impl Settings {
    pub fn load_from_file() -> Result<Self, std::io::Error> {
        Self::load_from(&file::default_path())
    }

    pub fn save_to_file(&self) -> Result<(), std::io::Error> {
        self.save_to(&file::default_path())
    }

    pub fn load_from(path: &Path) -> Result<Self, std::io::Error> {
        let mut settings = Settings::default();
        file::load(&mut settings, path)?;
        Ok(settings)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), std::io::Error> {
        file::save(self, path)
    }

    pub fn path() -> PathBuf {
        file::default_path()
    }

    pub fn request(&self) -> GenerationRequest {
        GenerationRequest::new(
            self.min_length,
            self.max_length,
            self.min_numbers,
            self.min_special,
            self.include_lower,
            self.include_upper,
            self.include_numbers,
            self.include_special,
            self.allow_ambiguous,
        )
    }
}

impl Default for Settings {
    fn default() -> Self {
        let request = GenerationRequest::default();
        Self {
            min_length: request.min_length,
            max_length: request.max_length,
            min_numbers: request.min_numbers,
            min_special: request.min_special,
            include_lower: request.include_lower,
            include_upper: request.include_upper,
            include_numbers: request.include_numbers,
            include_special: request.include_special,
            allow_ambiguous: request.allow_ambiguous,
            special_chars: SPECIAL.chars().collect(),
            number_of_strings: 1,
            output_file_path: String::new(),
            source: SourceKind::default(),
            to_clipboard: false,
        }
    }
}
