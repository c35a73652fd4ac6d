//! Settings file persistence.
//!
//! One line, comma separated. `|` escapes the next character; `|n` and `|r`
//! stand for line breaks so a field never splits the line.

use std::env;
use std::fs::OpenOptions;
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::Settings;

const DELIMITER: char = ',';
const ESCAPE: char = '|';
const FIELDS: usize = 13;

pub fn save(settings: &Settings, path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }

    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)?;

    let special_chars: String = settings.special_chars.iter().collect();

    let data = format!(
        "{},{},{},{},{},{},{},{},{},{},{},{},{}\n",
        settings.min_length,
        settings.max_length,
        settings.min_numbers,
        settings.min_special,
        settings.include_lower,
        settings.include_upper,
        settings.include_numbers,
        settings.include_special,
        settings.allow_ambiguous,
        escape(&special_chars),
        settings.number_of_strings,
        escape(&settings.output_file_path),
        settings.source,
    );

    file.write_all(data.as_bytes())?;
    debug!(path = %path.display(), "settings saved");
    Ok(())
}

pub fn load(settings: &mut Settings, path: &Path) -> std::io::Result<()> {
    if !path.exists() {
        debug!(path = %path.display(), "no settings file, writing defaults");
        return save(settings, path);
    }

    let file = OpenOptions::new().read(true).open(path)?;
    let mut reader = BufReader::new(file);
    let mut line = String::new();
    reader.read_line(&mut line)?;

    let line = line.trim_end_matches(['\r', '\n']);
    if line.is_empty() {
        return save(settings, path);
    }

    let parts = split_escaped(line, DELIMITER);
    if parts.len() != FIELDS {
        warn!(
            path = %path.display(),
            fields = parts.len(),
            "malformed settings file, restoring defaults"
        );
        *settings = Settings::default();
        return save(settings, path);
    }

    settings.min_length = parts[0].parse().unwrap_or(settings.min_length);
    settings.max_length = parts[1].parse().unwrap_or(settings.max_length);
    settings.min_numbers = parts[2].parse().unwrap_or(settings.min_numbers);
    settings.min_special = parts[3].parse().unwrap_or(settings.min_special);
    settings.include_lower = parts[4].parse().unwrap_or(settings.include_lower);
    settings.include_upper = parts[5].parse().unwrap_or(settings.include_upper);
    settings.include_numbers = parts[6].parse().unwrap_or(settings.include_numbers);
    settings.include_special = parts[7].parse().unwrap_or(settings.include_special);
    settings.allow_ambiguous = parts[8].parse().unwrap_or(settings.allow_ambiguous);
    settings.special_chars = parts[9].chars().collect();
    settings.number_of_strings = parts[10].parse().unwrap_or(settings.number_of_strings);
    settings.output_file_path = parts[11].clone();
    settings.source = parts[12].parse().unwrap_or(settings.source);

    Ok(())
}

pub fn default_path() -> PathBuf {
    let home = env::var("HOME").unwrap_or_else(|_| ".".into());
    PathBuf::from(home).join(".config/randstr/settings")
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\n' => out.push_str("|n"),
            '\r' => out.push_str("|r"),
            DELIMITER | ESCAPE => {
                out.push(ESCAPE);
                out.push(c);
            }
            _ => out.push(c),
        }
    }
    out
}

fn split_escaped(s: &str, delimiter: char) -> Vec<String> {
    let mut parts = vec![];
    let mut current = String::new();
    let mut escape_next = false;

    for c in s.chars() {
        if escape_next {
            current.push(match c {
                'n' => '\n',
                'r' => '\r',
                _ => c,
            });
            escape_next = false;
        } else if c == ESCAPE {
            escape_next = true;
        } else if c == delimiter {
            parts.push(std::mem::take(&mut current));
        } else {
            current.push(c);
        }
    }

    parts.push(current);
    parts
}
