//! User-facing warnings, errors and confirmations.

use std::io::{IsTerminal, Write};
use std::sync::atomic::{AtomicBool, Ordering};

use crossterm::style::{Stylize, style};

static QUIET: AtomicBool = AtomicBool::new(false);

/// `--quiet`: drop warnings and confirmations, keep errors.
pub fn set_quiet(quiet: bool) {
    QUIET.store(quiet, Ordering::Relaxed);
}

fn quiet() -> bool {
    QUIET.load(Ordering::Relaxed)
}

/// Nobody to answer a y/n question: quiet, or stdin is not a terminal.
fn skip_prompt(quiet: bool, interactive: bool) -> bool {
    quiet || !interactive
}

/// Yellow, on stderr. Suppressed in quiet mode.
pub fn warn(msg: &str) {
    if !quiet() {
        eprintln!("{}", style(msg).yellow());
    }
}

/// Red, on stderr. Always shown.
pub fn error(msg: &str) {
    eprintln!("{}", style(msg).red());
}

pub fn help_hint() {
    eprintln!("Run with --help for usage.");
}

pub fn no_result() {
    warn("No characters available: every character class is disabled or filtered out.");
}

pub fn short_batch(generated: usize, requested: usize) {
    warn(&format!(
        "Only {generated} of {requested} string(s) had characters to draw from."
    ));
}

pub fn clipboard_copied() {
    if !quiet() {
        println!("*** -COPIED TO CLIPBOARD- ***");
    }
}

pub fn settings_saved(path: &str) {
    if !quiet() {
        println!("Settings saved \u{2192} {path}");
    }
}

/// Clipboard unavailable: `true` falls back to the terminal, `false` aborts.
/// Falls back silently when prompts are skipped.
pub fn clipboard_fallback_prompt() -> bool {
    if skip_prompt(quiet(), std::io::stdin().is_terminal()) {
        return true;
    }

    eprint!("Clipboard unavailable. Print to terminal instead? [Y/n]: ");
    let _ = std::io::stderr().flush();

    let mut input = String::new();
    if std::io::stdin().read_line(&mut input).is_ok() {
        let input = input.trim().to_lowercase();
        if input.is_empty() || input == "y" || input == "yes" {
            eprintln!();
            return true;
        }
    } else {
        return true;
    }

    eprintln!("\nAborted.");
    false
}

pub fn strings_written(count: usize, path: &str) {
    if !quiet() {
        println!("{count} string(s) \u{2192} {path}");
    }
}
