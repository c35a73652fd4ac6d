//! Command-line front end.

mod context;
mod flags;
mod output;
mod parse;
mod prompts;

use std::process::ExitCode;

use thiserror::Error;
use tracing_subscriber::EnvFilter;

use randstr::GenerateError;

pub use context::{Context, Stop};
pub use flags::CliFlags;
pub use parse::parse;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Generate(#[from] GenerateError),
    #[error("output failed: {0}")]
    Output(#[from] std::io::Error),
    #[error("clipboard error: {0}")]
    Clipboard(String),
}

pub fn run(args: Vec<String>) -> ExitCode {
    let flags = match parse(&args) {
        Ok(flags) => flags,
        Err(e) => {
            prompts::error(&e.to_string());
            prompts::help_hint();
            return ExitCode::from(2);
        }
    };

    prompts::set_quiet(flags.quiet);
    init_logging(flags.verbose, flags.quiet);

    let mut ctx = Context::new(flags);
    match ctx.run() {
        Ok(()) | Err(Stop::Done) => ExitCode::SUCCESS,
        Err(Stop::Failed(e)) => {
            prompts::error(&format!("Error: {e}"));
            ExitCode::FAILURE
        }
    }
}

/// `RANDSTR_LOG` sets the filter; `--verbose` and `--quiet` override it.
fn init_logging(verbose: bool, quiet: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else if quiet {
        EnvFilter::new("error")
    } else {
        EnvFilter::try_from_env("RANDSTR_LOG").unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
