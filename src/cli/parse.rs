use std::str::FromStr;

use thiserror::Error;

use super::CliFlags;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid number for {flag}: {value}")]
    InvalidNumber { flag: String, value: String },
    #[error("Missing value for {0}")]
    MissingValue(String),
    #[error("Unknown argument: {0}")]
    UnknownArg(String),
}

pub fn parse(args: &[String]) -> Result<CliFlags, ParseError> {
    let mut flags = CliFlags::default();
    let mut i = 1;

    while i < args.len() {
        let flag = args[i].as_str();
        match flag {
            "-h" | "--help" => flags.help = true,
            "-v" | "--version" => flags.version = true,
            "--verbose" => flags.verbose = true,
            "-q" | "--quiet" => flags.quiet = true,
            "-b" | "--board" => flags.clipboard = true,
            "-s" | "--saved" => flags.saved = true,
            "--save" => flags.save = true,
            "--hw" => flags.hw = true,
            "--no-lower" => flags.no_lower = true,
            "--no-upper" => flags.no_upper = true,
            "--no-numbers" => flags.no_numbers = true,
            "--no-special" => flags.no_special = true,
            "-a" | "--ambiguous" => flags.ambiguous = Some(true),
            "--no-ambiguous" => flags.ambiguous = Some(false),
            "-l" | "--length" => flags.length = Some(number(args, &mut i, flag)?),
            "--min-length" => flags.min_length = Some(number(args, &mut i, flag)?),
            "--max-length" => flags.max_length = Some(number(args, &mut i, flag)?),
            "--min-numbers" => flags.min_numbers = Some(number(args, &mut i, flag)?),
            "--min-special" => flags.min_special = Some(number(args, &mut i, flag)?),
            "-n" | "--number" => flags.number = Some(number(args, &mut i, flag)?),
            "--seed" => flags.seed = Some(number(args, &mut i, flag)?),
            "--special" => flags.special = Some(value(args, &mut i, flag)?.to_string()),
            "-o" | "--output" => {
                // Path is optional: a following flag means "use the default"
                if i + 1 < args.len() && !args[i + 1].starts_with('-') {
                    i += 1;
                    flags.output = Some(args[i].clone());
                } else {
                    flags.output = Some(".".to_string());
                }
            }
            arg => return Err(ParseError::UnknownArg(arg.to_string())),
        }
        i += 1;
    }

    Ok(flags)
}

/// Next argument as the value of `flag`. Values may start with '-'.
fn value<'a>(args: &'a [String], i: &mut usize, flag: &str) -> Result<&'a str, ParseError> {
    *i += 1;
    args.get(*i)
        .map(String::as_str)
        .ok_or_else(|| ParseError::MissingValue(flag.to_string()))
}

fn number<T: FromStr>(args: &[String], i: &mut usize, flag: &str) -> Result<T, ParseError> {
    let raw = value(args, i, flag)?;
    raw.parse().map_err(|_| ParseError::InvalidNumber {
        flag: flag.to_string(),
        value: raw.to_string(),
    })
}
