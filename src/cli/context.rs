//! CLI context - bundles settings, flags, and clipboard state.

use copypasta::{ClipboardContext, ClipboardProvider};
use tracing::debug;
use zeroize::Zeroize;

use randstr::pass::charset;
use randstr::rng::{Source, SourceKind};
use randstr::{GenerateError, Generator, Settings};

use super::{CliError, CliFlags, output, prompts};
use crate::terminal::{calculate_entropy, entropy_strength, print_help};

/// Why [`Context::run`] stopped before finishing.
#[derive(Debug)]
pub enum Stop {
    /// Early exit (help, version, declined prompt). Not an error.
    Done,
    Failed(CliError),
}

impl From<CliError> for Stop {
    fn from(e: CliError) -> Self {
        Stop::Failed(e)
    }
}

impl From<GenerateError> for Stop {
    fn from(e: GenerateError) -> Self {
        Stop::Failed(e.into())
    }
}

impl From<std::io::Error> for Stop {
    fn from(e: std::io::Error) -> Self {
        Stop::Failed(e.into())
    }
}

/// Application context for one CLI invocation.
pub struct Context {
    pub settings: Settings,
    pub flags: CliFlags,
    clipboard: Option<ClipboardContext>,
}

impl Context {
    pub fn new(flags: CliFlags) -> Self {
        let settings = if flags.saved {
            Settings::load_from_file().unwrap_or_else(|e| {
                prompts::warn(&format!("Failed to load settings: {e}"));
                Settings::default()
            })
        } else {
            Settings::default()
        };

        Self {
            settings,
            flags,
            clipboard: None,
        }
    }

    pub fn run(&mut self) -> Result<(), Stop> {
        self.handle_info_flags()?;
        self.apply_flags();
        self.handle_save();
        self.handle_clipboard()?;
        self.generate_output()?;
        Ok(())
    }

    fn handle_info_flags(&self) -> Result<(), Stop> {
        if self.flags.help {
            print_help();
            return Err(Stop::Done);
        }
        if self.flags.version {
            println!("randstr {}", env!("CARGO_PKG_VERSION"));
            return Err(Stop::Done);
        }
        Ok(())
    }

    /// Apply CLI flags on top of the base settings.
    pub fn apply_flags(&mut self) {
        let flags = &self.flags;
        let settings = &mut self.settings;

        if let Some(len) = flags.length {
            settings.min_length = len;
            settings.max_length = len;
        }
        if let Some(min) = flags.min_length {
            settings.min_length = min;
        }
        if let Some(max) = flags.max_length {
            settings.max_length = max;
        }
        if let Some(n) = flags.min_numbers {
            settings.min_numbers = n;
        }
        if let Some(n) = flags.min_special {
            settings.min_special = n;
        }

        if flags.no_lower {
            settings.include_lower = false;
        }
        if flags.no_upper {
            settings.include_upper = false;
        }
        if flags.no_numbers {
            settings.include_numbers = false;
        }
        if flags.no_special {
            settings.include_special = false;
        }
        if let Some(allow) = flags.ambiguous {
            settings.allow_ambiguous = allow;
        }
        if let Some(ref chars) = flags.special {
            settings.special_chars = chars.chars().collect();
        }

        if let Some(num) = flags.number {
            settings.number_of_strings = num;
        }
        if flags.hw {
            settings.source = SourceKind::Hardware;
        }
        if let Some(ref path) = flags.output {
            settings.output_file_path = output::resolve_path(path);
        }
    }

    fn handle_save(&self) {
        if !self.flags.save {
            return;
        }
        match self.settings.save_to_file() {
            Ok(()) => prompts::settings_saved(&Settings::path().display().to_string()),
            Err(e) => prompts::warn(&format!("Failed to save settings: {e}")),
        }
    }

    fn handle_clipboard(&mut self) -> Result<(), Stop> {
        if !self.flags.clipboard {
            return Ok(());
        }
        match ClipboardContext::new() {
            Ok(c) => {
                self.clipboard = Some(c);
                self.settings.to_clipboard = true;
                Ok(())
            }
            Err(e) => {
                debug!(error = %e, "clipboard unavailable");
                if prompts::clipboard_fallback_prompt() {
                    self.settings.to_clipboard = false;
                    Ok(())
                } else {
                    Err(Stop::Done)
                }
            }
        }
    }

    /// Generate strings and send them to the clipboard, a file or stdout.
    pub fn generate_output(&mut self) -> Result<(), Stop> {
        let request = self.settings.request();
        let source = Source::build(self.settings.source, self.flags.seed);
        debug!(source = source.name(), ?request, "generating");

        let mut generator =
            Generator::new(source).with_special(self.settings.special_chars.iter().copied());

        let pool = charset::size(&request, generator.special());
        if let Ok(length) = usize::try_from(request.max_length) {
            let bits = calculate_entropy(length, pool);
            debug!(pool, bits, strength = entropy_strength(bits), "entropy estimate");
        }

        let count = self.settings.number_of_strings.max(1);
        let batch = generator.generate_batch(&request, count)?;

        if batch.is_empty() {
            prompts::no_result();
            return Ok(());
        }
        if batch.len() < count {
            prompts::short_batch(batch.len(), count);
        }

        if self.settings.to_clipboard
            && let Some(ctx) = self.clipboard.as_mut()
        {
            let joined = output::join(&batch, false);
            ctx.set_contents(output::into_owned(joined))
                .map_err(|e| CliError::Clipboard(e.to_string()))?;
            if let Ok(mut retrieved) = ctx.get_contents() {
                retrieved.zeroize();
            }
            prompts::clipboard_copied();
        } else if !self.settings.output_file_path.is_empty() {
            let full_path = output::to_file(&self.settings.output_file_path, &batch)?;
            prompts::strings_written(batch.len(), &full_path);
        } else {
            output::to_stdout(&batch)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::parse;

    fn context(line: &str) -> Context {
        let args: Vec<String> = std::iter::once("randstr")
            .chain(line.split_whitespace())
            .map(String::from)
            .collect();
        let mut ctx = Context::new(parse(&args).unwrap());
        ctx.apply_flags();
        ctx
    }

    #[test]
    fn flags_override_defaults() {
        let ctx = context("-l 24 --min-numbers 3 --min-special 2 --no-upper -a -n 5 --hw");
        let s = &ctx.settings;
        assert_eq!((s.min_length, s.max_length), (24, 24));
        assert_eq!((s.min_numbers, s.min_special), (3, 2));
        assert!(!s.include_upper && s.include_lower);
        assert!(s.allow_ambiguous);
        assert_eq!(s.number_of_strings, 5);
        assert_eq!(s.source, SourceKind::Hardware);
    }

    #[test]
    fn explicit_bounds_refine_length() {
        let ctx = context("-l 10 --max-length 14");
        assert_eq!((ctx.settings.min_length, ctx.settings.max_length), (10, 14));
    }

    #[test]
    fn request_mirrors_settings() {
        let ctx = context("--min-length 4 --max-length 8 --no-special --no-ambiguous");
        let req = ctx.settings.request();
        assert_eq!((req.min_length, req.max_length), (4, 8));
        assert!(!req.include_special);
        assert!(!req.allow_ambiguous);
    }

    #[test]
    fn invalid_request_fails_generation() {
        let mut ctx = context("--min-length -1 --max-length 5");
        assert!(matches!(
            ctx.generate_output(),
            Err(Stop::Failed(CliError::Generate(
                GenerateError::InvalidRange { .. }
            )))
        ));
    }

    #[test]
    fn seeded_file_output() {
        let dir = std::env::temp_dir().join(format!("randstr-ctx-{}", std::process::id()));
        let path = dir.join("seeded.txt");
        let line = format!("-l 12 -n 3 --seed 5 -q -o {}", path.display());

        context(&line).generate_output().unwrap();
        let first = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        context(&line).generate_output().unwrap();
        let second = std::fs::read_to_string(&path).unwrap();

        assert_eq!(first, second);
        assert_eq!(first.lines().count(), 3);
        assert!(first.lines().all(|l| l.chars().count() == 12));
        let _ = std::fs::remove_dir_all(dir);
    }
}
