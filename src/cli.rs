// std imports
use std::path::PathBuf;

// third-party imports
use clap::Parser;
use clap_complete::Shell;

// local imports
use crate::{app::Delimiter, settings::Settings};

// ---

/// Selects files by inclusion and exclusion wildcard patterns.
///
/// Patterns are matched against file names, '?' matches any character, '*' matches any number of characters.
/// Several patterns can be given at once separated by ';'.
#[derive(Parser, Debug)]
#[clap(version)]
pub struct Opt {
    /// Configuration file path, can be repeated, empty value or '-' drops all previously listed ones.
    #[arg(long, env = "FILESEL_CONFIG", number_of_values = 1)]
    pub config: Vec<String>,

    /// Patterns of files to select, empty value selects all files [default: from configuration].
    #[arg(short, long, env = "FILESEL_INCLUDE", allow_hyphen_values = true, overrides_with = "include")]
    pub include: Option<String>,

    /// Patterns of files to skip, takes priority over --include [default: from configuration].
    #[arg(short = 'x', long, env = "FILESEL_EXCLUDE", allow_hyphen_values = true, overrides_with = "exclude")]
    pub exclude: Option<String>,

    /// Skip T4 text templates (*.tt) and everything nested under them.
    #[arg(long, overrides_with = "no_exclude_generated_t4")]
    pub exclude_generated_t4: bool,

    /// Do not skip T4 text templates, overrides --exclude-generated-t4 option.
    #[arg(long, overrides_with = "exclude_generated_t4")]
    pub no_exclude_generated_t4: bool,

    /// Read and write NUL-separated paths instead of newline-separated ones.
    #[arg(short = 'z', long, overrides_with = "null")]
    pub null: bool,

    /// Print rejected paths instead of selected ones.
    #[arg(short = 'v', long, overrides_with = "invert")]
    pub invert: bool,

    /// Print only the number of printed paths.
    #[arg(short, long, overrides_with = "count")]
    pub count: bool,

    /// Print shell auto-completion script and exit.
    #[arg(long, value_parser = clap::value_parser!(Shell), value_name = "SHELL")]
    pub shell_completions: Option<Shell>,

    /// Paths to check, '-' or nothing reads them from stdin.
    #[arg(name = "PATH")]
    pub paths: Vec<PathBuf>,
}

impl Opt {
    /// Returns the configuration files to load and whether the user configuration file should be skipped.
    pub fn configs(&self) -> (&[String], bool) {
        let (offset, no_default) = self
            .config
            .iter()
            .rposition(|x| x.is_empty() || x == "-")
            .map(|x| (x + 1, true))
            .unwrap_or_default();
        (&self.config[offset..], no_default)
    }

    /// Overrides `settings` with the options given on the command line.
    pub fn apply(&self, mut settings: Settings) -> Settings {
        if let Some(include) = &self.include {
            settings.include = include.clone();
        }
        if let Some(exclude) = &self.exclude {
            settings.exclude = exclude.clone();
        }
        if self.exclude_generated_t4 {
            settings.exclude_generated_t4 = true;
        } else if self.no_exclude_generated_t4 {
            settings.exclude_generated_t4 = false;
        }
        settings
    }

    pub fn delimiter(&self) -> Delimiter {
        if self.null { Delimiter::Nul } else { Delimiter::Lf }
    }
}

#[cfg(test)]
mod tests;
