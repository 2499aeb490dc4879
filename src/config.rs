// std imports
use std::path::{Path, PathBuf};

// local imports
use crate::{
    error::Result,
    settings::{Settings, Source},
};

// ---

pub const APP_NAME: &str = "filesel";

/// Starts configuration loading from the given files.
pub fn at<I, P>(paths: I) -> Loader
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    Loader::new(paths.into_iter().map(|p| p.as_ref().to_owned()).collect())
}

/// Returns the user configuration directory for the application.
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_NAME))
}

// ---

pub struct Loader {
    paths: Vec<PathBuf>,
    no_default: bool,
}

impl Loader {
    fn new(paths: Vec<PathBuf>) -> Self {
        Self {
            paths,
            no_default: false,
        }
    }

    /// Skips the user configuration file if `value` is true.
    pub fn no_default(mut self, value: bool) -> Self {
        self.no_default = value;
        self
    }

    pub fn load(self) -> Result<Settings> {
        Settings::load(self.sources())
    }

    fn sources(&self) -> Vec<Source> {
        let mut sources = Vec::with_capacity(self.paths.len() + 1);

        if !self.no_default {
            match config_dir() {
                Some(dir) => sources.push(Source::Named(dir.join("config").to_string_lossy().into_owned())),
                None => log::debug!("no user configuration directory"),
            }
        }

        sources.extend(self.paths.iter().cloned().map(Source::File));
        sources
    }
}

#[cfg(test)]
mod tests;
