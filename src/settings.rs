// std imports
use std::include_str;
use std::path::PathBuf;

// third-party imports
use config::{Config, File, FileFormat};
use serde::Deserialize;

// local imports
use crate::error::Result;

// ---

static DEFAULT_SETTINGS: &str = include_str!("../etc/defaults/config.yaml");

// ---

/// File selection settings.
///
/// Patterns use `?` and `*` wildcards and may hold several globs separated by `;`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Settings {
    /// Files to select, a blank value selects all files.
    pub include: String,
    /// Files to skip, takes priority over `include`.
    pub exclude: String,
    /// Skip T4 text templates and everything nested under them.
    pub exclude_generated_t4: bool,
}

impl Settings {
    /// Loads settings from the embedded defaults overlaid by `sources` in order.
    pub fn load<I>(sources: I) -> Result<Self>
    where
        I: IntoIterator<Item = Source>,
    {
        let mut builder = Config::builder().add_source(File::from_str(DEFAULT_SETTINGS, FileFormat::Yaml));

        for source in sources {
            log::debug!("add configuration source: {source:?}");
            builder = match source {
                Source::File(path) => builder.add_source(File::from(path).required(true)),
                Source::Named(name) => builder.add_source(File::with_name(&name).required(false)),
            };
        }

        Ok(builder.build()?.try_deserialize()?)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            include: "*.*".into(),
            exclude: String::new(),
            exclude_generated_t4: true,
        }
    }
}

// ---

/// A configuration source layered on top of the defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// A file that must exist, format is detected by its extension.
    File(PathBuf),
    /// A file name without extension, any supported extension is tried, skipped if not found.
    Named(String),
}

#[cfg(test)]
mod tests;
