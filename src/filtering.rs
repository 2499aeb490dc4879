// std imports
use std::{ffi::OsStr, path::Path};

// third-party imports
use wildcard::{Mode, PatternSet};

// local imports
use crate::settings::Settings;

// ---

const T4_TEMPLATE_EXTENSION: &str = "tt";

// ---

/// Selects file names by inclusion and exclusion patterns.
///
/// Exclusion takes priority over inclusion. A blank inclusion pattern includes
/// every name, a blank exclusion pattern excludes none.
#[derive(Debug, Clone, Default)]
pub struct FileFilter {
    include: Option<PatternSet>,
    exclude: Option<PatternSet>,
}

impl FileFilter {
    pub fn new(include: &str, exclude: &str) -> Self {
        let include = compile(include);
        let exclude = compile(exclude);
        log::debug!(
            "include {:?}, exclude {:?}",
            include.as_ref().map_or_else(|| "*".into(), |p| p.to_string()),
            exclude.as_ref().map_or_else(String::new, |p| p.to_string()),
        );
        Self { include, exclude }
    }

    pub fn accepts(&self, name: &str) -> bool {
        let included = self.include.as_ref().is_none_or(|p| p.matches(name));
        let excluded = self.exclude.as_ref().is_some_and(|p| p.matches(name));
        included && !excluded
    }
}

fn compile(pattern: &str) -> Option<PatternSet> {
    if pattern.trim().is_empty() {
        None
    } else {
        Some(PatternSet::new(pattern, Mode::Multi))
    }
}

// ---

/// Skips paths going through generated code containers.
#[derive(Debug, Clone, Copy, Default)]
pub struct HierarchyFilter {
    exclude_generated_t4: bool,
}

impl HierarchyFilter {
    pub fn new(exclude_generated_t4: bool) -> Self {
        Self { exclude_generated_t4 }
    }

    pub fn accepts(&self, path: &Path) -> bool {
        if !self.exclude_generated_t4 {
            return true;
        }

        !path
            .iter()
            .any(|component| Path::new(component).extension() == Some(OsStr::new(T4_TEMPLATE_EXTENSION)))
    }
}

// ---

/// Combines [`HierarchyFilter`] applied to the whole path and [`FileFilter`] applied to its file name.
#[derive(Debug, Clone, Default)]
pub struct PathFilter {
    hierarchy: HierarchyFilter,
    files: FileFilter,
}

impl PathFilter {
    pub fn new(hierarchy: HierarchyFilter, files: FileFilter) -> Self {
        Self { hierarchy, files }
    }

    pub fn accepts(&self, path: &Path) -> bool {
        if !self.hierarchy.accepts(path) {
            log::trace!("{}: rejected by hierarchy filter", path.display());
            return false;
        }

        let Some(name) = path.file_name() else {
            log::trace!("{}: no file name", path.display());
            return false;
        };

        let accepted = self.files.accepts(&name.to_string_lossy());
        log::trace!(
            "{}: {} by file filter",
            path.display(),
            if accepted { "accepted" } else { "rejected" }
        );
        accepted
    }
}

impl From<&Settings> for PathFilter {
    fn from(settings: &Settings) -> Self {
        Self::new(
            HierarchyFilter::new(settings.exclude_generated_t4),
            FileFilter::new(&settings.include, &settings.exclude),
        )
    }
}
