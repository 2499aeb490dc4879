use std::fmt;

use crate::pattern::Pattern;

/// Separates globs in [`Mode::Multi`] pattern lists.
pub const DELIMITER: char = ';';

// ---

/// Tells how a pattern string is split into globs.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// The whole string is a single glob, [`DELIMITER`] is an ordinary character.
    #[default]
    Single,
    /// The string is a list of globs separated by [`DELIMITER`], empty items are dropped.
    Multi,
}

// ---

/// A set of compiled globs which matches text if any of them matches it.
///
/// Built once from a pattern string and reused for any number of checks.
/// A blank pattern string yields an empty set that matches nothing.
///
/// # Examples
///
/// ```
/// use wildcard::{Mode, PatternSet};
///
/// let set = PatternSet::new("*.cs;;*.txt;", Mode::Multi);
/// assert_eq!(set.len(), 2);
/// assert!(set.matches("file.txt"));
///
/// assert!(PatternSet::new(";", Mode::Multi).is_empty());
/// assert!(PatternSet::new(";", Mode::Single).matches(";"));
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PatternSet {
    patterns: Vec<Pattern>,
}

impl PatternSet {
    /// Compiles `pattern` according to `mode`.
    pub fn new(pattern: &str, mode: Mode) -> Self {
        Self {
            patterns: globs(pattern, mode).map(Pattern::new).collect(),
        }
    }

    /// Tests whether the whole `text` matches at least one of the globs.
    #[inline]
    pub fn matches(&self, text: &str) -> bool {
        self.patterns.iter().any(|p| p.matches(text))
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

impl fmt::Display for PatternSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, pattern) in self.patterns.iter().enumerate() {
            if i != 0 {
                write!(f, "{}", DELIMITER)?;
            }
            write!(f, "{}", pattern)?;
        }
        Ok(())
    }
}

// ---

/// Compiles `pattern` into a [`PatternSet`].
pub fn compile(pattern: &str, mode: Mode) -> PatternSet {
    PatternSet::new(pattern, mode)
}

/// Tests `input` against `pattern` without keeping the compiled globs.
///
/// The pattern is compiled on every call, prefer [`compile`] for repeated checks.
pub fn is_match(input: &str, pattern: &str, mode: Mode) -> bool {
    globs(pattern, mode).any(|glob| Pattern::new(glob).matches(input))
}

fn globs(pattern: &str, mode: Mode) -> impl Iterator<Item = &str> {
    let pattern = if pattern.trim().is_empty() { "" } else { pattern };
    let single = match mode {
        Mode::Single => Some(pattern).filter(|p| !p.is_empty()),
        Mode::Multi => None,
    };
    let multi = match mode {
        Mode::Single => None,
        Mode::Multi => Some(pattern.split(DELIMITER).filter(|p| !p.is_empty())),
    };
    single.into_iter().chain(multi.into_iter().flatten())
}
