//! Glob matching for file names.
//!
//! Two wildcards are recognized:
//! - `?` matches exactly one character
//! - `*` matches zero or more characters
//!
//! Any other character matches itself. A pattern always has to account for the
//! whole input, so `*.txt` does not match `file.txt.bak`.
//!
//! ```
//! use wildcard::{Mode, compile, is_match};
//!
//! let sources = compile("*.rs;*.toml", Mode::Multi);
//! assert!(sources.matches("main.rs"));
//! assert!(sources.matches("Cargo.toml"));
//! assert!(!sources.matches("README.md"));
//!
//! assert!(is_match("file.txt;", "*;", Mode::Single));
//! ```

mod pattern;
mod set;
mod utf8;

pub use pattern::Pattern;
pub use set::{DELIMITER, Mode, PatternSet, compile, is_match};
