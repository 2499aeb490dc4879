// public modules
pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod filtering;
pub mod settings;

// public uses
pub use app::{App, Delimiter, Input, Options};
pub use filtering::{FileFilter, HierarchyFilter, PathFilter};
pub use settings::Settings;
