//! File and command-line glue around `secret_core`.

pub mod cmd;
pub mod loader;

pub use loader::{load_share_set, parse_share_set, LoadError, LoadResult};
