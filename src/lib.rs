pub mod app;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod query;
#[cfg(test)]
pub mod test_utils;

pub use error::{Result, VsError};
pub use query::SkillQueries;

/// Package version from Cargo.toml.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
