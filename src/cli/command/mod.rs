pub mod migrate;
pub mod seed;

use std::path::PathBuf;

pub use migrate::{migrate, MigrationSummary};
pub use seed::seed;

use crate::error::MittariError;

/// Resolves a database path supplied by flag or environment. Missing
/// configuration aborts before any pipeline work starts.
pub fn require_db(path: Option<PathBuf>, hint: &'static str) -> Result<PathBuf, MittariError> {
    path.ok_or(MittariError::MissingConfiguration(hint))
}

// -- Tests -------------------------------------------------------------------
