//! Store location configuration.
//!
//! # Invariants
//! - A configured path is never empty.

use crate::db::{DbError, DbResult};
use std::path::{Path, PathBuf};

/// File name used when no explicit store path is configured.
pub const DEFAULT_DATABASE_FILE: &str = "database.db";

/// Where the record store lives on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    database_path: PathBuf,
}

impl StoreConfig {
    /// Creates a configuration pointing at `database_path`.
    ///
    /// # Errors
    /// - Returns `DbError::InvalidConfig` when the path is empty or blank.
    pub fn new(database_path: impl Into<PathBuf>) -> DbResult<Self> {
        let database_path = database_path.into();
        let is_blank = database_path
            .to_str()
            .map_or(database_path.as_os_str().is_empty(), |text| {
                text.trim().is_empty()
            });
        if is_blank {
            return Err(DbError::InvalidConfig(
                "database path cannot be empty".to_string(),
            ));
        }
        Ok(Self { database_path })
    }

    pub fn database_path(&self) -> &Path {
        &self.database_path
    }
}

impl Default for StoreConfig {
    /// Store file next to the working directory, as the desktop app ships it.
    fn default() -> Self {
        Self {
            database_path: PathBuf::from(DEFAULT_DATABASE_FILE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{StoreConfig, DEFAULT_DATABASE_FILE};
    use crate::db::DbError;
    use std::path::Path;

    #[test]
    fn default_points_at_working_directory_file() {
        let config = StoreConfig::default();
        assert_eq!(config.database_path(), Path::new(DEFAULT_DATABASE_FILE));
    }

    #[test]
    fn new_rejects_blank_path() {
        let err = StoreConfig::new("   ").unwrap_err();
        assert!(matches!(err, DbError::InvalidConfig(_)));
    }

    #[test]
    fn new_keeps_given_path() {
        let config = StoreConfig::new("/tmp/prossan/records.db").unwrap();
        assert_eq!(
            config.database_path(),
            Path::new("/tmp/prossan/records.db")
        );
    }
}
