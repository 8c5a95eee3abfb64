//! Scoped, per-operation access to the on-disk store.
//!
//! # Responsibility
//! - Own the configured store location.
//! - Open the store for exactly one logical operation and close it afterwards.
//!
//! # Invariants
//! - The connection never outlives [`Store::with_scope`].
//! - The connection is closed on both the success and the error path.
//! - No lock is taken beyond SQLite's own file locking; one writer at a time
//!   is assumed.

use super::open::open_store;
use super::{DbError, DbResult};
use crate::config::StoreConfig;
use log::{debug, warn};
use rusqlite::Connection;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Handle to the shared store file.
///
/// Holding a `Store` does not keep the file open; every operation acquires a
/// fresh connection through [`Store::with_scope`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Store {
    path: PathBuf,
}

impl Store {
    pub fn new(config: &StoreConfig) -> Self {
        Self {
            path: config.database_path().to_path_buf(),
        }
    }

    /// Location of the store file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Runs `op` against a freshly opened connection and releases it afterwards.
    ///
    /// Errors from `op` are returned unchanged. When `op` succeeds, a failure to
    /// close the connection is reported as the operation's error.
    pub fn with_scope<T, E, F>(&self, op: F) -> Result<T, E>
    where
        E: From<DbError>,
        F: FnOnce(&mut Connection) -> Result<T, E>,
    {
        let started_at = Instant::now();
        let mut conn = open_store(&self.path)?;
        let outcome = op(&mut conn);

        match outcome {
            Ok(value) => {
                release(conn, started_at)?;
                Ok(value)
            }
            Err(err) => {
                // Dropping the connection closes it; the operation error wins.
                drop(conn);
                debug!(
                    "event=store_release module=db status=aborted duration_ms={}",
                    started_at.elapsed().as_millis()
                );
                Err(err)
            }
        }
    }
}

fn release(conn: Connection, started_at: Instant) -> DbResult<()> {
    match conn.close() {
        Ok(()) => {
            debug!(
                "event=store_release module=db status=ok duration_ms={}",
                started_at.elapsed().as_millis()
            );
            Ok(())
        }
        Err((_conn, err)) => {
            warn!(
                "event=store_release module=db status=error duration_ms={} error={}",
                started_at.elapsed().as_millis(),
                err
            );
            Err(err.into())
        }
    }
}
