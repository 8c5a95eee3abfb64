//! Record repository over one table of the document store.
//!
//! # Responsibility
//! - Provide insert/select/update/delete for one record kind.
//! - Provide activity aggregations used by listing pages and report export.
//!
//! # Invariants
//! - Every call acquires its own store scope and releases it before returning.
//! - Listings are newest-first (descending store id).
//! - Update and delete of a missing id are silent no-ops; absence on read is
//!   `Ok(None)`, never an error.
//! - Stored documents that fail hydration are reported, never skipped.

use super::activity_groups::ActivityGroups;
use crate::db::{DbError, Store};
use crate::model::adult::AdultRecord;
use crate::model::child::ChildRecord;
use crate::model::{Fields, RecordId, ShapeError, StoredRecord};
use log::{debug, error, info};
use rusqlite::{params, Connection, OptionalExtension};
use serde_json::Value;
use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::marker::PhantomData;
use std::time::Instant;

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for record persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    /// Stored document is valid JSON but not the record's shape.
    Shape {
        table: &'static str,
        doc_id: RecordId,
        source: ShapeError,
    },
    /// Stored body is not a JSON object.
    InvalidDocument {
        table: &'static str,
        doc_id: RecordId,
        message: String,
    },
    /// Search pattern cannot be compiled.
    InvalidQuery { query: String, message: String },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Shape {
                table,
                doc_id,
                source,
            } => write!(f, "{table} document {doc_id}: {source}"),
            Self::InvalidDocument {
                table,
                doc_id,
                message,
            } => write!(f, "invalid stored {table} document {doc_id}: {message}"),
            Self::InvalidQuery { query, message } => {
                write!(f, "invalid search query `{query}`: {message}")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Shape { source, .. } => Some(source),
            Self::InvalidDocument { .. } | Self::InvalidQuery { .. } => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Store-backed repository for one record kind.
pub struct Repository<'store, R: StoredRecord> {
    store: &'store Store,
    _record: PhantomData<fn() -> R>,
}

pub type ChildRepository<'store> = Repository<'store, ChildRecord>;
pub type AdultRepository<'store> = Repository<'store, AdultRecord>;

impl<'store, R: StoredRecord> Repository<'store, R> {
    pub fn new(store: &'store Store) -> Self {
        Self {
            store,
            _record: PhantomData,
        }
    }

    /// Writes `fields` as a new document and returns the store-assigned id.
    ///
    /// The mapping is stored as given; shape is only checked when read back.
    pub fn insert(&self, fields: &Fields) -> RepoResult<RecordId> {
        let started_at = Instant::now();
        let body = encode_body(fields);

        let outcome = self.store.with_scope(|conn| -> RepoResult<RecordId> {
            conn.execute(
                &format!("INSERT INTO {} (body) VALUES (?1);", R::TABLE),
                [body.as_str()],
            )?;
            Ok(conn.last_insert_rowid())
        });

        match &outcome {
            Ok(doc_id) => info!(
                "event=record_insert module=repo status=ok table={} doc_id={} duration_ms={}",
                R::TABLE,
                doc_id,
                started_at.elapsed().as_millis()
            ),
            Err(err) => error!(
                "event=record_insert module=repo status=error table={} duration_ms={} error={}",
                R::TABLE,
                started_at.elapsed().as_millis(),
                err
            ),
        }
        outcome
    }

    /// Loads one record; `Ok(None)` when no document has this id.
    pub fn select(&self, id: RecordId) -> RepoResult<Option<R>> {
        self.store.with_scope(|conn| -> RepoResult<Option<R>> {
            let body: Option<String> = conn
                .query_row(
                    &format!("SELECT body FROM {} WHERE doc_id = ?1;", R::TABLE),
                    [id],
                    |row| row.get(0),
                )
                .optional()?;

            body.map(|body| hydrate_body::<R>(id, &body)).transpose()
        })
    }

    /// Loads every record, most recently inserted first.
    pub fn select_all(&self) -> RepoResult<Vec<R>> {
        let started_at = Instant::now();
        let documents = self
            .store
            .with_scope(|conn| load_documents(conn, R::TABLE))?;

        let records = documents
            .into_iter()
            .map(|(doc_id, body)| hydrate_body::<R>(doc_id, &body))
            .collect::<RepoResult<Vec<R>>>()?;

        debug!(
            "event=record_list module=repo status=ok table={} count={} duration_ms={}",
            R::TABLE,
            records.len(),
            started_at.elapsed().as_millis()
        );
        Ok(records)
    }

    /// Merges `fields` into the stored document; keys not given stay untouched.
    ///
    /// A missing id is a silent no-op.
    pub fn update(&self, id: RecordId, fields: &Fields) -> RepoResult<()> {
        let started_at = Instant::now();
        let changed = self.store.with_scope(|conn| -> RepoResult<bool> {
            let tx = conn.transaction()?;
            let body: Option<String> = tx
                .query_row(
                    &format!("SELECT body FROM {} WHERE doc_id = ?1;", R::TABLE),
                    [id],
                    |row| row.get(0),
                )
                .optional()?;
            let Some(body) = body else {
                return Ok(false);
            };

            let mut document = parse_object(R::TABLE, id, &body)?;
            for (key, value) in fields {
                document.insert(key.clone(), value.clone());
            }

            tx.execute(
                &format!("UPDATE {} SET body = ?1 WHERE doc_id = ?2;", R::TABLE),
                params![encode_body(&document), id],
            )?;
            tx.commit()?;
            Ok(true)
        })?;

        info!(
            "event=record_update module=repo status={} table={} doc_id={} field_count={} duration_ms={}",
            if changed { "ok" } else { "noop" },
            R::TABLE,
            id,
            fields.len(),
            started_at.elapsed().as_millis()
        );
        Ok(())
    }

    /// Removes the document with this id; a missing id is a silent no-op.
    pub fn delete(&self, id: RecordId) -> RepoResult<()> {
        let started_at = Instant::now();
        let removed = self.store.with_scope(|conn| -> RepoResult<usize> {
            let removed = conn.execute(
                &format!("DELETE FROM {} WHERE doc_id = ?1;", R::TABLE),
                [id],
            )?;
            Ok(removed)
        })?;

        info!(
            "event=record_delete module=repo status={} table={} doc_id={} duration_ms={}",
            if removed > 0 { "ok" } else { "noop" },
            R::TABLE,
            id,
            started_at.elapsed().as_millis()
        );
        Ok(())
    }

    /// Number of stored documents.
    pub fn count(&self) -> RepoResult<u64> {
        self.store.with_scope(|conn| -> RepoResult<u64> {
            let count = conn.query_row(
                &format!("SELECT COUNT(*) FROM {};", R::TABLE),
                [],
                |row| row.get::<_, i64>(0),
            )?;
            Ok(u64::try_from(count).unwrap_or_default())
        })
    }

    /// Groups all records under the catch-all key and under each own activity.
    pub fn group_by_activity(&self) -> RepoResult<ActivityGroups<R>> {
        Ok(ActivityGroups::from_records(self.select_all()?))
    }

    /// Union of every record's activity tags.
    pub fn distinct_activities(&self) -> RepoResult<BTreeSet<String>> {
        let activities = self
            .select_all()?
            .iter()
            .flat_map(|record| record.activities().iter().cloned())
            .collect();
        Ok(activities)
    }
}

fn load_documents(
    conn: &Connection,
    table: &str,
) -> RepoResult<Vec<(RecordId, String)>> {
    let mut stmt = conn.prepare(&format!(
        "SELECT doc_id, body FROM {table} ORDER BY doc_id DESC;"
    ))?;
    let rows = stmt.query_map([], |row| Ok((row.get(0)?, row.get(1)?)))?;
    let documents = rows.collect::<Result<Vec<(RecordId, String)>, _>>()?;
    Ok(documents)
}

fn parse_object(table: &'static str, doc_id: RecordId, body: &str) -> RepoResult<Fields> {
    match serde_json::from_str::<Value>(body) {
        Ok(Value::Object(fields)) => Ok(fields),
        Ok(_) => Err(RepoError::InvalidDocument {
            table,
            doc_id,
            message: "document body is not a JSON object".to_string(),
        }),
        Err(err) => Err(RepoError::InvalidDocument {
            table,
            doc_id,
            message: err.to_string(),
        }),
    }
}

fn hydrate_fields<R: StoredRecord>(doc_id: RecordId, fields: Fields) -> RepoResult<R> {
    R::hydrate(doc_id, fields).map_err(|source| RepoError::Shape {
        table: R::TABLE,
        doc_id,
        source,
    })
}

fn hydrate_body<R: StoredRecord>(doc_id: RecordId, body: &str) -> RepoResult<R> {
    let fields = parse_object(R::TABLE, doc_id, body)?;
    hydrate_fields(doc_id, fields)
}

fn encode_body(fields: &Fields) -> String {
    // A JSON map always serializes.
    Value::Object(fields.clone()).to_string()
}
