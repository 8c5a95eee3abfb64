//! Record shapes for the two registry categories.
//!
//! # Responsibility
//! - Define the persisted document shape of children and adults.
//! - Hydrate stored documents into records with derived fields filled in.
//!
//! # Invariants
//! - Record ids come from the store only; callers never supply them.
//! - First names are derived from the name on every construction and assignment.
//! - Neither the id nor the first name is part of the persisted document.

use serde_json::{Map, Value};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod adult;
pub mod child;
pub mod person;

/// Store-assigned document identifier.
pub type RecordId = i64;

/// Flat field-value mapping, as written to and read from the store.
pub type Fields = Map<String, Value>;

/// A stored document did not match the expected record shape.
#[derive(Debug)]
pub struct ShapeError(serde_json::Error);

impl ShapeError {
    /// Deserializer report naming the offending key.
    pub fn message(&self) -> String {
        self.0.to_string()
    }
}

impl Display for ShapeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "document does not match record shape: {}", self.0)
    }
}

impl Error for ShapeError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.0)
    }
}

impl From<serde_json::Error> for ShapeError {
    fn from(value: serde_json::Error) -> Self {
        Self(value)
    }
}

/// A record kind persisted in its own table of the shared store.
pub trait StoredRecord: Clone + Sized {
    /// Table holding this kind's documents.
    const TABLE: &'static str;

    /// Builds a record from a stored document, failing on any shape mismatch.
    fn hydrate(id: RecordId, fields: Fields) -> Result<Self, ShapeError>;

    fn id(&self) -> RecordId;

    /// Activity tags in stored order, duplicates included.
    fn activities(&self) -> &[String];
}

pub(crate) fn document_to_fields<T: serde::Serialize>(document: &T) -> Fields {
    match serde_json::to_value(document) {
        Ok(Value::Object(fields)) => fields,
        // Document structs are plain string/sequence holders; serialization
        // to a JSON object cannot fail for them.
        _ => Fields::new(),
    }
}
