//! Records grouped by activity tag.
//!
//! # Invariants
//! - Keys keep first-encounter order; the catch-all key comes first whenever
//!   any record exists.
//! - Within a key, records keep the order they were fed in.
//! - A record appears at most once per key, even with repeated tags.

use crate::model::StoredRecord;
use std::collections::HashMap;

/// Synthetic key listing every record regardless of activity.
pub const CATCH_ALL_ACTIVITY: &str = "geral";

/// Insertion-ordered mapping from activity tag to records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityGroups<R> {
    groups: Vec<(String, Vec<R>)>,
    positions: HashMap<String, usize>,
}

impl<R: StoredRecord> ActivityGroups<R> {
    /// Builds the grouping from records already in display order.
    pub fn from_records(records: Vec<R>) -> Self {
        let mut groups = Self {
            groups: Vec::new(),
            positions: HashMap::new(),
        };

        for record in records {
            let mut tags: Vec<String> = Vec::new();
            for tag in record.activities() {
                if tag != CATCH_ALL_ACTIVITY && !tags.contains(tag) {
                    tags.push(tag.clone());
                }
            }

            groups.push(CATCH_ALL_ACTIVITY, record.clone());
            for tag in &tags {
                groups.push(tag, record.clone());
            }
        }

        groups
    }
}

impl<R> ActivityGroups<R> {
    fn push(&mut self, key: &str, record: R) {
        match self.positions.get(key) {
            Some(&position) => self.groups[position].1.push(record),
            None => {
                self.positions.insert(key.to_string(), self.groups.len());
                self.groups.push((key.to_string(), vec![record]));
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&[R]> {
        self.positions
            .get(key)
            .map(|&position| self.groups[position].1.as_slice())
    }

    /// Every record, or an empty slice when nothing is stored.
    pub fn all(&self) -> &[R] {
        self.get(CATCH_ALL_ACTIVITY).unwrap_or(&[])
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|(key, _)| key.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[R])> {
        self.groups
            .iter()
            .map(|(key, records)| (key.as_str(), records.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl<R> IntoIterator for ActivityGroups<R> {
    type Item = (String, Vec<R>);
    type IntoIter = std::vec::IntoIter<(String, Vec<R>)>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.into_iter()
    }
}
