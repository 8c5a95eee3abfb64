//! Repository layer over the record store.
//!
//! # Responsibility
//! - Be the only path that persists, retrieves, searches and aggregates records.
//! - Keep SQL and document encoding inside the core persistence boundary.
//!
//! # Invariants
//! - Storage and shape failures propagate unchanged; nothing is retried.

pub mod activity_groups;
pub mod adult_repo;
pub mod record_repo;
