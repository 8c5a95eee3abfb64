//! Registry use-case service.
//!
//! # Invariants
//! - Service APIs never bypass repository persistence contracts.
//! - The service supplies data only; report layout belongs to callers.

use crate::config::StoreConfig;
use crate::db::Store;
use crate::model::adult::{AdultDocument, AdultRecord};
use crate::model::child::{ChildDocument, ChildRecord};
use crate::model::{Fields, RecordId};
use crate::repo::activity_groups::ActivityGroups;
use crate::repo::adult_repo::AdultSearchQuery;
use crate::repo::record_repo::{AdultRepository, ChildRepository, RepoResult};
use std::collections::BTreeSet;

/// Entry point for the children and adults pages.
pub struct RegistryService {
    store: Store,
}

impl RegistryService {
    pub fn new(config: &StoreConfig) -> Self {
        Self {
            store: Store::new(config),
        }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn children(&self) -> ChildRepository<'_> {
        ChildRepository::new(&self.store)
    }

    pub fn adults(&self) -> AdultRepository<'_> {
        AdultRepository::new(&self.store)
    }

    /// Registers a child from a completed form.
    pub fn create_child(&self, document: &ChildDocument) -> RepoResult<RecordId> {
        self.children().insert(&document.to_fields())
    }

    pub fn get_child(&self, id: RecordId) -> RepoResult<Option<ChildRecord>> {
        self.children().select(id)
    }

    /// Children for the listing table, newest first.
    pub fn list_children(&self) -> RepoResult<Vec<ChildRecord>> {
        self.children().select_all()
    }

    /// Applies edited form fields to a child; unknown ids are ignored.
    pub fn update_child(&self, id: RecordId, fields: &Fields) -> RepoResult<()> {
        self.children().update(id, fields)
    }

    /// Re-submits a whole edited record under its own id.
    pub fn save_child(&self, record: &ChildRecord) -> RepoResult<()> {
        self.children().update(record.id(), &record.to_fields())
    }

    pub fn delete_child(&self, id: RecordId) -> RepoResult<()> {
        self.children().delete(id)
    }

    /// Children grouped per activity, one sheet per key when exported.
    pub fn children_by_activity(&self) -> RepoResult<ActivityGroups<ChildRecord>> {
        self.children().group_by_activity()
    }

    pub fn child_activities(&self) -> RepoResult<BTreeSet<String>> {
        self.children().distinct_activities()
    }

    /// Registers an adult from a completed form.
    pub fn create_adult(&self, document: &AdultDocument) -> RepoResult<RecordId> {
        self.adults().insert(&document.to_fields())
    }

    pub fn get_adult(&self, id: RecordId) -> RepoResult<Option<AdultRecord>> {
        self.adults().select(id)
    }

    pub fn list_adults(&self) -> RepoResult<Vec<AdultRecord>> {
        self.adults().select_all()
    }

    pub fn search_adults(&self, query: &AdultSearchQuery) -> RepoResult<Vec<AdultRecord>> {
        self.adults().search(query)
    }

    pub fn update_adult(&self, id: RecordId, fields: &Fields) -> RepoResult<()> {
        self.adults().update(id, fields)
    }

    pub fn save_adult(&self, record: &AdultRecord) -> RepoResult<()> {
        self.adults().update(record.id(), &record.to_fields())
    }

    pub fn delete_adult(&self, id: RecordId) -> RepoResult<()> {
        self.adults().delete(id)
    }

    pub fn adults_by_activity(&self) -> RepoResult<ActivityGroups<AdultRecord>> {
        self.adults().group_by_activity()
    }

    pub fn adult_activities(&self) -> RepoResult<BTreeSet<String>> {
        self.adults().distinct_activities()
    }
}
