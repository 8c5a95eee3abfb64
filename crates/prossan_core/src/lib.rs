//! Record-management core for the PROSSAN social-assistance registry.
//! This crate owns persistence, querying and shaping of child and adult records.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use config::{StoreConfig, DEFAULT_DATABASE_FILE};
pub use db::{DbError, DbResult, Store};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::adult::{AdultDocument, AdultRecord};
pub use model::child::{ChildDocument, ChildRecord, Guardian};
pub use model::person::{
    age_on, first_name_of, parse_birthdate, Address, Housing, AUTHORIZATION_OPTIONS,
    GENDER_OPTIONS,
};
pub use model::{Fields, RecordId, ShapeError, StoredRecord};
pub use repo::activity_groups::{ActivityGroups, CATCH_ALL_ACTIVITY};
pub use repo::adult_repo::AdultSearchQuery;
pub use repo::record_repo::{
    AdultRepository, ChildRepository, RepoError, RepoResult, Repository,
};
pub use service::registry_service::RegistryService;

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
