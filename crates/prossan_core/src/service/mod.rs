//! Core use-case services.
//!
//! # Responsibility
//! - Offer the calls the desktop handler layer makes, over both record kinds.
//! - Keep UI layers decoupled from store scoping and SQL details.

pub mod registry_service;
