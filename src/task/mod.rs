//! Task record store: creation, retrieval, listing, partial update, and
//! bulk removal.
//!
//! The store owns the task entity's schema and field-level contract:
//! creation defaults (`"To Do"` status, empty description, paired
//! timestamps), presence-aware partial updates that always refresh
//! `updated_at`, newest-first listing, and an atomic delete-all that reports
//! how many records it removed. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
