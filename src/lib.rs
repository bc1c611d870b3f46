//! Taskstore: a minimal task-tracking record store.
//!
//! This crate provides the task store component of a task tracker: creating,
//! reading, listing, partially updating, and bulk-deleting task records over
//! a relational backend. HTTP routing and process wiring live outside this
//! crate and consume the store through in-process calls.
//!
//! # Architecture
//!
//! Taskstore follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (`PostgreSQL`, memory)
//!
//! # Modules
//!
//! - [`task`]: Task records, lifecycle contract, and persistence

pub mod task;
