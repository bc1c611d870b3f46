//! Unit tests for the task store.

mod service_tests;
mod support;
