//! Repository port for task persistence, lookup, and bulk removal.

use crate::task::domain::{NewTask, Task, TaskId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Task persistence contract.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Persists a new task, assigning it the next identifier.
    ///
    /// Identifier assignment is the repository's responsibility; identifiers
    /// are unique, monotonically increasing, and never reused.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when the backend cannot
    /// complete the insert.
    async fn insert(&self, new_task: &NewTask) -> TaskRepositoryResult<Task>;

    /// Persists changes to an existing task (mutable fields and
    /// `updated_at`; `id` and `created_at` are never rewritten).
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task does not
    /// exist.
    async fn update(&self, task: &Task) -> TaskRepositoryResult<()>;

    /// Finds a task by identifier.
    ///
    /// Returns `None` when the task does not exist. Lookups never mutate the
    /// stored record.
    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>>;

    /// Returns all tasks ordered by `created_at` descending, with `id`
    /// descending as the tie-break so identical timestamps list
    /// deterministically.
    async fn list_all(&self) -> TaskRepositoryResult<Vec<Task>>;

    /// Removes every task and returns the number removed.
    ///
    /// The removal is atomic with respect to concurrent readers: a reader
    /// observes either the full pre-delete set or an empty store, never a
    /// partial view. On failure no records are removed.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when the backend cannot
    /// complete the removal.
    async fn delete_all(&self) -> TaskRepositoryResult<u64>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// The task was not found.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
