//! Service layer exposing the five task store operations.

use crate::task::{
    domain::{NewTask, Task, TaskDomainError, TaskId, TaskPatch},
    ports::{TaskRepository, TaskRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    title: String,
    description: Option<String>,
    assignee: Option<String>,
}

impl CreateTaskRequest {
    /// Creates a request with the required title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            assignee: None,
        }
    }

    /// Sets the task description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the task assignee.
    #[must_use]
    pub fn with_assignee(mut self, assignee: impl Into<String>) -> Self {
        self.assignee = Some(assignee.into());
        self
    }
}

/// Service-level errors for task store operations.
///
/// Variants map one-to-one onto the boundary's failure statuses: validation
/// failures are client errors, missing identifiers are not-found errors, and
/// storage failures are server errors.
#[derive(Debug, Error)]
pub enum TaskStoreError {
    /// Caller input failed a precondition.
    #[error(transparent)]
    Validation(#[from] TaskDomainError),

    /// The referenced task does not exist.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// The persistence backend failed.
    #[error(transparent)]
    Storage(TaskRepositoryError),
}

impl From<TaskRepositoryError> for TaskStoreError {
    fn from(err: TaskRepositoryError) -> Self {
        match err {
            TaskRepositoryError::NotFound(id) => Self::NotFound(id),
            other @ TaskRepositoryError::Persistence(_) => Self::Storage(other),
        }
    }
}

/// Result type for task store operations.
pub type TaskStoreResult<T> = Result<T, TaskStoreError>;

/// Task store orchestration service.
///
/// Owns the task lifecycle contract: creation defaults, partial-update
/// semantics, list ordering, and bulk removal. Constructed once at process
/// start and handed to the dispatch layer by reference; there is no ambient
/// global store.
pub struct TaskStoreService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

// A derived Clone would require `R: Clone, C: Clone`; only the handles need
// cloning, so the impl is written out.
impl<R, C> Clone for TaskStoreService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<R, C> TaskStoreService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task store service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Creates a task with defaults applied and returns the full record.
    ///
    /// The repository assigns the identifier; `created_at` and `updated_at`
    /// are stamped from a single clock reading.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Validation`] when the title is empty or
    /// whitespace-only, or [`TaskStoreError::Storage`] when persistence
    /// fails.
    pub async fn create_task(&self, request: CreateTaskRequest) -> TaskStoreResult<Task> {
        let mut new_task = NewTask::new(request.title, &*self.clock)?;
        if let Some(description) = request.description {
            new_task = new_task.with_description(description);
        }
        if let Some(assignee) = request.assignee {
            new_task = new_task.with_assignee(assignee);
        }

        let task = self.repository.insert(&new_task).await?;
        Ok(task)
    }

    /// Retrieves a task by identifier. Reads never mutate the record.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::NotFound`] when no task has the identifier,
    /// or [`TaskStoreError::Storage`] when the lookup fails.
    pub async fn get_task(&self, id: TaskId) -> TaskStoreResult<Task> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(TaskStoreError::NotFound(id))
    }

    /// Returns all tasks, most recently created first.
    ///
    /// Ties on `created_at` order by `id` descending for determinism.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Storage`] when the listing fails.
    pub async fn list_tasks(&self) -> TaskStoreResult<Vec<Task>> {
        let tasks = self.repository.list_all().await?;
        Ok(tasks)
    }

    /// Applies a partial update and returns the updated record.
    ///
    /// Fields present in the patch replace stored values; absent fields are
    /// kept. `updated_at` is refreshed even when the patch is empty; `id`
    /// and `created_at` never change.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::NotFound`] when no task has the identifier,
    /// or [`TaskStoreError::Storage`] when persistence fails.
    pub async fn update_task(&self, id: TaskId, patch: TaskPatch) -> TaskStoreResult<Task> {
        let mut task = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(TaskStoreError::NotFound(id))?;

        task.apply(patch, &*self.clock);
        self.repository.update(&task).await?;
        Ok(task)
    }

    /// Removes every task and returns the number removed.
    ///
    /// Returns 0 when the store was already empty. The removal is atomic: on
    /// failure no records are removed.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Storage`] when the backend cannot complete
    /// the removal.
    pub async fn delete_all_tasks(&self) -> TaskStoreResult<u64> {
        let removed = self.repository.delete_all().await?;
        Ok(removed)
    }
}
