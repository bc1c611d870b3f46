//! Domain model for the task store.
//!
//! The task domain models record creation with defaults, presence-aware
//! partial updates, and timestamp discipline while keeping all
//! infrastructure concerns outside of the domain boundary.

mod error;
mod ids;
mod status;
mod task;

pub use error::TaskDomainError;
pub use ids::TaskId;
pub use status::TaskStatus;
pub use task::{NewTask, PersistedTaskData, Task, TaskPatch};
