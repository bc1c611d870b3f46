//! Workflow status value for task records.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Free-form workflow status of a task.
///
/// The store enforces no closed set of values and no transition rules: any
/// string is accepted, and callers own whatever workflow conventions they
/// layer on top. New tasks default to [`TaskStatus::TO_DO`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskStatus(String);

impl TaskStatus {
    /// Status assigned to newly created tasks.
    pub const TO_DO: &'static str = "To Do";

    /// Creates a status from any string value.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the status as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for TaskStatus {
    fn default() -> Self {
        Self(Self::TO_DO.to_owned())
    }
}

impl AsRef<str> for TaskStatus {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl From<&str> for TaskStatus {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for TaskStatus {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
