/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust request structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};

use super::models::Task;

/// Request body for create and full-replace operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskPayload {
    pub label: String,
    pub is_done: bool,
}

impl TaskPayload {
    /// Payload for a freshly created task (not done yet).
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            is_done: false,
        }
    }
}

impl From<&Task> for TaskPayload {
    fn from(task: &Task) -> Self {
        Self {
            label: task.label.clone(),
            is_done: task.is_done,
        }
    }
}
