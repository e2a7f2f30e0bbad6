//! Error types for graph construction and CPM analysis.

use thiserror::Error;

/// Errors that abort a CPM analysis.
///
/// Every variant is structural: the same input always fails the same way, so
/// no partial schedule is ever returned alongside an error.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CpmError {
    /// The topological sort could not order every task.
    #[error("Circular dependency detected: ordered {ordered} of {total} tasks, unresolved: {unresolved:?}")]
    CycleDetected {
        ordered: usize,
        total: usize,
        unresolved: Vec<String>,
    },
    /// An edge names a task that is not in the task set.
    #[error("Unknown task referenced by edge: {0}")]
    UnknownTask(String),
    #[error("Duplicate task name: {0}")]
    DuplicateTask(String),
    /// Durations must be finite and non-negative.
    #[error("Invalid duration for task {task}: {duration}")]
    InvalidDuration { task: String, duration: f64 },
    #[error("Invalid graph description: {0}")]
    InvalidInput(String),
}

impl From<serde_json::Error> for CpmError {
    fn from(err: serde_json::Error) -> Self {
        CpmError::InvalidInput(err.to_string())
    }
}
