//! Error types for the taskman crate.

use thiserror::Error;

/// Error types for task management and persistence
#[derive(Error, Debug, Clone)]
pub enum TasksError {
    // Task errors
    #[error("Task with ID {id} not found")]
    TaskNotFound { id: u64 },

    // Storage errors
    #[error("Storage error: {reason}")]
    StorageError { reason: String },

    #[error("Failed to read file '{path}': {reason}")]
    FileReadError { path: String, reason: String },

    #[error("Failed to write file '{path}': {reason}")]
    FileWriteError { path: String, reason: String },

    #[error("Failed to parse JSON: {reason}")]
    JsonParseError { reason: String },
}

impl From<std::io::Error> for TasksError {
    fn from(err: std::io::Error) -> Self {
        Self::StorageError {
            reason: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for TasksError {
    fn from(err: serde_json::Error) -> Self {
        Self::JsonParseError {
            reason: err.to_string(),
        }
    }
}

/// Result type alias for task operations
pub type TasksResult<T> = Result<T, TasksError>;
