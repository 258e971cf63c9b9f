//! Storage trait definitions.

use async_trait::async_trait;

use crate::entities::TaskStore;
use crate::errors::TasksResult;

/// Storage interface for task persistence
#[async_trait]
pub trait Storage: Send + Sync {
    /// Load the persisted store, initializing a fresh one when absent
    async fn load(&self) -> TasksResult<TaskStore>;

    /// Persist the full store, overwriting the previous state wholesale
    async fn save(&self, store: &TaskStore) -> TasksResult<()>;
}
