//! Tasks domain facade.

use std::sync::Arc;

use crate::entities::{Statistics, Task, TaskStore};
use crate::errors::TasksResult;
use crate::storage::Storage;

/// High-level task operations over an in-memory store.
///
/// The store is loaded once at startup and persisted after every mutation,
/// so the backing file always reflects the last successful operation.
pub struct TasksDomain {
    store: TaskStore,
    storage: Arc<dyn Storage>,
}

impl TasksDomain {
    /// Load the persisted store and wrap it in a domain facade
    pub async fn open(storage: Arc<dyn Storage>) -> TasksResult<Self> {
        let store = storage.load().await?;
        Ok(Self { store, storage })
    }

    /// Add a new task and persist the store. Empty category or priority
    /// fall back to the defaults.
    pub async fn add_task(
        &mut self,
        title: &str,
        category: &str,
        priority: &str,
    ) -> TasksResult<Task> {
        let task = self.store.add(title, category, priority).clone();
        self.storage.save(&self.store).await?;
        Ok(task)
    }

    /// Mark a task as completed and persist the store
    pub async fn complete_task(&mut self, id: u64) -> TasksResult<()> {
        self.store.complete(id)?;
        self.storage.save(&self.store).await
    }

    /// Remove a task and persist the store. Returns the removed task.
    pub async fn remove_task(&mut self, id: u64) -> TasksResult<Task> {
        let task = self.store.remove(id)?;
        self.storage.save(&self.store).await?;
        Ok(task)
    }

    /// Look up a task by id
    pub fn get_task(&self, id: u64) -> Option<&Task> {
        self.store.get(id)
    }

    /// All tasks in store order
    pub fn list_tasks(&self) -> &[Task] {
        self.store.tasks()
    }

    /// Tasks matching a case-sensitive substring search over title,
    /// category, and priority. An empty term matches nothing.
    pub fn search_tasks(&self, term: &str) -> Vec<&Task> {
        self.store.search(term)
    }

    /// Aggregate statistics over the full task set
    pub fn stats(&self) -> Statistics {
        self.store.stats()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::TasksError;
    use crate::storage::FileStorage;
    use tempfile::TempDir;

    async fn setup() -> (TempDir, TasksDomain) {
        let temp_dir = TempDir::new().unwrap();
        let storage = Arc::new(FileStorage::new(temp_dir.path().join("tasks.json")));
        let domain = TasksDomain::open(storage).await.unwrap();
        (temp_dir, domain)
    }

    #[tokio::test]
    async fn test_add_and_list_tasks() {
        let (_temp, mut domain) = setup().await;

        domain.add_task("Task 1", "", "").await.unwrap();
        domain.add_task("Task 2", "work", "P1").await.unwrap();

        let tasks = domain.list_tasks();
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[1].category, "work");
    }

    #[tokio::test]
    async fn test_mutations_survive_a_reload() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("tasks.json");

        let storage = Arc::new(FileStorage::new(&path));
        let mut domain = TasksDomain::open(storage).await.unwrap();
        domain.add_task("Buy milk", "errands", "P1").await.unwrap();
        domain.add_task("Walk dog", "", "").await.unwrap();
        domain.complete_task(1).await.unwrap();
        domain.remove_task(2).await.unwrap();

        // A second session over the same file sees the same state
        let storage = Arc::new(FileStorage::new(&path));
        let mut reopened = TasksDomain::open(storage).await.unwrap();
        let tasks = reopened.list_tasks();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].id, 1);
        assert!(tasks[0].completed);

        // next_id is preserved across sessions
        let task = reopened.add_task("Third", "", "").await.unwrap();
        assert_eq!(task.id, 3);
    }

    #[tokio::test]
    async fn test_complete_missing_task_is_not_found() {
        let (_temp, mut domain) = setup().await;

        let err = domain.complete_task(5).await.unwrap_err();
        assert!(matches!(err, TasksError::TaskNotFound { id: 5 }));
    }

    #[tokio::test]
    async fn test_search_and_stats_are_pure_reads() {
        let (_temp, mut domain) = setup().await;

        domain.add_task("Buy milk", "errands", "P1").await.unwrap();
        domain.complete_task(1).await.unwrap();

        let found = domain.search_tasks("errands");
        assert_eq!(found.len(), 1);

        let stats = domain.stats();
        assert_eq!(stats.total, 1);
        assert_eq!(stats.completed, 1);
        assert!((stats.completion_rate - 100.0).abs() < 0.001);
    }
}
