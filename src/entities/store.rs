//! In-memory task store.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::{Statistics, Task};
use crate::errors::{TasksError, TasksResult};

/// Ordered collection of tasks plus the id counter.
///
/// Insertion order is display and iteration order. Ids are assigned
/// monotonically and never reused, even after deletion. All operations are
/// pure in-memory mutations; persistence is the caller's responsibility.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskStore {
    /// Tasks in insertion order
    tasks: Vec<Task>,

    /// Next id to assign, starts at 1 and only ever grows
    #[serde(rename = "next_id")]
    next_id: u64,
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            next_id: 1,
        }
    }

    /// Next id that will be assigned
    pub fn next_id(&self) -> u64 {
        self.next_id
    }

    /// Append a new pending task. Empty category or priority fall back to
    /// the defaults. Never fails.
    pub fn add(&mut self, title: &str, category: &str, priority: &str) -> &Task {
        let task = Task::new(self.next_id, title, category, priority);
        self.tasks.push(task);
        self.next_id += 1;
        self.tasks.last().expect("task was just pushed")
    }

    /// Mark the task with the given id as done, in place. Succeeds silently
    /// when the task is already completed.
    pub fn complete(&mut self, id: u64) -> TasksResult<()> {
        match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                task.mark_complete();
                Ok(())
            }
            None => Err(TasksError::TaskNotFound { id }),
        }
    }

    /// Remove the task with the given id, preserving the relative order of
    /// the remainder. `next_id` is never adjusted; ids are not recycled.
    pub fn remove(&mut self, id: u64) -> TasksResult<Task> {
        match self.tasks.iter().position(|t| t.id == id) {
            Some(idx) => Ok(self.tasks.remove(idx)),
            None => Err(TasksError::TaskNotFound { id }),
        }
    }

    /// Look up a task by id
    pub fn get(&self, id: u64) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Case-sensitive substring search over title, category, and priority,
    /// in store order. An empty term matches nothing.
    pub fn search(&self, term: &str) -> Vec<&Task> {
        if term.is_empty() {
            return Vec::new();
        }

        self.tasks
            .iter()
            .filter(|t| {
                t.title.contains(term) || t.category.contains(term) || t.priority.contains(term)
            })
            .collect()
    }

    /// All tasks in store order
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Aggregate statistics over the full task set
    pub fn stats(&self) -> Statistics {
        Statistics::compute(&self.tasks, Utc::now())
    }
}
