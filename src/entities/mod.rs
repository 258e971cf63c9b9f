//! Core data structures for task management.

mod stats;
mod store;
mod task;

pub use stats::{PriorityCount, Statistics};
pub use store::TaskStore;
pub use task::{Task, DEFAULT_CATEGORY, DEFAULT_PRIORITY, DONE_MARKER, PENDING_MARKER};
