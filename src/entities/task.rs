//! Task entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Category applied when none is given
pub const DEFAULT_CATEGORY: &str = "personal";

/// Priority applied when none is given
pub const DEFAULT_PRIORITY: &str = "P2";

/// Display glyph for a pending task
pub const PENDING_MARKER: &str = "❌";

/// Display glyph for a completed task
pub const DONE_MARKER: &str = "✅";

/// A single to-do item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier, assigned by the store and never reused
    pub id: u64,

    /// Display text (empty allowed but discouraged)
    pub title: String,

    /// Whether the task is done
    pub completed: bool,

    /// Creation timestamp, immutable after construction
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,

    /// Display glyph derived from `completed`; field name kept for
    /// compatibility with previously written files
    #[serde(rename = "emoji")]
    pub marker: String,

    /// Free-text label grouping related tasks
    pub category: String,

    /// Free-text priority label (P1/P2/P3 by convention)
    pub priority: String,
}

impl Task {
    /// Create a new pending task. Empty category or priority fall back to
    /// the documented defaults.
    pub fn new(id: u64, title: impl Into<String>, category: &str, priority: &str) -> Self {
        let category = if category.is_empty() {
            DEFAULT_CATEGORY
        } else {
            category
        };
        let priority = if priority.is_empty() {
            DEFAULT_PRIORITY
        } else {
            priority
        };

        Self {
            id,
            title: title.into(),
            completed: false,
            created_at: Utc::now(),
            marker: PENDING_MARKER.to_string(),
            category: category.to_string(),
            priority: priority.to_string(),
        }
    }

    /// Mark the task as done and refresh the display marker. Idempotent.
    pub fn mark_complete(&mut self) {
        self.completed = true;
        self.marker = DONE_MARKER.to_string();
    }
}
