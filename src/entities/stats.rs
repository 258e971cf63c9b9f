//! Aggregate task statistics.

use std::collections::BTreeMap;

use chrono::{DateTime, Duration, Utc};

use super::Task;

const WEEK_DAYS: i64 = 7;
const MONTH_DAYS: i64 = 30;

/// Task count and share for one priority label
#[derive(Debug, Clone, PartialEq)]
pub struct PriorityCount {
    /// Priority label
    pub priority: String,

    /// Number of tasks carrying this label
    pub count: usize,

    /// Share of all tasks, in percent
    pub percent: f64,
}

/// Aggregate statistics over the full task set.
///
/// The weekly and monthly completion windows are keyed off `created_at`:
/// a task completed long after creation but created within the window
/// still counts. There is no completion timestamp in the data model.
#[derive(Debug, Clone, Default)]
pub struct Statistics {
    /// Total number of tasks
    pub total: usize,

    /// Number of completed tasks
    pub completed: usize,

    /// Completed share of all tasks, in percent (0 when there are none)
    pub completion_rate: f64,

    /// Tasks created within the trailing 7 days
    pub created_last_week: usize,

    /// Tasks created within the trailing 30 days
    pub created_last_month: usize,

    /// Completed tasks created within the trailing 7 days
    pub completed_last_week: usize,

    /// Completed tasks created within the trailing 30 days
    pub completed_last_month: usize,

    /// Weekly completion rate, in percent (0 when nothing was created)
    pub weekly_rate: f64,

    /// Monthly completion rate, in percent (0 when nothing was created)
    pub monthly_rate: f64,

    /// Task counts per priority label, sorted by label
    pub priority_breakdown: Vec<PriorityCount>,
}

impl Statistics {
    /// Compute statistics over `tasks` as of `now`.
    ///
    /// Taking the reference instant as a parameter keeps the computation
    /// pure; callers pass `Utc::now()`.
    pub fn compute(tasks: &[Task], now: DateTime<Utc>) -> Self {
        let week_start = now - Duration::days(WEEK_DAYS);
        let month_start = now - Duration::days(MONTH_DAYS);

        let total = tasks.len();
        let mut completed = 0;
        let mut created_last_week = 0;
        let mut created_last_month = 0;
        let mut completed_last_week = 0;
        let mut completed_last_month = 0;
        let mut by_priority: BTreeMap<&str, usize> = BTreeMap::new();

        for task in tasks {
            *by_priority.entry(task.priority.as_str()).or_insert(0) += 1;

            let in_week = task.created_at > week_start;
            let in_month = task.created_at > month_start;

            if in_week {
                created_last_week += 1;
            }
            if in_month {
                created_last_month += 1;
            }

            if task.completed {
                completed += 1;
                if in_week {
                    completed_last_week += 1;
                }
                if in_month {
                    completed_last_month += 1;
                }
            }
        }

        let priority_breakdown = by_priority
            .into_iter()
            .map(|(priority, count)| PriorityCount {
                priority: priority.to_string(),
                count,
                percent: rate(count, total),
            })
            .collect();

        Self {
            total,
            completed,
            completion_rate: rate(completed, total),
            created_last_week,
            created_last_month,
            completed_last_week,
            completed_last_month,
            weekly_rate: rate(completed_last_week, created_last_week),
            monthly_rate: rate(completed_last_month, created_last_month),
            priority_breakdown,
        }
    }
}

/// Percentage of `part` in `whole`, 0 when `whole` is 0
#[allow(clippy::cast_precision_loss)]
fn rate(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        (part as f64 / whole as f64) * 100.0
    }
}
