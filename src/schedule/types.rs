//! Types for the CPM/PERT schedule engine.

use serde::Serialize;

use crate::models::Task;

/// Per-task timing computed by the forward and backward passes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct TaskTiming {
    /// Earliest possible start time (from forward pass).
    pub earliest_start: f64,
    /// Earliest possible finish time (from forward pass).
    pub earliest_finish: f64,
    /// Latest allowable start time (from backward pass).
    pub latest_start: f64,
    /// Latest allowable finish time (from backward pass).
    pub latest_finish: f64,
    /// Slack = latest_start - earliest_start.
    pub slack: f64,
}

impl TaskTiming {
    /// Zero slack puts the task on the critical path.
    pub fn is_critical(&self) -> bool {
        // Allow small epsilon for floating point comparison
        self.slack.abs() < 1e-9
    }
}

/// One task of the input list together with its computed timing.
///
/// `timing` is `None` when the task could not be ordered (it sits on a
/// cycle or behind an unresolved dependency), which keeps a blocked task
/// distinguishable from one that legitimately computes to zero.
#[derive(Clone, Debug, Serialize)]
pub struct ScheduleRow {
    pub task: Task,
    pub timing: Option<TaskTiming>,
}

impl ScheduleRow {
    pub fn is_critical(&self) -> bool {
        self.timing.map(|t| t.is_critical()).unwrap_or(false)
    }
}

/// Output of one full schedule computation.
#[derive(Clone, Debug, Default, Serialize)]
pub struct ScheduleResult {
    /// One row per input task, in input order.
    pub rows: Vec<ScheduleRow>,
    /// Maximum earliest finish over the ordered tasks; zero when nothing
    /// could be ordered.
    pub project_duration: f64,
    /// True when at least one task could not be topologically ordered.
    pub has_cycle_or_unresolved: bool,
    /// Referenced dependency codes that match no task, sorted and
    /// deduplicated. Purely diagnostic; an unresolved code always also
    /// raises `has_cycle_or_unresolved`.
    pub unresolved_codes: Vec<String>,
}

impl ScheduleResult {
    /// Codes of the ordered tasks with zero slack, in input order.
    pub fn critical_codes(&self) -> Vec<&str> {
        self.rows
            .iter()
            .filter(|row| row.is_critical())
            .map(|row| row.task.code_key())
            .collect()
    }
}
