//! Types shared by critical path extraction and reporting.

use serde::{Deserialize, Serialize};

/// Tolerance for treating a real-valued slack as zero.
pub const SLACK_EPSILON: f64 = 1e-9;

/// Per-task timing after both passes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
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
    pub fn new(
        earliest_start: f64,
        earliest_finish: f64,
        latest_start: f64,
        latest_finish: f64,
    ) -> Self {
        Self {
            earliest_start,
            earliest_finish,
            latest_start,
            latest_finish,
            slack: snap_slack(latest_start - earliest_start),
        }
    }

    pub fn is_critical(&self) -> bool {
        self.slack.abs() < SLACK_EPSILON
    }
}

/// Rounding in `(ES + d) - d` can leave a critical task with a slack of
/// -1e-17; report it as exactly zero.
fn snap_slack(slack: f64) -> f64 {
    if slack.abs() < SLACK_EPSILON {
        0.0
    } else {
        slack
    }
}
