//! Backward pass: latest start and finish times.

use crate::config::SinkAnchor;
use crate::forward_pass::EarliestTimes;
use crate::graph::TaskGraph;
use crate::interner::TaskId;
use crate::{log_changes, log_checks};

/// Latest times per task, indexed by `TaskId`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LatestTimes {
    pub start: Vec<f64>,
    pub finish: Vec<f64>,
}

/// Compute LS and LF for every task, visiting `order` back to front.
///
/// A task with successors must finish by the earliest LS among them:
/// LF = min(LS(successor)), LS = LF - duration. A sink is anchored according
/// to `anchor`:
/// * `SinkAnchor::OwnFinish` - LF = EF and LS = ES
/// * `SinkAnchor::ProjectFinish` - LF = project duration, LS = LF - duration
///
/// `earliest` must come from the forward pass over the same order.
pub fn backward_pass(
    graph: &TaskGraph,
    order: &[TaskId],
    earliest: &EarliestTimes,
    anchor: SinkAnchor,
    verbosity: u8,
) -> LatestTimes {
    let n = graph.len();
    let mut start = vec![0.0; n];
    let mut finish = vec![0.0; n];

    for &task_id in order.iter().rev() {
        let idx = task_id as usize;
        let duration = graph.duration(task_id);

        let (latest_start, latest_finish) = if graph.is_sink(task_id) {
            match anchor {
                SinkAnchor::OwnFinish => (earliest.start[idx], earliest.finish[idx]),
                SinkAnchor::ProjectFinish => {
                    let lf = earliest.project_duration;
                    (lf - duration, lf)
                }
            }
        } else {
            // Find minimum latest_start of all successors
            let mut latest_finish = f64::MAX;
            for &succ in graph.successors(task_id) {
                let required_finish = start[succ as usize];
                if required_finish < latest_finish {
                    latest_finish = required_finish;
                }
            }
            (latest_finish - duration, latest_finish)
        };

        start[idx] = latest_start;
        finish[idx] = latest_finish;

        log_checks!(
            verbosity,
            "  {}: LS={} LF={}",
            graph.name(task_id),
            latest_start,
            latest_finish
        );
    }

    log_changes!(verbosity, "Backward pass: {} tasks anchored", order.len());

    LatestTimes { start, finish }
}
