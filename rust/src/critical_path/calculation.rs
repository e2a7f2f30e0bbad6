//! Critical path calculation: sort, forward pass, backward pass, slack.

use crate::backward_pass::{backward_pass, LatestTimes};
use crate::config::CpmConfig;
use crate::error::CpmError;
use crate::forward_pass::{forward_pass, EarliestTimes};
use crate::graph::TaskGraph;
use crate::interner::TaskId;
use crate::log_changes;
use crate::schedule::{Schedule, ScheduledTask};
use crate::sorting::topological_sort;

use super::types::TaskTiming;

/// Result of slack extraction, indexed by `TaskId`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CriticalPathResult {
    /// Timing information for every task.
    pub task_timings: Vec<TaskTiming>,
    /// Zero-slack tasks in topological order.
    pub critical_path_tasks: Vec<TaskId>,
}

/// Compute slack for every task and collect the zero-slack ones.
///
/// Tasks are visited in `order`, so the critical tasks come out in
/// topological order. They are reported as a flat sequence: parallel
/// zero-slack chains are all included and the result is not guaranteed to be
/// a single connected path.
pub fn extract_critical_path(
    graph: &TaskGraph,
    order: &[TaskId],
    earliest: &EarliestTimes,
    latest: &LatestTimes,
) -> CriticalPathResult {
    let mut task_timings = vec![TaskTiming::default(); graph.len()];
    let mut critical_path_tasks = Vec::new();

    for &task_id in order {
        let idx = task_id as usize;
        let timing = TaskTiming::new(
            earliest.start[idx],
            earliest.finish[idx],
            latest.start[idx],
            latest.finish[idx],
        );
        if timing.is_critical() {
            critical_path_tasks.push(task_id);
        }
        task_timings[idx] = timing;
    }

    CriticalPathResult {
        task_timings,
        critical_path_tasks,
    }
}

/// Run the full CPM analysis over `graph`.
///
/// This algorithm:
/// 1. Orders tasks topologically (fails on cycles)
/// 2. Propagates earliest times forward
/// 3. Propagates latest times backward
/// 4. Derives slack and the zero-slack sequence
///
/// # Returns
/// * `Ok(Schedule)` with one row per task and the critical path
/// * `Err(CpmError::CycleDetected)` if the graph is not acyclic; no partial
///   schedule is produced
pub fn calculate_critical_path(
    graph: &TaskGraph,
    config: &CpmConfig,
) -> Result<Schedule, CpmError> {
    let verbosity = config.verbosity;

    let order = topological_sort(graph, verbosity)?;
    let earliest = forward_pass(graph, &order, verbosity);
    let latest = backward_pass(graph, &order, &earliest, config.sink_anchor, verbosity);
    let result = extract_critical_path(graph, &order, &earliest, &latest);

    let tasks: Vec<ScheduledTask> = graph
        .task_ids()
        .map(|id| {
            let timing = &result.task_timings[id as usize];
            ScheduledTask::new(graph.name(id), graph.duration(id), timing)
        })
        .collect();
    let names = |ids: &[TaskId]| -> Vec<String> {
        ids.iter().map(|&id| graph.name(id).to_string()).collect()
    };

    let schedule = Schedule {
        tasks,
        order: names(order.as_slice()),
        critical_path: names(result.critical_path_tasks.as_slice()),
        project_duration: earliest.project_duration,
        path_separator: config.path_separator.clone(),
    };

    log_changes!(verbosity, "Critical path: {}", schedule.path_text());

    Ok(schedule)
}
