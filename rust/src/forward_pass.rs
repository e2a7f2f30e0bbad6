//! Forward pass: earliest start and finish times.

use crate::graph::TaskGraph;
use crate::interner::TaskId;
use crate::{log_changes, log_checks};

/// Earliest times per task, indexed by `TaskId`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EarliestTimes {
    pub start: Vec<f64>,
    pub finish: Vec<f64>,
    /// Largest earliest finish over all tasks (0 for an empty graph).
    pub project_duration: f64,
}

/// Compute ES and EF for every task.
///
/// `order` must be a complete topological order of `graph`, so that each
/// predecessor's EF is final before any of its successors is visited.
/// ES is 0 for a task without predecessors, otherwise the largest EF among
/// its predecessors; EF = ES + duration.
pub fn forward_pass(graph: &TaskGraph, order: &[TaskId], verbosity: u8) -> EarliestTimes {
    let n = graph.len();
    let mut start = vec![0.0; n];
    let mut finish = vec![0.0; n];
    let mut project_duration: f64 = 0.0;

    for &task_id in order {
        let idx = task_id as usize;

        let mut earliest_start = 0.0;
        for &pred in graph.predecessors(task_id) {
            let pred_finish = finish[pred as usize];
            if pred_finish > earliest_start {
                earliest_start = pred_finish;
            }
        }

        let earliest_finish = earliest_start + graph.duration(task_id);
        start[idx] = earliest_start;
        finish[idx] = earliest_finish;
        project_duration = project_duration.max(earliest_finish);

        log_checks!(
            verbosity,
            "  {}: ES={} EF={}",
            graph.name(task_id),
            earliest_start,
            earliest_finish
        );
    }

    log_changes!(verbosity, "Forward pass: project duration {}", project_duration);

    EarliestTimes {
        start,
        finish,
        project_duration,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Edge, Task};
    use crate::sorting::topological_sort;

    fn run(tasks: &[(&str, f64)], edges: &[(&str, &str)]) -> (TaskGraph, EarliestTimes) {
        let tasks: Vec<Task> = tasks.iter().map(|&(n, d)| Task::new(n, d)).collect();
        let edges: Vec<Edge> = edges.iter().map(|&(a, b)| Edge::new(a, b)).collect();
        let graph = TaskGraph::new(&tasks, &edges).unwrap();
        let order = topological_sort(&graph, 0).unwrap();
        let earliest = forward_pass(&graph, &order, 0);
        (graph, earliest)
    }

    #[test]
    fn test_sources_start_at_zero() {
        let (_, earliest) = run(&[("a", 3.0), ("b", 7.0)], &[]);
        assert_eq!(earliest.start, vec![0.0, 0.0]);
        assert_eq!(earliest.finish, vec![3.0, 7.0]);
        assert_eq!(earliest.project_duration, 7.0);
    }

    #[test]
    fn test_start_is_max_predecessor_finish() {
        // a (2) -> c, b (5) -> c: c waits for b
        let (graph, earliest) = run(
            &[("a", 2.0), ("b", 5.0), ("c", 1.5)],
            &[("a", "c"), ("b", "c")],
        );
        let c = graph.id_of("c").unwrap() as usize;
        assert_eq!(earliest.start[c], 5.0);
        assert!((earliest.finish[c] - 6.5).abs() < 1e-9);
        assert!((earliest.project_duration - 6.5).abs() < 1e-9);
    }

    #[test]
    fn test_zero_duration_milestone() {
        let (graph, earliest) = run(
            &[("a", 4.0), ("m", 0.0), ("b", 1.0)],
            &[("a", "m"), ("m", "b")],
        );
        let m = graph.id_of("m").unwrap() as usize;
        let b = graph.id_of("b").unwrap() as usize;
        assert_eq!(earliest.start[m], 4.0);
        assert_eq!(earliest.finish[m], 4.0);
        assert_eq!(earliest.start[b], 4.0);
    }

    #[test]
    fn test_edges_never_overlap() {
        let (graph, earliest) = run(
            &[("a", 2.0), ("b", 3.0), ("c", 5.0), ("d", 1.0)],
            &[("a", "b"), ("a", "c"), ("b", "d"), ("c", "d")],
        );
        for id in graph.task_ids() {
            let idx = id as usize;
            assert_eq!(earliest.finish[idx], earliest.start[idx] + graph.duration(id));
            for &succ in graph.successors(id) {
                assert!(earliest.finish[idx] <= earliest.start[succ as usize]);
            }
        }
    }

    #[test]
    fn test_empty_graph() {
        let (_, earliest) = run(&[], &[]);
        assert!(earliest.start.is_empty());
        assert_eq!(earliest.project_duration, 0.0);
    }
}
