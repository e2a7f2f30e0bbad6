//! Topological ordering of the task graph (Kahn's algorithm).

use std::collections::VecDeque;

use crate::error::CpmError;
use crate::graph::TaskGraph;
use crate::interner::TaskId;
use crate::{log_changes, log_debug};

/// Order tasks so that every predecessor comes before each of its successors.
///
/// Tasks that become ready at the same time leave the FIFO queue in the order
/// they entered it; initial sources enter in declaration order and successors
/// of a dequeued task enter in declaration order.
///
/// In-degrees are per-call scratch counters seeded from the edge relation, so
/// the graph is untouched and repeated calls return the same order.
///
/// # Returns
/// * `Ok(order)` containing every task exactly once
/// * `Err(CpmError::CycleDetected)` if some tasks could never become ready
pub fn topological_sort(graph: &TaskGraph, verbosity: u8) -> Result<Vec<TaskId>, CpmError> {
    let n = graph.len();
    let mut in_degree: Vec<usize> = graph.task_ids().map(|id| graph.in_degree(id)).collect();
    let mut processed = vec![false; n];

    let mut queue: VecDeque<TaskId> = graph
        .task_ids()
        .filter(|&id| in_degree[id as usize] == 0)
        .collect();
    let mut order: Vec<TaskId> = Vec::with_capacity(n);

    while let Some(task_id) = queue.pop_front() {
        log_debug!(verbosity, "  dequeue {}", graph.name(task_id));
        order.push(task_id);
        processed[task_id as usize] = true;

        for &succ in graph.successors(task_id) {
            let idx = succ as usize;
            in_degree[idx] -= 1;
            log_debug!(
                verbosity,
                "    {} in-degree -> {}",
                graph.name(succ),
                in_degree[idx]
            );
            if in_degree[idx] == 0 && !processed[idx] {
                queue.push_back(succ);
            }
        }
    }

    if order.len() != n {
        let unresolved: Vec<String> = graph
            .task_ids()
            .filter(|&id| !processed[id as usize])
            .map(|id| graph.name(id).to_string())
            .collect();
        return Err(CpmError::CycleDetected {
            ordered: order.len(),
            total: n,
            unresolved,
        });
    }

    log_changes!(
        verbosity,
        "Topological order: {}",
        order.iter().map(|&id| graph.name(id)).collect::<Vec<_>>().join(" ")
    );

    Ok(order)
}
