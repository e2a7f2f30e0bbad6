//! Immutable task graph with dense, array-indexed adjacency.

use crate::error::CpmError;
use crate::interner::{TaskId, TaskIndex};
use crate::models::{Edge, GraphSpec, Task};

/// A fixed set of tasks and the precedence relation between them.
///
/// Built once and never mutated; every pass keeps its own scratch state.
/// All per-task data is indexed by `TaskId`, which is the task's position in
/// declaration order.
#[derive(Debug, Clone, Default)]
pub struct TaskGraph {
    index: TaskIndex,
    durations: Vec<f64>,
    /// Successor IDs per task, ascending.
    successors: Vec<Vec<TaskId>>,
    /// Predecessor IDs per task, ascending.
    predecessors: Vec<Vec<TaskId>>,
    edge_count: usize,
}

impl TaskGraph {
    /// Build a graph from tasks and predecessor -> successor edges.
    ///
    /// Repeated edges collapse into one. Cycles are not checked here; the
    /// topological sort reports them.
    pub fn new(tasks: &[Task], edges: &[Edge]) -> Result<Self, CpmError> {
        let n = tasks.len();
        let mut index = TaskIndex::with_capacity(n);
        let mut durations = Vec::with_capacity(n);

        for task in tasks {
            if !task.duration.is_finite() || task.duration < 0.0 {
                return Err(CpmError::InvalidDuration {
                    task: task.name.clone(),
                    duration: task.duration,
                });
            }
            if index.insert(&task.name).is_none() {
                return Err(CpmError::DuplicateTask(task.name.clone()));
            }
            durations.push(task.duration);
        }

        let mut successors: Vec<Vec<TaskId>> = vec![Vec::new(); n];
        let mut predecessors: Vec<Vec<TaskId>> = vec![Vec::new(); n];

        for edge in edges {
            let from = index
                .get_id(&edge.from)
                .ok_or_else(|| CpmError::UnknownTask(edge.from.clone()))?;
            let to = index
                .get_id(&edge.to)
                .ok_or_else(|| CpmError::UnknownTask(edge.to.clone()))?;
            successors[from as usize].push(to);
            predecessors[to as usize].push(from);
        }

        // Declaration order drives the sorter's FIFO tie-break.
        let mut edge_count = 0;
        for list in successors.iter_mut() {
            list.sort_unstable();
            list.dedup();
            edge_count += list.len();
        }
        for list in predecessors.iter_mut() {
            list.sort_unstable();
            list.dedup();
        }

        Ok(Self {
            index,
            durations,
            successors,
            predecessors,
            edge_count,
        })
    }

    pub fn from_spec(spec: &GraphSpec) -> Result<Self, CpmError> {
        Self::new(&spec.tasks, &spec.edges)
    }

    pub fn from_json(text: &str) -> Result<Self, CpmError> {
        Self::from_spec(&GraphSpec::from_json(text)?)
    }

    /// Number of tasks.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Number of distinct edges.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// All task IDs in declaration order.
    pub fn task_ids(&self) -> impl Iterator<Item = TaskId> {
        0..self.len() as TaskId
    }

    pub fn id_of(&self, name: &str) -> Option<TaskId> {
        self.index.get_id(name)
    }

    /// Name of a task; empty for an ID that did not come from this graph.
    pub fn name(&self, id: TaskId) -> &str {
        self.index.get_name(id).unwrap_or_default()
    }

    pub fn duration(&self, id: TaskId) -> f64 {
        self.durations[id as usize]
    }

    pub fn predecessors(&self, id: TaskId) -> &[TaskId] {
        &self.predecessors[id as usize]
    }

    pub fn successors(&self, id: TaskId) -> &[TaskId] {
        &self.successors[id as usize]
    }

    /// Number of incoming edges, before any sort has consumed them.
    pub fn in_degree(&self, id: TaskId) -> usize {
        self.predecessors[id as usize].len()
    }

    pub fn is_sink(&self, id: TaskId) -> bool {
        self.successors[id as usize].is_empty()
    }
}
