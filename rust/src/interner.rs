//! Dense integer IDs for task names.
//!
//! Every pass works on `TaskId`-indexed vectors; names are only touched when
//! a graph is built and when results are reported.

use rustc_hash::FxHashMap;

/// Interned task ID, also the task's position in declaration order.
pub type TaskId = u32;

/// Bidirectional task name <-> `TaskId` map.
#[derive(Debug, Clone, Default)]
pub struct TaskIndex {
    to_id: FxHashMap<String, TaskId>,
    names: Vec<String>,
}

impl TaskIndex {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            to_id: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            names: Vec::with_capacity(capacity),
        }
    }

    /// Register a new name and return its ID.
    ///
    /// Returns `None` if the name is already registered; IDs are never reused.
    pub fn insert(&mut self, name: &str) -> Option<TaskId> {
        if self.to_id.contains_key(name) {
            return None;
        }
        let id = self.names.len() as TaskId;
        self.names.push(name.to_string());
        self.to_id.insert(name.to_string(), id);
        Some(id)
    }

    #[inline]
    pub fn get_id(&self, name: &str) -> Option<TaskId> {
        self.to_id.get(name).copied()
    }

    #[inline]
    pub fn get_name(&self, id: TaskId) -> Option<&str> {
        self.names.get(id as usize).map(|s| s.as_str())
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
