//! Sample project: the Western Hills Shopping Center network.
//!
//! Nine tasks, ten precedence edges, project duration 26 with critical path
//! A->E->F->G->I.

use crate::models::{Edge, GraphSpec, Task};

pub fn western_hills() -> GraphSpec {
    let tasks = [
        ("A", 5.0),
        ("B", 6.0),
        ("C", 4.0),
        ("D", 3.0),
        ("E", 1.0),
        ("F", 4.0),
        ("G", 14.0),
        ("H", 12.0),
        ("I", 2.0),
    ];
    let edges = [
        ("A", "E"),
        ("A", "D"),
        ("A", "C"),
        ("B", "H"),
        ("C", "H"),
        ("D", "G"),
        ("E", "F"),
        ("F", "G"),
        ("G", "I"),
        ("H", "I"),
    ];

    GraphSpec {
        tasks: tasks.iter().map(|&(name, d)| Task::new(name, d)).collect(),
        edges: edges.iter().map(|&(from, to)| Edge::new(from, to)).collect(),
    }
}
