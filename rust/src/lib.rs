//! Critical Path Method (CPM) scheduling for directed acyclic task graphs.
//!
//! A [`TaskGraph`] is ordered topologically, swept forward for earliest
//! start/finish times and backward for latest start/finish times; slack and
//! the zero-slack critical path fall out of the two sweeps.
//!
//! ```
//! use critpath::{analyze, sample::western_hills, CpmConfig};
//!
//! let schedule = analyze(&western_hills(), &CpmConfig::default()).unwrap();
//! assert_eq!(schedule.project_duration, 26.0);
//! assert_eq!(schedule.path_text(), "A->E->F->G->I");
//! ```

// Allow clippy warning triggered by PyO3 macro expansion
#![cfg_attr(feature = "python", allow(clippy::useless_conversion))]

#[cfg(feature = "python")]
use pyo3::prelude::*;

pub mod backward_pass;
mod config;
pub mod critical_path;
mod error;
pub mod forward_pass;
mod graph;
mod interner;
pub mod logging;
mod models;
pub mod sample;
mod schedule;
pub mod sorting;

pub use backward_pass::{backward_pass, LatestTimes};
pub use config::{CpmConfig, SinkAnchor};
pub use critical_path::{
    calculate_critical_path, extract_critical_path, CriticalPathResult, TaskTiming,
};
pub use error::CpmError;
pub use forward_pass::{forward_pass, EarliestTimes};
pub use graph::TaskGraph;
pub use interner::{TaskId, TaskIndex};
pub use models::{Edge, GraphSpec, Task};
pub use schedule::{DatedTask, Schedule, ScheduledTask};
pub use sorting::topological_sort;

/// Build a graph from `spec` and run the full CPM analysis.
///
/// # Returns
/// * `Ok(Schedule)` with timings, slack and the critical path
/// * `Err(CpmError)` for unknown or duplicate tasks, invalid durations or a
///   cycle; nothing is scheduled in that case
pub fn analyze(spec: &GraphSpec, config: &CpmConfig) -> Result<Schedule, CpmError> {
    let graph = TaskGraph::from_spec(spec)?;
    calculate_critical_path(&graph, config)
}

/// Parse a JSON graph description and analyse it.
pub fn analyze_json(text: &str, config: &CpmConfig) -> Result<Schedule, CpmError> {
    analyze(&GraphSpec::from_json(text)?, config)
}

#[cfg(feature = "python")]
fn to_py_err(err: CpmError) -> PyErr {
    pyo3::exceptions::PyValueError::new_err(err.to_string())
}

/// Run the CPM analysis.
///
/// # Arguments
/// * `tasks` - List of (name, duration) pairs, in declaration order
/// * `edges` - List of (predecessor, successor) name pairs
/// * `config` - Optional analysis configuration
///
/// # Raises
/// * ValueError on a cycle, unknown task, duplicate task or invalid duration
#[cfg(feature = "python")]
#[pyfunction]
#[pyo3(name = "analyze", signature = (tasks, edges, config=None))]
fn py_analyze(
    tasks: Vec<(String, f64)>,
    edges: Vec<(String, String)>,
    config: Option<CpmConfig>,
) -> PyResult<Schedule> {
    let spec = GraphSpec {
        tasks: tasks
            .into_iter()
            .map(|(name, duration)| Task { name, duration })
            .collect(),
        edges: edges.into_iter().map(Edge::from).collect(),
    };
    analyze(&spec, &config.unwrap_or_default()).map_err(to_py_err)
}

/// Run the CPM analysis on a JSON graph description.
///
/// # Raises
/// * ValueError on malformed JSON or any analysis error
#[cfg(feature = "python")]
#[pyfunction]
#[pyo3(name = "analyze_json", signature = (text, config=None))]
fn py_analyze_json(text: &str, config: Option<CpmConfig>) -> PyResult<Schedule> {
    analyze_json(text, &config.unwrap_or_default()).map_err(to_py_err)
}

/// The critpath Python module.
#[cfg(feature = "python")]
#[pymodule]
fn critpath(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // Result types
    m.add_class::<Schedule>()?;
    m.add_class::<ScheduledTask>()?;
    m.add_class::<DatedTask>()?;

    // Config types
    m.add_class::<CpmConfig>()?;
    m.add_class::<SinkAnchor>()?;

    // Algorithms
    m.add_function(wrap_pyfunction!(py_analyze, m)?)?;
    m.add_function(wrap_pyfunction!(py_analyze_json, m)?)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyze_json_sample_project() {
        let text = r#"{
            "tasks": [
                {"name": "A", "duration": 5}, {"name": "B", "duration": 6},
                {"name": "C", "duration": 4}, {"name": "D", "duration": 3},
                {"name": "E", "duration": 1}, {"name": "F", "duration": 4},
                {"name": "G", "duration": 14}, {"name": "H", "duration": 12},
                {"name": "I", "duration": 2}
            ],
            "edges": [
                ["A", "E"], ["A", "D"], ["A", "C"], ["B", "H"], ["C", "H"],
                ["D", "G"], ["E", "F"], ["F", "G"], ["G", "I"], ["H", "I"]
            ]
        }"#;
        let schedule = analyze_json(text, &CpmConfig::default()).unwrap();

        assert_eq!(schedule.project_duration, 26.0);
        assert_eq!(schedule.path_text(), "A->E->F->G->I");
        for name in ["B", "C", "D", "H"] {
            assert!(schedule.task(name).unwrap().slack > 0.0, "{} should float", name);
        }
    }

    #[test]
    fn test_unknown_task_aborts() {
        let text = r#"{"tasks":[{"name":"A","duration":1}],"edges":[["A","B"]]}"#;
        let err = analyze_json(text, &CpmConfig::default()).unwrap_err();
        assert_eq!(err, CpmError::UnknownTask("B".to_string()));
    }

    #[test]
    fn test_cycle_aborts() {
        let spec = GraphSpec {
            tasks: vec![Task::new("A", 1.0), Task::new("B", 2.0)],
            edges: vec![Edge::new("A", "B"), Edge::new("B", "A")],
        };
        let err = analyze(&spec, &CpmConfig::default()).unwrap_err();
        assert!(matches!(err, CpmError::CycleDetected { .. }));
    }

    #[test]
    fn test_empty_spec_is_valid() {
        let schedule = analyze_json(r#"{"tasks":[]}"#, &CpmConfig::default()).unwrap();
        assert!(schedule.tasks.is_empty());
        assert!(schedule.critical_path.is_empty());
    }

    #[test]
    fn test_verbose_run_matches_silent_run() {
        let verbose = CpmConfig {
            verbosity: logging::VERBOSITY_DEBUG,
            ..CpmConfig::default()
        };
        let spec = sample::western_hills();
        assert_eq!(
            analyze(&spec, &verbose).unwrap(),
            analyze(&spec, &CpmConfig::default()).unwrap()
        );
    }
}
