//! The analysis result: per-task timings plus the critical path.

use chrono::{Days, NaiveDate};
#[cfg(feature = "python")]
use pyo3::prelude::*;
use serde::{Deserialize, Serialize};

use crate::critical_path::TaskTiming;
use crate::error::CpmError;

/// One row of the schedule.
#[cfg_attr(feature = "python", pyclass(get_all))]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScheduledTask {
    pub name: String,
    pub duration: f64,
    pub earliest_start: f64,
    pub earliest_finish: f64,
    pub latest_start: f64,
    pub latest_finish: f64,
    pub slack: f64,
    /// Zero slack.
    pub critical: bool,
}

impl ScheduledTask {
    pub fn new(name: impl Into<String>, duration: f64, timing: &TaskTiming) -> Self {
        Self {
            name: name.into(),
            duration,
            earliest_start: timing.earliest_start,
            earliest_finish: timing.earliest_finish,
            latest_start: timing.latest_start,
            latest_finish: timing.latest_finish,
            slack: timing.slack,
            critical: timing.is_critical(),
        }
    }
}

/// Calendar view of a scheduled task.
#[cfg_attr(feature = "python", pyclass(get_all))]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatedTask {
    pub name: String,
    pub earliest_start: NaiveDate,
    pub earliest_finish: NaiveDate,
    pub latest_start: NaiveDate,
    pub latest_finish: NaiveDate,
}

/// Complete CPM schedule for one graph.
#[cfg_attr(feature = "python", pyclass(get_all))]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    /// Rows in task declaration order.
    pub tasks: Vec<ScheduledTask>,
    /// Task names in topological order.
    pub order: Vec<String>,
    /// Zero-slack task names in topological order.
    ///
    /// With several parallel zero-slack chains this is their union, not one
    /// connected path.
    pub critical_path: Vec<String>,
    /// Largest earliest finish over all tasks.
    pub project_duration: f64,
    pub path_separator: String,
}

impl Default for Schedule {
    fn default() -> Self {
        Self {
            tasks: Vec::new(),
            order: Vec::new(),
            critical_path: Vec::new(),
            project_duration: 0.0,
            path_separator: "->".to_string(),
        }
    }
}

impl Schedule {
    /// Row for `name`, for reporting callers.
    ///
    /// Scans the rows; the analysis itself never looks tasks up by name and
    /// resolves names once through the graph's `TaskIndex`.
    pub fn task(&self, name: &str) -> Option<&ScheduledTask> {
        self.tasks.iter().find(|t| t.name == name)
    }

    /// Critical path joined with `separator`; empty for an empty graph.
    pub fn critical_path_string(&self, separator: &str) -> String {
        self.critical_path.join(separator)
    }

    /// Critical path joined with the configured separator, e.g. `A->E->F`.
    pub fn path_text(&self) -> String {
        self.critical_path_string(&self.path_separator)
    }

    pub fn to_json(&self) -> Result<String, CpmError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Map time offsets onto calendar days counted from `project_start`.
    ///
    /// Fractional offsets round up to the next whole day.
    pub fn dated(&self, project_start: NaiveDate) -> Vec<DatedTask> {
        self.tasks
            .iter()
            .map(|task| DatedTask {
                name: task.name.clone(),
                earliest_start: offset_date(project_start, task.earliest_start),
                earliest_finish: offset_date(project_start, task.earliest_finish),
                latest_start: offset_date(project_start, task.latest_start),
                latest_finish: offset_date(project_start, task.latest_finish),
            })
            .collect()
    }
}

fn offset_date(project_start: NaiveDate, offset: f64) -> NaiveDate {
    let days = offset.max(0.0).ceil() as u64;
    project_start
        .checked_add_days(Days::new(days))
        .unwrap_or(NaiveDate::MAX)
}

#[cfg(feature = "python")]
#[pymethods]
impl Schedule {
    #[pyo3(name = "task")]
    fn py_task(&self, name: &str) -> Option<ScheduledTask> {
        self.task(name).cloned()
    }

    #[pyo3(name = "critical_path_string", signature = (separator=None))]
    fn py_critical_path_string(&self, separator: Option<&str>) -> String {
        match separator {
            Some(sep) => self.critical_path_string(sep),
            None => self.path_text(),
        }
    }

    #[pyo3(name = "to_json")]
    fn py_to_json(&self) -> PyResult<String> {
        self.to_json()
            .map_err(|e| pyo3::exceptions::PyValueError::new_err(e.to_string()))
    }

    #[pyo3(name = "dated")]
    fn py_dated(&self, project_start: NaiveDate) -> Vec<DatedTask> {
        self.dated(project_start)
    }

    fn __repr__(&self) -> String {
        format!(
            "Schedule(tasks={}, project_duration={}, critical_path={:?})",
            self.tasks.len(),
            self.project_duration,
            self.path_text()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_row(name: &str, duration: f64, es: f64, ls: f64) -> ScheduledTask {
        let timing = TaskTiming::new(es, es + duration, ls, ls + duration);
        ScheduledTask::new(name, duration, &timing)
    }

    fn make_schedule() -> Schedule {
        Schedule {
            tasks: vec![
                make_row("A", 2.0, 0.0, 0.0),
                make_row("B", 1.5, 0.0, 1.5),
                make_row("C", 1.0, 2.0, 2.0),
            ],
            order: vec!["A".into(), "B".into(), "C".into()],
            critical_path: vec!["A".into(), "C".into()],
            project_duration: 3.0,
            ..Schedule::default()
        }
    }

    #[test]
    fn test_row_flags_critical() {
        let schedule = make_schedule();
        assert!(schedule.task("A").unwrap().critical);
        assert!(!schedule.task("B").unwrap().critical);
        assert_eq!(schedule.task("B").unwrap().slack, 1.5);
        assert!(schedule.task("Z").is_none());
    }

    #[test]
    fn test_path_text() {
        let schedule = make_schedule();
        assert_eq!(schedule.path_text(), "A->C");
        assert_eq!(schedule.critical_path_string(" | "), "A | C");
        assert_eq!(Schedule::default().path_text(), "");
    }

    #[test]
    fn test_dated_rounds_up() {
        let start = NaiveDate::from_ymd_opt(2025, 3, 3).unwrap();
        let dated = make_schedule().dated(start);

        let b = &dated[1];
        assert_eq!(b.earliest_start, start);
        // EF 1.5 -> day 2
        assert_eq!(b.earliest_finish, NaiveDate::from_ymd_opt(2025, 3, 5).unwrap());
        assert_eq!(b.latest_start, NaiveDate::from_ymd_opt(2025, 3, 5).unwrap());
        assert_eq!(b.latest_finish, NaiveDate::from_ymd_opt(2025, 3, 6).unwrap());
    }

    #[test]
    fn test_json_report() {
        let json = make_schedule().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["project_duration"], 3.0);
        assert_eq!(value["critical_path"][1], "C");
        assert_eq!(value["tasks"][1]["latest_start"], 1.5);
        assert_eq!(value["tasks"][0]["critical"], true);
    }
}
