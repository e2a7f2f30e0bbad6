//! Configuration types for a CPM analysis.

#[cfg(feature = "python")]
use pyo3::prelude::*;
use serde::{Deserialize, Serialize};

/// How the backward pass fixes the latest finish of a task with no successors.
#[cfg_attr(feature = "python", pyclass(eq, eq_int))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SinkAnchor {
    /// LF = EF and LS = ES: every sink is pinned to its own earliest finish.
    #[default]
    OwnFinish,
    /// LF = project duration: sinks off the longest path receive slack.
    ProjectFinish,
}

/// Configuration for [`crate::calculate_critical_path`].
#[cfg_attr(feature = "python", pyclass(get_all, set_all))]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CpmConfig {
    /// Verbosity level: 0=silent, 1=changes, 2=checks, 3=debug.
    pub verbosity: u8,
    /// Latest-finish rule for sink tasks.
    pub sink_anchor: SinkAnchor,
    /// Separator used when rendering the critical path as text.
    pub path_separator: String,
}

impl Default for CpmConfig {
    fn default() -> Self {
        Self {
            verbosity: 0,
            sink_anchor: SinkAnchor::OwnFinish,
            path_separator: "->".to_string(),
        }
    }
}

#[cfg(feature = "python")]
#[pymethods]
impl CpmConfig {
    #[new]
    #[pyo3(signature = (verbosity=None, sink_anchor=None, path_separator=None))]
    fn new(
        verbosity: Option<u8>,
        sink_anchor: Option<SinkAnchor>,
        path_separator: Option<String>,
    ) -> Self {
        let defaults = Self::default();
        Self {
            verbosity: verbosity.unwrap_or(defaults.verbosity),
            sink_anchor: sink_anchor.unwrap_or(defaults.sink_anchor),
            path_separator: path_separator.unwrap_or(defaults.path_separator),
        }
    }

    fn __repr__(&self) -> String {
        format!(
            "CpmConfig(verbosity={}, sink_anchor={:?}, path_separator={:?})",
            self.verbosity, self.sink_anchor, self.path_separator
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = CpmConfig::default();
        assert_eq!(config.verbosity, 0);
        assert_eq!(config.sink_anchor, SinkAnchor::OwnFinish);
        assert_eq!(config.path_separator, "->");
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config: CpmConfig =
            serde_json::from_str(r#"{"sink_anchor": "project_finish"}"#).unwrap();
        assert_eq!(config.sink_anchor, SinkAnchor::ProjectFinish);
        assert_eq!(config.verbosity, 0);
        assert_eq!(config.path_separator, "->");
    }
}
