//! Input data types: tasks, precedence edges and the graph description.

use serde::{Deserialize, Serialize};

use crate::error::CpmError;

/// A task to be scheduled.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub name: String,
    pub duration: f64,
}

impl Task {
    pub fn new(name: impl Into<String>, duration: f64) -> Self {
        Self {
            name: name.into(),
            duration,
        }
    }
}

/// A precedence constraint: `from` must finish before `to` can start.
///
/// Serialized as a two-element array, `["A", "C"]`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "(String, String)", into = "(String, String)")]
pub struct Edge {
    pub from: String,
    pub to: String,
}

impl Edge {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

impl From<(String, String)> for Edge {
    fn from((from, to): (String, String)) -> Self {
        Self { from, to }
    }
}

impl From<Edge> for (String, String) {
    fn from(edge: Edge) -> Self {
        (edge.from, edge.to)
    }
}

/// Declarative description of a task graph.
///
/// Task order matters: it fixes task IDs and therefore the tie-break order of
/// the topological sort.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphSpec {
    pub tasks: Vec<Task>,
    #[serde(default)]
    pub edges: Vec<Edge>,
}

impl GraphSpec {
    /// Parse `{"tasks":[{"name":"A","duration":5}], "edges":[["A","C"]]}`.
    pub fn from_json(text: &str) -> Result<Self, CpmError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn to_json(&self) -> Result<String, CpmError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_graph_spec() {
        let spec = GraphSpec::from_json(
            r#"{"tasks":[{"name":"A","duration":5},{"name":"C","duration":4.5}],
                "edges":[["A","C"]]}"#,
        )
        .unwrap();

        assert_eq!(spec.tasks, vec![Task::new("A", 5.0), Task::new("C", 4.5)]);
        assert_eq!(spec.edges, vec![Edge::new("A", "C")]);
    }

    #[test]
    fn test_edges_optional() {
        let spec = GraphSpec::from_json(r#"{"tasks":[{"name":"A","duration":1}]}"#).unwrap();
        assert!(spec.edges.is_empty());
    }

    #[test]
    fn test_edge_serializes_as_pair() {
        let json = serde_json::to_string(&Edge::new("A", "B")).unwrap();
        assert_eq!(json, r#"["A","B"]"#);
    }

    #[test]
    fn test_malformed_json_rejected() {
        let err = GraphSpec::from_json(r#"{"tasks":[{"name":"A"}]}"#).unwrap_err();
        assert!(matches!(err, CpmError::InvalidInput(_)));
    }
}
