//! Critical path extraction and the end-to-end CPM analysis.
//!
//! Slack is LS - ES; tasks whose slack is zero (within `SLACK_EPSILON`)
//! form the critical path.

mod calculation;
mod types;

pub use calculation::{calculate_critical_path, extract_critical_path, CriticalPathResult};
pub use types::{TaskTiming, SLACK_EPSILON};
