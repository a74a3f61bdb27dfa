//! Output format handling for tracegraph
//!
//! Supports three output formats:
//! - human: Readable, concise output for terminal use
//! - json: Stable, machine-readable JSON
//! - records: Line-oriented format, one step per line

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TraceError;
use crate::graph::types::{NodeId, TraceEdge};

/// Output format for tracegraph commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for machine consumption
    Json,
    /// Records output, one line per step
    Records,
}

impl FromStr for OutputFormat {
    type Err = TraceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human" => Ok(OutputFormat::Human),
            "json" => Ok(OutputFormat::Json),
            "records" => Ok(OutputFormat::Records),
            other => Err(TraceError::UnknownFormat(other.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Human => write!(f, "human"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Records => write!(f, "records"),
        }
    }
}

/// Render an optional predecessor, using `start` for the virtual source
pub fn format_origin(from: Option<NodeId>) -> String {
    match from {
        Some(id) => id.to_string(),
        None => "start".to_string(),
    }
}

/// Render a weight, using `-` for synthetic steps
pub fn format_weight(weight: Option<f64>) -> String {
    match weight {
        Some(w) => format_cost(w),
        None => "-".to_string(),
    }
}

/// Render a cost without a trailing `.0` for whole numbers
pub fn format_cost(cost: f64) -> String {
    format!("{}", cost)
}

/// One human-readable line per step, e.g. `  2. 1 -> 4 (w=2.5)`
pub fn format_step_human(index: usize, step: &TraceEdge) -> String {
    let weight = step
        .weight
        .map(|w| format!(" (w={})", format_cost(w)))
        .unwrap_or_default();
    format!(
        "{:>3}. {} -> {}{}",
        index + 1,
        format_origin(step.from),
        step.to,
        weight
    )
}
