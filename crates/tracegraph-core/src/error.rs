//! Error types and exit codes for tracegraph
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (unreadable or invalid graph document)
//!
//! The engine itself never fails: malformed input degrades to an empty or
//! partial trace. These errors cover the surfaces around it.

mod macros;

use std::path::PathBuf;
use thiserror::Error;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - missing or invalid graph document (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur around a tracegraph run
#[derive(Error, Debug)]
pub enum TraceError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("unknown algorithm: {0} (expected: bfs, dfs, or dijkstra)")]
    UnknownAlgorithm(String),

    #[error("{0}")]
    UsageError(String),

    // Data errors (exit code 3)
    #[error("graph document not found: {path:?}")]
    GraphNotFound { path: PathBuf },

    #[error("invalid graph document {path:?}: {reason}")]
    InvalidGraph { path: PathBuf, reason: String },

    #[error("invalid config {path:?}: {reason}")]
    InvalidConfig { path: PathBuf, reason: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl TraceError {
    /// Create an error for a graph document that failed validation
    pub fn invalid_graph(path: impl Into<PathBuf>, reason: impl std::fmt::Display) -> Self {
        TraceError::InvalidGraph {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            TraceError::UnknownFormat(_)
            | TraceError::UnknownAlgorithm(_)
            | TraceError::UsageError(_) => ExitCode::Usage,

            TraceError::GraphNotFound { .. }
            | TraceError::InvalidGraph { .. }
            | TraceError::InvalidConfig { .. } => ExitCode::Data,

            TraceError::Io(_)
            | TraceError::Yaml(_)
            | TraceError::Json(_)
            | TraceError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            TraceError::UnknownFormat(_) => "unknown_format",
            TraceError::UnknownAlgorithm(_) => "unknown_algorithm",
            TraceError::UsageError(_) => "usage_error",
            TraceError::GraphNotFound { .. } => "graph_not_found",
            TraceError::InvalidGraph { .. } => "invalid_graph",
            TraceError::InvalidConfig { .. } => "invalid_config",
            TraceError::Io(_) => "io_error",
            TraceError::Yaml(_) => "yaml_error",
            TraceError::Json(_) => "json_error",
            TraceError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for tracegraph operations
pub type Result<T> = std::result::Result<T, TraceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_by_category() {
        assert_eq!(
            TraceError::UnknownFormat("xml".into()).exit_code(),
            ExitCode::Usage
        );
        assert_eq!(
            TraceError::GraphNotFound {
                path: PathBuf::from("missing.json")
            }
            .exit_code(),
            ExitCode::Data
        );
        assert_eq!(
            TraceError::Other("boom".into()).exit_code(),
            ExitCode::Failure
        );
        assert_eq!(i32::from(ExitCode::Data), 3);
    }

    #[test]
    fn test_to_json_envelope() {
        let err = TraceError::invalid_graph("g.json", "negative weight -1 on edge 1 -> 2");
        let json = err.to_json();
        assert_eq!(json["error"]["code"], 3);
        assert_eq!(json["error"]["type"], "invalid_graph");
        assert!(json["error"]["message"]
            .as_str()
            .unwrap()
            .contains("negative weight"));
    }
}
