//! Error types and exit codes for waymark
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure (including "no path" outcomes)
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (unknown vertex, missing or invalid graph file)

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes per the waymark CLI contract
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - unknown vertex, bad graph file (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during waymark operations
#[derive(Error, Debug)]
pub enum WaymarkError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("--format may only be specified once")]
    DuplicateFormat,

    #[error("{0}")]
    UsageError(String),

    // Data errors (exit code 3)
    #[error("graph file not found: {path:?}")]
    GraphNotFound { path: PathBuf },

    #[error("invalid graph file {path:?}: {reason}")]
    InvalidGraph { path: PathBuf, reason: String },

    #[error("unknown vertex: {id}")]
    UnknownVertex { id: String },

    // Negative outcomes and generic failures (exit code 1)
    #[error("no path from {from} to {to}")]
    NoPath { from: String, to: String },

    #[error("extract from empty queue")]
    EmptyQueue,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl WaymarkError {
    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            WaymarkError::UnknownFormat(_)
            | WaymarkError::DuplicateFormat
            | WaymarkError::UsageError(_) => ExitCode::Usage,

            WaymarkError::GraphNotFound { .. }
            | WaymarkError::InvalidGraph { .. }
            | WaymarkError::UnknownVertex { .. } => ExitCode::Data,

            WaymarkError::NoPath { .. }
            | WaymarkError::EmptyQueue
            | WaymarkError::Io(_)
            | WaymarkError::Json(_)
            | WaymarkError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            WaymarkError::UnknownFormat(_) => "unknown_format",
            WaymarkError::DuplicateFormat => "duplicate_format",
            WaymarkError::UsageError(_) => "usage_error",
            WaymarkError::GraphNotFound { .. } => "graph_not_found",
            WaymarkError::InvalidGraph { .. } => "invalid_graph",
            WaymarkError::UnknownVertex { .. } => "unknown_vertex",
            WaymarkError::NoPath { .. } => "no_path",
            WaymarkError::EmptyQueue => "empty_queue",
            WaymarkError::Io(_) => "io_error",
            WaymarkError::Json(_) => "json_error",
            WaymarkError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output
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

/// Result type alias for waymark operations
pub type Result<T> = std::result::Result<T, WaymarkError>;
