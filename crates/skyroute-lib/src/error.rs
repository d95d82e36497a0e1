use std::path::PathBuf;

use thiserror::Error;

use crate::graph::NodeId;
use crate::path::SearchLimit;
use crate::scoring::CostKind;

/// Convenient result alias for the SkyRoute library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when two airports share the same identifier.
    #[error("duplicate airport id {id}")]
    DuplicateNode { id: NodeId },

    /// Raised when a route references an airport that was never declared.
    #[error("route {from} -> {to} references unknown airport {missing}")]
    UnknownEdgeEndpoint {
        from: NodeId,
        to: NodeId,
        missing: NodeId,
    },

    /// Raised when a route carries a negative or non-finite cost attribute.
    #[error("route {from} -> {to} has invalid {attribute}: {value}")]
    InvalidEdgeCost {
        from: NodeId,
        to: NodeId,
        attribute: CostKind,
        value: f64,
    },

    /// Raised when a weight vector contains a negative or non-finite entry.
    #[error("invalid {kind} weight {value}; weights must be finite and non-negative")]
    InvalidWeight { kind: CostKind, value: f64 },

    /// Raised when the weather bounds are negative or non-finite.
    #[error("invalid weather configuration: {message}")]
    InvalidWeatherConfig { message: String },

    /// Raised when a path contains two consecutive airports without a route.
    #[error("path is invalid: no route from {from} to {to}")]
    InvalidPath { from: NodeId, to: NodeId },

    /// Raised when a path visits the same airport twice.
    #[error("path is invalid: airport {id} is visited more than once")]
    RevisitedNode { id: NodeId },

    /// Raised when a path names an airport that is not in the graph.
    #[error("path is invalid: unknown airport {id}")]
    UnknownNode { id: NodeId },

    /// Raised when a path has no airports at all.
    #[error("path is empty")]
    EmptyPath,

    /// Raised when an airport name or id could not be resolved.
    #[error("unknown airport: {name}{}", format_suggestions(.suggestions))]
    UnknownAirport {
        name: String,
        suggestions: Vec<String>,
    },

    /// Raised when no route could be found between two airports.
    #[error("no route found between {start} and {goal}")]
    RouteNotFound { start: String, goal: String },

    /// Raised when path enumeration was stopped by a search limit.
    #[error("route search stopped: {limit}")]
    SearchLimitExceeded { limit: SearchLimit },

    /// Dataset files could not be located at the resolved path.
    #[error("dataset not found at {path}")]
    DatasetNotFound { path: PathBuf },

    /// No suitable project directories could be resolved for this platform.
    #[error("failed to resolve project directories for the dataset")]
    ProjectDirsUnavailable,

    /// Raised when a dataset row fails validation.
    #[error("invalid {file} row {row}: {message}")]
    DatasetValidation {
        file: String,
        row: u64,
        message: String,
    },

    /// Wrapper for CSV parsing errors.
    #[error(transparent)]
    Csv(#[from] csv::Error),

    /// Wrapper for JSON serialization errors.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}
