use std::path::PathBuf;

use thiserror::Error;

use crate::graph::NodeId;

/// Convenient result alias for the wayfinder library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised for malformed construction input or unusable beacon readings.
    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },

    /// Raised when a closest-node lookup runs against a map without nodes.
    #[error("the map contains no nodes")]
    EmptyMap,

    /// Raised when no route connects the current position to the goal.
    #[error("no valid path between {start}, {goal}")]
    NoValidPath { start: String, goal: String },

    /// Path reconstruction found two consecutive nodes with no edge between
    /// them. The map was mutated during planning or its invariants are broken.
    #[error("an invalid path was encountered: no edge between node {from} and node {to}")]
    InternalInconsistency { from: NodeId, to: NodeId },

    /// Raised when a node identifier is not present in the map.
    #[error("unknown node id {id}")]
    UnknownNode { id: NodeId },

    /// Raised when a room name could not be found in the map.
    #[error("unknown room name: {name}{}", format_suggestions(.suggestions))]
    UnknownRoom {
        name: String,
        suggestions: Vec<String>,
    },

    /// Neither an explicit building path nor the environment override was given.
    #[error("no building document configured; pass --building or set {}", crate::document::BUILDING_ENV)]
    BuildingNotConfigured,

    /// Building document could not be located at the resolved path.
    #[error("building document not found at {path}")]
    BuildingNotFound { path: PathBuf },

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Wrapper for JSON decoding errors.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn invalid_argument(message: impl Into<String>) -> Self {
        Error::InvalidArgument {
            message: message.into(),
        }
    }
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
