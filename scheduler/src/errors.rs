use std::num::ParseIntError;

use thiserror::Error;

/// Plugin construction failures. Fatal to startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid mode, got {0:?}")]
    InvalidMode(String),
    #[error("malformed plugin args: {0}")]
    MalformedArgs(#[from] serde_json::Error),
}

/// Failures of the host's read-only views.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListerError {
    /// Node is not part of the current snapshot
    #[error("node {0:?} not found")]
    NodeNotFound(String),
    /// The backing informer or store could not answer
    #[error("backend error: {0}")]
    Backend(String),
}

/// Admission gate failures. None of these are retried by the gate.
#[derive(Debug, Error)]
pub enum GangError {
    #[error("pod {pod} is missing label {label:?}")]
    MissingLabel { pod: String, label: &'static str },
    #[error("invalid minAvailable value {value:?}: {source}")]
    InvalidMinAvailable {
        value: String,
        #[source]
        source: ParseIntError,
    },
    #[error("error listing pods: {0}")]
    Query(#[from] ListerError),
}

impl GangError {
    /// Missing or unparsable labels, as opposed to a failed lookup.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            GangError::MissingLabel { .. } | GangError::InvalidMinAvailable { .. }
        )
    }
}

#[derive(Debug, Error)]
pub enum ScoreError {
    #[error("error getting node info: {0}")]
    NodeLookup(#[from] ListerError),
}
