use std::path::PathBuf;
use thiserror::Error;

/// Error types for the fuzzprop pipeline
#[derive(Debug, Error)]
pub enum PropError {
    #[error("Unrecognized hex character {character:?} at position {position} in address {value:?}")]
    InvalidAddress { value: String, position: usize, character: char },

    #[error("Invalid address {value:?}: {reason}")]
    MalformedAddress { value: String, reason: String },

    #[error("Invalid balance ceiling {0:?}")]
    InvalidCeiling(String),

    #[error("Trace of {events} events has no ContractCreated event, cannot split initialization from samples")]
    MissingContractCreation { events: usize },

    #[error("Failed to read trace file {path}: {source}")]
    TraceRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse trace file {path}: {source}")]
    TraceParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Fuzzer argument {key:?} conflicts: caller supplied {explicit}, derived {derived}")]
    ConfigConflict { key: String, explicit: String, derived: String },

    #[error("Invalid fuzzer argument {0:?}, expected key=value")]
    InvalidFuzzerArgument(String),

    #[error("Invalid property {name:?}: {reason}")]
    InvalidProperty { name: String, reason: String },

    #[error("Contract is not compatible:\n{}", .0.join("\n"))]
    Incompatible(Vec<String>),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type specific to fuzzprop operations
pub type PropResult<T> = Result<T, PropError>;

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Fatal,
    Warning,
}

impl PropError {
    /// Conflicts are the only failures the caller may choose to downgrade
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            PropError::ConfigConflict { .. } => ErrorSeverity::Warning,
            _ => ErrorSeverity::Fatal,
        }
    }
}
