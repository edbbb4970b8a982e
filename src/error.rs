// Error taxonomy for tool invocations

use std::path::PathBuf;
use thiserror::Error;

/// Everything a tool invocation can fail with. All variants surface to the
/// caller as an error-flagged payload; none abort the process.
#[derive(Debug, Error)]
pub enum ToolError {
    /// Malformed selector argument; the operation never starts
    #[error("invalid argument `{argument}`: {reason}")]
    InvalidArgument { argument: String, reason: String },

    /// No type-check configuration discoverable from the project root upward
    #[error("no type-check configuration found from {}", root.display())]
    ConfigNotFound { root: PathBuf },

    /// Configuration file exists but does not parse
    #[error("failed to parse {}: {message}", path.display())]
    ConfigParse { path: PathBuf, message: String },

    /// Configuration parsed but option validation failed; message carries all
    /// validation errors joined with newlines
    #[error("invalid type-check configuration: {0}")]
    ConfigValidation(String),

    /// Caller asked for an operation this service does not expose
    #[error("unknown tool: {0}")]
    UnknownTool(String),

    /// Failure propagated from an engine collaborator, including outcome
    /// evaluation errors during flattening
    #[error(transparent)]
    Engine(#[from] anyhow::Error),
}
