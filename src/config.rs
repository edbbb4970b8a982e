// Per-invocation project configuration

use std::path::PathBuf;

/// Root of the project a tool invocation operates on.
///
/// Threaded explicitly into both pipelines at call time so a single process
/// can serve multiple project contexts.
#[derive(Debug, Clone)]
pub struct ProjectContext {
    pub root: PathBuf,
}

impl ProjectContext {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}
