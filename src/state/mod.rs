// State module - result data model
// Value types shared by the test and type-check pipelines

pub mod result;

pub use result::{CaseOutcome, FlatTest, TestFailure, TypeError};

use serde::Serialize;

/// Outcome state of a single executed test case
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TestState {
    Passed,
    Failed,
    Skipped,
    /// Any state the engine reports outside the three named ones
    #[serde(untagged)]
    Other(String),
}

impl TestState {
    pub fn as_str(&self) -> &str {
        match self {
            TestState::Passed => "passed",
            TestState::Failed => "failed",
            TestState::Skipped => "skipped",
            TestState::Other(state) => state,
        }
    }
}
