// Result value types produced by the two pipelines

use crate::state::TestState;
use serde::Serialize;

/// A single error attached to a failed test case
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TestFailure {
    /// Human-readable assertion or runtime error message
    pub message: Option<String>,
    /// Textual expected/actual comparison, possibly multi-line
    pub diff: Option<String>,
}

impl TestFailure {
    /// Failure with a message and no diff
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            diff: None,
        }
    }

    /// Failure with both a message and a diff
    pub fn with_diff(message: impl Into<String>, diff: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            diff: Some(diff.into()),
        }
    }
}

/// Evaluated outcome of a leaf test case
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CaseOutcome {
    pub state: TestState,
    /// Error detail; populated for failures, empty otherwise
    pub errors: Vec<TestFailure>,
}

impl CaseOutcome {
    pub fn passed() -> Self {
        Self {
            state: TestState::Passed,
            errors: Vec::new(),
        }
    }

    pub fn skipped() -> Self {
        Self {
            state: TestState::Skipped,
            errors: Vec::new(),
        }
    }

    pub fn failed(errors: Vec<TestFailure>) -> Self {
        Self {
            state: TestState::Failed,
            errors,
        }
    }
}

/// Path-labeled test entity: a flattened leaf annotated with its hierarchical
/// location. `path` runs from the originating file/module down to the case
/// itself; the first element is the grouping key for reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlatTest {
    pub name: String,
    pub path: Vec<String>,
    /// `None` only for stray container entries; reports drop those
    pub outcome: Option<CaseOutcome>,
}

impl FlatTest {
    /// Originating file/module identifier (first path segment)
    pub fn file(&self) -> &str {
        self.path.first().map(String::as_str).unwrap_or("")
    }
}

/// A single static-analysis finding, normalized for presentation.
///
/// `file` is relative to the project root and empty for diagnostics with no
/// file association (line and column are then 0).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeError {
    pub file: String,
    pub line: u32,
    pub column: u32,
    pub code: u32,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_outcome_passed() {
        let outcome = CaseOutcome::passed();
        assert_eq!(outcome.state, TestState::Passed);
        assert!(outcome.errors.is_empty());
    }

    #[test]
    fn test_case_outcome_failed_keeps_errors() {
        let outcome = CaseOutcome::failed(vec![TestFailure::message("expected 1 to be 2")]);
        assert_eq!(outcome.state, TestState::Failed);
        assert_eq!(outcome.errors.len(), 1);
        assert_eq!(
            outcome.errors[0].message.as_deref(),
            Some("expected 1 to be 2")
        );
        assert!(outcome.errors[0].diff.is_none());
    }

    #[test]
    fn test_flat_test_file_is_first_segment() {
        let entity = FlatTest {
            name: "case1".to_string(),
            path: vec!["a.test.ts".to_string(), "suite1".to_string(), "case1".to_string()],
            outcome: Some(CaseOutcome::passed()),
        };
        assert_eq!(entity.file(), "a.test.ts");
    }

    #[test]
    fn test_flat_test_file_empty_path() {
        let entity = FlatTest {
            name: "x".to_string(),
            path: Vec::new(),
            outcome: None,
        };
        assert_eq!(entity.file(), "");
    }

    #[test]
    fn test_test_state_other_round_trip() {
        let state = TestState::Other("todo".to_string());
        assert_eq!(state.as_str(), "todo");
        assert_ne!(state, TestState::Passed);
    }
}
