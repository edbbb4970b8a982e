// Test engine seam - the reported result tree

use std::fmt;

use anyhow::Result;

use crate::config::ProjectContext;
use crate::state::CaseOutcome;

/// Zero-argument outcome query for a reported test case.
///
/// Evaluation may run engine-side computation and is allowed to fail. A
/// failure aborts the whole traversal instead of dropping the case.
pub trait CaseReport: Send + Sync {
    fn name(&self) -> &str;
    fn outcome(&self) -> Result<CaseOutcome>;
}

/// A case whose outcome the engine already materialized
pub struct StaticCase {
    name: String,
    outcome: CaseOutcome,
}

impl StaticCase {
    pub fn new(name: impl Into<String>, outcome: CaseOutcome) -> Self {
        Self {
            name: name.into(),
            outcome,
        }
    }
}

impl CaseReport for StaticCase {
    fn name(&self) -> &str {
        &self.name
    }

    fn outcome(&self) -> Result<CaseOutcome> {
        Ok(self.outcome.clone())
    }
}

/// Node of the reported test-result tree
pub enum TestNode {
    /// Top-level file/module entry; `id` is the file or module identifier
    Module { id: String, children: Vec<TestNode> },
    /// Named group of cases or nested suites
    Suite {
        name: String,
        children: Vec<TestNode>,
    },
    /// Leaf test case with a lazily evaluated outcome
    Case(Box<dyn CaseReport>),
    /// Node kinds this version does not recognize; traversal skips them
    Unknown,
}

impl TestNode {
    pub fn module(id: impl Into<String>, children: Vec<TestNode>) -> Self {
        TestNode::Module {
            id: id.into(),
            children,
        }
    }

    pub fn suite(name: impl Into<String>, children: Vec<TestNode>) -> Self {
        TestNode::Suite {
            name: name.into(),
            children,
        }
    }

    /// Leaf case wrapping an already materialized outcome
    pub fn case(name: impl Into<String>, outcome: CaseOutcome) -> Self {
        TestNode::Case(Box::new(StaticCase::new(name, outcome)))
    }
}

impl fmt::Debug for TestNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TestNode::Module { id, children } => f
                .debug_struct("Module")
                .field("id", id)
                .field("children", children)
                .finish(),
            TestNode::Suite { name, children } => f
                .debug_struct("Suite")
                .field("name", name)
                .field("children", children)
                .finish(),
            TestNode::Case(case) => f.debug_tuple("Case").field(&case.name()).finish(),
            TestNode::Unknown => f.write_str("Unknown"),
        }
    }
}

/// External test-execution collaborator.
///
/// Runs the selected test files (the whole project when `files` is absent)
/// and returns the reported result tree, if anything ran. Engine-internal
/// concurrency, spawning, and cancellation are the engine's business.
pub trait TestEngine: Send + Sync {
    fn run(&self, ctx: &ProjectContext, files: Option<&[String]>) -> Result<Option<TestNode>>;
}
