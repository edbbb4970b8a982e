// Tool dispatch - caller-facing operations over the two pipelines

use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::collect::collect_diagnostics;
use crate::config::ProjectContext;
use crate::engine::{TestEngine, TypeCheckEngine};
use crate::error::ToolError;
use crate::flatten::flatten_tree;
use crate::report::{format_test_report, format_type_errors};

/// Payload handed back across the protocol boundary. Failures are flagged
/// and carried as text, never thrown across the boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolOutput {
    pub text: String,
    pub is_error: bool,
}

impl ToolOutput {
    fn success(text: String) -> Self {
        Self {
            text,
            is_error: false,
        }
    }

    fn error(text: String) -> Self {
        Self {
            text,
            is_error: true,
        }
    }
}

/// The two verification tools, bound to one project context and its engine
/// collaborators.
pub struct VerifyService {
    ctx: ProjectContext,
    test_engine: Box<dyn TestEngine>,
    typecheck_engine: Box<dyn TypeCheckEngine>,
}

impl VerifyService {
    pub fn new(
        ctx: ProjectContext,
        test_engine: Box<dyn TestEngine>,
        typecheck_engine: Box<dyn TypeCheckEngine>,
    ) -> Self {
        Self {
            ctx,
            test_engine,
            typecheck_engine,
        }
    }

    /// Protocol-facing entry point: dispatch by tool name and convert every
    /// failure into an error-flagged payload. Nothing is retried and no
    /// partial report is ever synthesized.
    pub fn handle(&self, tool: &str, args: &Value) -> ToolOutput {
        let result = match tool {
            "run_tests" => {
                selector(args, "testFiles").and_then(|files| self.run_tests(files.as_deref()))
            }
            "type_check" => {
                selector(args, "files").and_then(|files| self.type_check(files.as_deref()))
            }
            other => Err(ToolError::UnknownTool(other.to_string())),
        };

        match result {
            Ok(text) => ToolOutput::success(text),
            Err(err) => {
                warn!(tool, error = %err, "tool invocation failed");
                ToolOutput::error(err.to_string())
            }
        }
    }

    /// Run the selected tests (whole project when `files` is absent) and
    /// render the summary report.
    pub fn run_tests(&self, files: Option<&[String]>) -> Result<String, ToolError> {
        let tree = self.test_engine.run(&self.ctx, files)?;
        let entities = flatten_tree(tree.as_ref(), &[])?;
        debug!(cases = entities.len(), "flattened test results");
        Ok(format_test_report(&entities))
    }

    /// Type-check the project (or a selection) and render the diagnostic
    /// report.
    pub fn type_check(&self, files: Option<&[String]>) -> Result<String, ToolError> {
        let records = collect_diagnostics(self.typecheck_engine.as_ref(), &self.ctx, files)?;
        Ok(format_type_errors(&records))
    }
}

/// Normalize an optional selector argument: absent/null means the whole
/// project, a single string or an array of strings selects files. An empty
/// array also means the whole project. Anything else never starts the
/// operation.
fn selector(args: &Value, argument: &str) -> Result<Option<Vec<String>>, ToolError> {
    match args.get(argument) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(file)) => Ok(Some(vec![file.clone()])),
        Some(Value::Array(items)) if items.is_empty() => Ok(None),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| match item {
                Value::String(file) => Ok(file.clone()),
                other => Err(invalid(argument, other)),
            })
            .collect::<Result<Vec<String>, ToolError>>()
            .map(Some),
        Some(other) => Err(invalid(argument, other)),
    }
}

fn invalid(argument: &str, value: &Value) -> ToolError {
    let kind = match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    };
    ToolError::InvalidArgument {
        argument: argument.to_string(),
        reason: format!("expected a string or an array of strings, got {kind}"),
    }
}
