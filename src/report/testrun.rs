// Test report formatter - aggregate summary plus per-file failure detail

use super::{group_by_file, underline};
use crate::state::{CaseOutcome, FlatTest, TestState};

const TITLE: &str = "Test Results";

/// Render the flat entity sequence for one run as a single text block.
///
/// Passing files are aggregate-counted only, never detailed, so output stays
/// proportional to the number of problems rather than the number of tests.
pub fn format_test_report(entities: &[FlatTest]) -> String {
    // Stray containers carry no outcome and are dropped up front
    let finished: Vec<(&FlatTest, &CaseOutcome)> = entities
        .iter()
        .filter_map(|entity| entity.outcome.as_ref().map(|outcome| (entity, outcome)))
        .collect();

    // Total counts every finished entity, whatever its state
    let total = finished.len();
    let count = |state: TestState| {
        finished
            .iter()
            .filter(|(_, outcome)| outcome.state == state)
            .count()
    };
    let passed = count(TestState::Passed);
    let failed = count(TestState::Failed);
    let skipped = count(TestState::Skipped);

    let mut lines: Vec<String> = Vec::new();
    lines.push(TITLE.to_string());
    lines.push("=".repeat(TITLE.len()));
    lines.push(format!("Total Tests: {total}"));
    lines.push(format!("✓ Passed: {passed}"));
    if failed > 0 {
        lines.push(format!("✗ Failed: {failed}"));
    }
    if skipped > 0 {
        lines.push(format!("- Skipped: {skipped}"));
    }
    lines.push(String::new());

    for (file, group) in group_by_file(finished, |(entity, _)| entity.file()) {
        let failing: Vec<&(&FlatTest, &CaseOutcome)> = group
            .iter()
            .filter(|(_, outcome)| outcome.state == TestState::Failed)
            .collect();
        if failing.is_empty() {
            continue;
        }

        lines.push(format!("File: {file}"));
        lines.push(underline(&file));
        for (entity, outcome) in failing {
            lines.push(String::new());
            let under_file = entity.path.get(1..).unwrap_or_default();
            lines.push(format!("✗ {}", under_file.join(" > ")));
            for error in &outcome.errors {
                if let Some(message) = &error.message {
                    lines.push(format!("  Error: {message}"));
                }
                if let Some(diff) = &error.diff {
                    lines.push("  Diff:".to_string());
                    for diff_line in diff.lines() {
                        lines.push(format!("    {diff_line}"));
                    }
                }
            }
        }
        lines.push(String::new());
    }

    lines.join("\n")
}
