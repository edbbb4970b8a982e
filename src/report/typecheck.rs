// Type-check report formatter - grouped diagnostic listing

use super::{group_by_file, underline};
use crate::state::TypeError;

/// Text returned when the engine reported no diagnostics
pub const NO_ERRORS: &str = "No type errors found.";

/// Render the normalized record sequence as a single text block
pub fn format_type_errors(records: &[TypeError]) -> String {
    if records.is_empty() {
        return NO_ERRORS.to_string();
    }

    let noun = if records.len() == 1 {
        "type error"
    } else {
        "type errors"
    };

    let mut lines: Vec<String> = Vec::new();
    lines.push(format!("Found {} {}:", records.len(), noun));
    lines.push(String::new());

    let grouped = group_by_file(records.iter().collect::<Vec<_>>(), |record| {
        record.file.as_str()
    });
    for (file, group) in grouped {
        lines.push(format!("File: {file}"));
        lines.push(underline(&file));
        for record in group {
            lines.push(format!(
                "{}:{} - error TS{}: {}",
                record.line, record.column, record.code, record.message
            ));
        }
        lines.push(String::new());
    }

    lines.join("\n")
}
