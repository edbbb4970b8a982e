// Type-check engine seam

use std::path::{Path, PathBuf};

/// Project configuration resolved by the engine. Compiler options stay opaque
/// to this crate; only the resolved file set matters for reporting.
#[derive(Debug, Clone)]
pub struct LoadedProject {
    pub config_path: PathBuf,
    pub file_names: Vec<String>,
}

/// Why a discovered configuration could not be loaded
#[derive(Debug, Clone)]
pub enum ProjectLoadError {
    /// The file exists but does not parse
    Parse(String),
    /// The file parses but option validation failed; every message is kept
    Validation(Vec<String>),
}

/// Where a diagnostic points, with enough context to derive line/column
#[derive(Debug, Clone)]
pub struct SourceLocation {
    /// Absolute path of the source file
    pub path: PathBuf,
    /// Full source text of the file
    pub text: String,
    /// Byte offset of the diagnostic start within `text`
    pub start: usize,
}

/// Diagnostic message, possibly a nested chain of elaborations
#[derive(Debug, Clone)]
pub enum DiagnosticText {
    Plain(String),
    Chain {
        text: String,
        details: Vec<DiagnosticText>,
    },
}

impl DiagnosticText {
    /// Flatten the chain depth-first into one string, one message per line
    pub fn flatten(&self) -> String {
        fn walk(text: &DiagnosticText, out: &mut Vec<String>) {
            match text {
                DiagnosticText::Plain(line) => out.push(line.clone()),
                DiagnosticText::Chain { text, details } => {
                    out.push(text.clone());
                    for detail in details {
                        walk(detail, out);
                    }
                }
            }
        }

        let mut lines = Vec::new();
        walk(self, &mut lines);
        lines.join("\n")
    }
}

/// A raw diagnostic as reported by the engine, before normalization
#[derive(Debug, Clone)]
pub struct EngineDiagnostic {
    /// Absent for diagnostics with no file association (global config errors)
    pub location: Option<SourceLocation>,
    pub code: u32,
    pub message: DiagnosticText,
}

/// External type-check collaborator: configuration discovery, option
/// resolution, and static-analysis diagnostics (pre-emit only).
pub trait TypeCheckEngine: Send + Sync {
    /// Discover the configuration file governing `search_from`
    fn find_config(&self, search_from: &Path) -> Option<PathBuf>;

    /// Parse and validate the configuration into a resolved project
    fn load_project(&self, config_path: &Path) -> Result<LoadedProject, ProjectLoadError>;

    /// Diagnostics for the resolved file set, narrowed to `files` when given
    fn check(&self, project: &LoadedProject, files: Option<&[String]>) -> Vec<EngineDiagnostic>;
}

/// Walk ancestor directories looking for a configuration file by name.
/// Engines typically call this from their `find_config` implementation.
pub fn find_config_upward(start: &Path, file_name: &str) -> Option<PathBuf> {
    let mut dir = Some(start);
    while let Some(current) = dir {
        let candidate = current.join(file_name);
        if candidate.is_file() {
            return Some(candidate);
        }
        dir = current.parent();
    }
    None
}
