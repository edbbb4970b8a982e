// Diagnostic collector - drives the type-check engine and normalizes its output

use std::path::Path;

use tracing::debug;

use crate::config::ProjectContext;
use crate::engine::{EngineDiagnostic, ProjectLoadError, TypeCheckEngine};
use crate::error::ToolError;
use crate::state::TypeError;

/// Run the engine over the project (narrowed to `files` when given) and
/// produce the normalized record sequence.
///
/// Type errors in the checked code are a normal, successful result; only
/// configuration problems fail, and they fail without partial output.
pub fn collect_diagnostics(
    engine: &dyn TypeCheckEngine,
    ctx: &ProjectContext,
    files: Option<&[String]>,
) -> Result<Vec<TypeError>, ToolError> {
    let config_path = engine
        .find_config(&ctx.root)
        .ok_or_else(|| ToolError::ConfigNotFound {
            root: ctx.root.clone(),
        })?;
    debug!(config = %config_path.display(), "resolved type-check configuration");

    let project = engine.load_project(&config_path).map_err(|err| match err {
        ProjectLoadError::Parse(message) => ToolError::ConfigParse {
            path: config_path.clone(),
            message,
        },
        ProjectLoadError::Validation(messages) => {
            ToolError::ConfigValidation(messages.join("\n"))
        }
    })?;

    let diagnostics = engine.check(&project, files);
    debug!(
        files = project.file_names.len(),
        diagnostics = diagnostics.len(),
        "engine finished static analysis"
    );

    Ok(diagnostics
        .iter()
        .map(|diagnostic| normalize(diagnostic, &ctx.root))
        .collect())
}

fn normalize(diagnostic: &EngineDiagnostic, root: &Path) -> TypeError {
    let (file, line, column) = match &diagnostic.location {
        Some(location) => {
            let (line, column) = position_at(&location.text, location.start);
            (relative_to(&location.path, root), line, column)
        }
        None => (String::new(), 0, 0),
    };

    TypeError {
        file,
        line,
        column,
        code: diagnostic.code,
        message: diagnostic.message.flatten(),
    }
}

/// 1-based line/column of a byte offset. Offsets past the end of the text, or
/// inside a multi-byte character, clamp to the nearest valid position.
fn position_at(text: &str, offset: usize) -> (u32, u32) {
    let mut offset = offset.min(text.len());
    while !text.is_char_boundary(offset) {
        offset -= 1;
    }

    let mut line = 1u32;
    let mut column = 1u32;
    for ch in text[..offset].chars() {
        if ch == '\n' {
            line += 1;
            column = 1;
        } else {
            column += 1;
        }
    }
    (line, column)
}

fn relative_to(path: &Path, root: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    relative.to_string_lossy().replace('\\', "/")
}
