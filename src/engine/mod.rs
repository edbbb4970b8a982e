// Engine module - seams to the external test and type-check collaborators

pub mod test;
pub mod typecheck;

pub use test::{CaseReport, StaticCase, TestEngine, TestNode};
pub use typecheck::{
    find_config_upward, DiagnosticText, EngineDiagnostic, LoadedProject, ProjectLoadError,
    SourceLocation, TypeCheckEngine,
};
