//! reportify: result normalization for remotely invokable verification tools.
//!
//! Exposes two developer-verification actions, `run_tests` and `type_check`,
//! to a surrounding protocol layer. The test and type-check engines stay
//! external collaborators behind the traits in [`engine`]; this crate walks
//! their reports, normalizes them, and renders deterministic text.

pub mod collect;
pub mod config;
pub mod engine;
pub mod error;
pub mod flatten;
pub mod logging;
pub mod report;
pub mod state;
pub mod tools;

pub use collect::collect_diagnostics;
pub use config::ProjectContext;
pub use error::ToolError;
pub use flatten::flatten_tree;
pub use report::{format_test_report, format_type_errors};
pub use tools::{ToolOutput, VerifyService};
