//! Catalog validation and per-row diagnostics.

pub mod catalog;
pub mod diagnostics;

pub use catalog::{validate_catalog, ValidationResult};
pub use diagnostics::{Diagnostic, DiagnosticKind, Diagnostics};
