//! Per-row notices raised while building a packing list.
//!
//! Nothing here changes what gets packed. Rows are still skipped or tallied
//! as before; the notices only let the operator see why.

use serde::{Deserialize, Serialize};

/// Why a row was skipped or downgraded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiagnosticKind {
    /// Quantity cell was not a number; row skipped.
    NonNumericQuantity,
    /// Quantity was zero or negative; row skipped.
    NonPositiveQuantity,
    /// Quantity was positive but below one whole unit; row skipped.
    FractionalQuantity,
    /// Quantity exceeded the per-row maximum; row packed at the maximum.
    QuantityCapped,
    /// Heating product without a `W/H` pattern; tallied as an accessory.
    MissingDimensions,
    /// No weight reference or no unit count for the model; weight reported as 0.
    UnknownWeight,
}

/// One notice about an input row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// 1-based row number in the order table.
    pub row: usize,
    pub kind: DiagnosticKind,
    pub message: String,
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Row {}: {}", self.row, self.message)
    }
}

/// Notices collected over a batch, in row order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Diagnostics {
    pub entries: Vec<Diagnostic>,
}

impl Diagnostics {
    /// Record a notice and log it.
    pub fn push(&mut self, row: usize, kind: DiagnosticKind, message: impl Into<String>) {
        let diagnostic = Diagnostic {
            row,
            kind,
            message: message.into(),
        };
        tracing::warn!("{}", diagnostic);
        self.entries.push(diagnostic);
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn of_kind(&self, kind: DiagnosticKind) -> impl Iterator<Item = &Diagnostic> {
        self.entries.iter().filter(move |d| d.kind == kind)
    }
}
