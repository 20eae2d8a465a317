//! Error types for the shared crate

use thiserror::Error;

/// Model invariant violations
///
/// Raised by `validate()` helpers and payload constructors before anything
/// is sent to the backend.
#[derive(Debug, Error)]
pub enum ModelError {
    /// Prices must be finite and non-negative
    #[error("price must be a non-negative number, got {0}")]
    InvalidPrice(f64),

    /// Only occupied/ordering tables carry active-order metadata
    #[error("table {table_id} is {status} but carries active-order metadata")]
    OrphanOrderMetadata { table_id: String, status: String },

    /// Combo meals bundle at least two items
    #[error("combo meal requires at least 2 items, got {0}")]
    ComboTooSmall(usize),

    /// Order totals must match the sum of their line totals
    #[error("order total {total} does not match line sum {line_sum}")]
    TotalMismatch { total: f64, line_sum: f64 },
}
