//! Error types for expense tracking.

use tripdeck_core::error::TripdeckError;

/// Failures from expense validation and persistence.
#[derive(Debug, thiserror::Error)]
pub enum ExpenseError {
    #[error("invalid expense: {0}")]
    Validation(String),

    #[error("expense storage failure: {0}")]
    Storage(String),
}

impl From<ExpenseError> for TripdeckError {
    fn from(err: ExpenseError) -> Self {
        TripdeckError::Expense(err.to_string())
    }
}
