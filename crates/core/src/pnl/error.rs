//! Profit & loss configuration error types.

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors raised when building an expense allocation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StatementError {
    /// Allocation fractions do not sum to exactly 1.
    #[error("Expense allocation fractions must sum to 1, got {sum}")]
    AllocationNotUnit {
        /// The actual sum of the configured fractions.
        sum: Decimal,
    },

    /// An allocation fraction falls outside [0, 1].
    #[error("Expense allocation fraction for {category} must be between 0 and 1, got {value}")]
    FractionOutOfRange {
        /// Allocation category name.
        category: &'static str,
        /// Out-of-range value.
        value: Decimal,
    },
}
