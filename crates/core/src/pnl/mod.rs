//! Simplified profit & loss statements.

pub mod builder;
pub mod error;
pub mod types;

#[cfg(test)]
mod tests;

pub use builder::ProfitAndLossBuilder;
pub use error::StatementError;
pub use types::{
    Expense, ExpenseAllocation, ExpenseBreakdown, ExpenseSection, ProfitLossStatement,
    ProfitMargins, ProfitSection, RevenueSection, StatementKpis,
};
