//! Commission rule sets and per-booking calculation.

pub mod calculator;
pub mod error;
pub mod rules;
pub mod types;


pub use calculator::CommissionCalculator;
pub use error::CommissionError;
pub use rules::CommissionRuleSet;
pub use types::{BreakdownLine, CalculationMode, CommissionRule, FinancialCalculation, RateTier};
