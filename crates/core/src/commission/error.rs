//! Commission configuration error types.

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors raised when building a commission rule set.
///
/// These are all configuration defects caught up front; once a rule set is
/// constructed, calculation itself never fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommissionError {
    /// Rule set contains no rules.
    #[error("Commission rule set must contain at least one rule")]
    EmptyRuleSet,

    /// Designated default rule does not exist in the set.
    #[error("Default rule not found in rule set: {0}")]
    UnknownDefaultRule(String),

    /// Rule references a booking category the system does not know.
    #[error("Rule {rule}: unknown booking category: {category}")]
    UnknownCategory {
        /// Offending rule ID.
        rule: String,
        /// Unrecognized category value.
        category: String,
    },

    /// Rule references a calculation mode the system does not know.
    #[error("Rule {rule}: unknown calculation mode: {mode}")]
    UnknownMode {
        /// Offending rule ID.
        rule: String,
        /// Unrecognized mode value.
        mode: String,
    },

    /// A rate field falls outside [0, 1].
    #[error("Rule {rule}: {field} must be between 0 and 1, got {value}")]
    RateOutOfRange {
        /// Offending rule ID.
        rule: String,
        /// Name of the offending field.
        field: &'static str,
        /// Out-of-range value.
        value: Decimal,
    },

    /// A tiered rule has no tier schedule.
    #[error("Rule {rule}: tiered mode requires at least one tier")]
    MissingTiers {
        /// Offending rule ID.
        rule: String,
    },

    /// A tier schedule is not in ascending, well-formed order.
    #[error("Rule {rule}: tiers must be ascending with min <= max")]
    MisorderedTiers {
        /// Offending rule ID.
        rule: String,
    },
}
