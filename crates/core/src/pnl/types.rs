//! Profit & loss data types.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use fareflow_shared::config::ExpenseSplitConfig;
use fareflow_shared::types::{ExpenseId, Rate};

use super::error::StatementError;

/// An expense record, supplied externally to the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Expense {
    /// Expense ID.
    pub id: ExpenseId,
    /// Free-form expense category (e.g. "office", "travel").
    pub category: String,
    /// Expense amount.
    pub amount: Decimal,
    /// Human description.
    pub description: String,
}

/// The cost-allocation split applied to total expenses for display.
///
/// This split is illustrative, not cost accounting: it is injected
/// configuration so a tenant can override it, and it must sum to exactly 1
/// so the allocated breakdown re-sums to the expense total.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ExpenseAllocation {
    /// Fraction allocated to salaries.
    pub salaries: Rate,
    /// Fraction allocated to marketing.
    pub marketing: Rate,
    /// Fraction allocated to technology.
    pub technology: Rate,
    /// Fraction allocated to operations.
    pub operations: Rate,
    /// Fraction allocated to everything else.
    pub other: Rate,
}

impl ExpenseAllocation {
    /// Builds an allocation, rejecting splits that do not sum to exactly 1.
    pub fn new(
        salaries: Rate,
        marketing: Rate,
        technology: Rate,
        operations: Rate,
        other: Rate,
    ) -> Result<Self, StatementError> {
        let sum = salaries.fraction()
            + marketing.fraction()
            + technology.fraction()
            + operations.fraction()
            + other.fraction();
        if sum != Decimal::ONE {
            return Err(StatementError::AllocationNotUnit { sum });
        }
        Ok(Self {
            salaries,
            marketing,
            technology,
            operations,
            other,
        })
    }

    /// Parses and validates an allocation from configuration.
    pub fn from_config(config: &ExpenseSplitConfig) -> Result<Self, StatementError> {
        let rate = |category: &'static str, value: Decimal| {
            Rate::new(value).map_err(|_| StatementError::FractionOutOfRange { category, value })
        };
        Self::new(
            rate("salaries", config.salaries)?,
            rate("marketing", config.marketing)?,
            rate("technology", config.technology)?,
            rate("operations", config.operations)?,
            rate("other", config.other)?,
        )
    }

    /// The illustrative 60/15/10/10/5 split shipped as the default.
    #[must_use]
    pub fn standard() -> Self {
        // Statically valid; the config defaults reproduce the same split
        // and are covered by tests.
        Self::from_config(&ExpenseSplitConfig::default()).unwrap_or(Self {
            salaries: Rate::ZERO,
            marketing: Rate::ZERO,
            technology: Rate::ZERO,
            operations: Rate::ZERO,
            other: Rate::ZERO,
        })
    }

    /// Splits a total across the allocation categories.
    ///
    /// Because the fractions sum to exactly 1, the pieces re-sum to the
    /// total with no residue.
    #[must_use]
    pub fn split(&self, total: Decimal) -> ExpenseBreakdown {
        ExpenseBreakdown {
            salaries: self.salaries.of(total),
            marketing: self.marketing.of(total),
            technology: self.technology.of(total),
            operations: self.operations.of(total),
            other: self.other.of(total),
        }
    }
}

/// Total expenses split across allocation categories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseBreakdown {
    /// Salaries share.
    pub salaries: Decimal,
    /// Marketing share.
    pub marketing: Decimal,
    /// Technology share.
    pub technology: Decimal,
    /// Operations share.
    pub operations: Decimal,
    /// Everything else.
    pub other: Decimal,
}

/// Revenue section of the statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevenueSection {
    /// Gross booking revenue.
    pub gross_revenue: Decimal,
    /// All commissions paid out of that revenue.
    pub commissions_paid: Decimal,
    /// Revenue net of commissions.
    pub net_revenue: Decimal,
}

/// Expense section of the statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseSection {
    /// Sum of all expense records.
    pub total: Decimal,
    /// Total split by the configured allocation.
    pub allocated: ExpenseBreakdown,
    /// Actual totals grouped by each record's own category.
    pub by_category: BTreeMap<String, Decimal>,
}

/// Profit margins relative to gross revenue, as percentages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfitMargins {
    /// Gross profit margin.
    pub gross: Decimal,
    /// Operating profit margin.
    pub operating: Decimal,
    /// Net profit margin.
    pub net: Decimal,
}

/// Profit section of the statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfitSection {
    /// Revenue net of commissions.
    pub gross_profit: Decimal,
    /// Gross profit minus total expenses. May be negative.
    pub operating_profit: Decimal,
    /// Same as operating profit; no tax or interest modeling.
    pub net_profit: Decimal,
    /// Margins relative to gross revenue.
    pub margins: ProfitMargins,
}

/// Headline KPIs derived from the statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatementKpis {
    /// Mean gross revenue per booking.
    pub revenue_per_booking: Decimal,
    /// Net profit per booking.
    pub profit_per_booking: Decimal,
    /// Commissions as a percentage of gross revenue.
    pub commission_rate: Decimal,
}

/// A simplified income statement over a booking portfolio.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfitLossStatement {
    /// Revenue section.
    pub revenue: RevenueSection,
    /// Expense section.
    pub expenses: ExpenseSection,
    /// Profit section.
    pub profit: ProfitSection,
    /// Headline KPIs.
    pub kpis: StatementKpis,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn rate(value: Decimal) -> Rate {
        Rate::new(value).unwrap()
    }

    #[test]
    fn test_standard_allocation_is_the_illustrative_split() {
        let allocation = ExpenseAllocation::standard();
        assert_eq!(allocation.salaries.fraction(), dec!(0.60));
        assert_eq!(allocation.marketing.fraction(), dec!(0.15));
        assert_eq!(allocation.technology.fraction(), dec!(0.10));
        assert_eq!(allocation.operations.fraction(), dec!(0.10));
        assert_eq!(allocation.other.fraction(), dec!(0.05));
    }

    #[test]
    fn test_allocation_rejects_non_unit_sum() {
        let result = ExpenseAllocation::new(
            rate(dec!(0.60)),
            rate(dec!(0.15)),
            rate(dec!(0.10)),
            rate(dec!(0.10)),
            rate(dec!(0.10)),
        );
        assert_eq!(
            result.unwrap_err(),
            StatementError::AllocationNotUnit { sum: dec!(1.05) }
        );
    }

    #[test]
    fn test_from_config_rejects_out_of_range_fraction() {
        let config = ExpenseSplitConfig {
            salaries: dec!(1.60),
            marketing: dec!(-0.15),
            technology: dec!(0.10),
            operations: dec!(0.10),
            other: dec!(0.05),
        };
        assert!(matches!(
            ExpenseAllocation::from_config(&config).unwrap_err(),
            StatementError::FractionOutOfRange {
                category: "salaries",
                ..
            }
        ));
    }

    #[test]
    fn test_split_resums_to_total() {
        let breakdown = ExpenseAllocation::standard().split(dec!(12345.67));
        let sum = breakdown.salaries
            + breakdown.marketing
            + breakdown.technology
            + breakdown.operations
            + breakdown.other;
        assert_eq!(sum, dec!(12345.67));
    }
}
