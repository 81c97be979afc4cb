//! Profit & loss statement assembly.

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use crate::booking::Booking;
use crate::commission::CommissionRuleSet;
use crate::revenue::RevenueAggregator;

use super::types::{
    Expense, ExpenseAllocation, ExpenseSection, ProfitLossStatement, ProfitMargins, ProfitSection,
    RevenueSection, StatementKpis,
};

/// Combines portfolio revenue with an expense list into an income statement.
pub struct ProfitAndLossBuilder;

impl ProfitAndLossBuilder {
    /// Builds a simplified income statement.
    ///
    /// Gross profit is the portfolio's net profit after commissions;
    /// operating profit subtracts the expense total; net profit equals
    /// operating profit (no tax or interest modeling). Nothing is clamped:
    /// expenses exceeding gross profit produce negative profits and
    /// negative margins.
    #[must_use]
    pub fn build(
        bookings: &[Booking],
        expenses: &[Expense],
        rules: &CommissionRuleSet,
        allocation: &ExpenseAllocation,
    ) -> ProfitLossStatement {
        let metrics = RevenueAggregator::aggregate(bookings, rules);

        let total_expenses: Decimal = expenses.iter().map(|expense| expense.amount).sum();
        let mut by_category: BTreeMap<String, Decimal> = BTreeMap::new();
        for expense in expenses {
            *by_category.entry(expense.category.clone()).or_default() += expense.amount;
        }

        let gross_profit = metrics.total_net_profit;
        let operating_profit = gross_profit - total_expenses;
        let net_profit = operating_profit;

        let margin = |profit: Decimal| {
            if metrics.total_revenue > Decimal::ZERO {
                (profit / metrics.total_revenue * Decimal::ONE_HUNDRED).round_dp(2)
            } else {
                Decimal::ZERO
            }
        };

        let profit_per_booking = if metrics.booking_count > 0 {
            net_profit / Decimal::from(metrics.booking_count as u64)
        } else {
            Decimal::ZERO
        };

        ProfitLossStatement {
            revenue: RevenueSection {
                gross_revenue: metrics.total_revenue,
                commissions_paid: metrics.total_commissions,
                net_revenue: metrics.total_net_profit,
            },
            expenses: ExpenseSection {
                total: total_expenses,
                allocated: allocation.split(total_expenses),
                by_category,
            },
            profit: ProfitSection {
                gross_profit,
                operating_profit,
                net_profit,
                margins: ProfitMargins {
                    gross: margin(gross_profit),
                    operating: margin(operating_profit),
                    net: margin(net_profit),
                },
            },
            kpis: StatementKpis {
                revenue_per_booking: metrics.average_booking_value,
                profit_per_booking,
                commission_rate: margin(metrics.total_commissions),
            },
        }
    }
}
