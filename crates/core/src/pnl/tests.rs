//! Property-based tests for profit & loss statements.

use chrono::{TimeZone, Utc};
use proptest::prelude::*;
use rust_decimal::Decimal;

use fareflow_shared::types::{BookingId, Currency, ExpenseId, TenantId};

use crate::booking::{Booking, BookingCategory};
use crate::commission::CommissionRuleSet;

use super::builder::ProfitAndLossBuilder;
use super::types::{Expense, ExpenseAllocation};

fn booking_amounts() -> impl Strategy<Value = Vec<Decimal>> {
    prop::collection::vec((0i64..10_000_000i64).prop_map(|cents| Decimal::new(cents, 2)), 0..20)
}

fn expense_records() -> impl Strategy<Value = Vec<Expense>> {
    prop::collection::vec(
        ((0i64..1_000_000i64), 0usize..4).prop_map(|(cents, category)| Expense {
            id: ExpenseId::new(),
            category: ["office", "travel", "software", "misc"][category].to_string(),
            amount: Decimal::new(cents, 2),
            description: String::new(),
        }),
        0..15,
    )
}

fn bookings_from(amounts: &[Decimal]) -> Vec<Booking> {
    amounts
        .iter()
        .map(|&gross| Booking {
            id: BookingId::new(),
            tenant_id: TenantId::new(),
            category: BookingCategory::Domestic,
            gross_amount: gross,
            currency: Currency::Eur,
            created_at: Utc.with_ymd_and_hms(2026, 7, 4, 0, 0, 0).unwrap(),
            assigned_agent_id: None,
            lead: None,
        })
        .collect()
}

proptest! {
    /// The statement's arithmetic holds for any portfolio and expense list:
    /// profits chain from revenue, the allocated split re-sums to the
    /// expense total, and the by-category map re-sums to it too.
    #[test]
    fn prop_statement_conservation(
        amounts in booking_amounts(),
        expenses in expense_records(),
    ) {
        let bookings = bookings_from(&amounts);
        let statement = ProfitAndLossBuilder::build(
            &bookings,
            &expenses,
            &CommissionRuleSet::standard(),
            &ExpenseAllocation::standard(),
        );

        prop_assert_eq!(
            statement.profit.operating_profit,
            statement.profit.gross_profit - statement.expenses.total
        );
        prop_assert_eq!(statement.profit.net_profit, statement.profit.operating_profit);
        prop_assert_eq!(
            statement.revenue.gross_revenue,
            statement.revenue.commissions_paid + statement.revenue.net_revenue
        );

        let allocated = &statement.expenses.allocated;
        prop_assert_eq!(
            allocated.salaries
                + allocated.marketing
                + allocated.technology
                + allocated.operations
                + allocated.other,
            statement.expenses.total
        );
        let by_category: Decimal = statement.expenses.by_category.values().copied().sum();
        prop_assert_eq!(by_category, statement.expenses.total);
    }

    /// Building the same statement twice yields identical output.
    #[test]
    fn prop_statement_deterministic(
        amounts in booking_amounts(),
        expenses in expense_records(),
    ) {
        let bookings = bookings_from(&amounts);
        let rules = CommissionRuleSet::standard();
        let allocation = ExpenseAllocation::standard();

        let first = ProfitAndLossBuilder::build(&bookings, &expenses, &rules, &allocation);
        let second = ProfitAndLossBuilder::build(&bookings, &expenses, &rules, &allocation);
        prop_assert_eq!(first, second);
    }

    /// Zero-revenue portfolios never produce division artifacts, whatever
    /// the expense list looks like.
    #[test]
    fn prop_zero_revenue_margins_are_zero(
        expenses in expense_records(),
    ) {
        let statement = ProfitAndLossBuilder::build(
            &[],
            &expenses,
            &CommissionRuleSet::standard(),
            &ExpenseAllocation::standard(),
        );

        prop_assert_eq!(statement.profit.margins.gross, Decimal::ZERO);
        prop_assert_eq!(statement.profit.margins.operating, Decimal::ZERO);
        prop_assert_eq!(statement.profit.margins.net, Decimal::ZERO);
        prop_assert_eq!(statement.kpis.commission_rate, Decimal::ZERO);
        prop_assert_eq!(statement.kpis.revenue_per_booking, Decimal::ZERO);
        prop_assert_eq!(statement.kpis.profit_per_booking, Decimal::ZERO);
    }
}
