//! Portfolio-level revenue aggregation.

use rust_decimal::Decimal;

use crate::booking::Booking;
use crate::commission::{CommissionCalculator, CommissionRuleSet};

use super::types::RevenueMetrics;

/// Folds a booking collection into portfolio metrics.
pub struct RevenueAggregator;

impl RevenueAggregator {
    /// Aggregates a booking collection into [`RevenueMetrics`].
    ///
    /// An empty collection yields all-zero sums and empty maps. Every ratio
    /// is zero-guarded; the result never contains a division artifact.
    #[must_use]
    pub fn aggregate(bookings: &[Booking], rules: &CommissionRuleSet) -> RevenueMetrics {
        let mut metrics = RevenueMetrics::default();

        for booking in bookings {
            let calc = CommissionCalculator::calculate(booking, rules);

            metrics.total_revenue += calc.gross_amount;
            metrics.total_commissions += calc.total_commissions;
            metrics.total_net_profit += calc.net_profit;

            *metrics
                .revenue_by_category
                .entry(booking.category)
                .or_default() += booking.gross_amount;
            *metrics
                .revenue_by_month
                .entry(booking.month_key())
                .or_default() += booking.gross_amount;
        }

        metrics.booking_count = bookings.len();
        metrics.average_margin = if metrics.total_revenue > Decimal::ZERO {
            (metrics.total_net_profit / metrics.total_revenue * Decimal::ONE_HUNDRED).round_dp(2)
        } else {
            Decimal::ZERO
        };
        metrics.average_booking_value = if bookings.is_empty() {
            Decimal::ZERO
        } else {
            metrics.total_revenue / Decimal::from(bookings.len() as u64)
        };

        metrics
    }
}
