//! Per-agent attribution and performance aggregation.

use rust_decimal::Decimal;

use fareflow_shared::types::AgentId;

use crate::booking::Booking;
use crate::commission::{CommissionCalculator, CommissionRuleSet};

use super::types::AgentMetrics;

/// Restricts revenue folding to the bookings attributed to one agent.
pub struct AgentAttributionAggregator;

impl AgentAttributionAggregator {
    /// Aggregates performance figures for one agent.
    ///
    /// A booking is attributed via [`Booking::attributed_agent`]: the
    /// booking-level assignment when present, otherwise the originating
    /// lead's. Commission earned counts base + markup only; platform fees
    /// and partner commissions are not the agent's earnings.
    ///
    /// An agent with no attributed bookings gets an all-zero result.
    #[must_use]
    pub fn aggregate_for_agent(
        bookings: &[Booking],
        agent_id: AgentId,
        rules: &CommissionRuleSet,
    ) -> AgentMetrics {
        let mut metrics = AgentMetrics::empty(agent_id);

        for booking in bookings {
            if booking.attributed_agent() != Some(agent_id) {
                continue;
            }

            let calc = CommissionCalculator::calculate(booking, rules);
            metrics.total_sales += calc.gross_amount;
            metrics.total_commission_earned += calc.base_commission + calc.markup_commission;
            metrics.total_net_profit += calc.net_profit;
            metrics.booking_count += 1;
        }

        if metrics.booking_count > 0 {
            metrics.average_deal_size =
                metrics.total_sales / Decimal::from(metrics.booking_count as u64);
        }
        if metrics.total_sales > Decimal::ZERO {
            metrics.margin_percentage =
                (metrics.total_net_profit / metrics.total_sales * Decimal::ONE_HUNDRED).round_dp(2);
        }

        metrics
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::{BookingCategory, LeadRef};
    use chrono::{TimeZone, Utc};
    use fareflow_shared::types::{BookingId, Currency, LeadId, TenantId};
    use rust_decimal_macros::dec;

    fn booking(
        gross: Decimal,
        assigned: Option<AgentId>,
        lead_assigned: Option<AgentId>,
    ) -> Booking {
        Booking {
            id: BookingId::new(),
            tenant_id: TenantId::new(),
            category: BookingCategory::Domestic,
            gross_amount: gross,
            currency: Currency::Eur,
            created_at: Utc.with_ymd_and_hms(2026, 5, 20, 10, 0, 0).unwrap(),
            assigned_agent_id: assigned,
            lead: lead_assigned.map(|agent| LeadRef {
                id: LeadId::new(),
                assigned_agent_id: Some(agent),
            }),
        }
    }

    #[test]
    fn test_unknown_agent_yields_all_zero_metrics() {
        let bookings = vec![booking(dec!(75000), Some(AgentId::new()), None)];
        let metrics = AgentAttributionAggregator::aggregate_for_agent(
            &bookings,
            AgentId::new(),
            &CommissionRuleSet::standard(),
        );

        assert_eq!(metrics.booking_count, 0);
        assert_eq!(metrics.total_sales, dec!(0));
        assert_eq!(metrics.total_commission_earned, dec!(0));
        assert_eq!(metrics.total_net_profit, dec!(0));
        assert_eq!(metrics.average_deal_size, dec!(0));
        assert_eq!(metrics.margin_percentage, dec!(0));
    }

    #[test]
    fn test_lead_inherited_attribution_counts() {
        let agent = AgentId::new();
        let bookings = vec![
            booking(dec!(10000), Some(agent), None),
            booking(dec!(20000), None, Some(agent)),
            booking(dec!(50000), None, None),
        ];
        let metrics = AgentAttributionAggregator::aggregate_for_agent(
            &bookings,
            agent,
            &CommissionRuleSet::standard(),
        );

        assert_eq!(metrics.booking_count, 2);
        assert_eq!(metrics.total_sales, dec!(30000));
        assert_eq!(metrics.average_deal_size, dec!(15000));
    }

    #[test]
    fn test_booking_assignment_beats_conflicting_lead() {
        let on_booking = AgentId::new();
        let on_lead = AgentId::new();
        let bookings = vec![booking(dec!(10000), Some(on_booking), Some(on_lead))];
        let rules = CommissionRuleSet::standard();

        let winner = AgentAttributionAggregator::aggregate_for_agent(&bookings, on_booking, &rules);
        assert_eq!(winner.booking_count, 1);

        let loser = AgentAttributionAggregator::aggregate_for_agent(&bookings, on_lead, &rules);
        assert_eq!(loser.booking_count, 0);
    }

    #[test]
    fn test_earnings_exclude_platform_and_partner_cuts() {
        let agent = AgentId::new();
        // Domestic standard: 55% base + 10% markup on base; 12% platform
        // excluded from earnings.
        let bookings = vec![booking(dec!(10000), Some(agent), None)];
        let metrics = AgentAttributionAggregator::aggregate_for_agent(
            &bookings,
            agent,
            &CommissionRuleSet::standard(),
        );

        assert_eq!(metrics.total_commission_earned, dec!(6050));
        assert_eq!(metrics.total_net_profit, dec!(2750));
        assert_eq!(metrics.margin_percentage, dec!(27.5));
    }
}
