//! Revenue aggregation data types.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use fareflow_shared::types::AgentId;

use crate::booking::BookingCategory;

/// Portfolio-level revenue metrics over a booking collection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevenueMetrics {
    /// Sum of gross amounts.
    pub total_revenue: Decimal,
    /// Sum of every commission component across all bookings.
    pub total_commissions: Decimal,
    /// Sum of net profits. May be negative.
    pub total_net_profit: Decimal,
    /// Net profit over revenue, as a percentage (0 when revenue is 0).
    pub average_margin: Decimal,
    /// Gross revenue grouped by booking category.
    pub revenue_by_category: BTreeMap<BookingCategory, Decimal>,
    /// Gross revenue grouped by creation month, keyed `YYYY-MM`.
    pub revenue_by_month: BTreeMap<String, Decimal>,
    /// Number of bookings aggregated.
    pub booking_count: usize,
    /// Mean gross amount (0 when there are no bookings).
    pub average_booking_value: Decimal,
}

/// Performance figures for the bookings attributed to one agent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentMetrics {
    /// The agent these figures are for.
    pub agent_id: AgentId,
    /// Sum of gross amounts of attributed bookings.
    pub total_sales: Decimal,
    /// Base + markup commission only; platform fees and partner
    /// commissions are not the agent's earnings.
    pub total_commission_earned: Decimal,
    /// Sum of net profits of attributed bookings.
    pub total_net_profit: Decimal,
    /// Number of attributed bookings.
    pub booking_count: usize,
    /// Mean gross amount per attributed booking (0 when there are none).
    pub average_deal_size: Decimal,
    /// Net profit over sales, as a percentage (0 when sales are 0).
    pub margin_percentage: Decimal,
}

impl AgentMetrics {
    /// An all-zero result for an agent with no attributed bookings.
    #[must_use]
    pub fn empty(agent_id: AgentId) -> Self {
        Self {
            agent_id,
            total_sales: Decimal::ZERO,
            total_commission_earned: Decimal::ZERO,
            total_net_profit: Decimal::ZERO,
            booking_count: 0,
            average_deal_size: Decimal::ZERO,
            margin_percentage: Decimal::ZERO,
        }
    }
}
