//! Per-booking commission calculation.

use rust_decimal::Decimal;

use crate::booking::Booking;

use super::rules::CommissionRuleSet;
use super::types::{BreakdownLine, CalculationMode, FinancialCalculation};

/// Pure calculator deriving the fee/profit breakdown for one booking.
pub struct CommissionCalculator;

impl CommissionCalculator {
    /// Calculates the full financial breakdown for a booking.
    ///
    /// The markup commission compounds on the base commission, never on the
    /// gross amount. Platform fee and partner commission are always taken
    /// from gross. Net profit may go negative when configured rates sum
    /// beyond 100%; that is a meaningful business outcome and is not
    /// clamped.
    #[must_use]
    pub fn calculate(booking: &Booking, rules: &CommissionRuleSet) -> FinancialCalculation {
        let rule = rules.resolve(booking.category);
        let gross = booking.gross_amount;

        let base_commission = match rule.mode {
            CalculationMode::Percentage => gross * rule.base_rate,
            CalculationMode::Fixed => rule.base_rate,
            CalculationMode::Tiered => match rule.tiers.iter().find(|tier| tier.contains(gross)) {
                Some(tier) => tier.rate.of(gross),
                None => {
                    // Gap in the tier schedule: fall back to the flat base rate.
                    tracing::warn!(
                        rule = %rule.id,
                        amount = %gross,
                        "gross amount not covered by any tier, using base rate"
                    );
                    gross * rule.base_rate
                }
            },
        };

        let markup_commission = rule
            .markup_rate
            .map_or(Decimal::ZERO, |rate| rate.of(base_commission));
        let platform_fee = rule.platform_fee_rate.of(gross);
        let partner_commission = rule
            .partner_commission_rate
            .map_or(Decimal::ZERO, |rate| rate.of(gross));

        let total_commissions =
            base_commission + markup_commission + platform_fee + partner_commission;
        let net_profit = gross - total_commissions;
        let margin_percentage = if gross > Decimal::ZERO {
            (net_profit / gross * Decimal::ONE_HUNDRED).round_dp(2)
        } else {
            Decimal::ZERO
        };

        let breakdown = vec![
            BreakdownLine {
                label: "Gross Amount".to_string(),
                value: gross,
            },
            BreakdownLine {
                label: "Base Commission".to_string(),
                value: base_commission,
            },
            BreakdownLine {
                label: "Markup Commission".to_string(),
                value: markup_commission,
            },
            BreakdownLine {
                label: "Platform Fee".to_string(),
                value: platform_fee,
            },
            BreakdownLine {
                label: "Partner Commission".to_string(),
                value: partner_commission,
            },
            BreakdownLine {
                label: "Total Commissions".to_string(),
                value: total_commissions,
            },
            BreakdownLine {
                label: "Net Profit".to_string(),
                value: net_profit,
            },
            BreakdownLine {
                label: "Margin %".to_string(),
                value: margin_percentage,
            },
        ];

        FinancialCalculation {
            booking_id: booking.id,
            gross_amount: gross,
            base_commission,
            markup_commission,
            platform_fee,
            partner_commission,
            total_commissions,
            net_profit,
            margin_percentage,
            breakdown,
        }
    }
}
