//! Commission rule and calculation data types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use fareflow_shared::types::{BookingId, Rate};

use crate::booking::BookingCategory;

/// How a rule derives the base commission from the gross amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalculationMode {
    /// Base commission is `gross_amount * base_rate`.
    Percentage,
    /// Base commission is `base_rate` verbatim, regardless of gross amount.
    Fixed,
    /// Base commission uses the rate of the tier containing the gross amount.
    Tiered,
}

impl std::fmt::Display for CalculationMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Percentage => write!(f, "percentage"),
            Self::Fixed => write!(f, "fixed"),
            Self::Tiered => write!(f, "tiered"),
        }
    }
}

impl std::str::FromStr for CalculationMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "percentage" => Ok(Self::Percentage),
            "fixed" => Ok(Self::Fixed),
            "tiered" => Ok(Self::Tiered),
            _ => Err(format!("Unknown calculation mode: {s}")),
        }
    }
}

/// A bracket in a tiered rate schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateTier {
    /// Inclusive lower bound.
    pub min: Decimal,
    /// Inclusive upper bound; `None` means the bracket is open-ended.
    pub max: Option<Decimal>,
    /// Rate applied to the full gross amount in this bracket.
    pub rate: Rate,
}

impl RateTier {
    /// Returns true if `amount` falls inside this bracket (both edges inclusive).
    #[must_use]
    pub fn contains(&self, amount: Decimal) -> bool {
        amount >= self.min && self.max.is_none_or(|max| amount <= max)
    }
}

/// A commission rule for one booking category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommissionRule {
    /// Rule identifier (human-readable slug, e.g. "standard-55-10").
    pub id: String,
    /// Display name.
    pub name: String,
    /// Booking category this rule applies to.
    pub category: BookingCategory,
    /// How the base commission is derived.
    pub mode: CalculationMode,
    /// Fraction in percentage/tiered mode; absolute currency amount in fixed mode.
    pub base_rate: Decimal,
    /// Optional markup fraction, applied to the base commission (compounding).
    pub markup_rate: Option<Rate>,
    /// Platform fee fraction, always applied to the gross amount.
    pub platform_fee_rate: Rate,
    /// Optional B2B partner fraction, applied to the gross amount.
    pub partner_commission_rate: Option<Rate>,
    /// Whether the rule participates in resolution.
    pub active: bool,
    /// Tier schedule, meaningful only in tiered mode.
    pub tiers: Vec<RateTier>,
}

/// One labeled line of a calculation breakdown, in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakdownLine {
    /// Display label.
    pub label: String,
    /// Line amount (the margin line is a percentage, not an amount).
    pub value: Decimal,
}

/// The full fee/profit breakdown for one booking.
///
/// Freshly constructed on every calculation; never persisted or mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinancialCalculation {
    /// Booking this calculation is for.
    pub booking_id: BookingId,
    /// Gross booking value.
    pub gross_amount: Decimal,
    /// Agency's primary commission.
    pub base_commission: Decimal,
    /// Secondary commission, a fraction of the base commission.
    pub markup_commission: Decimal,
    /// Platform's cut of the gross amount.
    pub platform_fee: Decimal,
    /// B2B partner's cut of the gross amount.
    pub partner_commission: Decimal,
    /// Sum of all commission components.
    pub total_commissions: Decimal,
    /// Gross amount minus all commission components. May be negative.
    pub net_profit: Decimal,
    /// Net profit as a percentage of gross (0 when gross is 0).
    pub margin_percentage: Decimal,
    /// Labeled intermediate values for display.
    pub breakdown: Vec<BreakdownLine>,
}
