//! The booking input contract.
//!
//! A [`Booking`] is the complete, closed surface this crate reads from the
//! data-access layer. Real records carry more fields (itinerary data,
//! payment links, free-form metadata); everything not listed here is
//! ignored by the engine.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use fareflow_shared::types::{AgentId, BookingId, Currency, LeadId, TenantId};

/// Booking category, selecting which commission rule applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingCategory {
    /// Domestic package.
    Domestic,
    /// International package.
    International,
    /// B2B / reseller booking.
    B2b,
    /// Group booking.
    Group,
    /// Corporate account booking.
    Corporate,
}

impl std::fmt::Display for BookingCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Domestic => write!(f, "domestic"),
            Self::International => write!(f, "international"),
            Self::B2b => write!(f, "b2b"),
            Self::Group => write!(f, "group"),
            Self::Corporate => write!(f, "corporate"),
        }
    }
}

impl std::str::FromStr for BookingCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "domestic" => Ok(Self::Domestic),
            "international" => Ok(Self::International),
            "b2b" => Ok(Self::B2b),
            "group" => Ok(Self::Group),
            "corporate" => Ok(Self::Corporate),
            _ => Err(format!("Unknown booking category: {s}")),
        }
    }
}

/// The slice of an originating lead that attribution needs.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LeadRef {
    /// Lead ID.
    pub id: LeadId,
    /// Agent the lead is assigned to, if any.
    pub assigned_agent_id: Option<AgentId>,
}

/// A confirmed booking, as supplied by the data-access layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    /// Booking ID.
    pub id: BookingId,
    /// Owning tenant.
    pub tenant_id: TenantId,
    /// Category used for commission rule resolution.
    pub category: BookingCategory,
    /// Total customer-facing value before any deductions. Never negative.
    pub gross_amount: Decimal,
    /// Currency the amount is denominated in (not converted here).
    pub currency: Currency,
    /// Creation timestamp, already normalized by the caller.
    pub created_at: DateTime<Utc>,
    /// Agent assigned directly on the booking.
    pub assigned_agent_id: Option<AgentId>,
    /// Originating lead, when the booking was converted from one.
    pub lead: Option<LeadRef>,
}

impl Booking {
    /// Resolves the agent this booking is attributed to.
    ///
    /// An attribution can live on the booking itself or on its originating
    /// lead. The booking-level assignment takes precedence; the lead's
    /// assignment is only consulted when the booking carries none.
    #[must_use]
    pub fn attributed_agent(&self) -> Option<AgentId> {
        self.assigned_agent_id
            .or_else(|| self.lead.and_then(|lead| lead.assigned_agent_id))
    }

    /// Month key for revenue grouping, formatted `YYYY-MM`.
    #[must_use]
    pub fn month_key(&self) -> String {
        self.created_at.format("%Y-%m").to_string()
    }
}
