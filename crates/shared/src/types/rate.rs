//! Validated rate fractions.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! A `Rate` wraps `rust_decimal::Decimal` and is guaranteed to lie in the
//! closed interval [0, 1] from the moment it is constructed, so commission
//! math never has to re-check rate bounds.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A commission or fee fraction in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Rate(Decimal);

/// Error returned when a fraction falls outside [0, 1].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Rate must be between 0 and 1, got {0}")]
pub struct RateOutOfRange(pub Decimal);

impl Rate {
    /// A zero rate.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Creates a rate, rejecting values outside [0, 1].
    pub fn new(fraction: Decimal) -> Result<Self, RateOutOfRange> {
        if fraction < Decimal::ZERO || fraction > Decimal::ONE {
            return Err(RateOutOfRange(fraction));
        }
        Ok(Self(fraction))
    }

    /// Applies the rate to an amount.
    #[must_use]
    pub fn of(self, amount: Decimal) -> Decimal {
        amount * self.0
    }

    /// Returns the underlying fraction.
    #[must_use]
    pub const fn fraction(self) -> Decimal {
        self.0
    }

    /// Returns true if the rate is zero.
    #[must_use]
    pub fn is_zero(self) -> bool {
        self.0.is_zero()
    }
}

impl TryFrom<Decimal> for Rate {
    type Error = RateOutOfRange;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Rate> for Decimal {
    fn from(rate: Rate) -> Self {
        rate.0
    }
}

impl std::fmt::Display for Rate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
