//! Application configuration management.
//!
//! The commission rule table and the expense allocation split are plain
//! configuration here: string-keyed DTOs deserialized from TOML files and
//! environment variables. The core crate parses and validates them into
//! domain types, so each tenant or deployment can carry its own rule set
//! without touching calculation logic.

use rust_decimal::Decimal;
use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Commission rule configuration.
    pub commission: CommissionConfig,
    /// Expense allocation split for P&L statements.
    #[serde(default)]
    pub expenses: ExpenseSplitConfig,
}

/// Commission rule table configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct CommissionConfig {
    /// ID of the rule to fall back on when no rule matches a booking's
    /// category. When absent, the first rule in the table is the fallback.
    #[serde(default)]
    pub default_rule: Option<String>,
    /// Rule definitions, in resolution order.
    pub rules: Vec<RuleConfig>,
}

/// A single commission rule definition.
#[derive(Debug, Clone, Deserialize)]
pub struct RuleConfig {
    /// Rule identifier (human-readable slug, e.g. "standard-55-10").
    pub id: String,
    /// Display name.
    pub name: String,
    /// Booking category this rule applies to (e.g. "domestic").
    pub category: String,
    /// Calculation mode: "percentage", "fixed", or "tiered".
    pub mode: String,
    /// Base rate (fraction for percentage/tiered, absolute amount for fixed).
    pub base_rate: Decimal,
    /// Optional markup fraction applied to the base commission.
    #[serde(default)]
    pub markup_rate: Option<Decimal>,
    /// Platform fee fraction, always applied to the gross amount.
    pub platform_fee_rate: Decimal,
    /// Optional B2B partner fraction applied to the gross amount.
    #[serde(default)]
    pub partner_commission_rate: Option<Decimal>,
    /// Whether the rule participates in resolution.
    #[serde(default = "default_active")]
    pub active: bool,
    /// Tier schedule, required when mode is "tiered".
    #[serde(default)]
    pub tiers: Vec<TierConfig>,
}

fn default_active() -> bool {
    true
}

/// A tier bracket in a tiered rule.
#[derive(Debug, Clone, Deserialize)]
pub struct TierConfig {
    /// Inclusive lower bound of the bracket.
    pub min: Decimal,
    /// Inclusive upper bound; absent means the bracket is open-ended.
    #[serde(default)]
    pub max: Option<Decimal>,
    /// Rate applied to the full gross amount when it falls in this bracket.
    pub rate: Decimal,
}

/// Expense allocation split applied in P&L statements.
///
/// The defaults reproduce the illustrative 60/15/10/10/5 split; deployments
/// with real cost accounting override them. Fractions must sum to 1, which
/// the core crate enforces when it builds an allocation from this config.
#[derive(Debug, Clone, Deserialize)]
pub struct ExpenseSplitConfig {
    /// Fraction of expenses allocated to salaries.
    #[serde(default = "default_salaries")]
    pub salaries: Decimal,
    /// Fraction allocated to marketing.
    #[serde(default = "default_marketing")]
    pub marketing: Decimal,
    /// Fraction allocated to technology.
    #[serde(default = "default_technology")]
    pub technology: Decimal,
    /// Fraction allocated to operations.
    #[serde(default = "default_operations")]
    pub operations: Decimal,
    /// Fraction allocated to everything else.
    #[serde(default = "default_other")]
    pub other: Decimal,
}

fn default_salaries() -> Decimal {
    Decimal::new(60, 2)
}

fn default_marketing() -> Decimal {
    Decimal::new(15, 2)
}

fn default_technology() -> Decimal {
    Decimal::new(10, 2)
}

fn default_operations() -> Decimal {
    Decimal::new(10, 2)
}

fn default_other() -> Decimal {
    Decimal::new(5, 2)
}

impl Default for ExpenseSplitConfig {
    fn default() -> Self {
        Self {
            salaries: default_salaries(),
            marketing: default_marketing(),
            technology: default_technology(),
            operations: default_operations(),
            other: default_other(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());
        tracing::debug!(%run_mode, "loading configuration");

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("FAREFLOW").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
