//! Commission rule sets and rule resolution.

use std::str::FromStr;

use rust_decimal::Decimal;

use fareflow_shared::config::CommissionConfig;
use fareflow_shared::types::Rate;

use crate::booking::BookingCategory;

use super::error::CommissionError;
use super::types::{CalculationMode, CommissionRule, RateTier};

/// An ordered, validated set of commission rules.
///
/// Rule sets are static configuration: loaded once, immutable during a
/// calculation pass. Validation happens entirely at construction so that
/// [`resolve`](Self::resolve) is infallible.
#[derive(Debug, Clone)]
pub struct CommissionRuleSet {
    rules: Vec<CommissionRule>,
    default_rule_id: Option<String>,
}

impl CommissionRuleSet {
    /// Builds a rule set, rejecting configuration defects up front.
    ///
    /// `default_rule_id` designates the rule used when no rule matches a
    /// booking's category. When `None`, the first rule in the set is the
    /// fallback.
    ///
    /// # Errors
    ///
    /// Returns `CommissionError::EmptyRuleSet` for an empty rule list,
    /// `UnknownDefaultRule` for a dangling default designation, and
    /// rate/tier errors for malformed individual rules.
    pub fn new(
        rules: Vec<CommissionRule>,
        default_rule_id: Option<String>,
    ) -> Result<Self, CommissionError> {
        if rules.is_empty() {
            return Err(CommissionError::EmptyRuleSet);
        }

        if let Some(id) = &default_rule_id
            && !rules.iter().any(|rule| &rule.id == id)
        {
            return Err(CommissionError::UnknownDefaultRule(id.clone()));
        }

        for rule in &rules {
            Self::validate_rule(rule)?;
        }

        Ok(Self {
            rules,
            default_rule_id,
        })
    }

    /// Resolves the rule applicable to a booking category.
    ///
    /// Returns the first *active* rule for the category. When none matches,
    /// falls back to the designated default rule, or to the first rule in
    /// the set if no default is designated. Never fails: a rule set cannot
    /// be constructed empty.
    #[must_use]
    pub fn resolve(&self, category: BookingCategory) -> &CommissionRule {
        if let Some(rule) = self
            .rules
            .iter()
            .find(|rule| rule.category == category && rule.active)
        {
            return rule;
        }

        let fallback = self
            .default_rule_id
            .as_ref()
            .and_then(|id| self.rules.iter().find(|rule| &rule.id == id))
            .unwrap_or(&self.rules[0]);

        tracing::warn!(
            %category,
            fallback_rule = %fallback.id,
            "no active commission rule for category, using fallback"
        );
        fallback
    }

    /// The rules in resolution order.
    #[must_use]
    pub fn rules(&self) -> &[CommissionRule] {
        &self.rules
    }

    /// Parses and validates a rule set from configuration.
    ///
    /// # Errors
    ///
    /// Returns a `CommissionError` for any unparseable or out-of-range field,
    /// identifying the offending rule.
    pub fn from_config(config: &CommissionConfig) -> Result<Self, CommissionError> {
        let rules = config
            .rules
            .iter()
            .map(|rule| {
                let category = BookingCategory::from_str(&rule.category).map_err(|_| {
                    CommissionError::UnknownCategory {
                        rule: rule.id.clone(),
                        category: rule.category.clone(),
                    }
                })?;
                let mode = CalculationMode::from_str(&rule.mode).map_err(|_| {
                    CommissionError::UnknownMode {
                        rule: rule.id.clone(),
                        mode: rule.mode.clone(),
                    }
                })?;

                let rate = |field: &'static str, value: Decimal| {
                    Rate::new(value).map_err(|_| CommissionError::RateOutOfRange {
                        rule: rule.id.clone(),
                        field,
                        value,
                    })
                };

                let tiers = rule
                    .tiers
                    .iter()
                    .map(|tier| {
                        Ok(RateTier {
                            min: tier.min,
                            max: tier.max,
                            rate: rate("tier rate", tier.rate)?,
                        })
                    })
                    .collect::<Result<Vec<_>, CommissionError>>()?;

                Ok(CommissionRule {
                    id: rule.id.clone(),
                    name: rule.name.clone(),
                    category,
                    mode,
                    base_rate: rule.base_rate,
                    markup_rate: rule
                        .markup_rate
                        .map(|value| rate("markup_rate", value))
                        .transpose()?,
                    platform_fee_rate: rate("platform_fee_rate", rule.platform_fee_rate)?,
                    partner_commission_rate: rule
                        .partner_commission_rate
                        .map(|value| rate("partner_commission_rate", value))
                        .transpose()?,
                    active: rule.active,
                    tiers,
                })
            })
            .collect::<Result<Vec<_>, CommissionError>>()?;

        Self::new(rules, config.default_rule.clone())
    }

    /// The built-in rule table shipped with the product.
    #[must_use]
    pub fn standard() -> Self {
        // Values are statically valid; constructed directly rather than
        // revalidated on every call. A test keeps them honest.
        Self {
            rules: standard_rules(),
            default_rule_id: Some("standard-55-10".to_string()),
        }
    }

    fn validate_rule(rule: &CommissionRule) -> Result<(), CommissionError> {
        // In fixed mode base_rate is an absolute amount, not a fraction.
        if rule.mode != CalculationMode::Fixed
            && (rule.base_rate < Decimal::ZERO || rule.base_rate > Decimal::ONE)
        {
            return Err(CommissionError::RateOutOfRange {
                rule: rule.id.clone(),
                field: "base_rate",
                value: rule.base_rate,
            });
        }

        if rule.mode == CalculationMode::Tiered {
            if rule.tiers.is_empty() {
                return Err(CommissionError::MissingTiers {
                    rule: rule.id.clone(),
                });
            }
            let ascending = rule.tiers.windows(2).all(|pair| pair[0].min < pair[1].min);
            let well_formed = rule
                .tiers
                .iter()
                .all(|tier| tier.max.is_none_or(|max| tier.min <= max));
            if !ascending || !well_formed {
                return Err(CommissionError::MisorderedTiers {
                    rule: rule.id.clone(),
                });
            }
        }

        Ok(())
    }
}

fn standard_rules() -> Vec<CommissionRule> {
    let rate = |cents: i64| Rate::new(Decimal::new(cents, 2)).unwrap_or(Rate::ZERO);
    let platform = rate(12);

    vec![
        CommissionRule {
            id: "standard-55-10".to_string(),
            name: "Standard 55% + 10%".to_string(),
            category: BookingCategory::Domestic,
            mode: CalculationMode::Percentage,
            base_rate: Decimal::new(55, 2),
            markup_rate: Some(rate(10)),
            platform_fee_rate: platform,
            partner_commission_rate: None,
            active: true,
            tiers: Vec::new(),
        },
        CommissionRule {
            id: "flat-45".to_string(),
            name: "Flat 45%".to_string(),
            category: BookingCategory::International,
            mode: CalculationMode::Percentage,
            base_rate: Decimal::new(45, 2),
            markup_rate: None,
            platform_fee_rate: platform,
            partner_commission_rate: None,
            active: true,
            tiers: Vec::new(),
        },
        CommissionRule {
            id: "b2b-custom".to_string(),
            name: "B2B Custom Rate".to_string(),
            category: BookingCategory::B2b,
            mode: CalculationMode::Percentage,
            base_rate: Decimal::new(35, 2),
            markup_rate: Some(rate(15)),
            platform_fee_rate: platform,
            partner_commission_rate: Some(rate(5)),
            active: true,
            tiers: Vec::new(),
        },
        CommissionRule {
            id: "group-tiered".to_string(),
            name: "Group Booking Tiered".to_string(),
            category: BookingCategory::Group,
            mode: CalculationMode::Tiered,
            base_rate: Decimal::new(40, 2),
            markup_rate: Some(rate(12)),
            platform_fee_rate: platform,
            partner_commission_rate: None,
            active: true,
            tiers: vec![
                RateTier {
                    min: Decimal::ZERO,
                    max: Some(Decimal::from(5000)),
                    rate: rate(40),
                },
                RateTier {
                    min: Decimal::from(5001),
                    max: Some(Decimal::from(15000)),
                    rate: rate(45),
                },
                RateTier {
                    min: Decimal::from(15001),
                    max: None,
                    rate: rate(50),
                },
            ],
        },
    ]
}
