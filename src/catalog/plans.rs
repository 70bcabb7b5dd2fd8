//! Plan catalog
//!
//! Display names, descriptions and prices for each tier. Prices and names
//! are configuration; tier caps are fixed engine constants on [`Tier`].

use serde::{Deserialize, Serialize};

use crate::models::{Tier, TierCaps};
use crate::PlanError;

/// Multiplier applied to twelve monthly payments for annual billing (15% off)
pub const ANNUAL_PRICE_FACTOR: f64 = 0.85;

/// Static USD to KES rate. Not a live quote.
pub const DEFAULT_USD_TO_KES: f64 = 129.0;

/// Highest monthly price a catalog may configure, in USD
pub const MAX_MONTHLY_PRICE_USD: u64 = 1_000_000;

/// Definition of a plan tier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanDefinition {
    pub tier: Tier,
    pub name: String,
    pub description: String,
    pub monthly_price_usd: u64,
    /// Monthly revenue band this plan targets
    #[serde(default)]
    pub revenue_band: String,
    #[serde(default)]
    pub use_case: String,
}

impl PlanDefinition {
    /// Annual price in USD with the annual discount applied
    pub fn annual_price_usd(&self) -> u64 {
        (self.monthly_price_usd as f64 * 12.0 * ANNUAL_PRICE_FACTOR).round() as u64
    }

    /// Caps of this plan's tier
    pub fn caps(&self) -> TierCaps {
        self.tier.caps()
    }
}

/// Default plan definitions
pub fn get_default_plans() -> Vec<PlanDefinition> {
    vec![
        PlanDefinition {
            tier: Tier::Tier1,
            name: "Starter".to_string(),
            description: "For small businesses just getting started".to_string(),
            monthly_price_usd: 58,
            revenue_band: "< 10k".to_string(),
            use_case: "Perfect for: New businesses with 1-3 employees handling up to 500 inventory items per month".to_string(),
        },
        PlanDefinition {
            tier: Tier::Tier2,
            name: "Growth".to_string(),
            description: "For growing businesses with expanding needs".to_string(),
            monthly_price_usd: 145,
            revenue_band: "11k - 30k".to_string(),
            use_case: "Ideal for: Established businesses with 4-10 employees managing 1,000+ monthly transactions".to_string(),
        },
        PlanDefinition {
            tier: Tier::Tier3,
            name: "Professional".to_string(),
            description: "For established businesses with significant operations".to_string(),
            monthly_price_usd: 290,
            revenue_band: "31k - 60k".to_string(),
            use_case: "Perfect for: Growing businesses with 11-25 employees needing advanced reporting and analytics".to_string(),
        },
        PlanDefinition {
            tier: Tier::Tier4,
            name: "Business".to_string(),
            description: "For larger businesses with complex requirements".to_string(),
            monthly_price_usd: 580,
            revenue_band: "61k - 99k".to_string(),
            use_case: "Ideal for: Businesses with 26-50 employees operating across multiple locations".to_string(),
        },
    ]
}

/// Raw catalog as read from configuration, before validation
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawPlanCatalog {
    #[serde(default = "default_usd_to_kes")]
    usd_to_kes: f64,
    plans: Vec<PlanDefinition>,
}

fn default_usd_to_kes() -> f64 {
    DEFAULT_USD_TO_KES
}

/// Validated set of plan definitions plus the display exchange rate.
///
/// Holds exactly one definition per tier, in tier order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawPlanCatalog")]
pub struct PlanCatalog {
    usd_to_kes: f64,
    plans: Vec<PlanDefinition>,
}

impl TryFrom<RawPlanCatalog> for PlanCatalog {
    type Error = PlanError;

    fn try_from(raw: RawPlanCatalog) -> Result<Self, Self::Error> {
        Self::new(raw.usd_to_kes, raw.plans)
    }
}

impl Default for PlanCatalog {
    fn default() -> Self {
        Self {
            usd_to_kes: DEFAULT_USD_TO_KES,
            plans: get_default_plans(),
        }
    }
}

impl PlanCatalog {
    /// Build a catalog, checking tier coverage, ordering and prices
    pub fn new(usd_to_kes: f64, plans: Vec<PlanDefinition>) -> Result<Self, PlanError> {
        if !usd_to_kes.is_finite() || usd_to_kes <= 0.0 {
            return Err(PlanError::Config(format!(
                "exchange rate must be positive, got {}",
                usd_to_kes
            )));
        }

        let tiers: Vec<Tier> = plans.iter().map(|p| p.tier).collect();
        if tiers != Tier::ALL {
            return Err(PlanError::Config(format!(
                "expected one plan per tier in order tier1..tier4, got [{}]",
                tiers.iter().map(|t| t.id()).collect::<Vec<_>>().join(", ")
            )));
        }

        if plans.iter().any(|p| p.monthly_price_usd == 0) {
            return Err(PlanError::Config("plan prices must be positive".to_string()));
        }

        if let Some(plan) = plans
            .iter()
            .find(|p| p.monthly_price_usd > MAX_MONTHLY_PRICE_USD)
        {
            return Err(PlanError::Config(format!(
                "{} price {} exceeds the maximum of {}",
                plan.tier, plan.monthly_price_usd, MAX_MONTHLY_PRICE_USD
            )));
        }

        if plans
            .windows(2)
            .any(|pair| pair[1].monthly_price_usd < pair[0].monthly_price_usd)
        {
            return Err(PlanError::Config(
                "plan prices must not decrease with tier".to_string(),
            ));
        }

        Ok(Self { usd_to_kes, plans })
    }

    /// Parse and validate a catalog from JSON
    pub fn from_json(json: &str) -> Result<Self, PlanError> {
        serde_json::from_str(json).map_err(|e| PlanError::Config(e.to_string()))
    }

    /// Definition for a tier
    pub fn plan(&self, tier: Tier) -> &PlanDefinition {
        &self.plans[tier.index()]
    }

    pub fn plans(&self) -> &[PlanDefinition] {
        &self.plans
    }

    pub fn usd_to_kes(&self) -> f64 {
        self.usd_to_kes
    }
}
