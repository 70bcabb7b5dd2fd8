//! Recommendation types
//!
//! The engine's output, handed to the page layer and on to the plan
//! access request.

use serde::{Deserialize, Serialize};

use crate::models::{BillingCycle, Currency, FeatureCategory, FeatureLine, Tier};

/// Recommended plan for one questionnaire run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationResult {
    /// Recommended tier
    #[serde(rename = "tierId")]
    pub tier: Tier,
    /// Tier required by needs, locations and users alone
    #[serde(rename = "baseTierId")]
    pub base_tier: Tier,
    pub plan_name: String,
    #[serde(rename = "monthlyPriceUSD")]
    pub monthly_price_usd: u64,
    #[serde(rename = "annualPriceUSD")]
    pub annual_price_usd: u64,
    pub display_features: Vec<FeatureLine>,
    pub currency: Currency,
    pub billing: BillingCycle,
    /// Per-month price under the chosen billing cycle, converted and formatted
    pub monthly_price_display: String,
    pub annual_price_display: String,
    pub annual_savings_display: String,
}

impl RecommendationResult {
    /// Feature names joined for the sales notification
    pub fn selected_features(&self) -> String {
        self.display_features
            .iter()
            .map(|f| f.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Highlighted feature lines only
    pub fn highlighted_features(&self) -> impl Iterator<Item = &FeatureLine> {
        self.display_features.iter().filter(|f| f.highlight)
    }

    /// Number of feature lines in a category
    pub fn count_in_category(&self, category: FeatureCategory) -> usize {
        self.display_features
            .iter()
            .filter(|f| f.category == category)
            .count()
    }

    /// Levels added on top of the base tier by revenue and company size
    pub fn upgrade_levels(&self) -> u8 {
        self.tier.ordinal().saturating_sub(self.base_tier.ordinal())
    }
}
