//! Pricing module
//!
//! Plan prices per billing cycle and their currency-converted display.

pub mod currency;

pub use currency::{convert_currency, format_amount, format_price, revenue_options, RevenueOption};

use serde::{Deserialize, Serialize};

use crate::catalog::PlanCatalog;
use crate::config;
use crate::models::{BillingCycle, Tier};

/// USD prices of a plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanPrice {
    pub monthly: u64,
    pub annual: u64,
    /// Per-month price under the chosen billing cycle
    pub effective_monthly: u64,
}

impl PlanPrice {
    /// What annual billing saves over twelve monthly payments
    pub fn annual_savings(&self) -> u64 {
        self.monthly.saturating_mul(12).saturating_sub(self.annual)
    }
}

/// Prices for a tier from the process-wide catalog
pub fn price_for(tier: Tier, billing: BillingCycle) -> PlanPrice {
    price_from_catalog(config::catalog(), tier, billing)
}

/// Prices for a tier from an explicit catalog
pub fn price_from_catalog(catalog: &PlanCatalog, tier: Tier, billing: BillingCycle) -> PlanPrice {
    let plan = catalog.plan(tier);
    let monthly = plan.monthly_price_usd;
    let annual = plan.annual_price_usd();

    let effective_monthly = match billing {
        BillingCycle::Quarterly => monthly,
        BillingCycle::Annual => (annual as f64 / 12.0).round() as u64,
    };

    PlanPrice {
        monthly,
        annual,
        effective_monthly,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quarterly_price() {
        let price = price_from_catalog(&PlanCatalog::default(), Tier::Tier1, BillingCycle::Quarterly);
        assert_eq!(price.monthly, 58);
        assert_eq!(price.annual, 592);
        assert_eq!(price.effective_monthly, 58);
    }

    #[test]
    fn test_annual_effective_monthly() {
        let price = price_from_catalog(&PlanCatalog::default(), Tier::Tier4, BillingCycle::Annual);
        assert_eq!(price.annual, 5916);
        assert_eq!(price.effective_monthly, 493);
    }

    #[test]
    fn test_annual_savings_saturates() {
        let price = PlanPrice {
            monthly: u64::MAX,
            annual: u64::MAX,
            effective_monthly: u64::MAX,
        };
        assert_eq!(price.annual_savings(), 0);
    }

    #[test]
    fn test_annual_savings() {
        let price = price_from_catalog(&PlanCatalog::default(), Tier::Tier2, BillingCycle::Annual);
        // 145 * 12 = 1740, annual 1479
        assert_eq!(price.annual_savings(), 261);
    }

    #[test]
    fn test_annual_discount_invariant() {
        for tier in Tier::ALL {
            let price = price_for(tier, BillingCycle::Quarterly);
            let expected = (price.monthly as f64 * 12.0 * 0.85).round() as u64;
            assert_eq!(price.annual, expected);
        }
    }
}
