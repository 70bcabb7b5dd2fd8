//! Recommendation engine
//!
//! Core logic for turning questionnaire answers into a recommended plan tier,
//! its feature list and its prices.

use tracing::{debug, error, warn};

use super::features::generate_display_features;
use super::types::RecommendationResult;
use crate::catalog::{resolve_needs, BusinessNeed, PlanCatalog};
use crate::config;
use crate::models::{CompanySize, QuestionnaireAnswers, Tier};
use crate::pricing::{currency::convert_with_rate, format_amount, price_from_catalog};
use crate::PlanError;

/// Accepted slider ranges
mod limits {
    pub const MIN_LOCATIONS: i64 = 1;
    pub const MAX_LOCATIONS: i64 = 20;
    pub const MIN_USERS: i64 = 1;
    pub const MAX_USERS: i64 = 15;
}

/// Answers reduced to what the tier math reads
#[derive(Debug, Clone, PartialEq)]
pub struct SanitizedAnswers {
    /// Known needs, deduplicated, in selection order
    pub needs: Vec<&'static BusinessNeed>,
    pub locations: u32,
    pub users: u32,
}

/// Clamp a locations slider value into its accepted range
pub fn clamp_locations(locations: i64) -> u32 {
    locations.clamp(limits::MIN_LOCATIONS, limits::MAX_LOCATIONS) as u32
}

/// Clamp a users slider value into its accepted range
pub fn clamp_users(users: i64) -> u32 {
    users.clamp(limits::MIN_USERS, limits::MAX_USERS) as u32
}

/// Resolve need ids and clamp sliders, warning on out-of-range values
pub fn sanitize_answers(answers: &QuestionnaireAnswers) -> SanitizedAnswers {
    let locations = clamp_locations(answers.locations);
    if i64::from(locations) != answers.locations {
        warn!(
            "Locations {} outside {}..={}, clamped to {}",
            answers.locations,
            limits::MIN_LOCATIONS,
            limits::MAX_LOCATIONS,
            locations
        );
    }

    let users = clamp_users(answers.users);
    if i64::from(users) != answers.users {
        warn!(
            "Users {} outside {}..={}, clamped to {}",
            answers.users,
            limits::MIN_USERS,
            limits::MAX_USERS,
            users
        );
    }

    SanitizedAnswers {
        needs: resolve_needs(&answers.needs),
        locations,
        users,
    }
}

/// Minimum tier for a number of selected needs
pub fn tier_for_needs(needs_count: usize) -> Tier {
    Tier::ALL
        .into_iter()
        .find(|tier| tier.caps().fits_needs(needs_count))
        .unwrap_or(Tier::Tier4)
}

/// Minimum tier for a number of locations; anything above the tier4 cap stays tier4
pub fn tier_for_locations(locations: u32) -> Tier {
    Tier::ALL
        .into_iter()
        .find(|tier| locations <= tier.caps().locations)
        .unwrap_or(Tier::Tier4)
}

/// Tier whose user range (1-3, 4-6, 7-9, 10-15) contains `users`.
///
/// A count outside every range is treated as tier4 and logged.
pub fn tier_for_users(users: u32) -> Tier {
    let mut floor = 1;
    for tier in Tier::ALL {
        let cap = tier.caps().users;
        if (floor..=cap).contains(&users) {
            return tier;
        }
        floor = cap + 1;
    }

    warn!("User count {} outside every tier range, assuming tier4", users);
    Tier::Tier4
}

/// Tier required by needs, locations and users: the highest of the three
pub fn determine_base_tier(needs_count: usize, locations: u32, users: u32) -> Tier {
    tier_for_needs(needs_count)
        .max(tier_for_locations(locations))
        .max(tier_for_users(users))
}

/// Upgrade by one level when revenue points exactly one tier higher and the
/// actual values fit that tier
pub fn apply_revenue_upgrade(
    base: Tier,
    revenue: Option<Tier>,
    needs_count: usize,
    locations: u32,
    users: u32,
) -> Tier {
    let Some(revenue) = revenue else {
        return base;
    };

    if base.next() != Some(revenue) {
        return base;
    }

    if revenue.caps().admits(needs_count, locations, users) {
        debug!("Revenue upgrade {} -> {}", base, revenue);
        revenue
    } else {
        base
    }
}

/// Upgrade enterprise-sized companies by one level when the actual values fit
pub fn apply_enterprise_upgrade(
    tier: Tier,
    company_size: Option<CompanySize>,
    needs_count: usize,
    locations: u32,
    users: u32,
) -> Tier {
    if company_size != Some(CompanySize::Enterprise) {
        return tier;
    }

    let Some(next) = tier.next() else {
        return tier;
    };

    if next.caps().admits(needs_count, locations, users) {
        debug!("Enterprise upgrade {} -> {}", tier, next);
        next
    } else {
        tier
    }
}

/// Final check that a tier ordinal names one of the four tiers
pub fn clamp_final_tier(ordinal: u8) -> Result<Tier, PlanError> {
    Tier::from_ordinal(ordinal).ok_or_else(|| {
        error!("Tier invariant violated: computed ordinal {}", ordinal);
        PlanError::InvariantViolation { ordinal }
    })
}

/// Recommend a plan using the process-wide catalog
pub fn recommend(answers: &QuestionnaireAnswers) -> Result<RecommendationResult, PlanError> {
    recommend_with_catalog(answers, config::catalog())
}

/// Recommend a plan using an explicit catalog
pub fn recommend_with_catalog(
    answers: &QuestionnaireAnswers,
    catalog: &PlanCatalog,
) -> Result<RecommendationResult, PlanError> {
    let sanitized = sanitize_answers(answers);
    let needs_count = sanitized.needs.len();
    let (locations, users) = (sanitized.locations, sanitized.users);

    let base_tier = determine_base_tier(needs_count, locations, users);
    let tier = apply_revenue_upgrade(base_tier, answers.revenue, needs_count, locations, users);
    let tier = apply_enterprise_upgrade(tier, answers.company_size, needs_count, locations, users);
    let tier = clamp_final_tier(tier.ordinal())?;

    debug!(
        "Recommended {} (base {}) for {} needs, {} locations, {} users",
        tier, base_tier, needs_count, locations, users
    );

    let display_features = generate_display_features(&sanitized.needs, tier, locations, users);
    let price = price_from_catalog(catalog, tier, answers.billing);

    let display = |amount_usd: u64| {
        format!(
            "{}{}",
            answers.currency.symbol(),
            format_amount(convert_with_rate(amount_usd, answers.currency, catalog.usd_to_kes()))
        )
    };

    Ok(RecommendationResult {
        tier,
        base_tier,
        plan_name: catalog.plan(tier).name.clone(),
        monthly_price_usd: price.monthly,
        annual_price_usd: price.annual,
        display_features,
        currency: answers.currency,
        billing: answers.billing,
        monthly_price_display: display(price.effective_monthly),
        annual_price_display: display(price.annual),
        annual_savings_display: display(price.annual_savings()),
    })
}
