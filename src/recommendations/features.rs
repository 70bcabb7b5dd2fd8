//! Display feature generation
//!
//! Builds the feature list shown for the assigned tier from the selected
//! needs, trimmed to what that tier supports.

use crate::catalog::BusinessNeed;
use crate::models::{FeatureCategory, FeatureLine, NeedCategory, Tier};

const CLOUD_STORAGE: &str = "Secure cloud storage - Keep your data safe in the cloud";
const PRIORITY_SUPPORT: &str = "Priority support - Get faster responses to your support requests";
const ACCOUNT_MANAGER: &str =
    "Dedicated account manager - Get personalized support from a dedicated representative";

/// Generate the feature lines for `tier`.
///
/// Needs are truncated to the tier's cap in selection order, tier1 drops
/// Advanced needs, and locations/users are clamped to the tier's caps.
pub fn generate_display_features(
    needs: &[&BusinessNeed],
    tier: Tier,
    locations: u32,
    users: u32,
) -> Vec<FeatureLine> {
    let caps = tier.caps();
    let shown = caps.needs.map_or(needs.len(), |cap| cap.min(needs.len()));
    let locations = locations.min(caps.locations);
    let users = users.min(caps.users);

    let mut features: Vec<FeatureLine> = needs[..shown]
        .iter()
        .filter(|need| !(tier == Tier::Tier1 && need.category == NeedCategory::Advanced))
        .map(|need| {
            FeatureLine::new(
                need.display_text(),
                need.category.into(),
                need.is_highlighted(),
            )
        })
        .collect();

    if locations > 1 {
        features.push(FeatureLine::new(
            format!("Multi-location support - Manage up to {} locations", locations),
            FeatureCategory::Advanced,
            true,
        ));
    }

    let accounts = if users == 1 { "account" } else { "accounts" };
    features.push(FeatureLine::new(
        format!("Up to {} user {} - Provide access to your team", users, accounts),
        FeatureCategory::Access,
        false,
    ));

    // Baseline lines accumulate with tier
    features.push(FeatureLine::new(CLOUD_STORAGE, FeatureCategory::Security, false));
    if tier >= Tier::Tier3 {
        features.push(FeatureLine::new(PRIORITY_SUPPORT, FeatureCategory::Support, true));
    }
    if tier >= Tier::Tier4 {
        features.push(FeatureLine::new(ACCOUNT_MANAGER, FeatureCategory::Support, true));
    }

    features
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::resolve_needs;

    fn names(features: &[FeatureLine]) -> Vec<&str> {
        features.iter().map(|f| f.name.as_str()).collect()
    }

    #[test]
    fn test_tier1_minimal() {
        let needs = resolve_needs(&["inventory", "pos"]);
        let features = generate_display_features(&needs, Tier::Tier1, 1, 2);

        assert_eq!(features.len(), 4);
        assert!(features[0].name.starts_with("Track and manage product inventory"));
        assert!(features[0].highlight);
        assert_eq!(features[0].category, FeatureCategory::Core);
        assert_eq!(features[2].name, "Up to 2 user accounts - Provide access to your team");
        assert_eq!(features[3].name, CLOUD_STORAGE);
    }

    #[test]
    fn test_truncates_to_cap_in_selection_order() {
        let needs = resolve_needs(&["supply", "expenses", "customers", "employees", "pos"]);
        let features = generate_display_features(&needs, Tier::Tier1, 1, 1);

        let core: Vec<_> = features
            .iter()
            .filter(|f| f.category == FeatureCategory::Core)
            .collect();
        assert_eq!(core.len(), 3);
        assert!(core[0].name.starts_with("Optimize supply chain"));
        assert!(core[2].name.starts_with("Manage customer information"));
    }

    #[test]
    fn test_tier1_drops_advanced_after_truncation() {
        // api is third, so it survives truncation and is then dropped
        let needs = resolve_needs(&["inventory", "pos", "api", "customers"]);
        let features = generate_display_features(&needs, Tier::Tier1, 1, 1);

        assert_eq!(features.iter().filter(|f| f.category == FeatureCategory::Advanced).count(), 0);
        assert_eq!(features.iter().filter(|f| f.category == FeatureCategory::Core).count(), 2);
    }

    #[test]
    fn test_tier2_keeps_advanced() {
        let needs = resolve_needs(&["inventory", "api"]);
        let features = generate_display_features(&needs, Tier::Tier2, 1, 4);

        let api = features.iter().find(|f| f.name.starts_with("Connect the core")).unwrap();
        assert_eq!(api.category, FeatureCategory::Advanced);
        assert!(api.highlight);
    }

    #[test]
    fn test_clamps_locations_and_users() {
        let features = generate_display_features(&[], Tier::Tier1, 3, 12);
        assert!(!names(&features).iter().any(|n| n.starts_with("Multi-location")));
        assert!(names(&features).contains(&"Up to 3 user accounts - Provide access to your team"));

        let features = generate_display_features(&[], Tier::Tier4, 20, 15);
        assert!(names(&features).contains(&"Multi-location support - Manage up to 5 locations"));
    }

    #[test]
    fn test_single_user_is_singular() {
        let features = generate_display_features(&[], Tier::Tier1, 1, 1);
        assert!(names(&features).contains(&"Up to 1 user account - Provide access to your team"));
    }

    #[test]
    fn test_baseline_lines_by_tier() {
        let tier2 = generate_display_features(&[], Tier::Tier2, 1, 1);
        assert!(!names(&tier2).contains(&PRIORITY_SUPPORT));

        let tier3 = generate_display_features(&[], Tier::Tier3, 1, 1);
        assert!(names(&tier3).contains(&PRIORITY_SUPPORT));
        assert!(!names(&tier3).contains(&ACCOUNT_MANAGER));

        let tier4 = generate_display_features(&[], Tier::Tier4, 1, 1);
        let tail: Vec<_> = names(&tier4).into_iter().rev().take(3).collect();
        assert_eq!(tail, vec![ACCOUNT_MANAGER, PRIORITY_SUPPORT, CLOUD_STORAGE]);
    }

    #[test]
    fn test_tier4_shows_every_need() {
        let all: Vec<&str> = crate::catalog::BUSINESS_NEEDS.iter().map(|n| n.id).collect();
        let needs = resolve_needs(&all);
        let features = generate_display_features(&needs, Tier::Tier4, 1, 10);

        // 14 needs + users + storage + priority support + account manager
        assert_eq!(features.len(), 18);
    }
}
