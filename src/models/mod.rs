//! Data models module
//!
//! Contains the data structures shared across the plan engine:
//! - Tier and tier cap types
//! - Questionnaire answer types
//! - Display feature types

pub mod answers;
pub mod feature;
pub mod tier;

pub use answers::{
    BillingCycle, CompanySize, Currency, ImplementationTimeline, QuestionnaireAnswers,
    SecurityPreference,
};
pub use feature::{FeatureCategory, FeatureLine, NeedCategory};
pub use tier::{Tier, TierCaps};
