//! Recommendations module
//!
//! Recommends a plan tier from questionnaire answers and builds the
//! feature list and prices shown for it.

pub mod engine;
pub mod features;
pub mod types;

// Re-export commonly used items
pub use engine::{determine_base_tier, recommend, recommend_with_catalog};
pub use features::generate_display_features;
pub use types::RecommendationResult;
