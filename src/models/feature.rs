//! Display feature types

use serde::{Deserialize, Serialize};

/// Category of a business need
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NeedCategory {
    Core,
    Advanced,
}

/// Category of a displayed feature line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FeatureCategory {
    Core,
    Advanced,
    Access,
    Security,
    Support,
}

impl From<NeedCategory> for FeatureCategory {
    fn from(category: NeedCategory) -> Self {
        match category {
            NeedCategory::Core => Self::Core,
            NeedCategory::Advanced => Self::Advanced,
        }
    }
}

/// One line of the recommended plan's feature list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureLine {
    pub name: String,
    pub category: FeatureCategory,
    pub highlight: bool,
}

impl FeatureLine {
    pub fn new(name: impl Into<String>, category: FeatureCategory, highlight: bool) -> Self {
        Self {
            name: name.into(),
            category,
            highlight,
        }
    }
}
