//! Plan tier types
//!
//! The four ordinal pricing tiers and the caps each tier supports.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Ordinal pricing tier (tier1 < tier2 < tier3 < tier4)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Tier1,
    Tier2,
    Tier3,
    Tier4,
}

impl Tier {
    /// All tiers in ascending order
    pub const ALL: [Tier; 4] = [Tier::Tier1, Tier::Tier2, Tier::Tier3, Tier::Tier4];

    /// Wire identifier ("tier1".."tier4")
    pub fn id(&self) -> &'static str {
        match self {
            Self::Tier1 => "tier1",
            Self::Tier2 => "tier2",
            Self::Tier3 => "tier3",
            Self::Tier4 => "tier4",
        }
    }

    /// Tier number, 1 through 4
    pub fn ordinal(&self) -> u8 {
        match self {
            Self::Tier1 => 1,
            Self::Tier2 => 2,
            Self::Tier3 => 3,
            Self::Tier4 => 4,
        }
    }

    /// Tier for a tier number, if there is one
    pub fn from_ordinal(ordinal: u8) -> Option<Tier> {
        match ordinal {
            1 => Some(Self::Tier1),
            2 => Some(Self::Tier2),
            3 => Some(Self::Tier3),
            4 => Some(Self::Tier4),
            _ => None,
        }
    }

    /// The next tier up, `None` for tier4
    pub fn next(&self) -> Option<Tier> {
        Self::from_ordinal(self.ordinal() + 1)
    }

    /// Zero-based position in [`Tier::ALL`]
    pub fn index(&self) -> usize {
        usize::from(self.ordinal() - 1)
    }

    /// What this tier can display support for
    pub fn caps(&self) -> TierCaps {
        match self {
            Self::Tier1 => TierCaps { needs: Some(3), locations: 1, users: 3 },
            Self::Tier2 => TierCaps { needs: Some(6), locations: 2, users: 6 },
            Self::Tier3 => TierCaps { needs: Some(9), locations: 3, users: 9 },
            Self::Tier4 => TierCaps { needs: None, locations: 5, users: 15 },
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Tier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "tier1" => Ok(Self::Tier1),
            "tier2" => Ok(Self::Tier2),
            "tier3" => Ok(Self::Tier3),
            "tier4" => Ok(Self::Tier4),
            other => Err(format!("unknown tier: {}", other)),
        }
    }
}

/// Needs / locations / users limits of a tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierCaps {
    /// Maximum needs shown; `None` is unbounded
    pub needs: Option<usize>,
    pub locations: u32,
    pub users: u32,
}

impl TierCaps {
    /// Whether a needs count fits under this cap
    pub fn fits_needs(&self, needs_count: usize) -> bool {
        self.needs.map_or(true, |cap| needs_count <= cap)
    }

    /// Whether all three actual values fit this tier
    pub fn admits(&self, needs_count: usize, locations: u32, users: u32) -> bool {
        self.fits_needs(needs_count) && locations <= self.locations && users <= self.users
    }
}
