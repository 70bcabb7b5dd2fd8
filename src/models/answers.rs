//! Questionnaire answer types
//!
//! Strongly typed answers collected by the pricing wizard. Optional
//! single-select answers arrive as empty strings when skipped and are
//! deserialized as `None`.

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

use super::tier::Tier;

/// Display currency
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Usd,
    Kes,
}

impl Currency {
    /// ISO code
    pub fn code(&self) -> &'static str {
        match self {
            Self::Usd => "USD",
            Self::Kes => "KES",
        }
    }

    /// Prefix used in front of formatted amounts
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Usd => "$",
            Self::Kes => "KES ",
        }
    }
}

/// Employee-count bracket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompanySize {
    Micro,
    Small,
    Medium,
    Enterprise,
}

impl CompanySize {
    pub fn id(&self) -> &'static str {
        match self {
            Self::Micro => "micro",
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Enterprise => "enterprise",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Micro => "1-3 employees",
            Self::Small => "4-10 employees",
            Self::Medium => "11-19 employees",
            Self::Enterprise => "20+ employees",
        }
    }
}

impl FromStr for CompanySize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "micro" => Ok(Self::Micro),
            "small" => Ok(Self::Small),
            "medium" => Ok(Self::Medium),
            "enterprise" => Ok(Self::Enterprise),
            other => Err(format!("unknown company size: {}", other)),
        }
    }
}

/// Preferred data storage solution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SecurityPreference {
    Secure,
    Local,
    Private,
}

impl SecurityPreference {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Secure => "Secure Cloud",
            Self::Local => "Local Storage",
            Self::Private => "Private Cloud",
        }
    }
}

impl FromStr for SecurityPreference {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "secure" => Ok(Self::Secure),
            "local" => Ok(Self::Local),
            "private" => Ok(Self::Private),
            other => Err(format!("unknown security preference: {}", other)),
        }
    }
}

/// Preferred implementation timeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ImplementationTimeline {
    #[serde(rename = "immediate")]
    Immediate,
    #[serde(rename = "1-3months")]
    OneToThreeMonths,
    #[serde(rename = "3-6months")]
    ThreeToSixMonths,
    #[serde(rename = "6+months")]
    SixMonthsPlus,
}

impl ImplementationTimeline {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Immediate => "Immediate (1-2 weeks)",
            Self::OneToThreeMonths => "1-3 months",
            Self::ThreeToSixMonths => "3-6 months",
            Self::SixMonthsPlus => "6+ months",
        }
    }
}

impl FromStr for ImplementationTimeline {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "immediate" => Ok(Self::Immediate),
            "1-3months" => Ok(Self::OneToThreeMonths),
            "3-6months" => Ok(Self::ThreeToSixMonths),
            "6+months" => Ok(Self::SixMonthsPlus),
            other => Err(format!("unknown implementation timeline: {}", other)),
        }
    }
}

/// Billing cycle preference
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BillingCycle {
    #[default]
    Quarterly,
    Annual,
}

impl BillingCycle {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Quarterly => "Quarterly Billing",
            Self::Annual => "Annual Billing (Save 15%)",
        }
    }
}

/// Complete answer set handed to the engine once the wizard finishes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionnaireAnswers {
    #[serde(default)]
    pub currency: Currency,
    /// Informational only
    #[serde(default)]
    pub industry: String,
    #[serde(default, alias = "company-size", deserialize_with = "empty_as_none")]
    pub company_size: Option<CompanySize>,
    /// Revenue bracket, expressed as the tier it suggests
    #[serde(default, deserialize_with = "empty_as_none")]
    pub revenue: Option<Tier>,
    /// Slider value, expected in 1..=20
    #[serde(default = "default_locations", deserialize_with = "locations_or_default")]
    pub locations: i64,
    /// Selected need ids in selection order
    #[serde(default)]
    pub needs: Vec<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub security: Option<SecurityPreference>,
    /// Slider value, expected in 1..=15
    #[serde(default = "default_users", deserialize_with = "users_or_default")]
    pub users: i64,
    #[serde(
        default,
        alias = "implementation-timeline",
        deserialize_with = "empty_as_none"
    )]
    pub implementation_timeline: Option<ImplementationTimeline>,
    #[serde(default)]
    pub billing: BillingCycle,
}

fn default_locations() -> i64 {
    1
}

fn default_users() -> i64 {
    5
}

// A null slider value means the wizard never moved it
fn locations_or_default<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    Ok(Option::<i64>::deserialize(deserializer)?.unwrap_or_else(default_locations))
}

fn users_or_default<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    Ok(Option::<i64>::deserialize(deserializer)?.unwrap_or_else(default_users))
}

impl Default for QuestionnaireAnswers {
    /// Wizard starting state
    fn default() -> Self {
        Self {
            currency: Currency::Usd,
            industry: String::new(),
            company_size: None,
            revenue: None,
            locations: default_locations(),
            needs: Vec::new(),
            security: None,
            users: default_users(),
            implementation_timeline: None,
            billing: BillingCycle::Quarterly,
        }
    }
}

/// Treat a missing, null or blank string as `None`, otherwise parse it
fn empty_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: fmt::Display,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value.parse().map(Some).map_err(de::Error::custom),
    }
}
