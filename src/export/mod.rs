//! Export module for CSV and JSON export functionality
//!
//! Writes plan access requests and recommended feature lists for sales
//! follow-up.

pub mod csv_export;
pub mod json_export;

use serde::{Deserialize, Serialize};

use crate::submission::PlanAccessRequest;
use crate::PlanError;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Csv,
    Json,
}

impl std::str::FromStr for ExportFormat {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "json" => Ok(ExportFormat::Json),
            _ => Err(PlanError::Export(format!(
                "Invalid export format: {}. Use 'csv' or 'json'",
                s
            ))),
        }
    }
}

impl ExportFormat {
    /// Get file extension for format
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

/// Flat plan request record for CSV/JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportableRequest {
    pub submitted_at: String,
    pub business_name: String,
    pub contact_name: String,
    pub email: String,
    pub phone: String,
    pub plan: String,
    pub tier_id: String,
    pub currency: String,
    pub billing: String,
    pub monthly_price_usd: u64,
    pub annual_price_usd: u64,
    pub locations: u32,
    pub users: u32,
    pub needs: String,
    pub features: String,
}

impl From<&PlanAccessRequest> for ExportableRequest {
    fn from(request: &PlanAccessRequest) -> Self {
        let data = &request.plan_data;
        Self {
            submitted_at: request.submitted_at.clone(),
            business_name: request.contact.business_name.clone(),
            contact_name: request.contact.contact_name.clone(),
            email: request.contact.email.clone(),
            phone: request.contact.phone.clone(),
            plan: data.plan_name.clone(),
            tier_id: data.recommended_plan.id().to_string(),
            currency: data.currency.code().to_string(),
            billing: data.billing_preference.label().to_string(),
            monthly_price_usd: data.monthly_price,
            annual_price_usd: data.annual_price,
            locations: data.locations,
            users: data.users,
            needs: data.needs.clone(),
            features: data.selected_features.clone(),
        }
    }
}
