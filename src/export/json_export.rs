//! JSON export functionality
//!
//! Provides JSON serialization for plan requests with export metadata.

use std::io::Write;
use std::path::Path;

use serde::Serialize;

use super::ExportableRequest;
use crate::PlanError;

/// Complete export structure for JSON
#[derive(Debug, Clone, Serialize)]
pub struct RequestsExportJson {
    pub export_date: String,
    pub export_version: &'static str,
    pub total_requests: usize,
    /// Sum of monthly list prices across requests
    pub total_monthly_usd: u64,
    pub requests: Vec<ExportableRequest>,
}

/// Write plan requests to JSON format
pub fn write_requests_json(requests: &[ExportableRequest], path: &Path) -> Result<(), PlanError> {
    let export = RequestsExportJson {
        export_date: chrono::Utc::now().to_rfc3339(),
        export_version: "1.0",
        total_requests: requests.len(),
        total_monthly_usd: requests.iter().map(|r| r.monthly_price_usd).sum(),
        requests: requests.to_vec(),
    };

    let json = serde_json::to_string_pretty(&export)
        .map_err(|e| PlanError::Export(format!("Failed to serialize JSON: {}", e)))?;

    let mut file = std::fs::File::create(path)
        .map_err(|e| PlanError::Export(format!("Failed to create JSON file: {}", e)))?;

    file.write_all(json.as_bytes())
        .map_err(|e| PlanError::Export(format!("Failed to write JSON: {}", e)))?;

    Ok(())
}
