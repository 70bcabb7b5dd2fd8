//! CSV export functionality
//!
//! Provides CSV serialization for plan requests and feature lists.

use std::path::Path;

use csv::Writer;

use super::ExportableRequest;
use crate::models::FeatureLine;
use crate::PlanError;

/// Write plan requests to CSV format
pub fn write_requests_csv(requests: &[ExportableRequest], path: &Path) -> Result<(), PlanError> {
    write_records(requests, path)
}

/// Write a recommendation's feature lines to CSV format
pub fn write_features_csv(features: &[FeatureLine], path: &Path) -> Result<(), PlanError> {
    write_records(features, path)
}

fn write_records<T: serde::Serialize>(records: &[T], path: &Path) -> Result<(), PlanError> {
    let file = std::fs::File::create(path)
        .map_err(|e| PlanError::Export(format!("Failed to create CSV file: {}", e)))?;

    let mut writer = Writer::from_writer(file);

    for record in records {
        writer
            .serialize(record)
            .map_err(|e| PlanError::Export(format!("Failed to write CSV record: {}", e)))?;
    }

    writer
        .flush()
        .map_err(|e| PlanError::Export(format!("Failed to flush CSV: {}", e)))?;

    Ok(())
}
