//! Maamul Plans - Pricing questionnaire backend
//!
//! This library provides the plan recommendation logic behind the Maamul
//! pricing questionnaire. It handles:
//! - Tier recommendation from questionnaire answers
//! - Feature list generation for the recommended tier
//! - Plan pricing and currency display
//! - Questionnaire completeness checks
//! - Plan access requests handed to the sales notification step
//! - CSV/JSON export of plan access requests

pub mod catalog;
pub mod commands;
pub mod config;
pub mod export;
pub mod models;
pub mod pricing;
pub mod questionnaire;
pub mod recommendations;
pub mod submission;

/// Error type for plan operations
#[derive(Debug, thiserror::Error)]
pub enum PlanError {
    #[error("Invalid questionnaire answers: {0}")]
    InvalidAnswers(String),

    #[error("Invalid plan request: {0}")]
    InvalidSubmission(String),

    #[error("Internal tier invariant violated: ordinal {ordinal} is not a known tier")]
    InvariantViolation { ordinal: u8 },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Export error: {0}")]
    Export(String),
}

// Serialized as the display string for the calling page layer
impl serde::Serialize for PlanError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

/// Install the global tracing subscriber.
///
/// Safe to call more than once; later calls leave the first subscriber in place.
pub fn init_logging() {
    let result = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .try_init();

    if result.is_ok() {
        tracing::info!("Maamul plan engine logging initialized");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serializes_as_message() {
        let err = PlanError::InvalidSubmission("email is required".to_string());
        let json = serde_json::to_string(&err).unwrap();
        assert_eq!(json, "\"Invalid plan request: email is required\"");
    }

    #[test]
    fn test_invariant_violation_is_distinct_from_input_errors() {
        let err = PlanError::InvariantViolation { ordinal: 7 };
        assert!(err.to_string().contains("ordinal 7"));
        assert!(!matches!(err, PlanError::InvalidAnswers(_)));
    }

    #[test]
    fn test_init_logging_twice() {
        init_logging();
        init_logging();
    }
}
