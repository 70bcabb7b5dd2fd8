//! Service-layer commands
//!
//! Entry points for the page or service that collects the questionnaire.
//! Every command returns `PlanError` so callers have one error type to map.

use std::path::Path;

use crate::export::{csv_export, json_export, ExportFormat, ExportableRequest};
use crate::models::QuestionnaireAnswers;
use crate::questionnaire::{self, Question};
use crate::recommendations::{self, RecommendationResult};
use crate::submission::{ContactDetails, PlanAccessRequest, QuestionnaireSummary};
use crate::PlanError;

/// Parse questionnaire answers from the wizard's JSON payload
pub fn parse_answers(json: &str) -> Result<QuestionnaireAnswers, PlanError> {
    serde_json::from_str(json).map_err(|e| PlanError::InvalidAnswers(e.to_string()))
}

/// Questions still unanswered in an answer set
pub fn get_missing_answers(answers: &QuestionnaireAnswers) -> Vec<Question> {
    questionnaire::missing_answers(answers)
}

/// Recommend a plan for a complete answer set
pub fn get_recommendation(answers: &QuestionnaireAnswers) -> Result<RecommendationResult, PlanError> {
    let missing = questionnaire::missing_answers(answers);
    if !missing.is_empty() {
        tracing::debug!(
            "Recommending with unanswered questions: {}",
            missing.iter().map(|q| q.id()).collect::<Vec<_>>().join(", ")
        );
    }

    let result = recommendations::recommend(answers)?;
    tracing::info!(
        "Recommended {} ({}) with {} feature lines",
        result.tier,
        result.plan_name,
        result.display_features.len()
    );

    Ok(result)
}

/// Recommend a plan straight from the wizard's JSON payload
pub fn get_recommendation_json(json: &str) -> Result<RecommendationResult, PlanError> {
    let answers = parse_answers(json)?;
    get_recommendation(&answers)
}

/// Build and validate the plan access request for a recommendation
pub fn request_plan_access(
    contact: ContactDetails,
    answers: &QuestionnaireAnswers,
    result: &RecommendationResult,
) -> Result<PlanAccessRequest, PlanError> {
    let request = PlanAccessRequest::new(contact, QuestionnaireSummary::new(answers, result));

    if let Err(e) = request.validate() {
        tracing::warn!("Rejected plan request: {}", e);
        return Err(e);
    }

    tracing::info!("{}", request.notification_subject());
    Ok(request)
}

/// Export plan requests in the given format ("csv" or "json")
pub fn export_plan_requests(
    requests: &[PlanAccessRequest],
    format: &str,
    path: &Path,
) -> Result<(), PlanError> {
    let format: ExportFormat = format.parse()?;
    let records: Vec<ExportableRequest> = requests.iter().map(ExportableRequest::from).collect();

    match format {
        ExportFormat::Csv => csv_export::write_requests_csv(&records, path)?,
        ExportFormat::Json => json_export::write_requests_json(&records, path)?,
    }

    tracing::info!("Exported {} plan requests to {:?}", records.len(), path);
    Ok(())
}
