//! Plan access requests
//!
//! The record handed to the sales notification step once a prospect asks
//! for the recommended plan. The questionnaire summary is built explicitly
//! from the answers and the recommendation.

use serde::{Deserialize, Serialize};

use crate::catalog::resolve_needs;
use crate::models::{
    BillingCycle, CompanySize, Currency, ImplementationTimeline, QuestionnaireAnswers,
    SecurityPreference, Tier,
};
use crate::recommendations::engine::{clamp_locations, clamp_users};
use crate::recommendations::RecommendationResult;
use crate::PlanError;

/// Questionnaire answers and recommendation, as forwarded to sales
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionnaireSummary {
    pub recommended_plan: Tier,
    pub plan_name: String,
    pub currency: Currency,
    pub industry: String,
    pub company_size: Option<CompanySize>,
    pub revenue: Option<Tier>,
    pub locations: u32,
    /// Selected need ids, comma separated
    pub needs: String,
    pub security: Option<SecurityPreference>,
    pub users: u32,
    pub implementation_timeline: Option<ImplementationTimeline>,
    pub billing_preference: BillingCycle,
    pub monthly_price: u64,
    pub annual_price: u64,
    /// Displayed feature names, comma separated
    pub selected_features: String,
}

impl QuestionnaireSummary {
    pub fn new(answers: &QuestionnaireAnswers, result: &RecommendationResult) -> Self {
        let needs = resolve_needs(&answers.needs)
            .iter()
            .map(|n| n.id)
            .collect::<Vec<_>>()
            .join(", ");

        Self {
            recommended_plan: result.tier,
            plan_name: result.plan_name.clone(),
            currency: answers.currency,
            industry: answers.industry.clone(),
            company_size: answers.company_size,
            revenue: answers.revenue,
            locations: clamp_locations(answers.locations),
            needs,
            security: answers.security,
            users: clamp_users(answers.users),
            implementation_timeline: answers.implementation_timeline,
            billing_preference: answers.billing,
            monthly_price: result.monthly_price_usd,
            annual_price: result.annual_price_usd,
            selected_features: result.selected_features(),
        }
    }
}

/// Contact details entered on the plan access form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactDetails {
    pub business_name: String,
    pub contact_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
}

/// A request for the recommended plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanAccessRequest {
    #[serde(flatten)]
    pub contact: ContactDetails,
    pub plan_data: QuestionnaireSummary,
    /// RFC 3339 timestamp
    pub submitted_at: String,
}

impl PlanAccessRequest {
    pub fn new(contact: ContactDetails, plan_data: QuestionnaireSummary) -> Self {
        Self {
            contact,
            plan_data,
            submitted_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// Check the required contact fields
    pub fn validate(&self) -> Result<(), PlanError> {
        let required = [
            ("businessName", &self.contact.business_name),
            ("contactName", &self.contact.contact_name),
            ("email", &self.contact.email),
        ];

        let missing: Vec<&str> = required
            .iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(field, _)| *field)
            .collect();

        if !missing.is_empty() {
            return Err(PlanError::InvalidSubmission(format!(
                "Missing required fields: {}",
                missing.join(", ")
            )));
        }

        if !is_plausible_email(self.contact.email.trim()) {
            return Err(PlanError::InvalidSubmission(format!(
                "Invalid email address: {}",
                self.contact.email
            )));
        }

        Ok(())
    }

    /// Subject line for the sales notification
    pub fn notification_subject(&self) -> String {
        format!("New Enterprise Plan Request: {}", self.plan_data.plan_name)
    }

    /// Labelled questionnaire values for the sales notification
    pub fn summary_rows(&self) -> Vec<(String, String)> {
        let data = &self.plan_data;
        let or_missing = |value: Option<&str>| value.unwrap_or("Not provided").to_string();

        let rows = [
            ("planName", data.plan_name.clone()),
            ("currency", data.currency.code().to_string()),
            ("industry", or_missing(Some(data.industry.as_str()).filter(|s| !s.is_empty()))),
            ("companySize", or_missing(data.company_size.map(|c| c.label()))),
            ("revenue", or_missing(data.revenue.map(|t| t.id()))),
            ("locations", data.locations.to_string()),
            ("needs", or_missing(Some(data.needs.as_str()).filter(|s| !s.is_empty()))),
            ("security", or_missing(data.security.map(|s| s.label()))),
            ("users", data.users.to_string()),
            (
                "implementationTimeline",
                or_missing(data.implementation_timeline.map(|t| t.label())),
            ),
            ("billingPreference", data.billing_preference.label().to_string()),
            ("selectedFeatures", data.selected_features.clone()),
        ];

        rows.into_iter()
            .map(|(key, value)| (humanize_key(key), value))
            .collect()
    }
}

/// "implementationTimeline" -> "Implementation Timeline"
pub fn humanize_key(key: &str) -> String {
    let mut label = String::with_capacity(key.len() + 4);

    for (i, ch) in key.chars().enumerate() {
        if i == 0 {
            label.extend(ch.to_uppercase());
        } else if ch.is_uppercase() {
            label.push(' ');
            label.push(ch);
        } else {
            label.push(ch);
        }
    }

    label
}

fn is_plausible_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && !domain.is_empty() && !domain.contains('@') && !email.contains(' ')
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::PlanCatalog;
    use crate::recommendations::recommend_with_catalog;

    fn create_test_answers() -> QuestionnaireAnswers {
        QuestionnaireAnswers {
            currency: Currency::Kes,
            industry: "retail".to_string(),
            company_size: Some(CompanySize::Small),
            needs: vec!["inventory".to_string(), "unknown".to_string(), "pos".to_string()],
            users: 2,
            implementation_timeline: Some(ImplementationTimeline::Immediate),
            billing: BillingCycle::Annual,
            ..QuestionnaireAnswers::default()
        }
    }

    fn create_test_request() -> PlanAccessRequest {
        let answers = create_test_answers();
        let result = recommend_with_catalog(&answers, &PlanCatalog::default()).unwrap();
        let contact = ContactDetails {
            business_name: "Duka Bora".to_string(),
            contact_name: "Amina Yusuf".to_string(),
            email: "amina@dukabora.co.ke".to_string(),
            phone: "+254700000000".to_string(),
        };

        PlanAccessRequest::new(contact, QuestionnaireSummary::new(&answers, &result))
    }

    #[test]
    fn test_summary_from_answers() {
        let request = create_test_request();
        let data = &request.plan_data;

        assert_eq!(data.recommended_plan, Tier::Tier1);
        assert_eq!(data.plan_name, "Starter");
        assert_eq!(data.needs, "inventory, pos");
        assert_eq!(data.monthly_price, 58);
        assert_eq!(data.annual_price, 592);
        assert!(data.selected_features.contains("Secure cloud storage"));
    }

    #[test]
    fn test_valid_request() {
        assert!(create_test_request().validate().is_ok());
    }

    #[test]
    fn test_missing_fields_listed() {
        let mut request = create_test_request();
        request.contact.business_name = " ".to_string();
        request.contact.email = String::new();

        let err = request.validate().unwrap_err();
        assert!(matches!(err, PlanError::InvalidSubmission(_)));
        assert!(err.to_string().contains("businessName, email"));
    }

    #[test]
    fn test_phone_optional() {
        let mut request = create_test_request();
        request.contact.phone = String::new();
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_rejects_bad_email() {
        let mut request = create_test_request();
        for email in ["amina", "@dukabora.co.ke", "amina@", "a@b@c", "amina @x.com"] {
            request.contact.email = email.to_string();
            assert!(request.validate().is_err(), "accepted {}", email);
        }
    }

    #[test]
    fn test_notification_subject() {
        assert_eq!(
            create_test_request().notification_subject(),
            "New Enterprise Plan Request: Starter"
        );
    }

    #[test]
    fn test_summary_rows() {
        let rows = create_test_request().summary_rows();
        let get = |label: &str| {
            rows.iter()
                .find(|(k, _)| k == label)
                .map(|(_, v)| v.clone())
                .unwrap()
        };

        assert_eq!(get("Plan Name"), "Starter");
        assert_eq!(get("Currency"), "KES");
        assert_eq!(get("Company Size"), "4-10 employees");
        assert_eq!(get("Revenue"), "Not provided");
        assert_eq!(get("Implementation Timeline"), "Immediate (1-2 weeks)");
        assert_eq!(get("Billing Preference"), "Annual Billing (Save 15%)");
        assert_eq!(get("Security"), "Not provided");
    }

    #[test]
    fn test_humanize_key() {
        assert_eq!(humanize_key("email"), "Email");
        assert_eq!(humanize_key("companySize"), "Company Size");
        assert_eq!(humanize_key("implementationTimeline"), "Implementation Timeline");
    }

    #[test]
    fn test_request_json_shape() {
        let value = serde_json::to_value(create_test_request()).unwrap();
        assert_eq!(value["businessName"], "Duka Bora");
        assert_eq!(value["planData"]["recommendedPlan"], "tier1");
        assert_eq!(value["planData"]["billingPreference"], "annual");
        assert!(value["submittedAt"].is_string());
    }
}
