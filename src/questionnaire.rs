//! Questionnaire steps
//!
//! The ordered questions of the pricing wizard and whether each one has
//! been answered, so a caller can check an answer set before recommending.

use serde::Serialize;

use crate::models::QuestionnaireAnswers;

/// How a question collects its answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuestionKind {
    Welcome,
    SingleSelect,
    MultiSelect,
    Slider,
}

/// A wizard question, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Question {
    Welcome,
    Currency,
    Industry,
    CompanySize,
    Revenue,
    Locations,
    Needs,
    Security,
    Users,
    ImplementationTimeline,
    Billing,
}

impl Question {
    pub const ALL: [Question; 11] = [
        Question::Welcome,
        Question::Currency,
        Question::Industry,
        Question::CompanySize,
        Question::Revenue,
        Question::Locations,
        Question::Needs,
        Question::Security,
        Question::Users,
        Question::ImplementationTimeline,
        Question::Billing,
    ];

    /// Question id used by the wizard
    pub fn id(&self) -> &'static str {
        match self {
            Self::Welcome => "welcome",
            Self::Currency => "currency",
            Self::Industry => "industry",
            Self::CompanySize => "company-size",
            Self::Revenue => "revenue",
            Self::Locations => "locations",
            Self::Needs => "needs",
            Self::Security => "security",
            Self::Users => "users",
            Self::ImplementationTimeline => "implementation-timeline",
            Self::Billing => "billing",
        }
    }

    pub fn kind(&self) -> QuestionKind {
        match self {
            Self::Welcome => QuestionKind::Welcome,
            Self::Locations | Self::Users => QuestionKind::Slider,
            Self::Needs => QuestionKind::MultiSelect,
            _ => QuestionKind::SingleSelect,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Welcome => "Find Your Perfect Enterprise Solution",
            Self::Currency => "Select your preferred currency",
            Self::Industry => "What industry is your business in?",
            Self::CompanySize => "How many employees does your company have?",
            Self::Revenue => "What is your monthly revenue?",
            Self::Locations => "How many locations does your business operate in?",
            Self::Needs => "What are your primary business needs?",
            Self::Security => "What type of data storage solution do you prefer?",
            Self::Users => "How many user accounts do you need?",
            Self::ImplementationTimeline => "What is your preferred implementation timeline?",
            Self::Billing => "Which billing cycle do you prefer?",
        }
    }

    /// Whether `answers` holds an answer for this question.
    ///
    /// Welcome and sliders always count as answered; currency and billing
    /// always carry a default.
    pub fn is_answered(&self, answers: &QuestionnaireAnswers) -> bool {
        match self {
            Self::Welcome | Self::Locations | Self::Users => true,
            Self::Currency | Self::Billing => true,
            Self::Industry => !answers.industry.trim().is_empty(),
            Self::CompanySize => answers.company_size.is_some(),
            Self::Revenue => answers.revenue.is_some(),
            Self::Needs => !answers.needs.is_empty(),
            Self::Security => answers.security.is_some(),
            Self::ImplementationTimeline => answers.implementation_timeline.is_some(),
        }
    }
}

/// Unanswered questions in wizard order
pub fn missing_answers(answers: &QuestionnaireAnswers) -> Vec<Question> {
    Question::ALL
        .into_iter()
        .filter(|q| !q.is_answered(answers))
        .collect()
}

/// Progress through the wizard at question `index`, as a percentage
pub fn progress_percent(index: usize) -> f64 {
    let index = index.min(Question::ALL.len());
    index as f64 / Question::ALL.len() as f64 * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CompanySize, ImplementationTimeline, SecurityPreference, Tier};

    fn complete_answers() -> QuestionnaireAnswers {
        QuestionnaireAnswers {
            industry: "wholesale".to_string(),
            company_size: Some(CompanySize::Medium),
            revenue: Some(Tier::Tier2),
            needs: vec!["inventory".to_string()],
            security: Some(SecurityPreference::Secure),
            implementation_timeline: Some(ImplementationTimeline::Immediate),
            ..QuestionnaireAnswers::default()
        }
    }

    #[test]
    fn test_complete_answers_have_nothing_missing() {
        assert!(missing_answers(&complete_answers()).is_empty());
    }

    #[test]
    fn test_fresh_wizard_missing_questions() {
        let missing = missing_answers(&QuestionnaireAnswers::default());
        assert_eq!(
            missing,
            vec![
                Question::Industry,
                Question::CompanySize,
                Question::Revenue,
                Question::Needs,
                Question::Security,
                Question::ImplementationTimeline,
            ]
        );
    }

    #[test]
    fn test_blank_industry_is_unanswered() {
        let mut answers = complete_answers();
        answers.industry = "   ".to_string();
        assert_eq!(missing_answers(&answers), vec![Question::Industry]);
    }

    #[test]
    fn test_kinds() {
        assert_eq!(Question::Needs.kind(), QuestionKind::MultiSelect);
        assert_eq!(Question::Users.kind(), QuestionKind::Slider);
        assert_eq!(Question::Revenue.kind(), QuestionKind::SingleSelect);
        assert_eq!(Question::Welcome.kind(), QuestionKind::Welcome);
    }

    #[test]
    fn test_titles() {
        assert_eq!(Question::Needs.title(), "What are your primary business needs?");
        assert_eq!(Question::Billing.title(), "Which billing cycle do you prefer?");

        let titles: std::collections::HashSet<_> = Question::ALL.iter().map(|q| q.title()).collect();
        assert_eq!(titles.len(), Question::ALL.len());
    }

    #[test]
    fn test_ids_match_serde() {
        for question in Question::ALL {
            let json = serde_json::to_string(&question).unwrap();
            assert_eq!(json, format!("\"{}\"", question.id()));
        }
    }

    #[test]
    fn test_progress_percent() {
        assert_eq!(progress_percent(0), 0.0);
        assert_eq!(progress_percent(11), 100.0);
        assert_eq!(progress_percent(50), 100.0);
        assert!((progress_percent(1) - 9.0909).abs() < 0.001);
    }
}
