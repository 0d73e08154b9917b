//! Visitor questions about talks

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

use crate::utils::validation::{ValidationResult, ValidationRule, Validator};

pub const MIN_QUESTION_LENGTH: usize = 10;
pub const MAX_QUESTION_LENGTH: usize = 2000;
pub const MAX_NAME_LENGTH: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionStatus {
    Received,
}

/// Body of `POST /talks/{talk_id}/questions`
///
/// Fields are optional at the serde level so absent fields surface as
/// field-level validation failures rather than an opaque parse error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubmitQuestionRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, alias = "email")]
    pub contact: Option<String>,
    #[serde(default)]
    pub question: Option<String>,
}

/// A submission that passed validation
#[derive(Debug, Clone, PartialEq)]
pub struct NewQuestion {
    pub name: String,
    pub contact: String,
    pub question: String,
}

impl SubmitQuestionRequest {
    pub fn validate(self) -> ValidationResult<NewQuestion> {
        let validator = Validator::new()
            .rule(ValidationRule::required("name"))
            .rule(ValidationRule::max_length("name", MAX_NAME_LENGTH))
            .rule(ValidationRule::required("contact"))
            .rule(ValidationRule::email("contact"))
            .rule(ValidationRule::required("question"))
            .rule(ValidationRule::min_length("question", MIN_QUESTION_LENGTH))
            .rule(ValidationRule::max_length("question", MAX_QUESTION_LENGTH));

        let mut data = HashMap::new();
        data.insert("name".to_string(), self.name);
        data.insert("contact".to_string(), self.contact);
        data.insert("question".to_string(), self.question);
        validator.validate(&data)?;

        let mut take = |field: &str| {
            data.remove(field)
                .flatten()
                .map(|v| v.trim().to_string())
                .unwrap_or_default()
        };
        Ok(NewQuestion {
            name: take("name"),
            contact: take("contact"),
            question: take("question"),
        })
    }
}

/// One entry of the question log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionRecord {
    pub id: String,
    pub talk_id: String,
    pub name: String,
    pub contact: String,
    pub question: String,
    pub submitted_at: DateTime<Utc>,
    pub status: QuestionStatus,
}

impl QuestionRecord {
    /// Stamp a validated submission with a fresh id and the current time
    pub fn new(talk_id: &str, input: NewQuestion) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            talk_id: talk_id.to_string(),
            name: input.name,
            contact: input.contact,
            question: input.question,
            submitted_at: Utc::now(),
            status: QuestionStatus::Received,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitQuestionResponse {
    pub id: String,
    pub talk_id: String,
    pub status: QuestionStatus,
    pub message: String,
}

impl From<&QuestionRecord> for SubmitQuestionResponse {
    fn from(record: &QuestionRecord) -> Self {
        Self {
            id: record.id.clone(),
            talk_id: record.talk_id.clone(),
            status: record.status,
            message: format!(
                "Thanks {}! Your question has been received and will be answered soon.",
                record.name
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::validation::ValidationError;

    fn request(name: &str, contact: &str, question: &str) -> SubmitQuestionRequest {
        SubmitQuestionRequest {
            name: Some(name.to_string()),
            contact: Some(contact.to_string()),
            question: Some(question.to_string()),
        }
    }

    #[test]
    fn test_valid_request_is_trimmed() {
        let input = request(" A ", "a@x.com", "Why does this matter for teams?  ")
            .validate()
            .unwrap();
        assert_eq!(input.name, "A");
        assert_eq!(input.question, "Why does this matter for teams?");
    }

    #[test]
    fn test_short_question_rejected() {
        let errors = request("A", "a@x.com", "Too short").validate().unwrap_err();
        assert_eq!(
            errors,
            vec![ValidationError::TooShort {
                field: "question".to_string(),
                min: MIN_QUESTION_LENGTH,
                actual: 9,
            }]
        );
    }

    #[test]
    fn test_empty_body_reports_every_field() {
        let errors = SubmitQuestionRequest::default().validate().unwrap_err();
        let fields: Vec<&str> = errors.iter().map(|e| e.field()).collect();
        assert_eq!(fields, vec!["name", "contact", "question"]);
    }

    #[test]
    fn test_email_alias_accepted() {
        let req: SubmitQuestionRequest = serde_json::from_str(
            r#"{"name":"A","email":"a@x.com","question":"How do you handle edge cases?"}"#,
        )
        .unwrap();
        assert_eq!(req.contact.as_deref(), Some("a@x.com"));
    }

    #[test]
    fn test_record_defaults() {
        let input = request("A", "a@x.com", "Why does this matter for teams?")
            .validate()
            .unwrap();
        let first = QuestionRecord::new("t1", input.clone());
        let second = QuestionRecord::new("t1", input);

        assert_eq!(first.status, QuestionStatus::Received);
        assert_ne!(first.id, second.id);

        let response = SubmitQuestionResponse::from(&first);
        assert_eq!(response.talk_id, "t1");
        assert!(!response.message.is_empty());
        assert_eq!(
            serde_json::to_value(&response).unwrap()["status"],
            "received"
        );
    }
}
