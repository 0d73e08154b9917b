//! HTTP response types and utilities
//!
//! Every failure leaves the service as `{"error": {"code", "message", "details"}}`
//! and the status/code mapping for [`AppError`] lives here only.

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::errors::AppError;
use crate::models::{Project, Skill, Talk};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

impl ErrorResponse {
    pub fn new<C: Into<String>, M: Into<String>>(code: C, message: M, details: Option<Value>) -> Self {
        Self {
            error: ErrorDetail {
                code: code.into(),
                message: message.into(),
                details,
            },
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillsList {
    pub skills: Vec<Skill>,
    pub total: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TalksList {
    pub talks: Vec<Talk>,
    pub total: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectsList {
    pub projects: Vec<Project>,
    pub total: usize,
}

impl From<Vec<Skill>> for SkillsList {
    fn from(skills: Vec<Skill>) -> Self {
        Self {
            total: skills.len(),
            skills,
        }
    }
}

impl From<Vec<Talk>> for TalksList {
    fn from(talks: Vec<Talk>) -> Self {
        Self {
            total: talks.len(),
            talks,
        }
    }
}

impl From<Vec<Project>> for ProjectsList {
    fn from(projects: Vec<Project>) -> Self {
        Self {
            total: projects.len(),
            projects,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
}

impl HealthResponse {
    pub fn healthy<S: Into<String>>(service: S) -> Self {
        Self {
            status: "healthy".to_string(),
            service: service.into(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Status, error code, message and details for an application error
pub fn error_parts(error: &AppError) -> (StatusCode, String, String, Option<Value>) {
    match error {
        AppError::Validation { message, fields } => {
            let details = if fields.is_empty() {
                None
            } else {
                Some(json!({
                    "fields": fields
                        .iter()
                        .map(|f| json!({"field": f.field(), "message": f.to_string()}))
                        .collect::<Vec<_>>()
                }))
            };
            (
                StatusCode::UNPROCESSABLE_ENTITY,
                "VALIDATION_ERROR".to_string(),
                message.clone(),
                details,
            )
        }
        AppError::NotFound { resource, id } => (
            StatusCode::NOT_FOUND,
            format!("{}_NOT_FOUND", resource.to_uppercase()),
            format!("{} with id '{}' not found", capitalize(resource), id),
            Some(json!({ (format!("{resource}_id")): id })),
        ),
        AppError::RateLimited { retry_after_secs } => (
            StatusCode::TOO_MANY_REQUESTS,
            "RATE_LIMITED".to_string(),
            "Too many requests, please slow down".to_string(),
            Some(json!({ "retry_after_seconds": retry_after_secs })),
        ),
        AppError::Repository(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "PERSISTENCE_FAILURE".to_string(),
            "The request could not be saved, please try again later".to_string(),
            None,
        ),
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, details) = error_parts(&self);
        let mut response = (status, Json(ErrorResponse::new(code, message, details))).into_response();

        if let AppError::RateLimited { retry_after_secs } = self {
            if let Ok(value) = HeaderValue::from_str(&retry_after_secs.to_string()) {
                response.headers_mut().insert(header::RETRY_AFTER, value);
            }
        }

        response
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
