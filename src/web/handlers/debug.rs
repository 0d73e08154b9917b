//! Debug-only inspection endpoints
//!
//! Mounted only when `debug.enabled` is set.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use std::path::Path;

use super::non_empty;
use crate::errors::AppResult;
use crate::models::QuestionRecord;
use crate::web::{
    extractors::{ApiQuery, ClientKey},
    AppState,
};

#[derive(Debug, Default, Deserialize)]
pub struct QuestionsQuery {
    pub talk_id: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct QuestionsDump {
    pub file_path: String,
    pub questions: Vec<QuestionRecord>,
    pub total: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StorageStatus {
    pub data_dir: String,
    pub data_dir_exists: bool,
    pub questions_file: String,
    pub questions_file_exists: bool,
    pub questions_file_writable: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RateLimitStatus {
    pub client: String,
    pub remaining: usize,
    pub max_requests: usize,
    pub window_seconds: u64,
    pub tracked_clients: usize,
}

pub async fn list_questions(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<QuestionsQuery>,
) -> AppResult<Json<QuestionsDump>> {
    let talk_id = non_empty(query.talk_id);
    let questions = state.talks_service.list_questions(talk_id.as_deref()).await?;
    Ok(Json(QuestionsDump {
        file_path: state.talks_service.question_store_location(),
        total: questions.len(),
        questions,
    }))
}

pub async fn storage_status(State(state): State<AppState>) -> Json<StorageStatus> {
    let storage = &state.config.storage;
    let questions_file_exists = tokio::fs::try_exists(&storage.questions_file)
        .await
        .unwrap_or(false);

    Json(StorageStatus {
        data_dir: storage.data_dir.display().to_string(),
        data_dir_exists: tokio::fs::try_exists(&storage.data_dir).await.unwrap_or(false),
        questions_file: storage.questions_file.display().to_string(),
        questions_file_exists,
        questions_file_writable: is_writable(&storage.questions_file, questions_file_exists).await,
    })
}

/// Question budget left to the calling client in the current window
pub async fn rate_limit_status(
    State(state): State<AppState>,
    client: ClientKey,
) -> Json<RateLimitStatus> {
    let limiter = &state.rate_limiter;
    Json(RateLimitStatus {
        remaining: limiter.remaining(client.as_str()).await,
        max_requests: limiter.max_requests(),
        window_seconds: limiter.window().as_secs(),
        tracked_clients: limiter.tracked_keys().await,
        client: client.0,
    })
}

/// The file itself when present, otherwise the directory it would be created in
async fn is_writable(path: &Path, exists: bool) -> bool {
    let target = if exists {
        path
    } else {
        match path.parent().filter(|p| !p.as_os_str().is_empty()) {
            Some(parent) => parent,
            None => Path::new("."),
        }
    };
    match tokio::fs::metadata(target).await {
        Ok(metadata) => !metadata.permissions().readonly(),
        Err(_) => false,
    }
}
