//! Talk listing and question submission handlers

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;

use crate::errors::AppResult;
use crate::models::{SubmitQuestionRequest, SubmitQuestionResponse};
use crate::web::{
    extractors::{ApiJson, ApiQuery},
    responses::TalksList,
    AppState,
};

#[derive(Debug, Default, Deserialize)]
pub struct TalksQuery {
    pub year: Option<i32>,
}

pub async fn list_talks(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<TalksQuery>,
) -> AppResult<Json<TalksList>> {
    Ok(Json(state.talks_service.get_talks(query.year).into()))
}

/// Record a visitor question against an existing talk
///
/// Rate limiting happens in middleware before this handler runs.
pub async fn submit_question(
    State(state): State<AppState>,
    Path(talk_id): Path<String>,
    ApiJson(request): ApiJson<SubmitQuestionRequest>,
) -> AppResult<Json<SubmitQuestionResponse>> {
    let record = state.talks_service.submit_question(&talk_id, request).await?;
    Ok(Json(SubmitQuestionResponse::from(&record)))
}
