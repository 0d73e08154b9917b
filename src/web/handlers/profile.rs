use axum::{extract::State, Json};
use serde::Deserialize;

use super::non_empty;
use crate::errors::AppResult;
use crate::models::{Profile, Quote};
use crate::web::{extractors::ApiQuery, AppState};

#[derive(Debug, Default, Deserialize)]
pub struct QuoteQuery {
    pub topic: Option<String>,
}

pub async fn get_profile(State(state): State<AppState>) -> Json<Profile> {
    Json(state.profile_service.get_profile())
}

/// One quote for `topic`, falling back to the general bucket
pub async fn get_quote(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<QuoteQuery>,
) -> AppResult<Json<Quote>> {
    let topic = non_empty(query.topic);
    Ok(Json(state.profile_service.get_quote(topic.as_deref())))
}
