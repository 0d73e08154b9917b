use axum::{extract::State, Json};
use serde::Deserialize;

use super::non_empty;
use crate::errors::AppResult;
use crate::web::{extractors::ApiQuery, responses::SkillsList, AppState};

#[derive(Debug, Default, Deserialize)]
pub struct SkillsQuery {
    pub domain: Option<String>,
}

pub async fn list_skills(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<SkillsQuery>,
) -> AppResult<Json<SkillsList>> {
    let domain = non_empty(query.domain);
    let skills = state.skills_service.get_skills(domain.as_deref());
    Ok(Json(skills.into()))
}
