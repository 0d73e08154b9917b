use axum::{extract::State, Json};

use crate::web::{responses::ProjectsList, AppState};

pub async fn list_projects(State(state): State<AppState>) -> Json<ProjectsList> {
    Json(state.projects_service.get_projects().into())
}
