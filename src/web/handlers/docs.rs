//! Embedded API documentation

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Redirect, Response},
};

use crate::assets::StaticAssets;

pub async fn index() -> Redirect {
    Redirect::temporary("/docs")
}

pub async fn docs_page() -> Response {
    serve_embedded("static/docs.html")
}

pub async fn openapi_document() -> Response {
    serve_embedded("static/openapi.json")
}

fn serve_embedded(path: &str) -> Response {
    match StaticAssets::get_asset(path) {
        Some(file) => (
            [
                (header::CONTENT_TYPE, StaticAssets::get_content_type(path)),
                (header::CACHE_CONTROL, "public, max-age=3600"),
            ],
            file.data.into_owned(),
        )
            .into_response(),
        None => (StatusCode::NOT_FOUND, "Asset not found").into_response(),
    }
}
