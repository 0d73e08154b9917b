//! HTTP request handlers organized by domain
//!
//! Handlers stay thin: they extract parameters, call the matching service
//! on [`AppState`](crate::web::AppState) and wrap the result.

pub mod debug;
pub mod docs;
pub mod health;
pub mod profile;
pub mod projects;
pub mod skills;
pub mod talks;

/// Treat an empty query value the same as an absent one
pub(crate) fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
