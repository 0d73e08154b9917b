//! Centralized error handling for the portfolio API
//!
//! Errors are grouped by the layer that produces them:
//!
//! - **Data Errors**: static document loading and schema validation at startup
//! - **Repository Errors**: question log reads and writes
//! - **Validation Errors**: request input rules (see [`crate::utils::validation`])
//!
//! [`AppError`] unifies them and is what handlers return. The mapping from
//! `AppError` to an HTTP status and error code lives in
//! [`crate::web::responses`].

pub mod types;

pub use types::*;

/// Convenience type alias for Results using AppError
pub type AppResult<T> = Result<T, AppError>;

/// Convenience type alias for Repository Results
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Convenience type alias for static data loading Results
pub type DataResult<T> = Result<T, DataError>;
