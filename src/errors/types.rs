//! Error type definitions for the portfolio API
//!
//! This module defines all error types used throughout the application.
//! Each layer gets its own enum and the top-level [`AppError`] wraps them
//! with `#[from]` so `?` works across layer boundaries.

use std::path::PathBuf;
use thiserror::Error;

use crate::utils::validation::ValidationError;

/// Top-level application error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Request input failed one or more validation rules
    #[error("Validation error: {message}")]
    Validation {
        message: String,
        fields: Vec<ValidationError>,
    },

    /// Resource not found errors
    #[error("Not found: {resource} with id {id}")]
    NotFound { resource: String, id: String },

    /// Caller exceeded the request budget of the current window
    #[error("Rate limited: retry after {retry_after_secs} seconds")]
    RateLimited { retry_after_secs: u64 },

    /// Question log errors
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}

/// Question log specific errors
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// Reading or writing the backing file failed
    #[error("I/O failed on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The backing document could not be (de)serialized
    #[error("Serialization failed for {path}: {source}")]
    Serialization {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Static document loading errors, raised only during startup
#[derive(Error, Debug)]
pub enum DataError {
    /// Document neither on disk nor embedded
    #[error("Data file missing: {file}")]
    Missing { file: String },

    /// Document exists but could not be read
    #[error("Failed to read {file}: {source}")]
    Read {
        file: String,
        #[source]
        source: std::io::Error,
    },

    /// Document does not match the expected schema
    #[error("Invalid schema in {file}: {source}")]
    Parse {
        file: String,
        #[source]
        source: serde_json::Error,
    },

    /// Two records in one collection share an identifier
    #[error("Duplicate id '{id}' in {file}")]
    DuplicateId { file: String, id: String },
}

/// Convenience methods for creating common error types
impl AppError {
    /// Create a validation error from a list of field failures
    pub fn validation(fields: Vec<ValidationError>) -> Self {
        let message = fields
            .iter()
            .map(|f| f.to_string())
            .collect::<Vec<_>>()
            .join("; ");
        Self::Validation { message, fields }
    }

    /// Create a validation error for a body or query string that could not be decoded
    pub fn malformed<F: Into<String>, R: Into<String>>(field: F, reason: R) -> Self {
        Self::validation(vec![ValidationError::Malformed {
            field: field.into(),
            reason: reason.into(),
        }])
    }

    /// Create a not found error for a specific resource
    pub fn not_found<R: Into<String>, I: Into<String>>(resource: R, id: I) -> Self {
        Self::NotFound {
            resource: resource.into(),
            id: id.into(),
        }
    }
}

impl RepositoryError {
    pub fn io<P: Into<PathBuf>>(path: P, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn serialization<P: Into<PathBuf>>(path: P, source: serde_json::Error) -> Self {
        Self::Serialization {
            path: path.into(),
            source,
        }
    }
}
