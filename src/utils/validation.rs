//! Input validation utilities
//!
//! Field rules are declared up front and applied to a map of field values,
//! collecting every failure instead of stopping at the first one.
//!
//! # Usage
//!
//! ```rust
//! use portfolio_api::utils::validation::{Validator, ValidationRule};
//! use std::collections::HashMap;
//!
//! let validator = Validator::new()
//!     .rule(ValidationRule::required("name"))
//!     .rule(ValidationRule::email("contact"))
//!     .rule(ValidationRule::min_length("question", 10));
//!
//! let mut data = HashMap::new();
//! data.insert("name".to_string(), Some("Ada".to_string()));
//! data.insert("contact".to_string(), Some("ada@example.com".to_string()));
//! data.insert("question".to_string(), Some("How do you test this?".to_string()));
//! assert!(validator.validate(&data).is_ok());
//! ```

use regex::Regex;
use std::collections::HashMap;
use std::sync::OnceLock;
use thiserror::Error;

/// Validation errors that can occur during input validation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Field is required but missing or empty
    #[error("Field '{field}' is required")]
    Required { field: String },

    /// Field value is too short
    #[error("Field '{field}' must be at least {min} characters long (got {actual})")]
    TooShort {
        field: String,
        min: usize,
        actual: usize,
    },

    /// Field value is too long
    #[error("Field '{field}' must be at most {max} characters long (got {actual})")]
    TooLong {
        field: String,
        max: usize,
        actual: usize,
    },

    /// Field value is not an e-mail address
    #[error("Field '{field}' must be a valid email address")]
    InvalidEmail { field: String },

    /// Field could not be decoded at all (request body or query string)
    #[error("Field '{field}' is malformed: {reason}")]
    Malformed { field: String, reason: String },
}

impl ValidationError {
    /// Name of the field that failed
    pub fn field(&self) -> &str {
        match self {
            Self::Required { field }
            | Self::TooShort { field, .. }
            | Self::TooLong { field, .. }
            | Self::InvalidEmail { field }
            | Self::Malformed { field, .. } => field,
        }
    }
}

/// Result type for validation operations
pub type ValidationResult<T> = Result<T, Vec<ValidationError>>;

/// A validation rule that can be applied to a field
#[derive(Debug, Clone)]
pub enum ValidationRule {
    /// Field is required (not None, not blank)
    Required(String),

    /// Field must be at least min characters long
    MinLength { field: String, min: usize },

    /// Field must be at most max characters long
    MaxLength { field: String, max: usize },

    /// Field must be an e-mail address
    Email(String),
}

impl ValidationRule {
    /// Create a required field rule
    pub fn required<S: Into<String>>(field: S) -> Self {
        Self::Required(field.into())
    }

    /// Create a minimum length rule
    pub fn min_length<S: Into<String>>(field: S, min: usize) -> Self {
        Self::MinLength {
            field: field.into(),
            min,
        }
    }

    /// Create a maximum length rule
    pub fn max_length<S: Into<String>>(field: S, max: usize) -> Self {
        Self::MaxLength {
            field: field.into(),
            max,
        }
    }

    /// Create an e-mail validation rule
    pub fn email<S: Into<String>>(field: S) -> Self {
        Self::Email(field.into())
    }
}

fn email_pattern() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| {
        Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern is a valid regex")
    })
}

/// Validator that applies multiple validation rules
#[derive(Debug, Default)]
pub struct Validator {
    rules: Vec<ValidationRule>,
}

impl Validator {
    /// Create a new empty validator
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Add a validation rule
    pub fn rule(mut self, rule: ValidationRule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Validate a map of field values
    pub fn validate(&self, data: &HashMap<String, Option<String>>) -> ValidationResult<()> {
        let errors: Vec<ValidationError> = self
            .rules
            .iter()
            .filter_map(|rule| Self::apply_rule(rule, data).err())
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    fn apply_rule(
        rule: &ValidationRule,
        data: &HashMap<String, Option<String>>,
    ) -> Result<(), ValidationError> {
        let present = |field: &str| data.get(field).and_then(|v| v.as_deref());

        match rule {
            ValidationRule::Required(field) => match present(field) {
                Some(v) if !v.trim().is_empty() => Ok(()),
                _ => Err(ValidationError::Required {
                    field: field.clone(),
                }),
            },

            ValidationRule::MinLength { field, min } => match present(field) {
                Some(value) if value.trim().chars().count() < *min => {
                    Err(ValidationError::TooShort {
                        field: field.clone(),
                        min: *min,
                        actual: value.trim().chars().count(),
                    })
                }
                _ => Ok(()),
            },

            ValidationRule::MaxLength { field, max } => match present(field) {
                Some(value) if value.trim().chars().count() > *max => {
                    Err(ValidationError::TooLong {
                        field: field.clone(),
                        max: *max,
                        actual: value.trim().chars().count(),
                    })
                }
                _ => Ok(()),
            },

            ValidationRule::Email(field) => match present(field) {
                Some(value) if !value.is_empty() && !email_pattern().is_match(value.trim()) => {
                    Err(ValidationError::InvalidEmail {
                        field: field.clone(),
                    })
                }
                _ => Ok(()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data(pairs: &[(&str, Option<&str>)]) -> HashMap<String, Option<String>> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.map(str::to_string)))
            .collect()
    }

    #[test]
    fn test_required_validation() {
        let data = data(&[("name", Some("test")), ("empty", Some("   ")), ("missing", None)]);

        let validator = Validator::new()
            .rule(ValidationRule::required("name"))
            .rule(ValidationRule::required("empty"))
            .rule(ValidationRule::required("missing"));

        let errors = validator.validate(&data).unwrap_err();
        assert_eq!(errors.len(), 2); // empty and missing should fail
        assert_eq!(errors[0].field(), "empty");
    }

    #[test]
    fn test_length_validation() {
        let data = data(&[("short", Some("hi")), ("long", Some("this is a very long string"))]);

        let validator = Validator::new()
            .rule(ValidationRule::min_length("short", 5))
            .rule(ValidationRule::max_length("long", 10));

        let errors = validator.validate(&data).unwrap_err();
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_min_length_counts_characters_not_bytes() {
        let data = data(&[("question", Some("éééééééééé"))]);
        let validator = Validator::new().rule(ValidationRule::min_length("question", 10));
        assert!(validator.validate(&data).is_ok());
    }

    #[test]
    fn test_email_validation() {
        let data = data(&[("good", Some("a@x.com")), ("bad", Some("not-an-address"))]);

        let validator = Validator::new()
            .rule(ValidationRule::email("good"))
            .rule(ValidationRule::email("bad"));

        let errors = validator.validate(&data).unwrap_err();
        assert_eq!(
            errors,
            vec![ValidationError::InvalidEmail {
                field: "bad".to_string()
            }]
        );
    }

    #[test]
    fn test_max_length_ignores_surrounding_whitespace() {
        let padded = format!("  {}  ", "n".repeat(100));
        let validator = Validator::new().rule(ValidationRule::max_length("name", 100));
        assert!(validator.validate(&data(&[("name", Some(padded.as_str()))])).is_ok());

        let too_long = "n".repeat(101);
        let errors = validator
            .validate(&data(&[("name", Some(too_long.as_str()))]))
            .unwrap_err();
        assert_eq!(
            errors,
            vec![ValidationError::TooLong {
                field: "name".to_string(),
                max: 100,
                actual: 101,
            }]
        );
    }
}
