use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::view::error::render_error_page;

/// A single rejected form field, `field` uses the submitted key (e.g. `item.3.note`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Form failed validation on {} field(s)", .0.len())]
    InvalidFields(Vec<FieldError>),
    #[error("Too many entries submitted: {submitted} (max {max})")]
    TooManyEntries { submitted: usize, max: usize },
}

impl ValidationError {
    /// Field level messages shown to the user
    pub fn messages(&self) -> Vec<String> {
        match self {
            Self::InvalidFields(errors) => errors
                .iter()
                .map(|e| format!("{}: {}", e.field, e.message))
                .collect(),
            Self::TooManyEntries { .. } => vec![self.to_string()],
        }
    }

    /// Returns `Ok(())` when no field errors were collected
    pub fn check(errors: Vec<FieldError>) -> Result<(), Self> {
        if errors.is_empty() {
            Ok(())
        } else {
            Err(Self::InvalidFields(errors))
        }
    }
}

impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        render_error_page(
            StatusCode::UNPROCESSABLE_ENTITY,
            "Please fix the following errors",
            self.messages(),
        )
    }
}

#[cfg(test)]
mod tests {
    use crate::server::error::validation::{FieldError, ValidationError};

    /// Expect Ok when no field errors were collected
    #[test]
    fn check_passes_without_errors() {
        assert!(ValidationError::check(Vec::new()).is_ok());
    }

    /// Expect every field error to surface as a message prefixed with its field
    #[test]
    fn check_collects_field_messages() {
        let result = ValidationError::check(vec![
            FieldError::new("note", "may not be greater than 140 characters"),
            FieldError::new("item.0.id", "is not a valid item"),
        ]);

        let err = result.unwrap_err();
        assert_eq!(
            err.messages(),
            vec![
                "note: may not be greater than 140 characters".to_string(),
                "item.0.id: is not a valid item".to_string(),
            ]
        );
    }
}
