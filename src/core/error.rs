//! Typed error handling for list views
//!
//! Errors are grouped by the boundary where they arise:
//!
//! - [`ValidationError`]: malformed filter, sort, selection or draft input
//! - [`LoadError`]: the record provider failed to supply the store
//! - [`ActionError`]: a bulk action or create call failed
//! - [`ConfigError`]: view configuration could not be read or parsed
//!
//! # Example
//!
//! ```rust,ignore
//! match view.set_sort_by_name("popularity:desc") {
//!     Ok(()) => {}
//!     Err(ViewError::Validation(ValidationError::UnknownSortKey { key, .. })) => {
//!         eprintln!("cannot sort by {}", key);
//!     }
//!     Err(e) => eprintln!("other error: {}", e),
//! }
//! ```

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use std::collections::BTreeMap;
use thiserror::Error;

/// The main error type for list views
#[derive(Debug, Error)]
pub enum ViewError {
    /// Rejected user input
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Record store could not be loaded
    #[error(transparent)]
    Load(#[from] LoadError),

    /// Bulk or create action failed
    #[error(transparent)]
    Action(#[from] ActionError),

    /// Configuration errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Internal errors (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error response structure for HTTP responses
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ViewError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ViewError::Validation(e) => e.status_code(),
            ViewError::Load(_) => StatusCode::BAD_GATEWAY,
            ViewError::Action(_) => StatusCode::BAD_GATEWAY,
            ViewError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ViewError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            ViewError::Validation(e) => e.error_code(),
            ViewError::Load(_) => "LOAD_ERROR",
            ViewError::Action(e) => e.error_code(),
            ViewError::Config(_) => "CONFIG_ERROR",
            ViewError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Convert to an error response
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            code: self.error_code().to_string(),
            message: self.to_string(),
            details: self.details(),
        }
    }

    fn details(&self) -> Option<serde_json::Value> {
        match self {
            ViewError::Validation(ValidationError::FieldErrors(errors)) => {
                Some(serde_json::json!({ "fields": errors }))
            }
            ViewError::Validation(ValidationError::UnknownSortKey { allowed, .. }) => {
                Some(serde_json::json!({ "allowed": allowed }))
            }
            ViewError::Action(ActionError::Failed { action, ids, .. }) => {
                Some(serde_json::json!({ "action": action, "ids": ids }))
            }
            _ => None,
        }
    }
}

impl IntoResponse for ViewError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(self.to_response());
        (status, body).into_response()
    }
}

// =============================================================================
// Validation Errors
// =============================================================================

/// Errors raised when user input does not fit the view's closed types
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// Sort key is not one of the view's sortable fields
    #[error("Unknown sort key '{key}' for {resource}")]
    UnknownSortKey {
        resource: String,
        key: String,
        allowed: Vec<String>,
    },

    /// Sort direction is neither `asc` nor `desc`
    #[error("Invalid sort direction '{0}' (expected 'asc' or 'desc')")]
    InvalidSortDirection(String),

    /// Filter field is not one of the view's filterable fields
    #[error("Unknown filter '{field}' for {resource}")]
    UnknownFilter { resource: String, field: String },

    /// Filter expression is not a flat JSON object of strings
    #[error("Malformed filter expression: {0}")]
    MalformedFilter(String),

    /// Identifier not present in the source list
    #[error("Record '{id}' is not part of {resource}")]
    UnknownRecord { resource: String, id: String },

    /// Bulk action not offered by this view
    #[error("Unknown bulk action '{action}' for {resource}")]
    UnknownAction { resource: String, action: String },

    /// Bulk action invoked with nothing selected
    #[error("No records selected")]
    EmptySelection,

    /// Draft payload failed field validation
    #[error("Validation failed for {} field(s)", .0.len())]
    FieldErrors(BTreeMap<String, Vec<String>>),
}

impl ValidationError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ValidationError::UnknownRecord { .. } => StatusCode::NOT_FOUND,
            ValidationError::FieldErrors(_) => StatusCode::UNPROCESSABLE_ENTITY,
            _ => StatusCode::BAD_REQUEST,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            ValidationError::UnknownSortKey { .. } => "UNKNOWN_SORT_KEY",
            ValidationError::InvalidSortDirection(_) => "INVALID_SORT_DIRECTION",
            ValidationError::UnknownFilter { .. } => "UNKNOWN_FILTER",
            ValidationError::MalformedFilter(_) => "MALFORMED_FILTER",
            ValidationError::UnknownRecord { .. } => "UNKNOWN_RECORD",
            ValidationError::UnknownAction { .. } => "UNKNOWN_ACTION",
            ValidationError::EmptySelection => "EMPTY_SELECTION",
            ValidationError::FieldErrors(_) => "VALIDATION_ERROR",
        }
    }

    /// Build a `FieldErrors` from `validator` output
    pub fn from_validator(errors: &validator::ValidationErrors) -> Self {
        let mut fields = BTreeMap::new();
        for (field, errs) in errors.field_errors() {
            let messages = errs
                .iter()
                .map(|e| {
                    e.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string())
                })
                .collect();
            fields.insert(field.to_string(), messages);
        }
        ValidationError::FieldErrors(fields)
    }
}

// =============================================================================
// Load / Action / Config Errors
// =============================================================================

/// The record provider failed
#[derive(Debug, Error)]
#[error("Failed to load {resource}: {message}")]
pub struct LoadError {
    pub resource: String,
    pub message: String,
}

/// An outbound action failed; selection and store are left untouched
#[derive(Debug, Error)]
pub enum ActionError {
    /// Bulk action call failed
    #[error("Bulk action '{action}' on {resource} failed: {message}")]
    Failed {
        resource: String,
        action: String,
        ids: Vec<String>,
        message: String,
    },

    /// Create call failed
    #[error("Failed to create {resource}: {message}")]
    CreateFailed { resource: String, message: String },
}

impl ActionError {
    pub fn error_code(&self) -> &'static str {
        match self {
            ActionError::Failed { .. } => "BULK_ACTION_FAILED",
            ActionError::CreateFailed { .. } => "CREATE_FAILED",
        }
    }
}

/// Configuration could not be loaded
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),
}
