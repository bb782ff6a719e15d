//! Typed error handling for the shipyard service
//!
//! Every failure the core can produce is a variant of one of the category
//! enums below, collected under [`ShipyardError`]. Callers can match on the
//! specific case instead of inspecting messages.
//!
//! # Error Categories
//!
//! - [`ValidationError`]: missing or out-of-range ship fields
//! - [`RequestError`]: malformed identifiers and query parameters
//! - [`EntityError`]: operations on ships that do not exist
//! - [`StorageError`]: failures reported by the repository collaborator
//! - [`ConfigError`]: configuration parsing and validation
//!
//! # Example
//!
//! ```rust,ignore
//! match service.get(id).await {
//!     Ok(ship) => println!("Found: {}", ship.name),
//!     Err(ShipyardError::Entity(EntityError::NotFound { id })) => {
//!         println!("Ship {} not found", id);
//!     }
//!     Err(e) => eprintln!("Other error: {}", e),
//! }
//! ```

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

/// The main error type for the shipyard service
#[derive(Debug, Error)]
pub enum ShipyardError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Request(#[from] RequestError),

    #[error(transparent)]
    Entity(#[from] EntityError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Error response structure for HTTP responses
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ShipyardError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ShipyardError::Validation(_) => StatusCode::BAD_REQUEST,
            ShipyardError::Request(_) => StatusCode::BAD_REQUEST,
            ShipyardError::Entity(e) => e.status_code(),
            ShipyardError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ShipyardError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            ShipyardError::Validation(e) => e.error_code(),
            ShipyardError::Request(e) => e.error_code(),
            ShipyardError::Entity(e) => e.error_code(),
            ShipyardError::Storage(_) => "STORAGE_ERROR",
            ShipyardError::Config(_) => "CONFIG_ERROR",
        }
    }

    /// Whether the caller supplied bad input (as opposed to a missing record or a server fault)
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            ShipyardError::Validation(_) | ShipyardError::Request(_)
        )
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
            ShipyardError::Validation(ValidationError::MissingField { fields }) => {
                Some(serde_json::json!({ "fields": fields }))
            }
            ShipyardError::Validation(ValidationError::InvalidField { field, .. }) => {
                Some(serde_json::json!({ "field": field }))
            }
            ShipyardError::Request(RequestError::InvalidId { value }) => {
                Some(serde_json::json!({ "value": value }))
            }
            ShipyardError::Request(RequestError::InvalidParameter { name, value }) => {
                Some(serde_json::json!({ "parameter": name, "value": value }))
            }
            ShipyardError::Entity(EntityError::NotFound { id }) => {
                Some(serde_json::json!({ "id": id }))
            }
            _ => None,
        }
    }
}

impl IntoResponse for ShipyardError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        let body = Json(self.to_response());
        (status, body).into_response()
    }
}

// =============================================================================
// Validation Errors
// =============================================================================

/// Errors related to ship field validation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// One or more fields required on create were not supplied
    #[error("Ship parameters are not full, missing: {}", .fields.join(", "))]
    MissingField { fields: Vec<&'static str> },

    /// A supplied field violates its constraint
    #[error("Incorrect value for '{field}': {message}")]
    InvalidField {
        field: &'static str,
        message: String,
    },
}

impl ValidationError {
    pub fn error_code(&self) -> &'static str {
        match self {
            ValidationError::MissingField { .. } => "MISSING_FIELD",
            ValidationError::InvalidField { .. } => "INVALID_FIELD",
        }
    }

    /// Name of the offending field, when a single field is at fault
    pub fn field(&self) -> Option<&'static str> {
        match self {
            ValidationError::InvalidField { field, .. } => Some(*field),
            ValidationError::MissingField { .. } => None,
        }
    }
}

// =============================================================================
// Request Errors
// =============================================================================

/// Errors related to identifiers and query parameters supplied by callers
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RequestError {
    /// Identifier text is not a positive integer
    #[error("Invalid ship id: '{value}'")]
    InvalidId { value: String },

    /// Query parameter could not be interpreted
    #[error("Invalid value '{value}' for parameter '{name}'")]
    InvalidParameter { name: &'static str, value: String },

    /// Body or query string could not be decoded
    #[error("Malformed request: {message}")]
    Malformed { message: String },
}

impl RequestError {
    pub fn error_code(&self) -> &'static str {
        match self {
            RequestError::InvalidId { .. } => "INVALID_ID",
            RequestError::InvalidParameter { .. } => "INVALID_PARAMETER",
            RequestError::Malformed { .. } => "MALFORMED_REQUEST",
        }
    }
}

// =============================================================================
// Entity Errors
// =============================================================================

/// Errors related to ship records
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EntityError {
    /// No ship with this id exists
    #[error("Ship with id '{id}' not found")]
    NotFound { id: i64 },
}

impl EntityError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            EntityError::NotFound { .. } => StatusCode::NOT_FOUND,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            EntityError::NotFound { .. } => "SHIP_NOT_FOUND",
        }
    }
}

// =============================================================================
// Storage Errors
// =============================================================================

/// Errors reported by the repository collaborator
#[derive(Debug, Error)]
pub enum StorageError {
    /// A repository call failed
    #[error("Storage {operation} failed: {source}")]
    OperationFailed {
        operation: &'static str,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl StorageError {
    /// Wrap a repository failure, naming the repository call that produced it
    pub fn operation(operation: &'static str) -> impl FnOnce(anyhow::Error) -> ShipyardError {
        move |source| {
            ShipyardError::Storage(StorageError::OperationFailed {
                operation,
                source: source.into(),
            })
        }
    }
}

// =============================================================================
// Config Errors
// =============================================================================

/// Errors related to configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to parse configuration
    #[error("Failed to parse config{}: {message}", .file.as_ref().map(|f| format!(" file '{f}'")).unwrap_or_default())]
    ParseError {
        file: Option<String>,
        message: String,
    },

    /// Invalid value in configuration
    #[error("Invalid value '{value}' for field '{field}': {message}")]
    InvalidValue {
        field: String,
        value: String,
        message: String,
    },

    /// IO error while reading configuration
    #[error("Failed to read config file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

// =============================================================================
// Result type alias
// =============================================================================

/// A specialized Result type for shipyard operations
pub type ShipyardResult<T> = Result<T, ShipyardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_lists_fields() {
        let err = ValidationError::MissingField {
            fields: vec!["name", "speed"],
        };
        assert!(err.to_string().contains("name, speed"));
        assert_eq!(err.error_code(), "MISSING_FIELD");
        assert_eq!(err.field(), None);
    }

    #[test]
    fn test_invalid_field_names_field() {
        let err = ValidationError::InvalidField {
            field: "crewSize",
            message: "must be between 1 and 50".to_string(),
        };
        assert!(err.to_string().contains("crewSize"));
        assert_eq!(err.field(), Some("crewSize"));
    }

    #[test]
    fn test_not_found_is_distinct_from_client_errors() {
        let not_found: ShipyardError = EntityError::NotFound { id: 4 }.into();
        assert_eq!(not_found.status_code(), StatusCode::NOT_FOUND);
        assert!(!not_found.is_client_error());

        let invalid_id: ShipyardError = RequestError::InvalidId {
            value: "abc".to_string(),
        }
        .into();
        assert_eq!(invalid_id.status_code(), StatusCode::BAD_REQUEST);
        assert!(invalid_id.is_client_error());
    }

    #[test]
    fn test_storage_error_wraps_source() {
        let err = StorageError::operation("insert")(anyhow::anyhow!("disk full"));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.error_code(), "STORAGE_ERROR");
        assert!(err.to_string().contains("insert"));
        assert!(err.to_string().contains("disk full"));
    }

    #[test]
    fn test_error_response_details() {
        let err: ShipyardError = EntityError::NotFound { id: 12 }.into();
        let response = err.to_response();
        assert_eq!(response.code, "SHIP_NOT_FOUND");
        assert_eq!(response.details, Some(serde_json::json!({ "id": 12 })));
    }

    #[test]
    fn test_config_parse_error_display() {
        let err = ConfigError::ParseError {
            file: Some("shipyard.yaml".to_string()),
            message: "bad indent".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Failed to parse config file 'shipyard.yaml': bad indent"
        );

        let err = ConfigError::ParseError {
            file: None,
            message: "bad indent".to_string(),
        };
        assert_eq!(err.to_string(), "Failed to parse config: bad indent");
    }
}
