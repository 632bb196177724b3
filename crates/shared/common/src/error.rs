//! Unified error handling for the account service and its HTTP boundary.
//!
//! Validation failures and business-rule failures stay distinguishable by
//! variant, while every variant renders to one human-readable message.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use domain::{
    DomainError, ValidationOutcome, OLD_PASSWORD_MISMATCH, USER_ALREADY_EXISTS,
    USER_DOES_NOT_EXIST, WRONG_PASSWORD,
};
use thiserror::Error;

/// Application error types.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    // Validation
    #[error("{0}")]
    Validation(ValidationOutcome),

    #[error("Invalid input: {0}")]
    BadRequest(String),

    // Business rules
    #[error("{}", USER_ALREADY_EXISTS)]
    AlreadyExists,

    #[error("{}", USER_DOES_NOT_EXIST)]
    NotFound,

    #[error("{}", OLD_PASSWORD_MISMATCH)]
    OldPasswordMismatch,

    #[error("{}", WRONG_PASSWORD)]
    WrongPassword,

    // Internal
    #[error("Internal server error")]
    Internal(String),
}

impl AppError {
    /// Get error code for client
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::BadRequest(_) => "BAD_REQUEST",
            AppError::AlreadyExists => "ALREADY_EXISTS",
            AppError::NotFound => "NOT_FOUND",
            AppError::OldPasswordMismatch => "OLD_PASSWORD_MISMATCH",
            AppError::WrongPassword => "WRONG_PASSWORD",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Get HTTP status code
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::BadRequest(_) | AppError::OldPasswordMismatch => {
                StatusCode::BAD_REQUEST
            }
            AppError::WrongPassword => StatusCode::UNAUTHORIZED,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::AlreadyExists => StatusCode::CONFLICT,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Validation failures and business failures are client errors
    pub fn is_client_error(&self) -> bool {
        self.status().is_client_error()
    }

    /// Get user-facing message (hides internal details)
    pub fn user_message(&self) -> String {
        match self {
            AppError::BadRequest(msg) => msg.clone(),
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "An internal error occurred".to_string()
            }
            _ => self.to_string(),
        }
    }
}

// =============================================================================
// HTTP Response (Axum)
// =============================================================================

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.status(), self.user_message()).into_response()
    }
}

// =============================================================================
// Domain Error Conversion
// =============================================================================

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::AlreadyExists => AppError::AlreadyExists,
            DomainError::NotFound => AppError::NotFound,
            DomainError::OldPasswordMismatch => AppError::OldPasswordMismatch,
            DomainError::WrongPassword => AppError::WrongPassword,
            DomainError::InvalidInput(msg) => AppError::Internal(format!("Contract violation: {}", msg)),
            DomainError::Internal(msg) => AppError::Internal(msg),
        }
    }
}

impl From<ValidationOutcome> for AppError {
    fn from(outcome: ValidationOutcome) -> Self {
        AppError::Validation(outcome)
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Convenience constructors
impl AppError {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        AppError::BadRequest(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::ValidationFailure;

    #[test]
    fn test_domain_errors_keep_message() {
        for (domain_err, code) in [
            (DomainError::AlreadyExists, "ALREADY_EXISTS"),
            (DomainError::NotFound, "NOT_FOUND"),
            (DomainError::OldPasswordMismatch, "OLD_PASSWORD_MISMATCH"),
            (DomainError::WrongPassword, "WRONG_PASSWORD"),
        ] {
            let message = domain_err.to_string();
            let app_err = AppError::from(domain_err);
            assert_eq!(app_err.code(), code);
            assert_eq!(app_err.user_message(), message);
            assert!(app_err.is_client_error());
        }
    }

    #[test]
    fn test_validation_message_is_space_joined() {
        let outcome: ValidationOutcome = vec![
            ValidationFailure::new("firstName", "First Name cannot be empty."),
            ValidationFailure::new("address", "Address cannot be empty."),
        ]
        .into_iter()
        .collect();

        let err = AppError::from(outcome);
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            err.user_message(),
            "First Name cannot be empty. Address cannot be empty."
        );
    }

    #[test]
    fn test_internal_details_hidden() {
        let err = AppError::from(DomainError::invalid_input("Empty Password"));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!err.user_message().contains("Empty Password"));
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(AppError::AlreadyExists.status(), StatusCode::CONFLICT);
        assert_eq!(AppError::NotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(AppError::WrongPassword.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(AppError::OldPasswordMismatch.status(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::bad_request("x").status(), StatusCode::BAD_REQUEST);
    }
}
