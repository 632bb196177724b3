//! Domain-level errors.
//!
//! These errors represent business rule violations and contract failures.
//! They are independent of infrastructure concerns (HTTP, storage).

use thiserror::Error;

use crate::constants::{OLD_PASSWORD_MISMATCH, USER_ALREADY_EXISTS, USER_DOES_NOT_EXIST, WRONG_PASSWORD};

/// Domain-specific errors for business rule violations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An account with the candidate email is already registered
    #[error("{}", USER_ALREADY_EXISTS)]
    AlreadyExists,

    /// No account is registered under the given email
    #[error("{}", USER_DOES_NOT_EXIST)]
    NotFound,

    /// The old password supplied to a password change did not verify
    #[error("{}", OLD_PASSWORD_MISMATCH)]
    OldPasswordMismatch,

    /// The password supplied to a login did not verify
    #[error("{}", WRONG_PASSWORD)]
    WrongPassword,

    /// Caller broke an operation's contract (e.g. empty password to hash)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Internal domain error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl DomainError {
    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        DomainError::InvalidInput(msg.into())
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        DomainError::Internal(msg.into())
    }
}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_business_failures_render_fixed_messages() {
        assert_eq!(DomainError::AlreadyExists.to_string(), "User with given Email already exists.");
        assert_eq!(DomainError::NotFound.to_string(), "User with given Email does not exist.");
        assert_eq!(DomainError::OldPasswordMismatch.to_string(), "Old password does not match");
        assert_eq!(
            DomainError::WrongPassword.to_string(),
            "Password does not match for account with given Email."
        );
    }
}
