//! Domain layer - Core account entities, credentials and validation.
//!
//! This crate contains pure domain logic with no infrastructure dependencies.
//! All types here are shared by the account service and the gateway.

pub mod constants;
pub mod error;
pub mod forms;
pub mod password;
pub mod user;
pub mod validation;

pub use constants::*;
pub use error::{DomainError, DomainResult};
pub use forms::{ChangeDetailsForm, ChangePasswordForm, LoginForm, RegistrationForm};
pub use password::Password;
pub use user::{ProfileDetails, UserRecord, UserResponse};
pub use validation::{Validate, ValidationFailure, ValidationOutcome};
