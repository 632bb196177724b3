//! Account service - Validate-then-act orchestration of the account use cases.
//!
//! Every use case runs its form's rule chains first and returns the
//! outcome without touching the store when it is not valid. Store failures
//! are translated to `AppError` here and nowhere else.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info, warn};

use common::{AppError, AppResult};
use domain::{
    ChangeDetailsForm, ChangePasswordForm, DomainError, LoginForm, RegistrationForm, UserRecord,
    Validate,
};

use crate::repository::AccountRepository;

/// Account service trait for dependency injection.
#[async_trait]
pub trait AccountService: Send + Sync {
    /// Register a new account; the returned record holds the digest
    async fn register(&self, form: RegistrationForm) -> AppResult<UserRecord>;

    /// Return the account matching email and password
    async fn login(&self, form: LoginForm) -> AppResult<UserRecord>;

    /// Replace the password after verifying the old one
    async fn change_password(&self, form: ChangePasswordForm) -> AppResult<()>;

    /// Replace the profile fields of an account
    async fn change_details(&self, form: ChangeDetailsForm) -> AppResult<()>;

    /// List all accounts
    async fn list_users(&self) -> AppResult<Vec<UserRecord>>;

    /// Number of stored accounts
    async fn count(&self) -> AppResult<usize>;
}

/// Concrete implementation of AccountService using repository.
pub struct AccountManager {
    repo: Arc<dyn AccountRepository>,
}

impl AccountManager {
    /// Create new account service instance with repository
    pub fn new(repo: Arc<dyn AccountRepository>) -> Self {
        Self { repo }
    }
}

/// Turn a non-empty validation outcome into the caller-visible failure
fn ensure_valid<F: Validate>(use_case: &'static str, form: &F) -> AppResult<()> {
    form.validate().into_result().map_err(|outcome| {
        debug!(use_case, failures = outcome.len(), "Form rejected by validation");
        AppError::Validation(outcome)
    })
}

#[async_trait]
impl AccountService for AccountManager {
    async fn register(&self, form: RegistrationForm) -> AppResult<UserRecord> {
        ensure_valid("register", &form)?;

        let user = self.repo.register(form).await?;
        info!(email = %user.email, "Account registered");
        Ok(user)
    }

    async fn login(&self, form: LoginForm) -> AppResult<UserRecord> {
        ensure_valid("login", &form)?;

        let user = self
            .repo
            .login(&form.email, &form.password)
            .await
            .inspect_err(|e| {
                if matches!(e, DomainError::WrongPassword) {
                    warn!(email = %form.email, "Login with wrong password");
                }
            })?;
        Ok(user)
    }

    async fn change_password(&self, form: ChangePasswordForm) -> AppResult<()> {
        ensure_valid("change_password", &form)?;

        self.repo
            .change_password(&form.email, &form.old_password, &form.new_password)
            .await
            .inspect_err(|e| {
                if matches!(e, DomainError::OldPasswordMismatch) {
                    warn!(email = %form.email, "Password change with wrong old password");
                }
            })?;
        info!(email = %form.email, "Password changed");
        Ok(())
    }

    async fn change_details(&self, form: ChangeDetailsForm) -> AppResult<()> {
        ensure_valid("change_details", &form)?;

        let (email, details) = form.into_parts();
        self.repo.change_details(&email, details).await?;
        info!(email = %email, "Account details changed");
        Ok(())
    }

    async fn list_users(&self) -> AppResult<Vec<UserRecord>> {
        Ok(self.repo.list_all().await)
    }

    async fn count(&self) -> AppResult<usize> {
        Ok(self.repo.count().await)
    }
}
