//! In-memory account store.
//!
//! The store exclusively owns the live record collection behind one
//! `RwLock`. Digest derivation and verification run outside the lock; only
//! the read/compare/write of a record happens inside it.

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::warn;

use domain::{DomainError, DomainResult, Password, ProfileDetails, RegistrationForm, UserRecord};

use super::seed::UserSeed;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Account repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Find account by exact email match
    async fn find_by_email(&self, email: &str) -> Option<UserRecord>;

    /// Hash the candidate's password and store the new account
    async fn register(&self, candidate: RegistrationForm) -> DomainResult<UserRecord>;

    /// Replace the digest after verifying the old password
    async fn change_password(
        &self,
        email: &str,
        old_password: &str,
        new_password: &str,
    ) -> DomainResult<()>;

    /// Overwrite profile fields; email and digest are untouched
    async fn change_details(&self, email: &str, details: ProfileDetails) -> DomainResult<()>;

    /// Return the account whose password verifies
    async fn login(&self, email: &str, password: &str) -> DomainResult<UserRecord>;

    /// Snapshot of all accounts in insertion order
    async fn list_all(&self) -> Vec<UserRecord>;

    /// Number of stored accounts
    async fn count(&self) -> usize;
}

/// Lock-guarded in-memory implementation of AccountRepository
#[derive(Debug, Default)]
pub struct InMemoryAccountStore {
    users: RwLock<Vec<UserRecord>>,
}

impl InMemoryAccountStore {
    /// Create new empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store populated by a seed collaborator
    pub fn from_seed(seed: &dyn UserSeed) -> Self {
        Self::with_records(seed.produce_initial_records())
    }

    /// Create a store with initial records.
    ///
    /// Later records reusing an email already seen are dropped.
    pub fn with_records(records: Vec<UserRecord>) -> Self {
        let mut users: Vec<UserRecord> = Vec::with_capacity(records.len());
        for record in records {
            if users.iter().any(|u| u.email == record.email) {
                warn!(email = %record.email, "Skipping seed record with duplicate email");
                continue;
            }
            users.push(record);
        }

        Self {
            users: RwLock::new(users),
        }
    }

    async fn digest_of(&self, email: &str) -> Option<String> {
        self.users
            .read()
            .await
            .iter()
            .find(|u| u.email == email)
            .map(|u| u.password_digest.clone())
    }
}

#[async_trait]
impl AccountRepository for InMemoryAccountStore {
    async fn find_by_email(&self, email: &str) -> Option<UserRecord> {
        self.users
            .read()
            .await
            .iter()
            .find(|u| u.email == email)
            .cloned()
    }

    async fn register(&self, candidate: RegistrationForm) -> DomainResult<UserRecord> {
        // Reject known duplicates before paying for the KDF
        if self.find_by_email(&candidate.email).await.is_some() {
            return Err(DomainError::AlreadyExists);
        }

        let password = Password::new(&candidate.password)?;
        let record = UserRecord::new(candidate.email.clone(), candidate.details(), password);

        let mut users = self.users.write().await;
        if users.iter().any(|u| u.email == record.email) {
            return Err(DomainError::AlreadyExists);
        }
        users.push(record.clone());

        Ok(record)
    }

    async fn change_password(
        &self,
        email: &str,
        old_password: &str,
        new_password: &str,
    ) -> DomainResult<()> {
        let mut verified = self.digest_of(email).await.ok_or(DomainError::NotFound)?;

        loop {
            if !Password::from_hash(verified.as_str()).verify(old_password) {
                return Err(DomainError::OldPasswordMismatch);
            }
            let replacement = Password::new(new_password)?;

            let mut users = self.users.write().await;
            let user = users
                .iter_mut()
                .find(|u| u.email == email)
                .ok_or(DomainError::NotFound)?;

            // Swap only if nobody replaced the digest since it was verified
            if user.password_digest == verified {
                user.set_password(replacement);
                return Ok(());
            }
            verified = user.password_digest.clone();
        }
    }

    async fn change_details(&self, email: &str, details: ProfileDetails) -> DomainResult<()> {
        let mut users = self.users.write().await;
        let user = users
            .iter_mut()
            .find(|u| u.email == email)
            .ok_or(DomainError::NotFound)?;

        user.apply_details(details);
        Ok(())
    }

    async fn login(&self, email: &str, password: &str) -> DomainResult<UserRecord> {
        let user = self.find_by_email(email).await.ok_or(DomainError::NotFound)?;

        if !user.password().verify(password) {
            return Err(DomainError::WrongPassword);
        }

        Ok(user)
    }

    async fn list_all(&self) -> Vec<UserRecord> {
        self.users.read().await.clone()
    }

    async fn count(&self) -> usize {
        self.users.read().await.len()
    }
}
