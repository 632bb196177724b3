//! Account Service Library
//!
//! This crate provides account management over an in-memory store:
//! registration, login, password and profile changes.

pub mod config;
pub mod repository;
pub mod service;

use std::sync::Arc;

use tracing::info;

use crate::config::{AccountServiceConfig, SeedMode};
use crate::repository::{AccountRepository, DemoSeed, EmptySeed, InMemoryAccountStore, UserSeed};
use crate::service::{AccountManager, AccountService};

/// Build the store for a seed mode.
pub fn build_store(seed: SeedMode) -> Arc<InMemoryAccountStore> {
    let source: &dyn UserSeed = match seed {
        SeedMode::Demo => &DemoSeed,
        SeedMode::Empty => &EmptySeed,
    };
    Arc::new(InMemoryAccountStore::from_seed(source))
}

/// Wire store and service together from configuration.
pub async fn build_service(config: &AccountServiceConfig) -> Arc<dyn AccountService> {
    let store = build_store(config.seed);
    info!(seed = ?config.seed, accounts = store.count().await, "Account store initialized");

    let repo: Arc<dyn AccountRepository> = store;
    Arc::new(AccountManager::new(repo))
}
