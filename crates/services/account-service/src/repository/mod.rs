//! Account storage and its seed collaborators.

pub mod account_repository;
pub mod seed;

pub use account_repository::{AccountRepository, InMemoryAccountStore};
#[cfg(any(test, feature = "test-utils"))]
pub use account_repository::MockAccountRepository;
pub use seed::{DemoSeed, EmptySeed, FixtureSeed, UserSeed};
