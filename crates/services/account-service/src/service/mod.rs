//! Account use cases.

pub mod account_service;

pub use account_service::{AccountManager, AccountService};
