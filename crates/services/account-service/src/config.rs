//! Account service configuration.

use std::env;
use std::str::FromStr;

/// Which initial population the in-memory store starts with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SeedMode {
    /// The six demo accounts
    #[default]
    Demo,
    /// No accounts
    Empty,
}

impl FromStr for SeedMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "demo" => Ok(SeedMode::Demo),
            "empty" | "none" => Ok(SeedMode::Empty),
            other => Err(format!("Unknown seed mode '{}', expected 'demo' or 'empty'", other)),
        }
    }
}

/// Account service configuration.
#[derive(Debug, Clone, Default)]
pub struct AccountServiceConfig {
    /// Initial store population
    pub seed: SeedMode,
}

impl AccountServiceConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let seed = match env::var("ACCOUNT_SEED") {
            Ok(value) => value.parse().unwrap_or_else(|e: String| {
                tracing::warn!("{}; using demo accounts", e);
                SeedMode::Demo
            }),
            Err(_) => SeedMode::Demo,
        };

        Self { seed }
    }
}
