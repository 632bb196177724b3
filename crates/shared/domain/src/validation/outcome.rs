//! Validation result types.

use std::fmt;

use serde::Serialize;

/// A single violated rule for a single field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationFailure {
    /// Wire name of the offending field (e.g. `firstName`)
    pub field: String,
    /// Rendered, human-readable message
    pub message: String,
}

impl ValidationFailure {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Ordered failures produced by validating one form. Empty means valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationOutcome {
    failures: Vec<ValidationFailure>,
}

impl ValidationOutcome {
    /// Create an empty (valid) outcome
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_valid(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn len(&self) -> usize {
        self.failures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn failures(&self) -> &[ValidationFailure] {
        &self.failures
    }

    /// Failures reported for one field, in rule order
    pub fn for_field<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a ValidationFailure> {
        self.failures.iter().filter(move |f| f.field == field)
    }

    /// Rendered messages in report order
    pub fn messages(&self) -> Vec<&str> {
        self.failures.iter().map(|f| f.message.as_str()).collect()
    }

    /// `Ok(())` when valid, otherwise the outcome itself as the error
    pub fn into_result(self) -> Result<(), ValidationOutcome> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl FromIterator<ValidationFailure> for ValidationOutcome {
    fn from_iter<I: IntoIterator<Item = ValidationFailure>>(iter: I) -> Self {
        Self {
            failures: iter.into_iter().collect(),
        }
    }
}

/// Space-joined rendered messages, as surfaced to callers.
impl fmt::Display for ValidationOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.messages().join(" "))
    }
}
