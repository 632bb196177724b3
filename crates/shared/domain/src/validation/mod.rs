//! Field validation rule engine.
//!
//! A form is validated by pairing each of its fields with an ordered
//! [`FieldRules`] chain and running every rule of every chain. Nothing
//! short-circuits: one field can contribute several failures and a failing
//! field never hides the failures of another.

pub mod chains;
mod outcome;
mod rule;
pub mod rules;

pub use outcome::{ValidationFailure, ValidationOutcome};
pub use rule::{FieldRules, Rule, Validator};

/// Inbound forms implement this to declare their field chains.
pub trait Validate {
    /// Run every field chain and collect all failures in field order.
    fn validate(&self) -> ValidationOutcome;
}
