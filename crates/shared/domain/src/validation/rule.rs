//! Rule, per-field chain and form-level evaluator.

use std::fmt;

use super::outcome::{ValidationFailure, ValidationOutcome};
use crate::constants::{MAX_LENGTH_PLACEHOLDER, MIN_LENGTH_PLACEHOLDER, PROPERTY_NAME_PLACEHOLDER};

type Predicate = Box<dyn Fn(&str) -> bool + Send + Sync>;

/// Numeric bound substituted into a rule's message template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Bound {
    Min(usize),
    Max(usize),
}

/// A named predicate over a field value plus the message reported when it fails.
pub struct Rule {
    name: &'static str,
    template: &'static str,
    bound: Option<Bound>,
    check: Predicate,
}

impl Rule {
    /// Create a rule. `check` returns `true` when the value is acceptable.
    pub fn new<F>(name: &'static str, template: &'static str, check: F) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        Self {
            name,
            template,
            bound: None,
            check: Box::new(check),
        }
    }

    /// Attach the value substituted for `{MinLength}`
    pub fn with_min(mut self, min: usize) -> Self {
        self.bound = Some(Bound::Min(min));
        self
    }

    /// Attach the value substituted for `{MaxLength}`
    pub fn with_max(mut self, max: usize) -> Self {
        self.bound = Some(Bound::Max(max));
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn passes(&self, value: &str) -> bool {
        (self.check)(value)
    }

    /// Render the message template for a field display name.
    pub fn render(&self, display_name: &str) -> String {
        let message = self.template.replace(PROPERTY_NAME_PLACEHOLDER, display_name);
        match self.bound {
            Some(Bound::Min(min)) => message.replace(MIN_LENGTH_PLACEHOLDER, &min.to_string()),
            Some(Bound::Max(max)) => message.replace(MAX_LENGTH_PLACEHOLDER, &max.to_string()),
            None => message,
        }
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("bound", &self.bound)
            .finish()
    }
}

/// Ordered rule chain for one field.
#[derive(Debug)]
pub struct FieldRules {
    field: &'static str,
    display_name: &'static str,
    rules: Vec<Rule>,
}

impl FieldRules {
    /// `field` is the wire name, `display_name` is what messages show.
    pub fn new(field: &'static str, display_name: &'static str) -> Self {
        Self {
            field,
            display_name,
            rules: Vec::new(),
        }
    }

    /// Append a rule to the end of the chain
    pub fn rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Rule names in evaluation order
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(Rule::name).collect()
    }

    /// Evaluate every rule against `value`, one failure per violated rule.
    pub fn evaluate(&self, value: &str) -> Vec<ValidationFailure> {
        self.rules
            .iter()
            .filter(|rule| !rule.passes(value))
            .map(|rule| ValidationFailure::new(self.field, rule.render(self.display_name)))
            .collect()
    }
}

/// Pairs field chains with the values of one form.
#[derive(Debug, Default)]
pub struct Validator<'a> {
    checks: Vec<(FieldRules, &'a str)>,
}

impl<'a> Validator<'a> {
    pub fn new() -> Self {
        Self { checks: Vec::new() }
    }

    /// Register a field; fields are reported in registration order.
    pub fn field(mut self, rules: FieldRules, value: &'a str) -> Self {
        self.checks.push((rules, value));
        self
    }

    /// Register an optional field. An absent value is checked as empty.
    pub fn optional(self, rules: FieldRules, value: Option<&'a str>) -> Self {
        self.field(rules, value.unwrap_or_default())
    }

    pub fn validate(&self) -> ValidationOutcome {
        self.checks
            .iter()
            .flat_map(|(rules, value)| rules.evaluate(value))
            .collect()
    }
}
