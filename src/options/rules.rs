//! Compatibility rules over an option assignment.
//!
//! A rule's predicate describes a *problem*: it returns `true` when the
//! assignment violates the rule.

use std::fmt;

use crate::error::ValidationError;
use crate::options::registry::OptionAssignment;
use crate::options::standard::{DIMENSIONALITY, THERMAL};

/// Predicate signalling a violation.
pub type RulePredicate = fn(&OptionAssignment) -> bool;

/// A described predicate over option assignments.
#[derive(Clone)]
pub struct CompatibilityRule {
    description: String,
    predicate: RulePredicate,
}

impl CompatibilityRule {
    /// Creates a rule.
    #[must_use]
    pub fn new(description: impl Into<String>, predicate: RulePredicate) -> Self {
        Self {
            description: description.into(),
            predicate,
        }
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns true if `assignment` violates this rule.
    #[must_use]
    pub fn is_violated_by(&self, assignment: &OptionAssignment) -> bool {
        (self.predicate)(assignment)
    }
}

impl fmt::Debug for CompatibilityRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompatibilityRule")
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

/// Ordered collection of compatibility rules.
#[derive(Debug, Clone, Default)]
pub struct CompatibilityRuleSet {
    rules: Vec<CompatibilityRule>,
}

impl CompatibilityRuleSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a rule. Rules are evaluated in the order they were added.
    pub fn add_rule(&mut self, description: impl Into<String>, predicate: RulePredicate) {
        let rule = CompatibilityRule::new(description, predicate);
        tracing::debug!(rule = %rule.description(), "registering compatibility rule");
        self.rules.push(rule);
    }

    /// Fails with the first violated rule, in registration order.
    pub fn validate(&self, assignment: &OptionAssignment) -> Result<(), ValidationError> {
        match self.rules.iter().find(|rule| rule.is_violated_by(assignment)) {
            Some(rule) => Err(ValidationError::IncompatibleOptions {
                description: rule.description.clone(),
            }),
            None => Ok(()),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CompatibilityRule> {
        self.rules.iter()
    }
}

/// Description of the thermal/dimensionality rule.
pub const THERMAL_DIMENSIONALITY_RULE: &str =
    "Thermal models only available for dimensionality = 0";

/// Thermal coupling is only supported by 0-dimensional current collectors.
///
/// Does not fire unless both options are present.
#[must_use]
pub fn thermal_requires_zero_dimensionality(assignment: &OptionAssignment) -> bool {
    let (Some(thermal), Some(dimensionality)) =
        (assignment.value(THERMAL), assignment.value(DIMENSIONALITY))
    else {
        return false;
    };
    thermal.as_str() != Some("isothermal") && dimensionality.as_int() != Some(0)
}
