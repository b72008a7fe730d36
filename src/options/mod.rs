//! Model options.
//!
//! Storage of option values (`OptionRegistry`) is kept apart from the
//! rules that judge combinations of them (`CompatibilityRuleSet`).

mod option;
mod registry;
mod rules;
pub mod standard;

pub use option::ModelOption;
pub use registry::{OptionAssignment, OptionRegistry};
pub use rules::{
    thermal_requires_zero_dimensionality, CompatibilityRule, CompatibilityRuleSet, RulePredicate,
    THERMAL_DIMENSIONALITY_RULE,
};
