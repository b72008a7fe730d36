//! A single named option and its allowed-value domain.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::value::OptionValue;

/// A named option with a default and a closed set of allowed values.
///
/// The default is always a member of the allowed set; construction fails
/// otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelOption {
    name: String,
    default: OptionValue,
    allowed_values: Vec<OptionValue>,
}

impl ModelOption {
    /// Creates a validated option.
    pub fn new(
        name: impl Into<String>,
        default: impl Into<OptionValue>,
        allowed_values: Vec<OptionValue>,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        let default = default.into();
        if !allowed_values.contains(&default) {
            return Err(ValidationError::InvalidOptionDefault {
                name,
                value: default.to_string(),
            });
        }
        Ok(Self {
            name,
            default,
            allowed_values,
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn default_value(&self) -> &OptionValue {
        &self.default
    }

    #[must_use]
    pub fn allowed_values(&self) -> &[OptionValue] {
        &self.allowed_values
    }

    /// Returns true if `value` is in this option's domain.
    #[must_use]
    pub fn allows(&self, value: &OptionValue) -> bool {
        self.allowed_values.contains(value)
    }

    /// Checks `value` against the domain.
    pub fn check(&self, value: &OptionValue) -> Result<(), ValidationError> {
        if self.allows(value) {
            return Ok(());
        }
        Err(ValidationError::InvalidOptionValue {
            name: self.name.clone(),
            value: value.to_string(),
            allowed: self.describe_domain(),
        })
    }

    fn describe_domain(&self) -> String {
        let items: Vec<String> = self.allowed_values.iter().map(ToString::to_string).collect();
        format!("[{}]", items.join(", "))
    }
}
