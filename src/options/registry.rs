//! Option registry and the frozen assignment it produces.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::options::option::ModelOption;
use crate::value::OptionValue;

#[derive(Debug, Clone)]
struct Entry {
    option: ModelOption,
    value: OptionValue,
}

/// Mutable set of registered options and their current values.
///
/// Iteration follows registration order.
#[derive(Debug, Clone, Default)]
pub struct OptionRegistry {
    entries: Vec<Entry>,
    index: HashMap<String, usize>,
}

impl OptionRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an option, selecting its default value.
    pub fn register(&mut self, option: ModelOption) -> Result<(), ValidationError> {
        if self.index.contains_key(option.name()) {
            return Err(ValidationError::DuplicateOption {
                name: option.name().to_string(),
            });
        }
        self.index.insert(option.name().to_string(), self.entries.len());
        let value = option.default_value().clone();
        self.entries.push(Entry { option, value });
        Ok(())
    }

    fn entry(&self, name: &str) -> Result<&Entry, ValidationError> {
        self.index
            .get(name)
            .map(|&i| &self.entries[i])
            .ok_or_else(|| ValidationError::UnknownOption {
                name: name.to_string(),
            })
    }

    /// Returns the current value of `name`.
    pub fn get(&self, name: &str) -> Result<&OptionValue, ValidationError> {
        self.entry(name).map(|e| &e.value)
    }

    /// Returns the option definition registered under `name`.
    pub fn option(&self, name: &str) -> Result<&ModelOption, ValidationError> {
        self.entry(name).map(|e| &e.option)
    }

    /// Selects a new value for `name`.
    pub fn set(&mut self, name: &str, value: impl Into<OptionValue>) -> Result<(), ValidationError> {
        let value = value.into();
        let i = *self.index.get(name).ok_or_else(|| ValidationError::UnknownOption {
            name: name.to_string(),
        })?;
        let entry = &mut self.entries[i];
        entry.option.check(&value)?;
        entry.value = value;
        Ok(())
    }

    /// Applies every override in turn. Stops at the first rejected one.
    pub fn apply_overrides<'a, I>(&mut self, overrides: I) -> Result<(), ValidationError>
    where
        I: IntoIterator<Item = (&'a String, &'a OptionValue)>,
    {
        for (name, value) in overrides {
            tracing::debug!(option = %name, %value, "overriding option");
            self.set(name, value.clone())?;
        }
        Ok(())
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(name, value)` pairs in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &OptionValue)> {
        self.entries.iter().map(|e| (e.option.name(), &e.value))
    }

    /// Freezes the current selection into an assignment.
    #[must_use]
    pub fn assignment(&self) -> OptionAssignment {
        OptionAssignment {
            values: self
                .iter()
                .map(|(name, value)| (name.to_string(), value.clone()))
                .collect(),
        }
    }
}

/// Immutable snapshot of the selected value of every registered option.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OptionAssignment {
    values: BTreeMap<String, OptionValue>,
}

impl OptionAssignment {
    /// Returns the value of `name`, if the option exists.
    #[must_use]
    pub fn value(&self, name: &str) -> Option<&OptionValue> {
        self.values.get(name)
    }

    /// Returns the value of `name` or fails if it was never registered.
    pub fn get(&self, name: &str) -> Result<&OptionValue, ValidationError> {
        self.value(name).ok_or_else(|| ValidationError::UnknownOption {
            name: name.to_string(),
        })
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &OptionValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for OptionAssignment
where
    K: Into<String>,
    V: Into<OptionValue>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
