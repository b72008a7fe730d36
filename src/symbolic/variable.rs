//! Symbolic unknowns and the domains they live on.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identity of a symbolic unknown.
///
/// Equations are keyed by identity, never by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VariableId(Uuid);

impl VariableId {
    /// Creates a new random variable ID.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for VariableId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for VariableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Spatial domain a variable is defined over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Domain {
    #[serde(rename = "current collector")]
    CurrentCollector,
    #[serde(rename = "negative electrode")]
    NegativeElectrode,
    #[serde(rename = "separator")]
    Separator,
    #[serde(rename = "positive electrode")]
    PositiveElectrode,
}

impl Domain {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::CurrentCollector => "current collector",
            Self::NegativeElectrode => "negative electrode",
            Self::Separator => "separator",
            Self::PositiveElectrode => "positive electrode",
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named symbolic unknown.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Variable {
    pub id: VariableId,
    pub name: String,
    pub domain: Domain,
}

impl Variable {
    /// Creates a fresh unknown with a new identity.
    #[must_use]
    pub fn new(name: impl Into<String>, domain: Domain) -> Self {
        Self {
            id: VariableId::new(),
            name: name.into(),
            domain,
        }
    }
}
