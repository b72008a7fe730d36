//! Values that model options can take.
//!
//! Option domains mix booleans (`convection`), integers
//! (`dimensionality`), strings (`thermal`) and lists of names
//! (`side reactions`). Values serialize untagged so override documents
//! read as plain JSON.

use serde::{Deserialize, Serialize};

/// A single option value.
///
/// # Examples
///
/// ```
/// use leadacid::OptionValue;
///
/// let thermal = OptionValue::from("x-lumped");
/// let dim = OptionValue::from(1);
/// let side = OptionValue::list(["oxygen"]);
///
/// assert_eq!(thermal.as_str(), Some("x-lumped"));
/// assert_eq!(dim.as_int(), Some(1));
/// assert!(side.contains("oxygen"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    Bool(bool),
    Int(i64),
    Str(String),
    List(Vec<String>),
}

impl OptionValue {
    /// Builds a list value from any iterable of names.
    pub fn list<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::List(items.into_iter().map(Into::into).collect())
    }

    /// An empty list value.
    #[must_use]
    pub const fn empty_list() -> Self {
        Self::List(Vec::new())
    }

    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(v) => Some(*v),
            _ => None,
        }
    }

    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Self::List(v) => Some(v),
            _ => None,
        }
    }

    /// Returns true if this is a list value containing `member`.
    ///
    /// Non-list values never contain anything.
    #[must_use]
    pub fn contains(&self, member: &str) -> bool {
        self.as_list()
            .is_some_and(|items| items.iter().any(|item| item == member))
    }

    /// Returns a human-readable type name.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Str(_) => "string",
            Self::List(_) => "list",
        }
    }
}

impl std::fmt::Display for OptionValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bool(v) => write!(f, "{v}"),
            Self::Int(v) => write!(f, "{v}"),
            Self::Str(v) => write!(f, "{v:?}"),
            Self::List(v) => write!(f, "{v:?}"),
        }
    }
}

impl From<bool> for OptionValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i32> for OptionValue {
    fn from(v: i32) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<i64> for OptionValue {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<String> for OptionValue {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl From<&str> for OptionValue {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl From<Vec<String>> for OptionValue {
    fn from(v: Vec<String>) -> Self {
        Self::List(v)
    }
}
