//! Model configuration documents.
//!
//! A configuration names the model and overrides option defaults:
//!
//! ```json
//! {
//!   "name": "oxygen cell",
//!   "options": { "side reactions": ["oxygen"], "thermal": "x-lumped" }
//! }
//! ```
//!
//! Decoding only checks shape. Option names and values are validated by
//! the option registry when the model is configured.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;
use crate::value::OptionValue;

/// Default name given to unnamed models.
pub const DEFAULT_MODEL_NAME: &str = "Unnamed lead-acid model";

fn default_name() -> String {
    DEFAULT_MODEL_NAME.to_string()
}

/// Name and option overrides for one model build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelConfig {
    #[serde(default = "default_name")]
    pub name: String,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub options: BTreeMap<String, OptionValue>,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            options: BTreeMap::new(),
        }
    }
}

impl ModelConfig {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            options: BTreeMap::new(),
        }
    }

    /// Adds an option override.
    #[must_use]
    pub fn with_option(mut self, name: impl Into<String>, value: impl Into<OptionValue>) -> Self {
        self.options.insert(name.into(), value.into());
        self
    }

    /// Decodes a configuration from JSON.
    pub fn from_json(s: &str) -> Result<Self, ModelError> {
        serde_json::from_str(s).map_err(|e| ModelError::config(format!("decode config: {e}")))
    }

    /// Reads and decodes a JSON configuration file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ModelError> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "loading model config");
        let text = std::fs::read_to_string(path)
            .map_err(|e| ModelError::config(format!("read {}: {e}", path.display())))?;
        Self::from_json(&text)
    }

    /// Encodes this configuration as pretty JSON.
    pub fn to_json_pretty(&self) -> Result<String, ModelError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ModelError::internal(format!("encode config: {e}")))
    }
}
