//! Error types for leadacid.
//!
//! All errors are strongly typed using thiserror so callers can match on
//! the specific failure. Configuration errors are raised before any
//! reaction network or equation is derived; assembly errors are raised
//! before the equation system is mutated.

use thiserror::Error;

/// Errors raised while building or validating the option set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Unknown option '{name}'")]
    UnknownOption {
        name: String,
    },

    #[error("Option '{name}' does not accept {value}; allowed values are {allowed}")]
    InvalidOptionValue {
        name: String,
        value: String,
        allowed: String,
    },

    #[error("Option '{name}' is already registered")]
    DuplicateOption {
        name: String,
    },

    #[error("Default {value} of option '{name}' is not one of its allowed values")]
    InvalidOptionDefault {
        name: String,
        value: String,
    },

    #[error("Incompatible options: {description}")]
    IncompatibleOptions {
        description: String,
    },

    #[error("Unsupported dimensionality {dimensionality}; expected 0, 1 or 2")]
    UnsupportedDimensionality {
        dimensionality: i64,
    },
}

/// Errors raised while deriving reactions, variables and equations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssemblyError {
    #[error("Required variable '{name}' is not defined in the model")]
    MissingVariable {
        name: String,
    },

    #[error("No value bound for parameter '{name}'")]
    UnboundParameter {
        name: String,
    },

    #[error("No value bound for variable '{name}'")]
    UnboundVariable {
        name: String,
    },
}

/// Top-level error type for leadacid.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Assembly error: {0}")]
    Assembly(#[from] AssemblyError),

    #[error("Configuration error: {message}")]
    Config {
        message: String,
    },

    #[error("Internal error: {message}")]
    Internal {
        message: String,
    },
}

impl ModelError {
    /// Creates a configuration document error.
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Returns true if this is a validation error.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Returns true if this is an assembly error.
    #[must_use]
    pub const fn is_assembly(&self) -> bool {
        matches!(self, Self::Assembly(_))
    }

    /// Returns true if this is a configuration document error.
    #[must_use]
    pub const fn is_config(&self) -> bool {
        matches!(self, Self::Config { .. })
    }

    /// Returns true if this is an internal error.
    #[must_use]
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal { .. })
    }
}

/// Result type alias for leadacid operations.
pub type ModelResult<T> = Result<T, ModelError>;
