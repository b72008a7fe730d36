//! # leadacid - Lead-acid model configuration and equation assembly
//!
//! leadacid selects which physical effects a lead-acid battery model
//! includes, checks that the selection is consistent, and assembles the
//! reaction network and state-of-charge equations that parameterize the
//! downstream symbolic solve.
//!
//! ## Core Concepts
//!
//! - **OptionRegistry**: named options with closed value domains
//! - **CompatibilityRuleSet**: predicates flagging invalid option combinations
//! - **ReactionNetwork**: active reactions with per-electrode stoichiometry
//! - **StateVariableDeriver**: state of charge, depth of discharge and
//!   fractional charge input
//! - **ModelConfigurator**: orchestrates the above and exposes defaults
//!   (parameters, geometry, grid, solver)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use leadacid::{ModelConfig, ModelConfigurator, OptionValue, SolverRegistry};
//!
//! let config = ModelConfig::new("oxygen cell")
//!     .with_option("side reactions", OptionValue::list(["oxygen"]));
//! let mut model = ModelConfigurator::new(&config)?;
//! let reactions = model.set_reactions();
//! assert_eq!(reactions.names(), vec!["main", "oxygen"]);
//!
//! let geometry = model.default_geometry()?;
//! let solver = model.default_solver(&SolverRegistry::new());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod expr;
pub mod geometry;
pub mod model;
pub mod options;
pub mod parameters;
pub mod reactions;
pub mod soc;
pub mod solver;
pub mod symbolic;
pub mod value;

// Re-export primary types at crate root for convenience
pub use config::ModelConfig;
pub use error::{AssemblyError, ModelError, ModelResult, ValidationError};
pub use expr::{BinaryOp, Expr, Scope};
pub use geometry::{Geometry, GeometryKind, SpatialVariable};
pub use model::ModelConfigurator;
pub use options::{
    CompatibilityRule, CompatibilityRuleSet, ModelOption, OptionAssignment, OptionRegistry,
};
pub use parameters::{Chemistry, LeadAcidParameters, ParameterValues};
pub use reactions::{
    Electrode, ElectrodeReaction, ReactionEntry, ReactionKind, ReactionNetwork,
    ReactionNetworkBuilder,
};
pub use soc::StateVariableDeriver;
pub use solver::{CasadiMode, Solver, SolverAvailability, SolverFamily, SolverRegistry};
pub use symbolic::{Domain, EquationSystem, Variable, VariableId};
pub use value::OptionValue;
