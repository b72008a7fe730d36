//! Lead-acid model configurator.
//!
//! Owns the option registry, its compatibility rules, the reaction
//! network and the symbolic equation system of one model build. Options
//! are resolved and validated when the configurator is created, before
//! any reaction or equation is derived; afterwards they are frozen.
//!
//! # Example
//! ```rust,ignore
//! let config = ModelConfig::new("cell").with_option("side reactions", vec!["oxygen".to_string()]);
//! let mut model = ModelConfigurator::new(&config)?;
//! model.set_reactions();
//! let geometry = model.default_geometry()?;
//! ```

use std::collections::BTreeMap;

use tracing::{debug, info};

use crate::config::ModelConfig;
use crate::error::{AssemblyError, ModelResult, ValidationError};
use crate::expr::Expr;
use crate::geometry::{self, Geometry, SpatialVariable};
use crate::options::standard::{self, DIMENSIONALITY};
use crate::options::{
    thermal_requires_zero_dimensionality, CompatibilityRuleSet, OptionAssignment, OptionRegistry,
    THERMAL_DIMENSIONALITY_RULE,
};
use crate::parameters::{Chemistry, LeadAcidParameters, ParameterValues};
use crate::reactions::{ReactionNetwork, ReactionNetworkBuilder};
use crate::soc::StateVariableDeriver;
use crate::solver::{self, Solver, SolverRegistry};
use crate::symbolic::EquationSystem;

pub const TIME: &str = "Time";
pub const TIME_SECONDS: &str = "Time [s]";
pub const TIME_HOURS: &str = "Time [h]";

/// Configures and assembles one lead-acid model.
#[derive(Debug, Clone)]
pub struct ModelConfigurator {
    name: String,
    registry: OptionRegistry,
    rules: CompatibilityRuleSet,
    options: OptionAssignment,
    param: LeadAcidParameters,
    timescale: Expr,
    equations: EquationSystem,
    reactions: ReactionNetwork,
}

impl ModelConfigurator {
    /// Resolves and validates the options of `config` and resets the
    /// model state.
    pub fn new(config: &ModelConfig) -> ModelResult<Self> {
        let (mut registry, rules) = Self::reset_options()?;
        registry.apply_overrides(&config.options)?;
        let options = registry.assignment();
        rules.validate(&options)?;

        let param = LeadAcidParameters::standard();
        let mut model = Self {
            name: config.name.clone(),
            registry,
            rules,
            options,
            timescale: param.tau_discharge.clone(),
            param,
            equations: EquationSystem::new(),
            reactions: ReactionNetwork::default(),
        };
        model.reset_model();
        info!(model = %model.name, options = model.options.len(), "configured lead-acid model");
        Ok(model)
    }

    /// A model with every option at its default.
    pub fn standard() -> ModelResult<Self> {
        Self::new(&ModelConfig::default())
    }

    /// Builds the lead-acid option registry and its compatibility rules.
    pub fn reset_options() -> Result<(OptionRegistry, CompatibilityRuleSet), ValidationError> {
        let mut registry = OptionRegistry::new();
        for option in standard::lead_acid_options()? {
            registry.register(option)?;
        }

        let mut rules = CompatibilityRuleSet::new();
        rules.add_rule(THERMAL_DIMENSIONALITY_RULE, thermal_requires_zero_dimensionality);
        Ok((registry, rules))
    }

    /// Resets parameters, timescale and equations to the lead-acid
    /// defaults. Options are left untouched.
    pub fn reset_model(&mut self) {
        self.param = LeadAcidParameters::standard();
        self.timescale = self.param.tau_discharge.clone();
        self.equations = EquationSystem::new();
        self.reactions = ReactionNetwork::default();
        self.set_standard_output_variables();
        debug!(model = %self.name, "reset model state");
    }

    fn set_standard_output_variables(&mut self) {
        let time_s = Expr::Time * self.timescale.clone();
        self.equations.insert_variable(TIME, Expr::Time);
        self.equations.insert_variable(TIME_HOURS, time_s.clone() / 3600.0);
        self.equations.insert_variable(TIME_SECONDS, time_s);
    }

    /// Derives the reaction network from the resolved options.
    pub fn set_reactions(&mut self) -> &ReactionNetwork {
        self.reactions = ReactionNetworkBuilder::new(&self.param).build(&self.options);
        &self.reactions
    }

    /// Derives the state-of-charge variables into the equation system.
    pub fn set_soc_variables(&mut self) -> Result<(), AssemblyError> {
        StateVariableDeriver::new(&self.param).derive(&mut self.equations)
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Resolved, validated options.
    #[must_use]
    pub fn options(&self) -> &OptionAssignment {
        &self.options
    }

    #[must_use]
    pub fn registry(&self) -> &OptionRegistry {
        &self.registry
    }

    #[must_use]
    pub fn rules(&self) -> &CompatibilityRuleSet {
        &self.rules
    }

    #[must_use]
    pub fn param(&self) -> &LeadAcidParameters {
        &self.param
    }

    /// Characteristic timescale (the discharge timescale).
    #[must_use]
    pub fn timescale(&self) -> &Expr {
        &self.timescale
    }

    #[must_use]
    pub fn reactions(&self) -> &ReactionNetwork {
        &self.reactions
    }

    #[must_use]
    pub fn equations(&self) -> &EquationSystem {
        &self.equations
    }

    /// Mutable access for submodels populating the equation system.
    pub fn equations_mut(&mut self) -> &mut EquationSystem {
        &mut self.equations
    }

    /// Default lead-acid parameter values.
    #[must_use]
    pub fn default_parameter_values(&self) -> ParameterValues {
        ParameterValues::for_chemistry(Chemistry::Sulzer2019)
    }

    /// Geometry matching the configured dimensionality.
    pub fn default_geometry(&self) -> Result<Geometry, ValidationError> {
        let value = self.options.get(DIMENSIONALITY)?;
        let dimensionality = value.as_int().ok_or_else(|| ValidationError::InvalidOptionValue {
            name: DIMENSIONALITY.to_string(),
            value: value.to_string(),
            allowed: "an integer".to_string(),
        })?;
        Geometry::for_dimensionality(dimensionality)
    }

    #[must_use]
    pub fn default_var_pts(&self) -> BTreeMap<SpatialVariable, usize> {
        geometry::default_var_pts()
    }

    /// Default solver for the equations assembled so far.
    #[must_use]
    pub fn default_solver(&self, registry: &SolverRegistry) -> Solver {
        solver::default_solver(&self.equations, registry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::Scope;
    use crate::geometry::GeometryKind;
    use crate::options::standard::{CURRENT_COLLECTOR, SIDE_REACTIONS, THERMAL};
    use crate::reactions::ReactionKind;
    use crate::solver::SolverFamily;
    use crate::symbolic::{Domain, Variable};
    use crate::value::OptionValue;
    use crate::ModelError;

    #[test]
    fn test_standard_model_defaults() {
        let model = ModelConfigurator::standard().unwrap();
        assert_eq!(model.name(), "Unnamed lead-acid model");
        assert_eq!(model.options().len(), 8);
        assert_eq!(model.options().get(THERMAL).unwrap(), &OptionValue::from("isothermal"));
        assert_eq!(
            model.options().get(CURRENT_COLLECTOR).unwrap(),
            &OptionValue::from("uniform")
        );
        assert_eq!(model.rules().len(), 1);
    }

    #[test]
    fn test_overrides_are_merged() {
        let config = ModelConfig::new("cell")
            .with_option(DIMENSIONALITY, 1)
            .with_option(CURRENT_COLLECTOR, "potential pair");
        let model = ModelConfigurator::new(&config).unwrap();
        assert_eq!(model.options().get(DIMENSIONALITY).unwrap(), &OptionValue::Int(1));
        assert_eq!(
            model.options().get(CURRENT_COLLECTOR).unwrap(),
            &OptionValue::from("potential pair")
        );
        assert_eq!(model.options().get(THERMAL).unwrap(), &OptionValue::from("isothermal"));
    }

    #[test]
    fn test_unknown_override_rejected() {
        let config = ModelConfig::default().with_option("hydraulics", true);
        let err = ModelConfigurator::new(&config).unwrap_err();
        assert!(matches!(
            err,
            ModelError::Validation(ValidationError::UnknownOption { .. })
        ));
    }

    #[test]
    fn test_incompatible_thermal_rejected() {
        let config = ModelConfig::default()
            .with_option(THERMAL, "x-lumped")
            .with_option(DIMENSIONALITY, 1);
        let err = ModelConfigurator::new(&config).unwrap_err();
        match err {
            ModelError::Validation(ValidationError::IncompatibleOptions { description }) => {
                assert_eq!(description, THERMAL_DIMENSIONALITY_RULE);
            }
            other => panic!("expected IncompatibleOptions, got {other:?}"),
        }
    }

    #[test]
    fn test_thermal_allowed_at_zero_dimensions() {
        let config = ModelConfig::default().with_option(THERMAL, "x-full");
        assert!(ModelConfigurator::new(&config).is_ok());
    }

    #[test]
    fn test_default_geometry_follows_dimensionality() {
        for (dim, kind) in [
            (0, GeometryKind::OneDMacro),
            (1, GeometryKind::OnePlusOneDMacro),
            (2, GeometryKind::TwoPlusOneDMacro),
        ] {
            let model =
                ModelConfigurator::new(&ModelConfig::default().with_option(DIMENSIONALITY, dim))
                    .unwrap();
            assert_eq!(model.default_geometry().unwrap().kind, kind);
        }
    }

    #[test]
    fn test_standard_output_variables() {
        let model = ModelConfigurator::standard().unwrap();
        let values = model.default_parameter_values();
        let scope = Scope::new().with_parameters(&values).at_time(1.0);

        let tau = values.evaluate(model.timescale()).unwrap();
        let t_s = model.equations().variable(TIME_SECONDS).unwrap().evaluate(&scope).unwrap();
        let t_h = model.equations().variable(TIME_HOURS).unwrap().evaluate(&scope).unwrap();
        assert!((t_s - tau).abs() < 1e-9 * tau);
        assert!((t_h - tau / 3600.0).abs() < 1e-9 * tau);
        assert_eq!(model.equations().variable(TIME), Some(&Expr::Time));
    }

    #[test]
    fn test_set_reactions_uses_options() {
        let mut model = ModelConfigurator::new(
            &ModelConfig::default().with_option(SIDE_REACTIONS, OptionValue::list(["oxygen"])),
        )
        .unwrap();
        assert!(model.reactions().is_empty());
        let network = model.set_reactions();
        assert!(network.contains(ReactionKind::Oxygen));
        assert_eq!(model.reactions().len(), 2);
    }

    #[test]
    fn test_reset_model_clears_equations() {
        let mut model = ModelConfigurator::standard().unwrap();
        model.set_reactions();
        let var = Variable::new("Electrolyte potential", Domain::Separator);
        model.equations_mut().set_algebraic(var.id, Expr::zero());

        model.reset_model();
        assert!(model.equations().is_purely_differential());
        assert!(model.reactions().is_empty());
        assert!(model.equations().contains_variable(TIME));
    }

    #[test]
    fn test_default_solver_tracks_algebraic_equations() {
        let mut model = ModelConfigurator::standard().unwrap();
        let registry = SolverRegistry::new();
        assert_eq!(model.default_solver(&registry).family, SolverFamily::Scipy);

        let var = Variable::new("Electrolyte potential", Domain::Separator);
        model.equations_mut().set_algebraic(var.id, Expr::zero());
        assert_eq!(model.default_solver(&registry).family, SolverFamily::ScikitsDae);
        assert_eq!(
            model
                .default_solver(&registry.without(SolverFamily::ScikitsDae))
                .family,
            SolverFamily::Casadi
        );
    }

    #[test]
    fn test_default_var_pts() {
        let model = ModelConfigurator::standard().unwrap();
        let pts = model.default_var_pts();
        assert_eq!(pts.len(), 5);
        assert_eq!(pts[&SpatialVariable::XS], 41);
    }
}
