//! Standard lead-acid model options.
//!
//! One constructor per option. Every constructor returns an option whose
//! default lies in its domain, so construction cannot fail at runtime.

use crate::error::ValidationError;
use crate::options::option::ModelOption;
use crate::value::OptionValue;

pub const OPERATING_MODE: &str = "operating mode";
pub const DIMENSIONALITY: &str = "dimensionality";
pub const SURFACE_FORM: &str = "surface form";
pub const SIDE_REACTIONS: &str = "side reactions";
pub const CONVECTION: &str = "convection";
pub const CURRENT_COLLECTOR: &str = "current collector";
pub const THERMAL: &str = "thermal";
pub const EXTERNAL_SUBMODELS: &str = "external submodels";

/// Name of the oxygen side reaction as it appears in `side reactions`.
pub const OXYGEN: &str = "oxygen";

pub fn operating_mode() -> Result<ModelOption, ValidationError> {
    ModelOption::new(
        OPERATING_MODE,
        "current",
        vec!["current".into(), "voltage".into(), "power".into()],
    )
}

pub fn dimensionality() -> Result<ModelOption, ValidationError> {
    ModelOption::new(DIMENSIONALITY, 0, vec![0.into(), 1.into(), 2.into()])
}

pub fn surface_form() -> Result<ModelOption, ValidationError> {
    ModelOption::new(
        SURFACE_FORM,
        false,
        vec![false.into(), "differential".into(), "algebraic".into()],
    )
}

pub fn side_reactions() -> Result<ModelOption, ValidationError> {
    ModelOption::new(
        SIDE_REACTIONS,
        OptionValue::empty_list(),
        vec![OptionValue::empty_list(), OptionValue::list([OXYGEN])],
    )
}

pub fn convection() -> Result<ModelOption, ValidationError> {
    ModelOption::new(CONVECTION, false, vec![false.into(), true.into()])
}

/// Lead-acid current-collector treatment.
pub fn current_collector() -> Result<ModelOption, ValidationError> {
    ModelOption::new(
        CURRENT_COLLECTOR,
        "uniform",
        vec![
            "uniform".into(),
            "potential pair".into(),
            "potential pair quite conductive".into(),
        ],
    )
}

pub fn thermal() -> Result<ModelOption, ValidationError> {
    ModelOption::new(
        THERMAL,
        "isothermal",
        vec!["isothermal".into(), "x-full".into(), "x-lumped".into()],
    )
}

pub fn external_submodels() -> Result<ModelOption, ValidationError> {
    ModelOption::new(
        EXTERNAL_SUBMODELS,
        OptionValue::empty_list(),
        vec![OptionValue::empty_list(), OptionValue::list(["thermal"])],
    )
}

/// The full lead-acid option set, in registration order.
pub fn lead_acid_options() -> Result<Vec<ModelOption>, ValidationError> {
    Ok(vec![
        operating_mode()?,
        dimensionality()?,
        surface_form()?,
        side_reactions()?,
        convection()?,
        current_collector()?,
        thermal()?,
        external_submodels()?,
    ])
}
