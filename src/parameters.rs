//! Lead-acid parameters.
//!
//! [`LeadAcidParameters`] holds the dimensionless groups used by the
//! model as symbolic expressions over named dimensional parameters.
//! [`ParameterValues`] supplies numbers for those names.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::AssemblyError;
use crate::expr::{Expr, Scope};

pub const FARADAY_CONSTANT: &str = "Faraday constant [C.mol-1]";
pub const TYPICAL_ELECTROLYTE_CONCENTRATION: &str = "Typical electrolyte concentration [mol.m-3]";
pub const NEGATIVE_ELECTRODE_THICKNESS: &str = "Negative electrode thickness [m]";
pub const SEPARATOR_THICKNESS: &str = "Separator thickness [m]";
pub const POSITIVE_ELECTRODE_THICKNESS: &str = "Positive electrode thickness [m]";
pub const ELECTRODE_HEIGHT: &str = "Electrode height [m]";
pub const ELECTRODE_WIDTH: &str = "Electrode width [m]";
pub const ELECTRODES_IN_PARALLEL: &str =
    "Number of electrodes connected in parallel to make a cell";
pub const TYPICAL_CURRENT: &str = "Typical current [A]";
pub const CATION_TRANSFERENCE_NUMBER: &str = "Cation transference number";
pub const NEGATIVE_CATION_STOICHIOMETRY: &str = "Negative electrode cation signed stoichiometry";
pub const NEGATIVE_ELECTRONS: &str = "Negative electrode electrons in reaction";
pub const POSITIVE_CATION_STOICHIOMETRY: &str = "Positive electrode cation signed stoichiometry";
pub const POSITIVE_ELECTRONS: &str = "Positive electrode electrons in reaction";
pub const OXYGEN_CATION_STOICHIOMETRY: &str = "Signed stoichiometry of cations (oxygen reaction)";
pub const OXYGEN_WATER_STOICHIOMETRY: &str = "Signed stoichiometry of water (oxygen reaction)";
pub const OXYGEN_OXYGEN_STOICHIOMETRY: &str = "Signed stoichiometry of oxygen (oxygen reaction)";
pub const OXYGEN_ELECTRONS: &str = "Electrons in oxygen reaction";
pub const INITIAL_STATE_OF_CHARGE: &str = "Initial State of Charge";

/// Symbolic dimensionless parameter groups of the lead-acid model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeadAcidParameters {
    /// Main-reaction stoichiometric coefficient, negative electrode.
    pub s_n: Expr,
    /// Main-reaction stoichiometric coefficient, positive electrode.
    pub s_p: Expr,
    /// Cation stoichiometry of the oxygen reaction.
    pub s_plus_ox: Expr,
    /// Oxygen stoichiometry of the oxygen reaction.
    pub s_ox_ox: Expr,
    /// Cation transference number.
    pub t_plus: Expr,
    /// Initial state of charge (0 to 1).
    pub q_init: Expr,
    /// Discharge timescale [s].
    pub tau_discharge: Expr,
}

impl LeadAcidParameters {
    /// The standard lead-acid parameter groups.
    #[must_use]
    pub fn standard() -> Self {
        let p = Expr::parameter;
        let t_plus = p(CATION_TRANSFERENCE_NUMBER);

        let s_plus_n = p(NEGATIVE_CATION_STOICHIOMETRY) / p(NEGATIVE_ELECTRONS);
        let s_plus_p = p(POSITIVE_CATION_STOICHIOMETRY) / p(POSITIVE_ELECTRONS);

        let l_x = p(NEGATIVE_ELECTRODE_THICKNESS)
            + p(SEPARATOR_THICKNESS)
            + p(POSITIVE_ELECTRODE_THICKNESS);
        let i_typ = p(TYPICAL_CURRENT)
            / (p(ELECTRODES_IN_PARALLEL) * p(ELECTRODE_HEIGHT) * p(ELECTRODE_WIDTH));

        Self {
            s_n: -(s_plus_n + t_plus.clone()),
            s_p: -(s_plus_p + t_plus.clone()),
            s_plus_ox: p(OXYGEN_CATION_STOICHIOMETRY) / p(OXYGEN_ELECTRONS),
            s_ox_ox: p(OXYGEN_OXYGEN_STOICHIOMETRY) / p(OXYGEN_ELECTRONS),
            t_plus,
            q_init: p(INITIAL_STATE_OF_CHARGE),
            tau_discharge: p(FARADAY_CONSTANT) * p(TYPICAL_ELECTROLYTE_CONCENTRATION) * l_x
                / i_typ,
        }
    }
}

impl Default for LeadAcidParameters {
    fn default() -> Self {
        Self::standard()
    }
}

/// Named parameter sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Chemistry {
    /// Lead-acid cell of Sulzer et al. (2019).
    Sulzer2019,
}

impl fmt::Display for Chemistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sulzer2019 => write!(f, "Sulzer2019"),
        }
    }
}

/// Numeric values for named parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterValues {
    chemistry: Chemistry,
    values: BTreeMap<String, f64>,
}

impl ParameterValues {
    /// Loads the parameter set of `chemistry`.
    #[must_use]
    pub fn for_chemistry(chemistry: Chemistry) -> Self {
        let values = match chemistry {
            Chemistry::Sulzer2019 => sulzer2019(),
        };
        Self {
            chemistry,
            values: values
                .iter()
                .map(|&(name, value)| (name.to_string(), value))
                .collect(),
        }
    }

    #[must_use]
    pub const fn chemistry(&self) -> Chemistry {
        self.chemistry
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<f64> {
        self.values.get(name).copied()
    }

    /// Sets or replaces a value, returning the previous one.
    pub fn update(&mut self, name: impl Into<String>, value: f64) -> Option<f64> {
        self.values.insert(name.into(), value)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Evaluates a parameter-only expression.
    pub fn evaluate(&self, expr: &Expr) -> Result<f64, AssemblyError> {
        expr.evaluate(&Scope::new().with_parameters(self))
    }
}

fn sulzer2019() -> &'static [(&'static str, f64)] {
    &[
        (FARADAY_CONSTANT, 96_485.332_12),
        (TYPICAL_ELECTROLYTE_CONCENTRATION, 5650.0),
        (NEGATIVE_ELECTRODE_THICKNESS, 0.9e-3),
        (SEPARATOR_THICKNESS, 1.5e-3),
        (POSITIVE_ELECTRODE_THICKNESS, 1.25e-3),
        (ELECTRODE_HEIGHT, 0.114),
        (ELECTRODE_WIDTH, 0.065),
        (ELECTRODES_IN_PARALLEL, 8.0),
        (TYPICAL_CURRENT, 1.0),
        (CATION_TRANSFERENCE_NUMBER, 0.7),
        (NEGATIVE_CATION_STOICHIOMETRY, 1.0),
        (NEGATIVE_ELECTRONS, 2.0),
        (POSITIVE_CATION_STOICHIOMETRY, 3.0),
        (POSITIVE_ELECTRONS, -2.0),
        (OXYGEN_CATION_STOICHIOMETRY, 4.0),
        (OXYGEN_WATER_STOICHIOMETRY, -2.0),
        (OXYGEN_OXYGEN_STOICHIOMETRY, 1.0),
        (OXYGEN_ELECTRONS, -4.0),
        (INITIAL_STATE_OF_CHARGE, 1.0),
    ]
}
