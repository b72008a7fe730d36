//! State-of-charge variables.
//!
//! State of charge is read off the averaged electrolyte concentration.
//! The fractional charge input is a separate unknown integrating the
//! total current density; it is created once per model and survives
//! repeated derivation.

use tracing::debug;

use crate::error::AssemblyError;
use crate::parameters::LeadAcidParameters;
use crate::symbolic::{Domain, EquationSystem, Variable};

pub const X_AVERAGED_ELECTROLYTE_CONCENTRATION: &str = "X-averaged electrolyte concentration";
pub const TOTAL_CURRENT_DENSITY: &str = "Total current density";
pub const STATE_OF_CHARGE: &str = "State of Charge";
pub const DEPTH_OF_DISCHARGE: &str = "Depth of Discharge";
pub const FRACTIONAL_CHARGE_INPUT: &str = "Fractional Charge Input";

/// Derives state-of-charge style variables into an equation system.
#[derive(Debug, Clone, Copy)]
pub struct StateVariableDeriver<'a> {
    params: &'a LeadAcidParameters,
}

impl<'a> StateVariableDeriver<'a> {
    #[must_use]
    pub const fn new(params: &'a LeadAcidParameters) -> Self {
        Self { params }
    }

    /// Adds "State of Charge", "Depth of Discharge" and, if absent,
    /// "Fractional Charge Input" with its equation and initial condition.
    ///
    /// All required variables are checked before anything is written, so
    /// a failed derivation leaves `system` untouched.
    pub fn derive(&self, system: &mut EquationSystem) -> Result<(), AssemblyError> {
        let concentration = system.require(X_AVERAGED_ELECTROLYTE_CONCENTRATION)?.clone();
        let needs_charge_input = !system.contains_variable(FRACTIONAL_CHARGE_INPUT);
        let current = if needs_charge_input {
            Some(system.require(TOTAL_CURRENT_DENSITY)?.clone())
        } else {
            None
        };

        let soc = concentration * 100.0;
        system.insert_variable(DEPTH_OF_DISCHARGE, 100.0 - soc.clone());
        system.insert_variable(STATE_OF_CHARGE, soc);

        let Some(current) = current else {
            debug!("fractional charge input already defined; skipping");
            return Ok(());
        };

        let fci = Variable::new(FRACTIONAL_CHARGE_INPUT, Domain::CurrentCollector);
        let id = fci.id;
        system.add_unknown(fci);
        system.set_rhs(id, -(current * 100.0));
        system.set_initial_condition(id, self.params.q_init.clone() * 100.0);
        debug!(variable = %id, "registered fractional charge input");
        Ok(())
    }
}
