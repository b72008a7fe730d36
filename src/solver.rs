//! Solver availability and default selection.
//!
//! Systems without algebraic constraints are integrated with a plain ODE
//! solver. Systems with algebraic constraints prefer an IDA-based DAE
//! solver and fall back to a CasADi solver in safe mode when that is not
//! available at runtime. KLU-backed solvers are avoided for lead-acid
//! models.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::symbolic::EquationSystem;

/// Solver families the configurator can choose from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SolverFamily {
    /// Purely differential (ODE) solver.
    Scipy,
    /// Differential-algebraic solver based on IDA.
    ScikitsDae,
    /// General-purpose CasADi solver.
    Casadi,
}

impl fmt::Display for SolverFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scipy => write!(f, "ScipySolver"),
            Self::ScikitsDae => write!(f, "ScikitsDaeSolver"),
            Self::Casadi => write!(f, "CasadiSolver"),
        }
    }
}

/// CasADi integration mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CasadiMode {
    /// Step in windows and check events between them.
    Safe,
    /// Integrate straight through.
    Fast,
}

/// A configured solver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Solver {
    pub family: SolverFamily,
    pub method: String,
    pub rtol: f64,
    pub atol: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<CasadiMode>,
}

/// Default relative and absolute tolerance.
pub const DEFAULT_TOLERANCE: f64 = 1e-6;

impl Solver {
    #[must_use]
    pub fn scipy() -> Self {
        Self {
            family: SolverFamily::Scipy,
            method: "BDF".to_string(),
            rtol: DEFAULT_TOLERANCE,
            atol: DEFAULT_TOLERANCE,
            mode: None,
        }
    }

    #[must_use]
    pub fn scikits_dae() -> Self {
        Self {
            family: SolverFamily::ScikitsDae,
            method: "ida".to_string(),
            rtol: DEFAULT_TOLERANCE,
            atol: DEFAULT_TOLERANCE,
            mode: None,
        }
    }

    #[must_use]
    pub fn casadi(mode: CasadiMode) -> Self {
        Self {
            family: SolverFamily::Casadi,
            method: "idas".to_string(),
            rtol: DEFAULT_TOLERANCE,
            atol: DEFAULT_TOLERANCE,
            mode: Some(mode),
        }
    }
}

/// Runtime availability of solver families.
pub trait SolverAvailability {
    /// Returns true if `family` can be used in this runtime.
    fn is_available(&self, family: SolverFamily) -> bool;
}

/// Solver registry with an explicit set of available families.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverRegistry {
    available: HashSet<SolverFamily>,
}

impl Default for SolverRegistry {
    fn default() -> Self {
        Self::with_available([SolverFamily::Scipy, SolverFamily::ScikitsDae, SolverFamily::Casadi])
    }
}

impl SolverRegistry {
    /// A registry where every family is available.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_available(families: impl IntoIterator<Item = SolverFamily>) -> Self {
        Self {
            available: families.into_iter().collect(),
        }
    }

    /// Marks `family` as unavailable.
    #[must_use]
    pub fn without(mut self, family: SolverFamily) -> Self {
        self.available.remove(&family);
        self
    }

    /// Constructs a solver of `family` with default settings.
    #[must_use]
    pub fn construct(&self, family: SolverFamily) -> Solver {
        match family {
            SolverFamily::Scipy => Solver::scipy(),
            SolverFamily::ScikitsDae => Solver::scikits_dae(),
            SolverFamily::Casadi => Solver::casadi(CasadiMode::Safe),
        }
    }
}

impl SolverAvailability for SolverRegistry {
    fn is_available(&self, family: SolverFamily) -> bool {
        self.available.contains(&family)
    }
}

/// Picks the default solver family for `system`.
pub fn select_solver_family(
    system: &EquationSystem,
    availability: &impl SolverAvailability,
) -> SolverFamily {
    if system.is_purely_differential() {
        SolverFamily::Scipy
    } else if availability.is_available(SolverFamily::ScikitsDae) {
        SolverFamily::ScikitsDae
    } else {
        warn!(
            algebraic = system.algebraic_count(),
            "DAE solver unavailable; falling back to CasADi in safe mode"
        );
        SolverFamily::Casadi
    }
}

/// Picks and constructs the default solver for `system`.
#[must_use]
pub fn default_solver(system: &EquationSystem, registry: &SolverRegistry) -> Solver {
    registry.construct(select_solver_family(system, registry))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::Expr;
    use crate::symbolic::{Domain, Variable};

    fn dae_system() -> EquationSystem {
        let mut system = EquationSystem::new();
        let phi = Variable::new("Electrolyte potential", Domain::Separator);
        system.set_algebraic(phi.id, Expr::zero());
        system
    }

    #[test]
    fn test_ode_system_selects_scipy() {
        let solver = default_solver(&EquationSystem::new(), &SolverRegistry::new());
        assert_eq!(solver.family, SolverFamily::Scipy);
        assert_eq!(solver.method, "BDF");
    }

    #[test]
    fn test_ode_system_ignores_dae_availability() {
        let registry = SolverRegistry::new().without(SolverFamily::ScikitsDae);
        let solver = default_solver(&EquationSystem::new(), &registry);
        assert_eq!(solver.family, SolverFamily::Scipy);
    }

    #[test]
    fn test_dae_system_prefers_scikits() {
        let solver = default_solver(&dae_system(), &SolverRegistry::new());
        assert_eq!(solver.family, SolverFamily::ScikitsDae);
        assert_eq!(solver.method, "ida");
    }

    #[test]
    fn test_dae_system_falls_back_to_casadi_safe() {
        let registry = SolverRegistry::new().without(SolverFamily::ScikitsDae);
        let solver = default_solver(&dae_system(), &registry);
        assert_eq!(solver.family, SolverFamily::Casadi);
        assert_eq!(solver.mode, Some(CasadiMode::Safe));
    }

    #[test]
    fn test_custom_availability() {
        struct NothingButScipy;
        impl SolverAvailability for NothingButScipy {
            fn is_available(&self, family: SolverFamily) -> bool {
                family == SolverFamily::Scipy
            }
        }
        assert_eq!(
            select_solver_family(&dae_system(), &NothingButScipy),
            SolverFamily::Casadi
        );
    }

    #[test]
    fn test_solver_display_and_serialization() {
        assert_eq!(SolverFamily::ScikitsDae.to_string(), "ScikitsDaeSolver");
        let json = serde_json::to_value(Solver::scipy()).unwrap();
        assert_eq!(json["family"], "scipy");
        assert!(json.get("mode").is_none());
    }
}
