//! Symbolic unknowns and the equation system they populate.

mod system;
mod variable;

pub use system::EquationSystem;
pub use variable::{Domain, Variable, VariableId};
