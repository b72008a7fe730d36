//! Variable and equation registries of a model.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::AssemblyError;
use crate::expr::Expr;
use crate::symbolic::variable::{Variable, VariableId};

/// The symbolic model: named variables plus the equations governing its
/// unknowns.
///
/// Differential equations (`rhs`) and algebraic constraints (`algebraic`)
/// are keyed by the identity of the unknown they govern. Re-registering
/// an equation for the same unknown replaces it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EquationSystem {
    variables: BTreeMap<String, Expr>,
    rhs: BTreeMap<VariableId, Expr>,
    algebraic: BTreeMap<VariableId, Expr>,
    initial_conditions: BTreeMap<VariableId, Expr>,
}

impl EquationSystem {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up a named variable.
    #[must_use]
    pub fn variable(&self, name: &str) -> Option<&Expr> {
        self.variables.get(name)
    }

    /// Looks up a named variable that the caller requires to exist.
    pub fn require(&self, name: &str) -> Result<&Expr, AssemblyError> {
        self.variable(name).ok_or_else(|| AssemblyError::MissingVariable {
            name: name.to_string(),
        })
    }

    #[must_use]
    pub fn contains_variable(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }

    /// Defines (or redefines) a named variable.
    pub fn insert_variable(&mut self, name: impl Into<String>, expr: Expr) {
        self.variables.insert(name.into(), expr);
    }

    /// Registers `variable` as an unknown under its own name and returns
    /// the expression referring to it.
    pub fn add_unknown(&mut self, variable: Variable) -> Expr {
        let expr = Expr::variable(variable.clone());
        self.variables.insert(variable.name, expr.clone());
        expr
    }

    pub fn set_rhs(&mut self, id: VariableId, expr: Expr) {
        self.rhs.insert(id, expr);
    }

    pub fn set_algebraic(&mut self, id: VariableId, expr: Expr) {
        self.algebraic.insert(id, expr);
    }

    pub fn set_initial_condition(&mut self, id: VariableId, expr: Expr) {
        self.initial_conditions.insert(id, expr);
    }

    #[must_use]
    pub fn variables(&self) -> &BTreeMap<String, Expr> {
        &self.variables
    }

    #[must_use]
    pub fn rhs(&self) -> &BTreeMap<VariableId, Expr> {
        &self.rhs
    }

    #[must_use]
    pub fn algebraic(&self) -> &BTreeMap<VariableId, Expr> {
        &self.algebraic
    }

    #[must_use]
    pub fn initial_conditions(&self) -> &BTreeMap<VariableId, Expr> {
        &self.initial_conditions
    }

    /// Number of algebraic (non-differential) constraints.
    #[must_use]
    pub fn algebraic_count(&self) -> usize {
        self.algebraic.len()
    }

    /// True when the system has no algebraic constraints.
    #[must_use]
    pub fn is_purely_differential(&self) -> bool {
        self.algebraic.is_empty()
    }
}
