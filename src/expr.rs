//! Symbolic expressions.
//!
//! Stoichiometric coefficients, derived variables and equation
//! right-hand sides are all expression trees over named parameters,
//! unknowns and time. Expressions stay symbolic until a [`Scope`] binds
//! numbers to their leaves.

use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use serde::{Deserialize, Serialize};

use crate::error::AssemblyError;
use crate::parameters::ParameterValues;
use crate::symbolic::{Variable, VariableId};

/// Binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl BinaryOp {
    fn apply(self, left: f64, right: f64) -> f64 {
        match self {
            Self::Add => left + right,
            Self::Subtract => left - right,
            Self::Multiply => left * right,
            Self::Divide => left / right,
        }
    }

    const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
        }
    }
}

/// A symbolic expression tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Expr {
    Scalar(f64),
    Parameter(String),
    Variable(Variable),
    Time,
    Negate(Box<Expr>),
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
}

impl Expr {
    #[must_use]
    pub const fn scalar(value: f64) -> Self {
        Self::Scalar(value)
    }

    #[must_use]
    pub const fn zero() -> Self {
        Self::Scalar(0.0)
    }

    #[must_use]
    pub fn parameter(name: impl Into<String>) -> Self {
        Self::Parameter(name.into())
    }

    #[must_use]
    pub fn variable(variable: Variable) -> Self {
        Self::Variable(variable)
    }

    fn binary(op: BinaryOp, left: Self, right: Self) -> Self {
        Self::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Returns true for the literal zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        matches!(self, Self::Scalar(v) if *v == 0.0)
    }

    /// Returns the unknown if this expression is a bare variable.
    #[must_use]
    pub const fn as_variable(&self) -> Option<&Variable> {
        match self {
            Self::Variable(v) => Some(v),
            _ => None,
        }
    }

    /// Names of every parameter referenced by this expression.
    #[must_use]
    pub fn parameters(&self) -> BTreeSet<&str> {
        let mut out = BTreeSet::new();
        self.collect_parameters(&mut out);
        out
    }

    fn collect_parameters<'a>(&'a self, out: &mut BTreeSet<&'a str>) {
        match self {
            Self::Parameter(name) => {
                out.insert(name.as_str());
            }
            Self::Negate(inner) => inner.collect_parameters(out),
            Self::Binary { left, right, .. } => {
                left.collect_parameters(out);
                right.collect_parameters(out);
            }
            Self::Scalar(_) | Self::Variable(_) | Self::Time => {}
        }
    }

    /// Evaluates the expression numerically.
    pub fn evaluate(&self, scope: &Scope<'_>) -> Result<f64, AssemblyError> {
        match self {
            Self::Scalar(v) => Ok(*v),
            Self::Parameter(name) => scope
                .parameters
                .and_then(|p| p.get(name))
                .ok_or_else(|| AssemblyError::UnboundParameter { name: name.clone() }),
            Self::Variable(var) => scope
                .variables
                .get(&var.id)
                .copied()
                .ok_or_else(|| AssemblyError::UnboundVariable {
                    name: var.name.clone(),
                }),
            Self::Time => Ok(scope.time),
            Self::Negate(inner) => Ok(-inner.evaluate(scope)?),
            Self::Binary { op, left, right } => {
                Ok(op.apply(left.evaluate(scope)?, right.evaluate(scope)?))
            }
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar(v) => write!(f, "{v}"),
            Self::Parameter(name) => write!(f, "[{name}]"),
            Self::Variable(var) => write!(f, "{}", var.name),
            Self::Time => write!(f, "t"),
            Self::Negate(inner) => write!(f, "-({inner})"),
            Self::Binary { op, left, right } => write!(f, "({left} {} {right})", op.symbol()),
        }
    }
}

impl From<f64> for Expr {
    fn from(v: f64) -> Self {
        Self::Scalar(v)
    }
}

impl From<Variable> for Expr {
    fn from(v: Variable) -> Self {
        Self::Variable(v)
    }
}

impl Neg for Expr {
    type Output = Expr;

    fn neg(self) -> Expr {
        Expr::Negate(Box::new(self))
    }
}

macro_rules! impl_binary_op {
    ($trait:ident, $method:ident, $op:expr) => {
        impl $trait for Expr {
            type Output = Expr;

            fn $method(self, rhs: Expr) -> Expr {
                Expr::binary($op, self, rhs)
            }
        }

        impl $trait<f64> for Expr {
            type Output = Expr;

            fn $method(self, rhs: f64) -> Expr {
                Expr::binary($op, self, Expr::Scalar(rhs))
            }
        }

        impl $trait<Expr> for f64 {
            type Output = Expr;

            fn $method(self, rhs: Expr) -> Expr {
                Expr::binary($op, Expr::Scalar(self), rhs)
            }
        }
    };
}

impl_binary_op!(Add, add, BinaryOp::Add);
impl_binary_op!(Sub, sub, BinaryOp::Subtract);
impl_binary_op!(Mul, mul, BinaryOp::Multiply);
impl_binary_op!(Div, div, BinaryOp::Divide);

/// Numeric bindings used to evaluate an expression.
#[derive(Debug, Clone, Default)]
pub struct Scope<'a> {
    parameters: Option<&'a ParameterValues>,
    variables: HashMap<VariableId, f64>,
    time: f64,
}

impl<'a> Scope<'a> {
    /// An empty scope: only scalar and time leaves evaluate.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds parameter values.
    #[must_use]
    pub fn with_parameters(mut self, parameters: &'a ParameterValues) -> Self {
        self.parameters = Some(parameters);
        self
    }

    /// Binds a value to an unknown.
    #[must_use]
    pub fn with_variable(mut self, id: VariableId, value: f64) -> Self {
        self.variables.insert(id, value);
        self
    }

    /// Sets the (dimensionless) time.
    #[must_use]
    pub fn at_time(mut self, time: f64) -> Self {
        self.time = time;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbolic::Domain;

    #[test]
    fn test_scalar_arithmetic() {
        let e = 100.0 - Expr::scalar(0.8) * 100.0;
        let v = e.evaluate(&Scope::new()).unwrap();
        assert!((v - 20.0).abs() < 1e-12);
    }

    #[test]
    fn test_negate_and_divide() {
        let e = -(Expr::scalar(3.0) / 2.0);
        assert!((e.evaluate(&Scope::new()).unwrap() + 1.5).abs() < 1e-12);
    }

    #[test]
    fn test_unbound_parameter() {
        let e = Expr::parameter("Cation transference number") + 1.0;
        let err = e.evaluate(&Scope::new()).unwrap_err();
        assert_eq!(
            err,
            AssemblyError::UnboundParameter {
                name: "Cation transference number".to_string()
            }
        );
    }

    #[test]
    fn test_variable_binding() {
        let var = Variable::new("Total current density", Domain::CurrentCollector);
        let e = -(Expr::variable(var.clone()) * 100.0);

        let err = e.evaluate(&Scope::new()).unwrap_err();
        assert!(matches!(err, AssemblyError::UnboundVariable { .. }));

        let v = e.evaluate(&Scope::new().with_variable(var.id, 0.5)).unwrap();
        assert!((v + 50.0).abs() < 1e-12);
    }

    #[test]
    fn test_time_leaf() {
        let e = Expr::Time * 2.0;
        assert!((e.evaluate(&Scope::new().at_time(3.0)).unwrap() - 6.0).abs() < 1e-12);
    }

    #[test]
    fn test_is_zero() {
        assert!(Expr::zero().is_zero());
        assert!(Expr::scalar(-0.0).is_zero());
        assert!(!Expr::scalar(1e-300).is_zero());
        assert!(!(Expr::zero() * 1.0).is_zero());
    }

    #[test]
    fn test_collect_parameters() {
        let e = -(Expr::parameter("a") + Expr::parameter("b")) / Expr::parameter("a");
        let names: Vec<&str> = e.parameters().into_iter().collect();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn test_structural_equality() {
        let a = -(Expr::parameter("x") + Expr::parameter("y"));
        let b = -(Expr::parameter("x") + Expr::parameter("y"));
        assert_eq!(a, b);
        assert_ne!(a, -(Expr::parameter("y") + Expr::parameter("x")));
    }

    #[test]
    fn test_display() {
        let e = Expr::parameter("q") * 100.0;
        assert_eq!(e.to_string(), "([q] * 100)");
    }

    #[test]
    fn test_serialization_shape() {
        let json = serde_json::to_value(Expr::scalar(0.0)).unwrap();
        assert_eq!(json, serde_json::json!({"type": "scalar", "value": 0.0}));

        let e = -(Expr::parameter("s") + 1.0);
        let back: Expr = serde_json::from_str(&serde_json::to_string(&e).unwrap()).unwrap();
        assert_eq!(e, back);
    }
}
