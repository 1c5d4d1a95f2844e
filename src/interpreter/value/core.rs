use std::{fmt, rc::Rc};

use crate::{ast::TypeName, interpreter::value::matrix::Matrix, util::num::f64_to_i64_exact};

/// Represents a runtime value in the interpreter.
///
/// This is a closed set: every consumer matches it exhaustively, so there is
/// no "unknown kind" a value could have.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// An integer value (64 bit integer).
    Int(i64),
    /// A numeric value (double precision floating-point).
    Float(f64),
    /// An ordered sequence of numbers, bound by `eq` declarations.
    Vector(Rc<Vec<f64>>),
    /// A rectangular matrix, bound by `sis` declarations.
    Matrix(Rc<Matrix>),
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<Vec<f64>> for Value {
    fn from(v: Vec<f64>) -> Self {
        Self::Vector(Rc::new(v))
    }
}

impl From<Matrix> for Value {
    fn from(m: Matrix) -> Self {
        Self::Matrix(Rc::new(m))
    }
}

impl Value {
    /// Builds the value of a bare numeric literal.
    ///
    /// A number with no fractional part becomes an `Int`; anything else stays
    /// a `Float`.
    ///
    /// # Example
    /// ```
    /// use prosis::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::from_number(4.0), Value::Int(4));
    /// assert_eq!(Value::from_number(4.5), Value::Float(4.5));
    /// ```
    #[must_use]
    pub fn from_number(n: f64) -> Self {
        f64_to_i64_exact(n).map_or(Self::Float(n), Self::Int)
    }

    /// The declaration type this value structurally belongs to.
    ///
    /// `Matrix` maps to `sis`, `Vector` to `eq`, and the scalar variants to
    /// `int` and `float`.
    #[must_use]
    pub const fn kind(&self) -> TypeName {
        match self {
            Self::Int(_) => TypeName::Int,
            Self::Float(_) => TypeName::Float,
            Self::Vector(_) => TypeName::Eq,
            Self::Matrix(_) => TypeName::Sis,
        }
    }
}

/// Writes a row of numbers as `[a, b, c]`.
pub(crate) fn write_row(f: &mut fmt::Formatter<'_>, row: &[f64]) -> fmt::Result {
    write!(f, "[")?;

    for (index, value) in row.iter().enumerate() {
        if index > 0 {
            write!(f, ", ")?;
        }

        write!(f, "{value}")?;
    }

    write!(f, "]")
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::Float(r) => write!(f, "{r}"),
            Self::Vector(v) => write_row(f, v),
            Self::Matrix(m) => write!(f, "{m}"),
        }
    }
}
