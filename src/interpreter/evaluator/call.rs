use std::{io::Write, rc::Rc};

use tracing::{debug, warn};

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{Context, EvalResult},
            operation::Operation,
        },
        value::{core::Value, matrix::Matrix},
    },
};

impl<W: Write> Context<W> {
    /// Evaluates an operation call on the right-hand side of a declaration.
    ///
    /// The argument must name a `sis` variable. Its matrix is always treated
    /// as augmented: the last column is the right-hand side `b` and the rest
    /// is the coefficient block `A` the operation works on.
    ///
    /// # Parameters
    /// - `operation`: Name of the called operation.
    /// - `argument`: Name of the argument variable.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// The operation result, or an error if the operation does not return a
    /// value, the argument is unusable, or the computation fails.
    pub(crate) fn eval_call(&self, operation: &str, argument: &str, line: usize) -> EvalResult<Value> {
        let op = lookup(operation, line)?;
        if !op.returns_value() {
            return Err(RuntimeError::NoReturnValue { operation: operation.to_string(),
                                                     line });
        }

        let system = self.system_operand(op, argument, line)?;
        let (a, b) = split(op, &system, line)?;

        if op.square_required() && !a.is_square() {
            return Err(not_square(op, &a, line));
        }

        debug!(operation, argument, rows = a.rows(), cols = a.cols(), "evaluating call");
        self.apply(op, &a, Some(&b), line)
    }

    /// Resolves the argument of an operation to the matrix of a `sis`
    /// variable.
    pub(crate) fn system_operand(&self, op: Operation, name: &str, line: usize) -> EvalResult<Rc<Matrix>> {
        let variable = self.environment
                           .get(name)
                           .ok_or_else(|| RuntimeError::UndefinedVariable { name: name.to_string(),
                                                                            line })?;

        match &variable.value {
            Value::Matrix(m) => Ok(Rc::clone(m)),
            other => Err(RuntimeError::ExpectedSystem { operation: op.name().to_string(),
                                                        name: name.to_string(),
                                                        found: other.kind(),
                                                        line }),
        }
    }

    /// Runs `op` on the coefficient block `a`.
    ///
    /// `b` is the right-hand side; only `solve` reads it. Every failure of the
    /// linear-algebra service becomes a `SingularMatrix` error.
    pub(crate) fn apply(&self,
                        op: Operation,
                        a: &Matrix,
                        b: Option<&[f64]>,
                        line: usize)
                        -> EvalResult<Value> {
        let result = match op {
            Operation::Inverse => self.linalg.inverse(a).map(Value::from),
            Operation::Transpose => self.linalg.transpose(a).map(Value::from),
            Operation::LuP => self.linalg.lu_decompose(a).map(|lu| lu.p.into()),
            Operation::LuL => self.linalg.lu_decompose(a).map(|lu| lu.l.into()),
            Operation::LuU => self.linalg.lu_decompose(a).map(|lu| lu.u.into()),
            Operation::Diagonal => Ok(a.diagonal_matrix().into()),
            Operation::Determinant => self.linalg.determinant(a).map(Value::Float),
            Operation::Solve => self.linalg.solve(a, b.unwrap_or_default()).map(Value::from),
            Operation::Show => {
                return Err(RuntimeError::NoReturnValue { operation: op.name().to_string(),
                                                         line });
            },
        };

        result.map_err(|e| {
                  warn!(operation = op.name(), error = %e, line, "linear algebra failed");
                  RuntimeError::SingularMatrix { operation: op.name().to_string(),
                                                 line }
              })
    }
}

/// Looks up an operation by name.
pub(crate) fn lookup(operation: &str, line: usize) -> EvalResult<Operation> {
    Operation::from_name(operation).ok_or_else(|| RuntimeError::UnknownOperation { operation: operation.to_string(),
                                                                                  line })
}

/// Splits an augmented matrix into coefficient block and right-hand side.
pub(crate) fn split(op: Operation, system: &Matrix, line: usize) -> EvalResult<(Matrix, Vec<f64>)> {
    system.split_augmented()
          .ok_or_else(|| RuntimeError::ShapeMismatch { operation: op.name().to_string(),
                                                       rows: system.rows(),
                                                       cols: system.cols(),
                                                       details: "it needs at least two columns",
                                                       line })
}

/// The error for a coefficient block that is not square.
pub(crate) fn not_square(op: Operation, a: &Matrix, line: usize) -> RuntimeError {
    RuntimeError::ShapeMismatch { operation: op.name().to_string(),
                                  rows: a.rows(),
                                  cols: a.cols(),
                                  details: "the coefficient block must be square",
                                  line }
}
