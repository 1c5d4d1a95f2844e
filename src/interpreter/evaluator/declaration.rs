use std::io::Write;

use tracing::debug;

use crate::{
    ast::{Expr, TypeName},
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{Context, EvalResult},
            environment::Variable,
        },
        value::core::Value,
    },
    util::num::{f64_to_i64_exact, i64_to_f64_checked},
};

impl<W: Write> Context<W> {
    /// Evaluates a declaration and binds the new variable.
    ///
    /// The rules are applied in this order:
    /// 1. A name that is already bound is rejected, whatever the new type or
    ///    value.
    /// 2. The source is evaluated: a literal is built, an alias adopts the
    ///    referenced variable's value, a call runs the operation.
    /// 3. The value is coerced to the declared type (see [`coerce`]).
    /// 4. The variable is bound and a confirmation line is written.
    ///
    /// Nothing is bound if any step fails.
    ///
    /// # Parameters
    /// - `type_name`: The declared type.
    /// - `name`: The new variable.
    /// - `source`: The right-hand side.
    /// - `line`: Line number for error reporting.
    pub(crate) fn declare(&mut self,
                          type_name: TypeName,
                          name: &str,
                          source: &Expr,
                          line: usize)
                          -> EvalResult<()> {
        if self.environment.contains(name) {
            return Err(RuntimeError::DuplicateDeclaration { name: name.to_string(),
                                                            line });
        }

        let value = self.eval_source(source)?;
        let value = coerce(type_name, value, line)?;

        debug!(variable = name, %type_name, %value, line, "declared variable");

        self.environment.insert(Variable { name: name.to_string(),
                                           type_name,
                                           value });

        writeln!(self.out, "-> Variable '{name}' (type: {type_name}) declared and initialized.")?;
        Ok(())
    }

    /// Evaluates the right-hand side of a declaration.
    fn eval_source(&self, source: &Expr) -> EvalResult<Value> {
        match source {
            Expr::Literal { value, line } => Self::eval_literal(value, *line),
            Expr::Variable { name, line } => {
                self.environment
                    .get(name)
                    .map(|variable| variable.value.clone())
                    .ok_or_else(|| RuntimeError::UndefinedVariable { name: name.clone(),
                                                                     line: *line })
            },
            Expr::Call { operation,
                         argument,
                         line, } => self.eval_call(operation, argument, *line),
        }
    }
}

/// Coerces `value` to the declared type.
///
/// - A float with no fractional part may be declared `int`; any other float
///   is rejected.
/// - An int may be declared `float` (numeric widening).
/// - Otherwise the value's kind must match the declared type exactly: an `eq`
///   can never hold a system and vice versa.
///
/// # Example
/// ```
/// use prosis::{
///     ast::TypeName,
///     interpreter::{evaluator::declaration::coerce, value::core::Value},
/// };
///
/// assert_eq!(coerce(TypeName::Int, Value::Float(4.0), 1).unwrap(), Value::Int(4));
/// assert_eq!(coerce(TypeName::Float, Value::Int(3), 1).unwrap(), Value::Float(3.0));
/// assert!(coerce(TypeName::Int, Value::Float(4.5), 1).is_err());
/// assert!(coerce(TypeName::Eq, Value::Int(1), 1).is_err());
/// ```
///
/// # Errors
/// `NotAnInteger` for a non-integral float declared `int`, `TypeMismatch`
/// for any other disallowed combination.
pub fn coerce(declared: TypeName, value: Value, line: usize) -> EvalResult<Value> {
    match (declared, value) {
        (TypeName::Int, Value::Float(f)) => {
            f64_to_i64_exact(f).map(Value::Int)
                               .ok_or(RuntimeError::NotAnInteger { value: f, line })
        },
        (TypeName::Float, Value::Int(n)) => {
            let found = TypeName::Int;
            i64_to_f64_checked(n, RuntimeError::TypeMismatch { declared, found, line }).map(Value::Float)
        },
        (declared, value) if value.kind() == declared => Ok(value),
        (declared, value) => Err(RuntimeError::TypeMismatch { declared,
                                                              found: value.kind(),
                                                              line }),
    }
}
