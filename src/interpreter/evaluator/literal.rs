use std::io::Write;

use crate::{
    ast::Literal,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::{core::Value, matrix::Matrix},
    },
};

impl<W: Write> Context<W> {
    /// Builds a value from a literal.
    ///
    /// - Numbers become `Int` when they have no fractional part and `Float`
    ///   otherwise.
    /// - Equation rows become vectors.
    /// - Systems become matrices; every row must be non-empty and have the same
    ///   length, otherwise the whole literal is rejected.
    ///
    /// # Example
    /// ```
    /// use prosis::{
    ///     ast::Literal,
    ///     error::RuntimeError,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// assert_eq!(Context::<Vec<u8>>::eval_literal(&Literal::Number(3.0), 1).unwrap(),
    ///            Value::Int(3));
    ///
    /// let ragged = Literal::System(vec![vec![1.0, 2.0], vec![3.0, 4.0, 5.0]]);
    /// assert!(matches!(Context::<Vec<u8>>::eval_literal(&ragged, 7),
    ///                  Err(RuntimeError::MalformedSystem { line: 7, .. })));
    /// ```
    pub fn eval_literal(literal: &Literal, line: usize) -> EvalResult<Value> {
        match literal {
            Literal::Number(n) => Ok(Value::from_number(*n)),
            Literal::Equation(elements) => Ok(elements.clone().into()),
            Literal::System(rows) => {
                Matrix::from_rows(rows).map(Value::from)
                                       .map_err(|e| RuntimeError::MalformedSystem { details: e.to_string(),
                                                                                   line })
            },
        }
    }
}
