use std::io::Write;

use tracing::info;

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{
            call::{lookup, not_square, split},
            core::{Context, EvalResult},
            operation::Operation,
        },
        value::matrix::Matrix,
    },
};

impl<W: Write> Context<W> {
    /// Executes an operation as a standalone statement and prints its result.
    ///
    /// `show` prints any variable. Every other operation needs a `sis`
    /// argument and prints a header followed by its labelled result. Nothing
    /// is bound to the environment.
    ///
    /// # Parameters
    /// - `operation`: Name of the operation.
    /// - `argument`: Name of the argument variable.
    /// - `line`: Line number for error reporting.
    pub(crate) fn execute_command(&mut self, operation: &str, argument: &str, line: usize) -> EvalResult<()> {
        let op = lookup(operation, line)?;

        if op == Operation::Show {
            return self.show(argument, line);
        }

        let system = self.system_operand(op, argument, line)?;
        let (a, b) = command_operands(op, &system, line)?;

        info!(operation, argument, "executing command");
        let result = self.apply(op, &a, b.as_deref(), line)?;

        writeln!(self.out, "\n-=-=- Executing '{op}' on system '{argument}' -=-=-")?;
        writeln!(self.out, "{}: {result}", op.label())?;
        Ok(())
    }

    /// Prints a variable of any type.
    fn show(&mut self, name: &str, line: usize) -> EvalResult<()> {
        let variable = self.environment
                           .get(name)
                           .ok_or_else(|| RuntimeError::UndefinedVariable { name: name.to_string(),
                                                                            line })?;

        writeln!(self.out,
                 "{} '{name}' (type: {}): {}",
                 Operation::Show.label(),
                 variable.type_name,
                 variable.value)?;
        Ok(())
    }
}

/// Picks the operands of a command.
///
/// `solve` always splits off the right-hand side and needs a square
/// coefficient block. Other operations work on a square matrix as a whole; a
/// non-square one is treated as augmented and its coefficient block must be
/// square if the operation requires it.
fn command_operands(op: Operation, system: &Matrix, line: usize) -> EvalResult<(Matrix, Option<Vec<f64>>)> {
    let solving = op == Operation::Solve;
    if !solving && system.is_square() {
        return Ok((system.clone(), None));
    }

    let (a, b) = split(op, system, line)?;
    if (solving || op.square_required()) && !a.is_square() {
        return Err(not_square(op, &a, line));
    }

    Ok((a, Some(b)))
}
