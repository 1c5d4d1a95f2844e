use std::io::Write;

use tracing::{debug, warn};

use crate::{
    ast::{Program, Statement},
    config::Config,
    error::RuntimeError,
    interpreter::{
        evaluator::environment::Environment,
        linalg::{DenseLinearAlgebra, LinearAlgebra},
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Where a run currently stands.
///
/// A context starts out `Running`. It becomes `Completed` once every
/// statement has been processed and `Failed` as soon as one statement fails;
/// neither transition is ever undone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Running,
    Completed,
    Failed,
}

/// Stores the runtime evaluation context.
///
/// This struct holds the interpreter state for exactly one program run: the
/// variable environment, the linear-algebra service operations are delegated
/// to, and the sink that receives declaration confirmations and command
/// output.
///
/// ## Usage
///
/// Create a fresh `Context` for every program and call [`Context::run`].
/// Contexts are never shared between runs, so variables cannot leak from one
/// program into another.
pub struct Context<W: Write> {
    pub(crate) environment: Environment,
    pub(crate) linalg:      Box<dyn LinearAlgebra>,
    pub(crate) out:         W,
    state:                  RunState,
}

impl<W: Write> Context<W> {
    /// Creates a context that writes its output to `out`.
    #[must_use]
    pub fn with_output(out: W) -> Self {
        Self { environment: Environment::new(),
               linalg: Box::new(DenseLinearAlgebra::default()),
               out,
               state: RunState::Running }
    }

    /// Creates a context configured by `config` that writes to `out`.
    #[must_use]
    pub fn with_config(config: &Config, out: W) -> Self {
        Self::with_output(out).with_linear_algebra(Box::new(DenseLinearAlgebra::new(config.tolerance)))
    }

    /// Replaces the linear-algebra service.
    #[must_use]
    pub fn with_linear_algebra(mut self, linalg: Box<dyn LinearAlgebra>) -> Self {
        self.linalg = linalg;
        self
    }

    #[must_use]
    pub const fn state(&self) -> RunState {
        self.state
    }

    /// The variables declared so far.
    #[must_use]
    pub const fn environment(&self) -> &Environment {
        &self.environment
    }

    /// Consumes the context and returns the output sink.
    #[must_use]
    pub fn into_output(self) -> W {
        self.out
    }

    /// Runs every statement of `program` in source order.
    ///
    /// Execution stops at the first error, which is returned unchanged; the
    /// statements after it are never looked at. Variables bound before the
    /// failure stay in the environment, but a failing declaration never binds
    /// anything.
    ///
    /// # Example
    /// ```
    /// use prosis::interpreter::{
    ///     evaluator::core::{Context, RunState},
    ///     parser::core::{ProgramParser, SourceParser},
    /// };
    ///
    /// let program = SourceParser.parse("int x = 4;\nint x = 5;").unwrap();
    /// let mut context = Context::with_output(Vec::new());
    ///
    /// assert!(context.run(&program).is_err());
    /// assert_eq!(context.state(), RunState::Failed);
    /// assert_eq!(context.environment().len(), 1);
    /// ```
    pub fn run(&mut self, program: &Program) -> EvalResult<()> {
        debug!(statements = program.statements.len(), "starting run");

        for statement in &program.statements {
            if let Err(e) = self.eval_statement(statement) {
                warn!(error = %e, "run failed");
                self.state = RunState::Failed;
                return Err(e);
            }
        }

        if let Err(e) = writeln!(self.out, "\nProgram executed successfully!") {
            self.state = RunState::Failed;
            return Err(e.into());
        }

        debug!("run completed");
        self.state = RunState::Completed;
        Ok(())
    }

    /// Evaluates a single statement.
    ///
    /// Declarations bind a new variable; commands print the result of an
    /// operation. Neither produces a value for the caller.
    pub fn eval_statement(&mut self, statement: &Statement) -> EvalResult<()> {
        match statement {
            Statement::Declaration { type_name,
                                     name,
                                     value,
                                     line, } => self.declare(*type_name, name, value, *line),
            Statement::Command { operation,
                                 argument,
                                 line, } => self.execute_command(operation, argument, *line),
        }
    }
}
