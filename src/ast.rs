use std::fmt;

/// The type written in front of a declaration.
///
/// `Eq` declares a one-dimensional vector ("equation"), `Sis` a
/// two-dimensional augmented matrix ("system"). There is no implicit subtyping
/// between the vector/matrix types and the scalar types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeName {
    /// `int`: a 64-bit signed integer.
    Int,
    /// `float`: a 64-bit floating-point number.
    Float,
    /// `eq`: an ordered sequence of numbers.
    Eq,
    /// `sis`: a rectangular matrix whose last column is the right-hand side.
    Sis,
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Int => "int",
            Self::Float => "float",
            Self::Eq => "eq",
            Self::Sis => "sis",
        };
        f.write_str(name)
    }
}

/// A literal structure as it appears in source code.
///
/// Numbers are kept as parsed `f64`s; deciding whether a number is an integer
/// or a float is the evaluator's job, as is checking that a system is
/// rectangular.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    /// A bare numeric literal such as `4`, `-2.5` or `1e3`.
    Number(f64),
    /// An equation row: `[1, 2, 3]`.
    Equation(Vec<f64>),
    /// A system block made of equation rows: `{ [2, 1, 5], [1, -1, 1] }`.
    System(Vec<Vec<f64>>),
}

/// The right-hand side of a declaration.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A literal number, equation or system.
    Literal {
        /// The literal payload.
        value: Literal,
        /// Line in the source code.
        line:  usize,
    },
    /// A bare identifier: the declaration aliases an existing variable.
    Variable {
        /// The referenced variable.
        name: String,
        /// Line in the source code.
        line: usize,
    },
    /// An operation call that produces a value, e.g. `inv(s)`.
    Call {
        /// The operation name.
        operation: String,
        /// The variable the operation is applied to.
        argument:  String,
        /// Line in the source code.
        line:      usize,
    },
}

/// A top-level statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// `<type> <name> = <expr>;`
    Declaration {
        /// The declared type.
        type_name: TypeName,
        /// The variable being declared.
        name:      String,
        /// Where the value comes from.
        value:     Expr,
        /// Line in the source code.
        line:      usize,
    },
    /// `<operation>(<name>);` executed for its printed output.
    Command {
        /// The operation name.
        operation: String,
        /// The variable the operation is applied to.
        argument:  String,
        /// Line in the source code.
        line:      usize,
    },
}

/// A parsed program: statements in source order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Program {
    /// The statements, in the order they appear in the source.
    pub statements: Vec<Statement>,
}

/// Renders the program as an indented outline, one node per line.
///
/// # Example
/// ```
/// use prosis::ast::{Expr, Literal, Program, Statement, TypeName};
///
/// let program = Program { statements: vec![Statement::Declaration { type_name: TypeName::Int,
///                                                                   name:      "x".into(),
///                                                                   value:     Expr::Literal { value: Literal::Number(4.0),
///                                                                                              line:  1, },
///                                                                   line:      1, }], };
///
/// assert_eq!(program.to_string(),
///            "program\n  declaration (line 1)\n    type int\n    name x\n    number 4\n");
/// ```
impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "program")?;

        for statement in &self.statements {
            match statement {
                Statement::Declaration { type_name,
                                         name,
                                         value,
                                         line, } => {
                    writeln!(f, "  declaration (line {line})")?;
                    writeln!(f, "    type {type_name}")?;
                    writeln!(f, "    name {name}")?;
                    render_expr(f, value)?;
                },
                Statement::Command { operation,
                                     argument,
                                     line, } => {
                    writeln!(f, "  command (line {line})")?;
                    writeln!(f, "    operation {operation}")?;
                    writeln!(f, "    argument {argument}")?;
                },
            }
        }

        Ok(())
    }
}

fn render_expr(f: &mut fmt::Formatter<'_>, expr: &Expr) -> fmt::Result {
    match expr {
        Expr::Literal { value: Literal::Number(n),
                        .. } => writeln!(f, "    number {n}"),
        Expr::Literal { value: Literal::Equation(elements),
                        .. } => {
            writeln!(f, "    equation")?;
            render_row(f, elements, "      ")
        },
        Expr::Literal { value: Literal::System(rows),
                        .. } => {
            writeln!(f, "    system")?;
            for row in rows {
                writeln!(f, "      equation")?;
                render_row(f, row, "        ")?;
            }
            Ok(())
        },
        Expr::Variable { name, .. } => writeln!(f, "    alias {name}"),
        Expr::Call { operation,
                     argument,
                     .. } => {
            writeln!(f, "    call")?;
            writeln!(f, "      operation {operation}")?;
            writeln!(f, "      argument {argument}")
        },
    }
}

fn render_row(f: &mut fmt::Formatter<'_>, row: &[f64], indent: &str) -> fmt::Result {
    for n in row {
        writeln!(f, "{indent}number {n}")?;
    }
    Ok(())
}
