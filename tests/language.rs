use std::fs;

use pretty_assertions::assert_eq;
use prosis::{
    config::Config,
    error::{Error, ErrorKind},
    interpreter::{
        evaluator::core::{Context, RunState},
        linalg::{LinalgError, LinalgResult, LinearAlgebra, LuFactors},
        parser::core::{ProgramParser, SourceParser},
        value::{core::Value, matrix::Matrix},
    },
    run_source,
};
use tracing_subscriber::{EnvFilter, FmtSubscriber};
use walkdir::WalkDir;

#[ctor::ctor]
fn init_tests() {
    let subscriber = FmtSubscriber::builder().with_env_filter(EnvFilter::from_default_env())
                                             .finish();
    tracing::subscriber::set_global_default(subscriber).expect("Failed to set tracing subscriber");
}

#[test]
fn sample_programs_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("programs").into_iter()
                                .filter_map(Result::ok)
                                .filter(|e| e.path().extension().is_some_and(|ext| ext == "psis"))
    {
        let path = entry.path();
        let code =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        count += 1;
        if let Err(e) = run_source(&code, &Config::default(), &mut Vec::new()) {
            panic!("Program {path:?} failed:\n{code}\nError: {e:?}");
        }
    }

    assert!(count > 0, "No sample programs found in programs/");
}

fn output_of(src: &str) -> String {
    let mut out = Vec::new();
    if let Err(e) = run_source(src, &Config::default(), &mut out) {
        panic!("Program failed: {e}");
    }
    String::from_utf8(out).expect("output is not UTF-8")
}

fn assert_success(src: &str) {
    if let Err(e) = run_source(src, &Config::default(), &mut Vec::new()) {
        panic!("Program failed: {e}");
    }
}

fn assert_failure(src: &str, kind: ErrorKind) {
    match run_source(src, &Config::default(), &mut Vec::new()) {
        Ok(()) => panic!("Program succeeded but was expected to fail"),
        Err(e) => assert_eq!(e.kind(), kind, "unexpected error: {e}"),
    }
}

/// Runs `src` to completion (or failure) and returns the context.
fn context_after(src: &str) -> Context<Vec<u8>> {
    let program = SourceParser.parse(src).expect("program does not parse");
    let mut context = Context::with_output(Vec::new());
    let _ = context.run(&program);
    context
}

fn value_of(context: &Context<Vec<u8>>, name: &str) -> Value {
    context.environment()
           .get(name)
           .unwrap_or_else(|| panic!("'{name}' is not bound"))
           .value
           .clone()
}

fn matrix(rows: &[Vec<f64>]) -> Value {
    Value::from(Matrix::from_rows(rows).unwrap())
}

const SYSTEM: &str = "sis s = { [2, 1, 5], [1, -1, 1] };\n";

#[test]
fn declarations_print_a_confirmation() {
    assert_eq!(output_of("int x = 4;\neq v = [1, 2];"),
               "-> Variable 'x' (type: int) declared and initialized.\n\
                -> Variable 'v' (type: eq) declared and initialized.\n\
                \n\
                Program executed successfully!\n");
}

#[test]
fn numbers_are_classified_by_fractional_part() {
    let context = context_after("int a = 4;\nfloat b = 2.5;\nint c = 4.0;\nint d = -12;");

    assert_eq!(value_of(&context, "a"), Value::Int(4));
    assert_eq!(value_of(&context, "b"), Value::Float(2.5));
    assert_eq!(value_of(&context, "c"), Value::Int(4));
    assert_eq!(value_of(&context, "d"), Value::Int(-12));
}

#[test]
fn fractional_float_is_not_an_int() {
    assert_failure("int x = 4.5;", ErrorKind::TypeMismatch);
    assert_failure("int x = 1e-3;", ErrorKind::TypeMismatch);
}

#[test]
fn large_whole_numbers_are_ints() {
    let context = context_after("int x = 1e16;
int y = -9007199254740993;
float z = x;");

    assert_eq!(context.state(), RunState::Completed);
    assert_eq!(value_of(&context, "x"), Value::Int(10_000_000_000_000_000));
    assert_eq!(value_of(&context, "y"), Value::Int(-9_007_199_254_740_992));
    assert_eq!(value_of(&context, "z"), Value::Float(1e16));

    assert_failure("int x = 1e19;", ErrorKind::TypeMismatch);
}

#[test]
fn kinds_must_match_the_declared_type() {
    assert_failure("eq v = 4;", ErrorKind::TypeMismatch);
    assert_failure("int v = [1, 2];", ErrorKind::TypeMismatch);
    assert_failure("sis s = [1, 2, 3];", ErrorKind::TypeMismatch);
    assert_failure("eq v = { [1, 2] };", ErrorKind::TypeMismatch);
}

#[test]
fn duplicate_declarations_are_rejected() {
    assert_failure("int x = 1;\nint x = 1;", ErrorKind::DuplicateDeclaration);
    assert_failure("int x = 1;\nfloat x = 2.5;", ErrorKind::DuplicateDeclaration);
    assert_failure("int x = 1;\neq y = [1];\nsis x = { [1, 2] };",
                   ErrorKind::DuplicateDeclaration);
    // The name is checked before the source is evaluated.
    assert_failure("int x = 1;\nint x = missing;", ErrorKind::DuplicateDeclaration);
}

#[test]
fn duplicate_keeps_the_first_binding() {
    let context = context_after("int x = 1;\nint x = 2;");

    assert_eq!(context.state(), RunState::Failed);
    assert_eq!(value_of(&context, "x"), Value::Int(1));
}

#[test]
fn aliases_adopt_the_referenced_value() {
    let context = context_after("int x = 3;\nfloat y = x;\nfloat f = 4.0;\nint i = f;\neq v = [1, 2];\neq w = v;");

    assert_eq!(context.state(), RunState::Completed);
    assert_eq!(value_of(&context, "y"), Value::Float(3.0));
    assert_eq!(value_of(&context, "f"), Value::Float(4.0));
    assert_eq!(value_of(&context, "i"), Value::Int(4));
    assert_eq!(value_of(&context, "w"), value_of(&context, "v"));
}

#[test]
fn narrowing_a_fractional_alias_fails() {
    assert_failure("float f = 4.5;\nint i = f;", ErrorKind::TypeMismatch);
    assert_failure("eq v = [1, 2];\nsis s = v;", ErrorKind::TypeMismatch);
}

#[test]
fn variables_are_visible_only_after_their_declaration() {
    assert_failure("float y = x;\nint x = 1;", ErrorKind::UndefinedVariable);
    assert_failure("solve(s);\nsis s = { [1, 2] };", ErrorKind::UndefinedVariable);
    assert_success("int x = 1;\nfloat y = x;");
}

#[test]
fn ragged_system_is_a_syntax_error() {
    assert_failure("sis s = { [1, 2], [3, 4, 5] };", ErrorKind::Syntax);
    assert_failure("sis s = { };", ErrorKind::Syntax);
    assert_failure("sis s = { [1, 2], [] };", ErrorKind::Syntax);

    let context = context_after("int x = 1;\nsis s = { [1, 2], [3, 4, 5] };");
    assert_eq!(context.state(), RunState::Failed);
    assert!(!context.environment().contains("s"));
    assert_eq!(context.environment().len(), 1);
}

#[test]
fn solve_command_prints_the_solution() {
    assert_eq!(output_of(&format!("{SYSTEM}solve(s);")),
               "-> Variable 's' (type: sis) declared and initialized.\n\
                \n\
                -=-=- Executing 'solve' on system 's' -=-=-\n\
                Solution: [2, 1]\n\
                \n\
                Program executed successfully!\n");
}

#[test]
fn solve_in_a_declaration_binds_a_vector() {
    let context = context_after(&format!("{SYSTEM}eq x = solve(s);"));
    assert_eq!(value_of(&context, "x"), Value::from(vec![2.0, 1.0]));

    assert_failure(&format!("{SYSTEM}sis x = solve(s);"), ErrorKind::TypeMismatch);
}

#[test]
fn operations_in_declarations_use_the_coefficient_block() {
    let context = context_after(&format!("{SYSTEM}float d = det(s);\nsis l = retL(s);\nsis u = retU(s);\nsis p = retP(s);\nsis g = retD(s);\nsis t = trans(s);"));

    assert_eq!(context.state(), RunState::Completed);
    assert_eq!(value_of(&context, "d"), Value::Float(-3.0));
    assert_eq!(value_of(&context, "l"), matrix(&[vec![1.0, 0.0], vec![0.5, 1.0]]));
    assert_eq!(value_of(&context, "u"), matrix(&[vec![2.0, 1.0], vec![0.0, -1.5]]));
    assert_eq!(value_of(&context, "p"), matrix(&[vec![1.0, 0.0], vec![0.0, 1.0]]));
    assert_eq!(value_of(&context, "g"), matrix(&[vec![2.0, 0.0], vec![0.0, -1.0]]));
    assert_eq!(value_of(&context, "t"), matrix(&[vec![2.0, 1.0], vec![1.0, -1.0]]));
}

#[test]
fn determinant_can_be_declared_int_when_whole() {
    let context = context_after(&format!("{SYSTEM}int d = det(s);"));
    assert_eq!(value_of(&context, "d"), Value::Int(-3));
}

#[test]
fn inverse_of_a_diagonal_block() {
    assert_eq!(output_of("sis s = { [2, 0, 1], [0, 4, 1] };\ninv(s);"),
               "-> Variable 's' (type: sis) declared and initialized.\n\
                \n\
                -=-=- Executing 'inv' on system 's' -=-=-\n\
                Inverse matrix: [[0.5, 0], [0, 0.25]]\n\
                \n\
                Program executed successfully!\n");
}

#[test]
fn commands_print_labelled_results() {
    let out = output_of(&format!("{SYSTEM}det(s);\nretL(s);\nretU(s);\nretP(s);\nretD(s);"));

    assert!(out.contains("-=-=- Executing 'det' on system 's' -=-=-\nDeterminant: -3\n"));
    assert!(out.contains("Matrix L: [[1, 0], [0.5, 1]]\n"));
    assert!(out.contains("Matrix U: [[2, 1], [0, -1.5]]\n"));
    assert!(out.contains("Matrix P: [[1, 0], [0, 1]]\n"));
    assert!(out.contains("Diagonal matrix: [[2, 0], [0, -1]]\n"));
}

#[test]
fn lu_factors_track_row_swaps() {
    let context = context_after("sis s = { [1, 2, 0], [3, 4, 0] };\nsis p = retP(s);\nsis l = retL(s);\nsis u = retU(s);");

    assert_eq!(value_of(&context, "p"), matrix(&[vec![0.0, 1.0], vec![1.0, 0.0]]));
    assert_eq!(value_of(&context, "u"), matrix(&[vec![3.0, 4.0], vec![0.0, 2.0 - (1.0 / 3.0) * 4.0]]));
    assert_eq!(value_of(&context, "l"), matrix(&[vec![1.0, 0.0], vec![1.0 / 3.0, 1.0]]));
}

#[test]
fn non_square_block_needs_transpose() {
    let program = "sis s = { [1, 2, 3, 10], [4, 5, 6, 11] };\n";

    assert_failure(&format!("{program}sis i = inv(s);"), ErrorKind::ShapeMismatch);
    assert_failure(&format!("{program}float d = det(s);"), ErrorKind::ShapeMismatch);
    assert_failure(&format!("{program}inv(s);"), ErrorKind::ShapeMismatch);
    assert_success(&format!("{program}sis t = trans(s);"));

    assert!(output_of(&format!("{program}trans(s);")).contains("Transposed matrix: [[1, 4], [2, 5], [3, 6]]\n"));
}

#[test]
fn commands_use_a_square_matrix_as_a_whole() {
    let program = "sis q = { [2, 0], [0, 4] };\n";

    assert!(output_of(&format!("{program}inv(q);")).contains("Inverse matrix: [[0.5, 0], [0, 0.25]]\n"));
    assert!(output_of(&format!("{program}det(q);")).contains("Determinant: 8\n"));

    // In a declaration the last column is always the right-hand side.
    assert_failure(&format!("{program}sis w = inv(q);"), ErrorKind::ShapeMismatch);
    // `solve` always splits, even a square matrix, leaving a 2x1 block.
    assert_failure(&format!("{program}solve(q);"), ErrorKind::ShapeMismatch);
}

#[test]
fn solve_command_needs_a_square_coefficient_block() {
    assert_failure("sis q = { [1, 2], [3, 4], [5, 6] };
solve(q);", ErrorKind::ShapeMismatch);
    assert_failure("sis w = { [1, 2, 3, 4], [5, 6, 7, 8] };
solve(w);", ErrorKind::ShapeMismatch);

    let err = run_source("sis q = { [2, 0], [0, 4] };
solve(q);", &Config::default(), &mut Vec::new()).unwrap_err();
    assert_eq!(err.to_string(),
               "Error on line 2: Operation 'solve' cannot be applied to a 2x1 matrix: the coefficient block must be square.");
}

#[test]
fn single_column_system_cannot_be_split() {
    let program = "sis c = { [1], [2] };\n";

    assert_failure(&format!("{program}solve(c);"), ErrorKind::ShapeMismatch);
    assert_failure(&format!("{program}det(c);"), ErrorKind::ShapeMismatch);
    assert_failure(&format!("{program}sis t = trans(c);"), ErrorKind::ShapeMismatch);
}

#[test]
fn operations_require_a_system() {
    for op in ["inv", "trans", "retP", "retL", "retU", "retD", "det", "solve"] {
        assert_failure(&format!("eq v = [1, 2, 3];\n{op}(v);"), ErrorKind::TypeMismatch);
        assert_failure(&format!("int n = 3;\nsis r = {op}(n);"), ErrorKind::TypeMismatch);
    }
}

#[test]
fn unknown_and_statement_only_operations() {
    assert_failure(&format!("{SYSTEM}frobnicate(s);"), ErrorKind::TypeMismatch);
    assert_failure(&format!("{SYSTEM}sis t = frobnicate(s);"), ErrorKind::TypeMismatch);
    assert_failure(&format!("{SYSTEM}sis t = show(s);"), ErrorKind::TypeMismatch);
}

#[test]
fn singular_matrices() {
    let program = "sis z = { [1, 2, 3], [2, 4, 6] };\n";

    assert_failure(&format!("{program}inv(z);"), ErrorKind::SingularMatrix);
    assert_failure(&format!("{program}solve(z);"), ErrorKind::SingularMatrix);
    assert_failure(&format!("{program}sis i = inv(z);"), ErrorKind::SingularMatrix);
    assert!(output_of(&format!("{program}det(z);")).contains("Determinant: 0\n"));
    assert_success(&format!("{program}sis u = retU(z);"));
}

#[test]
fn singular_error_names_the_operation() {
    let mut out = Vec::new();
    let err = run_source("sis z = { [0, 0, 1], [0, 0, 1] };\ninv(z);", &Config::default(), &mut out).unwrap_err();

    assert_eq!(err.to_string(),
               "Error on line 2: Operation 'inv' could not be completed (singular matrix?).");
}

#[test]
fn tolerance_is_configurable() {
    let program = "sis s = { [1, 0, 1], [0, 0.1, 1] };\ninv(s);";
    let strict = Config { tolerance: 0.5,
                          ..Config::default() };

    assert!(run_source(program, &Config::default(), &mut Vec::new()).is_ok());
    assert_eq!(run_source(program, &strict, &mut Vec::new()).unwrap_err().kind(),
               ErrorKind::SingularMatrix);
}

#[test]
fn show_prints_any_variable() {
    let out = output_of("int n = 4;\nfloat r = 2.5;\neq v = [1, -2];\nsis s = { [1, 2] };\nshow(n);\nshow(r);\nshow(v);\nshow(s);");

    assert!(out.contains("Value 'n' (type: int): 4\n"));
    assert!(out.contains("Value 'r' (type: float): 2.5\n"));
    assert!(out.contains("Value 'v' (type: eq): [1, -2]\n"));
    assert!(out.contains("Value 's' (type: sis): [[1, 2]]\n"));
    assert_failure("show(missing);", ErrorKind::UndefinedVariable);
}

#[test]
fn execution_stops_at_the_first_error() {
    let context = context_after("int a = 1;\nint b = missing;\nint c = 3;");

    assert_eq!(context.state(), RunState::Failed);
    assert!(context.environment().contains("a"));
    assert!(!context.environment().contains("b"));
    assert!(!context.environment().contains("c"));

    let out = String::from_utf8(context.into_output()).unwrap();
    assert!(!out.contains("Program executed successfully!"));
}

#[test]
fn runs_do_not_share_variables() {
    assert_success("int x = 1;");
    assert_success("int x = 2;");
}

#[test]
fn error_messages_carry_the_line() {
    let err = run_source("int x = 1;\n\nint x = 2;", &Config::default(), &mut Vec::new()).unwrap_err();
    assert_eq!(err.to_string(), "Error on line 3: Variable 'x' has already been declared.");

    let err = run_source("float y = x;", &Config::default(), &mut Vec::new()).unwrap_err();
    assert_eq!(err.to_string(), "Error on line 1: Unknown variable 'x'.");
}

#[test]
fn parse_errors_stop_before_evaluation() {
    assert_failure("int x = ;", ErrorKind::Syntax);
    assert_failure("int x = 4", ErrorKind::Syntax);
    assert_failure("int 5 = 4;", ErrorKind::Syntax);
    assert_failure("solve s;", ErrorKind::Syntax);
    assert_failure("int x = 4 $", ErrorKind::Syntax);

    // Nothing is printed when the program does not parse.
    let mut out = Vec::new();
    let err = run_source("int x = 4;\nint y = ;", &Config::default(), &mut out).unwrap_err();
    assert!(matches!(err, Error::Parse(_)));
    assert!(out.is_empty());
}

#[test]
fn comments_are_ignored() {
    assert_success("// a system\nsis s = { [2, 1, 5], /* second */ [1, -1, 1] };\n/* solve\n it */ solve(s);");
}

struct FailingLinearAlgebra;

impl LinearAlgebra for FailingLinearAlgebra {
    fn inverse(&self, _: &Matrix) -> LinalgResult<Matrix> {
        Err(LinalgError::Singular)
    }

    fn determinant(&self, _: &Matrix) -> LinalgResult<f64> {
        Err(LinalgError::Singular)
    }

    fn transpose(&self, _: &Matrix) -> LinalgResult<Matrix> {
        Err(LinalgError::Singular)
    }

    fn solve(&self, a: &Matrix, b: &[f64]) -> LinalgResult<Vec<f64>> {
        Err(LinalgError::DimensionMismatch { expected: a.rows(),
                                             found:    b.len(), })
    }

    fn lu_decompose(&self, m: &Matrix) -> LinalgResult<LuFactors> {
        Err(LinalgError::NotSquare { rows: m.rows(),
                                     cols: m.cols(), })
    }
}

#[test]
fn every_library_failure_is_a_singular_matrix_error() {
    for op in ["inv", "trans", "retP", "det", "solve"] {
        let program = SourceParser.parse(&format!("{SYSTEM}{op}(s);")).unwrap();
        let mut context =
            Context::with_output(Vec::new()).with_linear_algebra(Box::new(FailingLinearAlgebra));

        let err = context.run(&program).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::SingularMatrix, "{op}: {err}");
    }
}
