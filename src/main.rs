use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
    process,
};

use clap::Parser;
use prosis::{
    config::Config,
    interpreter::{
        evaluator::core::Context,
        lexer::{tokenize, write_listing},
        linalg::DEFAULT_TOLERANCE,
        parser::core::parse_records,
    },
};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// prosis runs programs that declare numbers, equations and systems of linear
/// equations and apply matrix operations to them.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path of the program to run.
    input: PathBuf,

    /// Do not print the parsed syntax tree.
    #[arg(long)]
    no_tree: bool,

    /// Do not write the token listing next to the input file.
    #[arg(long)]
    no_tokens: bool,

    /// Relative pivot tolerance below which a matrix is treated as singular.
    #[arg(long, default_value_t = DEFAULT_TOLERANCE, value_parser = parse_tolerance)]
    tolerance: f64,
}

/// Accepts finite, non-negative tolerances only.
fn parse_tolerance(arg: &str) -> Result<f64, String> {
    let tolerance = arg.parse::<f64>()
                       .map_err(|e| format!("'{arg}' is not a number: {e}"))?;

    if !tolerance.is_finite() || tolerance < 0.0 {
        return Err(format!("'{arg}' must be a finite, non-negative number"));
    }
    Ok(tolerance)
}

impl Args {
    fn config(&self) -> Config {
        Config { tolerance:     self.tolerance,
                 render_tree:   !self.no_tree,
                 token_listing: !self.no_tokens, }
    }
}

fn main() {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                                                                                   EnvFilter::new("warn")
                                                                               }))
                             .with_writer(io::stderr)
                             .init();

    let args = Args::parse();
    let config = args.config();

    let source = fs::read_to_string(&args.input).unwrap_or_else(|_| {
                                                     eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                                                               args.input.display());
                                                     process::exit(1);
                                                 });

    if let Err(e) = run(&args.input, &source, &config) {
        eprintln!("{e}");
        process::exit(1);
    }
}

/// Lexes, parses and evaluates one file, printing to standard output.
fn run(input: &Path, source: &str, config: &Config) -> Result<(), prosis::error::Error> {
    let records = tokenize(source)?;

    if config.token_listing {
        let path = listing_path(input);
        let mut file = io::BufWriter::new(fs::File::create(&path)?);
        write_listing(&records, &mut file)?;
        file.flush()?;
        info!(path = %path.display(), tokens = records.len(), "wrote token listing");
    }

    let program = parse_records(&records)?;
    debug!(statements = program.statements.len(), "parsed program");

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if config.render_tree {
        writeln!(out, "{program}")?;
    }

    let mut context = Context::with_config(config, &mut out);
    context.run(&program)?;
    Ok(())
}

/// `<dir>/<stem>_tokens.txt` for an input file `<dir>/<stem>.<ext>`.
fn listing_path(input: &Path) -> PathBuf {
    let stem = input.file_stem()
                    .map_or_else(|| "program".into(), |s| s.to_string_lossy());
    input.with_file_name(format!("{stem}_tokens.txt"))
}
