use std::{fs, io, path::PathBuf, process::ExitCode};

use clap::Parser;
use lispcalc::{
    logger::{self, LogLevel},
    repl::{self, Options},
};
use tracing::debug;

/// lispcalc evaluates parenthesized arithmetic such as `(+ 1 (* 2 3))`.
///
/// With no expression and no file it starts an interactive session.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Evaluates every line of this file instead of a single expression.
    #[arg(short, long, conflicts_with = "expression")]
    file: Option<PathBuf>,

    /// Prints the tokens and the parsed tree before each result.
    #[arg(short, long)]
    echo: bool,

    /// Loads and saves interactive history at this path.
    #[arg(long)]
    history: Option<PathBuf>,

    /// Raises the log level on stderr; repeat for more detail.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Logs only errors on stderr.
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// A single expression to evaluate.
    expression: Option<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();
    logger::init_with_level(LogLevel::from_flags(args.verbose, args.quiet));

    let options = Options { echo:    args.echo,
                            history: args.history, };

    if let Some(path) = &args.file {
        let script = match fs::read_to_string(path) {
            Ok(script) => script,
            Err(e) => {
                eprintln!("Failed to read the input file '{}': {e}", path.display());
                return ExitCode::FAILURE;
            },
        };
        debug!(path = %path.display(), lines = script.lines().count(), "running script");

        return match repl::run_script(&script, &options, &mut io::stdout().lock()) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("{e}");
                ExitCode::FAILURE
            },
        };
    }

    if let Some(expression) = &args.expression {
        return match repl::evaluate(expression, &options, &mut io::stdout()) {
            Ok(Ok(value)) => {
                println!("=> {value}");
                ExitCode::SUCCESS
            },
            Ok(Err(e)) => {
                eprintln!("Error: {e}");
                ExitCode::FAILURE
            },
            Err(e) => {
                eprintln!("{e}");
                ExitCode::FAILURE
            },
        };
    }

    match repl::run(&options) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        },
    }
}
