//! Interactive loop and script runner.
//!
//! Both front ends feed lines through [`handle_line`], which owns the
//! per-line behaviour: `exit`/`quit`, skipping blank lines, optional echo of
//! tokens and tree, and printing either `=> value` or `Error: message`.

use std::{
    io::{self, Write},
    path::PathBuf,
};

use rustyline::{DefaultEditor, error::ReadlineError};
use tracing::{debug, info};

use crate::{Error, Number, eval, parse, tokenize};

const PROMPT: &str = "lisp> ";

/// Front end settings, filled in from the command line.
#[derive(Debug, Clone, Default)]
pub struct Options {
    /// Print `Tokens: [...]` and `AST: ...` before each result.
    pub echo:    bool,
    /// Where the interactive history is loaded from and saved to.
    pub history: Option<PathBuf>,
}

/// What the loop should do after a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

/// A script line that failed, or output that could not be written.
#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    #[error("Error on line {line}: {source}")]
    Line {
        /// One-based line number in the script.
        line:   usize,
        source: Error,
    },
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Runs one line of user input and writes its outcome to `out`.
///
/// `exit` and `quit` (any case) print `Goodbye!` and ask the caller to
/// stop. Blank lines print nothing. Evaluation errors are printed, not
/// returned; only failures to write are.
///
/// # Example
/// ```
/// use lispcalc::repl::{Control, Options, handle_line};
///
/// let mut out = Vec::new();
/// let control = handle_line("(* 3 4)", &Options::default(), &mut out).unwrap();
///
/// assert_eq!(control, Control::Continue);
/// assert_eq!(String::from_utf8(out).unwrap(), "=> 12\n\n");
/// ```
pub fn handle_line(line: &str, options: &Options, out: &mut impl Write) -> io::Result<Control> {
    let trimmed = line.trim();

    if trimmed.eq_ignore_ascii_case("exit") || trimmed.eq_ignore_ascii_case("quit") {
        writeln!(out, "Goodbye!")?;
        return Ok(Control::Quit);
    }
    if trimmed.is_empty() {
        return Ok(Control::Continue);
    }

    match evaluate(trimmed, options, out)? {
        Ok(value) => writeln!(out, "=> {value}")?,
        Err(e) => writeln!(out, "Error: {e}")?,
    }
    writeln!(out)?;

    Ok(Control::Continue)
}

/// Runs every non-blank line of `source` in order and prints each result.
///
/// Stops at the first line that fails.
///
/// # Errors
/// `ScriptError::Line` with the one-based line number of the failing line,
/// or `ScriptError::Io` if output could not be written.
pub fn run_script(source: &str, options: &Options, out: &mut impl Write) -> Result<(), ScriptError> {
    for (index, line) in source.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match evaluate(line, options, out)? {
            Ok(value) => writeln!(out, "=> {value}")?,
            Err(source) => {
                return Err(ScriptError::Line { line: index + 1,
                                               source });
            },
        }
    }

    Ok(())
}

/// Starts the interactive loop on the terminal.
///
/// Ctrl-C and Ctrl-D leave the loop the same way `exit` does.
///
/// # Errors
/// Fails if the terminal cannot be driven or stdout cannot be written.
pub fn run(options: &Options) -> Result<(), ReadlineError> {
    print_banner();

    let mut editor = DefaultEditor::new()?;
    if let Some(path) = &options.history
       && let Err(e) = editor.load_history(path)
    {
        debug!(path = %path.display(), error = %e, "no history loaded");
    }

    let stdout = io::stdout();
    loop {
        match editor.readline(PROMPT) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    editor.add_history_entry(line.as_str())?;
                }
                if handle_line(&line, options, &mut stdout.lock())? == Control::Quit {
                    break;
                }
            },
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => {
                println!("\nGoodbye!");
                break;
            },
            Err(e) => return Err(e),
        }
    }

    if let Some(path) = &options.history {
        editor.save_history(path)?;
        info!(path = %path.display(), "saved history");
    }

    Ok(())
}

/// Runs the pipeline on one line, echoing stages to `out` when asked.
///
/// The outer result is output failure, the inner one the line's outcome.
pub fn evaluate(line: &str,
            options: &Options,
            out: &mut impl Write)
            -> io::Result<Result<Number, Error>> {
    let tokens = tokenize(line);
    if options.echo {
        writeln!(out, "Tokens: {tokens:?}")?;
    }

    let expr = match parse(&tokens) {
        Ok(expr) => expr,
        Err(e) => return Ok(Err(e.into())),
    };
    if options.echo {
        writeln!(out, "AST: {expr}")?;
    }

    Ok(eval(&expr).map_err(Error::from))
}

fn print_banner() {
    let rule = "=".repeat(50);
    println!("{rule}");
    println!("Welcome to lispcalc!");
    println!("{rule}");
    println!("Type expressions and see the results.");
    println!("Examples:");
    println!("  (+ 1 2)");
    println!("  (* 3 4)");
    println!("  (+ 1 (* 2 3))");
    println!();
    println!("Type 'exit' or 'quit' to leave.");
    println!("{rule}");
    println!();
}

#[cfg(test)]
mod tests {
    use super::{Control, Options, ScriptError, handle_line, run_script};

    fn run(line: &str, options: &Options) -> (Control, String) {
        let mut out = Vec::new();
        let control = handle_line(line, options, &mut out).unwrap();
        (control, String::from_utf8(out).unwrap())
    }

    #[test]
    fn exit_commands_quit_in_any_case() {
        for line in ["exit", "quit", "EXIT", "  Quit  "] {
            assert_eq!(run(line, &Options::default()), (Control::Quit, "Goodbye!\n".to_string()));
        }
    }

    #[test]
    fn blank_lines_print_nothing() {
        assert_eq!(run("   ", &Options::default()), (Control::Continue, String::new()));
    }

    #[test]
    fn errors_are_printed_and_the_loop_continues() {
        let (control, out) = run("(% 1 2)", &Options::default());
        assert_eq!(control, Control::Continue);
        assert_eq!(out, "Error: Unknown operator: %\n\n");
    }

    #[test]
    fn echo_shows_tokens_and_tree() {
        let options = Options { echo: true,
                                ..Options::default() };
        let (_, out) = run("(+ 1 (* 2 3))", &options);
        assert_eq!(out,
                   "Tokens: [\"(\", \"+\", \"1\", \"(\", \"*\", \"2\", \"3\", \")\", \")\"]\n\
                    AST: (+ 1 (* 2 3))\n\
                    => 7\n\n");
    }

    #[test]
    fn echo_stops_before_the_tree_on_parse_errors() {
        let options = Options { echo: true,
                                ..Options::default() };
        let (_, out) = run("(", &options);
        assert_eq!(out,
                   "Tokens: [\"(\"]\n\
                    Error: Unbalanced parentheses at token 0: '(' is never closed.\n\n");
    }

    #[test]
    fn scripts_print_one_result_per_line() {
        let mut out = Vec::new();
        run_script("(+ 1 2)\n\n(/ 1 4)\n", &Options::default(), &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "=> 3\n=> 0.25\n");
    }

    #[test]
    fn scripts_stop_at_the_first_failing_line() {
        let mut out = Vec::new();
        let err = run_script("(+ 1 2)\n(/ 1 0)\n(+ 3 4)\n", &Options::default(), &mut out).unwrap_err();

        assert!(matches!(err, ScriptError::Line { line: 2, .. }));
        assert_eq!(err.to_string(), "Error on line 2: Division by zero.");
        assert_eq!(String::from_utf8(out).unwrap(), "=> 3\n");
    }
}
