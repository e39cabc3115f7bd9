//! # lispcalc
//!
//! lispcalc is a tiny interpreter for a parenthesized arithmetic language, a
//! Lisp restricted to `+`, `-`, `*` and `/`:
//!
//! ```text
//! lisp> (+ 1 (* 2 3))
//! => 7
//! ```
//!
//! A line goes through three stages: [`tokenize`] splits it into tokens,
//! [`parse`] turns the tokens into an [`ast::Expr`] tree, and [`eval`]
//! reduces the tree to a [`Number`]. [`run_line`] chains all three.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use tracing::debug;

/// Defines the expression tree.
///
/// This module declares the `Expr` enum built by the parser and walked by
/// the evaluator, and the `Operator` enum that list heads resolve to.
pub mod ast;
/// Provides the error types for parsing and evaluation.
///
/// Each stage has its own enum; [`error::Error`] wraps both for callers
/// that run the whole pipeline.
pub mod error;
/// Ties together lexing, parsing and evaluation.
pub mod interpreter;
/// Logging setup for the command line front end.
pub mod logger;
/// The interactive read, evaluate, print loop.
pub mod repl;

pub use error::Error;
pub use interpreter::{
    evaluator::core::eval,
    lexer::tokenize,
    parser::core::{parse, parse_complete},
    value::number::Number,
};

/// Tokenizes, parses and evaluates one line of source text.
///
/// Like [`parse`], only the first expression on the line is used and any
/// tokens after it are ignored.
///
/// # Errors
/// Returns [`Error::Parse`] if the line does not hold a complete expression
/// and [`Error::Eval`] if the expression cannot be evaluated.
///
/// # Examples
/// ```
/// use lispcalc::{Number, run_line};
///
/// assert_eq!(run_line("(+ 1 (* 2 3))").unwrap(), Number::Integer(7));
/// assert_eq!(run_line("(/ 10 2 5)").unwrap(), Number::Real(1.0));
///
/// // An unknown operator is an evaluation error, not a panic.
/// assert!(run_line("(% 1 2)").is_err());
/// // So is an unclosed list.
/// assert!(run_line("(+ 1 2").is_err());
/// ```
pub fn run_line(line: &str) -> Result<Number, Error> {
    let tokens = tokenize(line);
    debug!(count = tokens.len(), "tokenized line");

    let expr = parse(&tokens)?;
    debug!(%expr, "parsed line");

    Ok(eval(&expr)?)
}
