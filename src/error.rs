/// Parsing errors.
///
/// Raised while turning a token sequence into an expression tree: missing
/// or stray parentheses, input that ends too early and nesting past the
/// parser's depth limit.
pub mod parse_error;
/// Evaluation errors.
///
/// Raised while reducing an expression tree to a number: unknown operators,
/// malformed forms, missing operands and division by zero.
pub mod eval_error;

pub use eval_error::EvalError;
pub use parse_error::{Imbalance, ParseError};

/// Any failure of the tokenize, parse, evaluate pipeline for one line.
///
/// Tokenizing never fails, so this is either a parse or an evaluation
/// error. Both convert with `?`.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// The tokens did not form a complete expression.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The expression could not be reduced to a number.
    #[error(transparent)]
    Eval(#[from] EvalError),
}
