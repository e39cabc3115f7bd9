/// The evaluator module reduces expression trees to numbers.
///
/// The evaluator walks the tree produced by the parser, evaluates every
/// operand of a list and applies the operator named by the list's head.
/// It is pure: no state survives between calls.
///
/// # Responsibilities
/// - Dispatches numbers, symbols and lists.
/// - Implements the variadic `+ - * /` folds and numeric promotion.
/// - Reports unknown operators, malformed forms and division by zero.
pub mod evaluator;
/// The lexer module tokenizes a line of source text.
///
/// Parentheses become single tokens and every other whitespace-separated
/// run becomes an atom token. This stage cannot fail.
pub mod lexer;
/// The parser module builds the expression tree from tokens.
///
/// A recursive descent over lists and atoms, driven by an explicit cursor.
///
/// # Responsibilities
/// - Pairs parentheses and reports any that do not pair up.
/// - Bounds list nesting so deep input fails instead of exhausting the
///   stack.
/// - Classifies atoms as integers, reals or symbols.
/// - Leaves the cursor after the first complete expression.
pub mod parser;
/// The value module defines the numeric result type.
pub mod value;
