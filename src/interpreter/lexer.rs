use logos::Logos;

/// The three shapes a lexeme can take.
///
/// The tokenizer hands out plain string slices; this enum only drives the
/// `logos` automaton that finds their boundaries.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
#[logos(skip r"\s+")]
pub enum Lexeme {
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// Any run of characters that are neither whitespace nor parentheses,
    /// such as `42`, `-1.5e3` or `+`.
    #[regex(r"[^\s()]+")]
    Atom,
}

/// Splits a line of source text into tokens.
///
/// `(` and `)` always stand alone; every other maximal run of
/// non-whitespace characters is a single token. Whitespace is discarded.
/// Tokens borrow from `source` and come back in input order.
///
/// Tokenizing never fails. Unbalanced parentheses are left for the parser
/// to report.
///
/// # Example
/// ```
/// use lispcalc::tokenize;
///
/// assert_eq!(tokenize("(+ 1 2)"), vec!["(", "+", "1", "2", ")"]);
/// assert_eq!(tokenize("(*(- 4)x)"), vec!["(", "*", "(", "-", "4", ")", "x", ")"]);
/// assert!(tokenize("   ").is_empty());
/// ```
#[must_use]
pub fn tokenize(source: &str) -> Vec<&str> {
    let mut lexer = Lexeme::lexer(source);
    let mut tokens = Vec::new();

    // The three rules plus the skip cover every character, so no lexeme is
    // ever an error.
    while lexer.next().is_some() {
        tokens.push(lexer.slice());
    }

    tokens
}
