use std::fmt;

/// Which way a parenthesis failed to pair up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Imbalance {
    /// A `(` ran into the end of input before its `)`.
    Unclosed,
    /// A `)` appeared with nothing open.
    Unmatched,
}

impl fmt::Display for Imbalance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unclosed => f.write_str("'(' is never closed"),
            Self::Unmatched => f.write_str("')' has no matching '('"),
        }
    }
}

/// Represents all errors that can occur while parsing a token sequence.
///
/// Positions are token indices into the sequence handed to the parser.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// There was nothing left to parse where an expression was required.
    #[error("Unexpected end of input at token {position}.")]
    UnexpectedEndOfInput {
        /// Index one past the last token.
        position: usize,
    },
    /// A parenthesis without a partner.
    #[error("Unbalanced parentheses at token {position}: {imbalance}.")]
    UnbalancedParentheses {
        /// Index of the offending parenthesis.
        position:  usize,
        /// Whether it was left open or closed something that was not open.
        imbalance: Imbalance,
    },
    /// Lists were nested deeper than the parser allows.
    #[error("Nesting too deep at token {position}: more than {limit} open lists.")]
    NestingTooDeep {
        /// Index of the `(` that crossed the limit.
        position: usize,
        /// The maximum depth.
        limit:    usize,
    },
    /// Tokens remained after a complete expression in strict parsing.
    #[error("Extra tokens after expression starting at token {position}: {token}")]
    UnexpectedTrailingTokens {
        /// The first token that was not consumed.
        token:    String,
        /// Its index.
        position: usize,
    },
}
