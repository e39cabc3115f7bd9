use tracing::trace;

use crate::{
    ast::Expr,
    error::{Imbalance, ParseError},
    interpreter::parser::{
        atom::parse_atom,
        cursor::{Cursor, MAX_DEPTH},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses the first complete expression in `tokens`.
///
/// Only the first balanced expression is consumed; anything after it is
/// ignored. Use [`parse_complete`] to reject trailing tokens, or
/// [`parse_with_cursor`] to inspect where parsing stopped.
///
/// # Errors
/// - `UnexpectedEndOfInput` if `tokens` is empty.
/// - `UnbalancedParentheses` if a `(` is never closed or the expression
///   starts with `)`.
/// - `NestingTooDeep` if lists nest deeper than
///   [`MAX_DEPTH`](crate::interpreter::parser::cursor::MAX_DEPTH).
///
/// # Example
/// ```
/// use lispcalc::{ast::Expr, error::ParseError, parse};
///
/// let expr = parse(&["(", "+", "1", "2", ")"]).unwrap();
/// assert_eq!(expr, Expr::List(vec![Expr::symbol("+"), Expr::from(1), Expr::from(2)]));
///
/// assert!(matches!(parse(&[]), Err(ParseError::UnexpectedEndOfInput { .. })));
/// assert!(matches!(parse(&["("]), Err(ParseError::UnbalancedParentheses { .. })));
/// ```
pub fn parse(tokens: &[&str]) -> ParseResult<Expr> {
    parse_with_cursor(&mut Cursor::new(tokens))
}

/// Parses one expression and requires that it uses up every token.
///
/// # Errors
/// Everything [`parse`] reports, plus `UnexpectedTrailingTokens` when
/// tokens remain after the expression.
///
/// # Example
/// ```
/// use lispcalc::{error::ParseError, parse_complete};
///
/// assert!(parse_complete(&["(", "-", "5", ")"]).is_ok());
/// assert!(matches!(parse_complete(&["1", "2"]),
///                  Err(ParseError::UnexpectedTrailingTokens { position: 1, .. })));
/// ```
pub fn parse_complete(tokens: &[&str]) -> ParseResult<Expr> {
    let mut cursor = Cursor::new(tokens);
    let expr = parse_with_cursor(&mut cursor)?;

    match cursor.peek() {
        None => Ok(expr),
        Some(token) => Err(ParseError::UnexpectedTrailingTokens { token:    token.to_string(),
                                                                  position: cursor.position(), }),
    }
}

/// Parses one expression starting at the cursor and leaves the cursor just
/// past it.
///
/// # Errors
/// Same as [`parse`], with positions counted from the start of the token
/// slice the cursor was created over.
pub fn parse_with_cursor(cursor: &mut Cursor<'_, '_>) -> ParseResult<Expr> {
    let expr = parse_expression(cursor)?;
    trace!(consumed = cursor.position(), %expr, "parsed expression");
    Ok(expr)
}

/// Parses a list or an atom, depending on the token under the cursor.
///
/// Grammar: `expression := list | atom`
fn parse_expression(cursor: &mut Cursor<'_, '_>) -> ParseResult<Expr> {
    match cursor.peek() {
        Some("(") => parse_list(cursor),
        Some(")") => Err(ParseError::UnbalancedParentheses { position:  cursor.position(),
                                                             imbalance: Imbalance::Unmatched, }),
        Some(token) => {
            cursor.advance();
            Ok(parse_atom(token))
        },
        None => Err(ParseError::UnexpectedEndOfInput { position: cursor.position() }),
    }
}

/// Parses `(` expression* `)`.
///
/// Grammar: `list := "(" expression* ")"`
///
/// The cursor must be on the opening parenthesis.
fn parse_list(cursor: &mut Cursor<'_, '_>) -> ParseResult<Expr> {
    let open = cursor.position();
    if !cursor.enter() {
        return Err(ParseError::NestingTooDeep { position: open,
                                                limit:    MAX_DEPTH, });
    }
    cursor.advance();

    let list = parse_items(cursor, open);
    cursor.leave();
    list
}

fn parse_items(cursor: &mut Cursor<'_, '_>, open: usize) -> ParseResult<Expr> {
    let mut items = Vec::new();
    loop {
        match cursor.peek() {
            Some(")") => {
                cursor.advance();
                return Ok(Expr::List(items));
            },
            Some(_) => items.push(parse_expression(cursor)?),
            None => {
                return Err(ParseError::UnbalancedParentheses { position:  open,
                                                               imbalance: Imbalance::Unclosed, });
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{parse, parse_complete, parse_with_cursor};
    use crate::{
        ast::Expr,
        error::{Imbalance, ParseError},
        interpreter::parser::cursor::{Cursor, MAX_DEPTH},
    };

    fn nested(depth: usize) -> Vec<&'static str> {
        let mut tokens = vec!["("; depth];
        tokens.push("1");
        tokens.extend(vec![")"; depth]);
        tokens
    }

    fn list(items: Vec<Expr>) -> Expr {
        Expr::List(items)
    }

    #[test]
    fn nested_lists_keep_their_order() {
        let tokens = ["(", "+", "1", "(", "*", "2", "3", ")", ")"];
        let expected = list(vec![Expr::symbol("+"),
                                 Expr::from(1),
                                 list(vec![Expr::symbol("*"), Expr::from(2), Expr::from(3)])]);
        assert_eq!(parse(&tokens), Ok(expected));
    }

    #[test]
    fn bare_atom_is_a_complete_expression() {
        assert_eq!(parse(&["7"]), Ok(Expr::from(7)));
        assert_eq!(parse(&["x"]), Ok(Expr::symbol("x")));
    }

    #[test]
    fn empty_list_parses() {
        assert_eq!(parse(&["(", ")"]), Ok(list(Vec::new())));
    }

    #[test]
    fn cursor_stops_after_first_expression() {
        let tokens = ["(", "+", "1", ")", "(", "-", "2", ")"];
        let mut cursor = Cursor::new(&tokens);
        parse_with_cursor(&mut cursor).unwrap();
        assert_eq!(cursor.position(), 4);
        assert_eq!(cursor.remaining(), &["(", "-", "2", ")"]);

        let second = parse_with_cursor(&mut cursor).unwrap();
        assert_eq!(second, list(vec![Expr::symbol("-"), Expr::from(2)]));
        assert!(cursor.is_at_end());
    }

    #[test]
    fn cursor_after_bare_atom_is_one() {
        let tokens = ["5", ")"];
        let mut cursor = Cursor::new(&tokens);
        assert_eq!(parse_with_cursor(&mut cursor), Ok(Expr::from(5)));
        assert_eq!(cursor.position(), 1);
    }

    #[test]
    fn trailing_tokens_are_ignored_by_default() {
        assert_eq!(parse(&["1", "2", ")"]), Ok(Expr::from(1)));
    }

    #[test]
    fn strict_parse_rejects_trailing_tokens() {
        assert_eq!(parse_complete(&["(", "+", ")", ")"]),
                   Err(ParseError::UnexpectedTrailingTokens { token:    ")".to_string(),
                                                              position: 3, }));
    }

    #[test]
    fn empty_input_is_unexpected_end() {
        assert_eq!(parse(&[]), Err(ParseError::UnexpectedEndOfInput { position: 0 }));
    }

    #[test]
    fn unclosed_list_reports_its_opening_parenthesis() {
        assert_eq!(parse(&["("]),
                   Err(ParseError::UnbalancedParentheses { position:  0,
                                                           imbalance: Imbalance::Unclosed, }));
        assert_eq!(parse(&["(", "+", "(", "1", ")"]),
                   Err(ParseError::UnbalancedParentheses { position:  0,
                                                           imbalance: Imbalance::Unclosed, }));
        assert_eq!(parse(&["(", "+", "(", "1"]),
                   Err(ParseError::UnbalancedParentheses { position:  2,
                                                           imbalance: Imbalance::Unclosed, }));
    }

    #[test]
    fn nesting_up_to_the_limit_parses() {
        let tokens = nested(MAX_DEPTH);
        let mut cursor = Cursor::new(&tokens);
        assert!(parse_with_cursor(&mut cursor).is_ok());
        assert!(cursor.is_at_end());
        assert_eq!(cursor.depth(), 0);
    }

    #[test]
    fn nesting_past_the_limit_is_an_error() {
        assert_eq!(parse(&nested(MAX_DEPTH + 1)),
                   Err(ParseError::NestingTooDeep { position: MAX_DEPTH,
                                                    limit:    MAX_DEPTH, }));
    }

    #[test]
    fn a_flood_of_open_parentheses_is_an_error() {
        let tokens = vec!["("; 1_000_000];
        assert!(matches!(parse(&tokens), Err(ParseError::NestingTooDeep { .. })));
    }

    #[test]
    fn sibling_lists_do_not_accumulate_depth() {
        let mut tokens = vec!["(", "+"];
        for _ in 0..(MAX_DEPTH * 2) {
            tokens.extend(["(", "+", "1", ")"]);
        }
        tokens.push(")");
        assert!(parse(&tokens).is_ok());
    }

    #[test]
    fn leading_close_parenthesis_is_unmatched() {
        assert_eq!(parse(&[")"]),
                   Err(ParseError::UnbalancedParentheses { position:  0,
                                                           imbalance: Imbalance::Unmatched, }));
    }
}
