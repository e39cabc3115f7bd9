use std::borrow::Cow;

use crate::{ast::Expr, interpreter::value::number::Number};

/// Classifies a single non-parenthesis token.
///
/// Attempts run in a fixed order: a base-10 `i64` literal, then a base-10
/// real literal, then a symbol. Only the first match counts.
///
/// Integer literals out of `i64` range are read as reals. Words such as
/// `inf` or `NaN` stay symbols; only digit-based literals are numbers.
///
/// Digits may be grouped with single underscores, as in `1_000_000`. Each
/// underscore must sit between two digits; otherwise the token is a symbol.
///
/// # Example
/// ```
/// use lispcalc::{ast::Expr, interpreter::parser::atom::parse_atom};
///
/// assert_eq!(parse_atom("-12"), Expr::from(-12));
/// assert_eq!(parse_atom("2.5e-1"), Expr::from(0.25));
/// assert_eq!(parse_atom("+"), Expr::symbol("+"));
/// assert_eq!(parse_atom("1_000"), Expr::from(1000));
/// ```
#[must_use]
pub fn parse_atom(token: &str) -> Expr {
    if let Some(text) = strip_digit_separators(token) {
        if let Some(n) = parse_integer(&text) {
            return Expr::Number(Number::Integer(n));
        }
        if let Some(r) = parse_real(&text) {
            return Expr::Number(Number::Real(r));
        }
    }
    Expr::Symbol(token.to_string())
}

/// Removes `_` digit separators, or returns `None` if one of them is not
/// flanked by digits.
fn strip_digit_separators(token: &str) -> Option<Cow<'_, str>> {
    if !token.contains('_') {
        return Some(Cow::Borrowed(token));
    }

    let bytes = token.as_bytes();
    let grouped = bytes.iter().enumerate().filter(|&(_, &b)| b == b'_').all(|(i, _)| {
                      i > 0
                      && bytes[i - 1].is_ascii_digit()
                      && bytes.get(i + 1).is_some_and(u8::is_ascii_digit)
                  });

    grouped.then(|| Cow::Owned(token.replace('_', "")))
}

fn parse_integer(token: &str) -> Option<i64> {
    token.parse().ok()
}

fn parse_real(token: &str) -> Option<f64> {
    let digits = token.strip_prefix(['+', '-']).unwrap_or(token);
    let literal = digits.chars().any(|c| c.is_ascii_digit())
                  && digits.chars()
                           .all(|c| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-'));

    if literal { token.parse().ok() } else { None }
}

#[cfg(test)]
mod tests {
    use super::parse_atom;
    use crate::ast::Expr;

    #[test]
    fn integers_win_over_reals() {
        assert_eq!(parse_atom("42"), Expr::from(42));
        assert_eq!(parse_atom("+7"), Expr::from(7));
        assert_eq!(parse_atom("-0"), Expr::from(0));
        assert!(matches!(parse_atom("42"), Expr::Number(n) if n.is_integer()));
    }

    #[test]
    fn reals_cover_fractions_and_exponents() {
        assert_eq!(parse_atom("3.25"), Expr::from(3.25));
        assert_eq!(parse_atom(".5"), Expr::from(0.5));
        assert_eq!(parse_atom("1."), Expr::from(1.0));
        assert_eq!(parse_atom("1e3"), Expr::from(1000.0));
        assert_eq!(parse_atom("-2.5E+2"), Expr::from(-250.0));
        assert!(matches!(parse_atom("1e3"), Expr::Number(n) if !n.is_integer()));
    }

    #[test]
    fn oversized_integers_fall_back_to_reals() {
        assert_eq!(parse_atom("99999999999999999999"), Expr::from(1e20));
    }

    #[test]
    fn underscores_group_digits() {
        assert_eq!(parse_atom("1_000"), Expr::from(1000));
        assert_eq!(parse_atom("-1_000_000"), Expr::from(-1_000_000));
        assert_eq!(parse_atom("1_0.2_5"), Expr::from(10.25));
        assert_eq!(parse_atom("1_0e1_0"), Expr::from(10e10));
    }

    #[test]
    fn misplaced_underscores_make_symbols() {
        for token in ["_1", "1_", "1__0", "-_1", "1_.5", "1._5", "1_e5", "_"] {
            assert_eq!(parse_atom(token), Expr::symbol(token), "token {token}");
        }
    }

    #[test]
    fn everything_else_is_a_symbol() {
        for token in ["+", "-", "*", "/", "%", "x", "inf", "NaN", "infinity", "1-", "e5", "1.2.3", "--1"] {
            assert_eq!(parse_atom(token), Expr::symbol(token), "token {token}");
        }
    }
}
