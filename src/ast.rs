use std::fmt;

use crate::interpreter::value::number::Number;

/// An arithmetic operator named by the head symbol of a list.
///
/// Operators are resolved from symbols only when a list is evaluated; the
/// parser never looks at them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
}

impl Operator {
    /// Resolves an operator from the text of a symbol.
    ///
    /// # Example
    /// ```
    /// use lispcalc::ast::Operator;
    ///
    /// assert_eq!(Operator::from_symbol("*"), Some(Operator::Mul));
    /// assert_eq!(Operator::from_symbol("%"), None);
    /// ```
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(Self::Add),
            "-" => Some(Self::Sub),
            "*" => Some(Self::Mul),
            "/" => Some(Self::Div),
            _ => None,
        }
    }

    /// The symbol that names this operator.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A node of the expression tree.
///
/// Trees are built bottom-up by the parser from a single token stream and
/// never mutated afterwards; each node is owned by its parent.
///
/// By convention the first element of a `List` is a `Symbol` naming an
/// operator and the rest are operands. Nothing enforces that until the list
/// is evaluated.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric atom.
    Number(Number),
    /// A non-numeric atom.
    Symbol(String),
    /// A parenthesized form.
    List(Vec<Self>),
}

impl Expr {
    /// Shorthand for building a symbol node.
    #[must_use]
    pub fn symbol(name: &str) -> Self {
        Self::Symbol(name.to_string())
    }
}

impl From<Number> for Expr {
    fn from(value: Number) -> Self {
        Self::Number(value)
    }
}

impl From<i64> for Expr {
    fn from(value: i64) -> Self {
        Self::Number(Number::Integer(value))
    }
}

impl From<f64> for Expr {
    fn from(value: f64) -> Self {
        Self::Number(Number::Real(value))
    }
}

impl From<Vec<Self>> for Expr {
    fn from(items: Vec<Self>) -> Self {
        Self::List(items)
    }
}

/// Prints the canonical s-expression form, e.g. `(+ 1 (* 2 3))`.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Symbol(name) => f.write_str(name),
            Self::List(items) => {
                f.write_str("(")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str(")")
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Expr, Operator};

    #[test]
    fn display_prints_nested_lists() {
        let expr = Expr::List(vec![Expr::symbol("+"),
                                   Expr::from(1),
                                   Expr::List(vec![Expr::symbol("*"),
                                                   Expr::from(2.5),
                                                   Expr::from(3)])]);
        assert_eq!(expr.to_string(), "(+ 1 (* 2.5 3))");
        assert_eq!(Expr::List(Vec::new()).to_string(), "()");
    }

    #[test]
    fn operators_round_trip_through_their_symbol() {
        for op in [Operator::Add, Operator::Sub, Operator::Mul, Operator::Div] {
            assert_eq!(Operator::from_symbol(op.symbol()), Some(op));
        }
    }
}
