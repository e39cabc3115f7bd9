use tracing::trace;

use crate::{
    ast::{Expr, Operator},
    error::EvalError,
    interpreter::value::number::Number,
};

/// Result type used by the evaluator.
pub type EvalResult<T> = Result<T, EvalError>;

/// Evaluates an expression tree to a number.
///
/// Numbers evaluate to themselves. A list evaluates every operand, left to
/// right and without short-circuiting, then applies the operator named by
/// its head symbol. Evaluation is pure: the same tree always gives the
/// same result.
///
/// # Errors
/// - `InvalidExpression` for a symbol outside operator position, an empty
///   list, or a list whose head is not a symbol.
/// - `UnknownOperator` if the head symbol is not one of `+ - * /`.
/// - Any error raised by the operator itself, see
///   [`Operator::apply`](crate::ast::Operator::apply).
///
/// Operand errors surface before operator errors, since operands are
/// evaluated first.
///
/// # Example
/// ```
/// use lispcalc::{ast::Expr, eval, interpreter::value::number::Number};
///
/// let expr = Expr::List(vec![Expr::symbol("+"),
///                            Expr::from(1),
///                            Expr::List(vec![Expr::symbol("*"), Expr::from(2), Expr::from(3)])]);
/// assert_eq!(eval(&expr), Ok(Number::Integer(7)));
/// ```
pub fn eval(expr: &Expr) -> EvalResult<Number> {
    match expr {
        Expr::Number(value) => Ok(*value),
        Expr::List(items) => eval_list(expr, items),
        Expr::Symbol(_) => Err(invalid(expr)),
    }
}

fn eval_list(expr: &Expr, items: &[Expr]) -> EvalResult<Number> {
    let Some((head, operands)) = items.split_first() else {
        return Err(invalid(expr));
    };

    let values = operands.iter().map(eval).collect::<EvalResult<Vec<_>>>()?;

    let Expr::Symbol(name) = head else {
        return Err(invalid(expr));
    };
    let operator =
        Operator::from_symbol(name).ok_or_else(|| EvalError::UnknownOperator { name: name.clone() })?;

    let result = operator.apply(&values)?;
    trace!(%operator, operands = values.len(), %result, "applied operator");
    Ok(result)
}

fn invalid(expr: &Expr) -> EvalError {
    EvalError::InvalidExpression { expr: expr.to_string() }
}
