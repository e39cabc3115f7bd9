use crate::{
    ast::Operator,
    error::EvalError,
    interpreter::{evaluator::core::EvalResult, value::number::Number},
};

impl Operator {
    /// Applies the operator to already evaluated operands.
    ///
    /// - `+` sums its operands; no operands give `0`.
    /// - `*` multiplies its operands; no operands give `1`.
    /// - `-` negates a single operand, otherwise subtracts every later
    ///   operand from the first, left to right.
    /// - `/` divides the first operand by every later operand, left to
    ///   right. A single operand is returned unchanged.
    ///
    /// # Errors
    /// - `ArgumentCountMismatch` for `-` or `/` without operands.
    /// - `DivisionByZero` if any divisor is zero.
    ///
    /// # Example
    /// ```
    /// use lispcalc::{ast::Operator, interpreter::value::number::Number};
    ///
    /// let ten = Number::Integer(10);
    /// let two = Number::Integer(2);
    /// let five = Number::Integer(5);
    ///
    /// assert_eq!(Operator::Div.apply(&[ten, two, five]), Ok(Number::Real(1.0)));
    /// assert_eq!(Operator::Sub.apply(&[five]), Ok(Number::Integer(-5)));
    /// assert_eq!(Operator::Add.apply(&[]), Ok(Number::Integer(0)));
    /// ```
    pub fn apply(self, operands: &[Number]) -> EvalResult<Number> {
        match (self, operands) {
            (Self::Add, _) => fold(self, Number::Integer(0), operands),
            (Self::Mul, _) => fold(self, Number::Integer(1), operands),
            (Self::Sub | Self::Div, []) => Err(EvalError::ArgumentCountMismatch { operator: self }),
            (Self::Sub, [only]) => negate(*only),
            (Self::Sub | Self::Div, [first, rest @ ..]) => fold(self, *first, rest),
        }
    }
}

fn fold(op: Operator, init: Number, operands: &[Number]) -> EvalResult<Number> {
    operands.iter()
            .try_fold(init, |acc, &operand| eval_scalar_op(op, acc, operand))
}

fn negate(value: Number) -> EvalResult<Number> {
    match value {
        Number::Integer(n) => Ok(n.checked_neg()
                                  .map_or(Number::Real(-value.as_real()), Number::Integer)),
        Number::Real(r) => Ok(Number::Real(-r)),
    }
}

/// Evaluates one binary step of an operator.
///
/// Two integers stay integers under `+ - *` while the result fits in an
/// `i64`; past that range the step is computed in `f64` instead, the same
/// way oversized integer literals become reals. A real on either side
/// promotes the other operand. Division always produces a real, and a zero
/// divisor is an error for both integer and real operands.
///
/// # Errors
/// `DivisionByZero`.
///
/// # Example
/// ```
/// use lispcalc::{
///     ast::Operator,
///     interpreter::{evaluator::arithmetic::eval_scalar_op, value::number::Number},
/// };
///
/// let sum = eval_scalar_op(Operator::Add, Number::Integer(1), Number::Real(2.5)).unwrap();
/// assert_eq!(sum, Number::Real(3.5));
///
/// let quotient = eval_scalar_op(Operator::Div, Number::Integer(7), Number::Integer(2)).unwrap();
/// assert_eq!(quotient, Number::Real(3.5));
///
/// let big = eval_scalar_op(Operator::Add, Number::Integer(i64::MAX), Number::Integer(1)).unwrap();
/// assert_eq!(big, Number::Real(9_223_372_036_854_775_808.0));
/// ```
pub fn eval_scalar_op(op: Operator, left: Number, right: Number) -> EvalResult<Number> {
    use Number::{Integer, Real};
    use Operator::{Add, Div, Mul, Sub};

    let (x, y) = (left.as_real(), right.as_real());

    match (op, left, right) {
        (Div, ..) if right.is_zero() => Err(EvalError::DivisionByZero),
        (Div, ..) => Ok(Real(x / y)),

        (Add, Integer(a), Integer(b)) => Ok(a.checked_add(b).map_or(Real(x + y), Integer)),
        (Sub, Integer(a), Integer(b)) => Ok(a.checked_sub(b).map_or(Real(x - y), Integer)),
        (Mul, Integer(a), Integer(b)) => Ok(a.checked_mul(b).map_or(Real(x * y), Integer)),

        (Add, ..) => Ok(Real(x + y)),
        (Sub, ..) => Ok(Real(x - y)),
        (Mul, ..) => Ok(Real(x * y)),
    }
}
