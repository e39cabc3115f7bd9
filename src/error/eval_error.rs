use crate::ast::Operator;

/// Represents all errors that can occur while evaluating an expression tree.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EvalError {
    /// The head symbol of a list does not name an operator.
    #[error("Unknown operator: {name}")]
    UnknownOperator {
        /// The symbol as written.
        name: String,
    },
    /// A symbol outside operator position, an empty list, or a list whose
    /// head is not a symbol.
    #[error("Cannot evaluate: {expr}")]
    InvalidExpression {
        /// The offending expression, printed back in s-expression form.
        expr: String,
    },
    /// A division step had a zero divisor.
    #[error("Division by zero.")]
    DivisionByZero,
    /// `-` or `/` was applied to no operands.
    #[error("Operator '{operator}' needs at least one operand.")]
    ArgumentCountMismatch {
        /// The operator that was starved.
        operator: Operator,
    },
}
