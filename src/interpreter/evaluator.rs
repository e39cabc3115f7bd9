/// Core evaluation logic.
///
/// Walks the expression tree and dispatches lists to their operator.
pub mod core;

/// Arithmetic operator evaluation.
///
/// Variadic folds for `+ - * /`, integer/real promotion (including on
/// integer overflow) and the zero-divisor check.
pub mod arithmetic;
