/// The numeric value type.
///
/// Evaluation always reduces an expression to a single `Number`, either a
/// 64 bit integer or a double precision real.
pub mod number;
