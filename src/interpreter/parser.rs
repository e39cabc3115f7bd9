/// Core parsing logic.
///
/// Entry points and the recursive descent over lists and atoms.
pub mod core;

/// The parse cursor.
///
/// A position into the token slice and the current nesting depth, threaded
/// through the parser by reference.
pub mod cursor;

/// Atom classification.
///
/// Decides whether a lexeme is an integer, a real or a symbol.
pub mod atom;
