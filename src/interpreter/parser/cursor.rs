/// Deepest list nesting the parser accepts.
///
/// Parsing, evaluation, printing and dropping all recurse once per level,
/// so this bounds the stack any accepted tree can need.
pub const MAX_DEPTH: usize = 512;

/// A read position into a token slice.
///
/// One cursor lives for one parse. After a successful parse it sits just
/// past the last consumed token, which lets callers decide for themselves
/// whether leftover tokens are an error. It also counts how many lists are
/// open at the current position.
#[derive(Debug, Clone)]
pub struct Cursor<'t, 'a> {
    tokens:   &'t [&'a str],
    position: usize,
    depth:    usize,
}

impl<'t, 'a> Cursor<'t, 'a> {
    /// Creates a cursor at the first token.
    #[must_use]
    pub const fn new(tokens: &'t [&'a str]) -> Self {
        Self { tokens,
               position: 0,
               depth:    0, }
    }

    /// Returns the token under the cursor without consuming it.
    #[must_use]
    pub fn peek(&self) -> Option<&'a str> {
        self.tokens.get(self.position).copied()
    }

    /// Consumes and returns the token under the cursor.
    pub fn advance(&mut self) -> Option<&'a str> {
        let token = self.peek()?;
        self.position += 1;
        Some(token)
    }

    /// Index of the next unconsumed token.
    ///
    /// # Example
    /// ```
    /// use lispcalc::interpreter::parser::{core::parse_with_cursor, cursor::Cursor};
    ///
    /// let tokens = ["(", "+", "1", ")", "9"];
    /// let mut cursor = Cursor::new(&tokens);
    /// parse_with_cursor(&mut cursor).unwrap();
    /// assert_eq!(cursor.position(), 4);
    /// ```
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Records that a list was opened. Returns `false`, without recording
    /// anything, if that would nest deeper than [`MAX_DEPTH`].
    #[must_use]
    pub const fn enter(&mut self) -> bool {
        if self.depth >= MAX_DEPTH {
            return false;
        }
        self.depth += 1;
        true
    }

    /// Records that the innermost open list was closed or abandoned.
    pub const fn leave(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Number of lists currently open.
    #[must_use]
    pub const fn depth(&self) -> usize {
        self.depth
    }

    /// Returns `true` once every token has been consumed.
    #[must_use]
    pub const fn is_at_end(&self) -> bool {
        self.position >= self.tokens.len()
    }

    /// The tokens that have not been consumed yet.
    #[must_use]
    pub fn remaining(&self) -> &'t [&'a str] {
        self.tokens.get(self.position..).unwrap_or_default()
    }
}
