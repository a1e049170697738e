//! Lexical tokens as seen by the front end.
//!
//! Tokens are produced by the lexer; this crate only reads their positions.
//! All coordinates are 1-based and the end column is inclusive, matching the
//! lexer's convention.

use crate::span::Point;

/// Source-position range of one lexical token.
///
/// Immutable and cheap to copy. The token's text lives in the lexer; this
/// crate never needs it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub begin_line: u32,
    pub begin_column: u32,
    pub end_line: u32,
    pub end_column: u32,
}

impl Token {
    pub fn new(begin_line: u32, begin_column: u32, end_line: u32, end_column: u32) -> Self {
        Self {
            begin_line,
            begin_column,
            end_line,
            end_column,
        }
    }

    /// The position of the token's first character.
    pub fn begin(&self) -> Point {
        Point::new(self.begin_line, self.begin_column)
    }

    /// The position of the token's last character (inclusive).
    pub fn end(&self) -> Point {
        Point::new(self.end_line, self.end_column)
    }
}

/// Returns true if the two tokens are adjacent in the input stream with no
/// intervening characters.
///
/// Used by whitespace-sensitive grammar decisions (e.g. telling `a-b` apart
/// from `a - b`).
pub fn are_adjacent(first: &Token, second: &Token) -> bool {
    first.end_line == second.begin_line && first.end_column + 1 == second.begin_column
}

/// The point immediately preceding the token's start, for diagnostics that
/// point just before a token ("insert a semicolon here").
///
/// A token starting at column 1 has no previous position on its line, so its
/// own start is returned unchanged.
pub fn point_before(token: &Token) -> Point {
    if token.begin_column == 1 {
        return token.begin();
    }
    Point::new(token.begin_line, token.begin_column - 1)
}
