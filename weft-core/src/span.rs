//! Source spans attached to syntax nodes for diagnostics.
//!
//! A node's span is built once at parse time by merging the positions of the
//! tokens that compose it ([`merge_span`]) and then held immutably for the
//! node's lifetime. Span errors are contract violations — a bug in the
//! grammar or AST construction, never in user template text — so callers
//! should treat them as fatal.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::token::Token;

/// A single 1-based line/column position.
///
/// Ordering is lexicographic: by line, then by column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point {
    pub line: u32,
    pub column: u32,
}

impl Point {
    pub fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A validated source range covering one or more tokens, plus the file it
/// came from.
///
/// The degenerate form (no range) means "no known range" and is produced for
/// completely empty source files.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SourceSpan {
    file_path: String,
    range: Option<(Point, Point)>,
}

impl SourceSpan {
    /// Create a span covering `begin` through `end` (both inclusive).
    ///
    /// Fails with [`SpanError::InvalidRange`] if `end` precedes `begin`.
    pub fn new(
        file_path: impl Into<String>,
        begin: Point,
        end: Point,
    ) -> Result<Self, SpanError> {
        if end < begin {
            return Err(SpanError::InvalidRange { begin, end });
        }
        Ok(Self {
            file_path: file_path.into(),
            range: Some((begin, end)),
        })
    }

    /// Create the degenerate "no known range" span for an empty file.
    pub fn unknown(file_path: impl Into<String>) -> Self {
        Self {
            file_path: file_path.into(),
            range: None,
        }
    }

    pub fn file_path(&self) -> &str {
        &self.file_path
    }

    /// True unless this is the degenerate empty-file span.
    pub fn is_known(&self) -> bool {
        self.range.is_some()
    }

    pub fn begin(&self) -> Option<Point> {
        self.range.map(|(b, _)| b)
    }

    pub fn end(&self) -> Option<Point> {
        self.range.map(|(_, e)| e)
    }
}

impl fmt::Display for SourceSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.range {
            Some((begin, end)) => write!(f, "{}:{}-{}", self.file_path, begin, end),
            None => write!(f, "{}", self.file_path),
        }
    }
}

/// Contract violations raised while building spans.
///
/// These indicate a bug in the calling compiler stage; there is no recovery
/// path because continuing would silently produce wrong diagnostics.
#[derive(Debug, thiserror::Error)]
pub enum SpanError {
    #[error("merge_span called with no tokens")]
    NoTokens,

    #[error("tokens not in strictly increasing order: token at {at} does not follow {previous}")]
    NonMonotonicTokens { previous: Point, at: Point },

    #[error("span end {end} precedes begin {begin}")]
    InvalidRange { begin: Point, end: Point },
}

/// Merge the positions of the tokens composing one syntax node into a single
/// span.
///
/// The tokens must be supplied in strictly increasing position order: each
/// token after the first must begin strictly later than the running begin
/// and end strictly later than the running end. Gaps between tokens
/// (whitespace) are silently covered by the result.
///
/// A single all-zero token is the lexer's sentinel for a completely empty
/// file and yields the degenerate path-only span.
pub fn merge_span(file_path: impl Into<String>, tokens: &[Token]) -> Result<SourceSpan, SpanError> {
    let first = tokens.first().ok_or(SpanError::NoTokens)?;
    let begin = first.begin();
    let mut end = first.end();

    for next in &tokens[1..] {
        if next.begin() <= begin {
            return Err(SpanError::NonMonotonicTokens {
                previous: begin,
                at: next.begin(),
            });
        }
        if next.end() <= end {
            return Err(SpanError::NonMonotonicTokens {
                previous: end,
                at: next.end(),
            });
        }
        end = next.end();
    }

    // This special case happens for completely empty files.
    if begin == Point::new(0, 0) && end == Point::new(0, 0) {
        return Ok(SourceSpan::unknown(file_path));
    }
    SourceSpan::new(file_path, begin, end)
}
