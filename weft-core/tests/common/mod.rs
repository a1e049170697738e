//! Shared test utilities.
//!
//! Provides helpers for:
//! - Building token streams with readable positions
//! - Building small map values for function tests

#![allow(dead_code)]

use weft_core::{Token, Value};

/// Build a token from `(begin_line, begin_column, end_line, end_column)`.
pub fn tok(bl: u32, bc: u32, el: u32, ec: u32) -> Token {
    Token::new(bl, bc, el, ec)
}

/// Tokenize a single line of source into one token per non-space run,
/// 1-based columns, inclusive ends. Good enough for span tests.
///
/// # Example
/// ```ignore
/// let tokens = line_tokens("let x"); // [1:1-1:3, 1:5-1:5]
/// ```
pub fn line_tokens(line: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut start: Option<usize> = None;
    for (i, c) in line.char_indices() {
        match (c == ' ', start) {
            (false, None) => start = Some(i),
            (true, Some(s)) => {
                tokens.push(tok(1, s as u32 + 1, 1, i as u32));
                start = None;
            }
            _ => {}
        }
    }
    if let Some(s) = start {
        tokens.push(tok(1, s as u32 + 1, 1, line.len() as u32));
    }
    tokens
}

/// The map fixture used by the cross-backend `keys` tests.
pub fn sample_map() -> Value {
    Value::map([
        ("boo", Value::from("bar")),
        ("foo", Value::from(2)),
        ("goo", Value::map([("moo", Value::from(4))])),
    ])
}
