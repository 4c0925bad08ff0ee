//! Base tokenization implementation
//!
//! This module provides the raw tokenization using the logos lexer library.
//! This is the entry point where source strings become token streams.

use crate::cobol::token::{Token, TokenLocation};
use logos::Logos;

/// Tokenize source code with location information
///
/// Inline comments are included. Bytes that do not form a token are skipped; with the
/// current token set that cannot happen, but the lexer API still reports it.
pub fn tokenize(source: &str) -> Vec<TokenLocation> {
    let mut lexer = Token::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        if let Ok(token) = result {
            tokens.push((token, lexer.span()));
        }
    }

    tokens
}

/// Tokenize and drop hidden-channel tokens.
pub fn tokenize_visible(source: &str) -> Vec<TokenLocation> {
    tokenize(source)
        .into_iter()
        .filter(|(token, _)| !token.is_hidden())
        .collect()
}
