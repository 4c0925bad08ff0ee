//! Core token types and helpers shared across the lexer and the grammar engine.

pub mod core;

pub use core::Token;

/// A token together with the byte range of its source text.
pub type TokenLocation = (Token, std::ops::Range<usize>);
