//! The grammar engine seam.

use super::tree::ParseTree;
use thiserror::Error;

/// Anything that can turn source text into a parse tree.
pub trait GrammarEngine: Send + Sync {
    /// Engine name, used in logs
    fn name(&self) -> &'static str;

    /// Parse source text into a tree
    fn parse(&self, source: &str) -> Result<ParseTree, GrammarError>;
}

/// Failures raised by a grammar engine on malformed or unexpected input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GrammarError {
    #[error("no program unit found: the source contains no tokens")]
    EmptySource,

    #[error("expected {expected}, found '{found}' at line {line}, column {column}")]
    UnexpectedToken {
        expected: String,
        found: String,
        line: usize,
        column: usize,
    },
}

/// 1-based line and column (in characters) of a byte offset.
///
/// Offsets past the end clamp to the end of the source.
pub fn line_column(source: &str, offset: usize) -> (usize, usize) {
    let mut offset = offset.min(source.len());
    while !source.is_char_boundary(offset) {
        offset -= 1;
    }
    let before = &source[..offset];
    let line = before.matches('\n').count() + 1;
    let line_start = before.rfind('\n').map_or(0, |idx| idx + 1);
    let column = before[line_start..].chars().count() + 1;
    (line, column)
}
