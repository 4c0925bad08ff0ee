//! Lexer
//!
//!     Tokenization of (normalized or raw) COBOL text. The lexer is total: every input
//!     character ends up in some token, so this stage never fails.
//!
//! Hidden Channel
//!
//!     `*>` inline comments are lexed as `InlineComment` tokens. [tokenize] keeps them so
//!     token dumps show the whole source; [tokenize_visible] drops them, which is what the
//!     grammar engine consumes. Full-line comments are positional and cannot be told apart
//!     at this level; removing them is the preprocessor's job.

pub mod base_tokenization;

pub use base_tokenization::{tokenize, tokenize_visible};
pub use crate::cobol::token::{Token, TokenLocation};
