//! Token definitions for COBOL source
//!
//! Tokens are produced by the logos derive. Whitespace and line breaks are skipped: the
//! structural grammar only needs words, literals and the period that ends a sentence.
//!
//! A period is only a separator when whitespace or end of input follows it. A period
//! between alphanumerics stays inside the word (`0.25`, `ZZ9.99`, `1.05`); signed and
//! leading-dot decimals (`-1.5`, `.5`) are `Numeric`.
//!
//! Inline comments (`*>` to end of line) are still tokenized so callers can see them,
//! but they travel on a hidden channel and never reach the parse tree. Every other
//! character falls into `Symbol`, so tokenization never rejects input.
use logos::Logos;
use serde::Serialize;

#[derive(Logos, Debug, Clone, PartialEq, Eq, Serialize)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Token {
    // Hidden channel
    #[regex(r"\*>[^\r\n]*", |lex| lex.slice().to_string())]
    InlineComment(String),

    // User-defined words, reserved words, level numbers, unsigned numeric literals and
    // picture strings
    #[regex(r"[A-Za-z0-9][A-Za-z0-9\-]*(\.[A-Za-z0-9][A-Za-z0-9\-]*)*", |lex| lex.slice().to_string())]
    Word(String),

    #[regex(r"[+\-][0-9]+(\.[0-9]+)?", |lex| lex.slice().to_string())]
    #[regex(r"[+\-]?\.[0-9]+", |lex| lex.slice().to_string())]
    Numeric(String),

    // Alphanumeric literals; an unterminated literal runs to the end of the line
    #[regex(r#""[^"\r\n]*"?"#, |lex| lex.slice().to_string())]
    #[regex(r"'[^'\r\n]*'?", |lex| lex.slice().to_string())]
    Literal(String),

    #[token(".")]
    Period,
    #[token("(")]
    OpenParen,
    #[token(")")]
    CloseParen,
    #[regex(r"[,;]", |lex| lex.slice().to_string())]
    Separator(String),

    // Operators and anything else
    #[regex(r#"[^ \t\r\n\fA-Za-z0-9'".(),;]"#, |lex| lex.slice().to_string())]
    Symbol(String),
}

impl Token {
    /// True for tokens the grammar engine ignores.
    pub fn is_hidden(&self) -> bool {
        matches!(self, Token::InlineComment(_))
    }

    /// Case-insensitive keyword comparison for `Word` tokens.
    pub fn is_keyword(&self, keyword: &str) -> bool {
        matches!(self, Token::Word(word) if word.eq_ignore_ascii_case(keyword))
    }

    pub fn as_word(&self) -> Option<&str> {
        match self {
            Token::Word(word) => Some(word),
            _ => None,
        }
    }
}
