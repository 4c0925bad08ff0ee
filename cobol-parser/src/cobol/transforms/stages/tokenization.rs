//! Core tokenization stage

use crate::cobol::lexing::base_tokenization;
use crate::cobol::token::TokenLocation;
use crate::cobol::transforms::{Runnable, TransformError};

/// Converts source text into a flat token stream with byte ranges.
///
/// Inline comment tokens are kept; use [base_tokenization::tokenize_visible] to drop them.
#[derive(Debug, Clone, Copy, Default)]
pub struct CoreTokenization;

impl CoreTokenization {
    pub fn new() -> Self {
        CoreTokenization
    }
}

impl Runnable<String, Vec<TokenLocation>> for CoreTokenization {
    fn run(&self, input: String) -> Result<Vec<TokenLocation>, TransformError> {
        Ok(base_tokenization::tokenize(&input))
    }
}

impl Runnable<&str, Vec<TokenLocation>> for CoreTokenization {
    fn run(&self, input: &str) -> Result<Vec<TokenLocation>, TransformError> {
        Ok(base_tokenization::tokenize(input))
    }
}
