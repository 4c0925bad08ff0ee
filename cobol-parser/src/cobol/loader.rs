//! Source loading utilities
//!
//! [SourceLoader] reads COBOL source from a file or string and runs transforms on it.
//! The CLI and the integration tests both go through it.
//!
//! ```rust,ignore
//! use cobol_parser::cobol::loader::SourceLoader;
//!
//! let loader = SourceLoader::from_path("PAYROLL.cbl")?;
//! let tree = loader.parse()?;                  // normalize, then parse
//! let cleaned = loader.normalize()?;            // comment-free text only
//! let tokens = loader.with(&CORE_TOKENIZATION)?;
//! ```

use crate::cobol::parsing::{GrammarEngine, ParseTree};
use crate::cobol::transforms::stages::{CommentNormalization, Parsing};
use crate::cobol::transforms::standard::{
    TokenStream, CORE_TOKENIZATION, NORMALIZATION, NORMALIZED_STRING_TO_TREE,
};
use crate::cobol::transforms::{Runnable, Transform, TransformError};
use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error;

/// Error that can occur when loading sources
#[derive(Debug, Error)]
pub enum LoaderError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Transform error: {0}")]
    Transform(#[from] TransformError),
}

/// Source loader with transform shortcuts
#[derive(Debug, Clone)]
pub struct SourceLoader {
    source: String,
}

impl SourceLoader {
    /// Load from a file path.
    ///
    /// The file must be UTF-8.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, LoaderError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path)?;
        tracing::debug!(path = %path.display(), bytes = source.len(), "loaded source");
        Ok(SourceLoader { source })
    }

    pub fn from_string<S: Into<String>>(source: S) -> Self {
        SourceLoader {
            source: source.into(),
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Run a transform on a copy of the source.
    pub fn with<O: 'static>(&self, transform: &Transform<String, O>) -> Result<O, LoaderError> {
        Ok(transform.run(self.source.clone())?)
    }

    /// Comment-free text, metadata lines stripped.
    pub fn normalize(&self) -> Result<String, LoaderError> {
        self.with(&NORMALIZATION)
    }

    /// Tokens of the raw source, inline comment tokens included.
    pub fn tokenize(&self) -> Result<TokenStream, LoaderError> {
        self.with(&CORE_TOKENIZATION)
    }

    /// Normalize, then parse with the default grammar.
    pub fn parse(&self) -> Result<ParseTree, LoaderError> {
        self.with(&NORMALIZED_STRING_TO_TREE)
    }

    /// Normalize, then parse with the given engine.
    pub fn parse_with<E>(&self, engine: E, strip_metadata: bool) -> Result<ParseTree, LoaderError>
    where
        E: GrammarEngine + 'static,
    {
        let normalized = CommentNormalization::new(strip_metadata).run(self.source.clone())?;
        Ok(Parsing::with_engine(engine).run(normalized)?)
    }
}
