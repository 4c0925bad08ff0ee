//! Shared configuration loader for cobol-ast.
//!
//! `defaults/cobol.default.toml` is embedded into the binary so that the documented
//! defaults and runtime behavior stay in sync. Callers layer user files and CLI
//! overrides on top via [`Loader`] before deserializing into [`CobolConfig`].

use cobol_parser::cobol::formats::OutputFormat;
use cobol_parser::cobol::preprocessing::CommentHandling;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

pub use config::ConfigError;

const DEFAULT_TOML: &str = include_str!("../defaults/cobol.default.toml");

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct CobolConfig {
    pub comments: CommentsConfig,
    pub input: InputConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CommentsConfig {
    pub handling: CommentHandling,
    pub strip_metadata: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InputConfig {
    /// Without the leading dot
    pub extension: String,
}

impl InputConfig {
    /// Whether `path` carries the expected extension, ignoring case.
    pub fn matches(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case(&self.extension))
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub suffix: String,
    pub format: OutputFormat,
}

impl OutputConfig {
    /// `<dir>/<stem><suffix>` for the given input path.
    pub fn path_for(&self, input: &Path) -> std::path::PathBuf {
        let stem = input
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();
        input.with_file_name(format!("{stem}{}", self.suffix))
    }
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (e.g. `comments.handling` from `--comments`).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<CobolConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<CobolConfig, ConfigError> {
    Loader::new().build()
}
