use cobol_config::ConfigError;
use cobol_parser::cobol::loader::LoaderError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Everything that ends a run with exit status 1.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("File '{}' does not exist", .0.display())]
    MissingInput(PathBuf),
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("{0}")]
    Load(#[from] LoaderError),
    #[error("could not render tree: {0}")]
    Render(#[from] serde_json::Error),
    #[error("could not write '{}': {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },
}
