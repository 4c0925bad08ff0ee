//! # cobol-parser
//!
//! Comment normalization and structural parsing for fixed-format COBOL.
//!
//! File Layout
//!
//! The crate follows the order in which source text flows through it:
//! src/cobol
//!   ├── preprocessing   Line-oriented comment and metadata stripping
//!   ├── token / lexing  logos tokens and base tokenization
//!   ├── parsing         The grammar engine seam and the default structural grammar
//!   ├── formats         Tree renderings (string tree, json)
//!   ├── transforms      Composable stages and the standard pipelines
//!   └── loader          File/string loading with transform shortcuts
//!
//! The preprocessor is the part with a hard contract: it works purely on columns and
//! substrings and never looks at tokens. Everything after it only sees the cleaned text.

pub mod cobol;
