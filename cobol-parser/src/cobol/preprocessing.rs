//! Preprocessing
//!
//!     Fixed-format COBOL encodes comments positionally. Before the grammar engine sees any
//!     text, this module removes three kinds of commentary:
//!
//!         1. Full-line comments: the indicator area (column 7, index 6) holds `*`.
//!         2. Developer metadata lines shaped like `MO1624* developer note *`
//!            (only when metadata stripping is on).
//!         3. Inline comments: everything from the first ` *>` to the end of the line.
//!
//!     Classification is line-local and ordered: full-line comment first, then metadata,
//!     then the inline marker. Dropped lines disappear from the output, they are never
//!     replaced by blank lines, so the output never has more lines than the input.
//!
//! Inline Marker Limitation
//!
//!     The inline marker search is a plain substring search. It knows nothing about
//!     literals, so `DISPLAY 'A *> B'` is cut down to `DISPLAY 'A`. Downstream tooling
//!     relies on this exact behavior; do not make the search literal-aware here.
//!
//! Comment Handling
//!
//!     Whether normalization runs at all is a caller decision ([CommentHandling]). With
//!     `Disable` the source reaches the grammar engine untouched.

pub mod comments;
pub mod lines;

pub use comments::{
    classify_line, is_full_comment_line, is_metadata_line, normalize, normalize_with_report,
    LineClassification, NormalizationReport, COMMENT_INDICATOR, INDICATOR_COLUMN, INLINE_MARKER,
};
pub use lines::split_lines;

use serde::{Deserialize, Serialize};

/// Whether comments are normalized away before parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommentHandling {
    /// Run the preprocessor before parsing
    Enable,
    /// Hand the source to the grammar engine unmodified
    #[default]
    Disable,
}

impl CommentHandling {
    pub fn is_enabled(self) -> bool {
        matches!(self, CommentHandling::Enable)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CommentHandling::Enable => "enable",
            CommentHandling::Disable => "disable",
        }
    }
}
