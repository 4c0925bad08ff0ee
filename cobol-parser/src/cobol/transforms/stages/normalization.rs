//! Comment normalization stage
//!
//! Strips full-line comments, inline comments and (optionally) metadata lines before
//! anything downstream sees the text.

use crate::cobol::preprocessing::normalize_with_report;
use crate::cobol::transforms::{Runnable, TransformError};

/// Comment normalization stage
///
/// # Input
/// - `String` - raw COBOL source
///
/// # Output
/// - `String` - surviving lines joined with `\n`
#[derive(Debug, Clone, Copy)]
pub struct CommentNormalization {
    strip_metadata: bool,
}

impl CommentNormalization {
    pub fn new(strip_metadata: bool) -> Self {
        CommentNormalization { strip_metadata }
    }

    pub fn strip_metadata(&self) -> bool {
        self.strip_metadata
    }
}

impl Default for CommentNormalization {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Runnable<String, String> for CommentNormalization {
    fn run(&self, input: String) -> Result<String, TransformError> {
        let (normalized, report) = normalize_with_report(&input, self.strip_metadata);
        tracing::debug!(
            lines_in = report.lines_in,
            lines_out = report.lines_out,
            full_comment_lines = report.full_comment_lines,
            metadata_lines = report.metadata_lines,
            inline_comments = report.inline_comments,
            "normalized comments"
        );
        Ok(normalized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOURCE: &str = "       PROGRAM-ID. DEMO.\n      * note\nMO16* developer note *\n       STOP RUN. *> done\n";

    #[test]
    fn test_strips_metadata_by_default() {
        let result = CommentNormalization::default()
            .run(SOURCE.to_string())
            .unwrap();
        assert_eq!(result, "       PROGRAM-ID. DEMO.\n       STOP RUN.");
    }

    #[test]
    fn test_keeps_metadata_when_disabled() {
        let stage = CommentNormalization::new(false);
        assert!(!stage.strip_metadata());
        let result = stage.run(SOURCE.to_string()).unwrap();
        assert_eq!(
            result,
            "       PROGRAM-ID. DEMO.\nMO16* developer note *\n       STOP RUN."
        );
    }

    #[test]
    fn test_empty_input() {
        let result = CommentNormalization::default().run(String::new()).unwrap();
        assert_eq!(result, "");
    }
}
