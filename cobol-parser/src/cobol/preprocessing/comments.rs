//! Comment Classification
//!
//! Per-line classification and the normalization pass built on it.
//! Every check here is positional or substring based; nothing tokenizes.

use super::lines::split_lines;

/// The comment indicator character of fixed-format COBOL.
pub const COMMENT_INDICATOR: char = '*';

/// Zero-based index of the indicator area (column 7).
pub const INDICATOR_COLUMN: usize = 6;

/// Inline comment marker, including the space that must precede `*>`.
pub const INLINE_MARKER: &str = " *>";

/// What a single (right-trimmed) source line is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClassification<'a> {
    /// `*` in the indicator area; the line is dropped
    FullCommentLine,
    /// Developer metadata such as `MO1624* note *`; dropped when stripping is on
    MetadataLine,
    /// Plain code, emitted as is
    CodeLine(&'a str),
    /// Code followed by ` *>`; only `code` is emitted
    CodeLineWithInlineComment { code: &'a str, comment: &'a str },
}

impl<'a> LineClassification<'a> {
    /// The text that survives normalization, or `None` for dropped lines.
    pub fn emitted(&self) -> Option<&'a str> {
        match *self {
            LineClassification::FullCommentLine | LineClassification::MetadataLine => None,
            LineClassification::CodeLine(code)
            | LineClassification::CodeLineWithInlineComment { code, .. } => Some(code),
        }
    }

    pub fn is_dropped(&self) -> bool {
        self.emitted().is_none()
    }
}

/// Counters gathered during one normalization pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NormalizationReport {
    pub lines_in: usize,
    pub lines_out: usize,
    pub full_comment_lines: usize,
    pub metadata_lines: usize,
    pub inline_comments: usize,
}

impl NormalizationReport {
    pub fn dropped(&self) -> usize {
        self.full_comment_lines + self.metadata_lines
    }
}

/// True when the character at [INDICATOR_COLUMN] is the comment indicator.
///
/// Columns are counted in characters. Lines with 6 characters or fewer have no indicator
/// area and are never full-line comments.
pub fn is_full_comment_line(line: &str) -> bool {
    line.chars().nth(INDICATOR_COLUMN) == Some(COMMENT_INDICATOR)
}

/// True when the trimmed line is `[A-Z0-9]+` `*` anything `*`.
///
/// Prefix scan then suffix check. The closing indicator must be a second `*`, so
/// `MO1624*` alone is not metadata while `MO1624**` is.
pub fn is_metadata_line(line: &str) -> bool {
    let trimmed = line.trim();
    let rest = trimmed.trim_start_matches(|c: char| c.is_ascii_uppercase() || c.is_ascii_digit());
    if rest.len() == trimmed.len() {
        return false;
    }
    match rest.strip_prefix(COMMENT_INDICATOR) {
        Some(body) => body.ends_with(COMMENT_INDICATOR),
        None => false,
    }
}

/// Classify one line. Trailing whitespace is trimmed first.
pub fn classify_line(line: &str, strip_metadata: bool) -> LineClassification<'_> {
    let line = line.trim_end();

    if is_full_comment_line(line) {
        return LineClassification::FullCommentLine;
    }

    if strip_metadata && is_metadata_line(line) {
        return LineClassification::MetadataLine;
    }

    match line.find(INLINE_MARKER) {
        Some(idx) => LineClassification::CodeLineWithInlineComment {
            code: line[..idx].trim_end(),
            comment: &line[idx + 1..],
        },
        None => LineClassification::CodeLine(line),
    }
}

/// Remove full-line comments, inline comments and (optionally) metadata lines.
///
/// Surviving lines keep their order and are joined with `\n`, without a trailing newline.
pub fn normalize(source: &str, strip_metadata: bool) -> String {
    normalize_with_report(source, strip_metadata).0
}

/// [normalize], also returning what was removed.
pub fn normalize_with_report(source: &str, strip_metadata: bool) -> (String, NormalizationReport) {
    let mut report = NormalizationReport::default();
    let mut kept: Vec<&str> = Vec::new();

    for line in split_lines(source) {
        report.lines_in += 1;
        let classification = classify_line(line, strip_metadata);
        match classification {
            LineClassification::FullCommentLine => report.full_comment_lines += 1,
            LineClassification::MetadataLine => report.metadata_lines += 1,
            LineClassification::CodeLineWithInlineComment { .. } => report.inline_comments += 1,
            LineClassification::CodeLine(_) => {}
        }
        if let Some(code) = classification.emitted() {
            kept.push(code);
        }
    }

    report.lines_out = kept.len();
    (kept.join("\n"), report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indicator_in_column_seven() {
        assert!(is_full_comment_line("      * full line comment"));
        assert!(is_full_comment_line("000100*"));
        assert!(!is_full_comment_line("     * six columns"));
        assert!(!is_full_comment_line("       * eighth column"));
    }

    #[test]
    fn test_short_lines_are_never_full_comments() {
        assert!(!is_full_comment_line(""));
        assert!(!is_full_comment_line("*"));
        assert!(!is_full_comment_line("******"));
        assert_eq!(
            classify_line("*****", false),
            LineClassification::CodeLine("*****")
        );
    }

    #[test]
    fn test_columns_count_characters_not_bytes() {
        // Each 'é' is two bytes; the '*' is still the seventh character.
        assert!(is_full_comment_line("éééééé*"));
        assert!(!is_full_comment_line("ééé*"));
    }

    #[test]
    fn test_trailing_whitespace_does_not_create_indicator() {
        assert_eq!(
            classify_line("ABCDEF   ", false),
            LineClassification::CodeLine("ABCDEF")
        );
    }

    #[test]
    fn test_metadata_shape() {
        assert!(is_metadata_line("MO1624* developer note *"));
        assert!(is_metadata_line("   AB12*x*   "));
        assert!(is_metadata_line("A**"));
        assert!(!is_metadata_line("A*"));
        assert!(!is_metadata_line("*note*"));
        assert!(!is_metadata_line("mo1624* lower case *"));
        assert!(!is_metadata_line("MO-1624* hyphen *"));
        assert!(!is_metadata_line("MO1624* no closing"));
        assert!(!is_metadata_line(""));
    }

    #[test]
    fn test_metadata_only_when_enabled() {
        let line = "MO16* developer note *";
        assert_eq!(classify_line(line, true), LineClassification::MetadataLine);
        assert_eq!(
            classify_line(line, false),
            LineClassification::CodeLine("MO16* developer note *")
        );
    }

    #[test]
    fn test_full_comment_wins_over_metadata() {
        // The indicator sits at index 6, so the metadata flag is irrelevant.
        let line = "MO1624* developer note *";
        assert_eq!(classify_line(line, true), LineClassification::FullCommentLine);
        assert_eq!(classify_line(line, false), LineClassification::FullCommentLine);
    }

    #[test]
    fn test_inline_comment_split() {
        let classification = classify_line("       MOVE A TO B *> explanatory note", true);
        assert_eq!(
            classification,
            LineClassification::CodeLineWithInlineComment {
                code: "       MOVE A TO B",
                comment: "*> explanatory note",
            }
        );
        assert_eq!(classification.emitted(), Some("       MOVE A TO B"));
    }

    #[test]
    fn test_inline_marker_needs_leading_space() {
        assert_eq!(
            classify_line("       MOVE A TO B*> glued", true),
            LineClassification::CodeLine("       MOVE A TO B*> glued")
        );
    }

    #[test]
    fn test_inline_marker_uses_first_occurrence() {
        let classification = classify_line("       ADD 1 TO X *> one *> two", false);
        assert_eq!(classification.emitted(), Some("       ADD 1 TO X"));
    }

    #[test]
    fn test_inline_marker_inside_literal_truncates() {
        let classification = classify_line("       DISPLAY 'A *> B'", true);
        assert_eq!(classification.emitted(), Some("       DISPLAY 'A"));
    }

    #[test]
    fn test_line_that_is_only_an_inline_comment() {
        let classification = classify_line("     *> nothing but a note", true);
        assert_eq!(classification.emitted(), Some(""));
        assert!(!classification.is_dropped());
    }

    #[test]
    fn test_normalize_drops_and_keeps_order() {
        let source = "       IDENTIFICATION DIVISION.\n      * comment\n       PROGRAM-ID. DEMO.\nAB12* meta *\n       PROCEDURE DIVISION. *> start\n";
        let (normalized, report) = normalize_with_report(source, true);
        assert_eq!(
            normalized,
            "       IDENTIFICATION DIVISION.\n       PROGRAM-ID. DEMO.\n       PROCEDURE DIVISION."
        );
        assert_eq!(
            report,
            NormalizationReport {
                lines_in: 5,
                lines_out: 3,
                full_comment_lines: 1,
                metadata_lines: 1,
                inline_comments: 1,
            }
        );
        assert_eq!(report.dropped(), 2);
    }

    #[test]
    fn test_normalize_empty_source() {
        assert_eq!(normalize("", true), "");
        assert_eq!(normalize_with_report("", false).1, NormalizationReport::default());
    }

    #[test]
    fn test_normalize_keeps_blank_lines() {
        assert_eq!(normalize("A\n\n   \nB", true), "A\n\n\nB");
    }

    #[test]
    fn test_normalize_crlf_input() {
        assert_eq!(normalize("A   \r\n      *x\r\nB\r\n", true), "A\nB");
    }
}
