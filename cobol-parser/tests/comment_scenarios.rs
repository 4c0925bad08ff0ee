//! Line-level comment normalization scenarios
//!
//! One case per documented behavior, run through the public `normalize` entry point so
//! the join and trim rules are covered too.

use cobol_parser::cobol::preprocessing::{
    classify_line, normalize, normalize_with_report, LineClassification,
};
use rstest::rstest;

#[rstest]
#[case::full_line_comment("      * full line comment", true, "")]
#[case::full_line_comment_keep_metadata("      * full line comment", false, "")]
#[case::metadata_stripped("MO16* developer note *", true, "")]
#[case::metadata_kept("MO16* developer note *", false, "MO16* developer note *")]
#[case::metadata_kept_trimmed("MO16* developer note *   ", false, "MO16* developer note *")]
#[case::indicator_beats_metadata("MO1624* developer note *", true, "")]
#[case::indicator_beats_metadata_flag_off("MO1624* developer note *", false, "")]
#[case::inline_comment("       MOVE A TO B *> explanatory note", true, "       MOVE A TO B")]
#[case::marker_inside_literal("       DISPLAY 'A *> B'", true, "       DISPLAY 'A")]
#[case::marker_without_space("       MOVE A TO B*> note", true, "       MOVE A TO B*> note")]
#[case::plain_code("       STOP RUN.   ", true, "       STOP RUN.")]
fn test_single_line(#[case] line: &str, #[case] strip_metadata: bool, #[case] expected: &str) {
    assert_eq!(normalize(line, strip_metadata), expected);
}

#[rstest]
#[case(true)]
#[case(false)]
fn test_empty_input(#[case] strip_metadata: bool) {
    let (normalized, report) = normalize_with_report("", strip_metadata);
    assert_eq!(normalized, "");
    assert_eq!(report.lines_in, 0);
    assert_eq!(report.lines_out, 0);
}

#[rstest]
#[case::lf("A\n      *x\nB\n")]
#[case::crlf("A\r\n      *x\r\nB\r\n")]
#[case::cr("A\r      *x\rB")]
#[case::form_feed("A\x0c      *x\x0cB")]
#[case::vertical_tab("A\x0b      *x\x0bB")]
#[case::next_line("A\u{85}      *x\u{85}B")]
#[case::line_separator("A\u{2028}      *x\u{2029}B")]
fn test_line_terminators(#[case] source: &str) {
    assert_eq!(normalize(source, true), "A\nB");
}

#[test]
fn test_comment_after_form_feed_is_dropped() {
    assert_eq!(normalize("A\x0c      * c", true), "A");
}

#[test]
fn test_dropped_line_leaves_no_blank() {
    let source = "       IDENTIFICATION DIVISION.\n      * comment\n       PROGRAM-ID. X.";
    assert_eq!(
        normalize(source, true),
        "       IDENTIFICATION DIVISION.\n       PROGRAM-ID. X."
    );
}

#[test]
fn test_comment_only_line_becomes_blank() {
    // An inline comment with nothing before it still emits its (empty) code part.
    let source = "A\n     *> trailing note\nB";
    assert_eq!(normalize(source, true), "A\n\nB");
    assert_eq!(
        classify_line("     *> trailing note", true),
        LineClassification::CodeLineWithInlineComment {
            code: "",
            comment: "*> trailing note",
        }
    );
}
