//! Line splitting over the full set of Unicode line boundaries.
//!
//! Besides `\n`, `\r\n` and lone `\r`, a line also ends at vertical tab, form feed,
//! the file/group/record separators (`\x1c`..`\x1e`), NEL (`\u{85}`) and the Unicode
//! line and paragraph separators.

/// Characters that end a line. `\r\n` is matched as one terminator.
const LINE_BREAKS: [char; 10] = [
    '\n', '\r', '\x0b', '\x0c', '\x1c', '\x1d', '\x1e', '\u{85}', '\u{2028}', '\u{2029}',
];

/// Split source text into lines without their terminators.
///
/// A terminator at the very end of the text does not produce a trailing empty line,
/// so `"A\nB\n"` and `"A\r\nB"` both yield `["A", "B"]`. Empty text yields nothing.
pub fn split_lines(source: &str) -> SplitLines<'_> {
    SplitLines { rest: source }
}

/// Iterator returned by [split_lines].
#[derive(Debug, Clone)]
pub struct SplitLines<'a> {
    rest: &'a str,
}

impl<'a> Iterator for SplitLines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.rest.is_empty() {
            return None;
        }
        match self.rest.char_indices().find(|(_, c)| LINE_BREAKS.contains(c)) {
            Some((idx, terminator)) => {
                let line = &self.rest[..idx];
                let skip = if self.rest[idx..].starts_with("\r\n") {
                    2
                } else {
                    terminator.len_utf8()
                };
                self.rest = &self.rest[idx + skip..];
                Some(line)
            }
            None => {
                let line = self.rest;
                self.rest = "";
                Some(line)
            }
        }
    }
}
