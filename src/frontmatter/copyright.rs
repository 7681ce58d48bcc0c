//! Copyright header extraction.

use crate::constants::LINE_COMMENT;

/// Line terminators other than `\n` that end a header line early.
const OTHER_LINE_TERMINATORS: [char; 3] = ['\r', '\u{2028}', '\u{2029}'];

/// Return the run of `//` line comments at the very start of `text`.
///
/// Each line must begin with `//` and end with `\n` or `\r\n`; the scan stops
/// at the first line that does not, so a trailing comment without a newline
/// is not part of the header. A line broken by a lone `\r`, U+2028 or U+2029
/// also ends the header before that line. Comments after the first
/// non-comment line are never included.
#[must_use]
pub fn extract_copyright(text: &str) -> &str {
    let mut end = 0;

    while text[end..].starts_with(LINE_COMMENT) {
        let Some(newline) = text[end..].find('\n') else {
            break;
        };
        let line = &text[end..end + newline];
        let content = line.strip_suffix('\r').unwrap_or(line);
        if content.contains(OTHER_LINE_TERMINATORS) {
            break;
        }
        end += newline + 1;
    }

    &text[..end]
}
