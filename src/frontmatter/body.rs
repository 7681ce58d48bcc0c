//! Test body and classification signals.

use super::locator::FrontmatterSpan;
use crate::constants::ASYNC_DONE_TOKEN;

/// The test body: everything after the closing marker, or the whole text
/// when no block was located.
#[must_use]
pub fn extract_body<'a>(text: &'a str, span: &FrontmatterSpan) -> &'a str {
    span.body(text)
}

/// Whether the test signals completion through `$DONE`.
///
/// Must be given the original contents, not the body, since the token may
/// appear in the front-matter or header as well.
#[must_use]
pub fn is_async(contents: &str) -> bool {
    contents.contains(ASYNC_DONE_TOKEN)
}

/// Whether a file looks like a test262 test.
///
/// This is a corpus convention, not a semantic check: every test in the
/// suite starts with a `//` copyright header, so a file without one is
/// treated as a non-test (e.g. a harness helper).
#[must_use]
pub fn is_test(copyright: &str) -> bool {
    !copyright.is_empty()
}
