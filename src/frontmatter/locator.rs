//! Locate the `/*--- ... ---*/` block in a test file.
//!
//! The block may appear anywhere in the text, usually after the copyright
//! header. The locator only finds marker positions; it never looks at the
//! YAML inside.

use std::ops::Range;

use crate::config::ClosingMarkerSearch;
use crate::constants::{FRONTMATTER_END, FRONTMATTER_START};

/// Marker positions found in a test file.
///
/// All offsets are byte offsets into the scanned text and always fall on
/// character boundaries, since both markers are ASCII.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FrontmatterSpan {
    /// Range of the text strictly between the two markers, if a block was found.
    pub yaml: Option<Range<usize>>,

    /// Offset where the test body starts: just past the accepted closing
    /// marker, or 0 when no closing marker was accepted.
    pub body_start: usize,
}

impl FrontmatterSpan {
    /// Whether a complete front-matter block was found.
    #[must_use]
    pub fn has_frontmatter(&self) -> bool {
        self.yaml.is_some()
    }

    /// The raw metadata text between the markers, or `""`.
    #[must_use]
    pub fn yaml_text<'a>(&self, text: &'a str) -> &'a str {
        self.yaml.as_ref().map_or("", |range| &text[range.clone()])
    }

    /// The text following the block, or the whole text when there is none.
    #[must_use]
    pub fn body<'a>(&self, text: &'a str) -> &'a str {
        &text[self.body_start..]
    }
}

/// Scan `text` for the front-matter markers.
///
/// The first opening marker wins. Without one, there is no block and the
/// closing marker is not searched for under
/// [`ClosingMarkerSearch::AfterOpening`].
///
/// With [`ClosingMarkerSearch::AfterOpening`] the closing marker must follow
/// the opening marker; an unterminated block counts as no block at all.
///
/// With [`ClosingMarkerSearch::FromStart`] the first closing marker anywhere in
/// the text is used. Metadata is only reported when that marker lies after
/// the opening marker, but the body is cut after it either way.
#[must_use]
pub fn locate(text: &str, search: ClosingMarkerSearch) -> FrontmatterSpan {
    let open = text.find(FRONTMATTER_START);

    match search {
        ClosingMarkerSearch::AfterOpening => {
            let Some(open) = open else {
                return FrontmatterSpan::default();
            };
            let inner_start = open + FRONTMATTER_START.len();
            match text[inner_start..].find(FRONTMATTER_END) {
                Some(offset) => {
                    let close = inner_start + offset;
                    FrontmatterSpan {
                        yaml: Some(inner_start..close),
                        body_start: close + FRONTMATTER_END.len(),
                    }
                }
                None => {
                    tracing::trace!("opening marker at {open} has no closing marker");
                    FrontmatterSpan::default()
                }
            }
        }
        ClosingMarkerSearch::FromStart => {
            let close = text.find(FRONTMATTER_END);
            let yaml = match (open, close) {
                (Some(open), Some(close)) if close >= open + FRONTMATTER_START.len() => {
                    Some(open + FRONTMATTER_START.len()..close)
                }
                _ => None,
            };
            FrontmatterSpan {
                yaml,
                body_start: close.map_or(0, |close| close + FRONTMATTER_END.len()),
            }
        }
    }
}

/// Extract the raw YAML text between the markers using the default search
/// policy. Returns `""` when the text has no front-matter block.
///
/// ```rust
/// use t262_frontmatter::frontmatter::extract_yaml;
///
/// assert_eq!(extract_yaml("/*---foo---*/"), "foo");
/// assert_eq!(extract_yaml("/*---\nfoo\n---*/"), "\nfoo\n");
/// assert_eq!(extract_yaml("no yaml here"), "");
/// ```
#[must_use]
pub fn extract_yaml(text: &str) -> &str {
    locate(text, ClosingMarkerSearch::default()).yaml_text(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_yaml_basic() {
        assert_eq!(extract_yaml("/*---foo---*/"), "foo");
        assert_eq!(extract_yaml("/*---\nfoo\n---*/"), "\nfoo\n");
        assert_eq!(extract_yaml("no yaml here"), "");
        assert_eq!(extract_yaml(""), "");
    }

    #[test]
    fn test_locate_with_header_and_body() {
        let text = "// Copyright\n/*---\nes5id: 1\n---*/\nvar x;\n";
        let span = locate(text, ClosingMarkerSearch::AfterOpening);
        assert!(span.has_frontmatter());
        assert_eq!(span.yaml_text(text), "\nes5id: 1\n");
        assert_eq!(span.body(text), "\nvar x;\n");
    }

    #[test]
    fn test_locate_without_opening_marker() {
        let text = "var a = 1; // ---*/ is not a marker here";
        let span = locate(text, ClosingMarkerSearch::AfterOpening);
        assert!(!span.has_frontmatter());
        assert_eq!(span.yaml_text(text), "");
        assert_eq!(span.body(text), text);
    }

    #[test]
    fn test_locate_unterminated_block() {
        let text = "/*---\nflags: [onlyStrict]\nvar x;";
        for search in [ClosingMarkerSearch::AfterOpening, ClosingMarkerSearch::FromStart] {
            let span = locate(text, search);
            assert!(!span.has_frontmatter());
            assert_eq!(span.body(text), text);
        }
    }

    #[test]
    fn test_locate_first_block_wins() {
        let text = "/*---a---*/ /*---b---*/";
        let span = locate(text, ClosingMarkerSearch::AfterOpening);
        assert_eq!(span.yaml_text(text), "a");
        assert_eq!(span.body(text), " /*---b---*/");
    }

    #[test]
    fn test_overlapping_markers() {
        // "/*---*/" shares its dashes between both markers.
        let text = "/*---*/ rest";
        let span = locate(text, ClosingMarkerSearch::AfterOpening);
        assert!(!span.has_frontmatter());
        assert_eq!(span.body(text), text);

        let legacy = locate(text, ClosingMarkerSearch::FromStart);
        assert!(!legacy.has_frontmatter());
        assert_eq!(legacy.body(text), " rest");
    }

    #[test]
    fn test_stray_closing_marker_before_block() {
        let text = "// ---*/\n/*---\nes5id: 1\n---*/\nbody";

        let span = locate(text, ClosingMarkerSearch::AfterOpening);
        assert_eq!(span.yaml_text(text), "\nes5id: 1\n");
        assert_eq!(span.body(text), "\nbody");

        let legacy = locate(text, ClosingMarkerSearch::FromStart);
        assert!(!legacy.has_frontmatter());
        assert_eq!(legacy.body(text), "\n/*---\nes5id: 1\n---*/\nbody");
    }

    #[test]
    fn test_from_start_cuts_body_without_opening_marker() {
        let text = "header ---*/ body";
        let legacy = locate(text, ClosingMarkerSearch::FromStart);
        assert!(!legacy.has_frontmatter());
        assert_eq!(legacy.body(text), " body");
    }

    #[test]
    fn test_policies_agree_on_well_formed_input() {
        let text = "// c\n/*---\ndescription: ok\n---*/\nbody();\n";
        assert_eq!(
            locate(text, ClosingMarkerSearch::AfterOpening),
            locate(text, ClosingMarkerSearch::FromStart)
        );
    }

    #[test]
    fn test_multibyte_text_around_markers() {
        let text = "// © 2016\n/*---\ndescription: «ünïcode»\n---*/\n'é';";
        let span = locate(text, ClosingMarkerSearch::AfterOpening);
        assert_eq!(span.yaml_text(text), "\ndescription: «ünïcode»\n");
        assert_eq!(span.body(text), "\n'é';");
    }
}
