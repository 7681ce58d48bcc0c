//! Fixed literals of the test262 file format.
//!
//! These values are shared with existing test corpora and must match them
//! byte for byte.

/// Opening marker of the front-matter block.
pub const FRONTMATTER_START: &str = "/*---";

/// Closing marker of the front-matter block.
pub const FRONTMATTER_END: &str = "---*/";

/// Token whose presence marks a test that signals completion asynchronously.
pub const ASYNC_DONE_TOKEN: &str = "$DONE";

/// Line-comment prefix recognised in the copyright header.
pub const LINE_COMMENT: &str = "//";

/// File name given to records built from bare text.
pub const UNKNOWN_FILE_NAME: &str = "<unknown>";

/// Environment variable overriding the closing-marker search policy.
pub const ENV_CLOSING_MARKER_SEARCH: &str = "T262_CLOSING_MARKER_SEARCH";

/// Front-matter key holding the test flags.
pub const FLAGS_KEY: &str = "flags";

/// Front-matter key holding the harness include list.
pub const INCLUDES_KEY: &str = "includes";
