//! t262-frontmatter - test262 front-matter parser
//!
//! Splits a test262 conformance test file into its copyright header, its YAML
//! front-matter block (delimited by `/*---` and `---*/`) and its body, and
//! normalizes the metadata the test harness cares about.
//!
//! # Architecture Overview
//!
//! Parsing is a single pass over one in-memory file:
//! - the front-matter block is located by its markers
//! - the YAML between the markers is loaded through a pluggable engine
//! - `flags` and `includes` are normalized into a set and a list
//! - the copyright header, the body, and two classification signals
//!   (`is_async`, `is_test`) are derived from the text
//!
//! The only failure is a YAML block that does not load as a mapping. A file
//! with no front-matter, no header, or no content at all still parses.
//!
//! # Core Modules
//!
//! - [`frontmatter`] - the parser and its building blocks
//! - [`stream`] - stream and iterator adapters for whole corpora
//! - [`config`] - parser configuration (`t262.toml`, environment overrides)
//! - [`core`] - error types and user-facing error reporting
//! - [`constants`] - markers, tokens and key names
//!
//! # Example
//!
//! ```rust
//! use t262_frontmatter::{TestFile, parse_file};
//!
//! let parsed = parse_file(TestFile::new(
//!     "promise-length.js",
//!     "// Copyright (C) 2015 the V8 project authors. All rights reserved.\n\
//!      /*---\nincludes: [propertyHelper.js]\nflags: [async]\n---*/\n\
//!      Promise.resolve().then($DONE, $DONE);\n",
//! ))
//! .unwrap();
//!
//! assert!(parsed.is_test);
//! assert!(parsed.is_async);
//! assert!(parsed.attrs.has_flag("async"));
//! assert_eq!(parsed.attrs.includes, vec!["propertyHelper.js"]);
//! ```
//!
//! # Configuration (t262.toml)
//!
//! ```toml
//! # Where to look for the closing marker: "after-opening" (default) or
//! # "from-start" for the historical harness behavior.
//! closing-marker-search = "after-opening"
//!
//! # Name reported in errors for input given without a file name.
//! unknown-file-name = "<unknown>"
//! ```
//!
//! The closing-marker policy can also be set through the
//! `T262_CLOSING_MARKER_SEARCH` environment variable.

pub mod config;
pub mod constants;
pub mod core;
pub mod frontmatter;
pub mod stream;

// test_utils module is available for both unit tests and integration tests
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use config::{ClosingMarkerSearch, ParserConfig};
pub use core::{FrontmatterError, Result};
pub use frontmatter::{FrontmatterParser, ParsedTest, TestAttrs, TestFile, TestInput, parse_file};
pub use stream::{BatchOutcome, parse_batch, parse_stream};
