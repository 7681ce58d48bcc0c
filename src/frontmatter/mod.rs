//! Front-matter parsing for test262 test files.
//!
//! A test262 test looks like this:
//!
//! ```text
//! // Copyright 2009 the Sputnik authors.  All rights reserved.
//! // This code is governed by the BSD license found in the LICENSE file.
//!
//! /*---
//! es5id: 7.2_A1.1_T1
//! description: The CHARACTER TABULATION (U+0009) between any two tokens is allowed
//! flags: [noStrict]
//! includes: [propertyHelper.js]
//! ---*/
//!
//! // CHECK#1
//! eval("\u0009var\u0009x\u0009=\u00091\u0009");
//! ```
//!
//! [`parse_file`] splits such a file into:
//! - the copyright header (leading `//` lines)
//! - the raw YAML between `/*---` and `---*/`
//! - normalized attributes ([`TestAttrs`]) with `flags` as a set and
//!   `includes` as a list
//! - the body after the closing marker
//! - two derived signals: `is_async` (`$DONE` appears anywhere) and
//!   `is_test` (a copyright header is present)
//!
//! Only invalid YAML can make parsing fail. Missing markers, missing keys and
//! empty input all produce a record with defaults.
//!
//! # Example
//!
//! ```rust
//! use t262_frontmatter::frontmatter::{TestFile, parse_file};
//!
//! let file = TestFile::new(
//!     "S11.4.1_A5.js",
//!     "// Copyright (c) 2012 Ecma International.  All rights reserved.\n\
//!      /*---\nflags: [onlyStrict]\n---*/\n\"use strict\";\n",
//! );
//! let parsed = parse_file(file).unwrap();
//!
//! assert!(parsed.is_test);
//! assert!(!parsed.is_async);
//! assert!(parsed.attrs.has_flag("onlyStrict"));
//! assert_eq!(parsed.body, "\n\"use strict\";\n");
//! ```

pub mod attrs;
pub mod body;
pub mod copyright;
pub mod locator;

pub use attrs::{MetadataEngine, SerdeYamlEngine, TestAttrs, load_attrs, normalize_attrs};
pub use body::{extract_body, is_async, is_test};
pub use copyright::extract_copyright;
pub use locator::{FrontmatterSpan, extract_yaml, locate};

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::sync::Arc;

use crate::config::ParserConfig;
use crate::core::Result;

/// A test file to parse: its name and raw contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestFile {
    /// File name, used in error messages.
    pub file: String,

    /// Raw file contents.
    pub contents: String,
}

impl TestFile {
    /// Create a named test file.
    pub fn new(file: impl Into<String>, contents: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            contents: contents.into(),
        }
    }
}

/// Input accepted by the parser: a named file, or bare text.
///
/// Bare text is given the configured placeholder name
/// ([`ParserConfig::unknown_file_name`], `<unknown>` by default).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TestInput {
    /// A named file.
    File(TestFile),
    /// Contents without a name.
    Text(String),
}

impl From<TestFile> for TestInput {
    fn from(file: TestFile) -> Self {
        Self::File(file)
    }
}

impl From<&TestFile> for TestInput {
    fn from(file: &TestFile) -> Self {
        Self::File(file.clone())
    }
}

impl From<String> for TestInput {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&str> for TestInput {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

/// A parsed test file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParsedTest {
    /// File name, or the placeholder for bare text.
    pub file: String,

    /// Raw text between the markers, or `""` when there is no block.
    pub frontmatter: String,

    /// Whether a complete block was located, even an empty one.
    pub has_frontmatter: bool,

    /// Normalized attributes.
    pub attrs: TestAttrs,

    /// Whether `$DONE` appears anywhere in the original contents.
    pub is_async: bool,

    /// Leading `//` comment lines, possibly empty.
    pub copyright: String,

    /// Whether the file has a copyright header, the corpus' marker of a test.
    pub is_test: bool,

    /// Contents after the front-matter block.
    pub body: String,
}

/// Parser with a configuration and a YAML engine.
///
/// Stateless between calls; a single parser can be cloned or shared across
/// threads.
#[derive(Clone)]
pub struct FrontmatterParser {
    config: ParserConfig,
    engine: Arc<dyn MetadataEngine>,
}

impl Debug for FrontmatterParser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FrontmatterParser").field("config", &self.config).finish()
    }
}

impl Default for FrontmatterParser {
    fn default() -> Self {
        Self::new()
    }
}

impl FrontmatterParser {
    /// Parser with the default configuration and the `serde_yaml` engine.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(ParserConfig::default())
    }

    /// Parser with a custom configuration and the `serde_yaml` engine.
    #[must_use]
    pub fn with_config(config: ParserConfig) -> Self {
        Self {
            config,
            engine: Arc::new(SerdeYamlEngine),
        }
    }

    /// Replace the YAML engine.
    #[must_use]
    pub fn with_engine(mut self, engine: impl MetadataEngine + 'static) -> Self {
        self.engine = Arc::new(engine);
        self
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Extract the raw YAML text between the markers under this parser's
    /// closing-marker policy.
    #[must_use]
    pub fn extract_yaml<'a>(&self, text: &'a str) -> &'a str {
        locate(text, self.config.closing_marker_search).yaml_text(text)
    }

    /// Parse one test file.
    ///
    /// The input is never modified; a new [`ParsedTest`] is returned.
    ///
    /// # Errors
    ///
    /// [`FrontmatterError::MetadataParse`](crate::core::FrontmatterError::MetadataParse)
    /// when the front-matter block is not a valid YAML mapping.
    pub fn parse(&self, input: impl Into<TestInput>) -> Result<ParsedTest> {
        let TestFile { file, contents } = match input.into() {
            TestInput::File(file) => file,
            TestInput::Text(text) => TestFile::new(self.config.unknown_file_name.clone(), text),
        };

        let span = locate(&contents, self.config.closing_marker_search);
        let frontmatter = span.yaml_text(&contents);

        let raw = load_attrs(self.engine.as_ref(), &file, frontmatter).inspect_err(|e| {
            tracing::warn!("{e}");
        })?;
        let attrs = normalize_attrs(raw);

        let is_async = is_async(&contents);
        let copyright = extract_copyright(&contents);
        let body = extract_body(&contents, &span);
        let is_test = is_test(copyright);

        tracing::debug!(
            file = %file,
            flags = attrs.flags.len(),
            includes = attrs.includes.len(),
            is_async,
            is_test,
            "Parsed test file"
        );

        Ok(ParsedTest {
            frontmatter: frontmatter.to_string(),
            has_frontmatter: span.has_frontmatter(),
            attrs,
            is_async,
            copyright: copyright.to_string(),
            is_test,
            body: body.to_string(),
            file,
        })
    }
}

/// Parse one test file with the default parser.
///
/// Accepts a [`TestFile`] or bare text, which is named `<unknown>`.
///
/// ```rust
/// use t262_frontmatter::frontmatter::parse_file;
///
/// let parsed = parse_file("var foo = 3;").unwrap();
/// assert_eq!(parsed.file, "<unknown>");
/// assert_eq!(parsed.body, "var foo = 3;");
/// assert!(!parsed.is_test);
/// ```
pub fn parse_file(input: impl Into<TestInput>) -> Result<ParsedTest> {
    FrontmatterParser::new().parse(input)
}
