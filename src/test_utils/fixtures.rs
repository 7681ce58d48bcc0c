//! Builders for test262-shaped source files.

use crate::constants::{FRONTMATTER_END, FRONTMATTER_START};
use crate::frontmatter::TestFile;

/// Header carried by most tests in the suite.
pub const DEFAULT_COPYRIGHT: &str = "// Copyright (C) 2017 the test262 authors. All rights reserved.\n\
     // This code is governed by the BSD license found in the LICENSE file.\n";

/// Builder for a test file: copyright header, optional front-matter and body.
///
/// The rendered layout matches the suite: header, blank line, block, body.
#[derive(Debug, Clone)]
pub struct TestFileFixture {
    pub name: String,
    pub copyright: String,
    pub frontmatter: Option<String>,
    pub body: String,
}

impl TestFileFixture {
    /// A test with the default copyright header, no front-matter and no body.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            copyright: DEFAULT_COPYRIGHT.to_string(),
            frontmatter: None,
            body: String::new(),
        }
    }

    /// A harness helper: no copyright header.
    pub fn helper(name: &str) -> Self {
        Self {
            copyright: String::new(),
            ..Self::new(name)
        }
    }

    /// An async test: `flags: [async]` and a body that calls `$DONE`.
    pub fn async_test(name: &str) -> Self {
        Self::new(name)
            .with_frontmatter("description: resolves asynchronously\nflags: [async]")
            .with_body("\nPromise.resolve().then($DONE, $DONE);\n")
    }

    pub fn with_copyright(mut self, copyright: &str) -> Self {
        self.copyright = copyright.to_string();
        self
    }

    /// Set the YAML placed between the markers (without a trailing newline).
    pub fn with_frontmatter(mut self, yaml: &str) -> Self {
        self.frontmatter = Some(yaml.to_string());
        self
    }

    pub fn with_body(mut self, body: &str) -> Self {
        self.body = body.to_string();
        self
    }

    /// Render the full file contents.
    pub fn render(&self) -> String {
        let mut contents = self.copyright.clone();
        if let Some(yaml) = &self.frontmatter {
            if !contents.is_empty() {
                contents.push('\n');
            }
            contents.push_str(FRONTMATTER_START);
            contents.push('\n');
            contents.push_str(yaml);
            contents.push('\n');
            contents.push_str(FRONTMATTER_END);
        }
        contents.push_str(&self.body);
        contents
    }

    pub fn build(&self) -> TestFile {
        TestFile::new(self.name.clone(), self.render())
    }
}
