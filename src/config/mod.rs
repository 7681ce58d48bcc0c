//! Parser configuration.
//!
//! The file format itself is fixed (see [`crate::constants`]); what can be
//! configured is how tolerant the locator is of malformed marker layouts and
//! which name is given to records built from bare text.
//!
//! # Configuration File (TOML)
//!
//! ```toml
//! # Where to search for the closing "---*/" marker:
//! #   "after-opening" (default) - only after the opening "/*---" marker
//! #   "from-start"              - from the start of the text, like older tooling
//! closing-marker-search = "after-opening"
//!
//! # Name used for records created from bare text
//! unknown-file-name = "<unknown>"
//! ```
//!
//! The `T262_CLOSING_MARKER_SEARCH` environment variable overrides the search
//! policy, see [`ParserConfig::apply_env_overrides`].

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::constants::{ENV_CLOSING_MARKER_SEARCH, UNKNOWN_FILE_NAME};
use crate::core::FrontmatterError;

/// Where the locator searches for the closing marker.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ClosingMarkerSearch {
    /// Search only after the end of the opening marker.
    ///
    /// A block without a closing marker after its opening marker is treated
    /// as absent, and the body is left untouched.
    #[default]
    AfterOpening,

    /// Search from the start of the text.
    ///
    /// Matches older tooling: a stray closing marker before the opening one
    /// yields empty metadata, and the body is cut after the first closing
    /// marker anywhere in the text.
    FromStart,
}

impl fmt::Display for ClosingMarkerSearch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AfterOpening => write!(f, "after-opening"),
            Self::FromStart => write!(f, "from-start"),
        }
    }
}

impl FromStr for ClosingMarkerSearch {
    type Err = FrontmatterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "after-opening" => Ok(Self::AfterOpening),
            "from-start" => Ok(Self::FromStart),
            other => Err(FrontmatterError::ConfigParse {
                path: ENV_CLOSING_MARKER_SEARCH.to_string(),
                message: format!(
                    "unknown closing marker search '{other}', expected 'after-opening' or 'from-start'"
                ),
            }),
        }
    }
}

/// Settings for [`crate::frontmatter::FrontmatterParser`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct ParserConfig {
    /// Closing-marker search policy.
    pub closing_marker_search: ClosingMarkerSearch,

    /// Name given to records created from bare text.
    pub unknown_file_name: String,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            closing_marker_search: ClosingMarkerSearch::default(),
            unknown_file_name: UNKNOWN_FILE_NAME.to_string(),
        }
    }
}

impl ParserConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml_str(content: &str) -> crate::core::Result<Self> {
        toml::from_str(content).map_err(|e| FrontmatterError::ConfigParse {
            path: "<inline>".to_string(),
            message: e.message().to_string(),
        })
    }

    /// Load a configuration file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| FrontmatterError::ConfigRead {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| FrontmatterError::ConfigParse {
            path: path.display().to_string(),
            message: e.message().to_string(),
        })?;
        tracing::debug!(
            "Loaded parser config from {} (closing-marker-search = {})",
            path.display(),
            config.closing_marker_search
        );
        Ok(config)
    }

    /// Load a configuration file if a path is given and it exists, falling
    /// back to defaults otherwise.
    pub fn load_optional(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) if path.exists() => Self::load_from(path),
            Some(path) => {
                tracing::debug!("No parser config at {}, using defaults", path.display());
                Ok(Self::default())
            }
            None => Ok(Self::default()),
        }
    }

    /// Apply overrides from the process environment.
    pub fn apply_env_overrides(self) -> crate::core::Result<Self> {
        self.apply_overrides_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides looked up through `lookup` instead of the process
    /// environment.
    pub fn apply_overrides_from<F>(mut self, lookup: F) -> crate::core::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(ENV_CLOSING_MARKER_SEARCH) {
            self.closing_marker_search = value.parse()?;
            tracing::trace!(
                "{} overrides closing-marker-search to {}",
                ENV_CLOSING_MARKER_SEARCH,
                self.closing_marker_search
            );
        }
        Ok(self)
    }
}
