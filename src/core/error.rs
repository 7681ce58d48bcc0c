//! Error handling for the front-matter parser
//!
//! The error system follows two rules:
//! 1. **Strongly-typed errors** so callers can match on the failure mode
//! 2. **Readable messages** that name the offending file and carry the
//!    underlying diagnostic verbatim
//!
//! # Architecture
//!
//! - [`FrontmatterError`] - every failure the crate can report
//! - [`ErrorContext`] - wraps an error with optional details and a suggestion
//!
//! Only one variant can come out of the per-record pipeline:
//! [`FrontmatterError::MetadataParse`]. Missing markers, missing keys and empty
//! input are all valid, defaulted states. The remaining variants belong to
//! configuration loading.
//!
//! # Examples
//!
//! ```rust
//! use t262_frontmatter::core::{ErrorContext, FrontmatterError};
//!
//! let error = FrontmatterError::MetadataParse {
//!     file: "S7.2_A1.1_T1.js".to_string(),
//!     message: "mapping values are not allowed in this context".to_string(),
//! };
//! assert_eq!(
//!     error.to_string(),
//!     "Error loading frontmatter from file S7.2_A1.1_T1.js\nmapping values are not allowed in this context"
//! );
//!
//! let context = ErrorContext::from(error);
//! assert!(context.suggestion.is_some());
//! ```

use std::fmt;
use thiserror::Error;

/// Crate-wide result type.
pub type Result<T, E = FrontmatterError> = std::result::Result<T, E>;

/// The error type for front-matter parsing and parser configuration.
///
/// # Error Categories
///
/// ## Record parsing
/// - [`MetadataParse`] - the YAML engine rejected the front-matter block
///
/// ## Configuration
/// - [`ConfigRead`] - the configuration file could not be read
/// - [`ConfigParse`] - the configuration file is not valid TOML or has bad values
///
/// ## Fallback
/// - [`Other`] - anything that does not fit the categories above
///
/// [`MetadataParse`]: FrontmatterError::MetadataParse
/// [`ConfigRead`]: FrontmatterError::ConfigRead
/// [`ConfigParse`]: FrontmatterError::ConfigParse
/// [`Other`]: FrontmatterError::Other
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FrontmatterError {
    /// The front-matter block of a test file is not valid YAML.
    ///
    /// The display format is fixed and consumed by existing tooling:
    /// `"Error loading frontmatter from file <file>\n<message>"`.
    ///
    /// # Fields
    /// - `file`: name of the test file, or the placeholder for bare text
    /// - `message`: diagnostic reported by the YAML engine
    #[error("Error loading frontmatter from file {file}\n{message}")]
    MetadataParse {
        /// Name of the file whose front-matter failed to load
        file: String,
        /// Diagnostic from the YAML engine
        message: String,
    },

    /// The parser configuration file could not be read.
    #[error("Failed to read parser configuration {path}: {message}")]
    ConfigRead {
        /// Path of the configuration file
        path: String,
        /// Underlying I/O error message
        message: String,
    },

    /// The parser configuration is malformed.
    #[error("Invalid parser configuration {path}: {message}")]
    ConfigParse {
        /// Path of the configuration file, or `<inline>` for string input
        path: String,
        /// Description of what is wrong
        message: String,
    },

    /// Catch-all for errors that do not fit another variant.
    #[error("{message}")]
    Other {
        /// Error message
        message: String,
    },
}

impl FrontmatterError {
    /// Name of the test file involved, when the error concerns one.
    #[must_use]
    pub fn file(&self) -> Option<&str> {
        match self {
            Self::MetadataParse { file, .. } => Some(file),
            _ => None,
        }
    }
}

/// An error with optional details and a suggested fix.
///
/// Used when reporting failures from batch runs, where the reader wants
/// to know what to do about each failing file rather than only what failed.
#[derive(Debug, Clone)]
pub struct ErrorContext {
    /// The underlying error
    pub error: FrontmatterError,
    /// Optional suggestion for resolving the error
    pub suggestion: Option<String>,
    /// Optional additional details about the error
    pub details: Option<String>,
}

impl ErrorContext {
    /// Wrap an error without details or suggestion.
    #[must_use]
    pub const fn new(error: FrontmatterError) -> Self {
        Self {
            error,
            suggestion: None,
            details: None,
        }
    }

    /// Add a suggestion for resolving the error.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Add details explaining the error.
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

impl From<FrontmatterError> for ErrorContext {
    fn from(error: FrontmatterError) -> Self {
        match &error {
            FrontmatterError::MetadataParse { .. } => Self::new(error)
                .with_details("The text between /*--- and ---*/ must be a YAML mapping")
                .with_suggestion(
                    "Check the indentation of the front-matter block and quote values containing ': '",
                ),
            FrontmatterError::ConfigRead { .. } => Self::new(error)
                .with_suggestion("Check that the configuration file exists and is readable"),
            FrontmatterError::ConfigParse { .. } => Self::new(error).with_suggestion(
                "closing-marker-search must be \"after-opening\" or \"from-start\"",
            ),
            FrontmatterError::Other { .. } => Self::new(error),
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}

impl std::error::Error for ErrorContext {}

/// Convert any error into an [`ErrorContext`].
///
/// Recognises [`FrontmatterError`] and TOML syntax errors from configuration
/// loading; anything else is carried as [`FrontmatterError::Other`] with the
/// full cause chain in the details.
#[must_use]
pub fn user_friendly_error(error: anyhow::Error) -> ErrorContext {
    if let Some(err) = error.downcast_ref::<FrontmatterError>() {
        return ErrorContext::from(err.clone());
    }

    if let Some(toml_error) = error.downcast_ref::<toml::de::Error>() {
        return ErrorContext::from(FrontmatterError::ConfigParse {
            path: "<inline>".to_string(),
            message: toml_error.message().to_string(),
        });
    }

    let chain: Vec<String> = error.chain().skip(1).map(ToString::to_string).collect();
    let context = ErrorContext::new(FrontmatterError::Other {
        message: error.to_string(),
    });
    if chain.is_empty() {
        context
    } else {
        context.with_details(chain.join(": "))
    }
}
