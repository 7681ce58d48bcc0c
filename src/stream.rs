//! Stream and iterator adapters over [`FrontmatterParser`].
//!
//! Each input produces exactly one output item, in input order. Parsed files
//! come out as `Ok`, failures as `Err`; a failing file never ends the stream,
//! so one malformed test cannot hide the rest of a corpus.
//!
//! # Examples
//!
//! ```rust
//! use futures::stream::{self, StreamExt};
//! use t262_frontmatter::frontmatter::{FrontmatterParser, TestFile};
//! use t262_frontmatter::stream::parse_stream;
//!
//! # futures::executor::block_on(async {
//! let files = vec![
//!     TestFile::new("good.js", "// c\n/*---\nflags: [raw]\n---*/\n"),
//!     TestFile::new("bad.js", "/*---\na: b\n  c: d\n---*/"),
//! ];
//!
//! let results: Vec<_> =
//!     parse_stream(FrontmatterParser::new(), stream::iter(files)).collect().await;
//! assert!(results[0].is_ok());
//! assert!(results[1].is_err());
//! # });
//! ```

use futures::stream::{Stream, StreamExt};

use crate::core::{ErrorContext, FrontmatterError, Result};
use crate::frontmatter::{FrontmatterParser, ParsedTest, TestInput};

/// Parse every item of `input`, yielding one result per item.
pub fn parse_stream<S>(
    parser: FrontmatterParser,
    input: S,
) -> impl Stream<Item = Result<ParsedTest>>
where
    S: Stream,
    S::Item: Into<TestInput>,
{
    input.map(move |item| parser.parse(item))
}

/// Synchronous counterpart of [`parse_stream`].
pub fn parse_iter<I>(
    parser: FrontmatterParser,
    input: I,
) -> impl Iterator<Item = Result<ParsedTest>>
where
    I: IntoIterator,
    I::Item: Into<TestInput>,
{
    input.into_iter().map(move |item| parser.parse(item))
}

/// Results of parsing a whole batch.
#[derive(Debug, Default)]
pub struct BatchOutcome {
    /// Successfully parsed files, in input order.
    pub parsed: Vec<ParsedTest>,

    /// Failures, in input order.
    pub errors: Vec<FrontmatterError>,
}

impl BatchOutcome {
    /// Whether every file parsed.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of files processed.
    #[must_use]
    pub fn total(&self) -> usize {
        self.parsed.len() + self.errors.len()
    }

    /// Parsed files recognised as tests.
    pub fn tests(&self) -> impl Iterator<Item = &ParsedTest> {
        self.parsed.iter().filter(|parsed| parsed.is_test)
    }

    /// Human-readable report of every failure, with suggestions.
    #[must_use]
    pub fn error_report(&self) -> String {
        self.errors
            .iter()
            .map(|error| ErrorContext::from(error.clone()).to_string())
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    fn record(&mut self, result: Result<ParsedTest>) {
        match result {
            Ok(parsed) => self.parsed.push(parsed),
            Err(error) => self.errors.push(error),
        }
    }
}

/// Drive `input` to completion and collect the outcome.
pub async fn parse_batch<S>(parser: FrontmatterParser, input: S) -> BatchOutcome
where
    S: Stream,
    S::Item: Into<TestInput>,
{
    let results: Vec<Result<ParsedTest>> = parse_stream(parser, input).collect().await;

    let mut outcome = BatchOutcome::default();
    for result in results {
        outcome.record(result);
    }

    if outcome.is_clean() {
        tracing::info!("Parsed {} files", outcome.total());
    } else {
        tracing::info!(
            "Parsed {} of {} files, {} failed",
            outcome.parsed.len(),
            outcome.total(),
            outcome.errors.len()
        );
    }

    outcome
}

/// Synchronous counterpart of [`parse_batch`].
pub fn parse_batch_iter<I>(parser: FrontmatterParser, input: I) -> BatchOutcome
where
    I: IntoIterator,
    I::Item: Into<TestInput>,
{
    let mut outcome = BatchOutcome::default();
    for result in parse_iter(parser, input) {
        outcome.record(result);
    }
    tracing::debug!("Parsed {} of {} files", outcome.parsed.len(), outcome.total());
    outcome
}
