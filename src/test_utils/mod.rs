//! Test utilities for t262-frontmatter
//!
//! Helpers shared by unit tests and the integration tests under `tests/`:
//! - one-time tracing initialization for test output
//! - builders for test262-shaped source files
//!
//! # Example
//!
//! ```rust,no_run
//! use t262_frontmatter::parse_file;
//! use t262_frontmatter::test_utils::{TestFileFixture, init_test_logging};
//!
//! init_test_logging(None);
//!
//! let file = TestFileFixture::new("S7.2_A1.1_T1.js")
//!     .with_frontmatter("es5id: 7.2_A1.1_T1\nflags: [noStrict]")
//!     .with_body("var x = 1;\n")
//!     .build();
//! let parsed = parse_file(file).unwrap();
//! assert!(parsed.attrs.has_flag("noStrict"));
//! ```

pub mod fixtures;

pub use fixtures::TestFileFixture;

use std::sync::Once;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Global flag to ensure logging is only initialized once in tests
static INIT_LOGGING: Once = Once::new();

/// Initialize logging for tests.
///
/// Only the first call has an effect. Uses `level` when given, otherwise
/// `RUST_LOG`; with neither, logging stays off.
///
/// ```bash
/// RUST_LOG=t262_frontmatter=debug cargo test
/// ```
pub fn init_test_logging(level: Option<Level>) {
    INIT_LOGGING.call_once(|| {
        let filter = if let Some(level) = level {
            EnvFilter::new(level.to_string())
        } else if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            return;
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .with_thread_ids(false)
            .with_ansi(true)
            .try_init();
    });
}
