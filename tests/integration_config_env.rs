//! Environment overrides read from the real process environment.
//!
//! Kept in its own test binary with a single test: it is the only code in
//! this process that touches the environment.

use t262_frontmatter::constants::ENV_CLOSING_MARKER_SEARCH;
use t262_frontmatter::{ClosingMarkerSearch, FrontmatterError, ParserConfig};

#[test]
fn test_apply_env_overrides() {
    // SAFETY: this binary runs a single test, so no other thread reads or
    // writes the environment concurrently.
    unsafe { std::env::remove_var(ENV_CLOSING_MARKER_SEARCH) };
    let config = ParserConfig::default().apply_env_overrides().unwrap();
    assert_eq!(config, ParserConfig::default());

    // SAFETY: see above.
    unsafe { std::env::set_var(ENV_CLOSING_MARKER_SEARCH, "from-start") };
    let config = ParserConfig::default().apply_env_overrides().unwrap();
    assert_eq!(config.closing_marker_search, ClosingMarkerSearch::FromStart);
    assert_eq!(config.unknown_file_name, "<unknown>");

    // SAFETY: see above.
    unsafe { std::env::set_var(ENV_CLOSING_MARKER_SEARCH, "sideways") };
    let err = ParserConfig::default().apply_env_overrides().unwrap_err();
    match err {
        FrontmatterError::ConfigParse { path, message } => {
            assert_eq!(path, ENV_CLOSING_MARKER_SEARCH);
            assert!(message.contains("sideways"));
        }
        other => panic!("unexpected error: {other:?}"),
    }

    // SAFETY: see above.
    unsafe { std::env::remove_var(ENV_CLOSING_MARKER_SEARCH) };
}
