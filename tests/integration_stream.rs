//! Stream and batch processing over fixture files.

mod common;

use common::{fixture, fixture_text, init_test_env};
use futures::stream::{self, StreamExt};
use t262_frontmatter::stream::{parse_batch_iter, parse_iter};
use t262_frontmatter::{FrontmatterParser, TestFile, parse_batch, parse_stream};

fn s72() -> TestFile {
    TestFile::new("S72", fixture_text("S7.2_A1.1_T1.js"))
}

#[tokio::test]
async fn test_stream_reports_one_success_and_one_error() {
    init_test_env();

    let input = stream::iter(vec![s72(), fixture("badYAML.js")]);
    let mut results = parse_stream(FrontmatterParser::new(), input);

    let mut processed = 0;
    let mut errors = 0;
    while let Some(result) = results.next().await {
        match result {
            Ok(parsed) => {
                assert_eq!(parsed.file, "S72");
                assert_eq!(parsed.attrs.get_str("es5id"), Some("7.2_A1.1_T1"));
                processed += 1;
            }
            Err(e) => {
                assert!(e.to_string().starts_with("Error loading frontmatter from file badYAML.js"));
                errors += 1;
            }
        }
    }

    assert_eq!(processed, 1);
    assert_eq!(errors, 1);
}

#[tokio::test]
async fn test_batch_over_corpus() {
    init_test_env();

    let names = [
        "S7.2_A1.1_T1.js",
        "11.4.1-5-a-5gs.js",
        "async.js",
        "badYAML.js",
        "issue_9.js",
        "no_newline.js",
        "promise_length.js",
    ];
    let outcome = parse_batch(FrontmatterParser::new(), stream::iter(names.map(fixture))).await;

    assert_eq!(outcome.total(), names.len());
    assert_eq!(outcome.parsed.len(), 6);
    assert_eq!(outcome.errors.len(), 1);
    assert_eq!(outcome.errors[0].file(), Some("badYAML.js"));
    // issue_9.js has no copyright header
    assert_eq!(outcome.tests().count(), 5);

    let order: Vec<&str> = outcome.parsed.iter().map(|p| p.file.as_str()).collect();
    assert_eq!(
        order,
        vec![
            "S7.2_A1.1_T1.js",
            "11.4.1-5-a-5gs.js",
            "async.js",
            "issue_9.js",
            "no_newline.js",
            "promise_length.js",
        ]
    );
}

#[tokio::test]
async fn test_stream_accepts_bare_text() {
    let input = stream::iter(vec![fixture_text("async.js"), String::from("var foo = 3;")]);
    let parsed: Vec<_> = parse_stream(FrontmatterParser::new(), input).collect().await;

    let parsed: Vec<_> = parsed.into_iter().map(Result::unwrap).collect();
    assert!(parsed.iter().all(|p| p.file == "<unknown>"));
    assert!(parsed[0].is_async);
    assert_eq!(parsed[1].body, "var foo = 3;");
}

#[test]
fn test_iterator_adapter_matches_stream() {
    let files = vec![s72(), fixture("badYAML.js"), fixture("promise_length.js")];

    let oks: Vec<bool> = parse_iter(FrontmatterParser::new(), &files).map(|r| r.is_ok()).collect();
    assert_eq!(oks, vec![true, false, true]);

    let outcome = parse_batch_iter(FrontmatterParser::new(), &files);
    assert!(!outcome.is_clean());
    assert!(outcome.error_report().contains("Suggestion:"));
}
