use std::sync::Once;

use pretty_assertions::assert_eq;
use refresh_engine::{extract_sources, WatchError, DEFAULT_SCRIPT_PATTERN};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(refresh_logging::initialize_for_tests);
}

#[test]
fn default_pattern_captures_double_and_single_quoted_sources() {
    init_logging();
    let html = concat!(
        "<html><head>\n",
        "<script src=\"/static/app.abc123.js\"></script>\n",
        "<script type=\"module\" src='/static/vendor.def456.js'></script>\n",
        "</head><body></body></html>\n",
    );

    let sources = extract_sources(html, DEFAULT_SCRIPT_PATTERN).unwrap();
    assert_eq!(
        sources,
        vec![
            "/static/app.abc123.js".to_string(),
            "/static/vendor.def456.js".to_string(),
        ]
    );
}

#[test]
fn matches_keep_document_order_and_duplicates() {
    init_logging();
    let html = concat!(
        "<script src=\"/b.js\"></script>\n",
        "<script src=\"/a.js\"></script>\n",
        "<script src=\"/b.js\"></script>\n",
    );

    let sources = extract_sources(html, DEFAULT_SCRIPT_PATTERN).unwrap();
    assert_eq!(
        sources,
        vec!["/b.js".to_string(), "/a.js".to_string(), "/b.js".to_string()]
    );
}

#[test]
fn scan_covers_the_entire_document() {
    init_logging();
    let mut html = String::from("<script src=\"/head.js\"></script>\n");
    for _ in 0..200 {
        html.push_str("<p>filler paragraph</p>\n");
    }
    html.push_str("<script src=\"/tail.js\"></script>\n");

    let sources = extract_sources(&html, DEFAULT_SCRIPT_PATTERN).unwrap();
    assert_eq!(sources, vec!["/head.js".to_string(), "/tail.js".to_string()]);
}

#[test]
fn no_matches_yield_an_empty_sequence() {
    init_logging();
    let html = "<html><body><p>nothing to see</p></body></html>";

    let sources = extract_sources(html, DEFAULT_SCRIPT_PATTERN).unwrap();
    assert_eq!(sources, Vec::<String>::new());
}

#[test]
fn repeated_invocations_share_no_scan_state() {
    init_logging();
    let html = "<script src=\"/only.js\"></script>";

    let first = extract_sources(html, DEFAULT_SCRIPT_PATTERN).unwrap();
    let second = extract_sources(html, DEFAULT_SCRIPT_PATTERN).unwrap();
    assert_eq!(first, second);
    assert_eq!(first, vec!["/only.js".to_string()]);
}

#[test]
fn pattern_without_a_capture_group_yields_opaque_entries() {
    init_logging();
    let html = "<script src=\"/a.js\"></script>\n<script src=\"/b.js\"></script>\n";

    // One empty entry per match; the entries are equal among themselves,
    // so only a change in match count can register downstream.
    let sources = extract_sources(html, "<script").unwrap();
    assert_eq!(sources, vec![String::new(), String::new()]);
}

#[test]
fn invalid_pattern_is_an_error() {
    init_logging();
    let result = extract_sources("<html></html>", "([");
    assert!(matches!(result, Err(WatchError::Pattern(_))));
}

#[test]
fn custom_pattern_extracts_other_resources() {
    init_logging();
    let html = concat!(
        "<link rel=\"stylesheet\" href=\"/style.1.css\">\n",
        "<link rel=\"stylesheet\" href=\"/style.2.css\">\n",
    );

    let sources = extract_sources(html, r#"<link.*href=["']([^"']+)"#).unwrap();
    assert_eq!(
        sources,
        vec!["/style.1.css".to_string(), "/style.2.css".to_string()]
    );
}
