//! Tests for commands reading URL lists or text.

use super::parse;
use crate::cli::CliCommand;
use std::path::Path;

#[test]
fn cli_parse_sanitize_stdin() {
    match parse(&["linkscrub", "sanitize"]) {
        CliCommand::Sanitize {
            input,
            custom,
            keep,
        } => {
            assert!(input.is_none());
            assert!(custom.is_empty());
            assert!(keep.is_empty());
        }
        _ => panic!("expected Sanitize"),
    }
}

#[test]
fn cli_parse_sanitize_file() {
    match parse(&["linkscrub", "sanitize", "--input", "links.txt", "--keep", "ref"]) {
        CliCommand::Sanitize { input, keep, .. } => {
            assert_eq!(input.as_deref(), Some(Path::new("links.txt")));
            assert_eq!(keep, vec!["ref"]);
        }
        _ => panic!("expected Sanitize"),
    }
}

#[test]
fn cli_parse_extract() {
    match parse(&["linkscrub", "extract", "notes.md"]) {
        CliCommand::Extract { file } => assert_eq!(file.as_deref(), Some(Path::new("notes.md"))),
        _ => panic!("expected Extract"),
    }
    match parse(&["linkscrub", "extract"]) {
        CliCommand::Extract { file } => assert!(file.is_none()),
        _ => panic!("expected Extract"),
    }
}

#[test]
fn cli_parse_filter() {
    match parse(&[
        "linkscrub",
        "filter",
        "--location",
        "external",
        "--type",
        "video",
        "--site",
        "mysite.com",
    ]) {
        CliCommand::Filter {
            location,
            protocol,
            link_type,
            site,
            input,
        } => {
            assert_eq!(location.as_deref(), Some("external"));
            assert!(protocol.is_none());
            assert_eq!(link_type.as_deref(), Some("video"));
            assert_eq!(site.as_deref(), Some("mysite.com"));
            assert!(input.is_none());
        }
        _ => panic!("expected Filter"),
    }
}

#[test]
fn cli_parse_domains_and_params() {
    match parse(&["linkscrub", "domains", "--input", "urls.txt"]) {
        CliCommand::Domains { input } => assert_eq!(input.as_deref(), Some(Path::new("urls.txt"))),
        _ => panic!("expected Domains"),
    }
    assert!(matches!(parse(&["linkscrub", "params"]), CliCommand::Params));
}
