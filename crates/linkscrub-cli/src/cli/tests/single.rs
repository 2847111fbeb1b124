//! Tests for commands taking URLs on the command line.

use super::parse;
use crate::cli::{Cli, CliCommand};
use clap::Parser;

#[test]
fn cli_parse_strip_with_policy() {
    match parse(&[
        "linkscrub",
        "strip",
        "https://a.com/?utm_source=x",
        "https://b.com",
        "--custom",
        "ref",
        "--keep",
        "page",
        "--keep",
        "q",
    ]) {
        CliCommand::Strip { urls, custom, keep } => {
            assert_eq!(urls.len(), 2);
            assert_eq!(custom, vec!["ref"]);
            assert_eq!(keep, vec!["page", "q"]);
        }
        _ => panic!("expected Strip"),
    }
}

#[test]
fn cli_strip_requires_url() {
    assert!(Cli::try_parse_from(["linkscrub", "strip"]).is_err());
}

#[test]
fn cli_parse_has_tracking() {
    match parse(&["linkscrub", "has-tracking", "https://a.com/?gclid=1"]) {
        CliCommand::HasTracking { url } => assert_eq!(url, "https://a.com/?gclid=1"),
        _ => panic!("expected HasTracking"),
    }
}

#[test]
fn cli_parse_classify_json() {
    match parse(&["linkscrub", "classify", "https://youtu.be/x", "--json"]) {
        CliCommand::Classify { url, json } => {
            assert_eq!(url, "https://youtu.be/x");
            assert!(json);
        }
        _ => panic!("expected Classify"),
    }
}

#[test]
fn cli_parse_relative_with_site() {
    match parse(&["linkscrub", "relative", "https://mysite.com/a", "--site", "https://mysite.com"]) {
        CliCommand::Relative { url, site } => {
            assert_eq!(url, "https://mysite.com/a");
            assert_eq!(site.as_deref(), Some("https://mysite.com"));
        }
        _ => panic!("expected Relative"),
    }
}

#[test]
fn cli_parse_tag() {
    match parse(&[
        "linkscrub",
        "tag",
        "https://shop.com/",
        "--source",
        "newsletter",
        "--campaign",
        "spring",
        "--admin",
    ]) {
        CliCommand::Tag {
            source,
            campaign,
            medium,
            admin,
            ..
        } => {
            assert_eq!(source, "newsletter");
            assert_eq!(campaign, "spring");
            assert!(medium.is_none());
            assert!(admin);
        }
        _ => panic!("expected Tag"),
    }
}

#[test]
fn cli_parse_probe() {
    match parse(&["linkscrub", "probe", "https://a.com", "https://b.com", "--timeout", "3"]) {
        CliCommand::Probe { urls, timeout, json } => {
            assert_eq!(urls, vec!["https://a.com", "https://b.com"]);
            assert_eq!(timeout, Some(3));
            assert!(!json);
        }
        _ => panic!("expected Probe"),
    }
}

#[test]
fn cli_parse_global_config() {
    let cli = Cli::try_parse_from(["linkscrub", "params", "--config", "/tmp/ls.toml"]).unwrap();
    assert_eq!(cli.config.as_deref(), Some(std::path::Path::new("/tmp/ls.toml")));
    assert!(matches!(cli.command, CliCommand::Params));
}

#[test]
fn cli_parse_completions() {
    match parse(&["linkscrub", "completions", "bash"]) {
        CliCommand::Completions { shell } => assert_eq!(shell, clap_complete::Shell::Bash),
        _ => panic!("expected Completions"),
    }
    assert!(Cli::try_parse_from(["linkscrub", "completions", "cmd.exe"]).is_err());
}

#[test]
fn cli_parse_scheme() {
    match parse(&["linkscrub", "scheme", "example.com", "//cdn.example.com/x", "--scheme", "http"]) {
        CliCommand::Scheme { urls, scheme } => {
            assert_eq!(urls, vec!["example.com", "//cdn.example.com/x"]);
            assert_eq!(scheme.as_deref(), Some("http"));
        }
        _ => panic!("expected Scheme"),
    }
    match parse(&["linkscrub", "scheme", "example.com"]) {
        CliCommand::Scheme { scheme, .. } => assert!(scheme.is_none()),
        _ => panic!("expected Scheme"),
    }
}
