//! Tests for canonicalize, save, and check subcommands.

use super::parse;
use crate::cli::{Cli, CliCommand, SourceArg};
use clap::Parser;

#[test]
fn cli_parse_canonicalize() {
    match parse(&["readlist", "canonicalize", "HTTPS://EXAMPLE.COM/a/"]) {
        CliCommand::Canonicalize { url } => assert_eq!(url, "HTTPS://EXAMPLE.COM/a/"),
        _ => panic!("expected Canonicalize"),
    }
}

#[test]
fn cli_parse_save_minimal() {
    match parse(&[
        "readlist",
        "save",
        "https://example.com/post",
        "--title",
        "A post",
    ]) {
        CliCommand::Save {
            url,
            title,
            tags,
            source,
        } => {
            assert_eq!(url, "https://example.com/post");
            assert_eq!(title, "A post");
            assert!(tags.is_empty());
            assert!(source.is_none());
        }
        _ => panic!("expected Save"),
    }
}

#[test]
fn cli_parse_save_tags_and_source() {
    match parse(&[
        "readlist",
        "save",
        "https://example.com/post",
        "--title",
        "A post",
        "--tag",
        "rust",
        "--tag",
        "async",
        "--source",
        "ios-shortcut",
    ]) {
        CliCommand::Save { tags, source, .. } => {
            assert_eq!(tags, vec!["rust".to_string(), "async".to_string()]);
            assert_eq!(source, Some(SourceArg::IosShortcut));
        }
        _ => panic!("expected Save with tags"),
    }
}

#[test]
fn cli_parse_save_requires_title() {
    assert!(Cli::try_parse_from(["readlist", "save", "https://example.com"]).is_err());
}

#[test]
fn cli_parse_check() {
    match parse(&["readlist", "check", "https://example.com/?utm_source=x"]) {
        CliCommand::Check { url } => assert_eq!(url, "https://example.com/?utm_source=x"),
        _ => panic!("expected Check"),
    }
}
