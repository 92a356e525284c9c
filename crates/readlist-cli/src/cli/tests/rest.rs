//! Tests for list, tags, mark, and delete.

use super::parse;
use crate::cli::{Cli, CliCommand, StatusArg};
use clap::Parser;
use readlist_core::store::ItemStatus;

#[test]
fn cli_parse_list() {
    match parse(&["readlist", "list"]) {
        CliCommand::List { status } => assert!(status.is_none()),
        _ => panic!("expected List"),
    }
    match parse(&["readlist", "list", "--status", "next"]) {
        CliCommand::List { status } => assert_eq!(status, Some(StatusArg::Next)),
        _ => panic!("expected List with --status"),
    }
}

#[test]
fn cli_parse_tags() {
    match parse(&["readlist", "tags"]) {
        CliCommand::Tags => {}
        _ => panic!("expected Tags"),
    }
}

#[test]
fn cli_parse_mark() {
    match parse(&["readlist", "mark", "42", "done"]) {
        CliCommand::Mark { id, status } => {
            assert_eq!(id, 42);
            assert_eq!(ItemStatus::from(status), ItemStatus::Done);
        }
        _ => panic!("expected Mark"),
    }
}

#[test]
fn cli_parse_mark_rejects_unknown_state() {
    assert!(Cli::try_parse_from(["readlist", "mark", "1", "archived"]).is_err());
}

#[test]
fn cli_parse_delete() {
    match parse(&["readlist", "delete", "7"]) {
        CliCommand::Delete { id } => assert_eq!(id, 7),
        _ => panic!("expected Delete"),
    }
}
