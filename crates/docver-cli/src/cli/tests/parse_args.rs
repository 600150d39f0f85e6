//! Tests for argument parsing of every subcommand.

use super::parse;
use crate::cli::{Cli, CliCommand};
use clap::Parser;

#[test]
fn cli_parse_rewrite() {
    match parse(&["docver", "rewrite", "https://h/javadocs/x/1.0/", "2.0"]) {
        CliCommand::Rewrite { url, version } => {
            assert_eq!(url, "https://h/javadocs/x/1.0/");
            assert_eq!(version, "2.0");
        }
        _ => panic!("expected Rewrite"),
    }
}

#[test]
fn cli_parse_rewrite_empty_version() {
    match parse(&["docver", "rewrite", "site/javadocs/x/1.0/", ""]) {
        CliCommand::Rewrite { version, .. } => assert_eq!(version, ""),
        _ => panic!("expected Rewrite"),
    }
}

#[test]
fn cli_parse_switch() {
    match parse(&["docver", "switch", "https://h/javadocs/x/1.0/", "3"]) {
        CliCommand::Switch { url, version } => {
            assert_eq!(url, "https://h/javadocs/x/1.0/");
            assert_eq!(version, "3");
        }
        _ => panic!("expected Switch"),
    }
}

#[test]
fn cli_parse_current() {
    match parse(&["docver", "current", "https://h/javadocs/x/1.0/"]) {
        CliCommand::Current { url } => assert_eq!(url, "https://h/javadocs/x/1.0/"),
        _ => panic!("expected Current"),
    }
}

#[test]
fn cli_parse_options() {
    match parse(&["docver", "options", "https://h/"]) {
        CliCommand::Options { url, json } => {
            assert_eq!(url, "https://h/");
            assert!(!json);
        }
        _ => panic!("expected Options"),
    }
}

#[test]
fn cli_parse_options_json() {
    match parse(&["docver", "options", "https://h/", "--json"]) {
        CliCommand::Options { json, .. } => assert!(json),
        _ => panic!("expected Options with --json"),
    }
}

#[test]
fn cli_parse_global_config() {
    let cli = Cli::try_parse_from(["docver", "current", "u", "--config", "/tmp/docver.toml"]).unwrap();
    assert_eq!(cli.config.as_deref(), Some(std::path::Path::new("/tmp/docver.toml")));
    let cli = Cli::try_parse_from(["docver", "current", "u"]).unwrap();
    assert!(cli.config.is_none());
}

#[test]
fn cli_rewrite_requires_version() {
    assert!(Cli::try_parse_from(["docver", "rewrite", "https://h/"]).is_err());
}
