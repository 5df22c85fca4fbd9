// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::panic)]

use super::*;
use yare::parameterized;

fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
    Cli::try_parse_from(args)
}

#[test]
fn parse_dash_c_before_subcommand() {
    let cli = parse(&["lanes", "-C", "/tmp", "show"]).unwrap();
    assert_eq!(cli.directory, Some("/tmp".to_string()));
}

#[test]
fn parse_verbose_after_subcommand() {
    let cli = parse(&["lanes", "show", "--verbose"]).unwrap();
    assert!(cli.verbose);
}

#[parameterized(
    default = { &["lanes", "show"], OutputFormat::Text },
    short_json = { &["lanes", "show", "-o", "json"], OutputFormat::Json },
    long_text = { &["lanes", "show", "--output", "text"], OutputFormat::Text },
)]
fn show_output_format(args: &[&str], expected: OutputFormat) {
    match parse(args).unwrap().command {
        Command::Show { output } => assert_eq!(output, expected),
        _ => panic!("expected Show"),
    }
}

#[test]
fn show_rejects_unknown_format() {
    assert!(parse(&["lanes", "show", "-o", "yaml"]).is_err());
}

#[test]
fn move_card_positional_args() {
    match parse(&["lanes", "move-card", "c1", "y", "3"]).unwrap().command {
        Command::MoveCard {
            card,
            column,
            index,
        } => {
            assert_eq!(card, "c1");
            assert_eq!(column, "y");
            assert_eq!(index, 3);
        }
        _ => panic!("expected MoveCard"),
    }
}

#[test]
fn move_column_rejects_negative_position() {
    assert!(parse(&["lanes", "move-column", "x", "-1"]).is_err());
}

#[test]
fn init_with_remote() {
    match parse(&["lanes", "init", "--remote", "ws://localhost:7070", "-b", "b1"])
        .unwrap()
        .command
    {
        Command::Init {
            board,
            remote,
            user,
            path,
        } => {
            assert_eq!(board.as_deref(), Some("b1"));
            assert_eq!(remote.as_deref(), Some("ws://localhost:7070"));
            assert_eq!(user, None);
            assert_eq!(path, None);
        }
        _ => panic!("expected Init"),
    }
}

#[test]
fn drop_requires_event() {
    assert!(parse(&["lanes", "drop"]).is_err());
}

#[test]
fn cli_definition_is_consistent() {
    use clap::CommandFactory;
    Cli::command().debug_assert();
}
