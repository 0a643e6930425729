//! Unit tests for command-line parsing.
//!
//! These tests verify that the parser correctly handles:
//! - Short and long spellings of every option
//! - Repeated and counted options
//! - The recursive/no-recursive override order
//! - Operands, including paths that look like option values

use std::ffi::OsString;

use super::*;

fn parse_test_args<I, S>(args: I) -> Result<ParsedArgs, clap::Error>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let iter = std::iter::once("dirsync".to_string())
        .chain(args.into_iter().map(|s| s.as_ref().to_string()));
    parse_args(iter)
}

// ============================================================================
// Defaults
// ============================================================================

#[test]
fn bare_operands_use_defaults() {
    let parsed = parse_test_args(["src", "dst"]).expect("parse");
    assert!(!parsed.show_help);
    assert!(!parsed.show_version);
    assert_eq!(parsed.operations, None);
    assert!(parsed.excludes.is_empty());
    assert!(parsed.recursive);
    assert_eq!(parsed.verbosity, 0);
    assert!(!parsed.quiet);
    assert_eq!(
        parsed.operands,
        [OsString::from("src"), OsString::from("dst")]
    );
}

#[test]
fn help_and_version_flags() {
    assert!(parse_test_args(["-h"]).expect("parse").show_help);
    assert!(parse_test_args(["--help"]).expect("parse").show_help);
    assert!(parse_test_args(["-V"]).expect("parse").show_version);
    assert!(parse_test_args(["--version"]).expect("parse").show_version);
}

// ============================================================================
// Values
// ============================================================================

#[test]
fn operations_accept_short_long_and_equals_forms() {
    for args in [
        ["-o", "delete", "s", "t"].as_slice(),
        ["--operations", "delete", "s", "t"].as_slice(),
        ["--operations=delete", "s", "t"].as_slice(),
    ] {
        let parsed = parse_test_args(args).expect("parse");
        assert_eq!(parsed.operations.as_deref(), Some("delete"));
    }
}

#[test]
fn exclusions_are_collected_in_order() {
    let parsed =
        parse_test_args(["-e", "a", "--exclude", "b:1", "--exclude=c", "s", "t"]).expect("parse");
    assert_eq!(parsed.excludes, ["a", "b:1", "c"]);
}

#[test]
fn exclusion_value_may_start_with_a_dot() {
    let parsed = parse_test_args(["-e", ".git", "s", "t"]).expect("parse");
    assert_eq!(parsed.excludes, [".git"]);
}

#[test]
fn missing_option_value_is_an_error() {
    assert!(parse_test_args(["s", "t", "-o"]).is_err());
}

#[test]
fn unknown_option_is_an_error() {
    let error = parse_test_args(["--delete-after", "s", "t"]).expect_err("rejected");
    assert_eq!(error.kind(), clap::error::ErrorKind::UnknownArgument);
}

// ============================================================================
// Flags
// ============================================================================

#[test]
fn verbose_is_counted() {
    assert_eq!(parse_test_args(["-v", "s", "t"]).expect("parse").verbosity, 1);
    assert_eq!(parse_test_args(["-vv", "s", "t"]).expect("parse").verbosity, 2);
    assert_eq!(
        parse_test_args(["-v", "--verbose", "-v", "s", "t"])
            .expect("parse")
            .verbosity,
        3
    );
}

#[test]
fn last_recursion_flag_wins() {
    assert!(!parse_test_args(["--no-recursive", "s", "t"]).expect("parse").recursive);
    assert!(
        parse_test_args(["--no-recursive", "-r", "s", "t"])
            .expect("parse")
            .recursive
    );
    assert!(
        !parse_test_args(["-r", "--no-recursive", "s", "t"])
            .expect("parse")
            .recursive
    );
}

#[test]
fn info_tokens_are_collected() {
    let parsed = parse_test_args(["--info", "walk2", "--info=copy0", "s", "t"]).expect("parse");
    assert_eq!(parsed.info, ["walk2", "copy0"]);
}

// ============================================================================
// Operands
// ============================================================================

#[test]
fn options_may_follow_operands() {
    let parsed = parse_test_args(["s", "t", "-q"]).expect("parse");
    assert!(parsed.quiet);
    assert_eq!(parsed.operands.len(), 2);
}

#[test]
fn double_dash_ends_option_parsing() {
    let parsed = parse_test_args(["--", "-odd", "t"]).expect("parse");
    assert_eq!(
        parsed.operands,
        [OsString::from("-odd"), OsString::from("t")]
    );
}

#[test]
fn operand_count_is_not_checked_by_the_parser() {
    assert!(parse_test_args(Vec::<&str>::new()).expect("parse").operands.is_empty());
    assert_eq!(
        parse_test_args(["a", "b", "c"]).expect("parse").operands.len(),
        3
    );
}
