//! Tests for command-line argument parsing.

use crate::cli::parse_args;
use crate::config::WriteMode;
use crate::error::Stage;

fn parse(args: &[&str]) -> Result<crate::cli::TeeArgs, crate::error::TeeError> {
    parse_args(args.iter().map(|s| s.to_string()))
}

#[test]
fn no_args_gives_defaults() {
    let args = parse(&[]).unwrap();
    assert_eq!(args.write_mode, WriteMode::Truncate);
    assert!(!args.ignore_interrupts);
    assert!(args.files.is_empty());
}

#[test]
fn append_switch_selects_append_mode() {
    let args = parse(&["-a", "out.txt"]).unwrap();
    assert_eq!(args.write_mode, WriteMode::Append);
    assert_eq!(args.files, vec!["out.txt"]);
}

#[test]
fn interrupt_switch_sets_flag() {
    let args = parse(&["-i"]).unwrap();
    assert!(args.ignore_interrupts);
    assert_eq!(args.write_mode, WriteMode::Truncate);
}

#[test]
fn clustered_switches() {
    let args = parse(&["-ai", "a.txt", "b.txt"]).unwrap();
    assert_eq!(args.write_mode, WriteMode::Append);
    assert!(args.ignore_interrupts);
    assert_eq!(args.files, vec!["a.txt", "b.txt"]);
}

#[test]
fn switches_in_any_order_before_files() {
    let args = parse(&["-i", "-a", "x"]).unwrap();
    assert_eq!(args.write_mode, WriteMode::Append);
    assert!(args.ignore_interrupts);
    assert_eq!(args.files, vec!["x"]);
}

#[test]
fn first_non_switch_ends_option_scanning() {
    // "-a" after a file name is a file name, not a switch.
    let args = parse(&["f1", "-a"]).unwrap();
    assert_eq!(args.write_mode, WriteMode::Truncate);
    assert_eq!(args.files, vec!["f1", "-a"]);
}

#[test]
fn double_dash_ends_option_scanning() {
    let args = parse(&["-a", "--", "-i"]).unwrap();
    assert_eq!(args.write_mode, WriteMode::Append);
    assert!(!args.ignore_interrupts);
    assert_eq!(args.files, vec!["-i"]);
}

#[test]
fn bare_dash_is_a_file_name() {
    let args = parse(&["-"]).unwrap();
    assert_eq!(args.files, vec!["-"]);
}

#[test]
fn unrecognized_switch_is_fatal_and_named() {
    let err = parse(&["-x", "out.txt"]).expect_err("expected parse failure");
    assert_eq!(err.stage, Stage::ParseArgs);
    assert_eq!(err.target, "-x");
}

#[test]
fn unrecognized_switch_inside_cluster_is_named() {
    let err = parse(&["-az"]).expect_err("expected parse failure");
    assert_eq!(err.stage, Stage::ParseArgs);
    assert_eq!(err.target, "-z");
}
