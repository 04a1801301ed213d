//! Tests for CLI dispatch logic.

use std::path::PathBuf;

use super::*;
use crate::cli::commands::{check_command, dump_command, resolve_command};

#[test]
fn check_takes_layout_path() {
    let m = check_command()
        .try_get_matches_from(["check", "groups.json"])
        .unwrap();
    let params = CheckParams::from_matches(&m);
    assert_eq!(params.layout_path, PathBuf::from("groups.json"));
}

#[test]
fn check_requires_layout_path() {
    let result = check_command().try_get_matches_from(["check"]);
    assert!(result.is_err());
}

#[test]
fn dump_defaults() {
    let m = dump_command()
        .try_get_matches_from(["dump", "groups.json"])
        .unwrap();
    let params = DumpParams::from_matches(&m);

    assert_eq!(params.group, None);
    assert_eq!(params.color, ColorChoice::Auto);
}

#[test]
fn dump_group_and_color() {
    let m = dump_command()
        .try_get_matches_from(["dump", "-", "-g", "vtables", "--color", "never"])
        .unwrap();
    let params = DumpParams::from_matches(&m);

    assert_eq!(params.layout_path, PathBuf::from("-"));
    assert_eq!(params.group.as_deref(), Some("vtables"));
    assert_eq!(params.color, ColorChoice::Never);
    assert!(!params.color.should_colorize());
}

#[test]
fn dump_rejects_unknown_color() {
    let result =
        dump_command().try_get_matches_from(["dump", "groups.json", "--color", "sometimes"]);
    assert!(result.is_err());
}

#[test]
fn resolve_params() {
    let m = resolve_command()
        .try_get_matches_from([
            "resolve",
            "groups.json",
            "--group",
            "type_info",
            "--member",
            "int_type",
            "--skip",
            "16",
        ])
        .unwrap();
    let params = ResolveParams::from_matches(&m);

    assert_eq!(params.group, "type_info");
    assert_eq!(params.member, "int_type");
    assert_eq!(params.skip, 16);
}

#[test]
fn resolve_skip_defaults_to_zero() {
    let m = resolve_command()
        .try_get_matches_from(["resolve", "groups.json", "-g", "g", "-m", "m"])
        .unwrap();
    assert_eq!(ResolveParams::from_matches(&m).skip, 0);
}

#[test]
fn resolve_requires_group_and_member() {
    assert!(
        resolve_command()
            .try_get_matches_from(["resolve", "groups.json", "-m", "m"])
            .is_err()
    );
    assert!(
        resolve_command()
            .try_get_matches_from(["resolve", "groups.json", "-g", "g"])
            .is_err()
    );
}

#[test]
fn resolve_rejects_negative_skip() {
    let result = resolve_command()
        .try_get_matches_from(["resolve", "groups.json", "-g", "g", "-m", "m", "--skip", "-1"]);
    assert!(result.is_err());
}

#[test]
fn cli_requires_subcommand() {
    assert!(build_cli().try_get_matches_from(["llgroup"]).is_err());
}
