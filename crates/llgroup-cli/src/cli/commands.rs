//! Command builders for the CLI.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("llgroup")
        .about("Check and inspect compact-offset group layouts")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(check_command())
        .subcommand(dump_command())
        .subcommand(resolve_command())
}

/// Validate layout descriptions as a build step.
pub fn check_command() -> Command {
    Command::new("check")
        .about("Verify every group fits 16-bit compact offsets")
        .after_help(
            r#"EXAMPLES:
  llgroup check groups.json           # exit 1 on the first invalid group
  gen-groups | llgroup check -        # read from stdin"#,
        )
        .arg(layout_path_arg())
}

/// Print layout tables.
pub fn dump_command() -> Command {
    Command::new("dump")
        .about("Show member offsets of each group")
        .after_help(
            r#"EXAMPLES:
  llgroup dump groups.json            # every group
  llgroup dump groups.json -g vtables # one group"#,
        )
        .arg(layout_path_arg())
        .arg(group_arg())
        .arg(color_arg())
}

/// Encode one member and decode it back with an optional skip.
pub fn resolve_command() -> Command {
    Command::new("resolve")
        .about("Show a member's compact offset and byte position")
        .after_help(
            r#"EXAMPLES:
  llgroup resolve groups.json -g type_info -m int_type
  llgroup resolve groups.json -g type_info -m int_type --skip 16"#,
        )
        .arg(layout_path_arg())
        .arg(group_arg().required(true))
        .arg(member_arg())
        .arg(skip_arg())
}
