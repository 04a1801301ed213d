//! Shared argument builders for CLI commands.

use std::path::PathBuf;

use clap::{Arg, value_parser};

/// Layout description file (positional, `-` for stdin).
pub fn layout_path_arg() -> Arg {
    Arg::new("layout_path")
        .value_name("LAYOUT")
        .value_parser(value_parser!(PathBuf))
        .required(true)
        .help("JSON layout description (- for stdin)")
}

/// Group selector (-g/--group).
pub fn group_arg() -> Arg {
    Arg::new("group")
        .short('g')
        .long("group")
        .value_name("NAME")
        .help("Group name")
}

/// Member selector (-m/--member).
pub fn member_arg() -> Arg {
    Arg::new("member")
        .short('m')
        .long("member")
        .value_name("NAME")
        .required(true)
        .help("Member name")
}

/// Raw byte skip past the member (--skip).
pub fn skip_arg() -> Arg {
    Arg::new("skip")
        .long("skip")
        .value_name("BYTES")
        .value_parser(value_parser!(usize))
        .default_value("0")
        .help("Extra bytes past the member (not word-scaled)")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize output")
}
