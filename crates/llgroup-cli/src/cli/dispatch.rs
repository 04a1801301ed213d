//! Dispatch logic: extract params from ArgMatches and convert to command args.

use std::path::PathBuf;

use clap::ArgMatches;

use super::ColorChoice;
use crate::commands::check::CheckArgs;
use crate::commands::dump::DumpArgs;
use crate::commands::resolve::ResolveArgs;

pub struct CheckParams {
    pub layout_path: PathBuf,
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            layout_path: layout_path(m),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self {
            layout_path: p.layout_path,
        }
    }
}

pub struct DumpParams {
    pub layout_path: PathBuf,
    pub group: Option<String>,
    pub color: ColorChoice,
}

impl DumpParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            layout_path: layout_path(m),
            group: m.get_one::<String>("group").cloned(),
            color: parse_color(m),
        }
    }
}

impl From<DumpParams> for DumpArgs {
    fn from(p: DumpParams) -> Self {
        Self {
            layout_path: p.layout_path,
            group: p.group,
            color: p.color.should_colorize(),
        }
    }
}

pub struct ResolveParams {
    pub layout_path: PathBuf,
    pub group: String,
    pub member: String,
    pub skip: usize,
}

impl ResolveParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            layout_path: layout_path(m),
            group: m
                .get_one::<String>("group")
                .cloned()
                .expect("clap enforces --group"),
            member: m
                .get_one::<String>("member")
                .cloned()
                .expect("clap enforces --member"),
            skip: m.get_one::<usize>("skip").copied().unwrap_or(0),
        }
    }
}

impl From<ResolveParams> for ResolveArgs {
    fn from(p: ResolveParams) -> Self {
        Self {
            layout_path: p.layout_path,
            group: p.group,
            member: p.member,
            skip: p.skip,
        }
    }
}

fn layout_path(m: &ArgMatches) -> PathBuf {
    m.get_one::<PathBuf>("layout_path")
        .cloned()
        .expect("clap enforces LAYOUT")
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}
