use std::path::PathBuf;

use llgroup_layout::GroupSet;

use super::layout_loader::require_group_set;

pub struct ResolveArgs {
    pub layout_path: PathBuf,
    pub group: String,
    pub member: String,
    pub skip: usize,
}

pub fn run(args: ResolveArgs) {
    let set = require_group_set(&args.layout_path);
    match resolve(&set, &args) {
        Ok(line) => println!("{line}"),
        Err(msg) => {
            eprintln!("error: {msg}");
            std::process::exit(1);
        }
    }
}

/// `<group>.<member> <offset> +<byte position>`, positions relative to the base.
pub fn resolve(set: &GroupSet, args: &ResolveArgs) -> Result<String, String> {
    let layout = set
        .get(&args.group)
        .ok_or_else(|| format!("no group named `{}`", args.group))?;
    let missing = || format!("group `{}` has no member `{}`", args.group, args.member);
    let offset = layout.offset_of(&args.member).ok_or_else(missing)?;
    let position = layout.resolve(&args.member, args.skip).ok_or_else(missing)?;

    Ok(format!(
        "{}.{} {offset} +{position}",
        args.group, args.member
    ))
}
