use std::path::PathBuf;

use llgroup_core::Colors;
use llgroup_layout::{GroupSet, dump_set};

use super::layout_loader::require_group_set;

pub struct DumpArgs {
    pub layout_path: PathBuf,
    pub group: Option<String>,
    pub color: bool,
}

pub fn run(args: DumpArgs) {
    let set = require_group_set(&args.layout_path);
    match dump(&set, &args) {
        Ok(out) => print!("{out}"),
        Err(msg) => {
            eprintln!("error: {msg}");
            std::process::exit(1);
        }
    }
}

/// Every group in the set, or only the one named by `--group`.
pub fn dump(set: &GroupSet, args: &DumpArgs) -> Result<String, String> {
    let colors = Colors::new(args.color);

    let Some(name) = &args.group else {
        return Ok(dump_set(set, colors));
    };

    let layout = set
        .get(name)
        .ok_or_else(|| format!("no group named `{name}`"))?;
    Ok(llgroup_layout::dump(layout, colors))
}
