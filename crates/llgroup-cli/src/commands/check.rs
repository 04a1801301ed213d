use std::path::PathBuf;

use llgroup_layout::{GroupLayout, GroupSet, LayoutError, parse_groups};
use log::info;

use super::layout_loader::load_layout_text;

pub struct CheckArgs {
    pub layout_path: PathBuf,
}

pub fn run(args: CheckArgs) {
    match check(&args) {
        Ok(report) => print!("{report}"),
        Err(msg) => {
            eprintln!("error: {msg}");
            std::process::exit(1);
        }
    }
}

/// One `ok <group>` line per valid group; the first invalid group is the error.
pub fn check(args: &CheckArgs) -> Result<String, String> {
    let text = load_layout_text(&args.layout_path)?;
    let raw = parse_groups(&text).map_err(|e| LayoutError::from(e).to_string())?;

    let mut set = GroupSet::new();
    let mut report = String::new();
    for group in raw {
        let name = group.name.clone();
        GroupLayout::from_raw(group)
            .and_then(|layout| set.insert(layout))
            .map_err(|e| e.to_string())?;
        report.push_str(&format!("ok {name}\n"));
    }

    info!("{} groups fit 16-bit compact offsets", set.len());
    Ok(report)
}
