//! Layout description loading from a file or stdin.

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use llgroup_layout::GroupSet;

/// Read a layout description. `-` reads stdin.
pub fn load_layout_text(path: &Path) -> Result<String, String> {
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .map_err(|e| format!("failed to read stdin: {e}"))?;
        return Ok(buf);
    }
    fs::read_to_string(path).map_err(|e| format!("failed to read {}: {e}", path.display()))
}

/// Read and validate every group in a layout description.
pub fn load_group_set(path: &Path) -> Result<GroupSet, String> {
    let text = load_layout_text(path)?;
    GroupSet::from_json(&text).map_err(|e| e.to_string())
}

/// Load a set or exit with an error message.
pub fn require_group_set(path: &Path) -> GroupSet {
    match load_group_set(path) {
        Ok(set) => set,
        Err(msg) => {
            eprintln!("error: {msg}");
            std::process::exit(1);
        }
    }
}
