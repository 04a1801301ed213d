//! Human-readable layout dump.
//!
//! ```text
//! group type_info  size=64  words=8
//!   @1   +8  int_type   (16 bytes)
//!   @5  +40  list_type
//! ```

use std::fmt::Write as _;

use llgroup_core::Colors;

use crate::layout::GroupLayout;
use crate::set::GroupSet;

/// Dump one layout table.
pub fn dump(layout: &GroupLayout, colors: Colors) -> String {
    let mut out = String::new();
    dump_group(&mut out, layout, colors);
    out
}

/// Dump every layout in the set, separated by blank lines.
pub fn dump_set(set: &GroupSet, colors: Colors) -> String {
    let mut out = String::new();
    for (i, layout) in set.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        dump_group(&mut out, layout, colors);
    }
    out
}

fn dump_group(out: &mut String, layout: &GroupLayout, colors: Colors) {
    let Colors {
        name: name_style,
        offset: offset_style,
        meta,
        reset,
    } = colors;

    writeln!(
        out,
        "{meta}group{reset} {name_style}{}{reset}  {meta}size={}  words={}{reset}",
        layout.name(),
        layout.size(),
        layout.words()
    )
    .unwrap();

    let rows: Vec<(String, String, &str, Option<usize>)> = layout
        .members()
        .map(|(name, m)| {
            (
                m.offset().to_string(),
                format!("+{}", m.byte_offset()),
                name,
                m.size(),
            )
        })
        .collect();

    let offset_width = rows.iter().map(|r| r.0.len()).max().unwrap_or(0);
    let pos_width = rows.iter().map(|r| r.1.len()).max().unwrap_or(0);
    let name_width = rows.iter().map(|r| r.2.len()).max().unwrap_or(0);

    for (offset, pos, name, size) in &rows {
        write!(
            out,
            "  {offset_style}{offset:>offset_width$}{reset}  {meta}{pos:>pos_width$}{reset}  {name_style}{name}{reset}"
        )
        .unwrap();
        if let Some(size) = size {
            let pad = name_width - name.len();
            write!(out, "{:pad$}  {meta}({size} bytes){reset}", "").unwrap();
        }
        out.push('\n');
    }
}
