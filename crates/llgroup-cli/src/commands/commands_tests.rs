use std::path::{Path, PathBuf};

use llgroup_core::WORD_SIZE;

use super::check::{CheckArgs, check};
use super::dump::{DumpArgs, dump};
use super::layout_loader::{load_group_set, load_layout_text};
use super::resolve::{ResolveArgs, resolve};

const W: usize = WORD_SIZE;

fn write_layout(dir: &Path, json: &str) -> PathBuf {
    let path = dir.join("groups.json");
    std::fs::write(&path, json).unwrap();
    path
}

fn valid_json() -> String {
    format!(
        r#"[
            {{ "name": "type_info", "size": {}, "members": [
                {{ "name": "int_type", "offset": {}, "size": {} }},
                {{ "name": "str_type", "offset": {} }}
            ] }},
            {{ "name": "vtables", "size": {} }}
        ]"#,
        6 * W,
        W,
        2 * W,
        3 * W,
        2 * W
    )
}

#[test]
fn check_reports_each_group() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_layout(dir.path(), &valid_json());

    let report = check(&CheckArgs { layout_path: path }).unwrap();
    assert_eq!(report, "ok type_info\nok vtables\n");
}

#[test]
fn check_stops_at_oversized_group() {
    let dir = tempfile::tempdir().unwrap();
    let json = format!(
        r#"[{{ "name": "small", "size": {W} }}, {{ "name": "huge", "size": {} }}]"#,
        65536 * W + 1
    );
    let path = write_layout(dir.path(), &json);

    let err = check(&CheckArgs { layout_path: path }).unwrap_err();
    assert!(err.starts_with("group `huge`: "), "{err}");
    assert!(err.contains("exceeds the compact offset capacity"), "{err}");
}

#[test]
fn check_reports_json_errors() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_layout(dir.path(), "not json");

    let err = check(&CheckArgs { layout_path: path }).unwrap_err();
    assert!(err.starts_with("invalid layout description"), "{err}");
}

#[test]
fn missing_file() {
    let err = load_layout_text(Path::new("/nonexistent/groups.json")).unwrap_err();
    assert!(err.starts_with("failed to read /nonexistent/groups.json"), "{err}");
}

#[test]
fn resolve_member_with_skip() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_layout(dir.path(), &valid_json());
    let set = load_group_set(&path).unwrap();

    let args = ResolveArgs {
        layout_path: path,
        group: "type_info".into(),
        member: "str_type".into(),
        skip: 2,
    };
    assert_eq!(
        resolve(&set, &args).unwrap(),
        format!("type_info.str_type @3 +{}", 3 * W + 2)
    );
}

#[test]
fn resolve_unknown_names() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_layout(dir.path(), &valid_json());
    let set = load_group_set(&path).unwrap();

    let mut args = ResolveArgs {
        layout_path: path,
        group: "nope".into(),
        member: "int_type".into(),
        skip: 0,
    };
    assert_eq!(resolve(&set, &args).unwrap_err(), "no group named `nope`");

    args.group = "vtables".into();
    assert_eq!(
        resolve(&set, &args).unwrap_err(),
        "group `vtables` has no member `int_type`"
    );
}

fn dump_args(path: PathBuf, group: Option<&str>) -> DumpArgs {
    DumpArgs {
        layout_path: path,
        group: group.map(str::to_string),
        color: false,
    }
}

#[test]
fn dump_every_group() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_layout(dir.path(), &valid_json());
    let set = load_group_set(&path).unwrap();

    let out = dump(&set, &dump_args(path, None)).unwrap();
    assert!(out.starts_with("group type_info"), "{out}");
    assert!(out.contains("\n\ngroup vtables"), "{out}");
    assert!(out.contains("int_type"), "{out}");
}

#[test]
fn dump_selected_group() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_layout(dir.path(), &valid_json());
    let set = load_group_set(&path).unwrap();

    let out = dump(&set, &dump_args(path, Some("vtables"))).unwrap();
    assert_eq!(out, format!("group vtables  size={}  words=2\n", 2 * W));
}

#[test]
fn dump_unknown_group() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_layout(dir.path(), &valid_json());
    let set = load_group_set(&path).unwrap();

    let err = dump(&set, &dump_args(path, Some("x"))).unwrap_err();
    assert_eq!(err, "no group named `x`");
}
