use indoc::indoc;
use llgroup_core::WORD_SIZE;

use crate::{GroupLayout, GroupSet, LayoutError, RawGroup};

const W: usize = WORD_SIZE;

#[test]
fn from_raw_keeps_order() {
    let set = GroupSet::from_raw([
        RawGroup::new("b", 2 * W).member("x", W, None),
        RawGroup::new("a", 2 * W).member("y", W, None),
    ])
    .unwrap();

    assert_eq!(set.len(), 2);
    let names: Vec<&str> = set.iter().map(GroupLayout::name).collect();
    assert_eq!(names, ["b", "a"]);
    assert!(set.get("a").is_some());
    assert!(set.get("c").is_none());
}

#[test]
fn duplicate_group_is_rejected() {
    let err = GroupSet::from_raw([RawGroup::new("a", W), RawGroup::new("a", 2 * W)]).unwrap_err();
    assert!(matches!(err, LayoutError::DuplicateGroup { ref group } if group == "a"));
}

#[test]
fn first_invalid_group_stops_loading() {
    let err = GroupSet::from_raw([
        RawGroup::new("ok", W),
        RawGroup::new("bad", W).member("m", W + 1, None),
    ])
    .unwrap_err();
    assert!(err.to_string().starts_with("group `bad`"));
}

#[test]
fn from_json_without_word_size() {
    let json = format!(
        r#"[{{ "name": "g", "size": {}, "members": [{{ "name": "m", "offset": {} }}] }}]"#,
        4 * W,
        2 * W
    );
    let set = GroupSet::from_json(&json).unwrap();
    assert_eq!(set.get("g").unwrap().offset_of("m").unwrap().get(), 2);
}

#[test]
fn from_json_syntax_error() {
    let err = GroupSet::from_json("[{").unwrap_err();
    assert!(matches!(err, LayoutError::Json(_)));
    assert!(err.to_string().starts_with("invalid layout description"));
}

#[test]
#[cfg(target_pointer_width = "64")]
fn from_json_fixture() {
    let json = indoc! {r#"
        [
            { "name": "type_info", "size": 64, "word_size": 8,
              "members": [{ "name": "int_type", "offset": 8, "size": 16 }] },
            { "name": "vtables", "size": 32,
              "members": [{ "name": "list", "offset": 16 }] }
        ]
    "#};

    let set = GroupSet::from_json(json).unwrap();
    assert_eq!(set.get("type_info").unwrap().offset_of("int_type").unwrap().get(), 1);
    assert_eq!(set.get("vtables").unwrap().offset_of("list").unwrap().get(), 2);
}

#[test]
fn insert_after_construction() {
    let mut set = GroupSet::new();
    assert!(set.is_empty());

    set.insert(GroupLayout::from_raw(RawGroup::new("a", W)).unwrap())
        .unwrap();
    let err = set
        .insert(GroupLayout::from_raw(RawGroup::new("a", W)).unwrap())
        .unwrap_err();
    assert_eq!(err.to_string(), "group `a` is declared twice");
}
