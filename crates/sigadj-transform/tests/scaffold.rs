//! Tests for dictionary scaffolds.

use serde_json::json;

use sigadj_transform::{ScaffoldKeys, build_scaffold};

#[test]
fn builds_defaults_for_each_group() {
    let keys = ScaffoldKeys::new()
        .with_integer_keys(["count"])
        .with_string_keys(["name"])
        .with_sequence_keys(["items"])
        .with_mapping_keys(["info"]);

    let scaffold = build_scaffold(&keys);

    assert_eq!(
        serde_json::Value::Object(scaffold),
        json!({"count": 0, "name": "", "items": [], "info": {}})
    );
}

#[test]
fn absent_groups_default_to_empty() {
    let scaffold = ScaffoldKeys::new().with_sequence_keys(["cycles"]).build();
    assert_eq!(serde_json::Value::Object(scaffold), json!({"cycles": []}));
}

#[test]
fn later_group_overwrites_earlier_default() {
    let keys = ScaffoldKeys::new()
        .with_integer_keys(["total", "phases"])
        .with_string_keys(["phases"])
        .with_mapping_keys(["total"]);

    let scaffold = build_scaffold(&keys);

    assert_eq!(scaffold.len(), 2);
    assert_eq!(scaffold["total"], json!({}));
    assert_eq!(scaffold["phases"], json!(""));
}

#[test]
fn overwritten_key_keeps_first_position() {
    let keys = ScaffoldKeys::new()
        .with_integer_keys(["a", "b"])
        .with_sequence_keys(["c", "a"]);

    let scaffold = build_scaffold(&keys);
    let order: Vec<&str> = scaffold.keys().map(String::as_str).collect();

    assert_eq!(order, ["a", "b", "c"]);
}
