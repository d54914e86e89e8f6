use json_mutable::json_patch::{apply_patch_value, from_json_patch, to_json_patch};
use json_mutable::{MutableJson, PatchError, TreeError};
use serde_json::{json, Value};

fn patched(doc: Value, patch: Value) -> Value {
    let mut tree = MutableJson::from_value(&doc).unwrap();
    apply_patch_value(&mut tree, &patch).unwrap();
    tree.to_value(tree.root()).unwrap()
}

fn patch_error(doc: Value, patch: Value) -> (PatchError, Value) {
    let mut tree = MutableJson::from_value(&doc).unwrap();
    let err = apply_patch_value(&mut tree, &patch).unwrap_err();
    (err, tree.to_value(tree.root()).unwrap())
}

#[test]
fn add_an_object_member() {
    assert_eq!(
        patched(
            json!({"foo": "bar"}),
            json!([{"op": "add", "path": "/baz", "value": "qux"}])
        ),
        json!({"foo": "bar", "baz": "qux"})
    );
}

#[test]
fn add_an_array_element() {
    assert_eq!(
        patched(
            json!({"foo": ["bar", "baz"]}),
            json!([{"op": "add", "path": "/foo/1", "value": "qux"}])
        ),
        json!({"foo": ["bar", "qux", "baz"]})
    );
}

#[test]
fn add_with_append_sentinel() {
    assert_eq!(
        patched(
            json!({"a": [1, 2, 3]}),
            json!([{"op": "add", "path": "/a/-", "value": 4}])
        ),
        json!({"a": [1, 2, 3, 4]})
    );
}

#[test]
fn add_a_nested_member_object() {
    assert_eq!(
        patched(
            json!({"foo": "bar"}),
            json!([{"op": "add", "path": "/child", "value": {"grandchild": {}}}])
        ),
        json!({"foo": "bar", "child": {"grandchild": {}}})
    );
}

#[test]
fn add_to_a_nonexistent_parent_fails() {
    let (err, doc) = patch_error(
        json!({"foo": "bar"}),
        json!([{"op": "add", "path": "/baz/bat", "value": "qux"}]),
    );
    assert!(matches!(err, PatchError::Tree(_)));
    assert_eq!(doc, json!({"foo": "bar"}));
}

#[test]
fn remove_an_object_member() {
    assert_eq!(
        patched(
            json!({"a": 1, "b": 2}),
            json!([{"op": "remove", "path": "/a"}])
        ),
        json!({"b": 2})
    );
}

#[test]
fn remove_an_array_element() {
    assert_eq!(
        patched(
            json!({"foo": ["bar", "qux", "baz"]}),
            json!([{"op": "remove", "path": "/foo/1"}])
        ),
        json!({"foo": ["bar", "baz"]})
    );
}

#[test]
fn replace_a_value() {
    assert_eq!(
        patched(
            json!({"baz": "qux", "foo": "bar"}),
            json!([{"op": "replace", "path": "/baz", "value": "boo"}])
        ),
        json!({"baz": "boo", "foo": "bar"})
    );
}

#[test]
fn replace_does_not_require_a_prior_value() {
    assert_eq!(
        patched(
            json!({"foo": "bar"}),
            json!([{"op": "replace", "path": "/fresh", "value": 1}])
        ),
        json!({"foo": "bar", "fresh": 1})
    );
}

#[test]
fn replace_the_whole_document() {
    assert_eq!(
        patched(
            json!({"old": true}),
            json!([{"op": "replace", "path": "", "value": {"new": true}}])
        ),
        json!({"new": true})
    );
}

#[test]
fn move_a_value() {
    assert_eq!(
        patched(
            json!({"a": 1}),
            json!([{"op": "move", "from": "/a", "path": "/b"}])
        ),
        json!({"b": 1})
    );
}

#[test]
fn move_a_nested_value_to_the_root_level() {
    assert_eq!(
        patched(
            json!({"foo": {"bar": "baz", "waldo": "fred"}, "qux": {"corge": "grault"}}),
            json!([{"op": "move", "from": "/foo/waldo", "path": "/qux/thud"}])
        ),
        json!({"foo": {"bar": "baz"}, "qux": {"corge": "grault", "thud": "fred"}})
    );
}

#[test]
fn move_an_array_element() {
    assert_eq!(
        patched(
            json!({"foo": ["all", "grass", "cows", "eat"]}),
            json!([{"op": "move", "from": "/foo/1", "path": "/foo/3"}])
        ),
        json!({"foo": ["all", "cows", "eat", "grass"]})
    );
}

#[test]
fn copy_an_array_element() {
    assert_eq!(
        patched(
            json!({"foo": ["bar"], "boo": {"x": 1}}),
            json!([{"op": "copy", "from": "/boo", "path": "/foo/-"}])
        ),
        json!({"foo": ["bar", {"x": 1}], "boo": {"x": 1}})
    );
}

#[test]
fn escaped_tokens_resolve() {
    assert_eq!(
        patched(
            json!({"/": 9, "~1": 10}),
            json!([{"op": "test", "path": "/~01", "value": 10},
                   {"op": "replace", "path": "/~1", "value": 11}])
        ),
        json!({"/": 11, "~1": 10})
    );
}

#[test]
fn test_success_leaves_the_document_alone() {
    let doc = json!({"baz": "qux", "foo": ["a", 2, "c"]});
    assert_eq!(
        patched(
            doc.clone(),
            json!([{"op": "test", "path": "/baz", "value": "qux"},
                   {"op": "test", "path": "/foo/1", "value": 2}])
        ),
        doc
    );
}

#[test]
fn test_failure_aborts_and_mutates_nothing() {
    let (err, doc) = patch_error(
        json!({"a": 1}),
        json!([{"op": "test", "path": "/a", "value": 2},
               {"op": "remove", "path": "/a"}]),
    );
    assert!(matches!(err, PatchError::TestFailed(_)));
    assert_eq!(doc, json!({"a": 1}));
}

#[test]
fn test_is_exact_about_numbers() {
    // Structural comparison: 10 and 10.0 are different values.
    let (err, _) = patch_error(
        json!({"n": 10}),
        json!([{"op": "test", "path": "/n", "value": 10.0}]),
    );
    assert!(matches!(err, PatchError::TestFailed(_)));
}

#[test]
fn test_against_a_missing_path_is_not_found() {
    let (err, _) = patch_error(
        json!({"a": 1}),
        json!([{"op": "test", "path": "/b", "value": 1}]),
    );
    assert_eq!(err, PatchError::Tree(TreeError::NoSuchKey("b".to_string())));
}

#[test]
fn partial_application_is_kept_on_failure() {
    let (err, doc) = patch_error(
        json!({"a": 1}),
        json!([{"op": "add", "path": "/b", "value": 2},
               {"op": "move", "from": "/missing", "path": "/c"},
               {"op": "add", "path": "/d", "value": 4}]),
    );
    assert!(matches!(err, PatchError::Tree(_)));
    assert_eq!(doc, json!({"a": 1, "b": 2}));
}

#[test]
fn unknown_op_is_unsupported() {
    let (err, doc) = patch_error(
        json!({"a": 1}),
        json!([{"op": "transmogrify", "path": "/a"}]),
    );
    assert_eq!(err, PatchError::UnsupportedOp("transmogrify".to_string()));
    assert_eq!(doc, json!({"a": 1}));
}

#[test]
fn longer_mixed_sequence() {
    assert_eq!(
        patched(
            json!({"users": [{"name": "ada"}], "count": 1}),
            json!([
                {"op": "add", "path": "/users/-", "value": {"name": "grace"}},
                {"op": "replace", "path": "/count", "value": 2},
                {"op": "copy", "from": "/users/1/name", "path": "/last"},
                {"op": "test", "path": "/last", "value": "grace"},
                {"op": "move", "from": "/users/0", "path": "/users/1"},
            ])
        ),
        json!({
            "users": [{"name": "grace"}, {"name": "ada"}],
            "count": 2,
            "last": "grace"
        })
    );
}

#[test]
fn typed_patch_round_trips_through_the_codec() {
    let patch = json!([
        {"op": "add", "path": "/a", "value": 1},
        {"op": "move", "from": "/a", "path": "/b"},
        {"op": "test", "path": "/b", "value": 1},
    ]);
    let ops = from_json_patch(&patch).unwrap();
    assert_eq!(to_json_patch(&ops), patch);
}
