/// Construction, key derivation and payload mutation contract for `Node`.
use tabletree_core::{NameOrIndex, Node, Payload, ScalarValue, TreeError};

// ============================================================================
// Explicit keys
// ============================================================================

#[test]
fn root_with_name_keeps_name() {
    let node = Node::new_root("config");
    assert_eq!(node.key(), "config");
    assert!(node.is_empty());
    assert_eq!(node.payload(), &Payload::Empty);
}

#[test]
fn root_with_index_uses_decimal_string() {
    let node = Node::new_root(17usize);
    assert_eq!(node.key(), "17");
}

#[test]
fn root_with_empty_name_defaults_to_zero() {
    let node = Node::new_root("");
    assert_eq!(node.key(), "0");
}

#[test]
fn root_with_absent_key_defaults_to_zero() {
    let node = Node::new_root(None::<String>);
    assert_eq!(node.key(), "0");
}

#[test]
fn root_with_some_key_uses_it() {
    let node = Node::new_root(Some("title"));
    assert_eq!(node.key(), "title");
}

#[test]
fn name_or_index_normalizes() {
    assert_eq!(NameOrIndex::Name(String::new()).into_key(), "0");
    assert_eq!(NameOrIndex::Index(0).into_key(), "0");
    assert_eq!(NameOrIndex::Index(250).into_key(), "250");
    assert_eq!(NameOrIndex::from("x").into_key(), "x");
}

// ============================================================================
// Positional keys
// ============================================================================

#[test]
fn positional_keys_follow_construction_order() {
    let mut parent = Node::new_root("list");
    for expected in ["0", "1", "2", "3"] {
        let child = Node::new_child_of(&parent);
        assert_eq!(child.key(), expected);
        parent.push_child(child).unwrap();
    }
    let keys: Vec<&str> = parent.children().iter().map(|c| c.key()).collect();
    assert_eq!(keys, vec!["0", "1", "2", "3"]);
}

#[test]
fn derived_child_is_not_attached() {
    let parent = Node::new_root("list");
    let first = Node::new_child_of(&parent);
    let second = Node::new_child_of(&parent);
    // Neither was attached, so both see zero children.
    assert_eq!(first.key(), "0");
    assert_eq!(second.key(), "0");
    assert_eq!(parent.child_count(), 0);
}

#[test]
fn positional_key_counts_named_siblings() {
    let mut parent = Node::new_root("mixed");
    parent.push_named("name", "hero").unwrap();
    let child = Node::new_child_of(&parent);
    assert_eq!(child.key(), "1");
}

#[test]
fn child_of_scalar_parent_gets_zero() {
    let parent = Node::with_value("leaf", 5);
    let child = Node::new_child_of(&parent);
    assert_eq!(child.key(), "0");
}

#[test]
fn positional_key_is_not_renumbered_later() {
    let mut parent = Node::new_root("list");
    let early = Node::new_child_of(&parent);
    parent.push_value(1).unwrap();
    parent.push_value(2).unwrap();
    parent.push_child(early).unwrap();
    let keys: Vec<&str> = parent.children().iter().map(|c| c.key()).collect();
    // The early node keeps its construction-time index: duplicates are legal.
    assert_eq!(keys, vec!["0", "1", "0"]);
}

// ============================================================================
// Payload mutation
// ============================================================================

#[test]
fn set_value_on_empty_node() {
    let mut node = Node::new_root("n");
    node.set_value("text").unwrap();
    assert_eq!(node.value(), Some(&ScalarValue::Text("text".into())));
    assert!(node.children().is_empty());
}

#[test]
fn set_value_replaces_previous_scalar() {
    let mut node = Node::with_value("n", 1);
    node.set_value(false).unwrap();
    assert_eq!(node.value(), Some(&ScalarValue::Boolean(false)));
}

#[test]
fn set_value_accepts_optional() {
    let mut node = Node::new_root("n");
    node.set_value(None::<i64>).unwrap();
    assert_eq!(node.value(), Some(&ScalarValue::Null));
    node.set_value(Some(-3i64)).unwrap();
    assert_eq!(node.value(), Some(&ScalarValue::Integer(-3)));
}

#[test]
fn push_child_turns_empty_into_block() {
    let mut node = Node::new_root("n");
    let child = node.push_value(7).unwrap();
    assert_eq!(child.key(), "0");
    assert!(matches!(node.payload(), Payload::Children(c) if c.len() == 1));
    assert_eq!(node.value(), None);
}

#[test]
fn push_child_returns_attached_child() {
    let mut root = Node::new_root("root");
    let inner = root.push_child(Node::new_root("inner")).unwrap();
    inner.push_named("deep", true).unwrap();
    assert_eq!(root.children()[0].children()[0].key(), "deep");
}

#[test]
fn set_value_on_block_is_rejected() {
    let mut node = Node::new_root("block");
    node.push_value(1).unwrap();
    let err = node.set_value(2).unwrap_err();
    match err {
        TreeError::PayloadConflict {
            key,
            attempted,
            current,
        } => {
            assert_eq!(key, "block");
            assert_eq!(attempted, "set a value");
            assert_eq!(current, "children");
        }
        other => panic!("unexpected error: {other}"),
    }
    // The node is untouched.
    assert_eq!(node.child_count(), 1);
}

#[test]
fn push_child_on_scalar_is_rejected() {
    let mut node = Node::with_value("leaf", "x");
    let err = node.push_child(Node::new_root("c")).unwrap_err();
    assert!(matches!(err, TreeError::PayloadConflict { .. }));
    assert_eq!(
        err.to_string(),
        "cannot append a child on node 'leaf': it already holds a scalar value"
    );
    assert_eq!(node.value(), Some(&ScalarValue::Text("x".into())));
}

#[test]
fn duplicate_sibling_keys_are_tolerated() {
    let mut node = Node::new_root("dups");
    node.push_named("a", 1).unwrap();
    node.push_named("a", 2).unwrap();
    assert_eq!(node.child_count(), 2);
}

// ============================================================================
// Stats
// ============================================================================

#[test]
fn stats_of_lone_root() {
    let stats = Node::new_root("r").stats();
    assert_eq!(stats.nodes, 1);
    assert_eq!(stats.leaves, 1);
    assert_eq!(stats.depth, 1);
}

#[test]
fn stats_of_nested_tree() {
    let mut root = Node::new_root("r");
    root.push_named("a", 1).unwrap();
    let inner = root.push_child(Node::new_root("b")).unwrap();
    inner.push_value(true).unwrap();
    inner.push_value(false).unwrap();
    let stats = root.stats();
    assert_eq!(stats.nodes, 5);
    assert_eq!(stats.leaves, 3);
    assert_eq!(stats.depth, 3);
}

#[test]
fn scalar_value_serializes_untagged() {
    assert_eq!(serde_json::to_string(&ScalarValue::Null).unwrap(), "null");
    assert_eq!(
        serde_json::to_string(&ScalarValue::Text("hi".into())).unwrap(),
        "\"hi\""
    );
    let back: ScalarValue = serde_json::from_str("12").unwrap();
    assert_eq!(back, ScalarValue::Integer(12));
}
