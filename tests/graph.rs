//! Tests for the graph store's add/update/delete/connect semantics.
mod common;
use common::sample_node;
use zumen::prelude::*;

#[test]
fn test_add_node_appends_in_order() {
    let mut store = GraphStore::new();
    store.add_node(sample_node("a", 0.0, 0.0));
    store.add_node(sample_node("b", 1.0, 1.0));
    store.add_node(sample_node("c", 2.0, 2.0));

    let ids: Vec<&str> = store.nodes().iter().map(|n| n.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "b", "c"]);
}

#[test]
fn test_update_node_replaces_wholesale() {
    let mut store = GraphStore::new();
    store.add_node(sample_node("a", 0.0, 0.0));
    store.add_node(sample_node("b", 1.0, 1.0));

    let mut replacement = sample_node("a", 99.0, 99.0);
    replacement.data = NodePayload::named("Renamed");
    let outcome = store.update_node(replacement.clone());

    assert_eq!(outcome, UpdateOutcome::Replaced);
    assert_eq!(store.node("a"), Some(&replacement));
    // The other node is untouched.
    assert_eq!(store.node("b"), Some(&sample_node("b", 1.0, 1.0)));
}

#[test]
fn test_update_node_miss_is_a_no_op() {
    let mut store = GraphStore::new();
    store.add_node(sample_node("a", 0.0, 0.0));
    let before = store.clone();

    let outcome = store.update_node(sample_node("ghost", 5.0, 5.0));
    assert_eq!(outcome, UpdateOutcome::NotFound);
    assert_eq!(store, before);
}

#[test]
fn test_delete_node_filters_and_preserves_order() {
    let mut store = GraphStore::new();
    store.add_node(sample_node("a", 0.0, 0.0));
    store.add_node(sample_node("b", 1.0, 1.0));
    store.add_node(sample_node("c", 2.0, 2.0));

    assert_eq!(store.delete_node("b"), 1);
    let ids: Vec<&str> = store.nodes().iter().map(|n| n.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "c"]);

    assert_eq!(store.delete_node("ghost"), 0);
    assert_eq!(store.node_count(), 2);
}

#[test]
fn test_delete_node_removes_every_match() {
    // Duplicate ids should not happen, but when they do the delete sweeps
    // them all.
    let mut store = GraphStore::new();
    store.add_node(sample_node("a", 0.0, 0.0));
    store.add_node(sample_node("dup", 1.0, 1.0));
    store.add_node(sample_node("dup", 2.0, 2.0));

    assert_eq!(store.delete_node("dup"), 2);
    assert_eq!(store.node_count(), 1);
}

#[test]
fn test_add_edge_decorates_connection() {
    let mut store = GraphStore::new();
    let edge = store
        .add_edge(Connection::new("A", "B").with_handles("output-0", "input-0"))
        .clone();

    assert_eq!(store.edges().len(), 1);
    assert_eq!(edge.source, "A");
    assert_eq!(edge.target, "B");
    assert_eq!(edge.source_handle.as_deref(), Some("output-0"));
    assert_eq!(edge.edge_type, EdgeKind::Button);
    assert_eq!(edge.marker_end.kind, MarkerKind::ArrowClosed);
    assert_eq!(edge.style.stroke_width, 2.0);
    assert!(edge.edge_param.is_none());
}

#[test]
fn test_add_edge_duplicate_connection_is_a_no_op() {
    let mut store = GraphStore::new();
    let first = store.add_edge(Connection::new("A", "B")).id.clone();
    let second = store.add_edge(Connection::new("A", "B")).id.clone();

    assert_eq!(first, second);
    assert_eq!(store.edges().len(), 1);
}

#[test]
fn test_add_edge_distinct_handles_are_distinct_edges() {
    let mut store = GraphStore::new();
    store.add_edge(Connection::new("A", "B").with_handles("output-0", "input-0"));
    store.add_edge(Connection::new("A", "B").with_handles("output-1", "input-0"));
    assert_eq!(store.edges().len(), 2);
}

#[test]
fn test_update_edge_param_touches_only_that_edge() {
    let mut store = GraphStore::new();
    let target = store.add_edge(Connection::new("A", "B")).id.clone();
    store.add_edge(Connection::new("B", "C"));

    let outcome = store.update_edge_param(&target, serde_json::json!({ "foo": 1 }));
    assert_eq!(outcome, UpdateOutcome::Replaced);

    assert_eq!(
        store.edge(&target).unwrap().edge_param,
        Some(serde_json::json!({ "foo": 1 }))
    );
    assert!(store.edges()[1].edge_param.is_none());
}

#[test]
fn test_update_edge_param_miss_leaves_edges_unchanged() {
    let mut store = GraphStore::new();
    store.add_edge(Connection::new("A", "B"));
    let before = store.clone();

    let outcome = store.update_edge_param("ghost", serde_json::json!(1));
    assert_eq!(outcome, UpdateOutcome::NotFound);
    assert_eq!(store, before);
}

#[test]
fn test_update_edge_param_stops_at_first_match() {
    // Edge ids are meant to be unique; if duplicates slip in anyway, only the
    // first is touched.
    let mut store = GraphStore::new();
    let edge = Connection::new("A", "B").into_edge();
    store.push_edge(edge.clone());
    store.push_edge(edge.clone());

    store.update_edge_param(&edge.id, serde_json::json!(true));
    assert_eq!(store.edges()[0].edge_param, Some(serde_json::json!(true)));
    assert!(store.edges()[1].edge_param.is_none());
}

#[test]
fn test_snapshot_clones_current_content() {
    let mut store = GraphStore::new();
    store.add_node(sample_node("a", 0.0, 0.0));
    store.add_edge(Connection::new("a", "b"));

    let viewport = Viewport {
        x: 1.0,
        y: 2.0,
        zoom: 0.5,
    };
    let snapshot = store.snapshot(viewport);
    assert_eq!(snapshot.nodes, store.nodes());
    assert_eq!(snapshot.edges, store.edges());
    assert_eq!(snapshot.viewport, viewport);

    // Dangling edges are representable; nothing validated them.
    assert!(store.node("b").is_none());
}

#[test]
fn test_replace_all_swaps_content() {
    let mut store = GraphStore::new();
    store.add_node(sample_node("old", 0.0, 0.0));

    store.replace_all(vec![sample_node("new", 1.0, 1.0)], Vec::new());
    assert!(store.node("old").is_none());
    assert!(store.node("new").is_some());
    assert!(store.edges().is_empty());
}
