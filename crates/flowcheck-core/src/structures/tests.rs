#![allow(clippy::expect_used)]

use serde::{Deserialize, Serialize};
use serde_json::json;

use super::*;

fn to_json<T: Serialize>(v: &T) -> String {
    serde_json::to_string(v).expect("serialize")
}

fn from_json<T: for<'de> Deserialize<'de>>(s: &str) -> T {
    serde_json::from_str(s).expect("deserialize")
}

fn round_trip<T>(v: &T) -> T
where
    T: Serialize + for<'de> Deserialize<'de> + std::fmt::Debug + PartialEq,
{
    let json = to_json(v);
    let back: T = from_json(&json);
    assert_eq!(*v, back, "round-trip mismatch for {json}");
    back
}

// ---------------------------------------------------------------------------
// WorkflowNode
// ---------------------------------------------------------------------------

#[test]
fn node_full_editor_shape_deserializes() {
    let node: WorkflowNode = from_json(
        r#"{
            "id": "node-1",
            "type": "process",
            "position": { "x": 100.0, "y": 200.0 },
            "data": { "label": "Process Node", "status": "running", "text": "hi" },
            "width": 150,
            "height": 40
        }"#,
    );
    assert_eq!(node.id.as_deref(), Some("node-1"));
    assert_eq!(node.node_type, "process");
    let position = node.position.expect("position");
    assert_eq!(position.x, Some(100.0));
    assert!(position.is_complete());
    let data = node.data.expect("data");
    assert_eq!(data.label.as_deref(), Some("Process Node"));
    assert_eq!(data.parsed_status(), Some(NodeStatus::Running));
    assert_eq!(node.width, Some(150.0));
}

#[test]
fn node_type_defaults_to_default() {
    let node: WorkflowNode = from_json(r#"{"id":"n"}"#);
    assert_eq!(node.node_type, "default");
    assert_eq!(WorkflowNode::default().node_type, "default");
}

#[test]
fn node_missing_everything_still_parses() {
    let node: WorkflowNode = from_json("{}");
    assert!(node.id.is_none());
    assert!(node.position.is_none());
    assert!(node.data.is_none());
}

#[test]
fn node_unknown_fields_preserved() {
    let node: WorkflowNode = from_json(r#"{"id":"n","selected":true,"dragging":false}"#);
    assert_eq!(node.extra.get("selected"), Some(&json!(true)));
    let back = round_trip(&node);
    assert_eq!(back.extra.len(), 2);
}

#[test]
fn node_placed_builder_is_complete() {
    let node = WorkflowNode::new("a").placed(1.0, 2.0, "A");
    assert_eq!(node.position, Some(Position::new(1.0, 2.0)));
    assert_eq!(
        node.data.and_then(|d| d.label),
        Some("A".to_owned())
    );
}

#[test]
fn position_partial_is_not_complete() {
    let position: Position = from_json(r#"{"x": 3}"#);
    assert!(!position.is_complete());
}

// ---------------------------------------------------------------------------
// NodeStatus
// ---------------------------------------------------------------------------

#[test]
fn node_status_parse_known_values() {
    for status in NodeStatus::ALL {
        assert_eq!(NodeStatus::parse(status.as_str()), Some(status));
    }
}

#[test]
fn node_status_parse_rejects_unknown_and_case() {
    assert_eq!(NodeStatus::parse("done"), None);
    assert_eq!(NodeStatus::parse("Idle"), None);
    assert_eq!(NodeStatus::parse(""), None);
}

#[test]
fn node_status_serializes_lowercase() {
    assert_eq!(to_json(&NodeStatus::Success), r#""success""#);
    assert_eq!(NodeStatus::Error.to_string(), "error");
}

#[test]
fn unknown_status_string_is_kept_raw() {
    let data: NodeData = from_json(r#"{"label":"x","status":"paused"}"#);
    assert_eq!(data.status.as_deref(), Some("paused"));
    assert_eq!(data.parsed_status(), None);
}

// ---------------------------------------------------------------------------
// WorkflowEdge
// ---------------------------------------------------------------------------

#[test]
fn edge_camel_case_handles() {
    let edge: WorkflowEdge = from_json(
        r#"{
            "id": "edge-2",
            "source": "node-1",
            "target": "node-2",
            "sourceHandle": "output",
            "targetHandle": "input",
            "type": "smoothstep",
            "animated": true
        }"#,
    );
    assert_eq!(edge.source_handle.as_deref(), Some("output"));
    assert_eq!(edge.target_handle.as_deref(), Some("input"));
    assert_eq!(edge.edge_type.as_deref(), Some("smoothstep"));
    assert_eq!(edge.animated, Some(true));

    let json = to_json(&edge);
    assert!(json.contains(r#""sourceHandle":"output""#), "{json}");
    assert!(!json.contains("source_handle"), "{json}");
}

#[test]
fn edge_minimal_round_trip() {
    let edge = WorkflowEdge::new("e1", "a", "b");
    let back = round_trip(&edge);
    assert_eq!(back.id.as_deref(), Some("e1"));
    assert_eq!(to_json(&edge), r#"{"id":"e1","source":"a","target":"b"}"#);
}

#[test]
fn edge_missing_target_still_parses() {
    let edge: WorkflowEdge = from_json(r#"{"id":"e1","source":"a"}"#);
    assert!(edge.target.is_none());
}
