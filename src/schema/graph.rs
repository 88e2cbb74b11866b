//! Graph schema: the normalised structure the visualiser renders.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::checks::{Checker, Violation};

/// Render status of a node.
///
/// The transformer always emits [`NodeStatus::Pending`]; the richer
/// variants exist so an enriched graph (e.g. with live execution state
/// merged in by a future API layer) still satisfies the schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeStatus {
    Pending,
    InProgress,
    Completed,
    Blocked,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphNode {
    pub id: String,
    pub title: String,
    pub status: NodeStatus,
    pub is_critical: bool,
    pub wave_index: u64,
    pub branch_name: String,
}

/// Directed edge, predecessor -> dependent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphEdge {
    pub from: String,
    pub to: String,
}

/// Plan metadata copied through verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphMetadata {
    pub id: String,
    pub created_at: String,
    pub total_tasks: u64,
    pub total_waves: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Graph {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
    pub critical_path: Vec<String>,
    pub metadata: GraphMetadata,
}

/// Defensive re-validation of a transformed graph.
///
/// The input plan was already validated, so a failure here means the
/// transformation itself is defective. Callers surface it as an internal
/// fault, distinct from bad input.
pub fn validate_graph(graph: &Graph) -> Result<(), Vec<Violation>> {
    let document = serde_json::to_value(graph).map_err(|e| {
        vec![Violation {
            path: "$".to_string(),
            expected: "a serialisable graph".to_string(),
            actual: e.to_string(),
        }]
    })?;

    let mut c = Checker::new();
    check_graph(&mut c, &document);
    c.finish()
}

fn check_graph(c: &mut Checker, document: &Value) {
    let Some(root) = c.object(document, "$") else {
        return;
    };

    if let Some((nodes, path)) = c.array_field(root, "", "nodes") {
        for (idx, node) in nodes.iter().enumerate() {
            check_node(c, node, &format!("{path}[{idx}]"));
        }
    }

    if let Some((edges, path)) = c.array_field(root, "", "edges") {
        for (idx, edge) in edges.iter().enumerate() {
            let edge_path = format!("{path}[{idx}]");
            if let Some(obj) = c.object(edge, &edge_path) {
                c.string_field(obj, &edge_path, "from");
                c.string_field(obj, &edge_path, "to");
            }
        }
    }

    if let Some((items, path)) = c.array_field(root, "", "critical_path") {
        c.string_array(items, &path);
    }

    if let Some((metadata, path)) = c.object_field(root, "", "metadata") {
        c.string_field(metadata, &path, "id");
        c.datetime_field(metadata, &path, "created_at");
        c.non_negative_int_field(metadata, &path, "total_tasks");
        c.non_negative_int_field(metadata, &path, "total_waves");
    }
}

const NODE_STATUSES: &[&str] = &["pending", "in_progress", "completed", "blocked"];

fn check_node(c: &mut Checker, value: &Value, path: &str) {
    let Some(node) = c.object(value, path) else {
        return;
    };
    c.string_field(node, path, "id");
    c.string_field(node, path, "title");
    if let Some(status) = c.string_field(node, path, "status") {
        if !NODE_STATUSES.contains(&status) {
            c.report(
                &format!("{path}.status"),
                "one of pending, in_progress, completed, blocked",
                &Value::String(status.to_string()),
            );
        }
    }
    c.bool_field(node, path, "is_critical");
    c.non_negative_int_field(node, path, "wave_index");
    c.string_field(node, path, "branch_name");
}
