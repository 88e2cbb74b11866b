//! Shared fixtures for unit tests.

use serde_json::{json, Value};

use super::graph::{Graph, GraphEdge, GraphMetadata, GraphNode, NodeStatus};
use super::plan::{validate_plan, Plan};

fn task(id: &str, title: &str, critical: bool, wave: u64) -> Value {
    json!({
        "task_id": id,
        "title": title,
        "is_critical": critical,
        "worktree_name": format!("wt-{id}"),
        "branch_name": format!("loom/{id}"),
        "prompt": format!("prompts/{id}.md"),
        "worktree_path": format!(".worktrees/{id}"),
        "wave_index": wave,
    })
}

/// The 6-task / 4-wave sample plan: critical path t1 -> t2 -> t3 -> t5 -> t6,
/// with t4 the lone non-critical task. t3 and t5 are wired so t5 has two
/// predecessors while the consecutive critical pair (t2, t3) shares none.
pub(crate) fn sample_plan_value() -> Value {
    json!({
        "id": "plan-2026-02-20-124321",
        "created_at": "2026-02-20T12:43:21+00:00",
        "total_tasks": 6,
        "total_waves": 4,
        "critical_path": ["t1", "t2", "t3", "t5", "t6"],
        "waves": [
            {
                "index": 0,
                "tasks": [task("t1", "Bootstrap schema", true, 0)],
                "depends_on": null,
            },
            {
                "index": 1,
                "tasks": [
                    task("t2", "Parser frontend", true, 1),
                    task("t3", "Storage layer", true, 1),
                    task("t4", "Docs pass", false, 1),
                ],
                "depends_on": [0],
            },
            {
                "index": 2,
                "tasks": [task("t5", "Wire pipeline", true, 2)],
                "depends_on": [1],
            },
            {
                "index": 3,
                "tasks": [task("t6", "Integration suite", true, 3)],
                "depends_on": [2],
            },
        ],
        "tasks": {
            "t1": task("t1", "Bootstrap schema", true, 0),
            "t2": task("t2", "Parser frontend", true, 1),
            "t3": task("t3", "Storage layer", true, 1),
            "t4": task("t4", "Docs pass", false, 1),
            "t5": task("t5", "Wire pipeline", true, 2),
            "t6": task("t6", "Integration suite", true, 3),
        },
        "deps": {
            "predecessors": {
                "t1": null,
                "t2": ["t1"],
                "t3": ["t1"],
                "t4": ["t1"],
                "t5": ["t2", "t3"],
                "t6": ["t5"],
            },
            "successors": {
                "t1": ["t2", "t3", "t4"],
                "t2": ["t5"],
                "t3": ["t5"],
                "t4": null,
                "t5": ["t6"],
                "t6": null,
            },
        },
        "config": {
            "max_parallel": 4,
            "safe": true,
            "timeout_per_task": "30m",
            "worktree_dir": ".worktrees",
            "prompt_template_path": "prompts/template.md",
            "db_path": ".work/loom.db",
        },
    })
}

pub(crate) fn sample_plan() -> Plan {
    validate_plan(&sample_plan_value()).expect("sample plan fixture must be valid")
}

fn node(id: &str, title: &str, critical: bool, wave: u64) -> GraphNode {
    GraphNode {
        id: id.to_string(),
        title: title.to_string(),
        status: NodeStatus::Pending,
        is_critical: critical,
        wave_index: wave,
        branch_name: format!("loom/{id}"),
    }
}

fn edge(from: &str, to: &str) -> GraphEdge {
    GraphEdge {
        from: from.to_string(),
        to: to.to_string(),
    }
}

/// Small hand-built diamond graph: a -> {b, c} -> d across three waves.
pub(crate) fn sample_graph() -> Graph {
    Graph {
        nodes: vec![
            node("a", "Task A", true, 0),
            node("b", "Task B", true, 1),
            node("c", "Task C", false, 1),
            node("d", "Task D", true, 2),
        ],
        edges: vec![edge("a", "b"), edge("a", "c"), edge("b", "d"), edge("c", "d")],
        critical_path: vec!["a".to_string(), "b".to_string(), "d".to_string()],
        metadata: GraphMetadata {
            id: "test-plan".to_string(),
            created_at: "2026-01-01T00:00:00+00:00".to_string(),
            total_tasks: 4,
            total_waves: 3,
        },
    }
}
