//! Plan schema: the raw JSON contract produced by the loom orchestrator.
//!
//! Validation is shape-only. Referential consistency (predecessor ids
//! existing in `tasks`, critical-path membership, wave/task agreement) is
//! trusted to the upstream producer and deliberately not enforced here.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::checks::{Checker, Violation};

/// A single task within the plan.
///
/// The worktree/branch/prompt fields are opaque execution metadata carried
/// through for display; loomviz never interprets them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub task_id: String,
    pub title: String,
    pub is_critical: bool,
    pub worktree_name: String,
    pub branch_name: String,
    pub prompt: String,
    pub worktree_path: String,
    pub wave_index: u64,
}

/// A wave groups tasks scheduled to run in the same batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Wave {
    pub index: u64,
    pub tasks: Vec<Task>,
    pub depends_on: Option<Vec<u64>>,
}

/// Dependency maps keyed by task id. A null entry means "none".
///
/// Only `predecessors` drives the graph transformation; `successors` is
/// redundant upstream output and is shape-checked but otherwise ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Deps {
    pub predecessors: BTreeMap<String, Option<Vec<String>>>,
    pub successors: BTreeMap<String, Option<Vec<String>>>,
}

/// Orchestrator execution configuration, passed through untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanConfig {
    pub max_parallel: u64,
    pub safe: bool,
    pub timeout_per_task: String,
    pub worktree_dir: String,
    pub prompt_template_path: String,
    pub db_path: String,
}

/// Root plan document. Immutable once accepted.
///
/// `total_tasks` and `total_waves` are the producer's declared counts and
/// are not recomputed. `tasks` uses a `BTreeMap` so iteration order (and
/// therefore node order in the derived graph) is stable across runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Plan {
    pub id: String,
    pub created_at: String,
    pub total_tasks: u64,
    pub total_waves: u64,
    pub critical_path: Vec<String>,
    pub waves: Vec<Wave>,
    pub tasks: BTreeMap<String, Task>,
    pub deps: Deps,
    pub config: PlanConfig,
}

/// Validate an untrusted document against the plan schema.
///
/// Returns the typed [`Plan`] on success, or every violation found,
/// never just the first.
pub fn validate_plan(document: &Value) -> Result<Plan, Vec<Violation>> {
    let mut c = Checker::new();
    check_plan(&mut c, document);
    c.finish()?;

    // Shape has been fully checked above, so this cannot fail for reasons
    // other than a checker/type mismatch, which we surface rather than hide.
    serde_json::from_value(document.clone()).map_err(|e| {
        vec![Violation {
            path: "$".to_string(),
            expected: "a document matching the plan schema".to_string(),
            actual: e.to_string(),
        }]
    })
}

fn check_plan(c: &mut Checker, document: &Value) {
    let Some(root) = c.object(document, "$") else {
        return;
    };

    c.string_field(root, "", "id");
    c.datetime_field(root, "", "created_at");
    c.non_negative_int_field(root, "", "total_tasks");
    c.non_negative_int_field(root, "", "total_waves");

    if let Some((items, path)) = c.array_field(root, "", "critical_path") {
        c.string_array(items, &path);
    }

    if let Some((items, path)) = c.array_field(root, "", "waves") {
        for (idx, wave) in items.iter().enumerate() {
            check_wave(c, wave, &format!("{path}[{idx}]"));
        }
    }

    if let Some((tasks, path)) = c.object_field(root, "", "tasks") {
        for (id, task) in tasks {
            check_task(c, task, &format!("{path}.{id}"));
        }
    }

    if let Some((deps, path)) = c.object_field(root, "", "deps") {
        check_id_list_map(c, deps, &path, "predecessors");
        check_id_list_map(c, deps, &path, "successors");
    }

    if let Some((config, path)) = c.object_field(root, "", "config") {
        c.positive_int_field(config, &path, "max_parallel");
        c.bool_field(config, &path, "safe");
        c.string_field(config, &path, "timeout_per_task");
        c.string_field(config, &path, "worktree_dir");
        c.string_field(config, &path, "prompt_template_path");
        c.string_field(config, &path, "db_path");
    }
}

fn check_task(c: &mut Checker, value: &Value, path: &str) {
    let Some(task) = c.object(value, path) else {
        return;
    };
    c.string_field(task, path, "task_id");
    c.string_field(task, path, "title");
    c.bool_field(task, path, "is_critical");
    c.string_field(task, path, "worktree_name");
    c.string_field(task, path, "branch_name");
    c.string_field(task, path, "prompt");
    c.string_field(task, path, "worktree_path");
    c.non_negative_int_field(task, path, "wave_index");
}

fn check_wave(c: &mut Checker, value: &Value, path: &str) {
    let Some(wave) = c.object(value, path) else {
        return;
    };
    c.non_negative_int_field(wave, path, "index");

    if let Some((tasks, tasks_path)) = c.array_field(wave, path, "tasks") {
        if tasks.is_empty() {
            c.report(
                &tasks_path,
                "a non-empty array of tasks",
                &Value::Array(Vec::new()),
            );
        }
        for (idx, task) in tasks.iter().enumerate() {
            check_task(c, task, &format!("{tasks_path}[{idx}]"));
        }
    }

    // depends_on is nullable: null means "no upstream waves"
    if let Some(depends_on) = wave.get("depends_on") {
        if !depends_on.is_null() {
            let deps_path = format!("{path}.depends_on");
            if let Some(items) = c.array(depends_on, &deps_path) {
                for (idx, item) in items.iter().enumerate() {
                    c.non_negative_int(item, &format!("{deps_path}[{idx}]"));
                }
            }
        }
    } else {
        c.report_missing(
            &format!("{path}.depends_on"),
            "an array of wave indices or null",
        );
    }
}

/// Check one of the `deps` maps: task id -> nullable list of task ids.
fn check_id_list_map(c: &mut Checker, deps: &serde_json::Map<String, Value>, parent: &str, key: &str) {
    let Some((map, path)) = c.object_field(deps, parent, key) else {
        return;
    };
    for (id, entry) in map {
        if entry.is_null() {
            continue;
        }
        let entry_path = format!("{path}.{id}");
        if let Some(items) = c.array(entry, &entry_path) {
            c.string_array(items, &entry_path);
        }
    }
}
