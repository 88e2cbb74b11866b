//! End-to-end pipeline tests: plan document in, laid-out graph out.

use serde_json::{json, Value};

use loomviz::ingest::{submit_plan, SubmitError};
use loomviz::layout::{layout_graph, PADDING_X, PADDING_Y};
use loomviz::schema::{validate_graph, validate_plan, NodeStatus};
use loomviz::store::GraphStore;
use loomviz::transform::to_graph;

fn sample_plan_document() -> Value {
    serde_json::from_str(include_str!("../fixtures/sample-plan.json"))
        .expect("fixture must be valid JSON")
}

#[test]
fn test_fixture_passes_plan_schema() {
    let plan = validate_plan(&sample_plan_document()).unwrap();
    assert_eq!(plan.id, "plan-2026-02-20-124321");
    assert_eq!(plan.total_tasks, 6);
    assert_eq!(plan.total_waves, 4);
    assert_eq!(plan.critical_path, ["t1", "t2", "t3", "t5", "t6"]);
}

#[test]
fn test_submission_produces_the_expected_graph() {
    let store = GraphStore::new();
    let graph = submit_plan(&sample_plan_document(), &store).unwrap();

    assert_eq!(graph.nodes.len(), 6);
    assert!(graph
        .edges
        .iter()
        .any(|e| e.from == "t1" && e.to == "t2"));
    assert!(graph
        .edges
        .iter()
        .any(|e| e.from == "t2" && e.to == "t5"));
    assert!(graph
        .edges
        .iter()
        .any(|e| e.from == "t3" && e.to == "t5"));
    // the consecutive critical pair (t2, t3) has no direct edge
    assert!(!graph
        .edges
        .iter()
        .any(|e| e.from == "t2" && e.to == "t3"));

    let critical: Vec<_> = graph
        .nodes
        .iter()
        .filter(|n| n.is_critical)
        .map(|n| n.id.as_str())
        .collect();
    assert_eq!(critical.len(), 5);
    assert!(!critical.contains(&"t4"));

    assert_eq!(graph.metadata.total_tasks, 6);
    assert_eq!(graph.metadata.total_waves, 4);
    assert!(graph.nodes.iter().all(|n| n.status == NodeStatus::Pending));
}

#[test]
fn test_transform_round_trips_through_graph_schema() {
    let plan = validate_plan(&sample_plan_document()).unwrap();
    let graph = to_graph(&plan);
    assert!(validate_graph(&graph).is_ok());
}

#[test]
fn test_store_reflects_latest_accepted_submission() {
    let store = GraphStore::new();
    assert!(store.current().is_none());

    submit_plan(&sample_plan_document(), &store).unwrap();
    assert_eq!(store.current().unwrap().metadata.total_tasks, 6);

    let mut second = sample_plan_document();
    second["id"] = json!("plan-2026-02-22-080000");
    submit_plan(&second, &store).unwrap();
    assert_eq!(
        store.current().unwrap().metadata.id,
        "plan-2026-02-22-080000"
    );

    store.reset();
    assert!(store.current().is_none());
}

#[test]
fn test_invalid_document_is_refused_with_itemized_violations() {
    let store = GraphStore::new();
    let err = submit_plan(&json!({ "invalid": true }), &store).unwrap_err();

    let SubmitError::InvalidPlan(violations) = err else {
        panic!("expected an input validation error");
    };
    assert!(violations.len() >= 8, "every missing field should be reported");
    assert!(violations.iter().all(|v| !v.path.is_empty()));
    assert!(store.current().is_none());
}

#[test]
fn test_layout_of_submitted_graph() {
    let store = GraphStore::new();
    let graph = submit_plan(&sample_plan_document(), &store).unwrap();
    let positions = layout_graph(&graph);

    assert_eq!(positions.len(), graph.nodes.len());

    // strictly increasing x along the critical path's waves
    assert!(positions["t1"].x < positions["t2"].x);
    assert!(positions["t2"].x < positions["t5"].x);
    assert!(positions["t5"].x < positions["t6"].x);

    // wave 1 is a single column with distinct rows
    assert_eq!(positions["t2"].x, positions["t3"].x);
    assert_eq!(positions["t3"].x, positions["t4"].x);
    let mut ys = [positions["t2"].y, positions["t3"].y, positions["t4"].y];
    ys.sort_by(f64::total_cmp);
    assert!(ys[0] < ys[1] && ys[1] < ys[2]);

    // singleton waves sit at the baseline
    assert_eq!(positions["t1"].x, PADDING_X);
    assert_eq!(positions["t1"].y, PADDING_Y);
    assert_eq!(positions["t6"].y, PADDING_Y);
}

#[test]
fn test_layout_is_reproducible_across_calls() {
    let plan = validate_plan(&sample_plan_document()).unwrap();
    let graph = to_graph(&plan);
    assert_eq!(layout_graph(&graph), layout_graph(&graph));
}
