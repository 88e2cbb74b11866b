//! Submission pipeline: validate -> transform -> re-validate -> store.

use serde_json::Value;
use thiserror::Error;

use crate::schema::{validate_graph, validate_plan, Graph, Violation};
use crate::store::GraphStore;
use crate::transform::to_graph;

/// Why a submission was refused.
///
/// `InvalidPlan` is the caller's problem and recoverable by resubmitting a
/// corrected document. `InvalidGraph` means the transformer produced output
/// that fails its own schema, an internal defect, surfaced distinctly so
/// operators can tell "bad request" from "system bug".
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("invalid plan payload ({} violation(s))", .0.len())]
    InvalidPlan(Vec<Violation>),
    #[error("graph transformation produced invalid output ({} violation(s))", .0.len())]
    InvalidGraph(Vec<Violation>),
}

/// Run the full pipeline over an untrusted document.
///
/// On success the store's slot is replaced with the new graph, which is
/// also returned. On failure the store is left untouched.
pub fn submit_plan(document: &Value, store: &GraphStore) -> Result<Graph, SubmitError> {
    let plan = validate_plan(document).map_err(SubmitError::InvalidPlan)?;
    let graph = to_graph(&plan);
    validate_graph(&graph).map_err(SubmitError::InvalidGraph)?;
    store.replace(graph.clone());
    Ok(graph)
}
