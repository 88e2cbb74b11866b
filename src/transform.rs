//! Plan-to-graph transformation.

use crate::schema::{Graph, GraphEdge, GraphMetadata, GraphNode, NodeStatus, Plan};

/// Derive the normalised graph from a validated plan.
///
/// Pure and total: one node per task, one edge per (predecessor, dependent)
/// occurrence in `deps.predecessors` (duplicates kept), critical path and
/// metadata copied verbatim. Status is always `pending`; the transformer
/// has no knowledge of live execution state.
pub fn to_graph(plan: &Plan) -> Graph {
    let nodes = plan
        .tasks
        .values()
        .map(|task| GraphNode {
            id: task.task_id.clone(),
            title: task.title.clone(),
            status: NodeStatus::Pending,
            is_critical: task.is_critical,
            wave_index: task.wave_index,
            branch_name: task.branch_name.clone(),
        })
        .collect();

    let mut edges = Vec::new();
    for (task_id, predecessors) in &plan.deps.predecessors {
        if let Some(predecessors) = predecessors {
            for predecessor in predecessors {
                edges.push(GraphEdge {
                    from: predecessor.clone(),
                    to: task_id.clone(),
                });
            }
        }
    }

    Graph {
        nodes,
        edges,
        critical_path: plan.critical_path.clone(),
        metadata: GraphMetadata {
            id: plan.id.clone(),
            created_at: plan.created_at.clone(),
            total_tasks: plan.total_tasks,
            total_waves: plan.total_waves,
        },
    }
}
