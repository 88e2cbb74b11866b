//! Wire schemas for the visualiser: the plan document accepted from the
//! loom orchestrator and the graph structure served to renderers.

mod checks;
pub mod graph;
pub mod plan;

#[cfg(test)]
pub(crate) mod testutil;

pub use checks::Violation;
pub use graph::{validate_graph, Graph, GraphEdge, GraphMetadata, GraphNode, NodeStatus};
pub use plan::{validate_plan, Deps, Plan, PlanConfig, Task, Wave};
