//! Wave layout inspection
//! Usage: loomviz layout <plan.json> [--json]

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::Result;

use crate::layout::{layout_graph, Position};
use crate::transform::to_graph;

use super::check::load_plan;

/// Print the positions the wave layout assigns to each node.
pub fn execute(plan_path: String, json: bool) -> Result<()> {
    let plan = load_plan(Path::new(&plan_path))?;
    let graph = to_graph(&plan);
    let positions = layout_graph(&graph);

    // BTreeMap for stable output order
    let ordered: BTreeMap<&str, &Position> = positions
        .iter()
        .map(|(id, pos)| (id.as_str(), pos))
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&ordered)?);
        return Ok(());
    }

    if ordered.is_empty() {
        println!("(plan has no tasks to lay out)");
        return Ok(());
    }

    let waves: BTreeMap<&str, u64> = graph
        .nodes
        .iter()
        .map(|n| (n.id.as_str(), n.wave_index))
        .collect();

    println!("{:<20} {:>6} {:>8} {:>8}", "node", "wave", "x", "y");
    for (id, pos) in &ordered {
        let wave = waves.get(id).copied().unwrap_or_default();
        println!("{id:<20} {wave:>6} {:>8} {:>8}", pos.x, pos.y);
    }

    Ok(())
}
