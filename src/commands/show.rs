//! Dependency graph display
//! Usage: loomviz show <plan.json>

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use anyhow::Result;
use colored::{ColoredString, Colorize};

use crate::schema::{Graph, GraphNode};
use crate::transform::to_graph;

use super::check::load_plan;

/// Marker for a node in the wave display.
fn node_indicator(node: &GraphNode) -> ColoredString {
    if node.is_critical {
        "◆".yellow().bold()
    } else {
        "○".white().dimmed()
    }
}

/// Format a node's predecessors, derived from the graph edges.
fn format_predecessors(node_id: &str, incoming: &HashMap<&str, Vec<&str>>) -> String {
    match incoming.get(node_id) {
        Some(froms) if !froms.is_empty() => format!(" ← {}", froms.join(", ")),
        _ => String::new(),
    }
}

/// Build a textual representation of the graph grouped into wave columns.
pub fn build_wave_display(graph: &Graph) -> String {
    if graph.nodes.is_empty() {
        return "(plan has no tasks)".to_string();
    }

    let mut by_wave: BTreeMap<u64, Vec<&GraphNode>> = BTreeMap::new();
    for node in &graph.nodes {
        by_wave.entry(node.wave_index).or_default().push(node);
    }

    let mut incoming: HashMap<&str, Vec<&str>> = HashMap::new();
    for edge in &graph.edges {
        incoming
            .entry(edge.to.as_str())
            .or_default()
            .push(edge.from.as_str());
    }

    let mut output = String::new();
    for (wave_index, nodes) in &by_wave {
        output.push_str(&format!("Wave {wave_index}:\n"));
        for node in nodes {
            let indicator = node_indicator(node);
            let preds = format_predecessors(&node.id, &incoming);
            output.push_str(&format!("  {indicator} {} ({}){preds}\n", node.title, node.id));
        }
        output.push('\n');
    }

    if !graph.critical_path.is_empty() {
        output.push_str(&format!(
            "Critical path: {}\n",
            graph.critical_path.join(" → ")
        ));
    }

    output
}

/// Print the dependency graph for a plan file.
pub fn execute(plan_path: String) -> Result<()> {
    let plan = load_plan(Path::new(&plan_path))?;
    let graph = to_graph(&plan);

    println!();
    println!("Dependency Graph: {}", graph.metadata.id);
    println!("==================");
    println!();
    println!("{}", build_wave_display(&graph));
    println!(
        "{} nodes, {} edges across {} waves",
        graph.nodes.len(),
        graph.edges.len(),
        graph.metadata.total_waves
    );
    println!();
    print!("Legend: ");
    print!("{} ", "◆".yellow().bold());
    print!("critical path  ");
    print!("{} ", "○".white().dimmed());
    println!("regular task");
    println!();

    Ok(())
}
