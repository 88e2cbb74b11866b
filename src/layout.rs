//! Wave-based layout: nodes are placed in columns by wave index and spread
//! vertically within each column.

use std::collections::{BTreeMap, HashMap};

use serde::Serialize;

use crate::schema::Graph;

pub const COLUMN_WIDTH: f64 = 300.0;
pub const ROW_HEIGHT: f64 = 120.0;
pub const PADDING_X: f64 = 60.0;
pub const PADDING_Y: f64 = 40.0;

/// 2-D coordinate assigned to a node.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// Assign every node a position: `x` from its wave index, `y` from its
/// enumeration order within the wave (node-collection order, which is what
/// makes repeated calls reproduce identical coordinates).
pub fn layout_graph(graph: &Graph) -> HashMap<String, Position> {
    let mut waves: BTreeMap<u64, Vec<&str>> = BTreeMap::new();
    for node in &graph.nodes {
        waves.entry(node.wave_index).or_default().push(&node.id);
    }

    let mut positions = HashMap::new();
    for (wave_index, node_ids) in &waves {
        let x = PADDING_X + *wave_index as f64 * COLUMN_WIDTH;
        for (i, id) in node_ids.iter().enumerate() {
            let y = (PADDING_Y + i as f64 * ROW_HEIGHT).max(PADDING_Y);
            positions.insert((*id).to_string(), Position { x, y });
        }
    }

    positions
}
