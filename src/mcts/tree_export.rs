//! Tree inspection: indented text dump and JSON snapshot.
//!
//! Snapshots drop the parent links, so they serialise as a plain nested structure.

use crate::game::board::BoardKey;
use crate::mcts::node::NodeId;
use crate::mcts::tree::SearchTree;
use crate::Result;
use serde::Serialize;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

#[derive(Debug, Clone, Serialize)]
pub struct TreeSnapshot {
    pub key: BoardKey,
    /// 1-based cell of the move leading here, absent for the root
    pub cell: Option<usize>,
    pub visits: u32,
    pub score: f64,
    pub children: Vec<TreeSnapshot>,
}

/// Nested copy of the subtree under `from`, at most `max_depth` levels below it
pub fn snapshot(tree: &SearchTree, from: NodeId, max_depth: Option<usize>) -> TreeSnapshot {
    let node = tree.get(from);
    let children = match max_depth {
        Some(0) => Vec::new(),
        _ => node
            .children
            .values()
            .map(|&child| snapshot(tree, child, max_depth.map(|d| d - 1)))
            .collect(),
    };
    TreeSnapshot {
        key: node.board.key(),
        cell: node.last_move.map(|mv| mv.cell_number()),
        visits: node.visits,
        score: node.score,
        children,
    }
}

/// One line per node: `score/visits (cell)`, indented by one space per level
pub fn render_tree(tree: &SearchTree, from: NodeId, max_depth: usize) -> String {
    let mut out = String::new();
    render_node(tree, from, max_depth, 0, &mut out);
    out
}

fn render_node(tree: &SearchTree, id: NodeId, max_depth: usize, depth: usize, out: &mut String) {
    let node = tree.get(id);
    let label = node
        .last_move
        .map(|mv| mv.to_string())
        .unwrap_or_else(|| "root".to_string());
    out.push_str(&format!(
        "{}{}/{} ({})\n",
        " ".repeat(depth),
        node.score,
        node.visits,
        label
    ));
    if depth < max_depth {
        for &child in node.children.values() {
            render_node(tree, child, max_depth, depth + 1, out);
        }
    }
}

/// Writes the whole tree as pretty JSON
pub fn write_tree_json<P: AsRef<Path>>(tree: &SearchTree, path: P) -> Result<()> {
    let writer = BufWriter::new(File::create(path.as_ref())?);
    serde_json::to_writer_pretty(writer, &snapshot(tree, tree.root(), None))?;
    log::info!("🌳 Tree ({} nodes) written to {}", tree.len(), path.as_ref().display());
    Ok(())
}
