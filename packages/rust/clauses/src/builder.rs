//! Partitioning a resolution body into its clause tree.
//!
//! Top-level clauses anchor the tree; the list-element lines between two
//! anchors form the first clause's segment, subclauses partition that
//! segment, and roman-prefixed lines fill each subclause. Nesting bottoms
//! out at the third level (the drafting convention allows no more).
//! Malformed numbering produces a best-effort partial tree and a warning,
//! never an error.

use tracing::warn;

use munsort_layout::{Body, has_small_roman, is_list_element, is_sub_clause, is_top_level_clause};

use crate::tree::{ClauseTree, NodeId};

/// Build the clause tree for a body known (or suspected) to be a resolution.
pub fn build_clause_tree(body: &Body) -> ClauseTree {
    let lines = body.lines();
    let anchors: Vec<usize> = lines
        .iter()
        .enumerate()
        .filter(|(_, line)| is_top_level_clause(line))
        .map(|(i, _)| i)
        .collect();

    let mut tree = ClauseTree::new();

    for (k, &start) in anchors.iter().enumerate() {
        let end = anchors.get(k + 1).copied().unwrap_or(lines.len());
        let clause = tree.add_child(tree.root(), lines[start].trim());

        let segment: Vec<&str> = lines[start + 1..end]
            .iter()
            .map(String::as_str)
            .filter(|line| is_list_element(line))
            .collect();

        attach_subclauses(&mut tree, clause, &segment);
    }

    tree
}

/// Partition a clause's segment into subclauses and their roman children.
fn attach_subclauses(tree: &mut ClauseTree, clause: NodeId, segment: &[&str]) {
    let sub_anchors: Vec<usize> = segment
        .iter()
        .enumerate()
        .filter(|(_, line)| is_sub_clause(line))
        .map(|(i, _)| i)
        .collect();

    // List lines before the first subclause have no parent at the level the
    // numbering claims — a pattern-level gap. Keep going with what nests.
    let orphaned = sub_anchors.first().copied().unwrap_or(segment.len());
    if orphaned > 0 {
        warn!(
            clause = tree.text(clause),
            orphaned, "list lines precede the first subclause; dropped from the tree"
        );
    }

    for (k, &start) in sub_anchors.iter().enumerate() {
        let end = sub_anchors.get(k + 1).copied().unwrap_or(segment.len());
        let sub = tree.add_child(clause, segment[start].trim());

        for line in &segment[start + 1..end] {
            if has_small_roman(line) {
                tree.add_child(sub, line.trim());
            }
        }
    }
}
