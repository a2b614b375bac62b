//! Terminal punctuation for resolution clauses.
//!
//! Drafting convention: every clause line ends with `;`, a line introducing
//! a sublist ends with `:`, and the final line of the document ends with
//! `.`. The global-last line is computed once from the full flattened order
//! so every recursion depth agrees on it.

use crate::tree::{ClauseTree, NodeId};

/// Punctuation that may be replaced by a terminal mark.
const PUNCTUATION: &[char] = &['!', '&', '*', '-', ';', ':', ',', '.', '?'];

/// Apply terminal punctuation to every real node, depth-first, each node
/// before its children. The synthetic root is left untouched.
pub fn format_tree(tree: &mut ClauseTree) {
    let Some(&global_last) = tree.flatten().last() else {
        return;
    };

    let clauses: Vec<NodeId> = tree.children(tree.root()).to_vec();
    for clause in clauses {
        format_node(tree, clause, global_last);
    }
}

fn format_node(tree: &mut ClauseTree, id: NodeId, global_last: NodeId) {
    let mark = if id == global_last {
        '.'
    } else if !tree.children(id).is_empty() {
        ':'
    } else {
        ';'
    };

    let text = append_or_replace(tree.text(id), mark);
    tree.set_text(id, text);

    let children: Vec<NodeId> = tree.children(id).to_vec();
    for child in children {
        format_node(tree, child, global_last);
    }
}

/// Append the mark, or replace the final character when it is already a
/// punctuation mark.
fn append_or_replace(text: &str, mark: char) -> String {
    match text.chars().last() {
        Some(last) if PUNCTUATION.contains(&last) => {
            let mut replaced = text[..text.len() - last.len_utf8()].to_string();
            replaced.push(mark);
            replaced
        }
        _ => {
            let mut appended = text.to_string();
            appended.push(mark);
            appended
        }
    }
}
