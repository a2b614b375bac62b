//! Clause-tree reconstruction and punctuation formatting for resolutions.
//!
//! A resolution's flat line sequence is partitioned back into its three
//! drafting levels — clause `1)`, subclause `(a)`, subsubclause `i)` — and
//! the tree can then be walked to enforce terminal-punctuation conventions
//! (`;` between clauses, `:` before a sublist, `.` at the very end).
//! Formatting runs only on explicit request, never during classification.

pub mod builder;
pub mod format;
pub mod tree;

pub use builder::build_clause_tree;
pub use format::format_tree;
pub use tree::{ClauseTree, NodeId};
