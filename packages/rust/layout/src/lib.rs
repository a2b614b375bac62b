//! Plain-text layout model for committee documents.
//!
//! The paragraph-extraction collaborator hands munsort a nested line
//! container ([`DocNode`]) with indentation encoded as leading tabs. This
//! crate normalizes that into a flat, order-preserving [`Body`] and provides
//! the line-pattern predicates every other component is built on.

pub mod body;
pub mod matchers;

pub use body::{Body, DocNode, INDENT_CHAR, indent_depth, max_indent_depth, normalize, word_count};
pub use matchers::{has_small_roman, is_list_element, is_sub_clause, is_top_level_clause};
