//! Line Model: normalizing a nested line container into a flat body.
//!
//! Paragraph extraction wraps a document in layers of single-element
//! containers (document → section → column → paragraphs). [`normalize`]
//! unwraps those singleton layers and flattens the first real level into an
//! ordered sequence of lines.

use munsort_shared::{MunsortError, Result};

/// The fixed indentation character produced by paragraph extraction.
pub const INDENT_CHAR: char = '\t';

/// Maximum number of singleton wrapper levels to descend before giving up.
const MAX_UNWRAP_DEPTH: usize = 64;

// ---------------------------------------------------------------------------
// DocNode
// ---------------------------------------------------------------------------

/// A node in the nested line container handed over by paragraph extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocNode {
    /// A single paragraph line; leading tabs encode nesting depth.
    Line(String),
    /// An ordered group of nested nodes.
    Group(Vec<DocNode>),
}

impl DocNode {
    /// Convenience constructor for a line node.
    pub fn line(text: impl Into<String>) -> Self {
        Self::Line(text.into())
    }

    /// Convenience constructor for a group node.
    pub fn group(children: Vec<DocNode>) -> Self {
        Self::Group(children)
    }
}

// ---------------------------------------------------------------------------
// Body
// ---------------------------------------------------------------------------

/// The normalized document body: an ordered, flat sequence of lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Body {
    lines: Vec<String>,
}

impl Body {
    /// Build a body directly from lines (primarily for tests and the CLI's
    /// plain-text input path).
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// The lines of the body, in document order.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Number of lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the body has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Normalization
// ---------------------------------------------------------------------------

/// Unwrap singleton wrapper levels until a level with more than one element
/// is reached, then flatten that level depth-first into a [`Body`].
///
/// Descent is iterative and bounded by `MAX_UNWRAP_DEPTH`. Exhausting the
/// bound, hitting an empty group, or bottoming out on a lone line all mean
/// the document never widens — [`MunsortError::EmptyDocument`].
pub fn normalize(root: &DocNode) -> Result<Body> {
    let mut current = root;

    for depth in 0..MAX_UNWRAP_DEPTH {
        match current {
            DocNode::Line(_) => return Err(MunsortError::EmptyDocument { depth }),
            DocNode::Group(items) => match items.len() {
                0 => return Err(MunsortError::EmptyDocument { depth }),
                1 => current = &items[0],
                _ => {
                    let mut lines = Vec::new();
                    for item in items {
                        flatten_into(item, &mut lines);
                    }
                    return Ok(Body { lines });
                }
            },
        }
    }

    Err(MunsortError::EmptyDocument {
        depth: MAX_UNWRAP_DEPTH,
    })
}

/// Depth-first flatten of a node's lines, order preserved.
fn flatten_into(node: &DocNode, out: &mut Vec<String>) {
    match node {
        DocNode::Line(text) => out.push(text.clone()),
        DocNode::Group(items) => {
            for item in items {
                flatten_into(item, out);
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Line measurements
// ---------------------------------------------------------------------------

/// Depth of a line: the count of leading indentation characters.
///
/// `None` is the "no indentation found" sentinel — the line is empty or
/// consists of nothing but indentation.
pub fn indent_depth(line: &str) -> Option<usize> {
    line.chars().position(|c| c != INDENT_CHAR)
}

/// The deepest indentation of any content line in the body; 0 when nothing
/// is indented.
pub fn max_indent_depth(body: &Body) -> usize {
    body.lines()
        .iter()
        .filter_map(|line| indent_depth(line))
        .max()
        .unwrap_or(0)
}

/// Whitespace-separated word count over the whole body.
pub fn word_count(body: &Body) -> usize {
    body.lines()
        .iter()
        .map(|line| line.split_whitespace().count())
        .sum()
}
