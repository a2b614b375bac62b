//! Core domain types for munsort classifications.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// DocType
// ---------------------------------------------------------------------------

/// The document types munsort can assign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocType {
    /// Formally numbered committee document with nested clause structure.
    Resolution,
    /// A country's stance document: metadata-heavy, no numbered clauses.
    Position,
    /// Informal research document: short sentences, often link-dense.
    Notes,
    /// No heuristic produced a signal; never an error.
    Unclassified,
}

impl std::fmt::Display for DocType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Resolution => "resolution",
            Self::Position => "position",
            Self::Notes => "notes",
            Self::Unclassified => "unclassified",
        };
        write!(f, "{s}")
    }
}

impl std::str::FromStr for DocType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "resolution" => Ok(Self::Resolution),
            "position" => Ok(Self::Position),
            "notes" => Ok(Self::Notes),
            "unclassified" => Ok(Self::Unclassified),
            other => Err(format!("unknown document type '{other}'")),
        }
    }
}

// ---------------------------------------------------------------------------
// Metadata
// ---------------------------------------------------------------------------

/// Sparse document metadata recovered from key:value-style lines.
///
/// Values are cleaned and length-capped; keys with no matching line are
/// absent, never empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    /// Agenda topic (from a `topic:` line).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agenda: Option<String>,
    /// Committee name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub committee: Option<String>,
    /// Country name (position papers).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

// ---------------------------------------------------------------------------
// Classification
// ---------------------------------------------------------------------------

/// The classification record returned to callers.
///
/// This is the sole output contract: type plus metadata strings, never any
/// document content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    /// Inferred document type.
    #[serde(rename = "type")]
    pub doc_type: DocType,
    /// Agenda topic, if recovered.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agenda: Option<String>,
    /// Committee name, if recovered.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub committee: Option<String>,
    /// Country name, if recovered.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

impl Classification {
    /// Build a record from a type and extracted metadata.
    pub fn new(doc_type: DocType, metadata: Metadata) -> Self {
        Self {
            doc_type,
            agenda: metadata.agenda,
            committee: metadata.committee,
            country: metadata.country,
        }
    }
}
