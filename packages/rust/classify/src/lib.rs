//! Document-type inference for committee documents.
//!
//! No explicit type field exists on these documents, so classification works
//! from layout signals alone: indentation depth, list density, metadata
//! lines, link count, word count. Externally supplied override rules take
//! precedence over the heuristics; a bold-run committee lookup refines
//! resolution records. The output is a [`munsort_shared::Classification`]
//! carrying only the type and metadata strings.

pub mod committee;
pub mod heuristics;
pub mod metadata;
pub mod overrides;
pub mod pipeline;

pub use committee::{TextRun, committee_from_runs};
pub use heuristics::classify;
pub use metadata::extract_metadata;
pub use overrides::CompiledRules;
pub use pipeline::{Classifier, DocumentSource};
