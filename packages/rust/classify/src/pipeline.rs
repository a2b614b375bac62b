//! Classification record assembly.
//!
//! Strategies are tried in order — name rules, contains rules, then the
//! layout heuristics — and the first decision wins. Metadata extraction and
//! the bold-run committee override are folded into the final record.

use tracing::{debug, info};

use munsort_layout::Body;
use munsort_shared::config::AppConfig;
use munsort_shared::{Classification, DocType, Result};

use crate::committee::{TextRun, committee_from_runs};
use crate::heuristics;
use crate::metadata::extract_metadata;
use crate::overrides::CompiledRules;

// ---------------------------------------------------------------------------
// DocumentSource
// ---------------------------------------------------------------------------

/// Everything the classifier needs to know about one document.
#[derive(Debug, Clone)]
pub struct DocumentSource<'a> {
    /// Document title (file name as stored).
    pub title: &'a str,
    /// Normalized body.
    pub body: &'a Body,
    /// Raw document text, used for link counting and contains rules.
    pub raw_text: &'a str,
    /// Ordered rich-text runs from the document model; empty when the
    /// caller has no formatting access.
    pub runs: &'a [TextRun],
}

// ---------------------------------------------------------------------------
// Classifier
// ---------------------------------------------------------------------------

/// Configured classifier: compiled override rules plus heuristic thresholds.
pub struct Classifier {
    config: AppConfig,
    rules: CompiledRules,
}

impl Classifier {
    /// Build a classifier from the application config. Fails fast on an
    /// invalid override rule set.
    pub fn new(config: AppConfig) -> Result<Self> {
        let rules = CompiledRules::compile(&config.rules)?;
        Ok(Self { config, rules })
    }

    /// Classify one document into its output record.
    ///
    /// Override rules take precedence over the heuristics; the bold-run
    /// committee lookup overrides extracted committee metadata for
    /// resolutions.
    pub fn classify_document(&self, doc: &DocumentSource<'_>) -> Classification {
        let doc_type = self
            .rules
            .apply(doc.title, doc.raw_text)
            .unwrap_or_else(|| heuristics::classify(doc.body, doc.raw_text, &self.config.classifier));

        let mut metadata = extract_metadata(doc.body, &self.config.classifier);

        if doc_type == DocType::Resolution {
            if let Some(committee) = committee_from_runs(doc.runs) {
                debug!(%committee, "committee taken from bold formatting");
                metadata.committee = Some(committee);
            }
        }

        info!(title = doc.title, %doc_type, "document classified");
        Classification::new(doc_type, metadata)
    }
}
