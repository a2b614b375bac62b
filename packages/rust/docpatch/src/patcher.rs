//! Citation substitution over a packaged document's body text.

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use munsort_links::{CitationTable, LinkResolver};
use munsort_shared::config::AppConfig;
use munsort_shared::{MunsortError, Result};

use crate::archive::{DOCUMENT_XML, extract_archive, repack_archive};

// ---------------------------------------------------------------------------
// PatchSummary
// ---------------------------------------------------------------------------

/// Outcome of one patch operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatchSummary {
    /// Distinct URLs resolved to citations.
    pub urls_resolved: usize,
    /// URL occurrences rewritten in the body text.
    pub replacements: usize,
}

// ---------------------------------------------------------------------------
// BodyPatcher
// ---------------------------------------------------------------------------

/// Rewrites the hyperlinks of packaged documents in place.
pub struct BodyPatcher {
    resolver: LinkResolver,
    scratch_root: PathBuf,
}

impl BodyPatcher {
    /// Build a patcher from the application config.
    pub fn new(config: &AppConfig) -> Result<Self> {
        Ok(Self {
            resolver: LinkResolver::new(&config.fetch)?,
            scratch_root: config.patch.scratch_root(),
        })
    }

    /// Replace every raw URL in the document's body text with its citation
    /// string, repackaging the archive in place.
    ///
    /// The original archive is replaced only by an atomic rename after a
    /// complete repack. On success the scratch directory is disposed of via
    /// recoverable removal; on failure it stays on disk for recovery.
    pub async fn patch_links(&self, doc_path: &Path) -> Result<PatchSummary> {
        let stem = doc_path
            .file_stem()
            .and_then(|s| s.to_str())
            .ok_or_else(|| {
                MunsortError::archive(format!("no file stem in {}", doc_path.display()))
            })?;
        let scratch = self.scratch_root.join(stem);
        std::fs::create_dir_all(&scratch).map_err(|e| MunsortError::io(&scratch, e))?;

        match self.patch_in_scratch(doc_path, &scratch).await {
            Ok(summary) => {
                // Recoverable removal, so an operator can still dig the
                // extracted tree out of the trash if something looks wrong.
                if let Err(e) = trash::delete(&scratch) {
                    warn!(path = %scratch.display(), error = %e, "could not trash scratch directory");
                }
                Ok(summary)
            }
            Err(e) => {
                warn!(path = %scratch.display(), "keeping scratch directory for recovery");
                Err(e)
            }
        }
    }

    async fn patch_in_scratch(&self, doc_path: &Path, scratch: &Path) -> Result<PatchSummary> {
        extract_archive(doc_path, scratch)?;

        let xml_path = scratch.join(DOCUMENT_XML);
        let xml =
            std::fs::read_to_string(&xml_path).map_err(|e| MunsortError::io(&xml_path, e))?;

        let table = self.resolver.build_citation_table(&xml).await;
        let (patched, replacements) = apply_citations(&xml, &table);
        std::fs::write(&xml_path, patched).map_err(|e| MunsortError::io(&xml_path, e))?;

        // Repack beside the original, then swap in one rename so a failure
        // partway through never clobbers the source document.
        let staged = doc_path.with_extension("munsort-tmp");
        repack_archive(scratch, &staged)?;
        std::fs::rename(&staged, doc_path).map_err(|e| {
            let _ = std::fs::remove_file(&staged);
            MunsortError::io(doc_path, e)
        })?;

        info!(
            doc = %doc_path.display(),
            urls = table.len(),
            replacements,
            "patched document links"
        );

        Ok(PatchSummary {
            urls_resolved: table.len(),
            replacements,
        })
    }
}

// ---------------------------------------------------------------------------
// Substitution
// ---------------------------------------------------------------------------

/// Apply the citation table to a text blob.
///
/// Longer URLs are applied first so a URL that prefixes another never
/// rewrites inside it, and an occurrence must end at a URL boundary. An
/// occurrence already enclosed in `[`…`]` is an earlier pass's citation
/// tail and is left alone — this is what makes a second pass a no-op.
pub fn apply_citations(text: &str, table: &CitationTable) -> (String, usize) {
    let mut entries: Vec<(&str, &str)> = table
        .iter()
        .map(|(url, citation)| (url.as_str(), citation.as_str()))
        .collect();
    entries.sort_by_key(|(url, _)| std::cmp::Reverse(url.len()));

    let mut result = text.to_string();
    let mut replacements = 0;
    for (url, citation) in entries {
        result = replace_standalone(&result, url, citation, &mut replacements);
    }
    (result, replacements)
}

/// Replace standalone occurrences of `needle`, skipping bracketed ones.
fn replace_standalone(text: &str, needle: &str, replacement: &str, count: &mut usize) -> String {
    let mut out = String::with_capacity(text.len());
    let mut cursor = 0;

    while let Some(offset) = text[cursor..].find(needle) {
        let start = cursor + offset;
        let end = start + needle.len();

        let bracketed = text[..start].ends_with('[') && text[end..].starts_with(']');
        let standalone = at_url_boundary(text[end..].chars().next());

        out.push_str(&text[cursor..start]);
        if bracketed || !standalone {
            out.push_str(needle);
        } else {
            out.push_str(replacement);
            *count += 1;
        }
        cursor = end;
    }

    out.push_str(&text[cursor..]);
    out
}

/// Whether the character after a match ends the URL token. A continuation
/// character means the match is a prefix of a longer URL.
fn at_url_boundary(next: Option<char>) -> bool {
    match next {
        None => true,
        Some(c) => c.is_whitespace() || matches!(c, '<' | '>' | '"' | '\'' | '.' | ',' | ';' | ':' | '!' | '?' | ')' | ']'),
    }
}
