//! The ordered layout heuristics behind document-type inference.
//!
//! Resolutions are identified structurally (indentation, list density,
//! roman sublists) before the weaker lexical signals decide the remaining
//! types. First match wins; anything without a signal lands on
//! `Unclassified` — classification itself never errors.

use tracing::debug;

use munsort_layout::{Body, has_small_roman, is_list_element, max_indent_depth, word_count};
use munsort_links::extract_urls;
use munsort_shared::DocType;
use munsort_shared::config::ClassifierConfig;

use crate::metadata::extract_metadata;

/// Indentation depth at which a body is structurally a resolution.
const RESOLUTION_MIN_INDENT: usize = 2;

/// Infer the document type from the normalized body and raw text.
pub fn classify(body: &Body, raw_text: &str, config: &ClassifierConfig) -> DocType {
    if max_indent_depth(body) >= RESOLUTION_MIN_INDENT {
        debug!("classified as resolution: nested indentation");
        return DocType::Resolution;
    }

    if list_ratio(body) >= config.list_ratio_threshold {
        debug!("classified as resolution: list density");
        return DocType::Resolution;
    }

    // Deeply nested sublists whose indentation metadata is unreliable still
    // betray themselves through roman-numeral prefixes.
    if body.lines().iter().any(|line| has_small_roman(line)) {
        debug!("classified as resolution: roman sublist prefix");
        return DocType::Resolution;
    }

    if extract_metadata(body, config).country.is_some() {
        debug!("classified as position: country metadata present");
        return DocType::Position;
    }

    let url_count = extract_urls(raw_text).len();
    if url_count > 1 {
        debug!(url_count, "classified as notes: link-dense");
        return DocType::Notes;
    }

    let words = word_count(body);
    if words >= config.notes_word_count {
        debug!(words, "classified as notes: long-form text");
        return DocType::Notes;
    }

    DocType::Unclassified
}

/// Fraction of body lines that are list elements; 0 for an empty body.
fn list_ratio(body: &Body) -> f64 {
    if body.is_empty() {
        return 0.0;
    }
    let list_lines = body.lines().iter().filter(|line| is_list_element(line)).count();
    list_lines as f64 / body.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ClassifierConfig {
        ClassifierConfig::default()
    }

    #[test]
    fn deep_indentation_wins_over_everything() {
        // Country metadata and links would otherwise classify differently.
        let body = Body::from_lines([
            "Country: France",
            "\t\tnested twice",
            "https://a.example https://b.example",
        ]);
        let raw = body.lines().join("\n");
        assert_eq!(classify(&body, &raw, &config()), DocType::Resolution);
    }

    #[test]
    fn list_ratio_threshold_is_inclusive() {
        // Exactly half the lines are list elements.
        let body = Body::from_lines([
            "The General Assembly,",
            "Recalling its previous resolutions,",
            "1) Urges all states",
            "2) Calls upon members",
        ]);
        assert_eq!(classify(&body, "", &config()), DocType::Resolution);
    }

    #[test]
    fn list_ratio_below_threshold_is_not_a_resolution() {
        let body = Body::from_lines([
            "The General Assembly,",
            "Recalling its previous resolutions,",
            "Deeply concerned by recent events,",
            "1) Urges all states",
        ]);
        assert_ne!(classify(&body, "", &config()), DocType::Resolution);
    }

    #[test]
    fn roman_sublist_alone_marks_a_resolution() {
        let body = Body::from_lines([
            "Preambular text without indentation,",
            "more preambular text,",
            "further discussion of the agenda,",
            "still further discussion,",
            "iv) a stray deeply nested subsubclause",
        ]);
        assert_eq!(classify(&body, "", &config()), DocType::Resolution);
    }

    #[test]
    fn country_metadata_marks_a_position_paper() {
        let body = Body::from_lines([
            "Committee: DISEC",
            "Country: France",
            "Our delegation believes in measured multilateral disarmament.",
        ]);
        assert_eq!(classify(&body, "", &config()), DocType::Position);
    }

    #[test]
    fn multiple_links_mark_notes() {
        let body = Body::from_lines([
            "reading list",
            "see https://example.org/a",
            "and https://example.org/b",
        ]);
        let raw = body.lines().join("\n");
        assert_eq!(classify(&body, &raw, &config()), DocType::Notes);
    }

    #[test]
    fn single_link_is_not_enough_for_notes() {
        let body = Body::from_lines(["short memo", "see https://example.org/a"]);
        let raw = body.lines().join("\n");
        assert_eq!(classify(&body, &raw, &config()), DocType::Unclassified);
    }

    #[test]
    fn long_bodies_without_other_signals_are_notes() {
        let long_line = "word ".repeat(300);
        let body = Body::from_lines([long_line.as_str(), long_line.as_str(), long_line.as_str()]);
        assert_eq!(classify(&body, "", &config()), DocType::Notes);
    }

    #[test]
    fn word_cutoff_is_configurable() {
        let line = "only a handful of words here";
        let body = Body::from_lines([line, line]);
        assert_eq!(classify(&body, "", &config()), DocType::Unclassified);

        let lowered = ClassifierConfig {
            notes_word_count: 10,
            ..config()
        };
        assert_eq!(classify(&body, "", &lowered), DocType::Notes);
    }

    #[test]
    fn no_signal_means_unclassified() {
        let body = Body::from_lines(["a short note", "with nothing remarkable"]);
        assert_eq!(classify(&body, "", &config()), DocType::Unclassified);
    }
}
