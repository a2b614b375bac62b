//! Key:value metadata recovery from body lines.
//!
//! Position papers carry their metadata as `Committee: …` / `Country: …`
//! style lines near the top (occasionally the bottom). The extractor keeps
//! the first matching line per keyword and cleans it into a bare value.

use munsort_layout::Body;
use munsort_shared::Metadata;
use munsort_shared::config::ClassifierConfig;

/// Ellipsis marker appended to truncated values.
const ELLIPSIS: &str = "...";

/// Scan the body for agenda/committee/country metadata.
///
/// Lines are lower-cased; only lines containing `':'` or `'-'` are
/// considered. Keys with no matching line stay absent.
pub fn extract_metadata(body: &Body, config: &ClassifierConfig) -> Metadata {
    let lowered: Vec<String> = body.lines().iter().map(|line| line.to_lowercase()).collect();
    let keyed: Vec<&str> = lowered
        .iter()
        .map(String::as_str)
        .filter(|line| line.contains(':') || line.contains('-'))
        .collect();

    let find = |keyword: &str| {
        keyed
            .iter()
            .find(|line| line.contains(keyword))
            .map(|line| clean_value(line, keyword, config.value_max_len))
    };

    Metadata {
        agenda: find("topic"),
        committee: find("committee"),
        country: find("country"),
    }
}

/// Clean a `key:value`-style line into its bare value.
///
/// Deletes `':'`/`'-'` separators, removes the keyword substring, trims,
/// and caps the length with an ellipsis.
pub(crate) fn clean_value(line: &str, keyword: &str, max_len: usize) -> String {
    let separators_stripped: String =
        line.chars().filter(|c| !matches!(c, ':' | '-')).collect();
    let value = separators_stripped.replace(keyword, "");
    truncate(value.trim(), max_len)
}

/// Cap a value at `max_len` chars, ellipsis-truncating past the limit.
fn truncate(value: &str, max_len: usize) -> String {
    if value.chars().count() <= max_len {
        return value.to_string();
    }
    let prefix: String = value.chars().take(max_len - 1).collect();
    format!("{prefix}{ELLIPSIS}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ClassifierConfig {
        ClassifierConfig::default()
    }

    #[test]
    fn committee_line_cleans_to_bare_value() {
        assert_eq!(
            clean_value("committee: disarmament and security", "committee", 75),
            "disarmament and security"
        );
    }

    #[test]
    fn extraction_lowercases_and_strips_labels() {
        let body = Body::from_lines([
            "Committee: Disarmament and Security",
            "Country - France",
            "Topic: Autonomous weapons",
            "Body text follows.",
        ]);

        let meta = extract_metadata(&body, &config());
        assert_eq!(meta.committee.as_deref(), Some("disarmament and security"));
        assert_eq!(meta.country.as_deref(), Some("france"));
        assert_eq!(meta.agenda.as_deref(), Some("autonomous weapons"));
    }

    #[test]
    fn first_matching_line_wins() {
        let body = Body::from_lines([
            "country: france",
            "country: germany",
        ]);
        let meta = extract_metadata(&body, &config());
        assert_eq!(meta.country.as_deref(), Some("france"));
    }

    #[test]
    fn missing_keys_stay_absent() {
        let body = Body::from_lines(["committee: disec", "no other metadata here"]);
        let meta = extract_metadata(&body, &config());
        assert_eq!(meta.committee.as_deref(), Some("disec"));
        assert!(meta.agenda.is_none());
        assert!(meta.country.is_none());
    }

    #[test]
    fn lines_without_separators_are_ignored() {
        // "country" appears, but the line has no key:value shape.
        let body = Body::from_lines(["our country believes in dialogue"]);
        let meta = extract_metadata(&body, &config());
        assert!(meta.country.is_none());
    }

    #[test]
    fn long_values_get_ellipsis_truncated() {
        let value = "x".repeat(80);
        let line = format!("topic: {value}");
        let cleaned = clean_value(&line, "topic", 75);

        assert_eq!(cleaned.chars().count(), 77);
        assert!(cleaned.ends_with("..."));
        assert_eq!(cleaned.trim_end_matches('.'), "x".repeat(74));
    }

    #[test]
    fn values_at_the_cap_are_untouched() {
        let value = "y".repeat(75);
        let cleaned = clean_value(&format!("topic: {value}"), "topic", 75);
        assert_eq!(cleaned, value);
    }
}
