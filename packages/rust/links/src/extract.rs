//! URL extraction from raw document text.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use url::Url;

/// Matches an `http`/`https` URL candidate up to whitespace or markup
/// delimiters. Anything without an http scheme marker is not a candidate.
static URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"https?://[^\s<>"']+"#).expect("valid regex")
});

/// Punctuation that belongs to the surrounding sentence, not the URL.
const TRAILING_JUNK: &[char] = &['.', ',', ';', ':', '!', '?', ')', ']'];

/// Extract the distinct URLs from raw text, in first-seen order.
///
/// Internal namespace/schema URLs (the `schemas.*` constellation baked into
/// office-document XML) are excluded, and every candidate must survive a
/// real URL parse.
pub fn extract_urls(text: &str) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut urls = Vec::new();

    for m in URL_RE.find_iter(text) {
        let candidate = m.as_str().trim_end_matches(TRAILING_JUNK);

        if candidate.contains("schemas") {
            continue;
        }
        if Url::parse(candidate).is_err() {
            continue;
        }
        if seen.insert(candidate.to_string()) {
            urls.push(candidate.to_string());
        }
    }

    urls
}
