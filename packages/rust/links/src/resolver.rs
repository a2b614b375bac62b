//! Per-URL metadata fetching and citation building.
//!
//! Each distinct URL gets one GET with a short timeout, executed serially.
//! A slow or dead host delays only its own entry; the fallback path turns
//! any transport failure into URL-derived metadata.

use std::collections::{BTreeMap, HashMap};
use std::time::Duration;

use reqwest::Client;
use scraper::{Html, Selector};
use tracing::{debug, info, warn};
use url::Url;

use munsort_shared::config::FetchConfig;
use munsort_shared::{MunsortError, Result};

use crate::extract::extract_urls;

/// User-Agent string for metadata requests.
const USER_AGENT: &str = concat!("munsort/", env!("CARGO_PKG_VERSION"));

/// URL → citation string, built once per document.
pub type CitationTable = BTreeMap<String, String>;

// ---------------------------------------------------------------------------
// PageInfo
// ---------------------------------------------------------------------------

/// Metadata recovered for a single URL, from the page itself or from the
/// URL alone when the fetch fails.
#[derive(Debug, Clone)]
pub struct PageInfo {
    /// Page title; falls back to the last URL path segment.
    pub title: Option<String>,
    /// Host with a leading `www.` stripped.
    pub source: String,
    /// Open-Graph meta properties, `og:` prefix stripped.
    pub properties: HashMap<String, String>,
}

/// Format the citation string for a resolved URL.
///
/// The double quotes are literal content characters:
/// `"<title> (<source>) [<url>]"`.
pub fn citation(info: &PageInfo, raw_url: &str) -> String {
    let title = info.title.as_deref().unwrap_or(&info.source);
    format!("\"{title} ({source}) [{raw_url}]\"", source = info.source)
}

// ---------------------------------------------------------------------------
// LinkResolver
// ---------------------------------------------------------------------------

/// Fetches page metadata for the URLs in a document, one at a time.
pub struct LinkResolver {
    client: Client,
    timeout: Duration,
}

impl LinkResolver {
    /// Create a resolver with the configured per-URL timeout.
    pub fn new(config: &FetchConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .redirect(reqwest::redirect::Policy::limited(5))
            .build()
            .map_err(|e| MunsortError::Network(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            timeout: Duration::from_secs(config.timeout_secs),
        })
    }

    /// Build the URL → citation table for a raw text blob.
    ///
    /// Fetches are serial; a failure is isolated to its URL and consumed by
    /// the fallback path, never surfaced to the caller.
    pub async fn build_citation_table(&self, text: &str) -> CitationTable {
        let urls = extract_urls(text);
        info!(count = urls.len(), "resolving document links");

        let mut table = CitationTable::new();
        for raw in urls {
            let Ok(url) = Url::parse(&raw) else {
                continue;
            };
            let entry = citation(&self.fetch_info(&url).await, &raw);
            table.insert(raw, entry);
        }

        table
    }

    /// Fetch metadata for one URL; any failure takes the fallback path.
    pub async fn fetch_info(&self, url: &Url) -> PageInfo {
        match self.try_fetch(url).await {
            Ok(info) => info,
            Err(e) => {
                warn!(%url, error = %e, "fetch failed, using fallback metadata");
                fallback_info(url)
            }
        }
    }

    async fn try_fetch(&self, url: &Url) -> Result<PageInfo> {
        debug!(%url, "fetching page metadata");

        let response = self
            .client
            .get(url.as_str())
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| MunsortError::Network(format!("{url}: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(MunsortError::Network(format!("{url}: HTTP {status}")));
        }

        let body = response
            .text()
            .await
            .map_err(|e| MunsortError::Network(format!("{url}: body read failed: {e}")))?;

        Ok(parse_page(&body, url))
    }
}

// ---------------------------------------------------------------------------
// Page parsing and fallbacks
// ---------------------------------------------------------------------------

/// Parse fetched markup into page metadata.
pub(crate) fn parse_page(html: &str, url: &Url) -> PageInfo {
    let doc = Html::parse_document(html);

    let title_sel = Selector::parse("title").expect("valid selector");
    let title = doc
        .select(&title_sel)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
        .filter(|t| !t.is_empty());

    let meta_sel = Selector::parse("meta[property]").expect("valid selector");
    let mut properties = HashMap::new();
    for el in doc.select(&meta_sel) {
        let (Some(prop), Some(content)) = (el.value().attr("property"), el.value().attr("content"))
        else {
            continue;
        };
        if let Some(key) = prop.strip_prefix("og:") {
            properties.insert(key.to_string(), content.to_string());
        }
    }

    PageInfo {
        title: title.or_else(|| last_path_segment(url)),
        source: source_host(url),
        properties,
    }
}

/// Metadata derived from the URL alone, used when the fetch fails.
pub fn fallback_info(url: &Url) -> PageInfo {
    PageInfo {
        title: last_path_segment(url).or_else(|| Some(source_host(url))),
        source: source_host(url),
        properties: HashMap::new(),
    }
}

/// Host with a leading `www.` stripped.
fn source_host(url: &Url) -> String {
    let host = url.host_str().unwrap_or("");
    host.strip_prefix("www.").unwrap_or(host).to_string()
}

/// Last non-empty path segment, if any.
fn last_path_segment(url: &Url) -> Option<String> {
    url.path_segments()?
        .filter(|seg| !seg.is_empty())
        .last()
        .map(str::to_string)
}
