//! Hyperlink extraction and citation building.
//!
//! [`extract_urls`] pulls the distinct external URLs out of raw document
//! text; [`LinkResolver`] fetches page metadata for each one (serially, with
//! a short per-URL timeout) and builds the URL → citation table consumed by
//! the body patcher. A failed fetch degrades to URL-derived metadata — it
//! never fails the document.

pub mod extract;
pub mod resolver;

pub use extract::extract_urls;
pub use resolver::{CitationTable, LinkResolver, PageInfo, citation};
