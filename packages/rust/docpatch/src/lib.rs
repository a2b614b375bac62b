//! Body patching for packaged documents.
//!
//! A packaged document is a zip archive whose displayable text lives in an
//! XML part at a fixed internal path. The patcher extracts the archive to a
//! per-document scratch directory, rewrites every raw URL in that part into
//! its citation string, and repackages the archive in place. Substitution
//! is purely textual, not XML-aware: a URL appearing outside displayed link
//! text (say, inside an attribute) is rewritten too — accepted risk.

pub mod archive;
pub mod patcher;

pub use archive::{DOCUMENT_XML, extract_archive, repack_archive};
pub use patcher::{BodyPatcher, PatchSummary};
