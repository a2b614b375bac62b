//! Shared types, error model, and configuration for munsort.
//!
//! This crate is the foundation depended on by all other munsort crates.
//! It provides:
//! - [`MunsortError`] — the unified error type
//! - Domain types ([`DocType`], [`Metadata`], [`Classification`])
//! - Configuration ([`AppConfig`], config loading)

pub mod config;
pub mod error;
pub mod types;

// Re-export public API at crate root for ergonomic imports.
pub use config::{
    AppConfig, ClassifierConfig, FetchConfig, PatchConfig, RuleEntry, RulesConfig, config_dir,
    config_file_path, init_config, load_config, load_config_from,
};
pub use error::{MunsortError, Result};
pub use types::{Classification, DocType, Metadata};
