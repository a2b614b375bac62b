//! Application configuration for munsort.
//!
//! User config lives at `~/.munsort/munsort.toml`.
//! A missing file means defaults; an unreadable or malformed file is an
//! error — in particular, a broken override rule set must never be silently
//! treated as "no overrides".

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{MunsortError, Result};
use crate::types::DocType;

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "munsort.toml";

/// Default config directory name under the user's home.
const CONFIG_DIR_NAME: &str = ".munsort";

// ---------------------------------------------------------------------------
// Config structs (matching munsort.toml schema)
// ---------------------------------------------------------------------------

/// Top-level application config, deserialized from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Classifier thresholds.
    #[serde(default)]
    pub classifier: ClassifierConfig,

    /// Link-resolver fetch settings.
    #[serde(default)]
    pub fetch: FetchConfig,

    /// Body-patcher scratch settings.
    #[serde(default)]
    pub patch: PatchConfig,

    /// Classification override rules.
    #[serde(default)]
    pub rules: RulesConfig,
}

/// `[classifier]` section — the tunable heuristic thresholds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifierConfig {
    /// Minimum fraction of list-element lines for a resolution (inclusive).
    #[serde(default = "default_list_ratio")]
    pub list_ratio_threshold: f64,

    /// Word count at or above which an otherwise unclassified body is notes.
    #[serde(default = "default_notes_word_count")]
    pub notes_word_count: usize,

    /// Maximum length of a cleaned metadata value before ellipsis truncation.
    #[serde(default = "default_value_max_len")]
    pub value_max_len: usize,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            list_ratio_threshold: default_list_ratio(),
            notes_word_count: default_notes_word_count(),
            value_max_len: default_value_max_len(),
        }
    }
}

fn default_list_ratio() -> f64 {
    0.5
}
fn default_notes_word_count() -> usize {
    900
}
fn default_value_max_len() -> usize {
    75
}

/// `[fetch]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchConfig {
    /// Per-URL fetch timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_timeout_secs() -> u64 {
    2
}

/// `[patch]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatchConfig {
    /// Root directory for per-document scratch extraction. Empty means the
    /// system temp directory.
    #[serde(default)]
    pub scratch_dir: String,
}

impl Default for PatchConfig {
    fn default() -> Self {
        Self {
            scratch_dir: String::new(),
        }
    }
}

impl PatchConfig {
    /// Resolve the scratch root, falling back to the system temp directory.
    pub fn scratch_root(&self) -> PathBuf {
        if self.scratch_dir.is_empty() {
            std::env::temp_dir().join("munsort")
        } else {
            PathBuf::from(&self.scratch_dir)
        }
    }
}

/// `[rules]` section — classification overrides, applied before heuristics.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RulesConfig {
    /// Rules matched against the document title.
    #[serde(default)]
    pub name: Vec<RuleEntry>,

    /// Rules matched against the full body text.
    #[serde(default)]
    pub contains: Vec<RuleEntry>,
}

/// A single override rule: regex pattern → forced document type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleEntry {
    /// Regex pattern.
    pub pattern: String,
    /// The document type to assign on match.
    #[serde(rename = "type")]
    pub doc_type: DocType,
}

// ---------------------------------------------------------------------------
// Config loading
// ---------------------------------------------------------------------------

/// Get the path to the config directory (`~/.munsort/`).
pub fn config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| MunsortError::config("could not determine home directory"))?;
    Ok(home.join(CONFIG_DIR_NAME))
}

/// Get the path to the config file (`~/.munsort/munsort.toml`).
pub fn config_file_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILE_NAME))
}

/// Load the application config from disk. Returns defaults if the file does not exist.
pub fn load_config() -> Result<AppConfig> {
    let path = config_file_path()?;

    if !path.exists() {
        tracing::debug!(?path, "config file not found, using defaults");
        return Ok(AppConfig::default());
    }

    load_config_from(&path)
}

/// Load the application config from a specific file path.
pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| MunsortError::io(path, e))?;

    toml::from_str(&content)
        .map_err(|e| MunsortError::config(format!("failed to parse {}: {e}", path.display())))
}

/// Create the config directory and write a default config file.
/// Returns the path to the created file.
pub fn init_config() -> Result<PathBuf> {
    let dir = config_dir()?;
    std::fs::create_dir_all(&dir).map_err(|e| MunsortError::io(&dir, e))?;

    let path = dir.join(CONFIG_FILE_NAME);
    let config = AppConfig::default();
    let content =
        toml::to_string_pretty(&config).map_err(|e| MunsortError::config(e.to_string()))?;

    std::fs::write(&path, content).map_err(|e| MunsortError::io(&path, e))?;
    tracing::info!(?path, "created default config file");

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_serializes() {
        let config = AppConfig::default();
        let toml_str = toml::to_string_pretty(&config).expect("serialize default config");
        assert!(toml_str.contains("list_ratio_threshold"));
        assert!(toml_str.contains("timeout_secs"));
    }

    #[test]
    fn config_roundtrip() {
        let config = AppConfig::default();
        let toml_str = toml::to_string_pretty(&config).expect("serialize");
        let parsed: AppConfig = toml::from_str(&toml_str).expect("deserialize");
        assert_eq!(parsed.classifier.list_ratio_threshold, 0.5);
        assert_eq!(parsed.classifier.notes_word_count, 900);
        assert_eq!(parsed.classifier.value_max_len, 75);
        assert_eq!(parsed.fetch.timeout_secs, 2);
    }

    #[test]
    fn config_with_rules() {
        let toml_str = r#"
[classifier]
notes_word_count = 600

[[rules.name]]
pattern = "(?i)draft resolution"
type = "resolution"

[[rules.contains]]
pattern = "Position Paper"
type = "position"
"#;
        let config: AppConfig = toml::from_str(toml_str).expect("parse");
        assert_eq!(config.classifier.notes_word_count, 600);
        assert_eq!(config.rules.name.len(), 1);
        assert_eq!(config.rules.name[0].doc_type, DocType::Resolution);
        assert_eq!(config.rules.contains.len(), 1);
        assert_eq!(config.rules.contains[0].doc_type, DocType::Position);
    }

    #[test]
    fn malformed_config_is_an_error() {
        let tmp = std::env::temp_dir().join("munsort-bad-config-test.toml");
        std::fs::write(&tmp, "[rules]\nname = \"not-an-array\"\n").expect("write");
        let result = load_config_from(&tmp);
        assert!(result.is_err());
        let _ = std::fs::remove_file(&tmp);
    }

    #[test]
    fn scratch_root_falls_back_to_temp() {
        let patch = PatchConfig::default();
        assert!(patch.scratch_root().ends_with("munsort"));

        let patch = PatchConfig {
            scratch_dir: "/var/scratch".into(),
        };
        assert_eq!(patch.scratch_root(), PathBuf::from("/var/scratch"));
    }
}
