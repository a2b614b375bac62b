//! Externally supplied classification override rules.
//!
//! Two ordered buckets: `name` rules match against the document title,
//! `contains` rules against the full body text. Name rules are tried first;
//! the first match wins and replaces the heuristic result entirely. A
//! malformed rule set is a hard error — overrides must never be silently
//! dropped.

use regex::Regex;
use tracing::debug;

use munsort_shared::config::RulesConfig;
use munsort_shared::{DocType, MunsortError, Result};

/// A compiled rule: pattern plus the type it forces.
#[derive(Debug)]
struct CompiledRule {
    pattern: Regex,
    doc_type: DocType,
}

/// The override rule set with all patterns compiled up front.
#[derive(Debug)]
pub struct CompiledRules {
    name: Vec<CompiledRule>,
    contains: Vec<CompiledRule>,
}

impl CompiledRules {
    /// Compile the configured rule set, failing fast on any invalid pattern.
    pub fn compile(config: &RulesConfig) -> Result<Self> {
        let compile_bucket = |bucket: &str, entries: &[munsort_shared::RuleEntry]| {
            entries
                .iter()
                .map(|entry| {
                    let pattern = Regex::new(&entry.pattern).map_err(|e| {
                        MunsortError::config(format!(
                            "invalid {bucket} rule pattern '{}': {e}",
                            entry.pattern
                        ))
                    })?;
                    Ok(CompiledRule {
                        pattern,
                        doc_type: entry.doc_type,
                    })
                })
                .collect::<Result<Vec<_>>>()
        };

        Ok(Self {
            name: compile_bucket("name", &config.name)?,
            contains: compile_bucket("contains", &config.contains)?,
        })
    }

    /// An empty rule set (no overrides configured).
    pub fn none() -> Self {
        Self {
            name: Vec::new(),
            contains: Vec::new(),
        }
    }

    /// Whether any rule is configured.
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.contains.is_empty()
    }

    /// Apply the rules: name rules against the title, then contains rules
    /// against the body text. First match wins.
    pub fn apply(&self, title: &str, body_text: &str) -> Option<DocType> {
        for rule in &self.name {
            if rule.pattern.is_match(title) {
                debug!(pattern = %rule.pattern, doc_type = %rule.doc_type, "name rule matched");
                return Some(rule.doc_type);
            }
        }
        for rule in &self.contains {
            if rule.pattern.is_match(body_text) {
                debug!(pattern = %rule.pattern, doc_type = %rule.doc_type, "contains rule matched");
                return Some(rule.doc_type);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use munsort_shared::RuleEntry;

    fn rule(pattern: &str, doc_type: DocType) -> RuleEntry {
        RuleEntry {
            pattern: pattern.into(),
            doc_type,
        }
    }

    #[test]
    fn name_rules_precede_contains_rules() {
        let rules = CompiledRules::compile(&RulesConfig {
            name: vec![rule("(?i)draft", DocType::Resolution)],
            contains: vec![rule("Draft", DocType::Notes)],
        })
        .expect("compile");

        let decided = rules.apply("Draft Resolution 1.1", "Draft body text");
        assert_eq!(decided, Some(DocType::Resolution));
    }

    #[test]
    fn contains_rules_scan_body_text() {
        let rules = CompiledRules::compile(&RulesConfig {
            name: vec![rule("unrelated-title", DocType::Notes)],
            contains: vec![rule("Position Paper", DocType::Position)],
        })
        .expect("compile");

        let decided = rules.apply("france.docx", "Position Paper submitted by France");
        assert_eq!(decided, Some(DocType::Position));
    }

    #[test]
    fn no_match_yields_none() {
        let rules = CompiledRules::compile(&RulesConfig {
            name: vec![rule("^research-", DocType::Notes)],
            contains: vec![],
        })
        .expect("compile");

        assert_eq!(rules.apply("position-france", "body"), None);
    }

    #[test]
    fn invalid_pattern_fails_fast() {
        let result = CompiledRules::compile(&RulesConfig {
            name: vec![rule("([unclosed", DocType::Notes)],
            contains: vec![],
        });

        let err = result.expect_err("bad pattern");
        assert!(err.to_string().contains("invalid name rule pattern"));
    }

    #[test]
    fn empty_rule_set_reports_empty() {
        assert!(CompiledRules::none().is_empty());
        let compiled = CompiledRules::compile(&RulesConfig::default()).expect("compile");
        assert!(compiled.is_empty());
    }
}
