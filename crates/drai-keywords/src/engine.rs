//! TOML-driven keyword responder.
//!
//! `TomlKeywordEngine` loads a `RuleTable` from a TOML string or file and
//! implements the `Responder` trait from drai-core.
//!
//! Classification algorithm:
//!
//! 1. Lowercase the message.
//! 2. Iterate rules in declaration order; the first rule with a keyword that
//!    occurs as a substring of the lowered message decides the category.
//! 3. If no rule matched, return the table's fallback (`unknown` by default).
//!
//! Quick questions skip steps 1-2 and look the id up directly.

use std::path::Path;

use tracing::{debug, warn};

use drai_contracts::{
    error::{DrAiError, DrAiResult},
    response::ResponseCategory,
};
use drai_core::traits::Responder;

use crate::rule::RuleTable;

/// The keyword table shipped with the workspace.
pub const DEFAULT_RULES: &str = include_str!("../rules/responses.toml");

/// A `Responder` implementation that reads keyword rules from a TOML document.
///
/// ```rust,ignore
/// use drai_keywords::TomlKeywordEngine;
///
/// let engine = TomlKeywordEngine::from_file(Path::new("rules/responses.toml"))?;
/// ```
#[derive(Debug, Clone)]
pub struct TomlKeywordEngine {
    table: RuleTable,
}

impl TomlKeywordEngine {
    /// Parse `s` as TOML and build a `TomlKeywordEngine`.
    ///
    /// Returns `DrAiError::ConfigError` if the TOML is malformed or does not
    /// match the expected `RuleTable` schema.
    pub fn from_toml_str(s: &str) -> DrAiResult<Self> {
        let table: RuleTable = toml::from_str(s).map_err(|e| DrAiError::ConfigError {
            reason: format!("failed to parse keyword rules TOML: {}", e),
        })?;
        debug!(
            rules = table.rules.len(),
            quick = table.quick.len(),
            fallback = ?table.fallback,
            "keyword rules loaded"
        );
        Ok(Self { table })
    }

    /// Read the file at `path` and parse it as a keyword rule table.
    pub fn from_file(path: &Path) -> DrAiResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| DrAiError::ConfigError {
            reason: format!("failed to read keyword rules '{}': {}", path.display(), e),
        })?;
        Self::from_toml_str(&contents)
    }

    /// Build the engine from the embedded default table.
    pub fn with_default_rules() -> DrAiResult<Self> {
        Self::from_toml_str(DEFAULT_RULES)
    }

    /// The loaded rule table.
    pub fn table(&self) -> &RuleTable {
        &self.table
    }
}

impl Responder for TomlKeywordEngine {
    fn classify(&self, text: &str) -> ResponseCategory {
        let lowered = text.to_lowercase();

        for rule in &self.table.rules {
            if let Some(keyword) = rule.matched_keyword(&lowered) {
                debug!(
                    rule_id = %rule.id,
                    keyword = %keyword,
                    category = ?rule.category,
                    "keyword rule matched"
                );
                return rule.category;
            }
        }

        debug!(fallback = ?self.table.fallback, "no keyword rule matched");
        self.table.fallback
    }

    fn classify_quick(&self, question_id: &str) -> ResponseCategory {
        match self.table.quick.iter().find(|q| q.id == question_id) {
            Some(mapping) => mapping.category,
            None => {
                warn!(question_id = %question_id, "unknown quick question id");
                self.table.fallback
            }
        }
    }
}
