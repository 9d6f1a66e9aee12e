//! Keyword rule types and configuration schema.
//!
//! A `RuleTable` is deserialized from TOML and holds an ordered list of
//! `KeywordRule`s plus the quick-question map. Rules are evaluated in
//! declaration order and the first matching rule wins. If no rule matches,
//! the table's `fallback` category is used.

use serde::{Deserialize, Serialize};

use drai_contracts::response::ResponseCategory;

/// A single keyword rule loaded from TOML.
///
/// Example in TOML:
/// ```toml
/// [[rules]]
/// id = "headache"
/// description = "Headache questions"
/// keywords = ["سردرد", "headache"]
/// category = "headache"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeywordRule {
    /// Stable identifier used in log output.
    pub id: String,

    /// Human-readable explanation of what this rule catches.
    #[serde(default)]
    pub description: String,

    /// Literal substrings to look for. Matching is done against the
    /// lowercased message, so keywords should be written in lowercase.
    pub keywords: Vec<String>,

    /// The reply category this rule produces.
    pub category: ResponseCategory,
}

impl KeywordRule {
    /// Return the first keyword contained in `lowered`, if any.
    ///
    /// `lowered` must already be lowercased. Empty keywords never match.
    pub fn matched_keyword(&self, lowered: &str) -> Option<&str> {
        self.keywords
            .iter()
            .map(String::as_str)
            .find(|k| !k.is_empty() && lowered.contains(*k))
    }
}

/// Direct mapping from a quick-question id to a reply category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuickMapping {
    pub id: String,
    pub category: ResponseCategory,
}

/// The top-level structure deserialized from a TOML rule file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleTable {
    /// Category used when no rule matches, or a quick-question id is unknown.
    #[serde(default)]
    pub fallback: ResponseCategory,

    /// Keyword rules, in priority order.
    #[serde(default)]
    pub rules: Vec<KeywordRule>,

    /// Quick-question id to category mappings.
    #[serde(default)]
    pub quick: Vec<QuickMapping>,
}
