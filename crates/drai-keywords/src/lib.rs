//! # drai-keywords
//!
//! A TOML-driven, first-match keyword dispatcher for the AI doctor chat.
//!
//! ## Overview
//!
//! This crate provides [`TomlKeywordEngine`], which implements the
//! [`Responder`](drai_core::traits::Responder) trait. Keyword rules are
//! declared in a TOML file, evaluated in order, and the first matching rule
//! wins. If no rule matches, the fallback category (`unknown`) is used.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use drai_core::Responder;
//! use drai_keywords::TomlKeywordEngine;
//!
//! let engine = TomlKeywordEngine::with_default_rules()?;
//! let reply = engine.respond("I have a headache");
//! ```
//!
//! ## Rule matching
//!
//! Messages are lowercased, then each rule's keywords are tested as literal
//! substrings. There is no scoring; a message mentioning both a headache and
//! a doctor gets the headache reply because that rule is declared first.

pub mod engine;
pub mod rule;

pub use engine::{TomlKeywordEngine, DEFAULT_RULES};
pub use rule::{KeywordRule, QuickMapping, RuleTable};

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use drai_contracts::{error::DrAiError, response::ResponseCategory};
    use drai_core::traits::Responder;

    use crate::TomlKeywordEngine;

    fn engine() -> TomlKeywordEngine {
        TomlKeywordEngine::with_default_rules().expect("default rules must parse")
    }

    // ── 1. default table ──────────────────────────────────────────────────────

    #[test]
    fn test_default_table_shape() {
        let engine = engine();
        let ids: Vec<&str> = engine.table().rules.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["headache", "cold-symptoms", "medicine", "doctor-visit"]);
        assert_eq!(engine.table().quick.len(), 4);
        assert_eq!(engine.table().fallback, ResponseCategory::Unknown);
    }

    // ── 2. keyword matching ───────────────────────────────────────────────────

    #[test]
    fn test_persian_headache() {
        let engine = engine();
        assert_eq!(engine.classify("من سردرد دارم"), ResponseCategory::Headache);
        assert_eq!(
            engine.respond("من سردرد دارم"),
            ResponseCategory::Headache.reply()
        );
    }

    #[test]
    fn test_each_category_in_both_languages() {
        let engine = engine();
        let cases = [
            ("I have a headache", ResponseCategory::Headache),
            ("علائم سرماخوردگی چیست؟", ResponseCategory::ColdSymptoms),
            ("I think I caught a cold", ResponseCategory::ColdSymptoms),
            ("is this the flu?", ResponseCategory::ColdSymptoms),
            ("چه داروهایی مصرف کنم؟", ResponseCategory::Medicine),
            ("which medicine helps?", ResponseCategory::Medicine),
            ("آیا باید به پزشک مراجعه کنم؟", ResponseCategory::DoctorVisit),
            ("should I see a doctor", ResponseCategory::DoctorVisit),
            ("is a visit needed", ResponseCategory::DoctorVisit),
        ];
        for (text, expected) in cases {
            assert_eq!(engine.classify(text), expected, "input: {text}");
        }
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let engine = engine();
        assert_eq!(engine.classify("HEADACHE!!"), ResponseCategory::Headache);
        assert_eq!(engine.classify("Need a Doctor"), ResponseCategory::DoctorVisit);
    }

    #[test]
    fn test_substring_matching() {
        // "cold" inside "colder" still counts; there is no word-boundary logic.
        let engine = engine();
        assert_eq!(engine.classify("it is colder today"), ResponseCategory::ColdSymptoms);
    }

    // ── 3. priority order ─────────────────────────────────────────────────────

    #[test]
    fn test_first_match_wins() {
        let engine = engine();
        assert_eq!(
            engine.classify("headache and a cold, should I visit a doctor?"),
            ResponseCategory::Headache
        );
        assert_eq!(
            engine.classify("flu medicine"),
            ResponseCategory::ColdSymptoms
        );
        assert_eq!(
            engine.classify("medicine from my doctor"),
            ResponseCategory::Medicine
        );
        // Persian: headache outranks medicine in the same sentence.
        assert_eq!(
            engine.classify("برای سردرد چه دارویی بخورم"),
            ResponseCategory::Headache
        );
    }

    // ── 4. fallback ───────────────────────────────────────────────────────────

    #[test]
    fn test_unknown_fallback() {
        let engine = engine();
        assert_eq!(engine.classify("unrelated text"), ResponseCategory::Unknown);
        assert_eq!(engine.classify(""), ResponseCategory::Unknown);
        assert_eq!(
            engine.respond("unrelated text"),
            ResponseCategory::Unknown.reply()
        );
    }

    // ── 5. quick questions ────────────────────────────────────────────────────

    #[test]
    fn test_quick_questions() {
        let engine = engine();
        assert_eq!(engine.classify_quick("q1"), ResponseCategory::Headache);
        assert_eq!(engine.classify_quick("q2"), ResponseCategory::ColdSymptoms);
        assert_eq!(engine.classify_quick("q3"), ResponseCategory::Medicine);
        assert_eq!(engine.classify_quick("q4"), ResponseCategory::DoctorVisit);
        assert_eq!(engine.respond_quick("q1"), ResponseCategory::Headache.reply());
    }

    #[test]
    fn test_unknown_quick_question() {
        let engine = engine();
        assert_eq!(engine.classify_quick("q5"), ResponseCategory::Unknown);
        assert_eq!(engine.classify_quick(""), ResponseCategory::Unknown);
        // Ids are matched exactly, never through keyword matching.
        assert_eq!(engine.classify_quick("headache"), ResponseCategory::Unknown);
        assert_eq!(engine.classify_quick("Q1"), ResponseCategory::Unknown);
    }

    // ── 6. idempotence ────────────────────────────────────────────────────────

    #[test]
    fn test_repeated_calls_agree() {
        let engine = engine();
        for text in ["من سردرد دارم", "unrelated text", ""] {
            assert_eq!(engine.respond(text), engine.respond(text));
        }
        assert_eq!(engine.respond_quick("q3"), engine.respond_quick("q3"));
    }

    // ── 7. custom tables ──────────────────────────────────────────────────────

    #[test]
    fn test_custom_table_and_fallback() {
        let toml = r#"
            fallback = "doctor_visit"

            [[rules]]
            id = "pills"
            keywords = ["pill"]
            category = "medicine"
        "#;

        let engine = TomlKeywordEngine::from_toml_str(toml).unwrap();
        assert_eq!(engine.classify("a PILL a day"), ResponseCategory::Medicine);
        assert_eq!(engine.classify("headache"), ResponseCategory::DoctorVisit);
        assert_eq!(engine.classify_quick("q1"), ResponseCategory::DoctorVisit);
    }

    #[test]
    fn test_empty_table_answers_unknown() {
        let engine = TomlKeywordEngine::from_toml_str("").unwrap();
        assert_eq!(engine.classify("headache"), ResponseCategory::Unknown);
        assert_eq!(engine.classify_quick("q1"), ResponseCategory::Unknown);
    }

    #[test]
    fn test_empty_keyword_never_matches() {
        let toml = r#"
            [[rules]]
            id = "blank"
            keywords = [""]
            category = "medicine"
        "#;
        let engine = TomlKeywordEngine::from_toml_str(toml).unwrap();
        assert_eq!(engine.classify("anything"), ResponseCategory::Unknown);
    }

    // ── 8. config errors ──────────────────────────────────────────────────────

    #[test]
    fn test_toml_parse_error() {
        let result = TomlKeywordEngine::from_toml_str("this is not valid toml ][[[");

        match result {
            Err(DrAiError::ConfigError { reason }) => {
                assert!(
                    reason.contains("failed to parse keyword rules TOML"),
                    "expected parse error message, got: {reason}"
                );
            }
            other => panic!("expected ConfigError, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_category_is_rejected() {
        let toml = r#"
            [[rules]]
            id = "bad"
            keywords = ["x"]
            category = "surgery"
        "#;
        assert!(matches!(
            TomlKeywordEngine::from_toml_str(toml),
            Err(DrAiError::ConfigError { .. })
        ));
    }

    #[test]
    fn test_missing_file() {
        let result = TomlKeywordEngine::from_file(std::path::Path::new(
            "/nonexistent/drai/responses.toml",
        ));
        match result {
            Err(DrAiError::ConfigError { reason }) => {
                assert!(reason.contains("failed to read keyword rules"));
            }
            other => panic!("expected ConfigError, got {:?}", other),
        }
    }
}
