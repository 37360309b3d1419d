//! Retrieval accuracy checks
//!
//! A case names a query and the tag its top document should carry, or no tag
//! when the query is out of scope and nothing should match. Each case is graded
//! on a three-point scale:
//!
//! - High: the top document carries the expected tag, or an out-of-scope query
//!   found nothing
//! - Medium: something was found, but not the expected topic
//! - Low: nothing was found for an in-scope query

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::compose::ConfidenceTier;
use crate::score::Scorer;
use crate::search::RetrievalEngine;

/// Characters of the answer kept in an outcome.
const PREVIEW_CHARS: usize = 100;

/// A single accuracy check
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvalCase {
    pub description: String,
    pub query: String,
    /// Tag the top document should have; `None` means nothing should match
    pub expected_tag: Option<String>,
}

impl EvalCase {
    pub fn new(description: &str, query: &str, expected_tag: Option<&str>) -> Self {
        Self {
            description: description.to_string(),
            query: query.to_string(),
            expected_tag: expected_tag.map(str::to_string),
        }
    }
}

/// The reference checks: a direct question, a paraphrase and an out-of-scope
/// question.
#[must_use]
pub fn default_cases() -> Vec<EvalCase> {
    vec![
        EvalCase::new("Simple known query", "What is JavaScript?", Some("javascript")),
        EvalCase::new("Paraphrased query", "How do I write code in JS?", Some("javascript")),
        EvalCase::new("Out-of-scope query", "What's the weather like?", None),
    ]
}

/// Accuracy grade
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Accuracy {
    Low,
    Medium,
    High,
}

impl fmt::Display for Accuracy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        };
        f.write_str(name)
    }
}

/// Result of running one [`EvalCase`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvalOutcome {
    pub case: EvalCase,
    pub accuracy: Accuracy,
    pub results: usize,
    pub top_document: Option<String>,
    pub tier: ConfidenceTier,
    /// Leading part of the composed answer
    pub preview: String,
}

/// Run every case against `engine`.
pub fn evaluate<S: Scorer>(engine: &RetrievalEngine<S>, cases: &[EvalCase]) -> Vec<EvalOutcome> {
    cases
        .iter()
        .map(|case| {
            let results = engine.retrieve(&case.query);
            let answer = engine.answer(&case.query, &results);
            let top = results.first();

            let accuracy = match (&case.expected_tag, top) {
                (None, None) => Accuracy::High,
                (Some(tag), Some(top)) if top.document.tags.contains(tag) => Accuracy::High,
                (_, Some(_)) => Accuracy::Medium,
                (Some(_), None) => Accuracy::Low,
            };

            EvalOutcome {
                case: case.clone(),
                accuracy,
                results: results.len(),
                top_document: top.map(|r| r.document.title.clone()),
                tier: ConfidenceTier::for_results(&results),
                preview: answer.chars().take(PREVIEW_CHARS).collect(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::Corpus;

    #[test]
    fn test_known_query_is_high() {
        let engine = RetrievalEngine::new(Corpus::builtin());
        let outcomes = evaluate(&engine, &default_cases()[..1]);

        assert_eq!(outcomes[0].accuracy, Accuracy::High);
        assert_eq!(outcomes[0].top_document.as_deref(), Some("JavaScript Basics"));
        assert_eq!(outcomes[0].tier, ConfidenceTier::High);
    }

    #[test]
    fn test_paraphrase_finds_javascript() {
        // "js" is a tag of JavaScript Basics, so the tag bonus lifts it to the top
        let engine = RetrievalEngine::new(Corpus::builtin());
        let outcomes = evaluate(&engine, &default_cases()[1..2]);

        assert_eq!(outcomes[0].accuracy, Accuracy::High);
    }

    #[test]
    fn test_out_of_scope_with_incidental_overlap_is_medium() {
        // "the" occurs in ordinary sentences, so something always comes back
        let engine = RetrievalEngine::new(Corpus::starter());
        let outcomes = evaluate(&engine, &default_cases()[2..]);

        assert_eq!(outcomes[0].accuracy, Accuracy::Medium);
        assert!(outcomes[0].results > 0);
    }

    #[test]
    fn test_out_of_scope_without_overlap_is_high() {
        let engine = RetrievalEngine::new(Corpus::starter());
        let cases = [EvalCase::new("Nonsense", "quantum zebra", None)];
        let outcomes = evaluate(&engine, &cases);

        assert_eq!(outcomes[0].accuracy, Accuracy::High);
        assert_eq!(outcomes[0].tier, ConfidenceTier::None);
    }

    #[test]
    fn test_missing_expected_topic_is_low() {
        let engine = RetrievalEngine::new(Corpus::starter());
        let cases = [EvalCase::new("Unknown topic", "quantum zebra", Some("quantum"))];

        assert_eq!(evaluate(&engine, &cases)[0].accuracy, Accuracy::Low);
    }

    #[test]
    fn test_preview_is_truncated() {
        let engine = RetrievalEngine::new(Corpus::builtin());
        let outcomes = evaluate(&engine, &default_cases());

        for outcome in outcomes {
            assert!(outcome.preview.chars().count() <= PREVIEW_CHARS);
        }
    }
}
