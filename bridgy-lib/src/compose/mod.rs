//! Answer composition
//!
//! Maps the top result's score onto a confidence tier and renders the
//! matching response template. Only the first result is inspected.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::search::ScoredResult;

/// Minimum top score for a high confidence answer.
pub const HIGH_CONFIDENCE: f32 = 3.0;
/// Minimum top score for a medium confidence answer.
pub const MEDIUM_CONFIDENCE: f32 = 1.0;

/// Fixed reply when nothing in the corpus matched.
pub const NO_MATCH_MESSAGE: &str = "I don't have specific information about that topic. Could you try rephrasing your question or ask about programming, web development, or coding concepts?";

/// Reply when the best match is only loosely related.
pub const LOW_CONFIDENCE_MESSAGE: &str = "I found some loosely related information, but it might not directly answer your question. Could you try being more specific?";

/// Banding of the top relevance score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfidenceTier {
    High,
    Medium,
    Low,
    None,
}

impl ConfidenceTier {
    /// Tier for a single score.
    #[must_use]
    pub fn for_score(score: f32) -> Self {
        if score >= HIGH_CONFIDENCE {
            Self::High
        } else if score >= MEDIUM_CONFIDENCE {
            Self::Medium
        } else {
            Self::Low
        }
    }

    /// Tier for a ranked result list, decided by its first entry.
    #[must_use]
    pub fn for_results(results: &[ScoredResult]) -> Self {
        results
            .first()
            .map_or(Self::None, |top| Self::for_score(top.score))
    }
}

impl fmt::Display for ConfidenceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
            Self::None => "none",
        };
        f.write_str(name)
    }
}

/// Render the answer for `query` from ranked `results`. Never empty.
#[must_use]
pub fn compose(query: &str, results: &[ScoredResult]) -> String {
    let Some(top) = results.first() else {
        return NO_MATCH_MESSAGE.to_string();
    };

    match ConfidenceTier::for_score(top.score) {
        ConfidenceTier::High => format!(
            "Based on your question about \"{query}\", here's what I found:\n\n{}\n\nThis information comes from our knowledge base about {}.",
            top.relevant_text, top.document.title
        ),
        ConfidenceTier::Medium => format!(
            "I found some related information about \"{query}\":\n\n{}\n\nThis might be helpful, but you may want to be more specific with your question.",
            top.relevant_text
        ),
        ConfidenceTier::Low | ConfidenceTier::None => LOW_CONFIDENCE_MESSAGE.to_string(),
    }
}
