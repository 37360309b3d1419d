//! Call-site adapters for the chat widget and the voice assistant
//!
//! Both front ends share one engine and hand back an [`Exchange`]: the answer
//! text plus the citations a UI shows under it. An `Exchange` serialises as is,
//! so a history store can persist it without reshaping.

use std::sync::{Arc, LazyLock};

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::Serialize;
use tracing::debug;

use crate::compose::ConfidenceTier;
use crate::score::{KeywordScorer, Scorer};
use crate::search::{RetrievalEngine, ScoredResult};

/// Shortest cleaned transcript still treated as a question.
const MIN_TRANSCRIPT_LEN: usize = 4;

static FILLER_WORDS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:uhh|umm|you\s+know|like|so|well|actually|basically)\b")
        .expect("filler word pattern is valid")
});

/// A source shown next to an answer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Citation {
    pub id: String,
    pub title: String,
    pub category: String,
    pub score: f32,
}

impl From<&ScoredResult> for Citation {
    fn from(result: &ScoredResult) -> Self {
        Self {
            id: result.document.id.clone(),
            title: result.document.title.clone(),
            category: result.document.category.clone(),
            score: result.score,
        }
    }
}

/// One question/answer round trip
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Exchange {
    /// The text that was searched
    pub query: String,
    pub answer: String,
    pub tier: ConfidenceTier,
    pub sources: Vec<Citation>,
    pub timestamp: DateTime<Utc>,
}

fn exchange<S: Scorer>(engine: &RetrievalEngine<S>, query: &str) -> Exchange {
    let results = engine.retrieve(query);

    Exchange {
        query: query.to_string(),
        answer: engine.answer(query, &results),
        tier: ConfidenceTier::for_results(&results),
        sources: results.iter().map(Citation::from).collect(),
        timestamp: Utc::now(),
    }
}

/// Typed questions from the chat widget.
pub struct ChatAdapter<S: Scorer = KeywordScorer> {
    engine: Arc<RetrievalEngine<S>>,
}

impl<S: Scorer> ChatAdapter<S> {
    #[must_use]
    pub fn new(engine: Arc<RetrievalEngine<S>>) -> Self {
        Self { engine }
    }

    /// Answer a typed message.
    pub fn ask(&self, message: &str) -> Exchange {
        exchange(&self.engine, message)
    }
}

/// Transcribed questions from the voice assistant.
///
/// Filler words are removed before retrieval.
pub struct VoiceAdapter<S: Scorer = KeywordScorer> {
    engine: Arc<RetrievalEngine<S>>,
}

impl<S: Scorer> VoiceAdapter<S> {
    #[must_use]
    pub fn new(engine: Arc<RetrievalEngine<S>>) -> Self {
        Self { engine }
    }

    /// Answer a speech transcript.
    pub fn ask(&self, transcript: &str) -> Exchange {
        let query = clean_transcript(transcript).unwrap_or_else(|| transcript.trim().to_string());
        debug!(transcript, query = %query, "voice query");
        exchange(&self.engine, &query)
    }
}

/// Strip filler words and collapse whitespace.
///
/// Returns `None` when too little text is left to be a question.
#[must_use]
pub fn clean_transcript(transcript: &str) -> Option<String> {
    let stripped = FILLER_WORDS.replace_all(transcript, " ");
    let cleaned = stripped.split_whitespace().collect::<Vec<_>>().join(" ");

    (cleaned.chars().count() >= MIN_TRANSCRIPT_LEN).then_some(cleaned)
}
