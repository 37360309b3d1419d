//! High-level retrieval interface
//!
//! Combines a corpus, a scorer and the answer composer into one engine.
//!
//! # Usage
//!
//! ```ignore
//! use bridgy_lib::{corpus::Corpus, search::RetrievalEngine};
//!
//! let engine = RetrievalEngine::new(Corpus::builtin());
//! let results = engine.retrieve("What is JavaScript?");
//! let answer = engine.answer("What is JavaScript?", &results);
//! ```

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cache::{CacheConfig, QueryCache};
use crate::compose;
use crate::corpus::{Corpus, Document};
use crate::extract::extract_relevant_text;
use crate::score::{KeywordScorer, Query, Scorer, ScoringConfig};
use crate::Result;

/// Number of results returned when the caller does not say otherwise.
pub const DEFAULT_MAX_RESULTS: usize = 3;

/// A document ranked against one query
#[derive(Debug, Clone)]
pub struct ScoredResult {
    /// The matched document, shared with the corpus
    pub document: Arc<Document>,
    /// Relevance score, always positive for ranked results
    pub score: f32,
    /// Best matching sentence of the document for this query
    pub relevant_text: String,
}

/// Engine settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Result bound used by [`RetrievalEngine::retrieve`]
    pub max_results: usize,
    /// Query tokenisation and matching
    pub scoring: ScoringConfig,
    /// Memoise results per exact query; `None` disables caching
    pub cache: Option<CacheConfig>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_results: DEFAULT_MAX_RESULTS,
            scoring: ScoringConfig::default(),
            cache: None,
        }
    }
}

/// Score every document, drop the ones without overlap and return the best
/// `max_results`, highest score first.
///
/// Equal scores keep corpus order. Relevant text is only extracted for the
/// documents that survive the cut.
pub fn rank_all<S: Scorer + ?Sized>(
    scorer: &S,
    query: &Query,
    corpus: &Corpus,
    max_results: usize,
) -> Vec<ScoredResult> {
    if max_results == 0 || query.is_empty() {
        return Vec::new();
    }

    let mut scored: Vec<(&Arc<Document>, f32)> = corpus
        .documents()
        .iter()
        .map(|document| (document, scorer.score(query, document)))
        .filter(|(_, score)| *score > 0.0)
        .collect();

    // stable, so ties stay in corpus order
    scored.sort_by(|a, b| b.1.total_cmp(&a.1));
    scored.truncate(max_results);

    scored
        .into_iter()
        .map(|(document, score)| ScoredResult {
            document: Arc::clone(document),
            score,
            relevant_text: extract_relevant_text(query, document),
        })
        .collect()
}

/// Retrieval engine over an immutable corpus.
///
/// The engine holds no per-query state, so one instance can serve concurrent
/// callers behind a shared reference.
pub struct RetrievalEngine<S: Scorer = KeywordScorer> {
    corpus: Corpus,
    scorer: S,
    config: EngineConfig,
    cache: Option<QueryCache>,
}

// Constructors for the keyword scorer
impl RetrievalEngine<KeywordScorer> {
    /// Create an engine with default settings and no cache.
    #[must_use]
    pub fn new(corpus: Corpus) -> Self {
        Self {
            corpus,
            scorer: KeywordScorer,
            config: EngineConfig::default(),
            cache: None,
        }
    }

    /// Create an engine with explicit settings.
    pub fn with_config(corpus: Corpus, config: EngineConfig) -> Result<Self> {
        Self::with_scorer(corpus, KeywordScorer, config)
    }
}

impl<S: Scorer> RetrievalEngine<S> {
    /// Create an engine around a custom scorer.
    pub fn with_scorer(corpus: Corpus, scorer: S, config: EngineConfig) -> Result<Self> {
        let cache = match &config.cache {
            Some(cache_config) => {
                cache_config.validate()?;
                Some(QueryCache::new(cache_config))
            }
            None => None,
        };

        Ok(Self {
            corpus,
            scorer,
            config,
            cache,
        })
    }

    /// Ranked, annotated matches for `query`, bounded by the configured
    /// `max_results`.
    pub fn retrieve(&self, query: &str) -> Vec<ScoredResult> {
        self.retrieve_top(query, self.config.max_results)
    }

    /// Ranked, annotated matches for `query`, at most `max_results` of them.
    pub fn retrieve_top(&self, query: &str, max_results: usize) -> Vec<ScoredResult> {
        if let Some(hit) = self.cache.as_ref().and_then(|c| c.get(query, max_results)) {
            debug!(query, hits = hit.len(), "retrieval cache hit");
            return hit;
        }

        let parsed = Query::parse(query, &self.config.scoring);
        let results = rank_all(&self.scorer, &parsed, &self.corpus, max_results);

        debug!(
            query,
            scorer = self.scorer.name(),
            hits = results.len(),
            top_score = results.first().map(|r| r.score),
            "retrieved"
        );

        if let Some(cache) = &self.cache {
            cache.insert(query, max_results, results.clone());
        }
        results
    }

    /// Compose the answer text for results previously retrieved for `query`.
    #[must_use]
    pub fn answer(&self, query: &str, results: &[ScoredResult]) -> String {
        compose::compose(query, results)
    }

    /// Returns the corpus being searched.
    #[must_use]
    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    /// Returns the engine settings.
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns a reference to the scorer.
    #[must_use]
    pub fn scorer(&self) -> &S {
        &self.scorer
    }

    /// Returns the result cache, if memoisation is enabled.
    #[must_use]
    pub fn cache(&self) -> Option<&QueryCache> {
        self.cache.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::score::MatchMode;

    fn ids(results: &[ScoredResult]) -> Vec<&str> {
        results.iter().map(|r| r.document.id.as_str()).collect()
    }

    /// Scores every document 1.0, so ranking order is purely the tie-break.
    struct Flat;

    impl Scorer for Flat {
        fn score(&self, _query: &Query, _document: &Document) -> f32 {
            1.0
        }

        fn name(&self) -> &str {
            "flat"
        }
    }

    #[test]
    fn test_top_result_for_javascript_question() {
        let engine = RetrievalEngine::new(Corpus::starter());
        let results = engine.retrieve("What is JavaScript?");

        assert_eq!(ids(&results), ["1", "2", "3"]);
        assert_eq!(results[0].score, 3.5);
        assert_eq!(
            results[0].relevant_text,
            "JavaScript is a programming language that adds interactivity to websites"
        );
    }

    #[test]
    fn test_zero_scores_filtered() {
        let engine = RetrievalEngine::new(Corpus::starter());
        let results = engine.retrieve("python");

        assert_eq!(ids(&results), ["2"]);
    }

    #[test]
    fn test_sorted_descending() {
        let engine = RetrievalEngine::new(Corpus::builtin());
        let results = engine.retrieve_top("javascript async promises", 10);

        assert!(!results.is_empty());
        for window in results.windows(2) {
            assert!(
                window[0].score >= window[1].score,
                "Results should be sorted by score descending"
            );
        }
        assert_eq!(results[0].document.title, "Async JavaScript");
    }

    #[test]
    fn test_ties_keep_corpus_order() {
        let engine =
            RetrievalEngine::with_scorer(Corpus::builtin(), Flat, EngineConfig::default()).unwrap();
        let results = engine.retrieve_top("anything", 15);

        let expected: Vec<String> = (1..=15).map(|i| i.to_string()).collect();
        assert_eq!(ids(&results), expected);
    }

    #[test]
    fn test_respects_max_results() {
        let engine = RetrievalEngine::new(Corpus::builtin());

        assert_eq!(engine.retrieve("javascript").len(), DEFAULT_MAX_RESULTS);
        assert_eq!(engine.retrieve_top("javascript", 1).len(), 1);
        assert!(engine.retrieve_top("javascript", 0).is_empty());
    }

    #[test]
    fn test_max_results_larger_than_matches() {
        let engine = RetrievalEngine::new(Corpus::starter());
        assert_eq!(engine.retrieve_top("python", 100).len(), 1);
    }

    #[test]
    fn test_empty_query() {
        let engine = RetrievalEngine::new(Corpus::builtin());
        assert!(engine.retrieve("").is_empty());
        assert!(engine.retrieve(" \t ").is_empty());
    }

    #[test]
    fn test_empty_corpus() {
        let engine = RetrievalEngine::new(Corpus::new(Vec::new()).unwrap());
        assert!(engine.retrieve("javascript").is_empty());
    }

    #[test]
    fn test_results_share_corpus_documents() {
        let engine = RetrievalEngine::new(Corpus::starter());
        let results = engine.retrieve("python");
        let stored = engine.corpus().get("2").unwrap();

        assert!(Arc::ptr_eq(&results[0].document, stored));
    }

    #[test]
    fn test_cached_and_uncached_agree() {
        let config = EngineConfig {
            cache: Some(CacheConfig::default()),
            ..EngineConfig::default()
        };
        let cached = RetrievalEngine::with_config(Corpus::builtin(), config).unwrap();
        let plain = RetrievalEngine::new(Corpus::builtin());

        for _ in 0..2 {
            let a = cached.retrieve("How do I style a web page with CSS?");
            let b = plain.retrieve("How do I style a web page with CSS?");
            assert_eq!(ids(&a), ids(&b));
            assert_eq!(
                a.iter().map(|r| r.score).collect::<Vec<_>>(),
                b.iter().map(|r| r.score).collect::<Vec<_>>()
            );
        }
        assert!(cached.cache().unwrap().get("How do I style a web page with CSS?", 3).is_some());
    }

    #[test]
    fn test_invalid_cache_config() {
        let config = EngineConfig {
            cache: Some(CacheConfig {
                capacity: 0,
                ..CacheConfig::default()
            }),
            ..EngineConfig::default()
        };
        assert!(RetrievalEngine::with_config(Corpus::builtin(), config).is_err());
    }

    #[test]
    fn test_whole_word_config() {
        let config = EngineConfig {
            scoring: ScoringConfig {
                match_mode: MatchMode::WholeWord,
                ..ScoringConfig::default()
            },
            ..EngineConfig::default()
        };
        let engine = RetrievalEngine::with_config(Corpus::starter(), config).unwrap();

        // "mark" only appears inside "markup"
        assert!(engine.retrieve("mark").is_empty());
        assert_eq!(RetrievalEngine::new(Corpus::starter()).retrieve("mark").len(), 1);
    }
}
