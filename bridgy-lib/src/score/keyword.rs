use tracing::trace;

use crate::corpus::Document;
use crate::score::{Query, Scorer, TAG_BONUS, TITLE_BONUS, TOKEN_WEIGHT};

/// Weighted keyword-overlap scorer.
///
/// Good for: small hand-curated corpora where titles and tags are reliable
pub struct KeywordScorer;

impl Scorer for KeywordScorer {
    fn name(&self) -> &str {
        "keyword"
    }

    fn score(&self, query: &Query, document: &Document) -> f32 {
        if query.is_empty() {
            return 0.0;
        }

        let text = format!(
            "{} {} {}",
            document.title,
            document.content,
            document.tags.join(" ")
        )
        .to_lowercase();

        let mut score = query.matching_tokens(&text) as f32 * TOKEN_WEIGHT;

        let phrase = query.phrase();
        if document.title.to_lowercase().contains(phrase) {
            score += TITLE_BONUS;
        }

        // bonuses stack, one per tag present in the query
        let tags = document.tags.iter().filter(|tag| phrase.contains(tag.as_str()));
        score += tags.count() as f32 * TAG_BONUS;

        trace!(id = %document.id, score, "scored document");
        score
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::Corpus;
    use crate::score::{MatchMode, ScoringConfig};

    fn starter(id: &str) -> Document {
        Corpus::starter().get(id).unwrap().as_ref().clone()
    }

    fn score_with(query: &str, document: &Document, config: &ScoringConfig) -> f32 {
        KeywordScorer.score(&Query::parse(query, config), document)
    }

    fn score(query: &str, document: &Document) -> f32 {
        score_with(query, document, &ScoringConfig::default())
    }

    #[test]
    fn test_title_token_and_tag_bonuses_stack() {
        // 2 tokens + title phrase + "javascript" and "basics" tags
        let js = starter("1");
        assert_eq!(score("javascript basics", &js), 7.0);
    }

    #[test]
    fn test_question_about_javascript() {
        // "is" and "javascript" tokens + javascript tag
        let js = starter("1");
        assert_eq!(score("What is JavaScript?", &js), 3.5);
    }

    #[test]
    fn test_raw_tokens_keep_punctuation() {
        let raw = ScoringConfig {
            strip_punctuation: false,
            ..ScoringConfig::default()
        };
        // "javascript?" is not found in the text, only "is" and the tag count
        assert_eq!(score_with("What is JavaScript?", &starter("1"), &raw), 2.5);
    }

    #[test]
    fn test_token_matches_inside_words() {
        let html = starter("3");
        // "mark" only occurs inside "markup"
        assert_eq!(score("mark", &html), 1.0);
    }

    #[test]
    fn test_whole_word_rejects_partial_words() {
        let config = ScoringConfig {
            match_mode: MatchMode::WholeWord,
            ..ScoringConfig::default()
        };
        assert_eq!(score_with("mark", &starter("3"), &config), 0.0);
    }

    #[test]
    fn test_tag_matches_inside_query() {
        let python = starter("2");
        // "pythonic" is no token of the document, but contains the "python" tag
        assert_eq!(score("pythonic", &python), TAG_BONUS);
    }

    #[test]
    fn test_no_overlap_scores_zero() {
        assert_eq!(score("quantum zebra", &starter("1")), 0.0);
    }

    #[test]
    fn test_empty_query_scores_zero() {
        for doc in Corpus::builtin().documents() {
            assert_eq!(score("", doc), 0.0);
            assert_eq!(score("   ", doc), 0.0);
        }
    }

    #[test]
    fn test_duplicate_tokens_count_twice() {
        let html = starter("3");
        assert_eq!(score("markup markup", &html), 2.0 + TAG_BONUS);
    }

    #[test]
    fn test_free_function_uses_defaults() {
        assert_eq!(crate::score::score("What is JavaScript?", &starter("1")), 3.5);
    }
}
