//! Relevant-sentence extraction
//!
//! Picks the sentence of a document that shares the most tokens with the query.
//! Sentences are the pieces between runs of `.`, `!` and `?`; the terminators
//! themselves are dropped.

use crate::corpus::Document;
use crate::score::Query;

/// Select the sentence of `document` that best matches `query`.
///
/// Ties keep the earliest sentence. When no sentence shares a token with the
/// query the first sentence is returned. The result is trimmed, and empty for
/// empty content.
#[must_use]
pub fn extract_relevant_text(query: &Query, document: &Document) -> String {
    let mut sentences = Sentences::from(&document.content);

    let Some(mut best) = sentences.next() else {
        return String::new();
    };
    let mut best_score = query.matching_tokens(&best.to_lowercase());

    for sentence in sentences {
        let score = query.matching_tokens(&sentence.to_lowercase());
        if score > best_score {
            best_score = score;
            best = sentence;
        }
    }

    best.trim().to_string()
}

/// Iterator over the sentences of a text, untrimmed.
///
/// Like a regex split on `[.!?]+`: text after the last terminator, even when
/// empty, is yielded as a final sentence.
pub struct Sentences<'a> {
    s: &'a str,
    done: bool,
}

impl<'a> Sentences<'a> {
    pub fn from(s: &'a str) -> Self {
        Self { s, done: false }
    }
}

impl<'a> Iterator for Sentences<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let Some(end) = self.s.find(is_terminator) else {
            // Remainder after the last terminator.
            self.done = true;
            return Some(self.s);
        };

        let sentence = &self.s[..end];
        let rest = &self.s[end..];
        self.s = rest.trim_start_matches(is_terminator);
        Some(sentence)
    }
}

fn is_terminator(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::score::{MatchMode, ScoringConfig};

    fn doc(content: &str) -> Document {
        Document::new("1", "Doc", content, "misc", &["misc"])
    }

    fn extract(query: &str, content: &str) -> String {
        extract_relevant_text(&Query::parse(query, &ScoringConfig::default()), &doc(content))
    }

    #[test]
    fn test_sentences_iterator() {
        let sentences: Vec<_> = Sentences::from("One. Two!! Three?").collect();
        assert_eq!(sentences, ["One", " Two", " Three", ""]);
    }

    #[test]
    fn test_sentences_without_terminator() {
        let sentences: Vec<_> = Sentences::from("no terminator here").collect();
        assert_eq!(sentences, ["no terminator here"]);
    }

    #[test]
    fn test_sentences_empty() {
        let sentences: Vec<_> = Sentences::from("").collect();
        assert_eq!(sentences, [""]);
    }

    #[test]
    fn test_picks_best_sentence() {
        let content = "Python is simple. It runs in the browser and the server. CSS styles pages.";
        assert_eq!(extract("browser server", content), "It runs in the browser and the server");
    }

    #[test]
    fn test_tie_keeps_first() {
        let content = "Cats are cute. Dogs are cute. Birds are cute.";
        assert_eq!(extract("cute", content), "Cats are cute");
    }

    #[test]
    fn test_defaults_to_first_sentence() {
        let content = "  First sentence here.  Second one.";
        assert_eq!(extract("zebra", content), "First sentence here");
    }

    #[test]
    fn test_empty_content() {
        assert_eq!(extract("anything", ""), "");
    }

    #[test]
    fn test_later_sentence_must_score_strictly_higher() {
        let content = "Loops repeat work. Functions and loops organise code.";
        assert_eq!(extract("loops functions", content), "Functions and loops organise code");
        assert_eq!(extract("loops", content), "Loops repeat work");
    }

    #[test]
    fn test_respects_match_mode() {
        let content = "History matters. This is it.";
        let config = ScoringConfig {
            match_mode: MatchMode::WholeWord,
            ..ScoringConfig::default()
        };
        let query = Query::parse("is", &config);
        assert_eq!(extract_relevant_text(&query, &doc(content)), "This is it");

        // substring matching finds "is" in "history" first
        assert_eq!(extract("is", content), "History matters");
    }
}
