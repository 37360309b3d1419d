//! Query parsing and relevance scoring
//!
//! Relevance is weighted keyword overlap between a query and a document:
//!
//! | signal                                      | weight        |
//! |---------------------------------------------|---------------|
//! | query token found in title + content + tags | +1.0 per token|
//! | whole query phrase found in the title       | +2.0          |
//! | a document tag found in the query phrase    | +1.5 per tag  |
//!
//! Matching is done on lowercased text. Scores are not normalised and have no
//! upper bound; zero means no overlap at all.
//!
//! # Implementing a Scorer
//!
//! ```ignore
//! use bridgy_lib::score::{Query, Scorer};
//! use bridgy_lib::corpus::Document;
//!
//! struct TitleOnly;
//!
//! impl Scorer for TitleOnly {
//!     fn score(&self, query: &Query, document: &Document) -> f32 {
//!         // Your scoring logic here
//!         todo!()
//!     }
//!
//!     fn name(&self) -> &str {
//!         "title-only"
//!     }
//! }
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::corpus::Document;
use crate::Error;

/// Added for each query token found anywhere in the document.
pub const TOKEN_WEIGHT: f32 = 1.0;
/// Added when the whole query phrase appears in the title.
pub const TITLE_BONUS: f32 = 2.0;
/// Added for each document tag that appears in the query phrase.
pub const TAG_BONUS: f32 = 1.5;

/// How a single query token is matched against text
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MatchMode {
    /// Token may appear anywhere, including inside longer words ("is" matches "history")
    #[default]
    Substring,
    /// Token must be bounded by non-alphanumeric characters or the text edges
    WholeWord,
}

impl MatchMode {
    /// Returns `true` if `needle` occurs in `haystack` under this mode.
    ///
    /// Both arguments are expected to be lowercased already.
    #[must_use]
    pub fn matches(self, haystack: &str, needle: &str) -> bool {
        match self {
            Self::Substring => haystack.contains(needle),
            Self::WholeWord => contains_word(haystack, needle),
        }
    }
}

impl fmt::Display for MatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Substring => f.write_str("substring"),
            Self::WholeWord => f.write_str("whole-word"),
        }
    }
}

impl FromStr for MatchMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "substring" => Ok(Self::Substring),
            "whole-word" | "word" => Ok(Self::WholeWord),
            other => Err(Error::InvalidInput(format!("unknown match mode: {other}"))),
        }
    }
}

fn contains_word(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return false;
    }

    haystack.match_indices(needle).any(|(start, _)| {
        let end = start + needle.len();
        let before = haystack[..start].chars().next_back();
        let after = haystack[end..].chars().next();
        !before.is_some_and(char::is_alphanumeric) && !after.is_some_and(char::is_alphanumeric)
    })
}

/// Query tokenisation settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Token matching mode
    pub match_mode: MatchMode,
    /// Trim leading and trailing ASCII punctuation from each token, so that
    /// "javascript?" matches "javascript". Turn off for raw whitespace tokens.
    pub strip_punctuation: bool,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            match_mode: MatchMode::Substring,
            strip_punctuation: true,
        }
    }
}

/// A parsed query: the lowercased phrase plus its whitespace tokens.
///
/// Duplicate tokens are kept and each one counts separately.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    raw: String,
    phrase: String,
    tokens: Vec<String>,
    mode: MatchMode,
}

impl Query {
    /// Parse raw query text.
    pub fn parse(raw: &str, config: &ScoringConfig) -> Self {
        let lowered = raw.to_lowercase();
        let strip = |s: &str| {
            if config.strip_punctuation {
                s.trim_matches(|c: char| c.is_ascii_punctuation()).to_string()
            } else {
                s.to_string()
            }
        };

        let tokens: Vec<String> = lowered
            .split_whitespace()
            .map(strip)
            .filter(|t| !t.is_empty())
            .collect();

        // a query without tokens carries no phrase either, so no bonus can fire
        let phrase = if tokens.is_empty() {
            String::new()
        } else {
            strip(lowered.trim())
        };

        Self {
            raw: raw.to_string(),
            phrase,
            tokens,
            mode: config.match_mode,
        }
    }

    /// The query exactly as submitted.
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The lowercased query phrase used for title and tag bonuses.
    #[must_use]
    pub fn phrase(&self) -> &str {
        &self.phrase
    }

    /// Lowercased tokens in query order.
    #[must_use]
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// How tokens are matched against text.
    #[must_use]
    pub fn match_mode(&self) -> MatchMode {
        self.mode
    }

    /// Returns `true` if the query has no tokens.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Count the tokens found in `text`, which must already be lowercased.
    #[must_use]
    pub fn matching_tokens(&self, text: &str) -> usize {
        self.tokens
            .iter()
            .filter(|token| self.mode.matches(text, token))
            .count()
    }
}

/// Trait for query/document relevance functions
pub trait Scorer: Send + Sync {
    /// Score a document against a parsed query. Never negative.
    fn score(&self, query: &Query, document: &Document) -> f32;

    /// Returns the name of this scoring strategy
    fn name(&self) -> &str;
}

/// Score `query` against `document` with the default settings.
#[must_use]
pub fn score(query: &str, document: &Document) -> f32 {
    KeywordScorer.score(&Query::parse(query, &ScoringConfig::default()), document)
}

mod keyword;

pub use keyword::*;
