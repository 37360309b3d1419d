//! Bridgy - lexical retrieval engine for the SkillBridge learning assistant
//!
//! # Architecture
//!
//! ```text
//! Query -> Scorer -> rank_all -> ScoredResult[] -> Composer -> answer text
//!            ^          |
//!          Corpus       +-> relevant sentence per result
//! ```
//!
//! # Example
//!
//! ```ignore
//! use bridgy_lib::{corpus::Corpus, search::RetrievalEngine};
//!
//! let engine = RetrievalEngine::new(Corpus::builtin());
//!
//! let results = engine.retrieve("What is JavaScript?");
//! for result in &results {
//!     println!("{} ({:.1}): {}", result.document.title, result.score, result.relevant_text);
//! }
//!
//! println!("{}", engine.answer("What is JavaScript?", &results));
//! ```

pub mod adapter;
pub mod cache;
pub mod compose;
pub mod corpus;
pub mod error;
pub mod eval;
pub mod extract;
pub mod score;
pub mod search;

pub use error::{Error, Result};
