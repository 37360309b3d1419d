//! Immutable document collections
//!
//! A [`Corpus`] is built once, before any query runs, and is read-only for the
//! rest of its life. Documents are reference counted so ranked results can
//! point at them without copying.
//!
//! # Usage
//!
//! ```ignore
//! use bridgy_lib::corpus::Corpus;
//!
//! // The bundled programming knowledge base
//! let corpus = Corpus::builtin();
//!
//! // Or a corpus prepared offline by an ingestion job
//! let corpus = Corpus::load("documents.json")?;
//! ```

use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{Error, Result};

/// A retrievable document
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Document {
    /// Unique identifier within a corpus
    pub id: String,
    /// Short human-readable name
    pub title: String,
    /// Free-text body, usually several sentences
    pub content: String,
    /// Classification label, informational only
    #[serde(default)]
    pub category: String,
    /// Lowercase topic keywords
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Document {
    /// Create a document from borrowed parts.
    pub fn new(id: &str, title: &str, content: &str, category: &str, tags: &[&str]) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            content: content.to_string(),
            category: category.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    fn validate(&self) -> Result<()> {
        let invalid = |reason: &str| Error::InvalidDocument {
            id: self.id.clone(),
            reason: reason.to_string(),
        };

        if self.id.trim().is_empty() {
            return Err(invalid("id is empty"));
        }
        if self.title.trim().is_empty() {
            return Err(invalid("title is empty"));
        }
        if self.content.trim().is_empty() {
            return Err(invalid("content is empty"));
        }
        Ok(())
    }

    // tags are matched against a lowercased query, so they must be lowercase too
    fn normalize_tags(&mut self) {
        let mut seen = HashSet::new();
        self.tags = self
            .tags
            .iter()
            .map(|t| t.trim().to_lowercase())
            .filter(|t| !t.is_empty() && seen.insert(t.clone()))
            .collect();
    }
}

/// Read-only, insertion-ordered collection of documents.
///
/// Cloning a corpus is cheap; clones share the same documents.
#[derive(Debug, Clone)]
pub struct Corpus {
    documents: Arc<[Arc<Document>]>,
}

impl Corpus {
    /// Build a corpus, validating ids and required fields.
    ///
    /// Tags are lowercased, trimmed and deduplicated. Document order is preserved.
    pub fn new(documents: Vec<Document>) -> Result<Self> {
        let mut ids = HashSet::with_capacity(documents.len());
        let mut stored = Vec::with_capacity(documents.len());

        for mut document in documents {
            document.validate()?;
            if !ids.insert(document.id.clone()) {
                return Err(Error::DuplicateId(document.id));
            }
            document.normalize_tags();
            stored.push(Arc::new(document));
        }

        Ok(Self {
            documents: stored.into(),
        })
    }

    /// Parse a corpus from JSON.
    ///
    /// Accepts either an array of [`Document`]s or an array of ingestion
    /// records (see [`IngestRecord`]).
    pub fn from_json_str(json: &str) -> Result<Self> {
        let documents = match serde_json::from_str::<CorpusFile>(json)? {
            CorpusFile::Documents(documents) => documents,
            CorpusFile::Records(records) => records.into_iter().map(Document::from).collect(),
        };
        Self::new(documents)
    }

    /// Load a corpus from a JSON file on disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let corpus = Self::from_json_str(&json)?;
        info!(documents = corpus.len(), path = %path.display(), "loaded corpus");
        Ok(corpus)
    }

    /// All documents in insertion order.
    #[must_use]
    pub fn documents(&self) -> &[Arc<Document>] {
        &self.documents
    }

    /// Look up a document by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Arc<Document>> {
        self.documents.iter().find(|d| d.id == id)
    }

    /// Returns the number of documents.
    #[must_use]
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Returns `true` if the corpus holds no documents.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CorpusFile {
    Documents(Vec<Document>),
    Records(Vec<IngestRecord>),
}

mod builtin;
mod ingest;

pub use ingest::*;
