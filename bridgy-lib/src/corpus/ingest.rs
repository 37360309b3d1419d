use std::hash::{DefaultHasher, Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::corpus::Document;

/// A lesson record as written by the offline ingestion job.
///
/// Records carry no id of their own; one is derived from the text so the same
/// lesson always maps to the same document id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IngestRecord {
    pub text: String,
    pub metadata: IngestMetadata,
}

/// Metadata attached to an [`IngestRecord`]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IngestMetadata {
    pub title: String,
    /// Course the lesson belongs to
    #[serde(default)]
    pub source: Option<String>,
    /// Kind of material, e.g. "lesson"
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub topic: Option<String>,
    #[serde(default)]
    pub difficulty: Option<String>,
}

impl From<IngestRecord> for Document {
    fn from(record: IngestRecord) -> Self {
        let IngestMetadata {
            title,
            kind,
            topic,
            difficulty,
            ..
        } = record.metadata;

        let mut tags = Vec::with_capacity(2);
        tags.extend(topic);
        tags.push(difficulty.unwrap_or_else(|| "beginner".to_string()));

        Document {
            id: generate_id(&record.text),
            title,
            category: kind.unwrap_or_else(|| "lesson".to_string()),
            content: record.text,
            tags,
        }
    }
}

fn generate_id(string: &str) -> String {
    let mut hasher = DefaultHasher::new();
    string.hash(&mut hasher);
    format!("{:x}", hasher.finish())
}
