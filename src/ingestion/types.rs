//! Ingestion Data Types
//!
//! The static catalog entry describing where a text lives, the loaded
//! `Document`, and the read-only `DocumentRegistry` handed to the web layer.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A configured text: what to call it and where to read it from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentSource {
    pub title: String,
    pub file: String,
}

impl DocumentSource {
    pub fn new(title: impl Into<String>, file: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            file: file.into(),
        }
    }
}

/// A fully segmented document.
///
/// This is the JSON shape consumed by the reader page: `title`, `file` and
/// the ordered `sentences`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub title: String,
    pub file: String,
    pub sentences: Vec<String>,
}

/// Every document that loaded successfully, keyed by its source path.
///
/// Built once at startup by [`build_registry`](super::loader::build_registry)
/// and never mutated afterwards. Serializes as a plain JSON object with keys
/// in sorted order.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct DocumentRegistry {
    documents: BTreeMap<String, Document>,
}

impl DocumentRegistry {
    pub(crate) fn insert(&mut self, document: Document) {
        self.documents.insert(document.file.clone(), document);
    }

    /// Looks up a document by its source path.
    pub fn get(&self, file: &str) -> Option<&Document> {
        self.documents.get(file)
    }

    pub fn contains(&self, file: &str) -> bool {
        self.documents.contains_key(file)
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Documents in key order.
    pub fn iter(&self) -> impl Iterator<Item = &Document> {
        self.documents.values()
    }

    /// Total number of sentences across all documents.
    pub fn sentence_count(&self) -> usize {
        self.documents.values().map(|doc| doc.sentences.len()).sum()
    }
}

impl FromIterator<Document> for DocumentRegistry {
    fn from_iter<I: IntoIterator<Item = Document>>(iter: I) -> Self {
        let mut registry = Self::default();
        for document in iter {
            registry.insert(document);
        }
        registry
    }
}
