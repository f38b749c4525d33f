use super::boilerplate::strip_front_matter;
use super::error::{IngestionError, Result};
use super::segmenter::split_sentences;
use super::types::{Document, DocumentRegistry, DocumentSource};
use std::path::Path;

/// Reads a text from disk and turns it into its sentence sequence.
///
/// Invalid UTF-8 is replaced rather than rejected; only I/O failures are
/// reported as errors.
pub fn load_sentences(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|err| IngestionError::read(path, err))?;
    let text = String::from_utf8_lossy(&bytes);

    Ok(split_sentences(strip_front_matter(&text)))
}

/// Loads a single catalog entry.
pub fn load_document(source: &DocumentSource) -> Result<Document> {
    let sentences = load_sentences(&source.file)?;

    Ok(Document {
        title: source.title.clone(),
        file: source.file.clone(),
        sentences,
    })
}

/// Builds the registry from the catalog, one document at a time in order.
///
/// A document that cannot be read is logged and left out; the build itself
/// never fails.
pub fn build_registry(sources: &[DocumentSource]) -> DocumentRegistry {
    let mut registry = DocumentRegistry::default();

    for source in sources {
        match load_document(source) {
            Ok(document) => {
                tracing::info!(
                    "Loaded document '{}' ({} sentences)",
                    document.title,
                    document.sentences.len()
                );
                registry.insert(document);
            }
            Err(err) => {
                tracing::warn!("Failed to load document {}: {}", source.file, err);
            }
        }
    }

    registry
}
