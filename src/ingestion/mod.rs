//! Ingestion Module
//!
//! Turns the configured plain-text eBooks into the in-memory document registry.
//!
//! ## Workflow
//! 1. **Read**: Loads the raw file from disk.
//! 2. **Strip**: Drops the Project Gutenberg front-matter (`boilerplate`).
//! 3. **Segment**: Splits the body into filtered sentences (`segmenter`).
//! 4. **Register**: Collects each document into the `DocumentRegistry` (`loader`).
//!
//! A document that cannot be read is skipped with a warning; the rest of the
//! catalog still loads.

pub mod boilerplate;
pub mod error;
pub mod loader;
pub mod segmenter;
pub mod types;

pub use error::IngestionError;
pub use loader::{build_registry, load_document, load_sentences};
pub use types::{Document, DocumentRegistry, DocumentSource};
