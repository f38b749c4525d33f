//! Reading Room Library
//!
//! Serves a handful of public-domain books, pre-split into sentences, to a
//! browser-side reader. The binary (`main.rs`) loads the catalog once and then
//! hands the read-only registry to the web layer.
//!
//! ## Architecture Modules
//! - **`ingestion`**: Reads each configured text, strips the Project Gutenberg
//!   front-matter and segments the body into sentences, producing the
//!   `DocumentRegistry`.
//! - **`web`**: Axum router, page templates and JSON endpoints over the registry.
//! - **`config`**: Listen address from the environment and the static catalog.

pub mod config;
pub mod ingestion;
pub mod web;
