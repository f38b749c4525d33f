//! Web Module
//!
//! The HTTP surface over the loaded `DocumentRegistry`.
//!
//! ## Submodules
//! - **`router`**: Route table and `build_router`.
//! - **`handlers`**: Axum handlers for the pages and JSON endpoints.
//! - **`templates`**: Compiled-in HTML layouts.
//! - **`types`**: Response bodies for the JSON endpoints.
//!
//! The registry is injected as an `Extension<Arc<DocumentRegistry>>` and is
//! only ever read by handlers.

pub mod handlers;
pub mod router;
pub mod templates;
pub mod types;

pub use router::build_router;
