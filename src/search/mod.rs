//! Document search
//!
//! Case-insensitive substring search with bounded excerpts.

pub mod engine;

pub use engine::{extract_excerpt, search, search_documents, SearchResponse, SearchResult};
