//! brainboard library
//!
//! Second Brain dashboard core: markdown corpus, folder tree, search and
//! the JSON-backed trackers.
//!
//! # Modules
//!
//! - `core`: Corpus scanning (documents, frontmatter, folder tree, activity)
//! - `search`: Case-insensitive substring search with excerpts
//! - `store`: Ideas, projects, life scores and video pipeline collections

pub mod core;
pub mod error;
pub mod search;
pub mod store;

// Re-exports for convenience
pub use crate::core::document::Document;
pub use crate::core::frontmatter::Frontmatter;
pub use crate::core::library::{DocumentLibrary, DocumentSource};
pub use crate::core::paths::BrainPaths;
pub use crate::core::scanner::collect_documents;
pub use crate::core::tree::{build_folder_tree, DocumentRef, FolderTree, FOLDER_ORDER};
pub use error::{BrainError, Result};
pub use search::{extract_excerpt, search, search_documents, SearchResponse, SearchResult};
pub use store::JsonStore;
