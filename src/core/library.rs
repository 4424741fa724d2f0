use std::path::{Path, PathBuf};

use super::document::Document;
use super::scanner::collect_documents;
use super::tree::{build_folder_tree, FolderTree};

/// Anything that can hand out the current corpus.
///
/// Implementors only provide [`DocumentSource::documents`]; every other
/// operation re-reads it, so results always reflect the latest state.
pub trait DocumentSource {
    fn documents(&self) -> Vec<Document>;

    fn list_all(&self) -> Vec<Document> {
        self.documents()
    }

    fn folder_tree(&self) -> Vec<FolderTree> {
        build_folder_tree(&self.documents())
    }

    /// Exact slug lookup; the first match in scan order wins.
    fn by_slug(&self, slug: &str) -> Option<Document> {
        self.documents().into_iter().find(|d| d.slug == slug)
    }
}

/// Filesystem-backed corpus that re-scans its root on every call.
#[derive(Debug, Clone)]
pub struct DocumentLibrary {
    root: PathBuf,
}

impl DocumentLibrary {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl DocumentSource for DocumentLibrary {
    fn documents(&self) -> Vec<Document> {
        collect_documents(&self.root)
    }
}
