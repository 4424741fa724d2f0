use std::path::PathBuf;

use serde::Serialize;

use super::document::Document;

/// Preferred folder order in the sidebar; anything else goes last.
pub const FOLDER_ORDER: &[&str] = &["journals", "concepts", "research", "projects", "root"];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocumentRef {
    pub slug: String,
    pub title: String,
    pub path: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FolderTree {
    pub name: String,
    pub path: String,
    pub documents: Vec<DocumentRef>,
}

fn folder_rank(name: &str) -> usize {
    FOLDER_ORDER
        .iter()
        .position(|f| *f == name)
        .unwrap_or(FOLDER_ORDER.len())
}

/// Group documents by folder, keeping their incoming order inside each group.
///
/// Folders are created in first-seen order, then stably sorted by
/// [`FOLDER_ORDER`], so unlisted folders stay in first-seen order.
pub fn build_folder_tree(documents: &[Document]) -> Vec<FolderTree> {
    let mut folders: Vec<FolderTree> = Vec::new();

    for doc in documents {
        let idx = match folders.iter().position(|f| f.name == doc.folder) {
            Some(idx) => idx,
            None => {
                folders.push(FolderTree {
                    name: doc.folder.clone(),
                    path: doc.folder.clone(),
                    documents: Vec::new(),
                });
                folders.len() - 1
            }
        };
        folders[idx].documents.push(DocumentRef {
            slug: doc.slug.clone(),
            title: doc.title.clone(),
            path: doc.path.clone(),
        });
    }

    folders.sort_by_key(|f| folder_rank(&f.name));
    folders
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Utc};
    use std::collections::HashSet;
    use std::path::Path;

    fn doc(folder: &str, stem: &str) -> Document {
        let folder = (folder != "root").then_some(folder);
        Document::from_parts(
            Path::new("/corpus/x.md"),
            folder,
            stem,
            stem,
            DateTime::<Utc>::default(),
        )
    }

    fn names(tree: &[FolderTree]) -> Vec<&str> {
        tree.iter().map(|f| f.name.as_str()).collect()
    }

    #[test]
    fn test_listed_folders_first() {
        let docs = vec![doc("zeta", "z"), doc("journals", "j"), doc("projects", "p")];
        let tree = build_folder_tree(&docs);
        assert_eq!(names(&tree), vec!["journals", "projects", "zeta"]);
    }

    #[test]
    fn test_unlisted_folders_keep_first_seen_order() {
        let docs = vec![
            doc("zeta", "z"),
            doc("alpha", "a"),
            doc("root", "r"),
            doc("mid", "m"),
            doc("concepts", "c"),
        ];
        let tree = build_folder_tree(&docs);
        assert_eq!(names(&tree), vec!["concepts", "root", "zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_documents_keep_incoming_order() {
        let docs = vec![
            doc("journals", "c"),
            doc("research", "x"),
            doc("journals", "a"),
            doc("journals", "b"),
        ];
        let tree = build_folder_tree(&docs);
        let journals: Vec<_> = tree[0].documents.iter().map(|d| d.slug.as_str()).collect();
        assert_eq!(journals, vec!["journals/c", "journals/a", "journals/b"]);
        assert_eq!(tree[0].path, "journals");
    }

    #[test]
    fn test_covers_every_document_exactly_once() {
        let docs = vec![
            doc("journals", "a"),
            doc("misc", "b"),
            doc("root", "c"),
            doc("misc", "d"),
            doc("research", "e"),
        ];
        let tree = build_folder_tree(&docs);

        let folders: HashSet<_> = docs.iter().map(|d| d.folder.clone()).collect();
        assert_eq!(tree.len(), folders.len());

        let mut slugs: Vec<_> = tree
            .iter()
            .flat_map(|f| f.documents.iter().map(|d| d.slug.clone()))
            .collect();
        slugs.sort();
        let mut expected: Vec<_> = docs.iter().map(|d| d.slug.clone()).collect();
        expected.sort();
        assert_eq!(slugs, expected);
    }

    #[test]
    fn test_empty_input() {
        assert!(build_folder_tree(&[]).is_empty());
    }
}
