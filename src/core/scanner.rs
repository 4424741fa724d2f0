use std::path::{Component, Path};

use walkdir::WalkDir;

use super::document::Document;

const MARKDOWN_EXTENSIONS: &[&str] = &["md", "markdown"];

pub fn is_markdown(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| {
            MARKDOWN_EXTENSIONS
                .iter()
                .any(|candidate| e.eq_ignore_ascii_case(candidate))
        })
        .unwrap_or(false)
}

/// Top-level directory a file lives under, `None` for files at the root.
///
/// Files nested deeper still report their top-level ancestor.
fn top_level_folder<'a>(root: &Path, path: &'a Path) -> Option<&'a str> {
    let relative = path.strip_prefix(root).ok()?;
    let mut components = relative.components();
    let first = components.next()?;
    // A lone component is the file itself.
    components.next()?;
    match first {
        Component::Normal(name) => name.to_str(),
        _ => None,
    }
}

/// Walk `root` recursively and load every markdown file.
///
/// A missing root yields an empty list. Entries that cannot be read are
/// skipped. The result is ordered by modification time, newest first; ties
/// keep file-name walk order.
pub fn collect_documents(root: &Path) -> Vec<Document> {
    if !root.exists() {
        tracing::debug!(root = %root.display(), "document root missing");
        return Vec::new();
    }

    let mut documents = Vec::new();

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!("Failed to read entry: {}", e);
                continue;
            }
        };
        if !entry.file_type().is_file() || !is_markdown(entry.path()) {
            continue;
        }

        let path = entry.path();
        match Document::load(path, top_level_folder(root, path)) {
            Ok(doc) => documents.push(doc),
            Err(e) => tracing::warn!(path = %path.display(), "Skipping unreadable document: {}", e),
        }
    }

    documents.sort_by(|a, b| b.modified_at.cmp(&a.modified_at));
    tracing::info!(root = %root.display(), count = documents.len(), "scanned documents");
    documents
}


#[cfg(test)]
mod tests {
    use super::test_support::write_doc;
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_missing_root_is_empty() {
        let docs = collect_documents(Path::new("/tmp/brainboard-nonexistent-root"));
        assert!(docs.is_empty());
    }

    #[test]
    fn test_sorted_newest_first() {
        let tmp = tempfile::tempdir().unwrap();
        write_doc(tmp.path(), "journals/old.md", "old", 300);
        write_doc(tmp.path(), "concepts/new.md", "new", 10);
        write_doc(tmp.path(), "mid.md", "mid", 100);

        let slugs: Vec<_> = collect_documents(tmp.path())
            .into_iter()
            .map(|d| d.slug)
            .collect();
        assert_eq!(slugs, vec!["concepts/new", "root/mid", "journals/old"]);
    }

    #[test]
    fn test_nested_files_inherit_top_level_folder() {
        let tmp = tempfile::tempdir().unwrap();
        write_doc(tmp.path(), "journals/2024/01/entry.md", "# Entry", 10);

        let docs = collect_documents(tmp.path());
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].folder, "journals");
        assert_eq!(docs[0].slug, "journals/entry");
    }

    #[test]
    fn test_ignores_non_markdown() {
        let tmp = tempfile::tempdir().unwrap();
        write_doc(tmp.path(), "journals/a.md", "a", 10);
        write_doc(tmp.path(), "journals/b.MD", "b", 20);
        write_doc(tmp.path(), "journals/c.markdown", "c", 30);
        write_doc(tmp.path(), "data/ideas.json", "[]", 10);
        write_doc(tmp.path(), "notes.txt", "txt", 10);

        let docs = collect_documents(tmp.path());
        assert_eq!(docs.len(), 3);
        assert!(docs.iter().all(|d| d.folder == "journals"));
    }

    #[test]
    fn test_bad_frontmatter_does_not_abort_scan() {
        let tmp = tempfile::tempdir().unwrap();
        write_doc(tmp.path(), "research/bad.md", "---\nkey: [oops\n---\nbody", 10);
        write_doc(tmp.path(), "research/good.md", "---\ntitle: Good\n---\nbody", 20);

        let docs = collect_documents(tmp.path());
        assert_eq!(docs.len(), 2);
        let bad = docs.iter().find(|d| d.slug == "research/bad").unwrap();
        assert!(bad.frontmatter.is_empty());
        assert!(bad.content.starts_with("---"));
        let good = docs.iter().find(|d| d.slug == "research/good").unwrap();
        assert_eq!(good.title, "Good");
    }

    #[test]
    fn test_invalid_utf8_file_is_still_listed() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(tmp.path().join("research")).unwrap();
        std::fs::write(tmp.path().join("research/latin1.md"), b"# Caf\xe9\nold export").unwrap();
        write_doc(tmp.path(), "research/ok.md", "fine", 100);

        let docs = collect_documents(tmp.path());
        assert_eq!(docs.len(), 2);
        let latin = docs.iter().find(|d| d.slug == "research/latin1").unwrap();
        assert_eq!(latin.title, "Caf\u{FFFD}");
        assert_eq!(latin.content, "# Caf\u{FFFD}\nold export");

        let hits = crate::search::search_documents(&docs, "old export");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].slug, "research/latin1");
    }

    #[test]
    fn test_top_level_folder() {
        let root = PathBuf::from("/corpus");
        assert_eq!(top_level_folder(&root, Path::new("/corpus/a.md")), None);
        assert_eq!(
            top_level_folder(&root, Path::new("/corpus/projects/a.md")),
            Some("projects")
        );
        assert_eq!(
            top_level_folder(&root, Path::new("/corpus/projects/x/y/a.md")),
            Some("projects")
        );
    }
}
