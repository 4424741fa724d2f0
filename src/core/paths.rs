use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;

pub const DEFAULT_DATA_DIR: &str = "data";

/// Locations the dashboard reads from and writes to.
///
/// Built once at startup and passed down; nothing here touches the
/// filesystem until [`BrainPaths::ensure_data_dir`] is called.
#[derive(Debug, Clone)]
pub struct BrainPaths {
    pub docs: PathBuf,
    pub data: PathBuf,
    pub memory: Option<PathBuf>,
}

impl BrainPaths {
    pub fn new(docs: PathBuf, data: Option<PathBuf>, memory: Option<PathBuf>) -> Self {
        let data = data.unwrap_or_else(|| docs.join(DEFAULT_DATA_DIR));
        Self { docs, data, memory }
    }

    pub fn from_root(docs: PathBuf) -> Self {
        Self::new(docs, None, None)
    }

    pub fn collection_file(&self, file_name: &str) -> PathBuf {
        self.data.join(file_name)
    }

    /// Directories scanned for the recent activity feed.
    pub fn activity_dirs(&self) -> Vec<&Path> {
        let mut dirs: Vec<&Path> = Vec::new();
        if let Some(memory) = &self.memory {
            dirs.push(memory);
        }
        dirs.push(&self.docs);
        dirs
    }

    pub fn required_folders(&self) -> Vec<(&Path, &str)> {
        vec![
            (self.docs.as_path(), "Markdown documents"),
            (self.data.as_path(), "Tracker data (JSON)"),
        ]
    }

    pub fn ensure_data_dir(&self) -> Result<()> {
        if !self.data.exists() {
            fs::create_dir_all(&self.data)?;
            tracing::info!(path = %self.data.display(), "created data directory");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_dir_defaults_under_docs() {
        let paths = BrainPaths::from_root(PathBuf::from("/tmp/brain"));
        assert_eq!(paths.data, PathBuf::from("/tmp/brain/data"));
        assert_eq!(
            paths.collection_file("ideas.json"),
            PathBuf::from("/tmp/brain/data/ideas.json")
        );
    }

    #[test]
    fn test_ensure_data_dir_creates_nested() -> Result<()> {
        let tmp = tempfile::tempdir()?;
        let paths = BrainPaths::new(
            tmp.path().to_path_buf(),
            Some(tmp.path().join("state/trackers")),
            None,
        );
        assert!(!paths.data.exists());
        paths.ensure_data_dir()?;
        assert!(paths.data.is_dir());
        // second call is a no-op
        paths.ensure_data_dir()?;
        Ok(())
    }

    #[test]
    fn test_activity_dirs_puts_memory_first() {
        let paths = BrainPaths::new(
            PathBuf::from("/docs"),
            None,
            Some(PathBuf::from("/memory")),
        );
        assert_eq!(
            paths.activity_dirs(),
            vec![Path::new("/memory"), Path::new("/docs")]
        );
    }
}
