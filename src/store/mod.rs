//! JSON-file collections for the dashboard trackers
//!
//! Each collection is one JSON array in the data directory. Every operation
//! loads the whole array and writes the whole array back.

pub mod entities;

use std::fs;
use std::path::PathBuf;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::core::paths::BrainPaths;
use crate::error::{BrainError, Result};

pub use entities::{
    Idea, IdeaPatch, IdeaStatus, LifeScore, Project, ProjectPatch, ProjectStatus, VideoPatch,
    VideoStatus, YouTubeVideo,
};

/// A record type persisted as one JSON array.
pub trait Collection: Serialize + DeserializeOwned {
    const FILE_NAME: &'static str;

    /// Contents written on first load when the file does not exist yet.
    /// `None` means a missing file simply reads as empty.
    fn seed() -> Option<Vec<Self>> {
        None
    }
}

#[derive(Debug, Clone)]
pub struct JsonStore {
    paths: BrainPaths,
}

impl JsonStore {
    pub fn new(paths: BrainPaths) -> Self {
        Self { paths }
    }

    pub fn paths(&self) -> &BrainPaths {
        &self.paths
    }

    fn file_for<T: Collection>(&self) -> PathBuf {
        self.paths.collection_file(T::FILE_NAME)
    }

    pub fn load<T: Collection>(&self) -> Result<Vec<T>> {
        let path = self.file_for::<T>();
        if !path.exists() {
            return match T::seed() {
                Some(initial) => {
                    tracing::info!(file = T::FILE_NAME, "seeding collection");
                    self.save(&initial)?;
                    Ok(initial)
                }
                None => Ok(Vec::new()),
            };
        }

        let raw = fs::read_to_string(&path)?;
        serde_json::from_str(&raw).map_err(|source| BrainError::Json { path, source })
    }

    pub fn save<T: Collection>(&self, items: &[T]) -> Result<()> {
        self.paths.ensure_data_dir()?;
        let path = self.file_for::<T>();
        let json = serde_json::to_string_pretty(items)
            .map_err(|source| BrainError::Json {
                path: path.clone(),
                source,
            })?;
        fs::write(&path, json)?;
        tracing::debug!(file = T::FILE_NAME, count = items.len(), "saved collection");
        Ok(())
    }

    /// Load, apply `f`, save. Returns whatever `f` returns.
    pub fn update<T, R, F>(&self, f: F) -> Result<R>
    where
        T: Collection,
        F: FnOnce(&mut Vec<T>) -> Result<R>,
    {
        let mut items = self.load::<T>()?;
        let out = f(&mut items)?;
        self.save(&items)?;
        Ok(out)
    }
}
