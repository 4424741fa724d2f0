use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use chrono::{DateTime, Utc};
use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;

use super::frontmatter::Frontmatter;

/// Folder name reported for files sitting directly at the corpus root.
pub const ROOT_FOLDER: &str = "root";

lazy_static! {
    static ref H1_RE: Regex = Regex::new(r"(?m)^#\s+(.+)$").unwrap();
}

/// A markdown file from the corpus, derived fresh on every scan.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub slug: String,
    pub path: PathBuf,
    pub folder: String,
    pub title: String,
    pub content: String,
    pub frontmatter: Frontmatter,
    pub modified_at: DateTime<Utc>,
    pub word_count: usize,
}

impl Document {
    /// Read and parse a single markdown file.
    ///
    /// `folder` is the top-level directory the file was found under, or
    /// `None` for files directly at the corpus root.
    pub fn load(path: &Path, folder: Option<&str>) -> Result<Self> {
        // Invalid UTF-8 is replaced rather than dropping the file
        let raw = String::from_utf8_lossy(&fs::read(path)?).into_owned();
        let metadata = fs::metadata(path)?;
        let modified_at = DateTime::from(metadata.modified()?);

        let stem = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("")
            .to_string();

        Ok(Self::from_parts(path, folder, &stem, &raw, modified_at))
    }

    pub(crate) fn from_parts(
        path: &Path,
        folder: Option<&str>,
        stem: &str,
        raw: &str,
        modified_at: DateTime<Utc>,
    ) -> Self {
        let (frontmatter, content) = match Frontmatter::try_split(raw) {
            Ok(Some((fm, body))) => (fm, body),
            Ok(None) => (Frontmatter::default(), raw),
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "malformed frontmatter, treating file as plain body"
                );
                (Frontmatter::default(), raw)
            }
        };

        let folder = folder.unwrap_or(ROOT_FOLDER).to_string();
        let title = frontmatter
            .title()
            .unwrap_or_else(|| resolve_title(content, stem));

        Self {
            slug: format!("{}/{}", folder, stem),
            path: path.to_path_buf(),
            folder,
            title,
            word_count: word_count(content),
            content: content.to_string(),
            frontmatter,
            modified_at,
        }
    }
}

/// First level-1 heading in the body, else the file stem with hyphens as spaces.
///
/// Only a CRLF carriage return is dropped from the heading text.
pub fn resolve_title(content: &str, stem: &str) -> String {
    H1_RE
        .captures(content)
        .map(|c| {
            let heading = c.get(1).map_or("", |m| m.as_str());
            heading.strip_suffix('\r').unwrap_or(heading).to_string()
        })
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| stem.replace('-', " "))
}

pub fn word_count(content: &str) -> usize {
    content.split_whitespace().count()
}
