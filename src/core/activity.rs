use std::fs;
use std::path::Path;

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use walkdir::WalkDir;

use super::scanner::is_markdown;

pub const ACTIVITY_WINDOW_HOURS: i64 = 24;
pub const MAX_ACTIVITY_ITEMS: usize = 20;

#[derive(Debug, Clone, Serialize)]
pub struct ActivityItem {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    #[serde(rename = "type")]
    pub kind: String,
    pub action: String,
    pub details: String,
    pub icon: String,
}

/// Markdown files touched in the last day across `dirs`, newest first.
pub fn recent_activity(dirs: &[&Path]) -> Vec<ActivityItem> {
    recent_activity_since(dirs, Utc::now() - Duration::hours(ACTIVITY_WINDOW_HOURS))
}

pub fn recent_activity_since(dirs: &[&Path], since: DateTime<Utc>) -> Vec<ActivityItem> {
    let mut items = Vec::new();

    for dir in dirs {
        if !dir.exists() {
            continue;
        }
        for entry in WalkDir::new(dir).sort_by_file_name().into_iter().flatten() {
            let path = entry.path();
            if !entry.file_type().is_file() || !is_markdown(path) {
                continue;
            }
            if let Some(item) = activity_for(path, since) {
                items.push(item);
            }
        }
    }

    items.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    items.truncate(MAX_ACTIVITY_ITEMS);
    items
}

fn activity_for(path: &Path, since: DateTime<Utc>) -> Option<ActivityItem> {
    let metadata = fs::metadata(path).ok()?;
    let modified = metadata.modified().ok()?;
    let timestamp: DateTime<Utc> = DateTime::from(modified);
    if timestamp <= since {
        return None;
    }

    let name = path.file_stem()?.to_str()?.to_string();
    let action = match metadata.created() {
        Ok(created) if created == modified => "Created",
        _ => "Updated",
    };

    Some(ActivityItem {
        id: format!("document-{}-{}", name, timestamp.timestamp_millis()),
        timestamp,
        kind: "document".to_string(),
        action: action.to_string(),
        details: name,
        icon: "📝".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::scanner::test_support::write_doc;

    #[test]
    fn test_only_recent_markdown() {
        let tmp = tempfile::tempdir().unwrap();
        write_doc(tmp.path(), "journals/today.md", "x", 60);
        write_doc(tmp.path(), "journals/last-week.md", "x", 7 * 24 * 3600);
        write_doc(tmp.path(), "data/ideas.json", "[]", 60);

        let items = recent_activity(&[tmp.path()]);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].details, "today");
        assert_eq!(items[0].kind, "document");
    }

    #[test]
    fn test_merges_dirs_newest_first_and_caps() {
        let docs = tempfile::tempdir().unwrap();
        let memory = tempfile::tempdir().unwrap();
        for i in 0..15 {
            write_doc(docs.path(), &format!("d{i}.md"), "x", 100 + i * 10);
            write_doc(memory.path(), &format!("m{i}.md"), "x", 105 + i * 10);
        }

        let items = recent_activity(&[memory.path(), docs.path()]);
        assert_eq!(items.len(), MAX_ACTIVITY_ITEMS);
        assert_eq!(items[0].details, "d0");
        assert_eq!(items[1].details, "m0");
        assert!(items.windows(2).all(|w| w[0].timestamp >= w[1].timestamp));
    }

    #[test]
    fn test_missing_dir_is_skipped() {
        let items = recent_activity(&[Path::new("/tmp/brainboard-no-such-dir")]);
        assert!(items.is_empty());
    }
}
