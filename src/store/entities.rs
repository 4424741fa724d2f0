use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Collection, JsonStore};
use crate::error::{BrainError, Result};

fn today() -> String {
    Utc::now().format("%Y-%m-%d").to_string()
}

fn new_id() -> String {
    Uuid::new_v4().to_string()
}

// ===== Ideas =====

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum IdeaStatus {
    #[default]
    Inbox,
    Developing,
    Shipped,
    Archived,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Idea {
    pub id: String,
    pub content: String,
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    pub status: IdeaStatus,
}

impl Collection for Idea {
    const FILE_NAME: &'static str = "ideas.json";
}

#[derive(Debug, Clone, Default)]
pub struct IdeaPatch {
    pub content: Option<String>,
    pub tags: Option<Vec<String>>,
    pub status: Option<IdeaStatus>,
}

// ===== Projects =====

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    #[default]
    Idea,
    Active,
    Paused,
    Shipped,
    Archived,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub status: ProjectStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repo: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl Collection for Project {
    const FILE_NAME: &'static str = "projects.json";

    fn seed() -> Option<Vec<Self>> {
        let project = |id: &str, name: &str, description: &str, status, repo: Option<&str>| Project {
            id: id.to_string(),
            name: name.to_string(),
            description: Some(description.to_string()),
            status,
            repo: repo.map(String::from),
            created_at: "2026-02-05".to_string(),
            updated_at: "2026-02-05".to_string(),
        };
        Some(vec![
            project(
                "1",
                "YouTube Helper",
                "Video analysis with Gemini for titles, descriptions, tags",
                ProjectStatus::Active,
                Some("https://github.com/maxaiassistant77/youtube-helper"),
            ),
            project(
                "2",
                "Second Brain",
                "Living knowledge base - Obsidian × Linear",
                ProjectStatus::Active,
                Some("https://github.com/maxaiassistant77/second-brain"),
            ),
            project(
                "3",
                "Game of Life",
                "Gamifying personal evolution across 7 dimensions",
                ProjectStatus::Idea,
                None,
            ),
        ])
    }
}

#[derive(Debug, Clone, Default)]
pub struct ProjectPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub status: Option<ProjectStatus>,
    pub repo: Option<String>,
}

// ===== Life scores =====

pub const MAX_LIFE_SCORE: u8 = 100;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LifeScore {
    pub dimension: String,
    pub score: u8,
    pub emoji: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub last_updated: String,
}

impl Collection for LifeScore {
    const FILE_NAME: &'static str = "life-scores.json";

    fn seed() -> Option<Vec<Self>> {
        let dimensions = [
            ("Mental", "🧠"),
            ("Physical", "💪"),
            ("Emotional", "❤️"),
            ("Social", "👥"),
            ("Financial", "💰"),
            ("Relational", "💕"),
            ("Spiritual", "✨"),
        ];
        Some(
            dimensions
                .iter()
                .map(|(dimension, emoji)| LifeScore {
                    dimension: dimension.to_string(),
                    score: 50,
                    emoji: emoji.to_string(),
                    notes: None,
                    last_updated: "2026-02-05".to_string(),
                })
                .collect(),
        )
    }
}

// ===== YouTube pipeline =====

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum VideoStatus {
    #[default]
    Idea,
    Scripted,
    Filming,
    Editing,
    Published,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YouTubeVideo {
    pub id: String,
    pub title: String,
    pub status: VideoStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_url: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl Collection for YouTubeVideo {
    const FILE_NAME: &'static str = "youtube-pipeline.json";
}

#[derive(Debug, Clone, Default)]
pub struct VideoPatch {
    pub title: Option<String>,
    pub status: Option<VideoStatus>,
    pub notes: Option<String>,
    pub published_url: Option<String>,
}

// ===== Operations =====

impl JsonStore {
    /// New ideas go to the front of the inbox.
    pub fn add_idea(&self, content: &str, tags: Vec<String>, status: Option<IdeaStatus>) -> Result<Idea> {
        let idea = Idea {
            id: new_id(),
            content: content.to_string(),
            created_at: Utc::now().to_rfc3339(),
            tags: Some(tags),
            status: status.unwrap_or_default(),
        };
        self.update(|ideas: &mut Vec<Idea>| {
            ideas.insert(0, idea.clone());
            Ok(idea)
        })
    }

    pub fn update_idea(&self, id: &str, patch: IdeaPatch) -> Result<Idea> {
        self.update(|ideas: &mut Vec<Idea>| {
            let idea = ideas
                .iter_mut()
                .find(|i| i.id == id)
                .ok_or_else(|| BrainError::not_found("Idea", id))?;
            if let Some(content) = patch.content {
                idea.content = content;
            }
            if let Some(tags) = patch.tags {
                idea.tags = Some(tags);
            }
            if let Some(status) = patch.status {
                idea.status = status;
            }
            Ok(idea.clone())
        })
    }

    /// Removing an id that does not exist is not an error.
    pub fn delete_idea(&self, id: &str) -> Result<bool> {
        self.update(|ideas: &mut Vec<Idea>| {
            let before = ideas.len();
            ideas.retain(|i| i.id != id);
            Ok(ideas.len() != before)
        })
    }

    pub fn add_project(
        &self,
        name: Option<&str>,
        description: Option<&str>,
        status: Option<ProjectStatus>,
        repo: Option<&str>,
    ) -> Result<Project> {
        let date = today();
        let project = Project {
            id: new_id(),
            name: name.unwrap_or("New Project").to_string(),
            description: description.map(String::from),
            status: status.unwrap_or_default(),
            repo: repo.map(String::from),
            created_at: date.clone(),
            updated_at: date,
        };
        self.update(|projects: &mut Vec<Project>| {
            projects.push(project.clone());
            Ok(project)
        })
    }

    pub fn update_project(&self, id: &str, patch: ProjectPatch) -> Result<Project> {
        self.update(|projects: &mut Vec<Project>| {
            let project = projects
                .iter_mut()
                .find(|p| p.id == id)
                .ok_or_else(|| BrainError::not_found("Project", id))?;
            if let Some(name) = patch.name {
                project.name = name;
            }
            if let Some(description) = patch.description {
                project.description = Some(description);
            }
            if let Some(status) = patch.status {
                project.status = status;
            }
            if let Some(repo) = patch.repo {
                project.repo = Some(repo);
            }
            project.updated_at = today();
            Ok(project.clone())
        })
    }

    /// Scores outside 0..=100 are clamped.
    pub fn update_life_score(
        &self,
        dimension: &str,
        score: Option<i64>,
        notes: Option<String>,
    ) -> Result<LifeScore> {
        self.update(|scores: &mut Vec<LifeScore>| {
            let entry = scores
                .iter_mut()
                .find(|s| s.dimension == dimension)
                .ok_or_else(|| BrainError::not_found("Dimension", dimension))?;
            if let Some(score) = score {
                entry.score = score.clamp(0, MAX_LIFE_SCORE as i64) as u8;
            }
            if let Some(notes) = notes {
                entry.notes = Some(notes);
            }
            entry.last_updated = today();
            Ok(entry.clone())
        })
    }

    pub fn add_video(
        &self,
        title: Option<&str>,
        status: Option<VideoStatus>,
        notes: Option<&str>,
    ) -> Result<YouTubeVideo> {
        let date = today();
        let video = YouTubeVideo {
            id: new_id(),
            title: title.unwrap_or("New Video").to_string(),
            status: status.unwrap_or_default(),
            notes: notes.map(String::from),
            published_url: None,
            created_at: date.clone(),
            updated_at: date,
        };
        self.update(|videos: &mut Vec<YouTubeVideo>| {
            videos.push(video.clone());
            Ok(video)
        })
    }

    pub fn update_video(&self, id: &str, patch: VideoPatch) -> Result<YouTubeVideo> {
        self.update(|videos: &mut Vec<YouTubeVideo>| {
            let video = videos
                .iter_mut()
                .find(|v| v.id == id)
                .ok_or_else(|| BrainError::not_found("Video", id))?;
            if let Some(title) = patch.title {
                video.title = title;
            }
            if let Some(status) = patch.status {
                video.status = status;
            }
            if let Some(notes) = patch.notes {
                video.notes = Some(notes);
            }
            if let Some(url) = patch.published_url {
                video.published_url = Some(url);
            }
            video.updated_at = today();
            Ok(video.clone())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::paths::BrainPaths;

    fn store() -> (tempfile::TempDir, JsonStore) {
        let tmp = tempfile::tempdir().unwrap();
        let store = JsonStore::new(BrainPaths::from_root(tmp.path().to_path_buf()));
        (tmp, store)
    }

    #[test]
    fn test_ideas_prepend_and_patch() -> Result<()> {
        let (_tmp, store) = store();
        let first = store.add_idea("first", vec![], None)?;
        let second = store.add_idea("second", vec!["x".into()], Some(IdeaStatus::Developing))?;
        assert_eq!(first.status, IdeaStatus::Inbox);

        let ideas = store.load::<Idea>()?;
        assert_eq!(ideas[0].id, second.id);
        assert_eq!(ideas[1].id, first.id);

        let patched = store.update_idea(
            &first.id,
            IdeaPatch {
                status: Some(IdeaStatus::Shipped),
                ..Default::default()
            },
        )?;
        assert_eq!(patched.status, IdeaStatus::Shipped);
        assert_eq!(patched.content, "first");
        Ok(())
    }

    #[test]
    fn test_delete_idea_is_idempotent() -> Result<()> {
        let (_tmp, store) = store();
        let idea = store.add_idea("gone soon", vec![], None)?;
        assert!(store.delete_idea(&idea.id)?);
        assert!(!store.delete_idea(&idea.id)?);
        assert!(store.load::<Idea>()?.is_empty());
        Ok(())
    }

    #[test]
    fn test_unknown_id_is_not_found() {
        let (_tmp, store) = store();
        let err = store.update_idea("nope", IdeaPatch::default()).unwrap_err();
        assert!(matches!(err, BrainError::NotFound { kind: "Idea", .. }));
        let err = store.update_video("nope", VideoPatch::default()).unwrap_err();
        assert!(matches!(err, BrainError::NotFound { kind: "Video", .. }));
    }

    #[test]
    fn test_projects_seeded_then_appended() -> Result<()> {
        let (_tmp, store) = store();
        assert_eq!(store.load::<Project>()?.len(), 3);

        let added = store.add_project(Some("Dashboard"), None, None, None)?;
        assert_eq!(added.status, ProjectStatus::Idea);
        let projects = store.load::<Project>()?;
        assert_eq!(projects.len(), 4);
        assert_eq!(projects[3].name, "Dashboard");

        let default_named = store.add_project(None, None, Some(ProjectStatus::Active), None)?;
        assert_eq!(default_named.name, "New Project");
        Ok(())
    }

    #[test]
    fn test_dates_are_utc_calendar_days() -> Result<()> {
        let (_tmp, store) = store();
        let before = Utc::now().format("%Y-%m-%d").to_string();
        let project = store.add_project(Some("Dated"), None, None, None)?;
        let score = store.update_life_score("Mental", Some(60), None)?;
        let after = Utc::now().format("%Y-%m-%d").to_string();

        for date in [&project.created_at, &project.updated_at, &score.last_updated] {
            assert!(*date == before || *date == after, "unexpected date {}", date);
        }
        Ok(())
    }

    #[test]
    fn test_life_score_clamped() -> Result<()> {
        let (_tmp, store) = store();
        let high = store.update_life_score("Mental", Some(250), None)?;
        assert_eq!(high.score, 100);
        let low = store.update_life_score("Physical", Some(-5), Some("rest".into()))?;
        assert_eq!(low.score, 0);
        assert_eq!(low.notes.as_deref(), Some("rest"));

        let untouched = store.update_life_score("Social", None, None)?;
        assert_eq!(untouched.score, 50);

        assert!(store.update_life_score("Cosmic", Some(1), None).is_err());
        Ok(())
    }

    #[test]
    fn test_videos_default_title_and_patch() -> Result<()> {
        let (_tmp, store) = store();
        let video = store.add_video(None, None, None)?;
        assert_eq!(video.title, "New Video");
        assert_eq!(video.status, VideoStatus::Idea);

        let published = store.update_video(
            &video.id,
            VideoPatch {
                status: Some(VideoStatus::Published),
                published_url: Some("https://youtu.be/x".into()),
                ..Default::default()
            },
        )?;
        assert_eq!(published.status, VideoStatus::Published);
        assert_eq!(store.load::<YouTubeVideo>()?[0].published_url.as_deref(), Some("https://youtu.be/x"));
        Ok(())
    }

    #[test]
    fn test_json_uses_camel_case_and_lowercase_status() {
        let idea = Idea {
            id: "1".into(),
            content: "c".into(),
            created_at: "2026-01-01T00:00:00Z".into(),
            tags: None,
            status: IdeaStatus::Developing,
        };
        let json = serde_json::to_value(&idea).unwrap();
        assert_eq!(json["createdAt"], "2026-01-01T00:00:00Z");
        assert_eq!(json["status"], "developing");
        assert!(json.get("tags").is_none());
    }
}
