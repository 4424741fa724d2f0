use anyhow::Result;
use colored::*;
use serde::Serialize;

use brainboard::store::{
    Idea, IdeaPatch, LifeScore, Project, ProjectPatch, VideoPatch, YouTubeVideo,
};
use brainboard::{BrainPaths, JsonStore};

use crate::{IdeaAction, ProjectAction, ScoreAction, VideoAction};

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn status_label<T: Serialize>(status: &T) -> String {
    serde_json::to_value(status)
        .ok()
        .and_then(|v| v.as_str().map(String::from))
        .unwrap_or_default()
}

pub fn ideas(paths: &BrainPaths, action: Option<IdeaAction>, json: bool) -> Result<()> {
    let store = JsonStore::new(paths.clone());

    match action {
        Some(IdeaAction::Add { content, tags }) => {
            let idea = store.add_idea(&content, tags, None)?;
            if json {
                return print_json(&idea);
            }
            println!("{} Added idea {}", "✓".green(), idea.id.dimmed());
        }
        Some(IdeaAction::Status { id, status }) => {
            let idea = store.update_idea(
                &id,
                IdeaPatch {
                    status: Some(status),
                    ..Default::default()
                },
            )?;
            if json {
                return print_json(&idea);
            }
            println!("{} {} → {}", "✓".green(), idea.content, status_label(&idea.status));
        }
        Some(IdeaAction::Delete { id }) => {
            let removed = store.delete_idea(&id)?;
            if json {
                return print_json(&serde_json::json!({ "success": true, "removed": removed }));
            }
            if removed {
                println!("{} Deleted {}", "✓".green(), id);
            } else {
                println!("{}", format!("Idea '{}' not found.", id).yellow());
            }
        }
        None => {
            let ideas = store.load::<Idea>()?;
            if json {
                return print_json(&ideas);
            }
            println!("{}", "Ideas".bold());
            println!("{}", "=".repeat(50));
            for idea in &ideas {
                let tags = idea.tags.as_deref().unwrap_or_default().join(", ");
                println!(
                    "[{:<10}] {} {}",
                    status_label(&idea.status),
                    idea.content,
                    tags.dimmed()
                );
                println!("             {}", idea.id.dimmed());
            }
            if ideas.is_empty() {
                println!("{}", "Inbox is empty.".yellow());
            }
        }
    }
    Ok(())
}

pub fn projects(paths: &BrainPaths, action: Option<ProjectAction>, json: bool) -> Result<()> {
    let store = JsonStore::new(paths.clone());

    match action {
        Some(ProjectAction::Add {
            name,
            description,
            repo,
            status,
        }) => {
            let project =
                store.add_project(Some(name.as_str()), description.as_deref(), status, repo.as_deref())?;
            if json {
                return print_json(&project);
            }
            println!("{} Added project {} {}", "✓".green(), project.name, project.id.dimmed());
        }
        Some(ProjectAction::Status { id, status }) => {
            let project = store.update_project(
                &id,
                ProjectPatch {
                    status: Some(status),
                    ..Default::default()
                },
            )?;
            if json {
                return print_json(&project);
            }
            println!("{} {} → {}", "✓".green(), project.name, status_label(&project.status));
        }
        None => {
            let projects = store.load::<Project>()?;
            if json {
                return print_json(&projects);
            }
            println!("{}", "Projects".bold());
            println!("{}", "=".repeat(50));
            for project in &projects {
                println!(
                    "[{:<8}] {} {}",
                    status_label(&project.status),
                    project.name.cyan(),
                    project.id.dimmed()
                );
                if let Some(description) = &project.description {
                    println!("           {}", description.dimmed());
                }
            }
        }
    }
    Ok(())
}

pub fn scores(paths: &BrainPaths, action: Option<ScoreAction>, json: bool) -> Result<()> {
    let store = JsonStore::new(paths.clone());

    match action {
        Some(ScoreAction::Set {
            dimension,
            score,
            notes,
        }) => {
            let updated = store.update_life_score(&dimension, score, notes)?;
            if json {
                return print_json(&updated);
            }
            println!(
                "{} {} {} → {}",
                "✓".green(),
                updated.emoji,
                updated.dimension,
                updated.score
            );
        }
        None => {
            let scores = store.load::<LifeScore>()?;
            if json {
                return print_json(&scores);
            }
            println!("{}", "Life Score".bold());
            println!("{}", "=".repeat(50));
            for s in &scores {
                let filled = (s.score as usize / 5).min(20);
                println!(
                    "{} {:<12} {:>3} {}{}",
                    s.emoji,
                    s.dimension,
                    s.score,
                    "█".repeat(filled).green(),
                    "░".repeat(20 - filled).dimmed()
                );
            }
            if !scores.is_empty() {
                let avg = scores.iter().map(|s| s.score as f64).sum::<f64>() / scores.len() as f64;
                println!();
                println!("Overall: {:.0}", avg);
            }
        }
    }
    Ok(())
}

pub fn videos(paths: &BrainPaths, action: Option<VideoAction>, json: bool) -> Result<()> {
    let store = JsonStore::new(paths.clone());

    match action {
        Some(VideoAction::Add { title, notes }) => {
            let video = store.add_video(Some(title.as_str()), None, notes.as_deref())?;
            if json {
                return print_json(&video);
            }
            println!("{} Added video {} {}", "✓".green(), video.title, video.id.dimmed());
        }
        Some(VideoAction::Status { id, status, url }) => {
            let video = store.update_video(
                &id,
                VideoPatch {
                    status: Some(status),
                    published_url: url,
                    ..Default::default()
                },
            )?;
            if json {
                return print_json(&video);
            }
            println!("{} {} → {}", "✓".green(), video.title, status_label(&video.status));
        }
        None => {
            let videos = store.load::<YouTubeVideo>()?;
            if json {
                return print_json(&videos);
            }
            println!("{}", "YouTube Pipeline".bold());
            println!("{}", "=".repeat(50));
            for video in &videos {
                println!(
                    "[{:<9}] {} {}",
                    status_label(&video.status),
                    video.title.cyan(),
                    video.id.dimmed()
                );
            }
            if videos.is_empty() {
                println!("{}", "Pipeline is empty.".yellow());
            }
        }
    }
    Ok(())
}
