use anyhow::Result;
use colored::*;

use brainboard::{BrainPaths, DocumentLibrary, DocumentSource};

const CONTENT_PREVIEW_CHARS: usize = 2000;

pub fn list(paths: &BrainPaths, folder: Option<&str>, json: bool) -> Result<()> {
    let library = DocumentLibrary::new(&paths.docs);
    let documents: Vec<_> = library
        .list_all()
        .into_iter()
        .filter(|d| folder.map_or(true, |f| d.folder == f))
        .collect();

    if json {
        let rows: Vec<_> = documents
            .iter()
            .map(|d| {
                serde_json::json!({
                    "slug": d.slug,
                    "title": d.title,
                    "folder": d.folder,
                    "modifiedAt": d.modified_at,
                    "wordCount": d.word_count,
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    if documents.is_empty() {
        println!("{}", "No documents found.".yellow());
        return Ok(());
    }

    for doc in &documents {
        println!(
            "{:<40} {} {}",
            doc.slug.cyan(),
            doc.modified_at.format("%Y-%m-%d %H:%M").to_string().dimmed(),
            format!("({} words)", doc.word_count).dimmed()
        );
    }
    println!();
    println!("Total: {} documents", documents.len());
    Ok(())
}

pub fn tree(paths: &BrainPaths, json: bool) -> Result<()> {
    let library = DocumentLibrary::new(&paths.docs);
    let folders = library.folder_tree();

    if json {
        println!("{}", serde_json::to_string_pretty(&folders)?);
        return Ok(());
    }

    if folders.is_empty() {
        println!("{}", "No documents found.".yellow());
        return Ok(());
    }

    for folder in &folders {
        println!("{} ({})", folder.name.bold(), folder.documents.len());
        for doc in &folder.documents {
            println!("  {} {}", doc.title, doc.slug.dimmed());
        }
        println!();
    }
    Ok(())
}

pub fn show(paths: &BrainPaths, slug: &str, json: bool) -> Result<()> {
    let library = DocumentLibrary::new(&paths.docs);

    let doc = match library.by_slug(slug) {
        Some(doc) => doc,
        None => {
            if json {
                println!("{}", serde_json::json!({ "error": "Document not found", "slug": slug }));
            } else {
                println!("{}", format!("Document '{}' not found.", slug).red());
            }
            std::process::exit(1);
        }
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&doc)?);
        return Ok(());
    }

    println!("{}", doc.title.bold());
    println!("{}", "=".repeat(60));
    println!(
        "{} · {} · {} words",
        doc.folder.cyan(),
        doc.modified_at.format("%Y-%m-%d %H:%M"),
        doc.word_count
    );
    println!();

    let preview: String = doc.content.chars().take(CONTENT_PREVIEW_CHARS).collect();
    println!("{}", preview);
    if doc.content.chars().count() > CONTENT_PREVIEW_CHARS {
        println!();
        println!("{}", format!("... ({})", doc.path.display()).dimmed());
    }
    Ok(())
}
