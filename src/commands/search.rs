use anyhow::Result;
use colored::*;

use brainboard::{search, BrainPaths, DocumentLibrary, SearchResponse};

pub fn run(paths: &BrainPaths, query: &str, json: bool) -> Result<()> {
    let library = DocumentLibrary::new(&paths.docs);
    let results = search(&library, query);

    if json {
        let response = SearchResponse::from(results);
        println!("{}", serde_json::to_string_pretty(&response)?);
        return Ok(());
    }

    println!("{}", "Search Results".bold());
    println!("{}", "=".repeat(60));
    println!("Query: \"{}\"", query);
    println!("Found: {} matches", results.len());
    println!();

    if results.is_empty() {
        println!("{}", "No matches found.".yellow());
        return Ok(());
    }

    for result in &results {
        println!("{} [{}] {}", result.title.cyan(), result.folder, result.slug.dimmed());
        if !result.excerpt.is_empty() {
            println!("  {}", result.excerpt.replace('\n', " ").dimmed());
        }
        println!();
    }

    Ok(())
}
