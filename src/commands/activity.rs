use anyhow::Result;
use chrono::Local;
use colored::*;

use brainboard::core::activity::recent_activity;
use brainboard::BrainPaths;

pub fn run(paths: &BrainPaths, json: bool) -> Result<()> {
    let items = recent_activity(&paths.activity_dirs());

    if json {
        println!("{}", serde_json::to_string_pretty(&items)?);
        return Ok(());
    }

    println!("{}", "Recent Activity (24h)".bold());
    println!("{}", "=".repeat(50));

    if items.is_empty() {
        println!("{}", "Nothing changed in the last 24 hours.".yellow());
        return Ok(());
    }

    for item in &items {
        let local = item.timestamp.with_timezone(&Local);
        println!(
            "{} {} {:<8} {}",
            item.icon,
            local.format("%H:%M").to_string().dimmed(),
            item.action,
            item.details.cyan()
        );
    }
    Ok(())
}
