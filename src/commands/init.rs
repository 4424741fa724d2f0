use anyhow::Result;
use colored::*;
use std::fs;

use brainboard::BrainPaths;

pub fn run(paths: &BrainPaths) -> Result<()> {
    println!("{}", "Second Brain Setup".bold());
    println!("{}", "=".repeat(50));
    println!();

    let mut created = 0;

    for (path, purpose) in paths.required_folders() {
        if path.exists() {
            println!("{} {} exists ({})", "✓".green(), path.display(), purpose);
        } else {
            fs::create_dir_all(path)?;
            created += 1;
            println!("{} Created {} ({})", "✓".green(), path.display(), purpose);
        }
    }

    if let Some(memory) = &paths.memory {
        if !memory.exists() {
            println!(
                "{} {} missing (activity source, not created)",
                "!".yellow(),
                memory.display()
            );
        }
    }

    println!();
    println!("Created: {} folders", created.to_string().green());
    Ok(())
}
