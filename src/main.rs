mod commands;
#[cfg(feature = "mcp")]
mod mcp;

use std::path::PathBuf;

use brainboard::store::{IdeaStatus, ProjectStatus, VideoStatus};
use brainboard::BrainPaths;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "brain")]
#[command(about = "Second Brain dashboard: documents, search and trackers", long_about = None)]
#[command(version)]
struct Cli {
    #[command(flatten)]
    dirs: DirArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct DirArgs {
    /// Root of the markdown corpus (default: current directory)
    #[arg(long, global = true, env = "BRAIN_DOCS_DIR")]
    docs_dir: Option<PathBuf>,

    /// Tracker data directory (default: <docs-dir>/data)
    #[arg(long, global = true, env = "BRAIN_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Extra directory scanned for the activity feed
    #[arg(long, global = true, env = "BRAIN_MEMORY_DIR")]
    memory_dir: Option<PathBuf>,
}

impl DirArgs {
    fn into_paths(self) -> anyhow::Result<BrainPaths> {
        let docs = match self.docs_dir {
            Some(dir) => dir,
            None => std::env::current_dir()?,
        };
        Ok(BrainPaths::new(docs, self.data_dir, self.memory_dir))
    }
}

#[derive(Subcommand)]
enum Commands {
    // ===== Documents =====
    /// Create the docs and data directories
    Init,
    /// List documents, newest first
    List {
        #[arg(long, help = "Only documents in this folder")]
        folder: Option<String>,
        #[arg(long, help = "JSON output")]
        json: bool,
    },
    /// Show documents grouped by folder
    Tree {
        #[arg(long, help = "JSON output")]
        json: bool,
    },
    /// Show a single document by slug (e.g. journals/2026-02-05)
    Show {
        slug: String,
        #[arg(long, help = "JSON output")]
        json: bool,
    },
    /// Case-insensitive search over titles and content
    Search {
        query: String,
        #[arg(long, help = "JSON output")]
        json: bool,
    },
    /// Markdown files changed in the last 24 hours
    Activity {
        #[arg(long, help = "JSON output")]
        json: bool,
    },

    // ===== Trackers =====
    /// Ideas inbox
    Ideas {
        #[command(subcommand)]
        action: Option<IdeaAction>,
        #[arg(long, help = "JSON output")]
        json: bool,
    },
    /// Projects board
    Projects {
        #[command(subcommand)]
        action: Option<ProjectAction>,
        #[arg(long, help = "JSON output")]
        json: bool,
    },
    /// Life score dimensions
    Scores {
        #[command(subcommand)]
        action: Option<ScoreAction>,
        #[arg(long, help = "JSON output")]
        json: bool,
    },
    /// YouTube video pipeline
    Videos {
        #[command(subcommand)]
        action: Option<VideoAction>,
        #[arg(long, help = "JSON output")]
        json: bool,
    },

    // ===== MCP Server =====
    /// Start MCP server over stdio
    #[cfg(feature = "mcp")]
    Mcp {
        #[arg(long, help = "Show client configuration instructions")]
        install: bool,
    },
}

#[derive(Subcommand)]
pub enum IdeaAction {
    Add {
        content: String,
        #[arg(long, value_delimiter = ',')]
        tags: Vec<String>,
    },
    Status {
        id: String,
        #[arg(value_enum)]
        status: IdeaStatus,
    },
    Delete {
        id: String,
    },
}

#[derive(Subcommand)]
pub enum ProjectAction {
    Add {
        name: String,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        repo: Option<String>,
        #[arg(long, value_enum)]
        status: Option<ProjectStatus>,
    },
    Status {
        id: String,
        #[arg(value_enum)]
        status: ProjectStatus,
    },
}

#[derive(Subcommand)]
pub enum ScoreAction {
    Set {
        dimension: String,
        #[arg(allow_negative_numbers = true)]
        score: Option<i64>,
        #[arg(long)]
        notes: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum VideoAction {
    Add {
        title: String,
        #[arg(long)]
        notes: Option<String>,
    },
    Status {
        id: String,
        #[arg(value_enum)]
        status: VideoStatus,
        #[arg(long)]
        url: Option<String>,
    },
}

fn init_tracing() {
    // stdout belongs to command output and the MCP transport
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let paths = cli.dirs.into_paths()?;

    match cli.command {
        // Documents
        Commands::Init => commands::init::run(&paths),
        Commands::List { folder, json } => commands::docs::list(&paths, folder.as_deref(), json),
        Commands::Tree { json } => commands::docs::tree(&paths, json),
        Commands::Show { slug, json } => commands::docs::show(&paths, &slug, json),
        Commands::Search { query, json } => commands::search::run(&paths, &query, json),
        Commands::Activity { json } => commands::activity::run(&paths, json),

        // Trackers
        Commands::Ideas { action, json } => commands::trackers::ideas(&paths, action, json),
        Commands::Projects { action, json } => commands::trackers::projects(&paths, action, json),
        Commands::Scores { action, json } => commands::trackers::scores(&paths, action, json),
        Commands::Videos { action, json } => commands::trackers::videos(&paths, action, json),

        // MCP Server
        #[cfg(feature = "mcp")]
        Commands::Mcp { install } => {
            if install {
                print_mcp_install_instructions(&paths);
                Ok(())
            } else {
                run_mcp_server(paths)
            }
        }
    }
}

#[cfg(feature = "mcp")]
fn run_mcp_server(paths: BrainPaths) -> anyhow::Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(mcp::run_mcp_server(paths))
}

#[cfg(feature = "mcp")]
fn print_mcp_install_instructions(paths: &BrainPaths) {
    use colored::Colorize;

    let binary_path = std::env::current_exe()
        .map(|p| p.to_string_lossy().to_string())
        .unwrap_or_else(|_| "brain".to_string());

    println!("{}", "MCP Server Installation Guide".bold().cyan());
    println!();
    println!("Add the following to your MCP client configuration:");
    println!();
    println!(
        r#"{{
  "mcpServers": {{
    "second-brain": {{
      "command": "{}",
      "args": ["mcp"],
      "env": {{
        "BRAIN_DOCS_DIR": "{}",
        "BRAIN_DATA_DIR": "{}"
      }}
    }}
  }}
}}"#,
        binary_path,
        paths.docs.display(),
        paths.data.display()
    );
    println!();
    println!("{}", "Available tools:".bold());
    println!("  • {} - Substring search over titles and content", "brain_search".green());
    println!("  • {} - Get a document by slug", "brain_get_document".green());
    println!("  • {} - Documents grouped by folder", "brain_folder_tree".green());
    println!("  • {} - List documents, newest first", "brain_list_documents".green());
    println!("  • {} - Files changed in the last 24h", "brain_recent_activity".green());
    println!("  • {} / {} - Ideas inbox", "brain_list_ideas".green(), "brain_add_idea".green());
    println!("  • {} - Projects board", "brain_list_projects".green());
    println!(
        "  • {} / {} - Life scores",
        "brain_life_scores".green(),
        "brain_update_life_score".green()
    );
    println!("  • {} - YouTube pipeline", "brain_list_videos".green());
}
