//! Second Brain MCP Server implementation

use anyhow::Result;
use rmcp::{
    handler::server::{tool::ToolRouter, wrapper::Parameters},
    model::{CallToolResult, Content, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler, ServiceExt,
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use brainboard::core::activity::recent_activity;
use brainboard::store::{Idea, LifeScore, Project, YouTubeVideo};
use brainboard::{search, BrainError, BrainPaths, DocumentLibrary, DocumentSource, JsonStore, SearchResponse};

/// Parameters for brain_search tool
#[derive(Debug, Deserialize, JsonSchema)]
pub struct SearchParams {
    /// Free-text query, matched case-insensitively against titles and content
    #[schemars(description = "Search text (case-insensitive substring)")]
    #[serde(default)]
    pub q: String,
}

/// Parameters for brain_get_document tool
#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetDocumentParams {
    /// Document slug (e.g., "journals/2026-02-05")
    #[schemars(description = "Document slug: <folder>/<file name without .md>")]
    pub slug: String,
}

/// Parameters for brain_list_documents tool
#[derive(Debug, Deserialize, JsonSchema)]
pub struct ListDocumentsParams {
    #[schemars(description = "Only documents in this top-level folder")]
    #[serde(default)]
    pub folder: Option<String>,
    #[schemars(description = "Maximum results (default: 50)")]
    #[serde(default = "default_list_limit")]
    pub limit: usize,
}

fn default_list_limit() -> usize {
    50
}

/// Parameters for brain_add_idea tool
#[derive(Debug, Deserialize, JsonSchema)]
pub struct AddIdeaParams {
    #[schemars(description = "Idea text")]
    pub content: String,
    #[schemars(description = "Optional tags")]
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Parameters for brain_update_life_score tool
#[derive(Debug, Deserialize, JsonSchema)]
pub struct UpdateLifeScoreParams {
    #[schemars(description = "Dimension name, e.g. Mental, Physical, Financial")]
    pub dimension: String,
    #[schemars(description = "New score, clamped to 0-100")]
    #[serde(default)]
    pub score: Option<i64>,
    #[schemars(description = "Free-form notes")]
    #[serde(default)]
    pub notes: Option<String>,
}

/// Document summary for JSON output
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct DocumentInfoJson {
    slug: String,
    title: String,
    folder: String,
    modified_at: String,
    word_count: usize,
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<CallToolResult, McpError> {
    let output = serde_json::to_string_pretty(value).map_err(|e| {
        McpError::internal_error(format!("JSON serialization failed: {}", e), None)
    })?;
    Ok(CallToolResult::success(vec![Content::text(output)]))
}

fn store_error(e: BrainError) -> McpError {
    match e {
        BrainError::NotFound { .. } => McpError::invalid_params(e.to_string(), None),
        other => McpError::internal_error(other.to_string(), None),
    }
}

/// Second Brain MCP Service
#[derive(Clone)]
pub struct BrainService {
    paths: BrainPaths,
    tool_router: ToolRouter<Self>,
}

impl BrainService {
    pub fn new(paths: BrainPaths) -> Self {
        Self {
            paths,
            tool_router: Self::tool_router(),
        }
    }

    fn library(&self) -> DocumentLibrary {
        DocumentLibrary::new(&self.paths.docs)
    }

    fn store(&self) -> JsonStore {
        JsonStore::new(self.paths.clone())
    }
}

#[tool_router]
impl BrainService {
    /// Substring search over document titles and content
    #[tool(description = "Search the Second Brain documents. Case-insensitive substring match on title or content; returns up to 10 results in corpus order with an excerpt around the first content match.")]
    async fn brain_search(
        &self,
        params: Parameters<SearchParams>,
    ) -> Result<CallToolResult, McpError> {
        let results = search(&self.library(), &params.0.q);
        to_json(&SearchResponse::from(results))
    }

    /// Get full content of a document
    #[tool(description = "Get the full content and metadata of a document by slug.")]
    async fn brain_get_document(
        &self,
        params: Parameters<GetDocumentParams>,
    ) -> Result<CallToolResult, McpError> {
        let slug = &params.0.slug;
        match self.library().by_slug(slug) {
            Some(doc) => to_json(&doc),
            None => Ok(CallToolResult::success(vec![Content::text(format!(
                "Document not found: {}",
                slug
            ))])),
        }
    }

    /// Documents grouped by folder
    #[tool(description = "List all documents grouped by top-level folder (journals, concepts, research, projects, root, then others).")]
    async fn brain_folder_tree(&self) -> Result<CallToolResult, McpError> {
        to_json(&self.library().folder_tree())
    }

    /// List documents newest first
    #[tool(description = "List documents ordered by last modification, newest first, with an optional folder filter.")]
    async fn brain_list_documents(
        &self,
        params: Parameters<ListDocumentsParams>,
    ) -> Result<CallToolResult, McpError> {
        let folder = &params.0.folder;
        // Clamp limit: default 50, max 500
        let limit = match params.0.limit {
            0 => default_list_limit(),
            n => n.min(500),
        };

        let docs: Vec<DocumentInfoJson> = self
            .library()
            .list_all()
            .into_iter()
            .filter(|d| folder.as_ref().map_or(true, |f| d.folder == *f))
            .take(limit)
            .map(|d| DocumentInfoJson {
                slug: d.slug,
                title: d.title,
                folder: d.folder,
                modified_at: d.modified_at.to_rfc3339(),
                word_count: d.word_count,
            })
            .collect();

        to_json(&docs)
    }

    /// Recently modified markdown files
    #[tool(description = "Markdown files changed in the last 24 hours, newest first (max 20).")]
    async fn brain_recent_activity(&self) -> Result<CallToolResult, McpError> {
        to_json(&recent_activity(&self.paths.activity_dirs()))
    }

    #[tool(description = "List ideas in the inbox, newest first.")]
    async fn brain_list_ideas(&self) -> Result<CallToolResult, McpError> {
        let ideas = self.store().load::<Idea>().map_err(store_error)?;
        to_json(&ideas)
    }

    #[tool(description = "Capture a new idea into the inbox.")]
    async fn brain_add_idea(
        &self,
        params: Parameters<AddIdeaParams>,
    ) -> Result<CallToolResult, McpError> {
        let AddIdeaParams { content, tags } = params.0;
        let idea = self
            .store()
            .add_idea(&content, tags, None)
            .map_err(store_error)?;
        to_json(&idea)
    }

    #[tool(description = "List projects with their status.")]
    async fn brain_list_projects(&self) -> Result<CallToolResult, McpError> {
        let projects = self.store().load::<Project>().map_err(store_error)?;
        to_json(&projects)
    }

    #[tool(description = "Get the life score for each of the 7 dimensions (0-100).")]
    async fn brain_life_scores(&self) -> Result<CallToolResult, McpError> {
        let scores = self.store().load::<LifeScore>().map_err(store_error)?;
        to_json(&scores)
    }

    #[tool(description = "Update a life score dimension. Score is clamped to 0-100.")]
    async fn brain_update_life_score(
        &self,
        params: Parameters<UpdateLifeScoreParams>,
    ) -> Result<CallToolResult, McpError> {
        let UpdateLifeScoreParams {
            dimension,
            score,
            notes,
        } = params.0;
        let updated = self
            .store()
            .update_life_score(&dimension, score, notes)
            .map_err(store_error)?;
        to_json(&updated)
    }

    #[tool(description = "List videos in the YouTube pipeline.")]
    async fn brain_list_videos(&self) -> Result<CallToolResult, McpError> {
        let videos = self.store().load::<YouTubeVideo>().map_err(store_error)?;
        to_json(&videos)
    }
}

#[tool_handler]
impl ServerHandler for BrainService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Second Brain MCP Server. Provides document search, document access and the ideas/projects/life-score/video trackers.".to_string()
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

/// Run the MCP server
pub async fn run_mcp_server(paths: BrainPaths) -> Result<()> {
    use tokio::io::{stdin, stdout};

    tracing::info!(docs = %paths.docs.display(), "starting MCP server");
    let service = BrainService::new(paths);
    let transport = (stdin(), stdout());
    let server = service.serve(transport).await?;
    server.waiting().await?;

    Ok(())
}
