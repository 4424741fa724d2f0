//! Substring search over the document corpus
//!
//! Linear scan, case-insensitive, first matches in corpus order. No ranking.

use serde::Serialize;

use crate::core::document::Document;
use crate::core::library::DocumentSource;

pub const MAX_RESULTS: usize = 10;
/// Characters kept before the first match in an excerpt.
pub const EXCERPT_BEFORE: usize = 40;
/// Characters kept after the end of the first match in an excerpt.
pub const EXCERPT_AFTER: usize = 60;

const ELLIPSIS: &str = "...";

/// Search hit projected from a [`Document`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResult {
    pub slug: String,
    pub title: String,
    pub folder: String,
    pub excerpt: String,
}

/// Wire shape of a search response: `{"results": [...]}`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SearchResponse {
    pub results: Vec<SearchResult>,
}

impl From<Vec<SearchResult>> for SearchResponse {
    fn from(results: Vec<SearchResult>) -> Self {
        Self { results }
    }
}

pub fn is_blank(query: &str) -> bool {
    query.trim().is_empty()
}

/// Search the current corpus of `source`.
///
/// Blank queries return immediately without reading the corpus.
pub fn search<S: DocumentSource + ?Sized>(source: &S, query: &str) -> Vec<SearchResult> {
    if is_blank(query) {
        return Vec::new();
    }
    search_documents(&source.documents(), query)
}

/// Case-insensitive substring match on title or content, first
/// [`MAX_RESULTS`] hits in the order given.
pub fn search_documents(documents: &[Document], query: &str) -> Vec<SearchResult> {
    if is_blank(query) {
        return Vec::new();
    }
    let query_lower = query.to_lowercase();

    documents
        .iter()
        .filter(|doc| {
            doc.title.to_lowercase().contains(&query_lower)
                || doc.content.to_lowercase().contains(&query_lower)
        })
        .take(MAX_RESULTS)
        .map(|doc| SearchResult {
            slug: doc.slug.clone(),
            title: doc.title.clone(),
            folder: doc.folder.clone(),
            excerpt: extract_excerpt(&doc.content, &query_lower),
        })
        .collect()
}

/// Snippet of `content` around the first case-insensitive occurrence of
/// `query`, or an empty string when the content does not contain it.
///
/// Offsets are counted in chars so the window never splits a UTF-8 sequence.
pub fn extract_excerpt(content: &str, query: &str) -> String {
    let content_lower = content.to_lowercase();
    let query_lower = query.to_lowercase();
    let Some(byte_idx) = content_lower.find(&query_lower) else {
        return String::new();
    };

    let (match_start, match_end) =
        original_char_span(content, byte_idx, byte_idx + query_lower.len());
    let chars: Vec<char> = content.chars().collect();

    let end = (match_end + EXCERPT_AFTER).min(chars.len());
    let start = match_start.saturating_sub(EXCERPT_BEFORE).min(end);

    let window: String = chars[start..end].iter().collect();
    let mut excerpt = String::with_capacity(window.len() + 2 * ELLIPSIS.len());
    if start > 0 {
        excerpt.push_str(ELLIPSIS);
    }
    excerpt.push_str(window.trim());
    if end < chars.len() {
        excerpt.push_str(ELLIPSIS);
    }
    excerpt
}

/// Map a byte range of `content.to_lowercase()` back to a char range of
/// `content`. Lowercasing may expand a char (`İ` becomes two), so the
/// lowercase offsets cannot be reused directly.
fn original_char_span(content: &str, lower_start: usize, lower_end: usize) -> (usize, usize) {
    let mut start = None;
    let mut end = 0;
    let mut offset = 0;

    for (i, c) in content.chars().enumerate() {
        let next = offset + c.to_lowercase().map(char::len_utf8).sum::<usize>();
        if start.is_none() && lower_start < next {
            start = Some(i);
        }
        end = i + 1;
        if lower_end <= next {
            break;
        }
        offset = next;
    }

    (start.unwrap_or(end), end)
}
