//! Turns raw request content into analyzable text.
//!
//! URLs are fetched once with a bounded GET, stripped of markup, and capped
//! to bound the cost of the downstream model call. Direct text passes
//! through trimmed.

use std::sync::LazyLock;
use std::time::Duration;

use regex::Regex;
use serde::Deserialize;
use tracing::info;

use lielens_common::LieLensError;

use crate::report::SourceInfo;

const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Some sites serve empty or blocked pages to unknown clients.
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Cap on cleaned page text, in characters. Bounds model-call cost, not
/// correctness.
pub const MAX_CONTENT_CHARS: usize = 8000;
const TRUNCATION_MARKER: &str = "... [content truncated]";

static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").unwrap());
static WHITESPACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// How the caller wants the content interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Url,
    Text,
    #[default]
    Auto,
}

#[derive(Debug, Clone)]
pub struct ResolvedContent {
    pub text: String,
    pub source_info: SourceInfo,
}

/// A string counts as a URL only when it parses as an absolute URL with
/// both a scheme and a host.
pub fn is_valid_url(candidate: &str) -> bool {
    match url::Url::parse(candidate) {
        Ok(parsed) => parsed.has_host(),
        Err(_) => false,
    }
}

/// Strip markup tags, collapse runs of whitespace, trim ends.
pub fn clean_html(raw: &str) -> String {
    let without_tags = TAG_RE.replace_all(raw, " ");
    WHITESPACE_RE.replace_all(&without_tags, " ").trim().to_string()
}

/// Keep the first `MAX_CONTENT_CHARS` characters and mark the cut.
fn truncate_content(text: String) -> String {
    match text.char_indices().nth(MAX_CONTENT_CHARS) {
        Some((idx, _)) => format!("{}{}", &text[..idx], TRUNCATION_MARKER),
        None => text,
    }
}

pub struct ContentResolver {
    http: reqwest::Client,
}

impl Default for ContentResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl ContentResolver {
    pub fn new() -> Self {
        let http = reqwest::Client::builder()
            .timeout(FETCH_TIMEOUT)
            .user_agent(USER_AGENT)
            .build()
            .expect("Failed to build HTTP client");

        Self { http }
    }

    /// Classify the content, fetching and cleaning it when it is a URL.
    pub async fn resolve(
        &self,
        content: &str,
        content_type: ContentType,
    ) -> Result<ResolvedContent, LieLensError> {
        let is_url = match content_type {
            ContentType::Url => true,
            ContentType::Text => false,
            ContentType::Auto => is_valid_url(content),
        };

        if !is_url {
            return Ok(ResolvedContent {
                text: content.trim().to_string(),
                source_info: SourceInfo::direct_text(),
            });
        }

        info!(url = content, "Fetching content from URL");
        let page = self.fetch_url(content).await?;
        let cleaned = truncate_content(clean_html(&page));

        Ok(ResolvedContent {
            text: cleaned,
            source_info: SourceInfo::url(content),
        })
    }

    /// Single GET with a fixed timeout. Transport failures and non-success
    /// statuses both surface as fetch errors naming the URL.
    async fn fetch_url(&self, url: &str) -> Result<String, LieLensError> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| LieLensError::Fetch {
                url: url.to_string(),
                cause: e.to_string(),
            })?;

        let response = response.error_for_status().map_err(|e| LieLensError::Fetch {
            url: url.to_string(),
            cause: e.to_string(),
        })?;

        response.text().await.map_err(|e| LieLensError::Fetch {
            url: url.to_string(),
            cause: e.to_string(),
        })
    }
}
