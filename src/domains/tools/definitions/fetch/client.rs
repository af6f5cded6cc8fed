//! Outbound HTTP retrieval for the fetch tool.

use reqwest::header::CONTENT_TYPE;
use reqwest::redirect::Policy;
use tracing::{debug, info, warn};
use url::Url;

use super::simplify::extract_content_from_html;
use crate::core::config::FetchConfig;
use crate::domains::tools::{ToolError, ToolText};

/// Number of leading characters inspected for an `<html` tag.
const SNIFF_CHARS: usize = 100;

/// Text retrieved for one fetch call, before pagination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedPage {
    /// Simplified markdown, the raw body, or a simplification failure.
    pub content: ToolText,

    /// Note placed before the page header; empty for simplified HTML.
    pub prefix: String,
}

/// Decide whether a response should go through HTML simplification.
///
/// A missing content type counts as HTML.
pub fn is_html(body: &str, content_type: &str) -> bool {
    let head: String = body.chars().take(SNIFF_CHARS).collect();
    head.contains("<html") || content_type.contains("text/html") || content_type.is_empty()
}

/// GET `url` and return its content, simplified to markdown when it is HTML
/// and `force_raw` is false.
///
/// A fresh client is built for every call and dropped before returning.
pub async fn fetch_url(
    url: &Url,
    config: &FetchConfig,
    force_raw: bool,
) -> Result<FetchedPage, ToolError> {
    let client = reqwest::Client::builder()
        .redirect(Policy::limited(20))
        .user_agent(config.user_agent.as_str())
        .timeout(config.timeout())
        .build()
        .map_err(|e| ToolError::internal(format!("Failed to fetch {url}: {e:?}")))?;

    let response = client.get(url.clone()).send().await.map_err(|e| {
        warn!("Request to {} failed: {}", url, e);
        ToolError::internal(format!("Failed to fetch {url}: {e:?}"))
    })?;

    let status = response.status();
    if status.as_u16() >= 400 {
        warn!("Request to {} returned {}", url, status);
        return Err(ToolError::internal(format!(
            "Failed to fetch {url} - status code {}",
            status.as_u16()
        )));
    }

    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();

    let page_raw = response
        .text()
        .await
        .map_err(|e| ToolError::internal(format!("Failed to fetch {url}: {e:?}")))?;

    info!(
        "Fetched {} ({} bytes, content type {:?})",
        url,
        page_raw.len(),
        content_type
    );

    if is_html(&page_raw, &content_type) && !force_raw {
        debug!("Simplifying HTML from {}", url);
        return Ok(FetchedPage {
            content: extract_content_from_html(&page_raw, url).await,
            prefix: String::new(),
        });
    }

    Ok(FetchedPage {
        content: ToolText::Content(page_raw),
        prefix: format!(
            "Content type {content_type} cannot be simplified to markdown. Raw content:\n"
        ),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_content_type() {
        assert!(is_html("plain words", "text/html; charset=utf-8"));
    }

    #[test]
    fn test_missing_content_type_defaults_to_html() {
        assert!(is_html("{\"not\": \"html\"}", ""));
    }

    #[test]
    fn test_html_tag_sniffed_in_first_100_chars() {
        assert!(is_html("<!doctype html>\n<html lang=\"en\">", "text/plain"));

        let late_tag = format!("{}<html>", " ".repeat(100));
        assert!(!is_html(&late_tag, "text/plain"));
    }

    #[test]
    fn test_plain_text_is_raw() {
        assert!(!is_html("just text", "text/plain"));
        assert!(!is_html("{}", "application/json"));
    }
}
