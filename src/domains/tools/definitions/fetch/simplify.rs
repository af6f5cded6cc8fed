//! HTML simplification: readability extraction followed by markdown
//! conversion.

use article_scraper::Readability;
use htmd::HtmlToMarkdown;
use htmd::options::{HeadingStyle, Options};
use tracing::{debug, warn};
use url::Url;

use crate::domains::tools::ToolText;

const SIMPLIFY_FAILED: &str = "Page failed to simplify from HTML";

/// Reduce an HTML page to its main content as markdown.
///
/// Returns an inline error when readability finds nothing to keep or the
/// conversion fails.
pub async fn extract_content_from_html(html: &str, url: &Url) -> ToolText {
    simplified(readable_html(html, url).await)
}

/// Markdown for the article readability kept. An article that converts to
/// blank markdown is a failed simplification, not an empty page.
fn simplified(article: Option<String>) -> ToolText {
    article
        .and_then(|article| to_markdown(&article))
        .map_or_else(|| ToolText::inline(SIMPLIFY_FAILED), ToolText::Content)
}

/// Run readability over `html` and return the isolated article HTML.
///
/// article_scraper can panic on malformed markup, so extraction runs on the
/// blocking pool under `catch_unwind`.
async fn readable_html(html: &str, url: &Url) -> Option<String> {
    let html_owned = html.to_string();
    let base_url = url.clone();
    let result = tokio::task::spawn_blocking(move || {
        std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            tokio::runtime::Handle::current()
                .block_on(async { Readability::extract(&html_owned, Some(base_url)).await })
        }))
    })
    .await;

    match result {
        Ok(Ok(Ok(article))) if !article.trim().is_empty() => Some(article),
        Ok(Ok(Ok(_))) => {
            debug!("Readability produced no content");
            None
        }
        Ok(Ok(Err(e))) => {
            debug!("Readability extraction failed: {}", e);
            None
        }
        Ok(Err(_panic)) => {
            warn!("Readability extraction panicked for {}", url);
            None
        }
        Err(e) => {
            warn!("Readability extraction task failed: {}", e);
            None
        }
    }
}

/// Convert HTML to markdown with ATX (`#`) headings.
pub fn to_markdown(html: &str) -> Option<String> {
    let converter = HtmlToMarkdown::builder()
        .options(Options {
            heading_style: HeadingStyle::Atx,
            ..Default::default()
        })
        .skip_tags(vec!["script", "style"])
        .build();

    match converter.convert(html) {
        Ok(markdown) if !markdown.trim().is_empty() => Some(markdown),
        Ok(_) => None,
        Err(e) => {
            warn!("Markdown conversion failed: {}", e);
            None
        }
    }
}
