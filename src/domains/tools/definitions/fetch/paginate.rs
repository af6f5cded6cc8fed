//! Character-window pagination over fetched text.
//!
//! Offsets and lengths count characters, not bytes, so a window never
//! splits a code point.

use crate::domains::tools::{InlineError, ToolText};

const NO_MORE_CONTENT: &str = "No more content available.";

/// One window of a longer text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Page<'a> {
    /// `start_index` is at or past the end of the text.
    Exhausted,

    /// The requested window. `next_start` is set when the window was full
    /// and characters remain after it.
    Window {
        text: &'a str,
        next_start: Option<usize>,
    },
}

/// Cut the window `[start_index, start_index + max_length)` out of `content`.
pub fn paginate(content: &str, start_index: usize, max_length: usize) -> Page<'_> {
    let Some(start_byte) = byte_offset(content, start_index) else {
        return Page::Exhausted;
    };

    let rest = &content[start_byte..];
    let end_byte = byte_offset(rest, max_length).unwrap_or(rest.len());
    let text = &rest[..end_byte];

    if text.is_empty() {
        return Page::Exhausted;
    }

    let taken = text.chars().count();
    let remaining = end_byte < rest.len();
    let next_start = (taken == max_length && remaining).then_some(start_index + taken);

    Page::Window { text, next_start }
}

impl Page<'_> {
    /// Render the page body, appending the continuation marker when more
    /// content is available.
    pub fn into_tool_text(self) -> ToolText {
        match self {
            Page::Exhausted => ToolText::inline(NO_MORE_CONTENT),
            Page::Window {
                text,
                next_start: None,
            } => ToolText::content(text),
            Page::Window {
                text,
                next_start: Some(next),
            } => {
                let marker = InlineError::new(format!(
                    "Content truncated. Call again with start_index={next} to get more."
                ));
                ToolText::Content(format!("{text}\n\n{marker}"))
            }
        }
    }
}

/// Byte offset of the `n`th character, or `None` if the text has no such
/// character. `n == 0` on an empty string is also `None`.
fn byte_offset(text: &str, n: usize) -> Option<usize> {
    text.char_indices().nth(n).map(|(i, _)| i)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BODY: &str = "abcdefghijklmnopqrstuvwxy"; // 25 characters

    #[test]
    fn test_first_window_suggests_next_start() {
        let page = paginate(BODY, 0, 10);
        assert_eq!(
            page,
            Page::Window {
                text: "abcdefghij",
                next_start: Some(10)
            }
        );
        assert_eq!(
            page.into_tool_text().render(),
            "abcdefghij\n\n<error>Content truncated. Call again with start_index=10 to get more.</error>"
        );
    }

    #[test]
    fn test_last_partial_window_has_no_marker() {
        let page = paginate(BODY, 20, 10);
        assert_eq!(
            page,
            Page::Window {
                text: "uvwxy",
                next_start: None
            }
        );
    }

    #[test]
    fn test_exact_fit_has_no_marker() {
        assert_eq!(
            paginate(BODY, 15, 10),
            Page::Window {
                text: "pqrstuvwxy",
                next_start: None
            }
        );
    }

    #[test]
    fn test_start_past_end_is_exhausted() {
        assert_eq!(paginate(BODY, 25, 10), Page::Exhausted);
        assert_eq!(paginate(BODY, 1000, 10), Page::Exhausted);
        assert_eq!(paginate("", 0, 10), Page::Exhausted);
        assert_eq!(
            paginate(BODY, 25, 10).into_tool_text().render(),
            "<error>No more content available.</error>"
        );
    }

    #[test]
    fn test_following_next_start_covers_everything_once() {
        let content = "The quick brown fox jumps over the lazy dog. ".repeat(7);
        let mut collected = String::new();
        let mut start = 0;
        let mut pages = 0;

        loop {
            match paginate(&content, start, 13) {
                Page::Window { text, next_start } => {
                    collected.push_str(text);
                    pages += 1;
                    match next_start {
                        Some(next) => start = next,
                        None => {
                            start += text.chars().count();
                            assert_eq!(paginate(&content, start, 13), Page::Exhausted);
                            break;
                        }
                    }
                }
                Page::Exhausted => break,
            }
        }

        assert_eq!(collected, content);
        assert_eq!(pages, content.chars().count().div_ceil(13));
    }

    #[test]
    fn test_windows_count_characters() {
        let content = "héllo wörld ✓ done";
        assert_eq!(
            paginate(content, 1, 4),
            Page::Window {
                text: "éllo",
                next_start: Some(5)
            }
        );
        assert_eq!(
            paginate(content, 12, 100),
            Page::Window {
                text: "✓ done",
                next_start: None
            }
        );
    }
}
