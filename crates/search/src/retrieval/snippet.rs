//! Snippet extraction
//!
//! Picks a window of lower-cased content around the first match of the
//! query (or, failing that, of its first matching token). Windows are
//! measured in characters and never split a UTF-8 sequence.

use super::keyword::NormalizedQuery;

/// Characters kept on each side of the anchor
pub const SNIPPET_RADIUS: usize = 100;

/// Characters kept when nothing matches
pub const SNIPPET_FALLBACK_LEN: usize = 200;

/// Marker for truncated text
pub const ELLIPSIS: &str = "...";

/// Extract a snippet from already lower-cased `content`.
///
/// Case is not restored.
pub fn extract(content: &str, query: &NormalizedQuery) -> String {
    match anchor(content, query) {
        Some(anchor_byte) => window(content, anchor_byte),
        None => leading(content),
    }
}

/// Byte offset of the first full-query match, else of the first token
/// (in query order) that occurs anywhere in the content
fn anchor(content: &str, query: &NormalizedQuery) -> Option<usize> {
    content.find(query.text()).or_else(|| {
        query
            .tokens()
            .iter()
            .find_map(|token| content.find(token.as_str()))
    })
}

fn window(content: &str, anchor_byte: usize) -> String {
    let anchor_char = content[..anchor_byte].chars().count();
    let start = byte_offset(content, anchor_char.saturating_sub(SNIPPET_RADIUS));
    let end = byte_offset(content, anchor_char + SNIPPET_RADIUS);

    let mut snippet = String::with_capacity(end - start + 2 * ELLIPSIS.len());
    if start > 0 {
        snippet.push_str(ELLIPSIS);
    }
    snippet.push_str(&content[start..end]);
    if end < content.len() {
        snippet.push_str(ELLIPSIS);
    }
    snippet
}

fn leading(content: &str) -> String {
    let end = byte_offset(content, SNIPPET_FALLBACK_LEN);
    if end < content.len() {
        format!("{}{}", &content[..end], ELLIPSIS)
    } else {
        content.to_string()
    }
}

/// Byte offset of the `char_index`-th character, clamped to the end
fn byte_offset(s: &str, char_index: usize) -> usize {
    s.char_indices()
        .nth(char_index)
        .map_or(s.len(), |(offset, _)| offset)
}
