/// Character budget for slide overviews.
pub const OVERVIEW_MAX_CHARS: usize = 95;

const ELLIPSIS: &str = "...";

/// Keep the first `max_chars` characters of `text`, appending `...` when
/// anything was cut.
///
/// Counts characters, not bytes, so multi-byte titles never split inside a
/// code point. Text at or under the budget is returned unchanged.
pub fn truncate_with_ellipsis(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => {
            let mut out = String::with_capacity(byte_index + ELLIPSIS.len());
            out.push_str(&text[..byte_index]);
            out.push_str(ELLIPSIS);
            out
        }
        None => text.to_string(),
    }
}
