//! Prompt text assembly for a single feed item.

use crate::types::FeedItem;

/// Maximum number of characters of the item description kept in the prompt.
pub const MAX_DESCRIPTION_CHARS: usize = 1_000;

/// Build the prompt text for one feed item.
///
/// One labelled line per field. The description is cut to the first
/// [`MAX_DESCRIPTION_CHARS`] characters with no ellipsis; the full content is
/// passed through untouched.
#[must_use]
pub fn build_prompt(item: &FeedItem) -> String {
    let description = truncate_chars(&item.description, MAX_DESCRIPTION_CHARS);
    format!(
        "Title: {}\nDescription: {}\nLink: {}\nContent: {}",
        item.title, description, item.link, item.full_content
    )
}

/// Return the first `max` characters of `s`, borrowing when no cut is needed.
fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
