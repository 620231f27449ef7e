// Output formatting: terminal report and JSON wire format.

pub mod json;
pub mod terminal;

/// Shorten a document id for a fixed-width table column. Counts characters,
/// not bytes, so ids with accented letters are cut on a character boundary.
/// A cut id ends in "...".
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    let char_count = text.chars().count();
    if char_count <= max_chars {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(max_chars).collect();
        format!("{truncated}...")
    }
}
