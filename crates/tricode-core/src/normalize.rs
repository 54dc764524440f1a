//! Input normalization for label text.

/// Normalize a raw label for abbreviation.
///
/// Strips every character that is not alphanumeric, whitespace, or a
/// hyphen, treats hyphens as word separators, uppercases, and collapses
/// whitespace runs to single spaces. The result contains only uppercase
/// letters, digits, and single spaces — or is empty.
pub fn normalize(text: &str) -> String {
    let kept: String = text
        .chars()
        .filter(|&c| c.is_alphanumeric() || c.is_whitespace() || c == '-')
        .map(|c| if c == '-' { ' ' } else { c })
        .flat_map(char::to_uppercase)
        .collect();
    kept.split_whitespace().collect::<Vec<_>>().join(" ")
}
