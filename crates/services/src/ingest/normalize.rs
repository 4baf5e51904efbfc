//! Cell-level cleanup of residual quoting artifacts.

/// Normalizes one raw cell into usable text.
///
/// Trims surrounding whitespace. If the value is still wrapped in a
/// matching pair of double quotes, strips the outer pair and collapses
/// doubled inner quotes (standard CSV escaping). Some upstream tokenizers
/// leave those artifacts behind when a cell's content itself contains a
/// comma. Absent input normalizes to the empty string.
#[must_use]
pub fn normalize_cell(raw: Option<&str>) -> String {
    let Some(raw) = raw else {
        return String::new();
    };

    let trimmed = raw.trim();
    if trimmed.len() >= 2 && trimmed.starts_with('"') && trimmed.ends_with('"') {
        let inner = &trimmed[1..trimmed.len() - 1];
        return inner.replace("\"\"", "\"");
    }

    trimmed.to_string()
}
