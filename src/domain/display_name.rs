//! Display-name normalization.

/// Remove every character outside the ASCII range, keeping the order of the rest.
pub fn strip_non_ascii(value: &str) -> String {
    value.chars().filter(char::is_ascii).collect()
}

/// Normalize a raw display name.
///
/// The value is trimmed and stripped of non-ASCII characters. Anything that
/// ends up blank collapses to `None`. The stripped result is trimmed again so
/// that normalizing an already-normalized name is a no-op.
pub fn normalize_display_name(value: Option<&str>) -> Option<String> {
    let trimmed = value.map(str::trim).filter(|v| !v.is_empty())?;

    let stripped = strip_non_ascii(trimmed);
    if stripped.len() != trimmed.len() {
        tracing::trace!(
            removed_bytes = trimmed.len() - stripped.len(),
            "Stripped non-ASCII characters from display name"
        );
    }

    let stripped = stripped.trim();
    if stripped.is_empty() {
        None
    } else {
        Some(stripped.to_string())
    }
}
