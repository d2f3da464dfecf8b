use anyhow::{Result, bail};

/// Keeps ASCII letters, digits, `-` and `_`, lower-cases the rest and trims
/// leading/trailing separators. May return an empty string.
pub fn sanitize_project_name(raw: &str) -> String {
    let kept: String = raw
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '-' || *c == '_')
        .collect::<String>()
        .to_ascii_lowercase();
    kept.trim_matches(|c| c == '-' || c == '_').to_string()
}

/// Sanitizes and rejects names that end up empty.
///
/// # Errors
/// Returns an error if nothing usable remains after sanitizing.
pub fn project_name(raw: &str) -> Result<String> {
    let name = sanitize_project_name(raw);
    if name.is_empty() {
        bail!("invalid project name: {raw:?}");
    }
    Ok(name)
}
