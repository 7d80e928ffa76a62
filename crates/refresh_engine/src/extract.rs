use regex::Regex;

use crate::WatchError;

/// Default pattern: script tags with a quoted `src` attribute. Capture
/// group 1 is the quoted value.
pub const DEFAULT_SCRIPT_PATTERN: &str = r#"(?m)<script.*src=["']([^"']+)"#;

/// Scans the whole document for `pattern` and returns capture group 1 of
/// every non-overlapping match, in order of occurrence, duplicates
/// preserved.
///
/// The pattern is compiled fresh per invocation so repeated calls never
/// share scan state. No matches yield an empty vector. A pattern without a
/// first capture group contributes an empty entry per match; such entries
/// compare equal among themselves downstream.
pub fn extract_sources(html: &str, pattern: &str) -> Result<Vec<String>, WatchError> {
    let regex = Regex::new(pattern)?;
    Ok(regex
        .captures_iter(html)
        .map(|caps| {
            caps.get(1)
                .map(|group| group.as_str().to_owned())
                .unwrap_or_default()
        })
        .collect())
}
