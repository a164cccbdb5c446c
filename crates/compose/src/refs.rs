//! File-reference extraction from memory file content.
//!
//! Two disjoint reference syntaxes are recognized:
//!
//! - `@path/to/file.md` — extensions `.md .txt .json .yaml .yml`
//! - `` `file.md` `` — backtick-quoted, extensions `.md .txt` only
//!
//! The union is deduplicated; order is the first occurrence in the text.

use regex_lite::Regex;

const AT_PATTERN: &str = r"@([A-Za-z0-9_\-./]+\.(?:md|txt|json|yaml|yml))";
const TICK_PATTERN: &str = r"`([A-Za-z0-9_\-./]+\.(?:md|txt))`";

/// Scan free-form text for file references.
pub fn extract(content: &str) -> Vec<String> {
    if content.is_empty() {
        return Vec::new();
    }

    // Collect (position, name) pairs from both syntaxes, then merge by
    // position so deduplication keeps the earliest occurrence.
    let mut found: Vec<(usize, String)> = Vec::new();
    for pattern in [AT_PATTERN, TICK_PATTERN] {
        if let Ok(re) = Regex::new(pattern) {
            for captures in re.captures_iter(content) {
                if let Some(name) = captures.get(1) {
                    found.push((name.start(), name.as_str().to_string()));
                }
            }
        }
    }
    found.sort_by_key(|(position, _)| *position);

    let mut refs: Vec<String> = Vec::new();
    for (_, name) in found {
        if !refs.contains(&name) {
            refs.push(name);
        }
    }
    refs
}
