//! Output-style resolution — front-matter parsing and prompt merging.
//!
//! A style's content is markdown with optional front matter:
//!
//! ```text
//! ---
//! name: Concise
//! keep-coding-instructions: true
//! ---
//! Respond in at most three sentences.
//! ```
//!
//! The front-matter scanner is deliberately minimal: flat `key: value`
//! lines, with boolean coercion only for the literal tokens `true` and
//! `false`. Anything richer than that is out of scope.

use std::collections::HashMap;

use contextlens_core::snapshot::OutputStyles;
use regex_lite::Regex;
use tracing::debug;

/// Fixed subtitle when no output style modifies the base prompt.
pub const BUILTIN_SUBTITLE: &str = "Built-in";

// ── Types ─────────────────────────────────────────────────────────────────

/// A coerced front-matter value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetaValue {
    Bool(bool),
    Text(String),
}

impl MetaValue {
    /// True only for a coerced boolean `true`.
    pub fn is_true(&self) -> bool {
        matches!(self, MetaValue::Bool(true))
    }
}

/// A style split into front-matter metadata and trimmed body.
#[derive(Debug, Clone, Default)]
pub struct ParsedStyle {
    pub metadata: HashMap<String, MetaValue>,
    pub body: String,
}

/// The resolver's output: the effective system prompt text and a
/// human-readable subtitle describing what happened to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPrompt {
    pub text: String,
    pub subtitle: String,
}

// ── Resolution ────────────────────────────────────────────────────────────

/// Resolve the effective system prompt text.
///
/// Identifier precedence: the explicit override, then the snapshot's
/// declared active name. An unresolved or unknown identifier is a silent
/// no-op — a stale style id must never break the base prompt.
pub fn resolve(
    base_prompt: &str,
    styles: Option<&OutputStyles>,
    override_id: Option<&str>,
) -> ResolvedPrompt {
    let fallback = || ResolvedPrompt {
        text: base_prompt.to_string(),
        subtitle: BUILTIN_SUBTITLE.to_string(),
    };

    let Some(styles) = styles else {
        return fallback();
    };
    let Some(selected) = override_id
        .map(str::to_string)
        .or_else(|| styles.active_name.clone())
    else {
        return fallback();
    };

    // Case-insensitive lookup against the catalogue's case-sensitive keys.
    let Some(style) = styles
        .all
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(&selected))
        .map(|(_, style)| style)
    else {
        debug!(style = %selected, "selected output style not in catalogue, keeping base prompt");
        return fallback();
    };

    let parsed = parse_front_matter(&style.content);
    let name = display_name(&style.content).unwrap_or(selected);

    if parsed
        .metadata
        .get("keep-coding-instructions")
        .is_some_and(MetaValue::is_true)
    {
        // Style is prepended; the base prompt is retained after it.
        ResolvedPrompt {
            text: format!("{}\n\n{}", parsed.body, base_prompt),
            subtitle: format!("Modified by {name}"),
        }
    } else {
        // Style replaces the base prompt entirely.
        let text = if parsed.body.is_empty() {
            style.content.clone()
        } else {
            parsed.body
        };
        ResolvedPrompt {
            text,
            subtitle: format!("Replaced by {name}"),
        }
    }
}

// ── Front matter ──────────────────────────────────────────────────────────

/// A delimiter line is `---` with optional trailing whitespace.
fn is_delimiter(line: &str) -> bool {
    line.strip_prefix("---")
        .is_some_and(|rest| rest.trim().is_empty())
}

/// Split style content into front-matter metadata and body.
///
/// The two-delimiter shape is required: an opening `---` on the first
/// line and a closing `---` line further down. Content without that shape
/// degrades to empty metadata with the whole content as body — malformed
/// front matter is recovered here, never surfaced as an error.
pub fn parse_front_matter(content: &str) -> ParsedStyle {
    let lines: Vec<&str> = content.lines().collect();

    let closing = if lines.first().copied().is_some_and(is_delimiter) {
        lines
            .iter()
            .skip(1)
            .position(|line| is_delimiter(line))
            .map(|offset| offset + 1)
    } else {
        None
    };

    let Some(closing) = closing else {
        debug!("style content has no front matter, treating whole content as body");
        return ParsedStyle {
            metadata: HashMap::new(),
            body: content.to_string(),
        };
    };

    let mut metadata = HashMap::new();
    for line in &lines[1..closing] {
        if let Some((key, value)) = parse_meta_line(line) {
            metadata.insert(key, value);
        }
    }

    ParsedStyle {
        metadata,
        body: lines[closing + 1..].join("\n").trim().to_string(),
    }
}

/// Parse one `key: value` front-matter line.
///
/// Keys start with a word character and continue with word characters or
/// hyphens. Lines with an empty value, or anything else that does not fit
/// the shape, are skipped.
fn parse_meta_line(line: &str) -> Option<(String, MetaValue)> {
    let (key, value) = line.split_once(':')?;
    let key = key.trim();
    let value = value.trim();
    if key.is_empty() || value.is_empty() {
        return None;
    }

    let mut chars = key.chars();
    let first = chars.next()?;
    if !(first.is_alphanumeric() || first == '_') {
        return None;
    }
    if !chars.all(|c| c.is_alphanumeric() || c == '_' || c == '-') {
        return None;
    }

    let value = match value {
        "true" => MetaValue::Bool(true),
        "false" => MetaValue::Bool(false),
        other => MetaValue::Text(other.to_string()),
    };
    Some((key.to_string(), value))
}

/// Extract the display name declared on the first non-blank line of the
/// front-matter block, if any.
pub fn display_name(content: &str) -> Option<String> {
    let mut lines = content.lines();
    if !is_delimiter(lines.next()?) {
        return None;
    }
    let line = lines.find(|line| !line.trim().is_empty())?;
    if is_delimiter(line) {
        return None;
    }

    let re = Regex::new(r"name:\s*(.+)").ok()?;
    let captures = re.captures(line)?;
    Some(captures.get(1)?.as_str().trim().to_string())
}

// ── Tests ─────────────────────────────────────────────────────────────────
