//! Layer records — the normalized output of composition.
//!
//! Layers are pure derived values: every normalization call yields a fresh
//! list, and the presentation side only ever reads them.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// ── LayerKind ─────────────────────────────────────────────────────────────

/// The configuration facet a layer describes.
///
/// Variant order is the display order of the layer list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayerKind {
    /// The effective system prompt (never editable downstream).
    Immutable,
    /// User-level memory file.
    Global,
    /// Project-level memory file.
    Project,
    /// Session hook settings.
    Hook,
    /// Enabled plugin summary.
    Plugin,
    /// MCP server configuration.
    Mcp,
    /// Advertised tool definitions.
    Tools,
}

impl std::fmt::Display for LayerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Immutable => write!(f, "immutable"),
            Self::Global => write!(f, "global"),
            Self::Project => write!(f, "project"),
            Self::Hook => write!(f, "hook"),
            Self::Plugin => write!(f, "plugin"),
            Self::Mcp => write!(f, "mcp"),
            Self::Tools => write!(f, "tools"),
        }
    }
}

// ── Layer ─────────────────────────────────────────────────────────────────

/// One displayable facet of the effective configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Layer {
    /// Stable key, unique within one normalization result.
    pub id: String,

    /// Which facet this is.
    #[serde(rename = "type")]
    pub kind: LayerKind,

    /// Display title (fixed per kind).
    pub title: String,

    /// Display subtitle (fixed per kind, or resolver/count output).
    pub subtitle: String,

    /// Display badge (fixed per kind).
    pub badge: String,

    /// Origin file path, when the facet came from a file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    /// Text body: plain text, or JSON-formatted text when `is_json` is set.
    pub content: String,

    /// Whether downstream UI should allow in-place edits.
    pub editable: bool,

    /// Whether `content` is pretty-printed JSON.
    #[serde(default)]
    pub is_json: bool,

    /// Referenced file names, deduplicated, in first-seen order.
    /// Only populated for memory layers.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub file_refs: Vec<String>,
}

/// The result of normalizing one snapshot: top-level metadata passed
/// through verbatim plus the ordered layer list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NormalizedView {
    #[serde(default)]
    pub metadata: Map<String, Value>,

    #[serde(default)]
    pub layers: Vec<Layer>,
}
