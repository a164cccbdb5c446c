//! Snapshot data model — the raw configuration tree captured from an
//! assistant installation at one point in time.
//!
//! The JSON shape is a contract with the acquisition side (camelCase keys,
//! every section optional). Map-valued fields preserve the snapshot's own
//! declaration order because that order is visible in rendered layer
//! content and in the enabled-plugin listing.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The full raw configuration state for one load.
///
/// Held read-only by the normalizer for the lifetime of a composition call
/// and replaced as a whole value, never mutated in place.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    /// The assistant's built-in system prompt file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system_prompt: Option<PromptFile>,

    /// User-level memory file, shared across projects.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub global_memory: Option<PromptFile>,

    /// Project-level memory file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_memory: Option<PromptFile>,

    /// Hook, plugin, and MCP server settings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings: Option<Settings>,

    /// Catalogue of installed plugin versions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub installed_plugins: Option<InstalledPlugins>,

    /// Tool definitions advertised by the assistant.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tools_array: Option<Vec<ToolEntry>>,

    /// Output style catalogue and the declared active style.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_styles: Option<OutputStyles>,

    /// Opaque metadata, copied verbatim into the normalized view.
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub metadata: Map<String, Value>,
}

/// A single configuration file: the system prompt or a memory file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PromptFile {
    /// Whether the file existed when the snapshot was captured.
    #[serde(default)]
    pub exists: bool,

    /// Origin path on the captured machine.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    /// File content (empty when the file did not exist).
    #[serde(default)]
    pub content: String,
}

/// Hook, plugin, and MCP server settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Hook name → hook configuration, passed through as raw JSON.
    #[serde(default)]
    pub hooks: Map<String, Value>,

    /// Plugin name → enabled flag, in declaration order.
    #[serde(default)]
    pub enabled_plugins: IndexMap<String, bool>,

    /// MCP server name → server configuration, passed through as raw JSON.
    #[serde(default)]
    pub mcp_servers: Map<String, Value>,
}

impl Settings {
    /// Names of plugins whose enabled flag is `true`, in declaration order.
    pub fn enabled_plugin_names(&self) -> Vec<String> {
        self.enabled_plugins
            .iter()
            .filter(|(_, enabled)| **enabled)
            .map(|(name, _)| name.clone())
            .collect()
    }
}

/// Catalogue of installed plugin versions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InstalledPlugins {
    /// Plugin name → install records, most recent first.
    #[serde(default)]
    pub plugins: IndexMap<String, Vec<PluginRecord>>,
}

/// One installed version of a plugin.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PluginRecord {
    #[serde(default)]
    pub version: String,

    /// Install timestamp, preserved verbatim from the snapshot.
    #[serde(default)]
    pub installed_at: String,

    #[serde(default)]
    pub install_path: String,
}

/// One tool definition from the assistant's tool array.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolEntry {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_schema: Option<ToolSchema>,
}

/// The parameter-schema subset the tools formatter cares about.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ToolSchema {
    /// Property name → JSON Schema fragment, in declaration order.
    #[serde(default)]
    pub properties: Map<String, Value>,

    /// Names of required properties.
    #[serde(default)]
    pub required: Vec<String>,
}

/// Output style catalogue and the declared active style.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputStyles {
    /// Style id → style definition. Keys are case-sensitive as stored;
    /// resolution looks them up case-insensitively.
    #[serde(default)]
    pub all: IndexMap<String, OutputStyle>,

    /// The style the assistant itself declares active, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_name: Option<String>,
}

/// A single output style: markdown with optional front matter.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputStyle {
    #[serde(default)]
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_object_deserializes_to_all_absent() {
        let snapshot: Snapshot = serde_json::from_value(json!({})).unwrap();
        assert!(snapshot.system_prompt.is_none());
        assert!(snapshot.global_memory.is_none());
        assert!(snapshot.settings.is_none());
        assert!(snapshot.tools_array.is_none());
        assert!(snapshot.output_styles.is_none());
        assert!(snapshot.metadata.is_empty());
    }

    #[test]
    fn camel_case_keys_map_to_sections() {
        let snapshot: Snapshot = serde_json::from_value(json!({
            "systemPrompt": { "exists": true, "path": "/prompt.md", "content": "Base" },
            "projectMemory": { "exists": false },
            "outputStyles": { "all": {}, "activeName": "Concise" },
            "metadata": { "capturedFrom": "workstation" }
        }))
        .unwrap();

        let prompt = snapshot.system_prompt.unwrap();
        assert!(prompt.exists);
        assert_eq!(prompt.path.as_deref(), Some("/prompt.md"));
        assert_eq!(prompt.content, "Base");
        assert!(!snapshot.project_memory.unwrap().exists);
        assert_eq!(
            snapshot.output_styles.unwrap().active_name.as_deref(),
            Some("Concise")
        );
        assert_eq!(snapshot.metadata["capturedFrom"], json!("workstation"));
    }

    #[test]
    fn enabled_plugin_names_preserve_order_and_skip_disabled() {
        let settings: Settings = serde_json::from_value(json!({
            "enabledPlugins": { "zeta": true, "alpha": false, "mid": true }
        }))
        .unwrap();
        assert_eq!(settings.enabled_plugin_names(), vec!["zeta", "mid"]);
    }

    #[test]
    fn plugin_records_keep_timestamp_verbatim() {
        let installed: InstalledPlugins = serde_json::from_value(json!({
            "plugins": {
                "fmt": [
                    { "version": "2.0.0", "installedAt": "2025-06-01T09:30:00.000Z", "installPath": "/plugins/fmt" }
                ]
            }
        }))
        .unwrap();
        let record = &installed.plugins["fmt"][0];
        assert_eq!(record.installed_at, "2025-06-01T09:30:00.000Z");
        assert_eq!(record.install_path, "/plugins/fmt");
    }
}
