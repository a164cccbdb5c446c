//! Layer construction — the fixed facet order and presence gates.
//!
//! Facets are evaluated and appended in one fixed order:
//!
//! 1. System prompt (composed under the resolved output style)
//! 2. Global memory
//! 3. Project memory
//! 4. Session hooks
//! 5. Enabled plugins
//! 6. MCP servers
//! 7. Tools
//!
//! A facet that is absent or empty contributes no layer at all — the
//! builder never emits partial or placeholder layers.

use contextlens_core::snapshot::PromptFile;
use contextlens_core::{Layer, LayerKind, Snapshot};
use serde_json::Value;
use tracing::debug;

use crate::{plugins, refs, style, tools};

/// Build the ordered layer list for a snapshot under an optional
/// explicitly-selected output style.
pub fn build_layers(snapshot: &Snapshot, selected_style: Option<&str>) -> Vec<Layer> {
    let mut layers = Vec::new();

    // 1. System prompt
    if let Some(prompt) = snapshot.system_prompt.as_ref().filter(|file| file.exists) {
        let resolved = style::resolve(
            &prompt.content,
            snapshot.output_styles.as_ref(),
            selected_style,
        );
        layers.push(Layer {
            id: "system-prompt".into(),
            kind: LayerKind::Immutable,
            title: "System Prompt".into(),
            subtitle: resolved.subtitle,
            badge: "Immutable".into(),
            path: prompt.path.clone(),
            content: resolved.text,
            editable: false,
            is_json: false,
            file_refs: Vec::new(),
        });
    }

    // 2. Global memory
    if let Some(memory) = snapshot.global_memory.as_ref().filter(|file| file.exists) {
        layers.push(memory_layer(
            memory,
            LayerKind::Global,
            "global-memory",
            "Global Memory",
            "User-level memory file",
            "Global",
        ));
    }

    // 3. Project memory
    if let Some(memory) = snapshot.project_memory.as_ref().filter(|file| file.exists) {
        layers.push(memory_layer(
            memory,
            LayerKind::Project,
            "project-memory",
            "Project Memory",
            "Project memory file",
            "Project",
        ));
    }

    if let Some(settings) = &snapshot.settings {
        // 4. Session hooks
        if !settings.hooks.is_empty() {
            layers.push(Layer {
                id: "hooks".into(),
                kind: LayerKind::Hook,
                title: "Session Hooks".into(),
                subtitle: "Session hook settings".into(),
                badge: "Hooks".into(),
                path: None,
                content: pretty_json(&Value::Object(settings.hooks.clone())),
                editable: true,
                is_json: true,
                file_refs: Vec::new(),
            });
        }

        // 5. Enabled plugins
        let enabled = settings.enabled_plugin_names();
        if !enabled.is_empty() {
            layers.push(Layer {
                id: "plugins".into(),
                kind: LayerKind::Plugin,
                title: "Enabled Plugins".into(),
                subtitle: format!("{} active", enabled.len()),
                badge: "Plugins".into(),
                path: None,
                content: plugins::summarize(snapshot.installed_plugins.as_ref(), &enabled),
                editable: false,
                is_json: true,
                file_refs: Vec::new(),
            });
        }

        // 6. MCP servers
        if !settings.mcp_servers.is_empty() {
            layers.push(Layer {
                id: "mcp-servers".into(),
                kind: LayerKind::Mcp,
                title: "MCP Servers".into(),
                subtitle: format!("{} configured", settings.mcp_servers.len()),
                badge: "MCP".into(),
                path: None,
                content: pretty_json(&Value::Object(settings.mcp_servers.clone())),
                editable: true,
                is_json: true,
                file_refs: Vec::new(),
            });
        }
    }

    // 7. Tools
    if let Some(tools_array) = snapshot.tools_array.as_ref().filter(|list| !list.is_empty()) {
        layers.push(Layer {
            id: "tools-array".into(),
            kind: LayerKind::Tools,
            title: "Tools".into(),
            subtitle: format!("{} available tools", tools_array.len()),
            badge: "Tools".into(),
            path: None,
            content: tools::format_tools(tools_array),
            editable: false,
            is_json: false,
            file_refs: Vec::new(),
        });
    }

    debug!(layer_count = layers.len(), "layer list built");
    layers
}

fn memory_layer(
    file: &PromptFile,
    kind: LayerKind,
    id: &str,
    title: &str,
    subtitle: &str,
    badge: &str,
) -> Layer {
    Layer {
        id: id.into(),
        kind,
        title: title.into(),
        subtitle: subtitle.into(),
        badge: badge.into(),
        path: file.path.clone(),
        content: file.content.clone(),
        editable: true,
        is_json: false,
        file_refs: refs::extract(&file.content),
    }
}

fn pretty_json(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn snapshot(value: serde_json::Value) -> Snapshot {
        serde_json::from_value(value).unwrap()
    }

    fn full_snapshot() -> Snapshot {
        snapshot(json!({
            "systemPrompt": { "exists": true, "path": "/sys/prompt.md", "content": "Base prompt" },
            "globalMemory": { "exists": true, "path": "/home/u/MEMORY.md", "content": "use @house-style.md" },
            "projectMemory": { "exists": true, "path": "/repo/MEMORY.md", "content": "see `runbook.md`" },
            "settings": {
                "hooks": { "pre-commit": { "command": "lint" } },
                "enabledPlugins": { "fmt": true, "lint": false },
                "mcpServers": { "search": { "port": 7700 } }
            },
            "installedPlugins": {
                "plugins": {
                    "fmt": [{ "version": "1.2.3", "installedAt": "2025-05-01T00:00:00Z", "installPath": "/p/fmt" }]
                }
            },
            "toolsArray": [
                { "name": "shell", "description": "Run a command." }
            ]
        }))
    }

    #[test]
    fn full_snapshot_yields_all_facets_in_order() {
        let layers = build_layers(&full_snapshot(), None);
        let kinds: Vec<LayerKind> = layers.iter().map(|layer| layer.kind).collect();
        assert_eq!(
            kinds,
            vec![
                LayerKind::Immutable,
                LayerKind::Global,
                LayerKind::Project,
                LayerKind::Hook,
                LayerKind::Plugin,
                LayerKind::Mcp,
                LayerKind::Tools,
            ]
        );
    }

    #[test]
    fn layer_ids_are_stable() {
        let layers = build_layers(&full_snapshot(), None);
        let ids: Vec<&str> = layers.iter().map(|layer| layer.id.as_str()).collect();
        assert_eq!(
            ids,
            vec![
                "system-prompt",
                "global-memory",
                "project-memory",
                "hooks",
                "plugins",
                "mcp-servers",
                "tools-array",
            ]
        );
    }

    #[test]
    fn absent_facets_produce_no_layers() {
        let layers = build_layers(&snapshot(json!({})), None);
        assert!(layers.is_empty());
    }

    #[test]
    fn nonexistent_files_are_gated_out() {
        let layers = build_layers(
            &snapshot(json!({
                "systemPrompt": { "exists": false, "content": "hidden" },
                "projectMemory": { "exists": false }
            })),
            None,
        );
        assert!(layers.is_empty());
    }

    #[test]
    fn all_disabled_plugins_produce_no_plugin_layer() {
        let layers = build_layers(
            &snapshot(json!({
                "settings": { "enabledPlugins": { "fmt": false, "lint": false } }
            })),
            None,
        );
        assert!(layers.is_empty());
    }

    #[test]
    fn empty_tools_array_produces_no_layer() {
        let layers = build_layers(&snapshot(json!({ "toolsArray": [] })), None);
        assert!(layers.is_empty());
    }

    #[test]
    fn memory_layers_carry_file_refs_and_paths() {
        let layers = build_layers(&full_snapshot(), None);
        let global = layers.iter().find(|l| l.kind == LayerKind::Global).unwrap();
        assert_eq!(global.file_refs, vec!["house-style.md"]);
        assert_eq!(global.path.as_deref(), Some("/home/u/MEMORY.md"));
        assert!(global.editable);

        let project = layers.iter().find(|l| l.kind == LayerKind::Project).unwrap();
        assert_eq!(project.file_refs, vec!["runbook.md"]);
    }

    #[test]
    fn json_facets_pretty_print_and_count() {
        let layers = build_layers(&full_snapshot(), None);

        let hooks = layers.iter().find(|l| l.kind == LayerKind::Hook).unwrap();
        assert!(hooks.is_json);
        let parsed: serde_json::Value = serde_json::from_str(&hooks.content).unwrap();
        assert_eq!(parsed["pre-commit"]["command"], json!("lint"));

        let plugins = layers.iter().find(|l| l.kind == LayerKind::Plugin).unwrap();
        assert_eq!(plugins.subtitle, "1 active");

        let mcp = layers.iter().find(|l| l.kind == LayerKind::Mcp).unwrap();
        assert_eq!(mcp.subtitle, "1 configured");

        let tools = layers.iter().find(|l| l.kind == LayerKind::Tools).unwrap();
        assert_eq!(tools.subtitle, "1 available tools");
    }

    #[test]
    fn system_prompt_uses_resolver_output() {
        let mut base = full_snapshot();
        base.output_styles = serde_json::from_value(json!({
            "all": { "Concise": { "content": "---\nname: Concise\n---\nBe brief." } },
            "activeName": "Concise"
        }))
        .ok();
        let layers = build_layers(&base, None);
        let system = &layers[0];
        assert_eq!(system.content, "Be brief.");
        assert_eq!(system.subtitle, "Replaced by Concise");
        assert!(!system.editable);
    }
}
