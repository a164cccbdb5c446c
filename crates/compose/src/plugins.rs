//! Enabled-plugin summarization.

use contextlens_core::snapshot::InstalledPlugins;
use serde_json::{Map, Value, json};

/// Describe the enabled plugins as pretty-printed JSON.
///
/// With an installed-plugins catalogue available, each enabled name maps to
/// its most-recently-installed record. Enabled names with no catalogue
/// entry are silently omitted. Without a catalogue the summary degrades to
/// the bare enabled-name list.
pub fn summarize(installed: Option<&InstalledPlugins>, enabled: &[String]) -> String {
    let Some(installed) = installed else {
        return pretty(&json!({ "enabled": enabled }));
    };

    let mut info = Map::new();
    for name in enabled {
        let Some(latest) = installed.plugins.get(name).and_then(|records| records.first()) else {
            continue;
        };
        info.insert(
            name.clone(),
            json!({
                "version": latest.version,
                "installedAt": latest.installed_at,
                "path": latest.install_path,
            }),
        );
    }
    pretty(&Value::Object(info))
}

fn pretty(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_default()
}
