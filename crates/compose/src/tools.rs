//! Tools-array formatting into a readable text document.

use contextlens_core::snapshot::ToolEntry;

/// Sentinel returned for an empty tools array.
pub const NO_TOOLS: &str = "No tools available";

/// Render the tools array as a numbered text document.
///
/// Each section carries the tool name, the first paragraph of its
/// description, and a parameter listing where `*` marks required names.
pub fn format_tools(tools: &[ToolEntry]) -> String {
    if tools.is_empty() {
        return NO_TOOLS.to_string();
    }

    let mut out = String::from("# Available Tools\n\n");
    for (index, tool) in tools.iter().enumerate() {
        out.push_str(&format!("## {}. {}\n\n", index + 1, tool.name));

        if let Some(description) = &tool.description {
            let first_paragraph = match description.split_once("\n\n") {
                Some((first, _)) => first,
                None => description,
            };
            out.push_str(first_paragraph);
            out.push_str("\n\n");
        }

        if let Some(schema) = &tool.input_schema {
            if !schema.properties.is_empty() {
                let params: Vec<String> = schema
                    .properties
                    .keys()
                    .map(|name| {
                        if schema.required.iter().any(|required| required == name) {
                            format!("{name}*")
                        } else {
                            name.clone()
                        }
                    })
                    .collect();
                out.push_str(&format!("**Parameters:** {}\n\n", params.join(", ")));
            }
        }

        out.push_str("---\n\n");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn tool(json: serde_json::Value) -> ToolEntry {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn empty_array_yields_sentinel() {
        assert_eq!(format_tools(&[]), NO_TOOLS);
    }

    #[test]
    fn sections_are_numbered_and_separated() {
        let tools = vec![
            tool(json!({ "name": "shell" })),
            tool(json!({ "name": "file_read" })),
        ];
        let doc = format_tools(&tools);
        assert!(doc.starts_with("# Available Tools\n\n"));
        assert!(doc.contains("## 1. shell\n"));
        assert!(doc.contains("## 2. file_read\n"));
        assert_eq!(doc.matches("---\n").count(), 2);
    }

    #[test]
    fn only_first_description_paragraph_is_kept() {
        let tools = vec![tool(json!({
            "name": "web_search",
            "description": "Search the web.\n\nSupports pagination and\nresult filtering."
        }))];
        let doc = format_tools(&tools);
        assert!(doc.contains("Search the web.\n"));
        assert!(!doc.contains("pagination"));
    }

    #[test]
    fn required_parameters_are_starred() {
        let tools = vec![tool(json!({
            "name": "http_request",
            "input_schema": {
                "properties": { "url": {}, "method": {}, "body": {} },
                "required": ["url"]
            }
        }))];
        let doc = format_tools(&tools);
        assert!(doc.contains("**Parameters:** url*, method, body\n"));
    }

    #[test]
    fn missing_description_and_schema_are_skipped() {
        let doc = format_tools(&[tool(json!({ "name": "bare" }))]);
        assert_eq!(doc, "# Available Tools\n\n## 1. bare\n\n---\n\n");
    }
}
