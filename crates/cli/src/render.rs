//! Terminal rendering of the normalized layer view.
//!
//! One card per layer: a header with title, badge, subtitle, and origin
//! path, then the content body behind a line-number gutter. Memory layers
//! list their extracted file references below the body. The renderer only
//! ever reads the view.

use contextlens_core::{Layer, NormalizedView};

/// Shown when no snapshot could be acquired or it produced no layers.
pub const EMPTY_STATE: &str =
    "No context data loaded.\nProvide a snapshot file or URL to view its layer composition.";

/// Render the full view.
pub fn render_view(view: &NormalizedView) -> String {
    if view.layers.is_empty() {
        return format!("{EMPTY_STATE}\n");
    }

    let mut out = String::new();
    for layer in &view.layers {
        out.push_str(&render_layer(layer));
        out.push('\n');
    }
    out
}

fn render_layer(layer: &Layer) -> String {
    let mut out = String::new();
    out.push_str(&format!("=== {} [{}] ===\n", layer.title, layer.badge));
    if !layer.subtitle.is_empty() {
        out.push_str(&format!("{}\n", layer.subtitle));
    }
    if let Some(path) = &layer.path {
        out.push_str(&format!("source: {path}\n"));
    }
    out.push('\n');

    if layer.content.is_empty() {
        out.push_str("(no content)\n");
    } else {
        for (number, line) in layer.content.lines().enumerate() {
            out.push_str(&format!("{:>4} | {}\n", number + 1, line));
        }
    }

    if !layer.file_refs.is_empty() {
        out.push_str(&format!("\nfile references: {}\n", layer.file_refs.join(", ")));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use contextlens_core::LayerKind;

    fn layer(content: &str, file_refs: Vec<String>) -> Layer {
        Layer {
            id: "project-memory".into(),
            kind: LayerKind::Project,
            title: "Project Memory".into(),
            subtitle: "Project memory file".into(),
            badge: "Project".into(),
            path: Some("/repo/MEMORY.md".into()),
            content: content.into(),
            editable: true,
            is_json: false,
            file_refs,
        }
    }

    #[test]
    fn empty_view_renders_empty_state() {
        let rendered = render_view(&NormalizedView::default());
        assert!(rendered.contains("No context data loaded."));
    }

    #[test]
    fn gutter_matches_content_line_count() {
        let view = NormalizedView {
            metadata: Default::default(),
            layers: vec![layer("one\ntwo\nthree", Vec::new())],
        };
        let rendered = render_view(&view);
        assert!(rendered.contains("   1 | one"));
        assert!(rendered.contains("   3 | three"));
        assert!(!rendered.contains("   4 |"));
    }

    #[test]
    fn header_carries_title_badge_subtitle_and_path() {
        let view = NormalizedView {
            metadata: Default::default(),
            layers: vec![layer("body", Vec::new())],
        };
        let rendered = render_view(&view);
        assert!(rendered.contains("=== Project Memory [Project] ==="));
        assert!(rendered.contains("Project memory file"));
        assert!(rendered.contains("source: /repo/MEMORY.md"));
    }

    #[test]
    fn file_refs_listed_after_body() {
        let view = NormalizedView {
            metadata: Default::default(),
            layers: vec![layer("see @a.md", vec!["a.md".into()])],
        };
        let rendered = render_view(&view);
        assert!(rendered.contains("file references: a.md"));
    }

    #[test]
    fn empty_content_gets_placeholder() {
        let view = NormalizedView {
            metadata: Default::default(),
            layers: vec![layer("", Vec::new())],
        };
        assert!(render_view(&view).contains("(no content)"));
    }
}
