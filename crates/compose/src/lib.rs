//! Snapshot composition engine for contextlens.
//!
//! Consumes a raw configuration [`Snapshot`] plus an optional selected
//! output-style identifier and produces the ordered [`Layer`] list the
//! presentation side displays. This crate owns all precedence and merge
//! rules:
//!
//! 1. Output-style resolution (an explicit override beats the snapshot's
//!    own declared active style; unknown identifiers fall back silently)
//! 2. Layer construction in fixed facet order, each facet gated on presence
//! 3. File-reference extraction from memory file content
//! 4. Plugin and tool summarization
//!
//! # Determinism
//!
//! Composition is synchronous and pure: the same snapshot and selected
//! style always produce the same view. The only state a [`Normalizer`]
//! holds is the cached snapshot and the selected-style override, both
//! replaced as whole values.

pub mod builder;
pub mod plugins;
pub mod refs;
pub mod style;
pub mod tools;

use contextlens_core::{Error, NormalizedView, Result, Snapshot};
use tracing::debug;

pub use style::{ResolvedPrompt, BUILTIN_SUBTITLE};

/// A catalogue entry returned by [`Normalizer::available_output_styles`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleDescriptor {
    /// The catalogue key, case-sensitive as stored.
    pub id: String,
    /// Display name from the style's front matter, or the key itself.
    pub name: String,
}

/// The snapshot normalizer.
///
/// Holds the current snapshot and the explicitly selected output style.
/// Loading a new snapshot clears the selected style; selecting a style
/// re-composes against the cached snapshot without re-acquisition.
#[derive(Debug, Default)]
pub struct Normalizer {
    snapshot: Option<Snapshot>,
    selected_style: Option<String>,
}

impl Normalizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a snapshot, replacing any previous one, and compose it.
    pub fn load(&mut self, snapshot: Snapshot) -> NormalizedView {
        self.selected_style = None;
        let view = compose(&snapshot, None);
        self.snapshot = Some(snapshot);
        view
    }

    /// Re-compose the cached snapshot under a different output style.
    ///
    /// The selection persists across later calls until the snapshot is
    /// replaced. Fails only when nothing has been loaded yet.
    pub fn select_output_style(&mut self, style_id: impl Into<String>) -> Result<NormalizedView> {
        let snapshot = self.snapshot.as_ref().ok_or(Error::NoSnapshotLoaded)?;
        let id = style_id.into();
        let view = compose(snapshot, Some(&id));
        self.selected_style = Some(id);
        Ok(view)
    }

    /// The output styles declared by the current snapshot, in catalogue
    /// order. Empty when no snapshot is loaded or none are declared.
    pub fn available_output_styles(&self) -> Vec<StyleDescriptor> {
        let Some(styles) = self
            .snapshot
            .as_ref()
            .and_then(|snapshot| snapshot.output_styles.as_ref())
        else {
            return Vec::new();
        };

        styles
            .all
            .iter()
            .map(|(id, style)| StyleDescriptor {
                id: id.clone(),
                name: style::display_name(&style.content).unwrap_or_else(|| id.clone()),
            })
            .collect()
    }

    /// The effective active style name: the explicit override if one was
    /// selected, else the snapshot's declared active name.
    pub fn active_output_style_name(&self) -> Option<String> {
        self.selected_style.clone().or_else(|| {
            self.snapshot
                .as_ref()?
                .output_styles
                .as_ref()?
                .active_name
                .clone()
        })
    }

    /// Whether a snapshot is currently cached.
    pub fn has_snapshot(&self) -> bool {
        self.snapshot.is_some()
    }
}

/// Compose a snapshot into a normalized view without touching any state.
pub fn compose(snapshot: &Snapshot, selected_style: Option<&str>) -> NormalizedView {
    debug!(style = ?selected_style, "composing snapshot");
    NormalizedView {
        metadata: snapshot.metadata.clone(),
        layers: builder::build_layers(snapshot, selected_style),
    }
}
