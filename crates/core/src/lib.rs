//! # Contextlens Core
//!
//! Domain types and error definitions for the contextlens configuration
//! inspector. This crate has **zero framework dependencies** — it defines
//! the data model that the composition engine and the CLI build against.
//!
//! A [`Snapshot`] is the raw configuration tree captured from an assistant
//! installation at one point in time; a [`Layer`] is one displayable facet
//! of the effective configuration derived from it. All derivation rules
//! live in the `contextlens-compose` crate — this crate only says what the
//! data *is*, so absence of a section is a modeled state (`Option`), never
//! an implicit runtime no-op.

pub mod error;
pub mod layer;
pub mod snapshot;

// Re-export key types at crate root for ergonomics
pub use error::{Error, Result};
pub use layer::{Layer, LayerKind, NormalizedView};
pub use snapshot::{
    InstalledPlugins, OutputStyle, OutputStyles, PluginRecord, PromptFile, Settings, Snapshot,
    ToolEntry, ToolSchema,
};
