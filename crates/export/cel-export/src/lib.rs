//! cel-export: deterministic timeline documents.
//!
//! Two independent renderers over a [`cel_animation_core::TimelineStore`]:
//! a line-oriented tabular dump and an SVG animation document. Both walk
//! the store's public query API only, emit segment-level descriptions
//! (never per-tick snapshots), and are byte-for-byte stable for a given
//! store.

pub mod svg;
pub mod textual;

pub use svg::{SvgExporter, SvgQuirks};
pub use textual::TextualExporter;

/// Errors produced while setting up an export document.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExportError {
    /// Tick rate must be at least one tick per second
    #[error("ticks per second must be positive, got {rate}")]
    NonPositiveRate { rate: u32 },
}
