//! cel animation core (engine-agnostic)
//!
//! The timeline model behind the cel editor: validated keyframes, the
//! declaration-ordered shape store with its ordering/overlap invariants,
//! tick interpolation, and the builder/edit entry points the outer
//! presentation and parsing layers drive.

pub mod builder;
pub mod commands;
pub mod error;
pub mod keyframe;
pub mod sampling;
pub mod shape;
pub mod store;

// Re-exports for consumers (exporters, controllers)
pub use builder::{KeyframeFields, TimelineBuilder};
pub use commands::EditCommand;
pub use error::{Result, TimelineError};
pub use keyframe::Keyframe;
pub use sampling::{sample_keyframes, state_at};
pub use shape::ShapeKind;
pub use store::{Canvas, TimelineStore};
