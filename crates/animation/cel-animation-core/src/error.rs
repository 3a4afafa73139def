//! Error types for the timeline core.

use serde::{Deserialize, Serialize};

/// Errors surfaced by timeline mutations and queries.
///
/// Every failure is local and synchronous, and a rejected mutation
/// leaves the store exactly as it was before the call.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum TimelineError {
    /// Keyframe field outside its valid range
    #[error("invalid keyframe {field}: {value} is out of range")]
    InvalidKeyframe { field: String, value: i32 },

    /// Non-positive canvas dimension
    #[error("canvas {dimension} must be positive, got {value}")]
    InvalidDimension { dimension: String, value: i32 },

    /// Shape kind outside the supported set
    #[error("unsupported shape kind: {kind:?}")]
    UnsupportedShapeKind { kind: String },

    /// Query against a shape that was never declared
    #[error("unknown shape: {name:?}")]
    UnknownShape { name: String },

    /// Two keyframes at the same tick with conflicting attributes
    #[error("overlapping keyframes for {name:?} at tick {tick}")]
    OverlappingKeyframe { name: String, tick: u32 },

    /// A required shape name was empty
    #[error("shape name must not be empty")]
    EmptyShapeName,

    /// Edit against a tick that holds no keyframe
    #[error("no keyframe for {name:?} at tick {tick}")]
    KeyframeNotFound { name: String, tick: u32 },
}

/// Timeline result type
pub type Result<T> = std::result::Result<T, TimelineError>;
