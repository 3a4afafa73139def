//! Closed set of drawable shape kinds.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TimelineError;

/// The shape kinds a timeline can animate.
///
/// The set is closed: every kind dispatch in the store, the sampler, and
/// the exporters is an exhaustive match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Rectangle,
    Ellipse,
    Circle,
}

impl ShapeKind {
    /// Lowercase name as it appears in animation descriptions and the
    /// textual dump.
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::Rectangle => "rectangle",
            ShapeKind::Ellipse => "ellipse",
            ShapeKind::Circle => "circle",
        }
    }

    /// SVG element tag for this kind.
    pub fn svg_tag(&self) -> &'static str {
        match self {
            ShapeKind::Rectangle => "rect",
            ShapeKind::Ellipse => "ellipse",
            ShapeKind::Circle => "circle",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShapeKind {
    type Err = TimelineError;

    /// Parse a kind name case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "rectangle" => Ok(ShapeKind::Rectangle),
            "ellipse" => Ok(ShapeKind::Ellipse),
            "circle" => Ok(ShapeKind::Circle),
            _ => Err(TimelineError::UnsupportedShapeKind {
                kind: s.to_string(),
            }),
        }
    }
}
