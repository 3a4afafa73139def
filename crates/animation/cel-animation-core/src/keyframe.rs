//! Keyframe: an immutable snapshot of a shape's visual state at one tick.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TimelineError};

/// A complete visual snapshot pinned to one tick: center position, size,
/// and RGB color.
///
/// Construction goes through [`Keyframe::new`], which validates every
/// field, so a keyframe in hand is always well-formed. Equality and
/// hashing are structural over all eight fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Keyframe {
    tick: u32,
    x: i32,
    y: i32,
    width: i32,
    height: i32,
    red: i32,
    green: i32,
    blue: i32,
}

impl Keyframe {
    /// Build a keyframe, rejecting non-positive dimensions and color
    /// channels outside `[0, 255]`.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        tick: u32,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        red: i32,
        green: i32,
        blue: i32,
    ) -> Result<Self> {
        for (field, value) in [("red", red), ("green", green), ("blue", blue)] {
            if !(0..=255).contains(&value) {
                return Err(TimelineError::InvalidKeyframe {
                    field: field.to_string(),
                    value,
                });
            }
        }
        for (field, value) in [("width", width), ("height", height)] {
            if value < 1 {
                return Err(TimelineError::InvalidKeyframe {
                    field: field.to_string(),
                    value,
                });
            }
        }
        Ok(Self {
            tick,
            x,
            y,
            width,
            height,
            red,
            green,
            blue,
        })
    }

    // Interpolated snapshots blend field-wise between two valid
    // keyframes, so their fields are in range by construction.
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn from_parts(
        tick: u32,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        red: i32,
        green: i32,
        blue: i32,
    ) -> Self {
        Self {
            tick,
            x,
            y,
            width,
            height,
            red,
            green,
            blue,
        }
    }

    pub fn tick(&self) -> u32 {
        self.tick
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn red(&self) -> i32 {
        self.red
    }

    pub fn green(&self) -> i32 {
        self.green
    }

    pub fn blue(&self) -> i32 {
        self.blue
    }

    /// True when the position group (x, y) differs from `other`.
    pub fn moves_from(&self, other: &Keyframe) -> bool {
        self.x != other.x || self.y != other.y
    }

    /// True when the size group (width, height) differs from `other`.
    pub fn resizes_from(&self, other: &Keyframe) -> bool {
        self.width != other.width || self.height != other.height
    }

    /// True when the color group (red, green, blue) differs from `other`.
    pub fn recolors_from(&self, other: &Keyframe) -> bool {
        self.red != other.red || self.green != other.green || self.blue != other.blue
    }
}
