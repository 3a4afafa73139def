//! Timeline store: the sole mutable state of the animation core.
//!
//! Shapes live in an insertion-ordered map, so iteration follows
//! declaration order. Each entry pairs the kind tag with its
//! tick-ordered keyframe list in one value, so the two can never drift
//! apart. Mutations either commit whole or reject without touching the
//! store.

use indexmap::IndexMap;
use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::error::{Result, TimelineError};
use crate::keyframe::Keyframe;
use crate::shape::ShapeKind;

/// Global drawing bounds shared by every shape: a signed offset plus
/// positive pixel dimensions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Canvas {
    x: i32,
    y: i32,
    width: i32,
    height: i32,
}

impl Default for Canvas {
    fn default() -> Self {
        Self {
            x: 0,
            y: 0,
            width: 500,
            height: 500,
        }
    }
}

impl Canvas {
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
}

/// Kind tag plus tick-ordered keyframes for one declared shape.
#[derive(Clone, Debug, PartialEq, Eq)]
struct ShapeEntry {
    kind: ShapeKind,
    frames: Vec<Keyframe>,
}

/// Declaration-ordered map of shapes with their keyframe timelines,
/// plus the shared canvas.
#[derive(Clone, Debug, Default)]
pub struct TimelineStore {
    shapes: IndexMap<String, ShapeEntry>,
    canvas: Canvas,
}

impl TimelineStore {
    /// Empty store with the default 500x500 canvas at origin.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare (or re-declare) a shape.
    ///
    /// Re-declaring an existing name resets its keyframes and keeps its
    /// original position in declaration order.
    pub fn declare_shape(&mut self, name: &str, kind: ShapeKind) -> Result<()> {
        if name.is_empty() {
            return Err(TimelineError::EmptyShapeName);
        }
        debug!("declare shape {name:?} as {kind}");
        self.shapes.insert(
            name.to_string(),
            ShapeEntry {
                kind,
                frames: Vec::new(),
            },
        );
        Ok(())
    }

    /// Insert a keyframe, keeping the sequence sorted ascending by tick.
    ///
    /// Adding to an undeclared shape is a silent no-op, as is re-adding
    /// a structurally-equal keyframe. A keyframe whose tick collides
    /// with an existing one that differs in position, size, or color is
    /// rejected and the store is left untouched.
    pub fn add_keyframe(&mut self, name: &str, keyframe: Keyframe) -> Result<()> {
        let Some(entry) = self.shapes.get_mut(name) else {
            trace!("ignoring keyframe for undeclared shape {name:?}");
            return Ok(());
        };
        if entry.frames.contains(&keyframe) {
            return Ok(());
        }
        let mut candidate = entry.frames.clone();
        candidate.push(keyframe);
        candidate.sort_by_key(|frame| frame.tick());
        check_overlap(name, &candidate)?;
        trace!("add keyframe to {name:?} at tick {}", keyframe.tick());
        entry.frames = candidate;
        Ok(())
    }

    /// Remove a keyframe by structural equality. Unknown shapes and
    /// absent keyframes are a no-op.
    pub fn remove_keyframe(&mut self, name: &str, keyframe: &Keyframe) {
        if let Some(entry) = self.shapes.get_mut(name) {
            if let Some(pos) = entry.frames.iter().position(|frame| frame == keyframe) {
                trace!("remove keyframe from {name:?} at tick {}", keyframe.tick());
                entry.frames.remove(pos);
            }
        }
    }

    /// Remove a shape together with its timeline, preserving the
    /// declaration order of the remaining shapes. Unknown names are a
    /// no-op.
    pub fn remove_shape(&mut self, name: &str) {
        if self.shapes.shift_remove(name).is_some() {
            debug!("remove shape {name:?}");
        }
    }

    /// Independent copy of a shape's keyframes in tick order; empty when
    /// the shape is unknown.
    pub fn keyframes(&self, name: &str) -> Vec<Keyframe> {
        self.shapes
            .get(name)
            .map(|entry| entry.frames.clone())
            .unwrap_or_default()
    }

    /// Kind tag fixed at declaration time.
    pub fn shape_kind(&self, name: &str) -> Result<ShapeKind> {
        self.shapes
            .get(name)
            .map(|entry| entry.kind)
            .ok_or_else(|| TimelineError::UnknownShape {
                name: name.to_string(),
            })
    }

    /// Declared shape names in declaration order.
    pub fn shape_names(&self) -> impl Iterator<Item = &str> {
        self.shapes.keys().map(String::as_str)
    }

    /// Declared shapes as (name, kind) pairs in declaration order.
    pub fn shapes(&self) -> impl Iterator<Item = (&str, ShapeKind)> {
        self.shapes
            .iter()
            .map(|(name, entry)| (name.as_str(), entry.kind))
    }

    /// Highest tick across every shape's keyframes; 0 when none exist.
    pub fn last_tick(&self) -> u32 {
        self.shapes
            .values()
            .flat_map(|entry| entry.frames.iter())
            .map(Keyframe::tick)
            .max()
            .unwrap_or(0)
    }

    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// Set all four canvas bounds at once; dimensions are validated
    /// before anything is assigned.
    pub fn set_bounds(&mut self, x: i32, y: i32, width: i32, height: i32) -> Result<()> {
        check_dimension("width", width)?;
        check_dimension("height", height)?;
        self.canvas = Canvas {
            x,
            y,
            width,
            height,
        };
        Ok(())
    }

    pub fn set_x(&mut self, x: i32) {
        self.canvas.x = x;
    }

    pub fn set_y(&mut self, y: i32) {
        self.canvas.y = y;
    }

    pub fn set_width(&mut self, width: i32) -> Result<()> {
        check_dimension("width", width)?;
        self.canvas.width = width;
        Ok(())
    }

    pub fn set_height(&mut self, height: i32) -> Result<()> {
        check_dimension("height", height)?;
        self.canvas.height = height;
        Ok(())
    }
}

// Rejects a sequence holding two same-tick keyframes that disagree on
// any attribute group. The sequence is sorted, so colliding ticks are
// adjacent.
fn check_overlap(name: &str, frames: &[Keyframe]) -> Result<()> {
    for pair in frames.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        if a.tick() == b.tick()
            && (a.moves_from(b) || a.resizes_from(b) || a.recolors_from(b))
        {
            return Err(TimelineError::OverlappingKeyframe {
                name: name.to_string(),
                tick: a.tick(),
            });
        }
    }
    Ok(())
}

fn check_dimension(dimension: &str, value: i32) -> Result<()> {
    if value < 1 {
        return Err(TimelineError::InvalidDimension {
            dimension: dimension.to_string(),
            value,
        });
    }
    Ok(())
}
