//! Construction interface consumed by animation-description parsers.

use crate::error::Result;
use crate::keyframe::Keyframe;
use crate::store::TimelineStore;

/// The eight keyframe fields in description order:
/// (tick, x, y, width, height, red, green, blue).
pub type KeyframeFields = (u32, i32, i32, i32, i32, i32, i32, i32);

/// Incrementally populates a [`TimelineStore`] from a parsed animation
/// description, then hands it over with [`build`](Self::build).
///
/// Adds against undeclared shape names follow the store's lenient
/// no-op, so descriptions may interleave shapes and motions freely.
#[derive(Debug, Default)]
pub struct TimelineBuilder {
    store: TimelineStore,
}

impl TimelineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Canvas offsets and dimensions.
    pub fn set_bounds(&mut self, x: i32, y: i32, width: i32, height: i32) -> Result<&mut Self> {
        self.store.set_bounds(x, y, width, height)?;
        Ok(self)
    }

    /// Declare a shape from its textual kind name.
    pub fn declare_shape(&mut self, name: &str, kind: &str) -> Result<&mut Self> {
        self.store.declare_shape(name, kind.parse()?)?;
        Ok(self)
    }

    /// The pair form of a motion: both endpoint keyframes are inserted
    /// (the store drops the duplicate endpoint when segments chain).
    pub fn add_motion(
        &mut self,
        name: &str,
        from: KeyframeFields,
        to: KeyframeFields,
    ) -> Result<&mut Self> {
        self.add_keyframe(name, from)?;
        self.add_keyframe(name, to)
    }

    /// Insert a single keyframe described by its eight fields.
    pub fn add_keyframe(&mut self, name: &str, fields: KeyframeFields) -> Result<&mut Self> {
        let (tick, x, y, width, height, red, green, blue) = fields;
        let keyframe = Keyframe::new(tick, x, y, width, height, red, green, blue)?;
        self.store.add_keyframe(name, keyframe)?;
        Ok(self)
    }

    /// Finish construction and hand over the populated store.
    pub fn build(self) -> TimelineStore {
        self.store
    }
}
