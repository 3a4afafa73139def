//! Edit operations applied to a running timeline.
//!
//! Interactive controllers parse user edits into these commands and
//! apply them one at a time; any failure surfaces as a displayable
//! error instead of tearing the session down.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TimelineError};
use crate::keyframe::Keyframe;
use crate::shape::ShapeKind;
use crate::store::TimelineStore;

/// One parsed edit against the timeline store.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EditCommand {
    DeclareShape { name: String, kind: ShapeKind },
    RemoveShape { name: String },
    AddKeyframe { name: String, keyframe: Keyframe },
    RemoveKeyframe { name: String, keyframe: Keyframe },
    /// Swap whatever keyframe sits at the new keyframe's tick for the
    /// new one.
    ReplaceKeyframe { name: String, keyframe: Keyframe },
}

impl EditCommand {
    /// Apply this edit to `store`.
    pub fn apply(&self, store: &mut TimelineStore) -> Result<()> {
        match self {
            EditCommand::DeclareShape { name, kind } => store.declare_shape(name, *kind),
            EditCommand::RemoveShape { name } => {
                store.remove_shape(name);
                Ok(())
            }
            EditCommand::AddKeyframe { name, keyframe } => store.add_keyframe(name, *keyframe),
            EditCommand::RemoveKeyframe { name, keyframe } => {
                store.remove_keyframe(name, keyframe);
                Ok(())
            }
            EditCommand::ReplaceKeyframe { name, keyframe } => {
                let existing = store
                    .keyframes(name)
                    .into_iter()
                    .find(|frame| frame.tick() == keyframe.tick())
                    .ok_or_else(|| TimelineError::KeyframeNotFound {
                        name: name.clone(),
                        tick: keyframe.tick(),
                    })?;
                store.remove_keyframe(name, &existing);
                store.add_keyframe(name, *keyframe)
            }
        }
    }
}
