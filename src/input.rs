//! Tool selection and in-flight gesture state.
//!
//! Exactly one gesture can be in flight at a time. The engine's pointer
//! handlers transition through [`InputState`] and every transition out of
//! [`InputState::Idle`] is paired with one back in, on pointer-up or
//! cancellation, so a dropped event can stall a gesture but never corrupt
//! the stores.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::action::ActionId;
use crate::geometry::{Point, RelativePoint};

/// The participant's currently selected tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tool {
    /// Select, edit, and drag existing annotations. Produces no actions.
    #[default]
    Pointer,
    Pencil,
    Eraser,
    Rectangle,
    Circle,
    Arrow,
    Text,
}

impl Tool {
    /// Freehand tools accumulate points while the pointer is down.
    #[must_use]
    pub fn is_freehand(self) -> bool {
        matches!(self, Self::Pencil | Self::Eraser)
    }

    /// Two-point tools preview while dragging and commit on pointer-up.
    #[must_use]
    pub fn is_two_point(self) -> bool {
        matches!(self, Self::Rectangle | Self::Circle | Self::Arrow)
    }
}

/// The gesture currently in flight, if any.
#[derive(Debug, Clone, PartialEq)]
pub enum InputState {
    /// No gesture in flight.
    Idle,
    /// A freehand stroke is accumulating points in local history.
    Stroking {
        /// Id of the in-progress action; it already lives in history.
        id: ActionId,
    },
    /// A two-point shape is being dragged out. Nothing is in history yet;
    /// the engine renders a transient preview until pointer-up commits.
    DrawingShape { start: RelativePoint },
    /// An existing text annotation is being dragged to a new anchor.
    DraggingText {
        id: ActionId,
        /// Pointer offset from the text anchor at grab time, CSS pixels,
        /// so the text does not jump under the cursor.
        grab_offset: Point,
    },
}

impl InputState {
    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }
}
