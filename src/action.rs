//! The annotation action model: the atomic, replicated unit of state.
//!
//! Every mark a participant makes — a pencil stroke, a shape, a piece of
//! text — is one [`AnnotationAction`]. Actions travel the wire as flat JSON
//! with a `tool` discriminant; in memory the per-tool payload is a tagged
//! [`Shape`] so each variant carries exactly the fields its tool needs.
//! The `pointer` tool never produces an action and has no variant here.

#[cfg(test)]
#[path = "action_test.rs"]
mod action_test;

use serde::{Deserialize, Serialize};

use crate::geometry::RelativePoint;

/// Globally unique action identifier: `{author}-{creation millis}`.
///
/// Unique across participants with overwhelming probability; one author
/// minting two actions in the same millisecond is the accepted collision
/// case. The id doubles as the last-write key for in-place edits.
pub type ActionId = String;

/// Mint an action id for `author` at `now_ms`.
#[must_use]
pub fn mint_id(author: &str, now_ms: u64) -> ActionId {
    format!("{author}-{now_ms}")
}

/// Per-tool payload. Lengths (`width`, `font_size`) are fractions of the
/// content box width, so strokes keep their proportions across resolutions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "tool", rename_all = "lowercase", rename_all_fields = "camelCase")]
pub enum Shape {
    /// Freehand polyline.
    Pencil {
        width: f64,
        points: Vec<RelativePoint>,
    },
    /// Freehand polyline removing underlying pixels.
    Eraser {
        width: f64,
        points: Vec<RelativePoint>,
    },
    /// Axis-aligned rectangle between two corners.
    Rectangle {
        width: f64,
        start_point: RelativePoint,
        end_point: RelativePoint,
    },
    /// Circle centered on the start point, radius to the end point.
    Circle {
        width: f64,
        start_point: RelativePoint,
        end_point: RelativePoint,
    },
    /// Directed arrow from start to end.
    Arrow {
        width: f64,
        start_point: RelativePoint,
        end_point: RelativePoint,
    },
    /// Multi-line text anchored at its top-left corner.
    Text {
        text: String,
        font_size: f64,
        start_point: RelativePoint,
    },
}

impl Shape {
    /// Append a point to a freehand polyline. Returns false for other tools.
    pub fn push_point(&mut self, p: RelativePoint) -> bool {
        match self {
            Self::Pencil { points, .. } | Self::Eraser { points, .. } => {
                points.push(p);
                true
            }
            _ => false,
        }
    }

    /// Number of points in a freehand polyline, zero for other tools.
    #[must_use]
    pub fn point_count(&self) -> usize {
        match self {
            Self::Pencil { points, .. } | Self::Eraser { points, .. } => points.len(),
            _ => 0,
        }
    }

    /// Whether this is a text shape.
    #[must_use]
    pub fn is_text(&self) -> bool {
        matches!(self, Self::Text { .. })
    }
}

/// The atomic, replicated annotation unit.
///
/// Created when a gesture completes (or, for freehand strokes, on
/// pointer-down), mutated in place under the same id by edits and drags,
/// and destroyed by single deletes or bulk clears.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotationAction {
    /// Unique id, also the last-write-wins key for edits.
    pub id: ActionId,
    /// Identity of the authoring participant.
    pub author: String,
    /// Stroke or fill color; opaque to the protocol.
    pub color: String,
    /// Per-tool payload, flattened so `tool` is a sibling field on the wire.
    #[serde(flatten)]
    pub shape: Shape,
}

impl AnnotationAction {
    /// The text payload, if this is a text action.
    #[must_use]
    pub fn as_text(&self) -> Option<(&str, f64, RelativePoint)> {
        match &self.shape {
            Shape::Text { text, font_size, start_point } => {
                Some((text.as_str(), *font_size, *start_point))
            }
            _ => None,
        }
    }

    /// Move a text action's anchor. Returns false for non-text shapes.
    pub fn set_text_anchor(&mut self, anchor: RelativePoint) -> bool {
        match &mut self.shape {
            Shape::Text { start_point, .. } => {
                *start_point = anchor;
                true
            }
            _ => false,
        }
    }
}
