//! Screen-space hit-testing for text annotations.
//!
//! Only text is hit-testable: strokes and shapes cannot be selected after
//! the fact. The renderer rebuilds the bounds table wholesale on every
//! frame, so entries never go stale relative to what is on screen.

#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::action::ActionId;
use crate::consts::{CONTROL_ANCHOR_RADIUS_PX, TEXT_HIT_PADDING_PX};
use crate::geometry::Point;

/// Screen-space bounding box of one rendered text annotation, plus the
/// control anchor drawn at its top-right corner for drag affordance.
#[derive(Debug, Clone, PartialEq)]
pub struct TextBounds {
    pub id: ActionId,
    /// Top-left corner of the text block, CSS pixels.
    pub origin: Point,
    pub width: f64,
    pub height: f64,
    /// Center of the drag handle circle.
    pub control_anchor: Point,
}

impl TextBounds {
    /// Whether `p` falls inside the text block, padded by the hit slop.
    #[must_use]
    pub fn contains(&self, p: Point) -> bool {
        let pad = TEXT_HIT_PADDING_PX;
        p.x >= self.origin.x - pad
            && p.x <= self.origin.x + self.width + pad
            && p.y >= self.origin.y - pad
            && p.y <= self.origin.y + self.height + pad
    }

    /// Whether `p` falls inside the drag handle circle.
    #[must_use]
    pub fn anchor_contains(&self, p: Point) -> bool {
        let dx = p.x - self.control_anchor.x;
        let dy = p.y - self.control_anchor.y;
        dx * dx + dy * dy <= CONTROL_ANCHOR_RADIUS_PX * CONTROL_ANCHOR_RADIUS_PX
    }
}

/// Find the topmost text annotation under `p`.
///
/// `bounds` is in render order, so the scan runs newest-last-drawn first;
/// overlapping texts resolve to the one drawn on top.
#[must_use]
pub fn find_text_at(bounds: &[TextBounds], p: Point) -> Option<&TextBounds> {
    bounds.iter().rev().find(|b| b.contains(p))
}

/// Find the topmost text annotation whose drag handle is under `p`.
#[must_use]
pub fn find_anchor_at(bounds: &[TextBounds], p: Point) -> Option<&TextBounds> {
    bounds.iter().rev().find(|b| b.anchor_contains(p))
}
