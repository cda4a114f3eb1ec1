//! Floating toolbar placement: dragging, edge snapping, and orientation.
//!
//! Local-only; nothing here touches the wire. The interesting part is the
//! hysteresis: orientation flips near an edge threshold are debounced and
//! then locked while the flip transition settles, otherwise hovering at
//! exactly the threshold oscillates the toolbar every pointer event. All
//! methods take an explicit clock so the hysteresis is testable.

#[cfg(test)]
#[path = "toolbar_test.rs"]
mod toolbar_test;

use crate::consts::{EDGE_SNAP_PX, LONG_PRESS_MS, ORIENTATION_DEBOUNCE_MS, ORIENTATION_LOCK_MS};
use crate::geometry::Point;

/// Long axis of the toolbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

/// What the pointer went down on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressTarget {
    /// Background of the toolbar; drags immediately.
    Empty,
    /// The dedicated drag handle; drags immediately.
    Handle,
    /// A button or other interactive control; drags only after a
    /// long-press-and-hold, so taps keep working as taps.
    Control,
}

/// Viewport edge the toolbar last snapped to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Left,
    Right,
    Top,
    Bottom,
}

#[derive(Debug, Clone, Copy)]
struct Drag {
    /// Pointer offset from the toolbar origin at grab time.
    grab: Point,
}

#[derive(Debug, Clone, Copy)]
struct PendingPress {
    at: Point,
    since_ms: u64,
}

/// Placement state machine for the floating toolbar.
#[derive(Debug, Clone)]
pub struct ToolbarState {
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    viewport_width: f64,
    viewport_height: f64,
    orientation: Orientation,
    snapped: Option<Edge>,
    drag: Option<Drag>,
    pending: Option<PendingPress>,
    last_flip_ms: Option<u64>,
}

impl ToolbarState {
    /// Create a toolbar of `width` x `height` (in its horizontal
    /// orientation) at `(x, y)` inside the given viewport.
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64, viewport: (f64, f64)) -> Self {
        let mut state = Self {
            x,
            y,
            width,
            height,
            viewport_width: viewport.0,
            viewport_height: viewport.1,
            orientation: Orientation::Horizontal,
            snapped: None,
            drag: None,
            pending: None,
            last_flip_ms: None,
        };
        state.clamp_to_viewport();
        state
    }

    #[must_use]
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    #[must_use]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    #[must_use]
    pub fn snapped_edge(&self) -> Option<Edge> {
        self.snapped
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Handle pointer-down on the toolbar. Returns whether a drag started;
    /// a press on a control only arms the long-press timer.
    pub fn pointer_down(&mut self, p: Point, target: PressTarget, now_ms: u64) -> bool {
        match target {
            PressTarget::Empty | PressTarget::Handle => {
                self.start_drag(p);
                true
            }
            PressTarget::Control => {
                self.pending = Some(PendingPress { at: p, since_ms: now_ms });
                false
            }
        }
    }

    /// Promote an armed control press to a drag once held long enough.
    /// Called from pointer-move and from the host's hold timer.
    pub fn poll_long_press(&mut self, now_ms: u64) -> bool {
        let Some(pending) = self.pending else {
            return false;
        };
        if now_ms.saturating_sub(pending.since_ms) < LONG_PRESS_MS {
            return false;
        }
        self.pending = None;
        self.start_drag(pending.at);
        true
    }

    /// Handle pointer-move at `p`.
    pub fn pointer_move(&mut self, p: Point, now_ms: u64) {
        self.poll_long_press(now_ms);
        let Some(drag) = self.drag else {
            return;
        };
        self.x = p.x - drag.grab.x;
        self.y = p.y - drag.grab.y;
        self.clamp_to_viewport();
        self.evaluate_edges(now_ms);
    }

    /// Handle pointer-up: the drag (or armed press) ends.
    pub fn pointer_up(&mut self) {
        self.drag = None;
        self.pending = None;
    }

    /// The viewport resized. Re-clamp, and if the toolbar was snapped to an
    /// edge, keep it pinned to that edge's new location.
    pub fn set_viewport(&mut self, width: f64, height: f64) {
        self.viewport_width = width;
        self.viewport_height = height;
        self.clamp_to_viewport();
        self.pin_to_snapped();
    }

    fn pin_to_snapped(&mut self) {
        match self.snapped {
            Some(Edge::Left) => self.x = 0.0,
            Some(Edge::Right) => self.x = (self.viewport_width - self.width).max(0.0),
            Some(Edge::Top) => self.y = 0.0,
            Some(Edge::Bottom) => self.y = (self.viewport_height - self.height).max(0.0),
            None => {}
        }
    }

    fn start_drag(&mut self, p: Point) {
        self.pending = None;
        self.drag = Some(Drag { grab: Point::new(p.x - self.x, p.y - self.y) });
    }

    fn clamp_to_viewport(&mut self) {
        self.x = self.x.clamp(0.0, (self.viewport_width - self.width).max(0.0));
        self.y = self.y.clamp(0.0, (self.viewport_height - self.height).max(0.0));
    }

    /// Snap and orientation logic. Side edges win over top/bottom when the
    /// toolbar sits in a corner.
    fn evaluate_edges(&mut self, now_ms: u64) {
        let right_limit = (self.viewport_width - self.width).max(0.0);
        let bottom_limit = (self.viewport_height - self.height).max(0.0);

        let (edge, wanted) = if self.x <= EDGE_SNAP_PX {
            (Some(Edge::Left), Some(Orientation::Vertical))
        } else if self.x >= right_limit - EDGE_SNAP_PX {
            (Some(Edge::Right), Some(Orientation::Vertical))
        } else if self.y <= EDGE_SNAP_PX {
            (Some(Edge::Top), Some(Orientation::Horizontal))
        } else if self.y >= bottom_limit - EDGE_SNAP_PX {
            (Some(Edge::Bottom), Some(Orientation::Horizontal))
        } else {
            (None, None)
        };

        self.snapped = edge;
        match edge {
            Some(Edge::Left) => self.x = 0.0,
            Some(Edge::Right) => self.x = right_limit,
            Some(Edge::Top) => self.y = 0.0,
            Some(Edge::Bottom) => self.y = bottom_limit,
            None => {}
        }

        if let Some(wanted) = wanted {
            self.flip_to(wanted, now_ms);
        }
    }

    /// Apply an orientation change through the hysteresis gate: suppressed
    /// while the debounce interval runs, and again while the previous flip's
    /// transition is still settling.
    fn flip_to(&mut self, wanted: Orientation, now_ms: u64) {
        if wanted == self.orientation {
            return;
        }
        if let Some(last) = self.last_flip_ms {
            let elapsed = now_ms.saturating_sub(last);
            if elapsed < ORIENTATION_DEBOUNCE_MS || elapsed < ORIENTATION_LOCK_MS {
                return;
            }
        }
        self.orientation = wanted;
        self.last_flip_ms = Some(now_ms);
        std::mem::swap(&mut self.width, &mut self.height);
        self.clamp_to_viewport();
        // The swap moved the far edges; stay pinned to the snapped one.
        self.pin_to_snapped();
    }
}
