//! Shared numeric constants for the annotation engine.

// ── Drawing ─────────────────────────────────────────────────────

/// Eraser strokes render at this multiple of the nominal stroke width.
pub const ERASER_WIDTH_FACTOR: f64 = 3.0;

/// Vertical advance between text lines, as a multiple of the font size.
pub const TEXT_LINE_HEIGHT: f64 = 1.2;

/// Fallback font size in CSS pixels when a text action carries none.
pub const DEFAULT_FONT_PX: f64 = 24.0;

// ── Hit-testing ─────────────────────────────────────────────────

/// Screen-space slop in pixels around a text bounding box.
pub const TEXT_HIT_PADDING_PX: f64 = 5.0;

/// Radius of the control anchor circle attached to a text annotation.
pub const CONTROL_ANCHOR_RADIUS_PX: f64 = 8.0;

// ── Toolbar placement ───────────────────────────────────────────

/// Distance from a viewport edge at which the toolbar snaps and may flip.
pub const EDGE_SNAP_PX: f64 = 3.0;

/// Minimum interval between orientation flips.
pub const ORIENTATION_DEBOUNCE_MS: u64 = 500;

/// Orientation is locked this long after a flip so the transition settles.
pub const ORIENTATION_LOCK_MS: u64 = 600;

/// Hold time before a press on an interactive control starts a drag.
pub const LONG_PRESS_MS: u64 = 2000;
