//! Deterministic replay of annotation state onto an abstract surface.
//!
//! Every frame is drawn from scratch: clear, then active local history, then
//! the remote cache in insertion order, then the transient shape preview.
//! The output is a pure function of those inputs, so any two participants
//! holding the same state render the same picture. Rendering also rebuilds
//! the text hit-test table wholesale, which keeps it exactly in step with
//! what is on screen.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use crate::action::{AnnotationAction, Shape};
use crate::consts::{
    CONTROL_ANCHOR_RADIUS_PX, DEFAULT_FONT_PX, ERASER_WIDTH_FACTOR, TEXT_LINE_HEIGHT,
};
use crate::geometry::{Metrics, Point};
use crate::hit::TextBounds;
use crate::store::RemoteCache;

/// Arrowhead wing length floor in CSS pixels.
const ARROW_HEAD_PX: f64 = 10.0;
/// Angle between the shaft and each arrowhead wing.
const ARROW_HEAD_ANGLE: f64 = std::f64::consts::PI / 6.0;

/// Drawing primitives the engine needs from its render target.
///
/// The host backs this with a 2D canvas context (or anything equivalent).
/// All coordinates are CSS pixels in the overlay's own space.
pub trait Surface {
    /// Wipe the whole surface to transparent.
    fn clear(&mut self);
    /// Stroke a polyline through `points` with round caps and joins.
    /// When `erase` is set the stroke removes underlying pixels
    /// (destination-out compositing) instead of painting `color`.
    fn stroke_polyline(&mut self, points: &[Point], color: &str, width_px: f64, erase: bool);
    /// Stroke the axis-aligned rectangle spanned by two opposite corners.
    fn stroke_rect(&mut self, a: Point, b: Point, color: &str, width_px: f64);
    /// Stroke a circle outline.
    fn stroke_circle(&mut self, center: Point, radius: f64, color: &str, width_px: f64);
    /// Fill one line of text with its top-left corner at `anchor`.
    fn fill_text(&mut self, text: &str, anchor: Point, color: &str, font_px: f64);
    /// Advance width of `text` at `font_px`, in CSS pixels.
    fn measure_text(&self, text: &str, font_px: f64) -> f64;
}

/// Transient shape shown while a two-point gesture is being dragged out.
/// Never stored and never broadcast.
#[derive(Debug, Clone, PartialEq)]
pub struct Preview {
    pub shape: Shape,
    pub color: String,
}

/// Replay the full annotation state onto `surface`.
///
/// Returns the rebuilt text hit-test table, in render order. While the
/// metrics are not ready the surface is left untouched and the table comes
/// back empty; the host re-renders once geometry becomes available.
pub fn draw(
    surface: &mut dyn Surface,
    metrics: &Metrics,
    local: &[AnnotationAction],
    remote: &RemoteCache,
    preview: Option<&Preview>,
    show_anchors: bool,
) -> Vec<TextBounds> {
    if !metrics.is_ready() {
        return Vec::new();
    }

    surface.clear();
    let mut text_bounds = Vec::new();
    for action in local {
        draw_action(surface, metrics, action, show_anchors, &mut text_bounds);
    }
    for action in remote.iter() {
        draw_action(surface, metrics, action, show_anchors, &mut text_bounds);
    }
    if let Some(p) = preview {
        draw_shape(surface, metrics, &p.shape, &p.color);
    }
    text_bounds
}

fn draw_action(
    surface: &mut dyn Surface,
    metrics: &Metrics,
    action: &AnnotationAction,
    show_anchors: bool,
    text_bounds: &mut Vec<TextBounds>,
) {
    if let Shape::Text { text, font_size, start_point } = &action.shape {
        if text.trim().is_empty() {
            return;
        }
        let font_px = resolve_font_px(metrics, *font_size);
        let anchor = metrics.to_absolute(*start_point);
        let mut width: f64 = 0.0;
        let mut lines = 0usize;
        for (i, line) in text.lines().enumerate() {
            let y = anchor.y + i as f64 * font_px * TEXT_LINE_HEIGHT;
            surface.fill_text(line, Point::new(anchor.x, y), &action.color, font_px);
            width = width.max(surface.measure_text(line, font_px));
            lines = i + 1;
        }
        let height = lines as f64 * font_px * TEXT_LINE_HEIGHT;
        let control_anchor = Point::new(
            anchor.x + width + CONTROL_ANCHOR_RADIUS_PX,
            anchor.y - CONTROL_ANCHOR_RADIUS_PX,
        );
        if show_anchors {
            surface.stroke_circle(control_anchor, CONTROL_ANCHOR_RADIUS_PX, &action.color, 1.0);
        }
        text_bounds.push(TextBounds {
            id: action.id.clone(),
            origin: anchor,
            width,
            height,
            control_anchor,
        });
    } else {
        draw_shape(surface, metrics, &action.shape, &action.color);
    }
}

fn draw_shape(surface: &mut dyn Surface, metrics: &Metrics, shape: &Shape, color: &str) {
    match shape {
        Shape::Pencil { width, points } => {
            if points.len() < 2 {
                return;
            }
            let abs: Vec<Point> = points.iter().map(|p| metrics.to_absolute(*p)).collect();
            surface.stroke_polyline(&abs, color, metrics.to_absolute_length(*width), false);
        }
        Shape::Eraser { width, points } => {
            if points.len() < 2 {
                return;
            }
            let abs: Vec<Point> = points.iter().map(|p| metrics.to_absolute(*p)).collect();
            let width_px = metrics.to_absolute_length(*width) * ERASER_WIDTH_FACTOR;
            surface.stroke_polyline(&abs, color, width_px, true);
        }
        Shape::Rectangle { width, start_point, end_point } => {
            surface.stroke_rect(
                metrics.to_absolute(*start_point),
                metrics.to_absolute(*end_point),
                color,
                metrics.to_absolute_length(*width),
            );
        }
        Shape::Circle { width, start_point, end_point } => {
            let center = metrics.to_absolute(*start_point);
            let rim = metrics.to_absolute(*end_point);
            let radius = (rim.x - center.x).hypot(rim.y - center.y);
            surface.stroke_circle(center, radius, color, metrics.to_absolute_length(*width));
        }
        Shape::Arrow { width, start_point, end_point } => {
            let start = metrics.to_absolute(*start_point);
            let end = metrics.to_absolute(*end_point);
            let width_px = metrics.to_absolute_length(*width);
            surface.stroke_polyline(&[start, end], color, width_px, false);

            let angle = (end.y - start.y).atan2(end.x - start.x);
            let head = ARROW_HEAD_PX.max(width_px * 3.0);
            let wing = |offset: f64| {
                Point::new(
                    end.x - head * (angle + offset).cos(),
                    end.y - head * (angle + offset).sin(),
                )
            };
            surface.stroke_polyline(
                &[wing(-ARROW_HEAD_ANGLE), end, wing(ARROW_HEAD_ANGLE)],
                color,
                width_px,
                false,
            );
        }
        Shape::Text { .. } => {}
    }
}

/// Resolve a relative font size to CSS pixels, falling back to the default
/// when the action carries a non-positive size.
fn resolve_font_px(metrics: &Metrics, font_size: f64) -> f64 {
    if font_size > 0.0 { metrics.to_absolute_length(font_size) } else { DEFAULT_FONT_PX }
}
