//! Geometry mapping between device pixels and resolution-independent
//! relative coordinates.
//!
//! Annotations are stored as fractions of the video *content box* — the
//! sub-rectangle of the video element that actually displays media pixels,
//! after letterboxing under `contain` or cropping under `cover`. Two
//! participants with differently sized video elements therefore render the
//! same relative point at the same place within their own content box.

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

use serde::{Deserialize, Serialize};

/// A point in canvas space, CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A point expressed as a fraction of the content box, each axis in `[0, 1]`.
///
/// Clamped at construction, including when decoded from the wire, so the
/// in-range invariant holds no matter what a peer sends.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawRelativePoint")]
pub struct RelativePoint {
    pub x: f64,
    pub y: f64,
}

impl RelativePoint {
    /// Build a relative point, clamping both axes into `[0, 1]`.
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x: x.clamp(0.0, 1.0),
            y: y.clamp(0.0, 1.0),
        }
    }
}

/// Unclamped mirror used only as a serde conversion source.
#[derive(Deserialize)]
struct RawRelativePoint {
    x: f64,
    y: f64,
}

impl From<RawRelativePoint> for RelativePoint {
    fn from(raw: RawRelativePoint) -> Self {
        Self::new(raw.x, raw.y)
    }
}

/// How the video element scales its media into its CSS box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FitMode {
    /// Scale to fit entirely inside the box, letterboxing the remainder.
    #[default]
    Contain,
    /// Scale to fill the box entirely, cropping the overflow.
    Cover,
    /// Stretch to the box; treated like `Contain` for content-box math.
    Fill,
}

/// On-screen measurements of the video surface, recomputed whenever the
/// element resizes, its metadata loads, or the window resizes/zooms.
///
/// `content_*` and `offset_*` describe the content box within the CSS box;
/// offsets are negative when `Cover` crops.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Metrics {
    pub css_width: f64,
    pub css_height: f64,
    pub content_width: f64,
    pub content_height: f64,
    pub offset_x: f64,
    pub offset_y: f64,
}

impl Metrics {
    /// Derive metrics from the element's CSS box, the media's intrinsic
    /// resolution, and its fit mode.
    ///
    /// When the intrinsic resolution is unknown (metadata not yet loaded)
    /// the content box falls back to the full CSS box.
    #[must_use]
    pub fn compute(
        css_width: f64,
        css_height: f64,
        natural_width: f64,
        natural_height: f64,
        fit: FitMode,
    ) -> Self {
        let mut metrics = Self {
            css_width,
            css_height,
            content_width: css_width,
            content_height: css_height,
            offset_x: 0.0,
            offset_y: 0.0,
        };

        if natural_width > 0.0 && natural_height > 0.0 && css_width > 0.0 && css_height > 0.0 {
            let scale_x = css_width / natural_width;
            let scale_y = css_height / natural_height;
            let scale = match fit {
                FitMode::Cover => scale_x.max(scale_y),
                FitMode::Contain | FitMode::Fill => scale_x.min(scale_y),
            };
            metrics.content_width = natural_width * scale;
            metrics.content_height = natural_height * scale;
            metrics.offset_x = (css_width - metrics.content_width) / 2.0;
            metrics.offset_y = (css_height - metrics.content_height) / 2.0;
        }

        metrics
    }

    /// Whether the content box has positive area. Conversions against
    /// unready metrics are meaningless; callers treat them as no-ops.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.content_width > 0.0 && self.content_height > 0.0
    }

    /// Convert a canvas-space point to a relative point, clamped to `[0, 1]`.
    #[must_use]
    pub fn to_relative(&self, p: Point) -> RelativePoint {
        RelativePoint::new(
            (p.x - self.offset_x) / self.content_width,
            (p.y - self.offset_y) / self.content_height,
        )
    }

    /// Convert a relative point back to canvas-space pixels.
    ///
    /// Inverse of [`Metrics::to_relative`] for any point strictly inside the
    /// content box, independent of the content box's size.
    #[must_use]
    pub fn to_absolute(&self, p: RelativePoint) -> Point {
        Point::new(
            self.offset_x + p.x * self.content_width,
            self.offset_y + p.y * self.content_height,
        )
    }

    /// Convert a screen-space length (pixels) to a fraction of content width.
    #[must_use]
    pub fn to_relative_length(&self, px: f64) -> f64 {
        if self.content_width > 0.0 { px / self.content_width } else { 0.0 }
    }

    /// Convert a fraction of content width back to screen-space pixels.
    #[must_use]
    pub fn to_absolute_length(&self, fraction: f64) -> f64 {
        fraction * self.content_width
    }
}
