//! Collaborator interfaces provided by the hosting conference UI.
//!
//! The engine never reaches into ambient state (the conference object, DOM
//! lookups, participant lists). Everything it needs from the outside world
//! arrives through these traits, so the whole engine can be exercised in
//! tests without a real conference or a browser.

use crate::geometry::FitMode;

/// Fire-and-forget group broadcast primitive.
///
/// Delivery is best-effort: messages may be lost, duplicated, or reordered.
/// Inbound traffic is pushed by the host into
/// [`crate::engine::Engine::handle_broadcast`].
pub trait BroadcastChannel {
    /// Send a UTF-8 JSON payload to all current participants on `channel`.
    fn send(&self, channel: &str, payload: &str);
}

/// Read-only handle onto the rendered video element the overlay tracks.
///
/// Geometry is recomputed from this handle whenever the host observes a
/// resize, metadata load, scroll, or zoom change. While the element is
/// unmounted or unsized, all values are `None` and the engine treats draw
/// and convert operations as no-ops; the host retries on its own timer.
pub trait VideoSurface {
    /// CSS pixel box currently occupied by the element, if mounted.
    fn css_size(&self) -> Option<(f64, f64)>;
    /// Intrinsic media resolution, if metadata has loaded.
    fn intrinsic_size(&self) -> Option<(f64, f64)>;
    /// How the element scales its media into its CSS box.
    fn fit_mode(&self) -> FitMode;
}

/// Who the local participant is.
pub trait IdentityProvider {
    /// Opaque identity stamped as the author of locally created actions.
    fn identity(&self) -> String;
    /// Whether the local participant holds the privileged tutor role,
    /// allowed to edit or delete any participant's annotations.
    fn is_tutor(&self) -> bool;
}
