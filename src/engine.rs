//! The annotation engine: interaction state machine plus sync protocol.
//!
//! [`EngineCore`] holds all state and logic with no external dependencies;
//! handlers return [`Effect`]s describing what the host must do (broadcast a
//! message, schedule a repaint, open a text editor). [`Engine`] wraps the
//! core together with the host collaborators and turns broadcast effects
//! into channel sends itself.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use tracing::warn;

use crate::action::{ActionId, AnnotationAction, Shape, mint_id};
use crate::consts::DEFAULT_FONT_PX;
use crate::geometry::{Metrics, Point, RelativePoint};
use crate::hit;
use crate::host::{BroadcastChannel, IdentityProvider, VideoSurface};
use crate::input::{InputState, Tool};
use crate::render::{self, Preview, Surface};
use crate::store::{LocalHistory, RemoteCache};
use crate::wire::{self, ANNOTATION_CHANNEL, AuthorScope, WireMessage};

/// Effects returned from handlers for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Send this message to all participants.
    Broadcast(WireMessage),
    /// State visible on screen changed; repaint on the next frame.
    RenderNeeded,
    /// Open the host's text editing surface, seeded from the request.
    OpenTextEditor(TextEditRequest),
}

/// Seed for the host's text editor overlay. The engine remembers the open
/// session itself; the host only calls back with the final text.
#[derive(Debug, Clone, PartialEq)]
pub struct TextEditRequest {
    /// Anchor of the text block being created or edited.
    pub anchor: RelativePoint,
    /// Existing text to pre-fill, empty for a fresh annotation.
    pub text: String,
    pub color: String,
    pub font_size_px: f64,
    /// Id of the annotation being edited, `None` when creating.
    pub editing: Option<ActionId>,
}

/// Static configuration fixed at engine construction.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// View-only participants render inbound state but cannot author,
    /// and are the only ones that accept `syncAnnotations` snapshots.
    pub view_only: bool,
    pub color: String,
    pub stroke_width_px: f64,
    pub font_size_px: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            view_only: false,
            color: "#FF0000".to_owned(),
            stroke_width_px: 3.0,
            font_size_px: DEFAULT_FONT_PX,
        }
    }
}

/// Text editor session the engine keeps while the host overlay is open.
#[derive(Debug, Clone)]
struct EditorSession {
    anchor: RelativePoint,
    editing: Option<ActionId>,
}

/// Core engine state — all logic that doesn't depend on the host.
///
/// Separated from `Engine` so it can be tested without channel or video
/// collaborators; tests inspect the returned effects directly.
pub struct EngineCore {
    pub history: LocalHistory,
    pub remote: RemoteCache,
    identity: String,
    is_tutor: bool,
    view_only: bool,
    metrics: Metrics,
    tool: Tool,
    color: String,
    stroke_width_px: f64,
    font_size_px: f64,
    input: InputState,
    preview: Option<Preview>,
    text_bounds: Vec<hit::TextBounds>,
    editor: Option<EditorSession>,
    /// Text drag waiting to be broadcast on the next animation frame, so a
    /// fast drag produces at most one message per frame.
    pending_drag: Option<ActionId>,
}

impl EngineCore {
    #[must_use]
    pub fn new(identity: impl Into<String>, is_tutor: bool, config: EngineConfig) -> Self {
        Self {
            history: LocalHistory::new(),
            remote: RemoteCache::new(),
            identity: identity.into(),
            is_tutor,
            view_only: config.view_only,
            metrics: Metrics::default(),
            tool: Tool::default(),
            color: config.color,
            stroke_width_px: config.stroke_width_px,
            font_size_px: config.font_size_px,
            input: InputState::Idle,
            preview: None,
            text_bounds: Vec::new(),
            editor: None,
            pending_drag: None,
        }
    }

    // --- Configuration / queries ---

    /// Install freshly computed surface metrics.
    pub fn set_metrics(&mut self, metrics: Metrics) {
        self.metrics = metrics;
    }

    #[must_use]
    pub fn metrics(&self) -> Metrics {
        self.metrics
    }

    /// Set the active tool, cancelling any gesture in flight.
    pub fn set_tool(&mut self, tool: Tool) -> Vec<Effect> {
        let effects = self.cancel_gesture();
        self.tool = tool;
        effects
    }

    #[must_use]
    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn set_color(&mut self, color: impl Into<String>) {
        self.color = color.into();
    }

    pub fn set_stroke_width_px(&mut self, px: f64) {
        self.stroke_width_px = px;
    }

    pub fn set_font_size_px(&mut self, px: f64) {
        self.font_size_px = px;
    }

    #[must_use]
    pub fn input(&self) -> &InputState {
        &self.input
    }

    #[must_use]
    pub fn identity(&self) -> &str {
        &self.identity
    }

    #[must_use]
    pub fn is_view_only(&self) -> bool {
        self.view_only
    }

    /// Whether the local participant may edit, drag, or delete `action`.
    #[must_use]
    pub fn can_edit(&self, action: &AnnotationAction) -> bool {
        self.is_tutor || action.author == self.identity
    }

    /// Look up an action by id across both stores (active history first).
    #[must_use]
    pub fn find_action(&self, id: &str) -> Option<&AnnotationAction> {
        self.history.get_active(id).or_else(|| self.remote.get(id))
    }

    // --- Pointer gestures ---

    /// Handle pointer-down at `p` (canvas-space CSS pixels).
    pub fn pointer_down(&mut self, p: Point, now_ms: u64) -> Vec<Effect> {
        if self.view_only || !self.metrics.is_ready() || !self.input.is_idle() {
            return Vec::new();
        }
        let rel = self.metrics.to_relative(p);
        match self.tool {
            Tool::Pointer => self.pointer_tool_down(p),
            Tool::Text => {
                self.editor = Some(EditorSession { anchor: rel, editing: None });
                vec![Effect::OpenTextEditor(TextEditRequest {
                    anchor: rel,
                    text: String::new(),
                    color: self.color.clone(),
                    font_size_px: self.font_size_px,
                    editing: None,
                })]
            }
            Tool::Pencil | Tool::Eraser => {
                let width = self.metrics.to_relative_length(self.stroke_width_px);
                let shape = if self.tool == Tool::Pencil {
                    Shape::Pencil { width, points: vec![rel] }
                } else {
                    Shape::Eraser { width, points: vec![rel] }
                };
                let id = mint_id(&self.identity, now_ms);
                self.history.push(AnnotationAction {
                    id: id.clone(),
                    author: self.identity.clone(),
                    color: self.color.clone(),
                    shape,
                });
                self.input = InputState::Stroking { id };
                vec![Effect::RenderNeeded]
            }
            Tool::Rectangle | Tool::Circle | Tool::Arrow => {
                self.input = InputState::DrawingShape { start: rel };
                Vec::new()
            }
        }
    }

    /// Pointer tool: drag handles take priority over the text body, which
    /// opens the editor. Both respect the edit permission rule.
    fn pointer_tool_down(&mut self, p: Point) -> Vec<Effect> {
        if let Some(bounds) = hit::find_anchor_at(&self.text_bounds, p) {
            let id = bounds.id.clone();
            let origin = bounds.origin;
            if self.find_action(&id).is_some_and(|a| self.can_edit(a)) {
                self.input = InputState::DraggingText {
                    id,
                    grab_offset: Point::new(p.x - origin.x, p.y - origin.y),
                };
            }
            return Vec::new();
        }
        if let Some(bounds) = hit::find_text_at(&self.text_bounds, p) {
            let id = bounds.id.clone();
            return self.open_editor_for(&id);
        }
        Vec::new()
    }

    fn open_editor_for(&mut self, id: &str) -> Vec<Effect> {
        let Some(action) = self.find_action(id) else {
            return Vec::new();
        };
        if !self.can_edit(action) {
            return Vec::new();
        }
        let Some((text, font_size, anchor)) = action.as_text() else {
            return Vec::new();
        };
        let request = TextEditRequest {
            anchor,
            text: text.to_owned(),
            color: action.color.clone(),
            font_size_px: if font_size > 0.0 {
                self.metrics.to_absolute_length(font_size)
            } else {
                DEFAULT_FONT_PX
            },
            editing: Some(id.to_owned()),
        };
        self.editor = Some(EditorSession { anchor, editing: Some(id.to_owned()) });
        vec![Effect::OpenTextEditor(request)]
    }

    /// Handle pointer-move at `p` while a gesture may be in flight.
    pub fn pointer_move(&mut self, p: Point) -> Vec<Effect> {
        if !self.metrics.is_ready() {
            return Vec::new();
        }
        let rel = self.metrics.to_relative(p);
        match self.input.clone() {
            InputState::Idle => Vec::new(),
            InputState::Stroking { id } => {
                let Some(action) = self.history.get_active_mut(&id) else {
                    // The stroke was cleared out from under us by an inbound
                    // message; abandon the gesture.
                    self.input = InputState::Idle;
                    return Vec::new();
                };
                action.shape.push_point(rel);
                let message = WireMessage::Annotate { action: action.clone() };
                vec![Effect::Broadcast(message), Effect::RenderNeeded]
            }
            InputState::DrawingShape { start } => {
                let width = self.metrics.to_relative_length(self.stroke_width_px);
                let Some(shape) = two_point_shape(self.tool, width, start, rel) else {
                    self.input = InputState::Idle;
                    return Vec::new();
                };
                self.preview = Some(Preview { shape, color: self.color.clone() });
                vec![Effect::RenderNeeded]
            }
            InputState::DraggingText { id, grab_offset } => {
                let anchor = self
                    .metrics
                    .to_relative(Point::new(p.x - grab_offset.x, p.y - grab_offset.y));
                let moved = if let Some(action) = self.history.get_active_mut(&id) {
                    action.set_text_anchor(anchor)
                } else if let Some(action) = self.remote.get_mut(&id) {
                    action.set_text_anchor(anchor)
                } else {
                    false
                };
                if moved {
                    self.pending_drag = Some(id);
                    vec![Effect::RenderNeeded]
                } else {
                    self.input = InputState::Idle;
                    Vec::new()
                }
            }
        }
    }

    /// Handle pointer-up at `p`, committing or discarding the gesture.
    pub fn pointer_up(&mut self, p: Point, now_ms: u64) -> Vec<Effect> {
        match std::mem::replace(&mut self.input, InputState::Idle) {
            InputState::Idle => Vec::new(),
            InputState::Stroking { id } => {
                let Some(action) = self.history.get_active(&id) else {
                    return Vec::new();
                };
                if action.shape.point_count() < 2 {
                    // A tap that never moved; nothing worth keeping.
                    self.history.remove(&id);
                    return vec![Effect::RenderNeeded];
                }
                let message = WireMessage::Annotate { action: action.clone() };
                vec![Effect::Broadcast(message), Effect::RenderNeeded]
            }
            InputState::DrawingShape { start } => {
                self.preview = None;
                if !self.metrics.is_ready() {
                    return vec![Effect::RenderNeeded];
                }
                let end = self.metrics.to_relative(p);
                if start == end {
                    return vec![Effect::RenderNeeded];
                }
                let width = self.metrics.to_relative_length(self.stroke_width_px);
                let Some(shape) = two_point_shape(self.tool, width, start, end) else {
                    return vec![Effect::RenderNeeded];
                };
                let action = AnnotationAction {
                    id: mint_id(&self.identity, now_ms),
                    author: self.identity.clone(),
                    color: self.color.clone(),
                    shape,
                };
                self.history.push(action.clone());
                vec![Effect::Broadcast(WireMessage::Annotate { action }), Effect::RenderNeeded]
            }
            InputState::DraggingText { id, .. } => {
                self.pending_drag = None;
                match self.find_action(&id) {
                    Some(action) => {
                        let message = WireMessage::Annotate { action: action.clone() };
                        vec![Effect::Broadcast(message), Effect::RenderNeeded]
                    }
                    None => vec![Effect::RenderNeeded],
                }
            }
        }
    }

    /// Abort the gesture in flight (pointer left the surface, tool switch).
    /// Never broadcasts; a partially broadcast stroke stays as-is on peers
    /// until the next mutation resynchronizes it.
    pub fn cancel_gesture(&mut self) -> Vec<Effect> {
        match std::mem::replace(&mut self.input, InputState::Idle) {
            InputState::Idle => Vec::new(),
            InputState::Stroking { id } => {
                self.history.remove(&id);
                vec![Effect::RenderNeeded]
            }
            InputState::DrawingShape { .. } => {
                self.preview = None;
                vec![Effect::RenderNeeded]
            }
            InputState::DraggingText { .. } => {
                self.pending_drag = None;
                vec![Effect::RenderNeeded]
            }
        }
    }

    /// Animation-frame tick: flush the coalesced text-drag broadcast.
    pub fn on_animation_frame(&mut self) -> Vec<Effect> {
        let Some(id) = self.pending_drag.take() else {
            return Vec::new();
        };
        match self.find_action(&id) {
            Some(action) => {
                vec![Effect::Broadcast(WireMessage::Annotate { action: action.clone() })]
            }
            None => Vec::new(),
        }
    }

    // --- Text editing ---

    /// Commit text from the host editor back into an action.
    ///
    /// Creating with blank text is a no-op; editing down to blank text
    /// deletes the annotation.
    pub fn submit_text(&mut self, text: &str, now_ms: u64) -> Vec<Effect> {
        let Some(session) = self.editor.take() else {
            return Vec::new();
        };
        let blank = text.trim().is_empty();
        match session.editing {
            Some(id) => {
                if blank {
                    return self.delete_action(&id);
                }
                let Some(action) = self.set_text_body(&id, text) else {
                    return Vec::new();
                };
                vec![Effect::Broadcast(WireMessage::Annotate { action }), Effect::RenderNeeded]
            }
            None => {
                if blank {
                    return Vec::new();
                }
                let action = AnnotationAction {
                    id: mint_id(&self.identity, now_ms),
                    author: self.identity.clone(),
                    color: self.color.clone(),
                    shape: Shape::Text {
                        text: text.to_owned(),
                        font_size: self.metrics.to_relative_length(self.font_size_px),
                        start_point: session.anchor,
                    },
                };
                self.history.push(action.clone());
                vec![Effect::Broadcast(WireMessage::Annotate { action }), Effect::RenderNeeded]
            }
        }
    }

    /// Dismiss the host editor without committing.
    pub fn cancel_text(&mut self) {
        self.editor = None;
    }

    fn set_text_body(&mut self, id: &str, text: &str) -> Option<AnnotationAction> {
        if let Some(action) = self.history.get_active_mut(id) {
            return replace_text_body(action, text);
        }
        let action = self.remote.get_mut(id)?;
        replace_text_body(action, text)
    }

    // --- Commands ---

    /// Undo the most recent active local action. Peers are unaffected;
    /// undo is a strictly local concept.
    pub fn undo(&mut self) -> Vec<Effect> {
        if self.view_only || !self.history.undo() {
            return Vec::new();
        }
        vec![Effect::RenderNeeded]
    }

    /// Redo the most recently undone local action.
    pub fn redo(&mut self) -> Vec<Effect> {
        if self.view_only || !self.history.redo() {
            return Vec::new();
        }
        vec![Effect::RenderNeeded]
    }

    /// Clear everything locally and on every participant.
    pub fn clear_all(&mut self) -> Vec<Effect> {
        if self.view_only {
            return Vec::new();
        }
        self.history.clear();
        self.remote.clear();
        self.text_bounds.clear();
        vec![Effect::Broadcast(WireMessage::ClearAnnotations), Effect::RenderNeeded]
    }

    /// Author-scoped clear relative to the local identity. Tutor-only.
    pub fn clear_by_scope(&mut self, scope: AuthorScope) -> Vec<Effect> {
        if !self.is_tutor {
            return Vec::new();
        }
        let identity = self.identity.clone();
        self.apply_scoped_clear(scope, &identity);
        vec![
            Effect::Broadcast(WireMessage::ClearAnnotationsByType {
                author_type: scope,
                author_identity: identity,
            }),
            Effect::RenderNeeded,
        ]
    }

    /// Delete one annotation everywhere, subject to the edit permission rule.
    pub fn delete_action(&mut self, id: &str) -> Vec<Effect> {
        if self.view_only {
            return Vec::new();
        }
        if !self.find_action(id).is_some_and(|a| self.can_edit(a)) {
            return Vec::new();
        }
        self.history.remove(id);
        self.remote.remove(id);
        self.prune_bounds();
        vec![
            Effect::Broadcast(WireMessage::DeleteAnnotation { id: id.to_owned() }),
            Effect::RenderNeeded,
        ]
    }

    /// Push a full state snapshot to view-only participants. Tutor-only.
    pub fn broadcast_sync(&self) -> Vec<Effect> {
        if !self.is_tutor {
            return Vec::new();
        }
        vec![Effect::Broadcast(WireMessage::SyncAnnotations {
            history: self.history.all().to_vec(),
            history_step: self.history.step(),
        })]
    }

    // --- Inbound ---

    /// Decode and apply one payload from the broadcast channel. Malformed
    /// payloads are logged and dropped; the stream keeps flowing.
    pub fn handle_broadcast(&mut self, payload: &str) -> Vec<Effect> {
        match wire::decode_message(payload) {
            Ok(message) => self.apply_message(message),
            Err(error) => {
                warn!(%error, "dropping malformed annotation message");
                Vec::new()
            }
        }
    }

    /// Apply one already-decoded inbound message.
    pub fn apply_message(&mut self, message: WireMessage) -> Vec<Effect> {
        match message {
            WireMessage::Annotate { action } => {
                if action.author == self.identity {
                    // Our own action coming back, either as channel echo or
                    // as a tutor's edit of it. The authoritative copy lives
                    // in local history; caching it would double-render.
                    let Some(local) = self.history.get_active_mut(&action.id) else {
                        return Vec::new();
                    };
                    *local = action;
                } else {
                    self.remote.upsert(action);
                }
                vec![Effect::RenderNeeded]
            }
            WireMessage::ClearAnnotations => {
                self.history.clear();
                self.remote.clear();
                self.text_bounds.clear();
                vec![Effect::RenderNeeded]
            }
            WireMessage::ClearAnnotationsByType { author_type, author_identity } => {
                self.apply_scoped_clear(author_type, &author_identity);
                vec![Effect::RenderNeeded]
            }
            WireMessage::DeleteAnnotation { id } => {
                let in_history = self.history.remove(&id);
                let in_remote = self.remote.remove(&id);
                if !in_history && !in_remote {
                    return Vec::new();
                }
                self.prune_bounds();
                vec![Effect::RenderNeeded]
            }
            WireMessage::SyncAnnotations { history, history_step } => {
                // Active drawers keep their own history; snapshots are for
                // view-only joiners bootstrapping from nothing.
                if !self.view_only {
                    return Vec::new();
                }
                self.history.replace(history, history_step);
                self.remote.clear();
                self.text_bounds.clear();
                vec![Effect::RenderNeeded]
            }
        }
    }

    fn apply_scoped_clear(&mut self, scope: AuthorScope, identity: &str) {
        match scope {
            AuthorScope::All => {
                self.history.clear();
                self.remote.clear();
            }
            AuthorScope::Teacher => {
                self.history.retain(|a| a.author != identity);
                self.remote.retain(|a| a.author != identity);
            }
            AuthorScope::Students => {
                self.history.retain(|a| a.author == identity);
                self.remote.retain(|a| a.author == identity);
            }
        }
        self.prune_bounds();
    }

    /// Drop bounds whose action no longer exists, so hit tests between a
    /// removal and the next render cannot resolve to a dead id.
    fn prune_bounds(&mut self) {
        let history = &self.history;
        let remote = &self.remote;
        self.text_bounds
            .retain(|b| history.get_active(&b.id).is_some() || remote.contains(&b.id));
    }

    // --- Rendering ---

    /// Replay all state onto `surface` and rebuild the text hit-test table.
    pub fn render(&mut self, surface: &mut dyn Surface) {
        self.text_bounds = render::draw(
            surface,
            &self.metrics,
            self.history.active(),
            &self.remote,
            self.preview.as_ref(),
            !self.view_only,
        );
    }
}

fn replace_text_body(action: &mut AnnotationAction, text: &str) -> Option<AnnotationAction> {
    if let Shape::Text { text: body, .. } = &mut action.shape {
        *body = text.to_owned();
        Some(action.clone())
    } else {
        None
    }
}

/// Build the committed shape for a two-point tool, `None` for other tools.
fn two_point_shape(
    tool: Tool,
    width: f64,
    start: RelativePoint,
    end: RelativePoint,
) -> Option<Shape> {
    match tool {
        Tool::Rectangle => Some(Shape::Rectangle { width, start_point: start, end_point: end }),
        Tool::Circle => Some(Shape::Circle { width, start_point: start, end_point: end }),
        Tool::Arrow => Some(Shape::Arrow { width, start_point: start, end_point: end }),
        _ => None,
    }
}

/// The full annotation engine. Wraps [`EngineCore`] and owns the host
/// collaborators, turning broadcast effects into channel sends.
pub struct Engine<C: BroadcastChannel, V: VideoSurface> {
    channel: C,
    video: V,
    pub core: EngineCore,
}

impl<C: BroadcastChannel, V: VideoSurface> Engine<C, V> {
    /// Create a new engine bound to the given host collaborators.
    #[must_use]
    pub fn new(channel: C, video: V, identity: &dyn IdentityProvider, config: EngineConfig) -> Self {
        let core = EngineCore::new(identity.identity(), identity.is_tutor(), config);
        Self { channel, video, core }
    }

    /// Recompute surface metrics from the video collaborator. Returns
    /// whether the surface is ready; the host retries on a timer until it is.
    pub fn refresh_metrics(&mut self) -> bool {
        let metrics = match self.video.css_size() {
            Some((css_w, css_h)) => {
                let (nat_w, nat_h) = self.video.intrinsic_size().unwrap_or((0.0, 0.0));
                Metrics::compute(css_w, css_h, nat_w, nat_h, self.video.fit_mode())
            }
            None => Metrics::default(),
        };
        self.core.set_metrics(metrics);
        self.core.metrics().is_ready()
    }

    /// Send broadcast effects over the channel, returning the rest for the
    /// host. Encoding failures are logged; the next mutation resynchronizes.
    fn dispatch(&self, effects: Vec<Effect>) -> Vec<Effect> {
        let mut remaining = Vec::new();
        for effect in effects {
            match effect {
                Effect::Broadcast(message) => match wire::encode_message(&message) {
                    Ok(payload) => self.channel.send(ANNOTATION_CHANNEL, &payload),
                    Err(error) => warn!(%error, "failed to encode annotation message"),
                },
                other => remaining.push(other),
            }
        }
        remaining
    }

    // --- Delegated handlers ---

    pub fn pointer_down(&mut self, p: Point, now_ms: u64) -> Vec<Effect> {
        let effects = self.core.pointer_down(p, now_ms);
        self.dispatch(effects)
    }

    pub fn pointer_move(&mut self, p: Point) -> Vec<Effect> {
        let effects = self.core.pointer_move(p);
        self.dispatch(effects)
    }

    pub fn pointer_up(&mut self, p: Point, now_ms: u64) -> Vec<Effect> {
        let effects = self.core.pointer_up(p, now_ms);
        self.dispatch(effects)
    }

    pub fn cancel_gesture(&mut self) -> Vec<Effect> {
        let effects = self.core.cancel_gesture();
        self.dispatch(effects)
    }

    pub fn on_animation_frame(&mut self) -> Vec<Effect> {
        let effects = self.core.on_animation_frame();
        self.dispatch(effects)
    }

    pub fn set_tool(&mut self, tool: Tool) -> Vec<Effect> {
        let effects = self.core.set_tool(tool);
        self.dispatch(effects)
    }

    pub fn submit_text(&mut self, text: &str, now_ms: u64) -> Vec<Effect> {
        let effects = self.core.submit_text(text, now_ms);
        self.dispatch(effects)
    }

    pub fn cancel_text(&mut self) {
        self.core.cancel_text();
    }

    pub fn undo(&mut self) -> Vec<Effect> {
        let effects = self.core.undo();
        self.dispatch(effects)
    }

    pub fn redo(&mut self) -> Vec<Effect> {
        let effects = self.core.redo();
        self.dispatch(effects)
    }

    pub fn clear_all(&mut self) -> Vec<Effect> {
        let effects = self.core.clear_all();
        self.dispatch(effects)
    }

    pub fn clear_by_scope(&mut self, scope: AuthorScope) -> Vec<Effect> {
        let effects = self.core.clear_by_scope(scope);
        self.dispatch(effects)
    }

    pub fn delete_action(&mut self, id: &str) -> Vec<Effect> {
        let effects = self.core.delete_action(id);
        self.dispatch(effects)
    }

    pub fn broadcast_sync(&self) -> Vec<Effect> {
        let effects = self.core.broadcast_sync();
        self.dispatch(effects)
    }

    pub fn handle_broadcast(&mut self, payload: &str) -> Vec<Effect> {
        let effects = self.core.handle_broadcast(payload);
        self.dispatch(effects)
    }

    pub fn render(&mut self, surface: &mut dyn Surface) {
        self.core.render(surface);
    }
}
