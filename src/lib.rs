//! Real-time annotation engine for a shared drawing layer over video.
//!
//! Participants in a lesson draw on a transparent canvas stacked over the
//! conference video; every mark is replicated to all peers over a
//! best-effort group broadcast channel, with no server arbitrating state.
//! Convergence comes from idempotent, per-action upserts keyed by action
//! id, and from keeping each participant's undo history separate from the
//! cache of everyone else's actions. The host UI layer is responsible only
//! for wiring pointer/channel/timer events to [`engine::Engine`] and
//! backing [`render::Surface`] with a real canvas.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level engine and testable [`engine::EngineCore`] |
//! | [`action`] | The replicated annotation action model |
//! | [`store`] | Local undo/redo history and the remote action cache |
//! | [`geometry`] | Video content-box metrics and coordinate conversions |
//! | [`wire`] | Broadcast channel message schema and codec |
//! | [`render`] | Deterministic replay onto an abstract draw surface |
//! | [`hit`] | Hit-testing rendered text annotations |
//! | [`input`] | Tool set and the gesture state machine |
//! | [`host`] | Collaborator traits implemented by the hosting UI |
//! | [`toolbar`] | Floating toolbar drag/snap/orientation state machine |
//! | [`consts`] | Shared numeric constants (thresholds, timings, etc.) |

pub mod action;
pub mod consts;
pub mod engine;
pub mod geometry;
pub mod hit;
pub mod host;
pub mod input;
pub mod render;
pub mod store;
pub mod toolbar;
pub mod wire;
