//! The two annotation stores: local undo/redo history and the remote cache.
//!
//! Undo/redo is a strictly local, author-scoped concept. If remote actions
//! shared the local undo stack, one participant's undo could erase another's
//! drawing — keeping the stores separate is the core correctness invariant
//! of the whole engine. The renderer replays `history.active()` followed by
//! every cache entry in insertion order.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use crate::action::{ActionId, AnnotationAction};

/// Ordered log of locally authored actions plus an undo cursor.
///
/// Entries at `step..` exist only to support redo; they are not rendered
/// and are truncated by the next push.
#[derive(Debug, Default)]
pub struct LocalHistory {
    actions: Vec<AnnotationAction>,
    step: usize,
}

impl LocalHistory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new action, discarding any redo tail, and advance the cursor.
    pub fn push(&mut self, action: AnnotationAction) {
        self.actions.truncate(self.step);
        self.actions.push(action);
        self.step += 1;
    }

    /// Step the cursor back one action. Returns false at the beginning.
    pub fn undo(&mut self) -> bool {
        if self.step == 0 {
            return false;
        }
        self.step -= 1;
        true
    }

    /// Step the cursor forward one action. Returns false at the end.
    pub fn redo(&mut self) -> bool {
        if self.step >= self.actions.len() {
            return false;
        }
        self.step += 1;
        true
    }

    /// The active (rendered) prefix of the log.
    #[must_use]
    pub fn active(&self) -> &[AnnotationAction] {
        &self.actions[..self.step]
    }

    /// The whole log including the redo tail, for sync snapshots.
    #[must_use]
    pub fn all(&self) -> &[AnnotationAction] {
        &self.actions
    }

    /// Mutable access to an active action by id.
    pub fn get_active_mut(&mut self, id: &str) -> Option<&mut AnnotationAction> {
        self.actions[..self.step].iter_mut().find(|a| a.id == id)
    }

    /// Read access to an active action by id.
    #[must_use]
    pub fn get_active(&self, id: &str) -> Option<&AnnotationAction> {
        self.active().iter().find(|a| a.id == id)
    }

    /// The most recently pushed active action, if any. This is the
    /// in-progress freehand stroke during a drag gesture.
    pub fn last_active_mut(&mut self) -> Option<&mut AnnotationAction> {
        if self.step == 0 {
            return None;
        }
        self.actions.get_mut(self.step - 1)
    }

    /// Remove an action by id from anywhere in the log, keeping the cursor
    /// pointing at the same surviving actions. Idempotent.
    pub fn remove(&mut self, id: &str) -> bool {
        let Some(idx) = self.actions.iter().position(|a| a.id == id) else {
            return false;
        };
        self.actions.remove(idx);
        if idx < self.step {
            self.step -= 1;
        }
        true
    }

    /// Keep only actions matching the predicate. The cursor is clamped to
    /// the new length in the same mutation, so there is no window where it
    /// can point past the end.
    pub fn retain(&mut self, pred: impl Fn(&AnnotationAction) -> bool) {
        self.actions.retain(|a| pred(a));
        self.step = self.step.min(self.actions.len());
    }

    /// Replace the whole log from a sync snapshot, clamping the cursor.
    pub fn replace(&mut self, actions: Vec<AnnotationAction>, step: usize) {
        self.step = step.min(actions.len());
        self.actions = actions;
    }

    /// Drop everything.
    pub fn clear(&mut self) {
        self.actions.clear();
        self.step = 0;
    }

    /// Current cursor position.
    #[must_use]
    pub fn step(&self) -> usize {
        self.step
    }

    /// Total log length including the redo tail.
    #[must_use]
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Returns `true` if the log is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Whether the redo tail is non-empty.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.step < self.actions.len()
    }
}

/// Actions received from other participants, keyed by id.
///
/// No undo/redo semantics: the cache only ever reflects the latest known
/// payload per id (last write by arrival). Insertion order is preserved so
/// replay order is stable; an upsert replaces in place.
#[derive(Debug, Default)]
pub struct RemoteCache {
    actions: Vec<AnnotationAction>,
}

impl RemoteCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace by id. Returns `true` if an entry was replaced.
    pub fn upsert(&mut self, action: AnnotationAction) -> bool {
        if let Some(existing) = self.actions.iter_mut().find(|a| a.id == action.id) {
            *existing = action;
            true
        } else {
            self.actions.push(action);
            false
        }
    }

    /// Remove by id. Idempotent.
    pub fn remove(&mut self, id: &str) -> bool {
        let Some(idx) = self.actions.iter().position(|a| a.id == id) else {
            return false;
        };
        self.actions.remove(idx);
        true
    }

    /// Keep only actions matching the predicate.
    pub fn retain(&mut self, pred: impl Fn(&AnnotationAction) -> bool) {
        self.actions.retain(|a| pred(a));
    }

    /// Drop everything.
    pub fn clear(&mut self) {
        self.actions.clear();
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&AnnotationAction> {
        self.actions.iter().find(|a| a.id == id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut AnnotationAction> {
        self.actions.iter_mut().find(|a| a.id == id)
    }

    #[must_use]
    pub fn contains(&self, id: &ActionId) -> bool {
        self.actions.iter().any(|a| &a.id == id)
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &AnnotationAction> {
        self.actions.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}
