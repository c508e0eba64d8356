//! Canvas state: the view registry plus per-view history.
//!
//! Each [`ViewKey`] owns its current element list and its [`History`]. All
//! structural edits go through [`CanvasState::commit`], which is scoped to
//! the active view, so no operation can reach into another view.

use crate::history::{History, Snapshot};
use mockup_core::config::CanvasConfig;
use mockup_core::id::ElementId;
use mockup_core::model::{DesignElement, ViewKey};

/// Ephemeral pointer-interaction flags. Never snapshotted or persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Interaction {
    pub dragging: bool,
    pub resizing: bool,
    pub drag_offset: (f32, f32),
}

#[derive(Debug, Clone, PartialEq)]
struct ViewState {
    elements: Vec<DesignElement>,
    history: History,
}

impl ViewState {
    fn new(history_limit: usize) -> Self {
        Self {
            elements: Vec::new(),
            history: History::new(history_limit),
        }
    }
}

/// The complete state of one editing session.
#[derive(Debug, Clone, PartialEq)]
pub struct CanvasState {
    views: [ViewState; 4],
    active_view: ViewKey,
    selected: Option<ElementId>,
    pub interaction: Interaction,
    config: CanvasConfig,
}

impl Default for CanvasState {
    fn default() -> Self {
        Self::new(CanvasConfig::default())
    }
}

impl CanvasState {
    /// Four empty views, `front` active, nothing selected.
    pub fn new(config: CanvasConfig) -> Self {
        let limit = config.effective_history_limit();
        Self {
            views: std::array::from_fn(|_| ViewState::new(limit)),
            active_view: ViewKey::Front,
            selected: None,
            interaction: Interaction::default(),
            config,
        }
    }

    // ─── Queries ─────────────────────────────────────────────────────────

    pub fn active_view(&self) -> ViewKey {
        self.active_view
    }

    /// Current element list of the active view, in paint order.
    pub fn active_elements(&self) -> &[DesignElement] {
        self.elements(self.active_view)
    }

    pub fn elements(&self, view: ViewKey) -> &[DesignElement] {
        &self.views[view.index()].elements
    }

    pub fn history(&self, view: ViewKey) -> &History {
        &self.views[view.index()].history
    }

    pub fn active_history(&self) -> &History {
        self.history(self.active_view)
    }

    pub fn selected(&self) -> Option<ElementId> {
        self.selected
    }

    pub fn find(&self, id: ElementId) -> Option<&DesignElement> {
        self.active_elements().iter().find(|el| el.id == id)
    }

    pub fn position_of(&self, id: ElementId) -> Option<usize> {
        self.active_elements().iter().position(|el| el.id == id)
    }

    pub fn config(&self) -> &CanvasConfig {
        &self.config
    }

    pub fn can_undo(&self) -> bool {
        self.active_history().can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.active_history().can_redo()
    }

    // ─── Transitions (active view only) ──────────────────────────────────

    /// Install `elements` as the active view's list and record it as a new
    /// snapshot, discarding any redo branch.
    pub(crate) fn commit(&mut self, elements: Snapshot) {
        let view = self.active_view;
        let slot = &mut self.views[view.index()];
        if slot.history.commit(elements.clone()) {
            log::debug!(
                "{view}: history limit {} reached, evicted oldest snapshot",
                slot.history.limit()
            );
        }
        slot.elements = elements;
        log::debug!(
            "{view}: committed {} element(s), history {}/{}",
            slot.elements.len(),
            slot.history.index() + 1,
            slot.history.len()
        );
    }

    /// Restore the previous snapshot. Returns `false` at the oldest one.
    pub(crate) fn undo(&mut self) -> bool {
        let slot = &mut self.views[self.active_view.index()];
        match slot.history.undo() {
            Some(snapshot) => {
                slot.elements = snapshot.to_vec();
                true
            }
            None => false,
        }
    }

    /// Restore the next snapshot. Returns `false` at the newest one.
    pub(crate) fn redo(&mut self) -> bool {
        let slot = &mut self.views[self.active_view.index()];
        match slot.history.redo() {
            Some(snapshot) => {
                slot.elements = snapshot.to_vec();
                true
            }
            None => false,
        }
    }

    /// Make `view` active. Element lists and histories are untouched.
    pub(crate) fn switch_view(&mut self, view: ViewKey) {
        self.active_view = view;
        self.selected = None;
    }

    pub(crate) fn set_selected(&mut self, id: Option<ElementId>) {
        self.selected = id;
    }
}
