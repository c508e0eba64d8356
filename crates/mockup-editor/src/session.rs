//! Named operations over an owned [`CanvasState`].
//!
//! `CanvasSession` is the handle a host UI keeps for one editing context.
//! Every method builds an [`Action`], runs it through [`dispatch`], and keeps
//! the resulting state. Calls must be serialized by the caller; each one is
//! complete and atomic when it returns.

use crate::action::Action;
use crate::dispatch::{Outcome, dispatch};
use crate::history::History;
use crate::state::CanvasState;
use mockup_core::config::CanvasConfig;
use mockup_core::design::Design;
use mockup_core::hit;
use mockup_core::id::ElementId;
use mockup_core::model::{
    DesignElement, ElementPatch, ImagePatch, PayloadPatch, TextPatch, ViewKey,
};

#[derive(Debug, Clone, Default)]
pub struct CanvasSession {
    state: CanvasState,
}

impl CanvasSession {
    pub fn new(config: CanvasConfig) -> Self {
        Self {
            state: CanvasState::new(config),
        }
    }

    /// Run one action and keep the resulting state.
    pub fn apply(&mut self, action: Action) -> Outcome {
        let state = std::mem::take(&mut self.state);
        let transition = dispatch(state, action);
        self.state = transition.state;
        transition.outcome
    }

    // ─── Structural ──────────────────────────────────────────────────────

    /// Add a text element with the configured defaults. Returns its id.
    pub fn add_text(&mut self, x: f32, y: f32, text: &str) -> ElementId {
        let id = self.fresh_id("text");
        self.apply(Action::AddText {
            id,
            x,
            y,
            text: text.to_string(),
        });
        id
    }

    /// Add an image element. Returns its id.
    pub fn add_image(
        &mut self,
        x: f32,
        y: f32,
        source: &str,
        width: f32,
        height: f32,
    ) -> ElementId {
        let id = self.fresh_id("image");
        self.apply(Action::AddImage {
            id,
            x,
            y,
            source: source.to_string(),
            width,
            height,
        });
        id
    }

    /// Add an image the way the asset picker places it: centred, with the
    /// configured default size.
    pub fn add_image_centered(&mut self, source: &str) -> ElementId {
        let size = self.state.config().image_default_size;
        let (x, y) = self.state.config().centered_origin(size);
        self.add_image(x, y, source, size, size)
    }

    pub fn add_element(&mut self, element: DesignElement) -> Outcome {
        self.apply(Action::AddElement(element))
    }

    pub fn delete_element(&mut self, id: ElementId) -> Outcome {
        self.apply(Action::DeleteElement(id))
    }

    pub fn move_element(&mut self, id: ElementId, x: f32, y: f32) -> Outcome {
        self.apply(Action::Move { id, x, y })
    }

    pub fn resize_element(&mut self, id: ElementId, width: f32, height: f32) -> Outcome {
        self.apply(Action::Resize { id, width, height })
    }

    pub fn rotate_element(&mut self, id: ElementId, degrees: f32) -> Outcome {
        self.apply(Action::Rotate { id, degrees })
    }

    /// Update text payload fields. Rejected with `CanvasError::NotText` on images.
    pub fn update_text_data(&mut self, id: ElementId, patch: TextPatch) -> Outcome {
        self.apply(Action::UpdateTextPayload { id, patch })
    }

    pub fn update_image_source(&mut self, id: ElementId, source: &str) -> Outcome {
        let patch = ElementPatch {
            payload: Some(PayloadPatch::Image(ImagePatch {
                source: Some(source.to_string()),
                ..Default::default()
            })),
            ..Default::default()
        };
        self.update_element(id, patch)
    }

    pub fn update_element(&mut self, id: ElementId, patch: ElementPatch) -> Outcome {
        self.apply(Action::UpdateElement { id, patch })
    }

    pub fn clear_canvas(&mut self) -> Outcome {
        self.apply(Action::ClearCanvas)
    }

    /// Replace the active view's elements. Other views are untouched.
    pub fn load_design(&mut self, elements: Vec<DesignElement>) -> Outcome {
        self.apply(Action::LoadDesign(elements))
    }

    // ─── Selection, views, history ───────────────────────────────────────

    pub fn select_element(&mut self, id: Option<ElementId>) -> Outcome {
        self.apply(Action::SelectElement(id))
    }

    pub fn switch_view(&mut self, view: ViewKey) -> Outcome {
        self.apply(Action::SwitchView(view))
    }

    pub fn undo(&mut self) -> Outcome {
        self.apply(Action::Undo)
    }

    pub fn redo(&mut self) -> Outcome {
        self.apply(Action::Redo)
    }

    pub fn can_undo(&self) -> bool {
        self.state.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.state.can_redo()
    }

    // ─── Transient interaction ───────────────────────────────────────────

    pub fn set_dragging(&mut self, on: bool) {
        self.apply(Action::SetDragging(on));
    }

    pub fn set_resizing(&mut self, on: bool) {
        self.apply(Action::SetResizing(on));
    }

    pub fn set_drag_offset(&mut self, x: f32, y: f32) {
        self.apply(Action::SetDragOffset { x, y });
    }

    // ─── Whole-design import/export ──────────────────────────────────────

    /// Snapshot of all four views for the storage collaborator.
    pub fn export_design(&self) -> Design {
        let mut design = Design::default();
        for view in ViewKey::ALL {
            *design.get_mut(view) = self.state.elements(view).to_vec();
        }
        design
    }

    /// Restore every view from `design`: switch to each view and load its
    /// list, then return to the view that was active. Each view gains one
    /// history snapshot; selection ends up cleared.
    pub fn restore_design(&mut self, design: Design) {
        let original = self.state.active_view();
        let Design {
            front,
            back,
            left,
            right,
        } = design;
        for (view, elements) in [
            (ViewKey::Front, front),
            (ViewKey::Back, back),
            (ViewKey::Left, left),
            (ViewKey::Right, right),
        ] {
            self.switch_view(view);
            self.load_design(elements);
        }
        self.switch_view(original);
        log::debug!("restored design, back on {original}");
    }

    /// A generated id that no element of the active view already uses.
    /// Loaded designs may carry ids in the generated `prefix_n` form.
    fn fresh_id(&self, prefix: &str) -> ElementId {
        loop {
            let id = ElementId::with_prefix(prefix);
            if self.state.find(id).is_none() {
                return id;
            }
        }
    }

    // ─── Queries ─────────────────────────────────────────────────────────

    pub fn state(&self) -> &CanvasState {
        &self.state
    }

    pub fn active_view(&self) -> ViewKey {
        self.state.active_view()
    }

    pub fn active_elements(&self) -> &[DesignElement] {
        self.state.active_elements()
    }

    pub fn selected_id(&self) -> Option<ElementId> {
        self.state.selected()
    }

    pub fn selected_element(&self) -> Option<&DesignElement> {
        self.state.selected().and_then(|id| self.state.find(id))
    }

    /// Topmost element of the active view under `(x, y)`.
    pub fn element_at(&self, x: f32, y: f32) -> Option<ElementId> {
        hit::element_at(self.state.active_elements(), x, y)
    }

    pub fn history(&self, view: ViewKey) -> &History {
        self.state.history(view)
    }
}
