//! Every intent the canvas engine understands.
//!
//! Actions are plain data. Adds carry their element id so that dispatching
//! the same action on the same state always yields the same result; the
//! `add_text` / `add_image` constructors allocate a fresh id for callers.

use mockup_core::id::ElementId;
use mockup_core::model::{DesignElement, ElementPatch, TextPatch, ViewKey};

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // ── Structural ──
    AddText {
        id: ElementId,
        x: f32,
        y: f32,
        text: String,
    },
    AddImage {
        id: ElementId,
        x: f32,
        y: f32,
        source: String,
        width: f32,
        height: f32,
    },
    AddElement(DesignElement),
    DeleteElement(ElementId),

    // ── Geometry ──
    Move {
        id: ElementId,
        x: f32,
        y: f32,
    },
    Resize {
        id: ElementId,
        width: f32,
        height: f32,
    },
    /// Absolute rotation in degrees.
    Rotate {
        id: ElementId,
        degrees: f32,
    },

    // ── Payload ──
    UpdateTextPayload {
        id: ElementId,
        patch: TextPatch,
    },
    UpdateElement {
        id: ElementId,
        patch: ElementPatch,
    },

    // ── Bulk ──
    ClearCanvas,
    LoadDesign(Vec<DesignElement>),

    // ── Selection / view ──
    SelectElement(Option<ElementId>),
    SwitchView(ViewKey),

    // ── History ──
    Undo,
    Redo,

    // ── Transient ──
    SetDragging(bool),
    SetResizing(bool),
    SetDragOffset {
        x: f32,
        y: f32,
    },
}

impl Action {
    /// `AddText` with a freshly generated id.
    pub fn add_text(x: f32, y: f32, text: impl Into<String>) -> Self {
        Action::AddText {
            id: ElementId::with_prefix("text"),
            x,
            y,
            text: text.into(),
        }
    }

    /// `AddImage` with a freshly generated id.
    pub fn add_image(x: f32, y: f32, source: impl Into<String>, width: f32, height: f32) -> Self {
        Action::AddImage {
            id: ElementId::with_prefix("image"),
            x,
            y,
            source: source.into(),
            width,
            height,
        }
    }

    /// Whether applying this action records a history snapshot.
    /// Ignored and rejected actions record nothing either way.
    pub fn is_structural(&self) -> bool {
        !matches!(
            self,
            Action::SelectElement(_)
                | Action::SwitchView(_)
                | Action::Undo
                | Action::Redo
                | Action::SetDragging(_)
                | Action::SetResizing(_)
                | Action::SetDragOffset { .. }
        )
    }

    /// Short name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            Action::AddText { .. } => "add_text",
            Action::AddImage { .. } => "add_image",
            Action::AddElement(_) => "add_element",
            Action::DeleteElement(_) => "delete_element",
            Action::Move { .. } => "move",
            Action::Resize { .. } => "resize",
            Action::Rotate { .. } => "rotate",
            Action::UpdateTextPayload { .. } => "update_text_payload",
            Action::UpdateElement { .. } => "update_element",
            Action::ClearCanvas => "clear_canvas",
            Action::LoadDesign(_) => "load_design",
            Action::SelectElement(_) => "select_element",
            Action::SwitchView(_) => "switch_view",
            Action::Undo => "undo",
            Action::Redo => "redo",
            Action::SetDragging(_) => "set_dragging",
            Action::SetResizing(_) => "set_resizing",
            Action::SetDragOffset { .. } => "set_drag_offset",
        }
    }
}
