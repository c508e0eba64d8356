//! The transition function: `(CanvasState, Action) -> CanvasState`.
//!
//! `dispatch` owns the state it is given and hands it back together with an
//! [`Outcome`]. A call either applies completely or leaves the state exactly
//! as it was: every check runs against the current list before a new list
//! is built and committed.
//!
//! | Outcome | Meaning |
//! |---------|---------|
//! | `Applied` | state changed (structural actions also recorded a snapshot) |
//! | `Ignored` | nothing to do: unknown id, history boundary, same view, same selection |
//! | `Rejected` | the request contradicts the element (e.g. text update on an image) |

use crate::action::Action;
use crate::state::CanvasState;
use mockup_core::error::CanvasError;
use mockup_core::id::ElementId;
use mockup_core::model::{DesignElement, ViewKey};
use std::collections::HashSet;

/// Why an action left the state unchanged without being an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ignored {
    UnknownElement(ElementId),
    AlreadyActive(ViewKey),
    SelectionUnchanged,
    NothingToUndo,
    NothingToRedo,
}

#[derive(Debug)]
pub enum Outcome {
    Applied,
    Ignored(Ignored),
    Rejected(CanvasError),
}

impl Outcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Outcome::Applied)
    }

    /// `Ok(true)` if applied, `Ok(false)` if ignored, `Err` if rejected.
    pub fn into_result(self) -> Result<bool, CanvasError> {
        match self {
            Outcome::Applied => Ok(true),
            Outcome::Ignored(_) => Ok(false),
            Outcome::Rejected(err) => Err(err),
        }
    }
}

/// The state after an action, plus what happened.
#[derive(Debug)]
pub struct Transition {
    pub state: CanvasState,
    pub outcome: Outcome,
}

/// Apply `action` to `state`.
pub fn dispatch(mut state: CanvasState, action: Action) -> Transition {
    log::trace!("{}: dispatch {}", state.active_view(), action.name());
    let structural = action.is_structural();
    let outcome = apply(&mut state, action);
    debug_assert!(
        !(structural && outcome.is_applied())
            || (!state.can_redo() && state.active_history().current() == state.active_elements()),
        "applied structural action must leave its list as the newest snapshot"
    );
    match &outcome {
        Outcome::Applied => {}
        Outcome::Ignored(reason) => log::trace!("ignored: {reason:?}"),
        Outcome::Rejected(err) => log::warn!("rejected: {err}"),
    }
    Transition { state, outcome }
}

fn apply(state: &mut CanvasState, action: Action) -> Outcome {
    match action {
        Action::AddText { id, x, y, text } => {
            let el = DesignElement::text_with(id, x, y, &text, &state.config().text);
            add_element(state, el)
        }
        Action::AddImage {
            id,
            x,
            y,
            source,
            width,
            height,
        } => add_element(
            state,
            DesignElement::image_with(id, x, y, &source, width, height),
        ),
        Action::AddElement(el) => add_element(state, el),
        Action::DeleteElement(id) => delete_element(state, id),

        Action::Move { id, x, y } => edit_element(state, id, |el| {
            el.move_to(x, y);
            Ok(())
        }),
        Action::Resize { id, width, height } => edit_element(state, id, |el| {
            el.resize(width, height);
            Ok(())
        }),
        Action::Rotate { id, degrees } => edit_element(state, id, |el| {
            el.rotate_to(degrees);
            Ok(())
        }),
        Action::UpdateTextPayload { id, patch } => {
            edit_element(state, id, |el| el.update_text(patch))
        }
        Action::UpdateElement { id, patch } => edit_element(state, id, |el| el.apply_patch(patch)),

        Action::ClearCanvas => {
            state.commit(Vec::new());
            state.set_selected(None);
            Outcome::Applied
        }
        Action::LoadDesign(elements) => {
            warn_on_duplicates(state.active_view(), &elements);
            state.commit(elements);
            state.set_selected(None);
            Outcome::Applied
        }

        Action::SelectElement(target) => select(state, target),
        Action::SwitchView(view) => {
            if view == state.active_view() {
                return Outcome::Ignored(Ignored::AlreadyActive(view));
            }
            log::debug!("switch view {} -> {view}", state.active_view());
            state.switch_view(view);
            Outcome::Applied
        }

        Action::Undo => {
            if !state.undo() {
                return Outcome::Ignored(Ignored::NothingToUndo);
            }
            log::debug!(
                "{}: undo to {}",
                state.active_view(),
                state.active_history().index()
            );
            state.set_selected(None);
            Outcome::Applied
        }
        Action::Redo => {
            if !state.redo() {
                return Outcome::Ignored(Ignored::NothingToRedo);
            }
            log::debug!(
                "{}: redo to {}",
                state.active_view(),
                state.active_history().index()
            );
            state.set_selected(None);
            Outcome::Applied
        }

        Action::SetDragging(on) => {
            state.interaction.dragging = on;
            Outcome::Applied
        }
        Action::SetResizing(on) => {
            state.interaction.resizing = on;
            Outcome::Applied
        }
        Action::SetDragOffset { x, y } => {
            state.interaction.drag_offset = (x, y);
            Outcome::Applied
        }
    }
}

fn add_element(state: &mut CanvasState, el: DesignElement) -> Outcome {
    if state.find(el.id).is_some() {
        return Outcome::Rejected(CanvasError::DuplicateId(el.id));
    }
    let mut next = state.active_elements().to_vec();
    next.push(el);
    state.commit(next);
    Outcome::Applied
}

fn delete_element(state: &mut CanvasState, id: ElementId) -> Outcome {
    let Some(pos) = state.position_of(id) else {
        return Outcome::Ignored(Ignored::UnknownElement(id));
    };
    let mut next = state.active_elements().to_vec();
    next.remove(pos);
    state.commit(next);
    if state.selected() == Some(id) {
        state.set_selected(None);
    }
    Outcome::Applied
}

/// Edit one element of the active view on a copy of the list, committing
/// only if `edit` succeeds.
fn edit_element(
    state: &mut CanvasState,
    id: ElementId,
    edit: impl FnOnce(&mut DesignElement) -> Result<(), CanvasError>,
) -> Outcome {
    let Some(pos) = state.position_of(id) else {
        return Outcome::Ignored(Ignored::UnknownElement(id));
    };
    let mut next = state.active_elements().to_vec();
    if let Err(err) = edit(&mut next[pos]) {
        return Outcome::Rejected(err);
    }
    state.commit(next);
    Outcome::Applied
}

fn select(state: &mut CanvasState, target: Option<ElementId>) -> Outcome {
    if state.selected() == target {
        return Outcome::Ignored(Ignored::SelectionUnchanged);
    }
    if let Some(id) = target
        && state.find(id).is_none()
    {
        return Outcome::Ignored(Ignored::UnknownElement(id));
    }
    state.set_selected(target);
    Outcome::Applied
}

/// Loaded lists are trusted; duplicates are only reported.
fn warn_on_duplicates(view: ViewKey, elements: &[DesignElement]) {
    let mut seen = HashSet::with_capacity(elements.len());
    for el in elements {
        if !seen.insert(el.id) {
            log::warn!("{view}: loaded design contains duplicate id {}", el.id);
        }
    }
}
