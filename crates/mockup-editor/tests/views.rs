//! Integration tests: view isolation, selection, and design load/restore
//! (mockup-editor ↔ mockup-core).

use mockup_core::design::Design;
use mockup_core::id::ElementId;
use mockup_core::model::*;
use mockup_editor::{CanvasSession, Ignored, Outcome};
use pretty_assertions::assert_eq;

fn fixture() -> Design {
    Design::from_json(include_str!("fixtures/hoodie_design.json")).expect("fixture parses")
}

// ─── Isolation ──────────────────────────────────────────────────────────

#[test]
fn front_edits_never_touch_other_views() {
    let mut session = CanvasSession::default();
    session.restore_design(fixture());
    let untouched: Vec<_> = [ViewKey::Back, ViewKey::Left, ViewKey::Right]
        .into_iter()
        .map(|v| {
            (
                session.state().elements(v).to_vec(),
                session.history(v).clone(),
            )
        })
        .collect();

    let id = session.add_text(5.0, 5.0, "front only");
    session.move_element(id, 20.0, 20.0);
    session.resize_element(id, 300.0, 40.0);
    session.rotate_element(id, 90.0);
    session.undo();
    session.redo();
    session.delete_element(id);
    session.clear_canvas();
    session.load_design(vec![DesignElement::text(1.0, 1.0, "fresh")]);

    for (view, (elements, history)) in [ViewKey::Back, ViewKey::Left, ViewKey::Right]
        .into_iter()
        .zip(untouched)
    {
        assert_eq!(session.state().elements(view), elements.as_slice());
        assert_eq!(session.history(view), &history);
    }
}

#[test]
fn switching_away_and_back_preserves_front() {
    let mut session = CanvasSession::default();
    let id = session.add_text(0.0, 0.0, "a");
    session.move_element(id, 9.0, 9.0);
    session.undo();
    let elements = session.active_elements().to_vec();
    let index = session.history(ViewKey::Front).index();

    session.switch_view(ViewKey::Back);
    session.add_text(0.0, 0.0, "b");
    session.switch_view(ViewKey::Front);

    assert_eq!(session.active_elements(), elements.as_slice());
    assert_eq!(session.history(ViewKey::Front).index(), index);
    assert!(session.can_redo());
}

// ─── Scenario B ─────────────────────────────────────────────────────────

#[test]
fn image_on_back_leaves_front_alone() {
    let mut session = CanvasSession::default();
    session.add_text(0.0, 0.0, "front text");
    let front_before = session.active_elements().to_vec();

    session.switch_view(ViewKey::Back);
    session.add_image(0.0, 0.0, "uri", 100.0, 100.0);

    assert_eq!(session.state().elements(ViewKey::Front), front_before.as_slice());
    let back = session.state().elements(ViewKey::Back);
    assert_eq!(back.len(), 1);
    assert_eq!(back[0].kind(), ElementKind::Image);
    assert_eq!((back[0].width, back[0].height), (100.0, 100.0));
}

#[test]
fn undo_is_per_view() {
    let mut session = CanvasSession::default();
    session.add_text(0.0, 0.0, "front");
    session.switch_view(ViewKey::Right);
    assert!(!session.can_undo());
    assert!(matches!(
        session.undo(),
        Outcome::Ignored(Ignored::NothingToUndo)
    ));
    session.switch_view(ViewKey::Front);
    assert!(session.can_undo());
}

// ─── Selection ──────────────────────────────────────────────────────────

#[test]
fn deleting_selected_element_clears_selection() {
    let mut session = CanvasSession::default();
    let id = session.add_text(0.0, 0.0, "E");
    session.select_element(Some(id));
    assert_eq!(session.selected_id(), Some(id));

    session.delete_element(id);
    assert_eq!(session.selected_id(), None);
}

#[test]
fn deleting_other_element_keeps_selection() {
    let mut session = CanvasSession::default();
    let keep = session.add_text(0.0, 0.0, "keep");
    let drop = session.add_text(0.0, 50.0, "drop");
    session.select_element(Some(keep));
    session.delete_element(drop);
    assert_eq!(session.selected_id(), Some(keep));
    assert_eq!(session.selected_element().map(|el| el.id), Some(keep));
}

#[test]
fn switching_view_clears_selection() {
    let mut session = CanvasSession::default();
    let id = session.add_text(0.0, 0.0, "E");
    session.select_element(Some(id));
    session.switch_view(ViewKey::Left);
    assert_eq!(session.selected_id(), None);
}

#[test]
fn cannot_select_element_of_inactive_view() {
    let mut session = CanvasSession::default();
    let id = session.add_text(0.0, 0.0, "front");
    session.switch_view(ViewKey::Back);
    assert!(matches!(
        session.select_element(Some(id)),
        Outcome::Ignored(Ignored::UnknownElement(_))
    ));
}

// ─── No-ops ─────────────────────────────────────────────────────────────

#[test]
fn unknown_id_leaves_state_deep_equal() {
    let mut session = CanvasSession::default();
    session.restore_design(fixture());
    let before = session.state().clone();
    let ghost = ElementId::intern("no_such_element");

    assert!(matches!(
        session.move_element(ghost, 5.0, 5.0),
        Outcome::Ignored(Ignored::UnknownElement(_))
    ));
    session.resize_element(ghost, 1.0, 1.0);
    session.rotate_element(ghost, 1.0);
    session.delete_element(ghost);
    session.update_text_data(ghost, TextPatch::default());
    session.update_element(ghost, ElementPatch::default());

    assert_eq!(session.state(), &before);
}

// ─── Load / export ──────────────────────────────────────────────────────

#[test]
fn load_design_round_trips_active_view() {
    let design = fixture();
    let mut session = CanvasSession::default();
    assert!(session.load_design(design.front.clone()).is_applied());
    assert_eq!(session.active_elements(), design.front.as_slice());
    // Single-view semantics: other views stay empty
    assert!(session.state().elements(ViewKey::Back).is_empty());
}

#[test]
fn load_design_is_undoable() {
    let mut session = CanvasSession::default();
    session.add_text(0.0, 0.0, "draft");
    let draft = session.active_elements().to_vec();
    session.load_design(fixture().front);
    session.undo();
    assert_eq!(session.active_elements(), draft.as_slice());
}

#[test]
fn restore_then_export_is_identity() {
    let design = fixture();
    let mut session = CanvasSession::default();
    session.switch_view(ViewKey::Left);
    session.restore_design(design.clone());

    assert_eq!(session.active_view(), ViewKey::Left);
    assert_eq!(session.export_design(), design);
    for view in ViewKey::ALL {
        assert_eq!(session.history(view).len(), 2, "{view} history");
    }
}

#[test]
fn generated_ids_skip_loaded_ones() {
    let mut session = CanvasSession::default();
    let loaded: Vec<DesignElement> = (0..64)
        .map(|n| {
            let mut el = DesignElement::text(0.0, 0.0, "loaded");
            el.id = ElementId::intern(&format!("text_{n}"));
            el
        })
        .collect();
    session.load_design(loaded);

    let id = session.add_text(0.0, 0.0, "new");
    assert_eq!(session.active_elements().len(), 65);
    assert_eq!(session.active_elements().last().map(|el| el.id), Some(id));
}
