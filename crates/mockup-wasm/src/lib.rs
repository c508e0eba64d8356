//! WASM bridge for the mockup canvas — exposes the session facade to the
//! storefront's design page.
//!
//! Compiled via `wasm-pack build --target web`. Ids cross the boundary as
//! strings, views as `"front" | "back" | "left" | "right"`, and element
//! lists, patches, and designs as JSON.

use mockup_core::config::CanvasConfig;
use mockup_core::design::Design;
use mockup_core::id::ElementId;
use mockup_core::model::{DesignElement, ElementPatch, TextPatch, ViewKey};
use mockup_editor::CanvasSession;
use serde::de::DeserializeOwned;
use wasm_bindgen::prelude::*;

/// The WASM-facing canvas controller. One instance per design page.
#[wasm_bindgen]
pub struct MockupCanvas {
    session: CanvasSession,
}

#[wasm_bindgen]
impl MockupCanvas {
    /// Create a canvas with the given shared dimensions and default settings.
    #[wasm_bindgen(constructor)]
    pub fn new(width: f32, height: f32) -> Self {
        console_error_panic_hook_setup();
        let config = CanvasConfig {
            width,
            height,
            ..Default::default()
        };
        Self {
            session: CanvasSession::new(config),
        }
    }

    /// Replace the session with a fresh one built from a (partial) JSON
    /// config. Discards all elements and history. Returns `false` on bad JSON.
    pub fn configure(&mut self, config_json: &str) -> bool {
        match CanvasConfig::from_json(config_json) {
            Ok(config) => {
                self.session = CanvasSession::new(config);
                true
            }
            Err(err) => {
                log::warn!("configure: {err}");
                false
            }
        }
    }

    // ─── Elements ────────────────────────────────────────────────────────

    /// Add a text element. Returns its id.
    pub fn add_text(&mut self, x: f32, y: f32, text: &str) -> String {
        self.session.add_text(x, y, text).to_string()
    }

    /// Add an image element. Returns its id.
    pub fn add_image(&mut self, x: f32, y: f32, source: &str, width: f32, height: f32) -> String {
        self.session
            .add_image(x, y, source, width, height)
            .to_string()
    }

    /// Add an image at the asset-picker default spot and size. Returns its id.
    pub fn add_image_centered(&mut self, source: &str) -> String {
        self.session.add_image_centered(source).to_string()
    }

    pub fn move_element(&mut self, id: &str, x: f32, y: f32) -> bool {
        known_id(id).is_some_and(|id| self.session.move_element(id, x, y).is_applied())
    }

    pub fn resize_element(&mut self, id: &str, width: f32, height: f32) -> bool {
        known_id(id).is_some_and(|id| {
            self.session
                .resize_element(id, width, height)
                .is_applied()
        })
    }

    pub fn rotate_element(&mut self, id: &str, degrees: f32) -> bool {
        known_id(id).is_some_and(|id| self.session.rotate_element(id, degrees).is_applied())
    }

    pub fn delete_element(&mut self, id: &str) -> bool {
        known_id(id).is_some_and(|id| self.session.delete_element(id).is_applied())
    }

    /// Apply a JSON text patch, e.g. `{"text":"Hi","color":"#FF0000"}`.
    /// Returns `false` on bad JSON, unknown id, or a non-text element.
    pub fn update_text_data(&mut self, id: &str, patch_json: &str) -> bool {
        let Some(id) = known_id(id) else {
            return false;
        };
        let Some(patch) = parse_json::<TextPatch>("update_text_data", patch_json) else {
            return false;
        };
        self.session.update_text_data(id, patch).is_applied()
    }

    /// Apply a JSON element patch, e.g. `{"x":10,"rotation":45}`.
    pub fn update_element(&mut self, id: &str, patch_json: &str) -> bool {
        let Some(id) = known_id(id) else {
            return false;
        };
        let Some(patch) = parse_json::<ElementPatch>("update_element", patch_json) else {
            return false;
        };
        self.session.update_element(id, patch).is_applied()
    }

    pub fn clear_canvas(&mut self) -> bool {
        self.session.clear_canvas().is_applied()
    }

    // ─── Selection & views ───────────────────────────────────────────────

    /// Select an element by id; an empty string clears the selection.
    pub fn select_element(&mut self, id: &str) -> bool {
        if id.is_empty() {
            return self.session.select_element(None).is_applied();
        }
        known_id(id).is_some_and(|id| self.session.select_element(Some(id)).is_applied())
    }

    /// Get the selected element id, or empty string if none.
    pub fn selected_id(&self) -> String {
        self.session
            .selected_id()
            .map(|id| id.to_string())
            .unwrap_or_default()
    }

    /// Topmost element id under the pointer, or empty string.
    pub fn element_at(&self, x: f32, y: f32) -> String {
        self.session
            .element_at(x, y)
            .map(|id| id.to_string())
            .unwrap_or_default()
    }

    pub fn switch_view(&mut self, view: &str) -> bool {
        match view.parse::<ViewKey>() {
            Ok(view) => self.session.switch_view(view).is_applied(),
            Err(err) => {
                log::warn!("switch_view: {err}");
                false
            }
        }
    }

    pub fn active_view(&self) -> String {
        self.session.active_view().to_string()
    }

    // ─── History ─────────────────────────────────────────────────────────

    pub fn undo(&mut self) -> bool {
        self.session.undo().is_applied()
    }

    pub fn redo(&mut self) -> bool {
        self.session.redo().is_applied()
    }

    pub fn can_undo(&self) -> bool {
        self.session.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.session.can_redo()
    }

    // ─── Interaction flags ───────────────────────────────────────────────

    pub fn set_dragging(&mut self, on: bool) {
        self.session.set_dragging(on);
    }

    pub fn set_resizing(&mut self, on: bool) {
        self.session.set_resizing(on);
    }

    pub fn set_drag_offset(&mut self, x: f32, y: f32) {
        self.session.set_drag_offset(x, y);
    }

    // ─── Import / export ─────────────────────────────────────────────────

    /// The active view's elements as a JSON array (what the renderer paints).
    pub fn elements_json(&self) -> String {
        serde_json::to_string(self.session.active_elements()).unwrap_or_else(|_| "[]".to_string())
    }

    /// Replace the active view's elements from a JSON array.
    pub fn load_design(&mut self, elements_json: &str) -> bool {
        let Some(elements) = parse_json::<Vec<DesignElement>>("load_design", elements_json) else {
            return false;
        };
        self.session.load_design(elements).is_applied()
    }

    /// All four views as a JSON design document.
    pub fn design_json(&self) -> String {
        self.session
            .export_design()
            .to_json()
            .unwrap_or_else(|_| "{}".to_string())
    }

    /// Restore all four views from a JSON design document.
    /// The design is validated first; invalid designs leave the canvas as is.
    pub fn restore_design(&mut self, design_json: &str) -> bool {
        match Design::from_json(design_json) {
            Ok(design) => {
                self.session.restore_design(design);
                true
            }
            Err(err) => {
                log::warn!("restore_design: {err}");
                false
            }
        }
    }
}

/// Ids arriving from JS that were never interned cannot name an element,
/// so they are rejected without growing the interner.
fn known_id(id: &str) -> Option<ElementId> {
    let found = ElementId::lookup(id);
    if found.is_none() {
        log::debug!("unknown element id {id:?}");
    }
    found
}

fn parse_json<T: DeserializeOwned>(context: &str, json: &str) -> Option<T> {
    serde_json::from_str(json)
        .map_err(|err| log::warn!("{context}: invalid JSON: {err}"))
        .ok()
}

fn console_error_panic_hook_setup() {
    #[cfg(target_arch = "wasm32")]
    {
        use std::sync::Once;
        static SET_HOOK: Once = Once::new();
        SET_HOOK.call_once(|| {
            std::panic::set_hook(Box::new(|info| {
                let msg = format!("Mockup canvas WASM panic: {info}");
                web_sys::console::error_1(&msg.into());
            }));
        });
    }
}
