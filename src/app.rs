// ============================================================================
// APP - Aplicación principal
// ============================================================================

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, get_element_by_id, set_inner_html};
use crate::state::AppState;
use crate::utils::{BrowserStore, ROOT_ELEMENT_ID};
use crate::views::render_app;

/// Aplicación principal
pub struct App {
    state: AppState,
    root: Element,
}

impl App {
    /// Crear nueva aplicación montada en `#app`
    pub fn new() -> Result<Self, JsValue> {
        let root = get_element_by_id(ROOT_ELEMENT_ID)
            .ok_or_else(|| JsValue::from_str(&format!("No #{} element found", ROOT_ELEMENT_ID)))?;

        let state = AppState::new(Rc::new(BrowserStore));
        if state.auth.get_logged_in() {
            log::info!(
                "💾 [APP] Sesión restaurada para {}",
                state.auth.get_username().unwrap_or_default()
            );
        }

        // Login, logout o cambio de idioma -> re-render completo
        state.subscribe_to_changes(crate::request_render);

        Ok(Self { state, root })
    }

    /// Renderizar aplicación
    pub fn render(&mut self) -> Result<(), JsValue> {
        log::debug!("🎬 [APP] App::render() llamado");
        set_inner_html(&self.root, "");
        let view = render_app(&self.state)?;
        append_child(&self.root, &view)
    }
}
