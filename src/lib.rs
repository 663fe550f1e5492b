// ============================================================================
// USER PORTAL - FRONTEND MVVM (RUST PURO)
// ============================================================================
// Arquitectura MVVM:
// - Views: Funciones que renderizan DOM
// - ViewModels: Estado + Lógica UI (sin DOM, testeables en nativo)
// - Services: SOLO comunicación API
// - State: State Management con Rc<RefCell>
// - Models: Estructuras compartidas con backend
// ============================================================================

pub mod app;
pub mod config;
pub mod dom;
pub mod error;
pub mod models;
pub mod router;
pub mod services;
pub mod state;
pub mod utils;
pub mod viewmodels;
pub mod views;

use std::cell::{Cell, RefCell};

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use wasm_logger::Config;

use crate::app::App;
use crate::config::CONFIG;

// Instancia global de App
thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
    static RENDER_PENDING: Cell<bool> = Cell::new(false);
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    wasm_logger::init(Config::new(CONFIG.log_level()));
    log::info!("🚀 User Portal - Rust Puro + MVVM");

    let mut app = App::new()?;
    app.render()?;

    APP.with(|app_cell| {
        *app_cell.borrow_mut() = Some(app);
    });

    // Back/forward del navegador
    router::listen_popstate()?;

    Ok(())
}

/// Programar un re-render en el próximo tick.
/// Varias llamadas seguidas producen un solo render.
pub fn request_render() {
    if RENDER_PENDING.with(|pending| pending.replace(true)) {
        return;
    }
    Timeout::new(0, || {
        RENDER_PENDING.with(|pending| pending.set(false));
        rerender_app();
    })
    .forget();
}

/// Re-render completo inmediato
pub fn rerender_app() {
    APP.with(|app_cell| match app_cell.try_borrow_mut() {
        Ok(mut app) => match app.as_mut() {
            Some(app) => {
                if let Err(e) = app.render() {
                    log::error!("❌ [RERENDER] Error re-renderizando: {:?}", e);
                }
            }
            None => log::warn!("⚠️ [RERENDER] App no está inicializada"),
        },
        Err(_) => {
            log::warn!("⚠️ [RERENDER] Render en curso, reintentando");
            request_render();
        }
    });
}
