// ============================================================================
// ROUTER - Rutas del cliente (History API)
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Rutas de la aplicación
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    Home,
    SignUp,
    Login,
    User(String),
    Activate(String),
    NotFound(String),
}

impl Route {
    /// Resolver un path (`/user/1`, `/signup/` ...) a su ruta
    pub fn parse(path: &str) -> Self {
        let path_only = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = path_only.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Route::Home,
            ["signup"] => Route::SignUp,
            ["login"] => Route::Login,
            ["user", id] => Route::User(id.to_string()),
            ["activate", token] => Route::Activate(token.to_string()),
            _ => Route::NotFound(path_only.to_string()),
        }
    }

    pub fn to_path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::SignUp => "/signup".to_string(),
            Route::Login => "/login".to_string(),
            Route::User(id) => format!("/user/{}", id),
            Route::Activate(token) => format!("/activate/{}", token),
            Route::NotFound(path) => path.clone(),
        }
    }

    /// `data-testid` de la página raíz que renderiza esta ruta
    pub fn test_id(&self) -> &'static str {
        match self {
            Route::Home => "home-page",
            Route::SignUp => "signup-page",
            Route::Login => "login-page",
            Route::User(_) => "user-page",
            Route::Activate(_) => "activation-page",
            Route::NotFound(_) => "not-found-page",
        }
    }
}

/// Path actual del navegador
pub fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

pub fn current_route() -> Route {
    Route::parse(&current_path())
}

/// Navegar a otra ruta sin recargar la página
pub fn navigate(route: &Route) {
    let path = route.to_path();
    log::info!("🧭 [ROUTER] Navegando a {}", path);

    if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
        if let Err(e) = history.push_state_with_url(&JsValue::NULL, "", Some(&path)) {
            log::error!("❌ [ROUTER] pushState falló: {:?}", e);
            return;
        }
    }
    crate::request_render();
}

/// Re-renderizar en back/forward del navegador.
/// Listener global: solo debe registrarse UNA VEZ (en el arranque).
pub fn listen_popstate() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;

    let closure = Closure::wrap(Box::new(move |_e: web_sys::PopStateEvent| {
        log::info!("🧭 [ROUTER] popstate -> {}", current_path());
        crate::request_render();
    }) as Box<dyn FnMut(web_sys::PopStateEvent)>);

    window.add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}
