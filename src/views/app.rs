// ============================================================================
// APP VIEW - Layout principal: navbar + página de la ruta actual
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, ElementBuilder};
use crate::router::{current_route, Route};
use crate::state::AppState;
use crate::utils::t;
use crate::views::{
    render_activation, render_home, render_login, render_navbar, render_signup, render_user_page,
};
use crate::views::shared::render_language_selector;

/// Página para una ruta concreta
pub fn render_page(state: &AppState, route: &Route) -> Result<Element, JsValue> {
    log::debug!("🧭 [APP] Renderizando ruta {}", route.to_path());
    match route {
        Route::Home => render_home(state),
        Route::SignUp => render_signup(state),
        Route::Login => render_login(state),
        Route::User(id) => render_user_page(state, id),
        Route::Activate(token) => render_activation(state, token),
        Route::NotFound(_) => render_not_found(state),
    }
}

fn render_not_found(state: &AppState) -> Result<Element, JsValue> {
    let heading = ElementBuilder::new("h3")?
        .class("text-center text-muted")
        .text(&t("page_not_found", state.get_language()))
        .build();
    Ok(ElementBuilder::new("div")?
        .test_id(Route::NotFound(String::new()).test_id())?
        .child(heading)?
        .build())
}

/// Renderizar la app completa
pub fn render_app(state: &AppState) -> Result<Element, JsValue> {
    let root = ElementBuilder::new("div")?.class("app-shell").build();
    append_child(&root, &render_navbar(state)?)?;

    let container = ElementBuilder::new("div")?.class("container pt-3").build();
    append_child(&container, &render_page(state, &current_route())?)?;
    append_child(&container, &render_language_selector(state)?)?;
    append_child(&root, &container)?;

    Ok(root)
}
