// ============================================================================
// NAVBAR - Links de navegación según el estado de auth
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::{Element, MouseEvent};

use crate::dom::{append_child, on_click, on_link_click, ElementBuilder};
use crate::router::{navigate, Route};
use crate::state::AppState;
use crate::utils::t;

fn render_link(text: &str, route: Route) -> Result<Element, JsValue> {
    let link = ElementBuilder::new("a")?
        .class("nav-link")
        .attr("href", &route.to_path())?
        .text(text)
        .build();
    on_link_click(&link, route)?;
    Ok(link)
}

pub fn render_navbar(state: &AppState) -> Result<Element, JsValue> {
    let lang = state.get_language();

    let nav = ElementBuilder::new("nav")?
        .class("navbar navbar-expand navbar-light bg-light shadow-sm")
        .build();
    let container = ElementBuilder::new("div")?.class("container").build();

    let brand = ElementBuilder::new("a")?
        .class("navbar-brand")
        .attr("href", "/")?
        .attr("title", &t("home", lang))?
        .text(&t("app_name", lang))
        .build();
    on_link_click(&brand, Route::Home)?;

    let links = ElementBuilder::new("ul")?.class("navbar-nav ms-auto").build();
    let mut items = vec![render_link(&t("home", lang), Route::Home)?];

    match (state.auth.get_logged_in(), state.auth.get_id()) {
        (true, Some(id)) => {
            items.push(render_link(&t("my_profile", lang), Route::User(id.to_string()))?);

            let logout = ElementBuilder::new("a")?
                .class("nav-link")
                .attr("href", "/")?
                .text(&t("logout", lang))
                .build();
            let state = state.clone();
            on_click(&logout, move |e: MouseEvent| {
                e.prevent_default();
                log::info!("👋 [NAVBAR] Logout");
                state.logout();
                navigate(&Route::Home);
            })?;
            items.push(logout);
        }
        _ => {
            items.push(render_link(&t("sign_up", lang), Route::SignUp)?);
            items.push(render_link(&t("login", lang), Route::Login)?);
        }
    }

    for link in items {
        let item = ElementBuilder::new("li")?.class("nav-item").child(link)?.build();
        append_child(&links, &item)?;
    }

    append_child(&container, &brand)?;
    append_child(&container, &links)?;
    append_child(&nav, &container)?;
    Ok(nav)
}
