// ============================================================================
// USER PAGE - Perfil de un usuario
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{append_child, set_inner_html, ElementBuilder};
use crate::state::AppState;
use crate::viewmodels::{LoadState, UserViewModel};
use crate::views::shared::{render_alert, render_spinner, AlertKind};

fn render_content(container: &Element, vm: &UserViewModel) -> Result<(), JsValue> {
    set_inner_html(container, "");

    let content = match vm.state() {
        LoadState::Loading => ElementBuilder::new("div")?
            .class("text-center")
            .child(render_spinner(false)?)?
            .build(),
        LoadState::Loaded(user) => {
            let body = ElementBuilder::new("div")?
                .class("card-body text-center")
                .child(ElementBuilder::new("h3")?.text(&user.username).build())?
                .child(ElementBuilder::new("p")?.class("text-muted").text(&user.email).build())?
                .build();
            ElementBuilder::new("div")?.class("card").child(body)?.build()
        }
        LoadState::Failed(message) => render_alert(AlertKind::Danger, &message)?,
    };

    append_child(container, &content)
}

pub fn render_user_page(state: &AppState, id: &str) -> Result<Element, JsValue> {
    let vm = UserViewModel::new(id.to_string(), state.get_language());

    let page = ElementBuilder::new("div")?
        .class("col-lg-6 offset-lg-3 col-md-8 offset-md-2")
        .test_id("user-page")?
        .build();
    render_content(&page, &vm)?;

    let container = page.clone();
    spawn_local(async move {
        vm.load().await;
        if let Err(e) = render_content(&container, &vm) {
            log::error!("❌ [USER] Error renderizando usuario: {:?}", e);
        }
    });

    Ok(page)
}
