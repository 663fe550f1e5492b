// ============================================================================
// ACTIVATION VIEW - Activación de cuenta por token
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{append_child, set_inner_html, ElementBuilder};
use crate::state::AppState;
use crate::viewmodels::{ActivationViewModel, LoadState};
use crate::views::shared::{render_alert, render_spinner, AlertKind};

fn render_status(container: &Element, vm: &ActivationViewModel) -> Result<(), JsValue> {
    set_inner_html(container, "");

    let content = match vm.state() {
        LoadState::Loading => ElementBuilder::new("div")?
            .class("text-center")
            .child(render_spinner(false)?)?
            .build(),
        LoadState::Loaded(message) => render_alert(AlertKind::Success, &message)?,
        LoadState::Failed(message) => render_alert(AlertKind::Danger, &message)?,
    };

    append_child(container, &content)
}

pub fn render_activation(state: &AppState, token: &str) -> Result<Element, JsValue> {
    let vm = ActivationViewModel::new(token.to_string(), state.get_language());

    let page = ElementBuilder::new("div")?
        .test_id("activation-page")?
        .build();
    render_status(&page, &vm)?;

    let container = page.clone();
    spawn_local(async move {
        vm.activate().await;
        if let Err(e) = render_status(&container, &vm) {
            log::error!("❌ [ACTIVATION] Error renderizando estado: {:?}", e);
        }
    });

    Ok(page)
}
