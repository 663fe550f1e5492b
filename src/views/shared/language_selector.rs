use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, on_click, ElementBuilder};
use crate::state::AppState;
use crate::utils::Language;

/// Selector EN / FR (re-render completo al cambiar)
pub fn render_language_selector(state: &AppState) -> Result<Element, JsValue> {
    let container = ElementBuilder::new("div")?
        .class("language-selector text-center mt-4")
        .build();
    let current = state.get_language();

    for lang in Language::ALL {
        let class = if lang == current {
            "btn btn-sm btn-secondary mx-1"
        } else {
            "btn btn-sm btn-outline-secondary mx-1"
        };
        let button = ElementBuilder::new("button")?
            .class(class)
            .attr("type", "button")?
            .attr("title", lang.code())?
            .text(lang.label())
            .build();

        let state = state.clone();
        on_click(&button, move |_| {
            log::info!("🌐 [LANG] Cambiando idioma a {}", lang.code());
            state.set_language(lang);
        })?;
        append_child(&container, &button)?;
    }

    Ok(container)
}
