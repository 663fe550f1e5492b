use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, set_disabled, set_hidden, ElementBuilder};
use crate::views::shared::render_spinner;

/// Botón de submit con spinner mientras hay una request en curso
#[derive(Clone)]
pub struct ProgressButton {
    pub button: Element,
    spinner: Element,
}

impl ProgressButton {
    pub fn new(text: &str) -> Result<Self, JsValue> {
        let spinner = render_spinner(true)?;

        let label = ElementBuilder::new("span")?.text(text).build();
        let button = ElementBuilder::new("button")?
            .class("btn btn-primary")
            .attr("type", "submit")?
            .build();
        append_child(&button, &spinner)?;
        append_child(&button, &label)?;

        // Deshabilitado y sin spinner hasta el primer update
        let progress = Self { button, spinner };
        progress.update(true, false)?;
        Ok(progress)
    }

    pub fn update(&self, disabled: bool, in_progress: bool) -> Result<(), JsValue> {
        set_disabled(&self.button, disabled)?;
        set_hidden(&self.spinner, !in_progress)?;
        // role="status" solo mientras el spinner es visible
        if in_progress {
            self.spinner.set_attribute("role", "status")
        } else {
            self.spinner.remove_attribute("role")
        }
    }
}
