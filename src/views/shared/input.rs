// ============================================================================
// INPUT - Input con label y mensaje de validación
// ============================================================================
// Con mensaje: el input lleva `is-invalid` y se agrega
// <span class="invalid-feedback">. Sin mensaje no existe ninguno de los dos.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, set_text_content, toggle_class, ElementBuilder};

#[derive(Clone)]
pub struct InputField {
    pub group: Element,
    pub input: Element,
    help: Rc<RefCell<Option<Element>>>,
}

impl InputField {
    pub fn new(id: &str, label: &str, input_type: &str) -> Result<Self, JsValue> {
        let label_element = ElementBuilder::new("label")?
            .class("form-label")
            .attr("for", id)?
            .text(label)
            .build();

        let input = ElementBuilder::new("input")?
            .class("form-control")
            .id(id)?
            .attr("type", input_type)?
            .attr("name", id)?
            .build();

        let group = ElementBuilder::new("div")?
            .class("mb-3")
            .child(label_element)?
            .child(input.clone())?
            .build();

        Ok(Self {
            group,
            input,
            help: Rc::new(RefCell::new(None)),
        })
    }

    /// Mostrar/ocultar el mensaje de ayuda
    pub fn set_help(&self, help: Option<&str>) -> Result<(), JsValue> {
        toggle_class(&self.input, "is-invalid", help.is_some())?;

        let mut current = self.help.borrow_mut();
        match (help, current.as_ref()) {
            (Some(text), Some(span)) => set_text_content(span, text),
            (Some(text), None) => {
                let span = ElementBuilder::new("span")?
                    .class("invalid-feedback")
                    .text(text)
                    .build();
                append_child(&self.group, &span)?;
                *current = Some(span);
            }
            (None, Some(span)) => {
                span.remove();
                *current = None;
            }
            (None, None) => {}
        }
        Ok(())
    }
}
