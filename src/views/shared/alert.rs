use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::ElementBuilder;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlertKind {
    Success,
    Danger,
}

impl AlertKind {
    fn class(&self) -> &'static str {
        match self {
            AlertKind::Success => "alert alert-success mt-3",
            AlertKind::Danger => "alert alert-danger mt-3",
        }
    }
}

pub fn render_alert(kind: AlertKind, text: &str) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("div")?
        .class(kind.class())
        .attr("role", "alert")?
        .text(text)
        .build())
}
