use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::ElementBuilder;

/// Spinner accesible (`role="status"`)
pub fn render_spinner(small: bool) -> Result<Element, JsValue> {
    let class = if small {
        "spinner-border spinner-border-sm"
    } else {
        "spinner-border"
    };

    Ok(ElementBuilder::new("span")?
        .class(class)
        .attr("role", "status")?
        .attr("aria-hidden", "true")?
        .build())
}
