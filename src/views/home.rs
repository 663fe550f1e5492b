use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::ElementBuilder;
use crate::state::AppState;
use crate::views::user_list::render_user_list;

/// Home: lista de usuarios
pub fn render_home(state: &AppState) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("div")?
        .test_id("home-page")?
        .child(render_user_list(state)?)?
        .build())
}
