// ============================================================================
// USER LIST VIEW - Card "Users" con paginación
// ============================================================================

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{append_child, on_click, set_hidden, set_inner_html, set_text_content, ElementBuilder};
use crate::router::{navigate, Route};
use crate::state::AppState;
use crate::utils::t;
use crate::viewmodels::UserListViewModel;
use crate::views::shared::render_spinner;

struct UserListElements {
    list: Element,
    previous: Element,
    next: Element,
    spinner: Element,
    failure: Element,
}

impl UserListElements {
    fn sync(&self, vm: &UserListViewModel) -> Result<(), JsValue> {
        set_inner_html(&self.list, "");
        for user in vm.users() {
            let item = ElementBuilder::new("li")?
                .class("list-group-item list-group-item-action")
                .attr("role", "link")?
                .text(&user.username)
                .build();
            let route = Route::User(user.id.to_string());
            on_click(&item, move |_| navigate(&route))?;
            append_child(&self.list, &item)?;
        }

        set_hidden(&self.previous, !vm.show_previous())?;
        set_hidden(&self.next, !vm.show_next())?;
        set_hidden(&self.spinner, !vm.is_pending())?;

        match vm.failure() {
            Some(message) => {
                set_text_content(&self.failure, &message);
                set_hidden(&self.failure, false)
            }
            None => set_hidden(&self.failure, true),
        }
    }
}

/// Cargar una página y refrescar el DOM al terminar
fn load_page(vm: &UserListViewModel, elements: &Rc<UserListElements>, page: u32) {
    let Some(page) = vm.begin_load(page) else {
        return;
    };
    let _ = elements.sync(vm);

    let vm = vm.clone();
    let elements = elements.clone();
    spawn_local(async move {
        vm.fetch(page).await;
        if let Err(e) = elements.sync(&vm) {
            log::error!("❌ [USERS] Error actualizando lista: {:?}", e);
        }
    });
}

pub fn render_user_list(state: &AppState) -> Result<Element, JsValue> {
    let lang = state.get_language();
    let vm = UserListViewModel::new(lang);

    let card = ElementBuilder::new("div")?.class("card").build();
    let header = ElementBuilder::new("div")?
        .class("card-header text-center")
        .child(ElementBuilder::new("h3")?.text(&t("users", lang)).build())?
        .build();

    let list = ElementBuilder::new("ul")?.class("list-group list-group-flush").build();

    let footer = ElementBuilder::new("div")?.class("card-footer text-center").build();
    let previous = ElementBuilder::new("button")?
        .class("btn btn-outline-secondary btn-sm float-start")
        .attr("type", "button")?
        .text(&t("previous_page", lang))
        .build();
    let next = ElementBuilder::new("button")?
        .class("btn btn-outline-secondary btn-sm float-end")
        .attr("type", "button")?
        .text(&t("next_page", lang))
        .build();
    let spinner = render_spinner(false)?;
    append_child(&footer, &previous)?;
    append_child(&footer, &spinner)?;
    append_child(&footer, &next)?;

    let failure = ElementBuilder::new("div")?
        .class("alert alert-danger m-2")
        .attr("role", "alert")?
        .build();

    append_child(&card, &header)?;
    append_child(&card, &list)?;
    append_child(&card, &failure)?;
    append_child(&card, &footer)?;

    let elements = Rc::new(UserListElements {
        list,
        previous: previous.clone(),
        next: next.clone(),
        spinner,
        failure,
    });

    {
        let vm = vm.clone();
        let elements = elements.clone();
        on_click(&previous, move |_| load_page(&vm, &elements, vm.previous_page()))?;
    }
    {
        let vm = vm.clone();
        let elements = elements.clone();
        on_click(&next, move |_| load_page(&vm, &elements, vm.next_page()))?;
    }

    load_page(&vm, &elements, 0);
    Ok(card)
}
