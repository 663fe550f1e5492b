// ============================================================================
// LOGIN VIEW - Formulario de login
// ============================================================================

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{append_child, on_input_value, on_submit, set_hidden, set_text_content, ElementBuilder};
use crate::router::{navigate, Route};
use crate::state::AppState;
use crate::utils::t;
use crate::viewmodels::{LoginField, LoginViewModel};
use crate::views::shared::{render_alert, AlertKind, InputField, ProgressButton};

struct LoginElements {
    button: ProgressButton,
    failure: Element,
}

impl LoginElements {
    fn sync(&self, vm: &LoginViewModel) -> Result<(), JsValue> {
        self.button.update(vm.is_submit_disabled(), vm.is_in_progress())?;
        match vm.failure() {
            Some(message) => {
                set_text_content(&self.failure, &message);
                set_hidden(&self.failure, false)
            }
            None => set_hidden(&self.failure, true),
        }
    }
}

/// Renderizar vista de login
pub fn render_login(state: &AppState) -> Result<Element, JsValue> {
    log::info!("🎬 [LOGIN] render_login() llamado");
    let lang = state.get_language();
    let vm = LoginViewModel::new(lang);

    let page = ElementBuilder::new("div")?
        .class("col-lg-6 offset-lg-3 col-md-8 offset-md-2")
        .test_id("login-page")?
        .build();

    let form = ElementBuilder::new("form")?
        .class("card")
        .attr("novalidate", "")?
        .build();

    let header = ElementBuilder::new("div")?
        .class("card-header")
        .child(ElementBuilder::new("h1")?.class("text-center").text(&t("login", lang)).build())?
        .build();

    let body = ElementBuilder::new("div")?.class("card-body").build();

    let email = InputField::new("login-email", &t("email", lang), "email")?;
    let password = InputField::new("login-password", &t("password", lang), "password")?;
    append_child(&body, &email.group)?;
    append_child(&body, &password.group)?;

    let failure = render_alert(AlertKind::Danger, "")?;
    set_hidden(&failure, true)?;
    append_child(&body, &failure)?;

    let button = ProgressButton::new(&t("login", lang))?;
    let footer = ElementBuilder::new("div")?
        .class("text-center")
        .child(button.button.clone())?
        .build();
    append_child(&body, &footer)?;

    append_child(&form, &header)?;
    append_child(&form, &body)?;
    append_child(&page, &form)?;

    let elements = Rc::new(LoginElements { button, failure });

    for (field, input) in [(LoginField::Email, &email), (LoginField::Password, &password)] {
        let vm = vm.clone();
        let elements = elements.clone();
        on_input_value(&input.input, move |value| {
            vm.set_value(field, value);
            let _ = elements.sync(&vm);
        })?;
    }

    {
        let vm = vm.clone();
        let elements = elements.clone();
        let state = state.clone();
        on_submit(&form, move || {
            // Un solo request aunque se haga click varias veces
            let Some(request) = vm.begin_submit() else {
                return;
            };
            let _ = elements.sync(&vm);

            let vm = vm.clone();
            let elements = elements.clone();
            let state = state.clone();
            spawn_local(async move {
                match vm.send(request).await {
                    Some(user) => {
                        state.login(user.id, user.username);
                        navigate(&Route::Home);
                    }
                    None => {
                        if let Err(e) = elements.sync(&vm) {
                            log::error!("❌ [LOGIN] Error actualizando formulario: {:?}", e);
                        }
                    }
                }
            });
        })?;
    }

    elements.sync(&vm)?;
    Ok(page)
}
