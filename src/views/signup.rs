// ============================================================================
// SIGN UP VIEW - Formulario de registro
// ============================================================================

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{append_child, on_input_value, on_submit, set_hidden, set_text_content, ElementBuilder};
use crate::state::AppState;
use crate::utils::t;
use crate::viewmodels::{SignUpField, SignUpViewModel};
use crate::views::shared::{render_alert, AlertKind, InputField, ProgressButton};

/// Elementos que cambian según el estado del viewmodel
struct SignUpElements {
    form: Element,
    inputs: Vec<(SignUpField, InputField)>,
    button: ProgressButton,
    failure: Element,
    success: Element,
}

impl SignUpElements {
    fn sync(&self, vm: &SignUpViewModel) -> Result<(), JsValue> {
        for (field, input) in &self.inputs {
            input.set_help(vm.help(*field).as_deref())?;
        }
        self.button.update(vm.is_submit_disabled(), vm.is_in_progress())?;

        match vm.failure() {
            Some(message) => {
                set_text_content(&self.failure, &message);
                set_hidden(&self.failure, false)?;
            }
            None => set_hidden(&self.failure, true)?,
        }

        set_hidden(&self.form, vm.is_success())?;
        set_hidden(&self.success, !vm.is_success())?;
        Ok(())
    }
}

/// Renderizar página de registro
pub fn render_signup(state: &AppState) -> Result<Element, JsValue> {
    let lang = state.get_language();
    let vm = SignUpViewModel::new(lang);

    let page = ElementBuilder::new("div")?
        .class("col-lg-6 offset-lg-3 col-md-8 offset-md-2")
        .test_id("signup-page")?
        .build();

    let form = ElementBuilder::new("form")?
        .class("card")
        .attr("novalidate", "")?
        .build();

    let header = ElementBuilder::new("div")?
        .class("card-header")
        .child(ElementBuilder::new("h1")?.class("text-center").text(&t("sign_up", lang)).build())?
        .build();

    let body = ElementBuilder::new("div")?.class("card-body").build();

    let mut inputs = Vec::new();
    for field in SignUpField::ALL {
        let input = InputField::new(&format!("signup-{}", field.key()), &t(field.label_key(), lang), field.input_type())?;
        append_child(&body, &input.group)?;
        inputs.push((field, input));
    }

    let failure = render_alert(AlertKind::Danger, "")?;
    set_hidden(&failure, true)?;
    append_child(&body, &failure)?;

    let button = ProgressButton::new(&t("sign_up", lang))?;
    let footer = ElementBuilder::new("div")?
        .class("text-center")
        .child(button.button.clone())?
        .build();
    append_child(&body, &footer)?;

    append_child(&form, &header)?;
    append_child(&form, &body)?;

    let success = render_alert(AlertKind::Success, &t("account_activation_notification", lang))?;
    set_hidden(&success, true)?;

    append_child(&page, &form)?;
    append_child(&page, &success)?;

    let elements = Rc::new(SignUpElements {
        form: form.clone(),
        inputs,
        button,
        failure,
        success,
    });

    // Inputs -> viewmodel -> DOM
    for (field, input) in &elements.inputs {
        let field = *field;
        let vm = vm.clone();
        let elements_for_input = elements.clone();
        on_input_value(&input.input, move |value| {
            vm.set_value(field, value);
            if let Err(e) = elements_for_input.sync(&vm) {
                log::error!("❌ [SIGNUP] Error actualizando formulario: {:?}", e);
            }
        })?;
    }

    // Submit
    {
        let vm = vm.clone();
        let elements = elements.clone();
        on_submit(&form, move || {
            let Some(request) = vm.begin_submit() else {
                return;
            };
            let _ = elements.sync(&vm);

            let vm = vm.clone();
            let elements = elements.clone();
            spawn_local(async move {
                vm.send(request).await;
                if let Err(e) = elements.sync(&vm) {
                    log::error!("❌ [SIGNUP] Error actualizando formulario: {:?}", e);
                }
            });
        })?;
    }

    elements.sync(&vm)?;
    Ok(page)
}
