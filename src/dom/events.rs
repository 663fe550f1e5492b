// ============================================================================
// EVENT HANDLING - Sistema de eventos
// ============================================================================
// GESTIÓN DE MEMORY LEAKS:
// - Listeners en elementos del DOM: cuando el elemento se destruye (re-render con
//   set_inner_html("")), el navegador limpia los listeners asociados, así que
//   closure.forget() es seguro.
// - Listeners globales (window/document): registrar UNA VEZ al inicio (ver router).
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, InputEvent, MouseEvent};

use crate::dom::input_value;
use crate::router::{navigate, Route};

/// Helper para crear click handler simple
pub fn on_click<F>(element: &Element, handler: F) -> Result<(), JsValue>
where
    F: FnMut(MouseEvent) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(MouseEvent)>);
    element.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Input handler que recibe directamente el valor del input
pub fn on_input_value<F>(input: &Element, mut handler: F) -> Result<(), JsValue>
where
    F: FnMut(String) + 'static,
{
    let target = input.clone();
    let closure = Closure::wrap(Box::new(move |_e: InputEvent| {
        if let Some(value) = input_value(&target) {
            handler(value);
        }
    }) as Box<dyn FnMut(InputEvent)>);
    input.add_event_listener_with_callback("input", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Submit de formulario, sin recargar la página
pub fn on_submit<F>(form: &Element, mut handler: F) -> Result<(), JsValue>
where
    F: FnMut() + 'static,
{
    let closure = Closure::wrap(Box::new(move |e: Event| {
        e.prevent_default();
        handler();
    }) as Box<dyn FnMut(Event)>);
    form.add_event_listener_with_callback("submit", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Link interno: navega con el router en vez de recargar
pub fn on_link_click(link: &Element, route: Route) -> Result<(), JsValue> {
    on_click(link, move |e: MouseEvent| {
        // Ctrl/Cmd+click abre en otra pestaña como siempre
        if e.ctrl_key() || e.meta_key() || e.shift_key() || e.button() != 0 {
            return;
        }
        e.prevent_default();
        navigate(&route);
    })
}
