//! Tests de DOM: corren en el navegador con `wasm-pack test --headless --firefox`
#![cfg(target_arch = "wasm32")]

use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Element, Event, HtmlButtonElement, HtmlElement, HtmlInputElement};

use user_portal_pwa::router::Route;
use user_portal_pwa::state::AppState;
use user_portal_pwa::utils::{BrowserStore, KeyValueStore, Language, MemoryStore, AUTH_STORAGE_KEY};
use user_portal_pwa::views::{render_navbar, render_page};
use user_portal_pwa::views::shared::{InputField, ProgressButton};

wasm_bindgen_test_configure!(run_in_browser);

fn state() -> AppState {
    AppState::new(Rc::new(MemoryStore::default()))
}

fn query(root: &Element, selector: &str) -> Option<Element> {
    root.query_selector(selector).ok().flatten()
}

fn type_into(root: &Element, selector: &str, value: &str) {
    let input: HtmlInputElement = query(root, selector).unwrap().dyn_into().unwrap();
    input.set_value(value);
    input.dispatch_event(&Event::new("input").unwrap()).unwrap();
}

fn link_texts(root: &Element) -> Vec<String> {
    let links = root.query_selector_all("a.nav-link").unwrap();
    (0..links.length())
        .filter_map(|i| links.item(i))
        .filter_map(|node| node.text_content())
        .collect()
}

fn submit_button(root: &Element) -> HtmlButtonElement {
    query(root, "button[type=submit]").unwrap().dyn_into().unwrap()
}

#[wasm_bindgen_test]
fn each_route_renders_its_page() {
    let state = state();
    for route in [
        Route::Home,
        Route::SignUp,
        Route::Login,
        Route::User("1".to_string()),
        Route::Activate("abcd".to_string()),
        Route::NotFound("/nowhere".to_string()),
    ] {
        let page = render_page(&state, &route).unwrap();
        assert_eq!(page.get_attribute("data-testid").as_deref(), Some(route.test_id()));
    }
}

#[wasm_bindgen_test]
fn signup_button_enabled_only_when_passwords_match() {
    let page = render_page(&state(), &Route::SignUp).unwrap();
    assert!(submit_button(&page).disabled());

    type_into(&page, "#signup-password", "P4ssword");
    type_into(&page, "#signup-passwordRepeat", "P4ssword");
    assert!(!submit_button(&page).disabled());

    type_into(&page, "#signup-passwordRepeat", "N3wP4ss");
    assert!(submit_button(&page).disabled());
    let feedback = query(&page, ".invalid-feedback").unwrap();
    assert_eq!(feedback.text_content().as_deref(), Some("Password mismatch"));
}

#[wasm_bindgen_test]
fn signup_renders_in_french_after_language_change() {
    let store = MemoryStore::default();
    store.set_item("language", Language::French.code()).unwrap();
    let state = AppState::new(Rc::new(store));

    let page = render_page(&state, &Route::SignUp).unwrap();

    assert_eq!(query(&page, "h1").and_then(|h| h.text_content()).as_deref(), Some("S'inscrire"));
}

#[wasm_bindgen_test]
fn login_button_needs_both_fields() {
    let page = render_page(&state(), &Route::Login).unwrap();
    assert!(submit_button(&page).disabled());

    type_into(&page, "#login-email", "user100@mail.com");
    assert!(submit_button(&page).disabled());

    type_into(&page, "#login-password", "P4ssword");
    assert!(!submit_button(&page).disabled());
}

#[wasm_bindgen_test]
fn input_help_toggles_invalid_class() {
    let field = InputField::new("username", "Username", "text").unwrap();
    assert!(query(&field.group, ".invalid-feedback").is_none());

    field.set_help(Some("Username cannot be null")).unwrap();
    assert!(field.input.class_list().contains("is-invalid"));
    assert_eq!(
        query(&field.group, ".invalid-feedback").and_then(|s| s.text_content()).as_deref(),
        Some("Username cannot be null")
    );

    field.set_help(None).unwrap();
    assert!(!field.input.class_list().contains("is-invalid"));
    assert!(query(&field.group, ".invalid-feedback").is_none());
}

#[wasm_bindgen_test]
fn progress_button_shows_status_only_in_flight() {
    let button = ProgressButton::new("Login").unwrap();
    assert!(query(&button.button, "[role=status]").is_none());
    assert!(button.button.dyn_ref::<HtmlButtonElement>().unwrap().disabled());

    button.update(true, true).unwrap();
    assert!(query(&button.button, "[role=status]").is_some());

    button.update(false, false).unwrap();
    assert!(query(&button.button, "[role=status]").is_none());
}

#[wasm_bindgen_test]
fn navbar_offers_sign_up_and_login_when_logged_out() {
    let nav = render_navbar(&state()).unwrap();

    assert_eq!(link_texts(&nav), vec!["Home", "Sign Up", "Login"]);
}

#[wasm_bindgen_test]
fn navbar_offers_profile_and_logout_when_logged_in() {
    let state = state();
    state.login(5, "user5".to_string());

    let nav = render_navbar(&state).unwrap();

    assert_eq!(link_texts(&nav), vec!["Home", "My Profile", "Logout"]);
    assert!(query(&nav, "a[href='/user/5']").is_some());
}

#[wasm_bindgen_test]
fn logout_link_clears_memory_and_storage() {
    let store = MemoryStore::default();
    let state = AppState::new(Rc::new(store.clone()));
    state.login(5, "user5".to_string());
    assert!(store.get_item(AUTH_STORAGE_KEY).unwrap().is_some());

    let nav = render_navbar(&state).unwrap();
    let logout: HtmlElement = query(&nav, "li:last-child a")
        .unwrap()
        .dyn_into()
        .unwrap();
    logout.click();

    assert!(!state.auth.get_logged_in());
    assert_eq!(state.auth.get_id(), None);
    assert_eq!(store.get_item(AUTH_STORAGE_KEY).unwrap(), None);
}

#[wasm_bindgen_test]
fn browser_store_reads_back_what_it_writes() {
    let store = BrowserStore;

    store.set_item("user-portal-test", "value").unwrap();
    assert_eq!(store.get_item("user-portal-test").unwrap().as_deref(), Some("value"));

    store.remove_item("user-portal-test").unwrap();
    assert_eq!(store.get_item("user-portal-test").unwrap(), None);
}
