// ============================================================================
// SIGN UP VIEWMODEL - Estado y lógica del formulario de registro
// ============================================================================
// Sin DOM: la vista lee el estado y se actualiza tras cada cambio.
// ============================================================================

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::error::ApiError;
use crate::models::{SignUpRequest, SignUpResponse};
use crate::services::ApiClient;
use crate::utils::{t, Language};

/// Campos del formulario
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SignUpField {
    Username,
    Email,
    Password,
    PasswordRepeat,
}

impl SignUpField {
    pub const ALL: [SignUpField; 4] = [
        SignUpField::Username,
        SignUpField::Email,
        SignUpField::Password,
        SignUpField::PasswordRepeat,
    ];

    /// Nombre del campo en `validationErrors`
    pub fn key(&self) -> &'static str {
        match self {
            SignUpField::Username => "username",
            SignUpField::Email => "email",
            SignUpField::Password => "password",
            SignUpField::PasswordRepeat => "passwordRepeat",
        }
    }

    /// Clave i18n de la etiqueta
    pub fn label_key(&self) -> &'static str {
        match self {
            SignUpField::Username => "username",
            SignUpField::Email => "email",
            SignUpField::Password => "password",
            SignUpField::PasswordRepeat => "password_repeat",
        }
    }

    pub fn input_type(&self) -> &'static str {
        match self {
            SignUpField::Username => "text",
            SignUpField::Email => "email",
            SignUpField::Password | SignUpField::PasswordRepeat => "password",
        }
    }
}

#[derive(Clone)]
pub struct SignUpViewModel {
    values: Rc<RefCell<HashMap<SignUpField, String>>>,
    errors: Rc<RefCell<HashMap<String, String>>>,
    api_progress: Rc<RefCell<bool>>,
    success: Rc<RefCell<bool>>,
    failure: Rc<RefCell<Option<String>>>,
    language: Language,
    api_client: ApiClient,
}

impl SignUpViewModel {
    pub fn new(language: Language) -> Self {
        Self {
            values: Rc::new(RefCell::new(HashMap::new())),
            errors: Rc::new(RefCell::new(HashMap::new())),
            api_progress: Rc::new(RefCell::new(false)),
            success: Rc::new(RefCell::new(false)),
            failure: Rc::new(RefCell::new(None)),
            language,
            api_client: ApiClient::new(language),
        }
    }

    pub fn value(&self, field: SignUpField) -> String {
        self.values.borrow().get(&field).cloned().unwrap_or_default()
    }

    /// Editar un campo limpia su error de validación (y solo el suyo)
    pub fn set_value(&self, field: SignUpField, value: String) {
        self.values.borrow_mut().insert(field, value);
        self.errors.borrow_mut().remove(field.key());
        *self.failure.borrow_mut() = None;
    }

    pub fn passwords_match(&self) -> bool {
        self.value(SignUpField::Password) == self.value(SignUpField::PasswordRepeat)
    }

    /// Mensaje a mostrar bajo el campo
    pub fn help(&self, field: SignUpField) -> Option<String> {
        if field == SignUpField::PasswordRepeat && !self.passwords_match() {
            return Some(t("password_mismatch", self.language));
        }
        self.errors.borrow().get(field.key()).cloned()
    }

    pub fn is_submit_disabled(&self) -> bool {
        let password = self.value(SignUpField::Password);
        password.is_empty() || !self.passwords_match() || self.is_in_progress()
    }

    pub fn is_in_progress(&self) -> bool {
        *self.api_progress.borrow()
    }

    pub fn is_success(&self) -> bool {
        *self.success.borrow()
    }

    pub fn failure(&self) -> Option<String> {
        self.failure.borrow().clone()
    }

    /// Marcar la request en curso; `None` si el botón está deshabilitado
    pub fn begin_submit(&self) -> Option<SignUpRequest> {
        if self.is_submit_disabled() {
            return None;
        }
        *self.api_progress.borrow_mut() = true;
        *self.failure.borrow_mut() = None;

        Some(SignUpRequest {
            username: self.value(SignUpField::Username),
            email: self.value(SignUpField::Email),
            password: self.value(SignUpField::Password),
        })
    }

    pub fn finish_submit(&self, result: Result<SignUpResponse, ApiError>) {
        *self.api_progress.borrow_mut() = false;

        match result {
            Ok(_) => {
                log::info!("✅ [SIGNUP] Usuario registrado");
                *self.success.borrow_mut() = true;
            }
            Err(ApiError::Validation(errors)) => {
                log::info!("⚠️ [SIGNUP] {} errores de validación", errors.len());
                *self.errors.borrow_mut() = errors;
            }
            Err(e) => {
                log::error!("❌ [SIGNUP] {}", e);
                *self.failure.borrow_mut() = Some(t("generic_error", self.language));
            }
        }
    }

    /// Enviar la request obtenida con `begin_submit`
    pub async fn send(&self, request: SignUpRequest) {
        let result = self.api_client.sign_up(&request).await;
        self.finish_submit(result);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn filled() -> SignUpViewModel {
        let vm = SignUpViewModel::new(Language::English);
        vm.set_value(SignUpField::Username, "user1".to_string());
        vm.set_value(SignUpField::Email, "user1@mail.com".to_string());
        vm.set_value(SignUpField::Password, "P4ssword".to_string());
        vm.set_value(SignUpField::PasswordRepeat, "P4ssword".to_string());
        vm
    }

    fn validation(pairs: &[(&str, &str)]) -> ApiError {
        ApiError::Validation(pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect())
    }

    #[test]
    fn button_is_disabled_initially() {
        let vm = SignUpViewModel::new(Language::English);

        assert!(vm.is_submit_disabled());
        assert_eq!(vm.begin_submit(), None);
    }

    #[test]
    fn button_enabled_when_passwords_match() {
        let vm = SignUpViewModel::new(Language::English);
        vm.set_value(SignUpField::Password, "P4ssword".to_string());
        vm.set_value(SignUpField::PasswordRepeat, "P4ssword".to_string());

        assert!(!vm.is_submit_disabled());
    }

    #[test]
    fn mismatch_disables_button_and_shows_message() {
        let vm = SignUpViewModel::new(Language::English);
        vm.set_value(SignUpField::Password, "P4ssword".to_string());
        vm.set_value(SignUpField::PasswordRepeat, "N3wP4ss".to_string());

        assert!(vm.is_submit_disabled());
        assert_eq!(vm.help(SignUpField::PasswordRepeat).as_deref(), Some("Password mismatch"));
    }

    #[test]
    fn begin_submit_builds_the_request_body() {
        let vm = filled();

        let request = vm.begin_submit().unwrap();

        assert_eq!(
            request,
            SignUpRequest {
                username: "user1".to_string(),
                email: "user1@mail.com".to_string(),
                password: "P4ssword".to_string(),
            }
        );
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            serde_json::json!({ "username": "user1", "email": "user1@mail.com", "password": "P4ssword" })
        );
    }

    #[test]
    fn only_one_request_while_in_flight() {
        let vm = filled();

        assert!(vm.begin_submit().is_some());
        assert!(vm.is_in_progress());
        assert!(vm.is_submit_disabled());
        assert_eq!(vm.begin_submit(), None);
    }

    #[test]
    fn success_marks_the_form_done() {
        let vm = filled();
        vm.begin_submit();

        vm.finish_submit(Ok(SignUpResponse::default()));

        assert!(vm.is_success());
        assert!(!vm.is_in_progress());
    }

    #[test]
    fn validation_errors_are_shown_per_field() {
        let vm = filled();
        vm.begin_submit();

        vm.finish_submit(Err(validation(&[("username", "Username cannot be null"), ("email", "E-mail cannot be null")])));

        assert!(!vm.is_in_progress());
        assert!(!vm.is_success());
        assert_eq!(vm.help(SignUpField::Username).as_deref(), Some("Username cannot be null"));
        assert_eq!(vm.help(SignUpField::Email).as_deref(), Some("E-mail cannot be null"));
        assert_eq!(vm.help(SignUpField::Password), None);
    }

    #[test]
    fn editing_a_field_clears_only_its_error() {
        let vm = filled();
        vm.begin_submit();
        vm.finish_submit(Err(validation(&[("username", "Username cannot be null"), ("email", "E-mail in use")])));

        vm.set_value(SignUpField::Username, "user1-updated".to_string());

        assert_eq!(vm.help(SignUpField::Username), None);
        assert_eq!(vm.help(SignUpField::Email).as_deref(), Some("E-mail in use"));
    }

    #[test]
    fn password_repeat_backend_error_shown_when_passwords_match() {
        let vm = filled();
        vm.begin_submit();
        vm.finish_submit(Err(validation(&[("passwordRepeat", "Must match")])));

        assert_eq!(vm.help(SignUpField::PasswordRepeat).as_deref(), Some("Must match"));
    }

    #[test]
    fn other_failures_show_generic_message() {
        let vm = filled();
        vm.begin_submit();

        vm.finish_submit(Err(ApiError::Network("offline".to_string())));

        assert_eq!(vm.failure().as_deref(), Some("Something went wrong, please try again"));
        assert!(!vm.is_submit_disabled());
    }

    #[test]
    fn mismatch_message_follows_the_language() {
        let vm = SignUpViewModel::new(Language::French);
        vm.set_value(SignUpField::Password, "a".to_string());

        assert_eq!(
            vm.help(SignUpField::PasswordRepeat).as_deref(),
            Some("Les mots de passe ne correspondent pas")
        );
    }
}
