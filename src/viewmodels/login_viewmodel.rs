// ============================================================================
// LOGIN VIEWMODEL - Estado y lógica del formulario de login
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::error::ApiError;
use crate::models::{LoginRequest, LoginResponse};
use crate::services::ApiClient;
use crate::utils::{t, Language};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoginField {
    Email,
    Password,
}

#[derive(Clone)]
pub struct LoginViewModel {
    email: Rc<RefCell<String>>,
    password: Rc<RefCell<String>>,
    api_progress: Rc<RefCell<bool>>,
    failure: Rc<RefCell<Option<String>>>,
    language: Language,
    api_client: ApiClient,
}

impl LoginViewModel {
    pub fn new(language: Language) -> Self {
        Self {
            email: Rc::new(RefCell::new(String::new())),
            password: Rc::new(RefCell::new(String::new())),
            api_progress: Rc::new(RefCell::new(false)),
            failure: Rc::new(RefCell::new(None)),
            language,
            api_client: ApiClient::new(language),
        }
    }

    /// Editar cualquier campo limpia el mensaje de fallo
    pub fn set_value(&self, field: LoginField, value: String) {
        match field {
            LoginField::Email => *self.email.borrow_mut() = value,
            LoginField::Password => *self.password.borrow_mut() = value,
        }
        *self.failure.borrow_mut() = None;
    }

    pub fn is_in_progress(&self) -> bool {
        *self.api_progress.borrow()
    }

    pub fn is_submit_disabled(&self) -> bool {
        self.email.borrow().is_empty() || self.password.borrow().is_empty() || self.is_in_progress()
    }

    pub fn failure(&self) -> Option<String> {
        self.failure.borrow().clone()
    }

    pub fn begin_submit(&self) -> Option<LoginRequest> {
        if self.is_submit_disabled() {
            return None;
        }
        *self.api_progress.borrow_mut() = true;
        *self.failure.borrow_mut() = None;

        Some(LoginRequest {
            email: self.email.borrow().clone(),
            password: self.password.borrow().clone(),
        })
    }

    /// Devuelve los datos del usuario si el login fue exitoso
    pub fn finish_submit(&self, result: Result<LoginResponse, ApiError>) -> Option<LoginResponse> {
        *self.api_progress.borrow_mut() = false;

        match result {
            Ok(response) => {
                log::info!("✅ [LOGIN] Login exitoso para {}", response.username);
                Some(response)
            }
            Err(ApiError::Unauthorized(_)) => {
                log::info!("⚠️ [LOGIN] Credenciales incorrectas");
                *self.failure.borrow_mut() = Some(t("authentication_failure", self.language));
                None
            }
            Err(e) => {
                log::error!("❌ [LOGIN] {}", e);
                let message = e
                    .message()
                    .map(str::to_string)
                    .unwrap_or_else(|| t("generic_error", self.language));
                *self.failure.borrow_mut() = Some(message);
                None
            }
        }
    }

    /// Enviar la request obtenida con `begin_submit`
    pub async fn send(&self, request: LoginRequest) -> Option<LoginResponse> {
        let result = self.api_client.login(&request).await;
        self.finish_submit(result)
    }
}
