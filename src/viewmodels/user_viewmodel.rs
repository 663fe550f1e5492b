// ============================================================================
// USER VIEWMODEL - Detalle de un usuario (`/user/:id`)
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::error::ApiError;
use crate::models::User;
use crate::services::ApiClient;
use crate::utils::{t, Language};
use crate::viewmodels::LoadState;

#[derive(Clone)]
pub struct UserViewModel {
    id: String,
    state: Rc<RefCell<LoadState<User>>>,
    language: Language,
    api_client: ApiClient,
}

impl UserViewModel {
    pub fn new(id: String, language: Language) -> Self {
        Self {
            id,
            state: Rc::new(RefCell::new(LoadState::Loading)),
            language,
            api_client: ApiClient::new(language),
        }
    }

    pub fn state(&self) -> LoadState<User> {
        self.state.borrow().clone()
    }

    /// El mensaje del backend se muestra tal cual (p.ej. "User not found")
    pub fn finish_load(&self, result: Result<User, ApiError>) {
        let next = match result {
            Ok(user) => LoadState::Loaded(user),
            Err(e) => {
                log::warn!("⚠️ [USER] No se pudo cargar el usuario {}: {}", self.id, e);
                let message = e
                    .message()
                    .map(str::to_string)
                    .unwrap_or_else(|| t("generic_error", self.language));
                LoadState::Failed(message)
            }
        };
        *self.state.borrow_mut() = next;
    }

    pub async fn load(&self) {
        *self.state.borrow_mut() = LoadState::Loading;
        let result = self.api_client.get_user(&self.id).await;
        self.finish_load(result);
    }
}
