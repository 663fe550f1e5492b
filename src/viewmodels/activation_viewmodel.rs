// ============================================================================
// ACTIVATION VIEWMODEL - Activación de cuenta (`/activate/:token`)
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::error::ApiError;
use crate::models::ActivationResponse;
use crate::services::ApiClient;
use crate::utils::{t, Language};
use crate::viewmodels::LoadState;

#[derive(Clone)]
pub struct ActivationViewModel {
    token: String,
    state: Rc<RefCell<LoadState<String>>>,
    language: Language,
    api_client: ApiClient,
}

impl ActivationViewModel {
    pub fn new(token: String, language: Language) -> Self {
        Self {
            token,
            state: Rc::new(RefCell::new(LoadState::Loading)),
            language,
            api_client: ApiClient::new(language),
        }
    }

    /// `Loaded` lleva el mensaje de éxito
    pub fn state(&self) -> LoadState<String> {
        self.state.borrow().clone()
    }

    pub fn finish_activation(&self, result: Result<ActivationResponse, ApiError>) {
        let next = match result {
            Ok(_) => {
                log::info!("✅ [ACTIVATION] Cuenta activada");
                LoadState::Loaded(t("account_activation_success", self.language))
            }
            Err(e) => {
                log::warn!("⚠️ [ACTIVATION] Falló la activación: {}", e);
                LoadState::Failed(t("account_activation_failure", self.language))
            }
        };
        *self.state.borrow_mut() = next;
    }

    pub async fn activate(&self) {
        *self.state.borrow_mut() = LoadState::Loading;
        let result = self.api_client.activate(&self.token).await;
        self.finish_activation(result);
    }
}
