// ============================================================================
// USER LIST VIEWMODEL - Lista paginada de usuarios (Home)
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::config::CONFIG;
use crate::error::ApiError;
use crate::models::{User, UserPage};
use crate::services::ApiClient;
use crate::utils::{t, Language};

#[derive(Clone)]
pub struct UserListViewModel {
    page: Rc<RefCell<UserPage>>,
    pending: Rc<RefCell<bool>>,
    failure: Rc<RefCell<Option<String>>>,
    page_size: u32,
    language: Language,
    api_client: ApiClient,
}

impl UserListViewModel {
    pub fn new(language: Language) -> Self {
        Self::with_page_size(language, CONFIG.user_page_size)
    }

    pub fn with_page_size(language: Language, page_size: u32) -> Self {
        Self {
            page: Rc::new(RefCell::new(UserPage {
                size: page_size,
                ..UserPage::default()
            })),
            pending: Rc::new(RefCell::new(false)),
            failure: Rc::new(RefCell::new(None)),
            page_size,
            language,
            api_client: ApiClient::new(language),
        }
    }

    pub fn users(&self) -> Vec<User> {
        self.page.borrow().content.clone()
    }

    pub fn is_pending(&self) -> bool {
        *self.pending.borrow()
    }

    pub fn failure(&self) -> Option<String> {
        self.failure.borrow().clone()
    }

    /// Los controles de paginación se ocultan mientras hay una carga en curso
    pub fn show_previous(&self) -> bool {
        !self.is_pending() && self.page.borrow().has_previous()
    }

    pub fn show_next(&self) -> bool {
        !self.is_pending() && self.page.borrow().has_next()
    }

    /// Marcar la carga en curso; `None` si ya hay otra
    pub fn begin_load(&self, page: u32) -> Option<u32> {
        if self.is_pending() {
            return None;
        }
        *self.pending.borrow_mut() = true;
        Some(page)
    }

    pub fn finish_load(&self, result: Result<UserPage, ApiError>) {
        *self.pending.borrow_mut() = false;

        match result {
            Ok(page) => {
                log::info!("✅ [USERS] Página {} de {} ({} usuarios)", page.page + 1, page.total_pages, page.content.len());
                *self.failure.borrow_mut() = None;
                *self.page.borrow_mut() = page;
            }
            Err(e) => {
                log::error!("❌ [USERS] {}", e);
                *self.failure.borrow_mut() = Some(t("generic_error", self.language));
            }
        }
    }

    pub fn next_page(&self) -> u32 {
        self.page.borrow().page.saturating_add(1)
    }

    pub fn previous_page(&self) -> u32 {
        self.page.borrow().page.saturating_sub(1)
    }

    /// Cargar la página marcada con `begin_load`
    pub async fn fetch(&self, page: u32) {
        let result = self.api_client.load_users(page, self.page_size).await;
        self.finish_load(result);
    }
}
