// ============================================================================
// APP STATE - Estado global de la aplicación
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::config::CONFIG;
use crate::state::AuthState;
use crate::utils::{KeyValueStore, Language, LANGUAGE_STORAGE_KEY};

/// Estado global de la aplicación
#[derive(Clone)]
pub struct AppState {
    pub auth: AuthState,
    pub language: Rc<RefCell<Language>>,
    store: Rc<dyn KeyValueStore>,

    // Reactivity: callbacks para notificar cambios
    pub change_subscribers: Rc<RefCell<Vec<Rc<dyn Fn()>>>>,
}

impl AppState {
    /// Crear estado restaurando auth e idioma desde el store
    pub fn new(store: Rc<dyn KeyValueStore>) -> Self {
        let language = Self::load_language(store.as_ref());
        log::info!("🌐 [STATE] Idioma inicial: {}", language.code());

        Self {
            auth: AuthState::restore(store.clone()),
            language: Rc::new(RefCell::new(language)),
            store,
            change_subscribers: Rc::new(RefCell::new(Vec::new())),
        }
    }

    fn load_language(store: &dyn KeyValueStore) -> Language {
        match store.get_item(LANGUAGE_STORAGE_KEY) {
            Ok(Some(code)) => Language::from_code(&code),
            Ok(None) => CONFIG.language(),
            Err(e) => {
                log::warn!("⚠️ [STATE] No se pudo leer el idioma: {}", e);
                CONFIG.language()
            }
        }
    }

    pub fn get_language(&self) -> Language {
        *self.language.borrow()
    }

    /// Cambiar idioma, guardarlo y re-renderizar
    pub fn set_language(&self, lang: Language) {
        if self.get_language() == lang {
            return;
        }
        *self.language.borrow_mut() = lang;
        if let Err(e) = self.store.set_item(LANGUAGE_STORAGE_KEY, lang.code()) {
            log::warn!("⚠️ [STATE] No se pudo guardar el idioma: {}", e);
        }
        self.notify_subscribers();
    }

    /// Login exitoso
    pub fn login(&self, id: i64, username: String) {
        self.auth.login(id, username);
        self.notify_subscribers();
    }

    /// Logout (memoria + storage)
    pub fn logout(&self) {
        self.auth.logout();
        self.notify_subscribers();
    }

    /// Suscribirse a cambios de estado crítico
    pub fn subscribe_to_changes<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.change_subscribers.borrow_mut().push(Rc::new(callback));
    }

    /// Notificar a todos los subscribers de cambios
    pub fn notify_subscribers(&self) {
        // Clonar antes de llamar: un callback puede suscribir otro
        let subscribers: Vec<_> = self.change_subscribers.borrow().iter().cloned().collect();
        for callback in subscribers {
            callback();
        }
    }
}
