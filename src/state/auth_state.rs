// ============================================================================
// AUTH STATE - Estado de autenticación (espejo del registro en localStorage)
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::models::AuthSession;
use crate::utils::storage::{load_from_storage, remove_from_storage, save_to_storage};
use crate::utils::{KeyValueStore, AUTH_STORAGE_KEY};

/// Estado de autenticación
#[derive(Clone)]
pub struct AuthState {
    pub is_logged_in: Rc<RefCell<bool>>,
    pub id: Rc<RefCell<Option<i64>>>,
    pub username: Rc<RefCell<Option<String>>>,
    store: Rc<dyn KeyValueStore>,
}

impl AuthState {
    /// Crear estado vacío (sin sesión)
    pub fn new(store: Rc<dyn KeyValueStore>) -> Self {
        Self {
            is_logged_in: Rc::new(RefCell::new(false)),
            id: Rc::new(RefCell::new(None)),
            username: Rc::new(RefCell::new(None)),
            store,
        }
    }

    /// Crear estado restaurando el registro guardado, si existe
    pub fn restore(store: Rc<dyn KeyValueStore>) -> Self {
        let state = Self::new(store);

        match load_from_storage::<AuthSession>(state.store.as_ref(), AUTH_STORAGE_KEY) {
            Some(session) if session.is_logged_in && session.id.is_some() => {
                log::info!("💾 [AUTH] Sesión restaurada para {:?}", session.username);
                state.apply(&session);
            }
            Some(_) => log::info!("💾 [AUTH] Registro guardado sin sesión activa"),
            None => log::info!("💾 [AUTH] No hay sesión guardada"),
        }

        state
    }

    fn apply(&self, session: &AuthSession) {
        *self.is_logged_in.borrow_mut() = session.is_logged_in;
        *self.id.borrow_mut() = session.id;
        *self.username.borrow_mut() = session.username.clone();
    }

    /// Registro actual, tal como se persiste
    pub fn snapshot(&self) -> AuthSession {
        AuthSession {
            is_logged_in: self.get_logged_in(),
            id: self.get_id(),
            username: self.get_username(),
        }
    }

    /// Login exitoso: actualizar memoria y persistir
    pub fn login(&self, id: i64, username: String) {
        let session = AuthSession::logged_in(id, username);
        self.apply(&session);

        if let Err(e) = save_to_storage(self.store.as_ref(), AUTH_STORAGE_KEY, &session) {
            log::error!("❌ [AUTH] Error guardando sesión: {}", e);
        }
    }

    /// Logout - limpiar todo
    pub fn logout(&self) {
        self.apply(&AuthSession::default());

        if let Err(e) = remove_from_storage(self.store.as_ref(), AUTH_STORAGE_KEY) {
            log::error!("❌ [AUTH] Error limpiando sesión: {}", e);
        }
    }

    pub fn get_logged_in(&self) -> bool {
        *self.is_logged_in.borrow()
    }

    pub fn get_id(&self) -> Option<i64> {
        *self.id.borrow()
    }

    pub fn get_username(&self) -> Option<String> {
        self.username.borrow().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::MemoryStore;
    use pretty_assertions::assert_eq;

    fn store() -> MemoryStore {
        MemoryStore::default()
    }

    #[test]
    fn starts_logged_out_without_saved_record() {
        let state = AuthState::restore(Rc::new(store()));

        assert_eq!(state.snapshot(), AuthSession::default());
    }

    #[test]
    fn login_persists_the_record() {
        let backing = store();
        let state = AuthState::restore(Rc::new(backing.clone()));

        state.login(5, "user5".to_string());

        let saved = backing.get_item(AUTH_STORAGE_KEY).unwrap().unwrap();
        let saved: serde_json::Value = serde_json::from_str(&saved).unwrap();
        assert_eq!(saved, serde_json::json!({ "isLoggedIn": true, "id": 5, "username": "user5" }));
    }

    #[test]
    fn restore_reads_the_saved_record() {
        let backing = store();
        AuthState::restore(Rc::new(backing.clone())).login(5, "user5".to_string());

        let restored = AuthState::restore(Rc::new(backing));

        assert!(restored.get_logged_in());
        assert_eq!(restored.get_id(), Some(5));
        assert_eq!(restored.get_username().as_deref(), Some("user5"));
    }

    #[test]
    fn logout_clears_memory_and_storage() {
        let backing = store();
        let state = AuthState::restore(Rc::new(backing.clone()));
        state.login(5, "user5".to_string());

        state.logout();

        assert_eq!(state.snapshot(), AuthSession::default());
        assert_eq!(backing.get_item(AUTH_STORAGE_KEY).unwrap(), None);
    }

    #[test]
    fn malformed_record_is_treated_as_logged_out() {
        let backing = store();
        backing.set_item(AUTH_STORAGE_KEY, "{\"isLoggedIn\": \"yes\"").unwrap();

        let state = AuthState::restore(Rc::new(backing));

        assert!(!state.get_logged_in());
    }

    #[test]
    fn logged_in_flag_without_id_is_ignored() {
        let backing = store();
        backing.set_item(AUTH_STORAGE_KEY, r#"{"isLoggedIn": true}"#).unwrap();

        let state = AuthState::restore(Rc::new(backing));

        assert!(!state.get_logged_in());
    }
}
