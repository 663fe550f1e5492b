// ============================================================================
// STORAGE - Acceso clave/valor (localStorage en navegador, memoria en tests)
// ============================================================================

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use serde::{de::DeserializeOwned, Serialize};
use web_sys::{window, Storage};

/// Almacén clave/valor de strings
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, String>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), String>;
    fn remove_item(&self, key: &str) -> Result<(), String>;
}

/// `None` si no hay window o localStorage está bloqueado
pub fn get_local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

fn local_storage() -> Result<Storage, String> {
    get_local_storage().ok_or_else(|| "No se pudo acceder a localStorage".to_string())
}

/// localStorage del navegador
#[derive(Clone, Copy, Default)]
pub struct BrowserStore;

impl KeyValueStore for BrowserStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, String> {
        local_storage()?
            .get_item(key)
            .map_err(|_| "Error leyendo localStorage".to_string())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), String> {
        local_storage()?
            .set_item(key, value)
            .map_err(|_| "Error guardando en localStorage".to_string())
    }

    fn remove_item(&self, key: &str) -> Result<(), String> {
        local_storage()?
            .remove_item(key)
            .map_err(|_| "Error eliminando de localStorage".to_string())
    }
}

/// Almacén en memoria
#[derive(Clone, Default)]
pub struct MemoryStore {
    items: Rc<RefCell<HashMap<String, String>>>,
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, String> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), String> {
        self.items.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), String> {
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}

pub fn save_to_storage<T: Serialize>(store: &dyn KeyValueStore, key: &str, value: &T) -> Result<(), String> {
    let json = serde_json::to_string(value)
        .map_err(|e| format!("Error serializando datos: {}", e))?;
    store.set_item(key, &json)
}

/// `None` si no existe o si el JSON guardado no es válido
pub fn load_from_storage<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> Option<T> {
    let json = store.get_item(key).ok()??;
    match serde_json::from_str(&json) {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("⚠️ [STORAGE] Valor inválido en '{}': {}", key, e);
            None
        }
    }
}

pub fn remove_from_storage(store: &dyn KeyValueStore, key: &str) -> Result<(), String> {
    store.remove_item(key)
}
