/// Prefijo de todos los endpoints REST
pub const API_PREFIX: &str = "/api/1.0";

/// Clave del registro de sesión en localStorage
pub const AUTH_STORAGE_KEY: &str = "auth";

/// Clave del idioma elegido en localStorage
pub const LANGUAGE_STORAGE_KEY: &str = "language";

/// ID del elemento raíz donde se monta la app
pub const ROOT_ELEMENT_ID: &str = "app";
