use serde::{Deserialize, Serialize};

use crate::utils::i18n::Language;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Prefijo del backend; vacío = mismo origen (`/api/1.0/...`)
    pub api_base_url: String,
    pub default_language: String,
    pub user_page_size: u32,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: String::new(),
            default_language: "en".to_string(),
            user_page_size: 3,
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        Self::from_values(
            option_env!("API_BASE_URL"),
            option_env!("DEFAULT_LANGUAGE"),
            option_env!("USER_PAGE_SIZE"),
            option_env!("LOG_LEVEL"),
        )
    }

    fn from_values(
        api_base_url: Option<&str>,
        default_language: Option<&str>,
        user_page_size: Option<&str>,
        log_level: Option<&str>,
    ) -> Self {
        let defaults = Self::default();
        Self {
            api_base_url: api_base_url
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_base_url),
            default_language: default_language
                .map(str::to_string)
                .unwrap_or(defaults.default_language),
            user_page_size: user_page_size
                .and_then(|size| size.parse().ok())
                .filter(|size| *size > 0)
                .unwrap_or(defaults.user_page_size),
            log_level: log_level.map(str::to_string).unwrap_or(defaults.log_level),
        }
    }

    /// URL completa de un endpoint de la API (`path` empieza por `/`)
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.api_base_url, path)
    }

    pub fn language(&self) -> Language {
        Language::from_code(&self.default_language)
    }

    /// Nivel de log para wasm-logger
    pub fn log_level(&self) -> log::Level {
        match self.log_level.to_lowercase().as_str() {
            "error" => log::Level::Error,
            "warn" => log::Level::Warn,
            "debug" => log::Level::Debug,
            "trace" => log::Level::Trace,
            _ => log::Level::Info,
        }
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_target_same_origin() {
        let config = AppConfig::from_values(None, None, None, None);

        assert_eq!(config.api_url("/api/1.0/users"), "/api/1.0/users");
        assert_eq!(config.user_page_size, 3);
        assert_eq!(config.language(), Language::English);
        assert_eq!(config.log_level(), log::Level::Info);
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let config = AppConfig::from_values(Some("http://localhost:8080/"), Some("fr"), Some("5"), Some("debug"));

        assert_eq!(config.api_url("/api/1.0/auth"), "http://localhost:8080/api/1.0/auth");
        assert_eq!(config.language(), Language::French);
        assert_eq!(config.user_page_size, 5);
        assert_eq!(config.log_level(), log::Level::Debug);
    }

    #[test]
    fn invalid_page_size_falls_back_to_default() {
        assert_eq!(AppConfig::from_values(None, None, Some("zero"), None).user_page_size, 3);
        assert_eq!(AppConfig::from_values(None, None, Some("0"), None).user_page_size, 3);
    }
}
