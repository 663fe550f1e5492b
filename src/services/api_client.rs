// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// NO tiene lógica de negocio, solo hace requests HTTP.
// Cada request lleva el idioma activo en `Accept-Language`.
// ============================================================================

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use crate::config::CONFIG;
use crate::error::ApiError;
use crate::models::{
    ActivationResponse, LoginRequest, LoginResponse, SignUpRequest, SignUpResponse, User, UserPage,
};
use crate::utils::{Language, API_PREFIX};

/// Cliente API - SOLO comunicación HTTP (stateless)
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    language: Language,
}

impl ApiClient {
    pub fn new(language: Language) -> Self {
        Self {
            base_url: CONFIG.api_url(API_PREFIX),
            language,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn with_language(&self, builder: RequestBuilder) -> RequestBuilder {
        builder.header("Accept-Language", self.language.code())
    }

    /// Registrar usuario
    pub async fn sign_up(&self, request: &SignUpRequest) -> Result<SignUpResponse, ApiError> {
        log::info!("📝 [API] Registrando usuario: {}", request.username);

        let response = self
            .with_language(Request::post(&self.url("/users")))
            .json(request)
            .map_err(|e| ApiError::Parse(format!("Serialization error: {}", e)))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        read_response(response).await
    }

    /// Activar cuenta con el token recibido por e-mail
    pub async fn activate(&self, token: &str) -> Result<ActivationResponse, ApiError> {
        log::info!("🔑 [API] Activando cuenta");

        let url = self.url(&format!("/users/token/{}", encode_segment(token)));
        let response = self
            .with_language(Request::get(&url))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        read_response(response).await
    }

    /// Login
    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        log::info!("🔐 [API] Login para: {}", request.email);

        let response = self
            .with_language(Request::post(&self.url("/auth")))
            .json(request)
            .map_err(|e| ApiError::Parse(format!("Serialization error: {}", e)))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        read_response(response).await
    }

    /// Página de usuarios
    pub async fn load_users(&self, page: u32, size: u32) -> Result<UserPage, ApiError> {
        log::info!("👥 [API] Cargando usuarios (page={}, size={})", page, size);

        let page = page.to_string();
        let size = size.to_string();
        let response = self
            .with_language(Request::get(&self.url("/users")))
            .query([("page", page.as_str()), ("size", size.as_str())])
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        read_response(response).await
    }

    /// Detalle de un usuario
    pub async fn get_user(&self, id: &str) -> Result<User, ApiError> {
        log::info!("👤 [API] Cargando usuario {}", id);

        let url = self.url(&format!("/users/{}", encode_segment(id)));
        let response = self
            .with_language(Request::get(&url))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        read_response(response).await
    }
}

fn encode_segment(segment: &str) -> String {
    js_sys::encode_uri_component(segment).into()
}

/// Convertir la respuesta en el tipo esperado o en `ApiError`
async fn read_response<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let body = response.text().await.map_err(|e| e.to_string());
    let result = decode_response(response.status(), response.ok(), body);
    if let Err(e) = &result {
        log::warn!("⚠️ [API] {} -> {}", response.url(), e);
    }
    result
}

/// Un cuerpo que no se pudo leer nunca cuenta como éxito
fn decode_response<T: DeserializeOwned>(status: u16, ok: bool, body: Result<String, String>) -> Result<T, ApiError> {
    let body = body.map_err(|e| ApiError::Network(format!("Error leyendo respuesta: {}", e)))?;
    if !ok {
        return Err(ApiError::from_response(status, &body));
    }
    parse_body(&body)
}

fn parse_body<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    // 200 sin cuerpo (p.ej. signup) se trata como objeto vacío
    let body = if body.trim().is_empty() { "{}" } else { body };
    serde_json::from_str(body).map_err(|e| ApiError::Parse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_success_body_parses_as_empty_object() {
        let parsed: SignUpResponse = parse_body("").unwrap();

        assert_eq!(parsed, SignUpResponse::default());
    }

    #[test]
    fn user_body_parses() {
        let user: User = parse_body(r#"{"id":1,"username":"user1","email":"user1@mail.com","image":null}"#).unwrap();

        assert_eq!(user.username, "user1");
    }

    #[test]
    fn unexpected_body_is_a_parse_error() {
        let result: Result<User, _> = parse_body("[]");

        assert!(matches!(result, Err(ApiError::Parse(_))));
    }

    #[test]
    fn unreadable_success_body_is_a_network_error() {
        let result: Result<SignUpResponse, _> = decode_response(200, true, Err("stream aborted".to_string()));

        assert!(matches!(result, Err(ApiError::Network(_))));
    }

    #[test]
    fn failed_status_is_classified_from_the_body() {
        let result: Result<User, _> =
            decode_response(404, false, Ok(r#"{"message":"User not found"}"#.to_string()));

        assert!(matches!(result, Err(ApiError::NotFound(m)) if m == "User not found"));
    }

    #[test]
    fn endpoints_live_under_the_api_prefix() {
        let client = ApiClient::new(Language::English);

        assert_eq!(client.url("/users"), CONFIG.api_url("/api/1.0/users"));
    }
}
