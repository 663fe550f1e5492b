// ============================================================================
// API ERROR - Clasificación de respuestas fallidas del backend
// ============================================================================
// 400 -> errores de validación por campo
// 401 -> fallo de autenticación
// 404 -> recurso no encontrado (mensaje del backend tal cual)
// ============================================================================

use std::collections::HashMap;

use serde::Deserialize;
use thiserror::Error;

/// Cuerpo de error que devuelve el backend
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    validation_errors: Option<HashMap<String, String>>,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("validation failed on {} field(s)", .0.len())]
    Validation(HashMap<String, String>),

    #[error("authentication failed")]
    Unauthorized(Option<String>),

    #[error("{0}")]
    NotFound(String),

    #[error("HTTP {status}: {}", .message.as_deref().unwrap_or("unexpected response"))]
    Http { status: u16, message: Option<String> },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Parse error: {0}")]
    Parse(String),
}

impl ApiError {
    /// Construir el error a partir del status HTTP y el cuerpo (posiblemente vacío)
    pub fn from_response(status: u16, body: &str) -> Self {
        let parsed: ErrorBody = serde_json::from_str(body).unwrap_or_default();

        match status {
            400 => match parsed.validation_errors {
                Some(errors) => ApiError::Validation(errors),
                None => ApiError::Http {
                    status,
                    message: parsed.message,
                },
            },
            401 => ApiError::Unauthorized(parsed.message),
            404 => ApiError::NotFound(parsed.message.unwrap_or_else(|| "Not found".to_string())),
            _ => ApiError::Http {
                status,
                message: parsed.message,
            },
        }
    }

    /// Mensaje del backend, si lo hay
    pub fn message(&self) -> Option<&str> {
        match self {
            ApiError::Unauthorized(message) => message.as_deref(),
            ApiError::NotFound(message) => Some(message),
            ApiError::Http { message, .. } => message.as_deref(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn bad_request_with_validation_errors_maps_fields() {
        let body = r#"{"validationErrors":{"username":"Username cannot be null","email":"E-mail in use"}}"#;

        let error = ApiError::from_response(400, body);

        let mut expected = HashMap::new();
        expected.insert("username".to_string(), "Username cannot be null".to_string());
        expected.insert("email".to_string(), "E-mail in use".to_string());
        assert_eq!(error, ApiError::Validation(expected));
    }

    #[test]
    fn bad_request_without_validation_errors_is_generic() {
        let error = ApiError::from_response(400, r#"{"message":"Bad request"}"#);

        assert_eq!(
            error,
            ApiError::Http {
                status: 400,
                message: Some("Bad request".to_string())
            }
        );
    }

    #[test]
    fn unauthorized_tolerates_empty_body() {
        assert_eq!(ApiError::from_response(401, ""), ApiError::Unauthorized(None));
    }

    #[test]
    fn not_found_keeps_backend_message_verbatim() {
        let error = ApiError::from_response(404, r#"{"message":"User not found"}"#);

        assert_eq!(error.message(), Some("User not found"));
        assert_eq!(error.to_string(), "User not found");
    }

    #[test]
    fn server_error_is_http_variant() {
        let error = ApiError::from_response(500, "<html>oops</html>");

        assert_eq!(error, ApiError::Http { status: 500, message: None });
        assert_eq!(error.to_string(), "HTTP 500: unexpected response");
    }
}
