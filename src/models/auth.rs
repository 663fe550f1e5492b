use serde::{Deserialize, Serialize};

/// Credenciales enviadas a `POST /api/1.0/auth`
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Respuesta de login exitoso
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct LoginResponse {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub token: Option<String>,
}

/// Registro de sesión persistido en localStorage
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct AuthSession {
    pub is_logged_in: bool,
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub username: Option<String>,
}

impl AuthSession {
    pub fn logged_in(id: i64, username: String) -> Self {
        Self {
            is_logged_in: true,
            id: Some(id),
            username: Some(username),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn auth_session_uses_camel_case_on_the_wire() {
        let json = serde_json::to_value(AuthSession::logged_in(5, "user5".to_string())).unwrap();

        assert_eq!(
            json,
            serde_json::json!({ "isLoggedIn": true, "id": 5, "username": "user5" })
        );
    }

    #[test]
    fn login_response_ignores_extra_fields() {
        let response: LoginResponse =
            serde_json::from_str(r#"{"id":5,"username":"user5","image":null,"extra":1}"#).unwrap();

        assert_eq!(response.id, 5);
        assert_eq!(response.username, "user5");
        assert_eq!(response.token, None);
    }
}
