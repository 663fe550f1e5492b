use serde::{Deserialize, Serialize};

/// Usuario tal como lo expone el backend
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub image: Option<String>,
}

/// Página de usuarios (`GET /api/1.0/users?page=&size=`)
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct UserPage {
    pub content: Vec<User>,
    pub page: u32,
    pub size: u32,
    pub total_pages: u32,
}

impl UserPage {
    pub fn has_previous(&self) -> bool {
        self.page != 0
    }

    pub fn has_next(&self) -> bool {
        self.total_pages > self.page.saturating_add(1)
    }
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct SignUpRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct SignUpResponse {
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct ActivationResponse {
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn page(page: u32, total_pages: u32) -> UserPage {
        UserPage {
            content: Vec::new(),
            page,
            size: 3,
            total_pages,
        }
    }

    #[test]
    fn user_page_deserializes_backend_shape() {
        let json = r#"{
            "content": [
                {"id": 4, "username": "user4", "email": "user4@mail.com", "image": null},
                {"id": 5, "username": "user5", "email": "user5@mail.com", "image": null}
            ],
            "page": 1,
            "size": 3,
            "totalPages": 9
        }"#;

        let parsed: UserPage = serde_json::from_str(json).unwrap();

        assert_eq!(parsed.content.len(), 2);
        assert_eq!(parsed.content[0].username, "user4");
        assert_eq!(parsed.total_pages, 9);
    }

    #[test]
    fn first_page_has_no_previous() {
        assert!(!page(0, 3).has_previous());
        assert!(page(0, 3).has_next());
    }

    #[test]
    fn last_page_has_no_next() {
        assert!(page(2, 3).has_previous());
        assert!(!page(2, 3).has_next());
    }

    #[test]
    fn empty_listing_has_no_paging() {
        let empty = page(0, 0);
        assert!(!empty.has_previous());
        assert!(!empty.has_next());
    }

    #[test]
    fn last_representable_page_has_no_next() {
        assert!(!page(u32::MAX, u32::MAX).has_next());
        assert!(page(u32::MAX, u32::MAX).has_previous());
    }
}
