use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Role {
    pub id: i64,
    pub name: String,
    pub guard_name: String,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub email_verified_at: Option<String>,
    pub created_at: String,
    pub updated_at: String,
    #[serde(default)]
    pub roles: Vec<Role>,
}

/// `POST /login` response: the bearer token plus the authenticated user and
/// their role names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: User,
    #[serde(default)]
    pub role: Vec<String>,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogoutResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_response_parses_with_roles() {
        let raw = r#"{
            "token": "12|h9sK3...",
            "user": {
                "id": 4,
                "name": "Ana Quispe",
                "email": "ana@example.com",
                "email_verified_at": null,
                "created_at": "2026-01-02T08:00:00",
                "updated_at": "2026-01-02T08:00:00",
                "roles": [{
                    "id": 2,
                    "name": "applicant",
                    "guard_name": "api",
                    "created_at": "2025-11-01T00:00:00",
                    "updated_at": "2025-11-01T00:00:00"
                }]
            },
            "role": ["applicant"],
            "message": "Login successful"
        }"#;
        let response: LoginResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(response.user.id, 4);
        assert_eq!(response.role, vec!["applicant".to_string()]);
    }
}
