//! Account records and authentication payloads.

use serde::{Deserialize, Serialize};

/// Public profile of an account.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: u64,
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default, alias = "created_at", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    #[serde(default, alias = "user_id")]
    pub user_id: Option<u64>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterResponse {
    #[serde(alias = "user_id")]
    pub user_id: u64,
}

/// Answer of `GET /check-login`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginStatus {
    #[serde(alias = "is_logged_in")]
    pub is_logged_in: bool,
    #[serde(default, alias = "user_id")]
    pub user_id: Option<u64>,
}

/// Partial profile update; absent fields are left untouched.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateUserRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_user_optional_fields() {
        let user: User = serde_json::from_value(json!({"id": 3, "username": "lin"})).unwrap();
        assert_eq!(user.username, "lin");
        assert_eq!(user.email, None);

        let user: User = serde_json::from_value(
            json!({"id": 3, "username": "lin", "createdAt": "2024-05-01T08:00:00Z"}),
        )
        .unwrap();
        assert_eq!(user.created_at.as_deref(), Some("2024-05-01T08:00:00Z"));
    }

    #[test]
    fn test_update_omits_absent_fields() {
        let req = UpdateUserRequest {
            bio: Some("hello".into()),
            ..Default::default()
        };
        assert_eq!(serde_json::to_value(&req).unwrap(), json!({"bio": "hello"}));
    }

    #[test]
    fn test_login_response() {
        let res: LoginResponse =
            serde_json::from_value(json!({"token": "t0k", "userId": 9})).unwrap();
        assert_eq!(res.token, "t0k");
        assert_eq!(res.user_id, Some(9));
    }

    #[test]
    fn test_backend_shapes() {
        let user: User = serde_json::from_value(json!({
            "id": 3, "created_at": "2024-05-01T08:00:00Z", "updated_at": "2024-05-01T08:00:00Z",
            "username": "lin", "email": "", "avatar": "", "bio": "", "status": 1
        }))
        .unwrap();
        assert_eq!(user.created_at.as_deref(), Some("2024-05-01T08:00:00Z"));

        let res: LoginResponse =
            serde_json::from_value(json!({"token": "t0k", "user_id": 9})).unwrap();
        assert_eq!(res.user_id, Some(9));

        let res: RegisterResponse = serde_json::from_value(json!({"user_id": 10})).unwrap();
        assert_eq!(res.user_id, 10);
    }

    #[test]
    fn test_register_omits_missing_email() {
        let req = RegisterRequest {
            username: "lin".into(),
            password: "secret1".into(),
            email: None,
        };
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({"username": "lin", "password": "secret1"})
        );
    }
}
