use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::users::User;

/// Request body for email sign-up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignUpEmailRequest {
    pub email: String,
    pub name: String,
    pub password: String,
}

/// Request body for email sign-in.
#[derive(Debug, Deserialize)]
pub struct SignInEmailRequest {
    pub email: String,
    pub password: String,
}

/// Returned by sign-up and sign-in: the session and who it belongs to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    #[serde(with = "time::serde::rfc3339")]
    pub expires_at: OffsetDateTime,
    pub user: PublicUser,
}

/// Profile fields returned to the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicUser {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub image: Option<String>,
    pub github_username: Option<String>,
    pub bio: Option<String>,
    pub reputation: Option<i32>,
    pub level: Option<i32>,
    #[serde(with = "time::serde::rfc3339::option")]
    pub created_at: Option<OffsetDateTime>,
    #[serde(with = "time::serde::rfc3339::option")]
    pub updated_at: Option<OffsetDateTime>,
}

impl From<User> for PublicUser {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            email: u.email,
            name: u.name,
            image: u.image,
            github_username: u.github_username,
            bio: u.bio,
            reputation: u.reputation,
            level: u.level,
            created_at: u.created_at,
            updated_at: u.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_response_wire_shape() {
        let at = time::macros::datetime!(2025-01-02 03:04:05 UTC);
        let res = AuthResponse {
            token: "tok".into(),
            expires_at: at,
            user: PublicUser {
                id: Uuid::new_v4(),
                email: "test@example.com".into(),
                name: "Test".into(),
                image: None,
                github_username: Some("octocat".into()),
                bio: None,
                reputation: Some(0),
                level: Some(1),
                created_at: Some(at),
                updated_at: None,
            },
        };

        let json = serde_json::to_value(&res).unwrap();
        assert_eq!(json["token"], "tok");
        assert_eq!(json["expires_at"], "2025-01-02T03:04:05Z");
        assert_eq!(json["user"]["github_username"], "octocat");
        assert_eq!(json["user"]["level"], 1);
        assert_eq!(json["user"]["created_at"], "2025-01-02T03:04:05Z");
        assert!(json["user"]["updated_at"].is_null());

        let back: AuthResponse = serde_json::from_value(json).unwrap();
        assert_eq!(back.user, res.user);
    }
}
