use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

/// User record in the database. Counters and timestamps are nullable
/// columns with defaults, so a row written by another client may lack them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct User {
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

/// Columns supplied on sign-up; everything else comes from table defaults.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub name: String,
}

/// Partial profile edit. `None` leaves the column untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub image: Option<String>,
    pub github_username: Option<String>,
    pub bio: Option<String>,
}

impl ProfileUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.image.is_none() && self.github_username.is_none() && self.bio.is_none()
    }

    /// Applies the edit in place and stamps `updated_at`.
    pub fn apply(self, user: &mut User, now: OffsetDateTime) {
        if let Some(name) = self.name {
            user.name = name;
        }
        if let Some(image) = self.image {
            user.image = Some(image);
        }
        if let Some(github_username) = self.github_username {
            user.github_username = Some(github_username);
        }
        if let Some(bio) = self.bio {
            user.bio = Some(bio);
        }
        user.updated_at = Some(now);
    }
}
