use std::collections::HashMap;

use async_trait::async_trait;
use time::OffsetDateTime;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::users::{
    model::{NewUser, ProfileUpdate, User},
    repo::{StoreError, StoreResult, UserStore},
};

struct Entry {
    user: User,
    password_hash: String,
}

/// Process-local store with the same uniqueness rules as the Postgres one.
#[derive(Default)]
pub struct MemoryUserStore {
    entries: RwLock<HashMap<Uuid, Entry>>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn create_with_password(&self, user: NewUser, password_hash: &str) -> StoreResult<User> {
        let mut entries = self.entries.write().await;
        if entries.values().any(|e| e.user.email == user.email) {
            return Err(StoreError::EmailTaken);
        }

        let now = OffsetDateTime::now_utc();
        let created = User {
            id: Uuid::new_v4(),
            email: user.email,
            name: user.name,
            image: None,
            github_username: None,
            bio: None,
            reputation: Some(0),
            level: Some(1),
            created_at: Some(now),
            updated_at: Some(now),
        };
        entries.insert(
            created.id,
            Entry {
                user: created.clone(),
                password_hash: password_hash.to_string(),
            },
        );
        Ok(created)
    }

    async fn find_by_email(&self, email: &str) -> StoreResult<Option<User>> {
        let entries = self.entries.read().await;
        Ok(entries
            .values()
            .find(|e| e.user.email == email)
            .map(|e| e.user.clone()))
    }

    async fn find_by_id(&self, id: Uuid) -> StoreResult<Option<User>> {
        Ok(self.entries.read().await.get(&id).map(|e| e.user.clone()))
    }

    async fn password_hash(&self, user_id: Uuid) -> StoreResult<Option<String>> {
        Ok(self
            .entries
            .read()
            .await
            .get(&user_id)
            .map(|e| e.password_hash.clone()))
    }

    async fn update_profile(&self, id: Uuid, update: ProfileUpdate) -> StoreResult<Option<User>> {
        let mut entries = self.entries.write().await;
        let Some(entry) = entries.get_mut(&id) else {
            return Ok(None);
        };
        update.apply(&mut entry.user, OffsetDateTime::now_utc());
        Ok(Some(entry.user.clone()))
    }
}
