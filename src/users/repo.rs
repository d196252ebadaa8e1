use async_trait::async_trait;
use sqlx::PgPool;
use thiserror::Error;
use uuid::Uuid;

use crate::users::{
    model::{NewUser, ProfileUpdate, User},
    schema::USERS,
};

/// Provider id stored on the account row that holds an email/password login.
pub const CREDENTIAL_PROVIDER: &str = "credential";

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("email already registered")]
    EmailTaken,
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

#[async_trait]
pub trait UserStore: Send + Sync {
    /// Inserts the user together with its credential account.
    async fn create_with_password(&self, user: NewUser, password_hash: &str) -> StoreResult<User>;

    async fn find_by_email(&self, email: &str) -> StoreResult<Option<User>>;

    async fn find_by_id(&self, id: Uuid) -> StoreResult<Option<User>>;

    async fn password_hash(&self, user_id: Uuid) -> StoreResult<Option<String>>;

    async fn update_profile(&self, id: Uuid, update: ProfileUpdate) -> StoreResult<Option<User>>;
}

#[derive(Clone)]
pub struct PgUserStore {
    db: PgPool,
}

impl PgUserStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

fn map_unique(e: sqlx::Error) -> StoreError {
    match &e {
        sqlx::Error::Database(db) if db.is_unique_violation() => StoreError::EmailTaken,
        _ => StoreError::Database(e),
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn create_with_password(&self, user: NewUser, password_hash: &str) -> StoreResult<User> {
        let mut tx = self.db.begin().await?;

        let created = sqlx::query_as::<_, User>(&format!(
            "INSERT INTO users (email, name) VALUES ($1, $2) RETURNING {}",
            USERS.select_list()
        ))
        .bind(&user.email)
        .bind(&user.name)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_unique)?;

        sqlx::query(
            r#"
            INSERT INTO accounts (user_id, provider_id, password_hash)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(created.id)
        .bind(CREDENTIAL_PROVIDER)
        .bind(password_hash)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(created)
    }

    async fn find_by_email(&self, email: &str) -> StoreResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {} FROM users WHERE email = $1",
            USERS.select_list()
        ))
        .bind(email)
        .fetch_optional(&self.db)
        .await?;
        Ok(user)
    }

    async fn find_by_id(&self, id: Uuid) -> StoreResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {} FROM users WHERE id = $1",
            USERS.select_list()
        ))
        .bind(id)
        .fetch_optional(&self.db)
        .await?;
        Ok(user)
    }

    async fn password_hash(&self, user_id: Uuid) -> StoreResult<Option<String>> {
        let hash = sqlx::query_scalar::<_, String>(
            r#"
            SELECT password_hash
            FROM accounts
            WHERE user_id = $1 AND provider_id = $2
            "#,
        )
        .bind(user_id)
        .bind(CREDENTIAL_PROVIDER)
        .fetch_optional(&self.db)
        .await?;
        Ok(hash)
    }

    async fn update_profile(&self, id: Uuid, update: ProfileUpdate) -> StoreResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(&format!(
            r#"
            UPDATE users
            SET name = COALESCE($2, name),
                image = COALESCE($3, image),
                github_username = COALESCE($4, github_username),
                bio = COALESCE($5, bio),
                updated_at = now()
            WHERE id = $1
            RETURNING {}
            "#,
            USERS.select_list()
        ))
        .bind(id)
        .bind(update.name)
        .bind(update.image)
        .bind(update.github_username)
        .bind(update.bio)
        .fetch_optional(&self.db)
        .await?;
        Ok(user)
    }
}
